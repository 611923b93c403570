//! Increment and decrement instructions: INC, DEC, INX, INY, DEX, DEY.

use crate::addressing::AddressInfo;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// INC - Increment Memory
pub(crate) fn inc<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address).wrapping_add(1);
    cpu.write(info.address, value);
    cpu.set_zn(value);
    false
}

/// DEC - Decrement Memory
pub(crate) fn dec<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address).wrapping_sub(1);
    cpu.write(info.address, value);
    cpu.set_zn(value);
    false
}

/// INX - Increment X Register
pub(crate) fn inx<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    false
}

/// INY - Increment Y Register
pub(crate) fn iny<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    false
}

/// DEX - Decrement X Register
pub(crate) fn dex<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    false
}

/// DEY - Decrement Y Register
pub(crate) fn dey<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    false
}
