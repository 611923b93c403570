//! Load and store instructions: LDA, LDX, LDY, STA, STX, STY.

use crate::addressing::AddressInfo;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// LDA - Load Accumulator
pub(crate) fn lda<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address);
    cpu.a = value;
    cpu.set_zn(value);
    true
}

/// LDX - Load X Register
pub(crate) fn ldx<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address);
    cpu.x = value;
    cpu.set_zn(value);
    true
}

/// LDY - Load Y Register
pub(crate) fn ldy<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address);
    cpu.y = value;
    cpu.set_zn(value);
    true
}

/// STA - Store Accumulator
///
/// Stores never take the page-crossing penalty; their indexed forms have a
/// fixed cost already reflected in the operation table.
pub(crate) fn sta<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.a);
    false
}

/// STX - Store X Register
pub(crate) fn stx<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.x);
    false
}

/// STY - Store Y Register
pub(crate) fn sty<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.y);
    false
}
