//! Register transfer instructions: TAX, TAY, TXA, TYA, TSX, TXS.

use crate::addressing::AddressInfo;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// TAX - Transfer Accumulator to X
pub(crate) fn tax<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    false
}

/// TAY - Transfer Accumulator to Y
pub(crate) fn tay<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    false
}

/// TXA - Transfer X to Accumulator
pub(crate) fn txa<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    false
}

/// TYA - Transfer Y to Accumulator
pub(crate) fn tya<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    false
}

/// TSX - Transfer Stack Pointer to X
pub(crate) fn tsx<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    false
}

/// TXS - Transfer X to Stack Pointer
///
/// The only transfer that does not touch the Z and N flags.
pub(crate) fn txs<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.sp = cpu.x;
    false
}
