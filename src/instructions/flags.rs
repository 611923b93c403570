//! Status flag instructions: CLC, SEC, CLI, SEI, CLD, SED, CLV.

use crate::addressing::AddressInfo;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;

/// CLC - Clear Carry Flag
pub(crate) fn clc<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::C, false);
    false
}

/// SEC - Set Carry Flag
pub(crate) fn sec<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::C, true);
    false
}

/// CLI - Clear Interrupt Disable
pub(crate) fn cli<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::I, false);
    false
}

/// SEI - Set Interrupt Disable
pub(crate) fn sei<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::I, true);
    false
}

/// CLD - Clear Decimal Mode
pub(crate) fn cld<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::D, false);
    false
}

/// SED - Set Decimal Mode
pub(crate) fn sed<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::D, true);
    false
}

/// CLV - Clear Overflow Flag
pub(crate) fn clv<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.set_flag(Flag::V, false);
    false
}
