//! Conditional branch instructions: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! A taken branch costs one extra cycle, and a second when the target lies
//! on a different page than the following instruction. Branches account for
//! these themselves and never take the addressing-mode page penalty.

use crate::addressing::AddressInfo;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;

fn branch_if<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo, condition: bool) -> bool {
    if condition {
        cpu.add_branch_cycles(info);
        cpu.pc = info.address;
    }
    false
}

/// BCC - Branch if Carry Clear
pub(crate) fn bcc<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Flag::C);
    branch_if(cpu, info, taken)
}

/// BCS - Branch if Carry Set
pub(crate) fn bcs<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Flag::C);
    branch_if(cpu, info, taken)
}

/// BEQ - Branch if Equal (zero set)
pub(crate) fn beq<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Flag::Z);
    branch_if(cpu, info, taken)
}

/// BNE - Branch if Not Equal (zero clear)
pub(crate) fn bne<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Flag::Z);
    branch_if(cpu, info, taken)
}

/// BMI - Branch if Minus (negative set)
pub(crate) fn bmi<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Flag::N);
    branch_if(cpu, info, taken)
}

/// BPL - Branch if Plus (negative clear)
pub(crate) fn bpl<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Flag::N);
    branch_if(cpu, info, taken)
}

/// BVC - Branch if Overflow Clear
pub(crate) fn bvc<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Flag::V);
    branch_if(cpu, info, taken)
}

/// BVS - Branch if Overflow Set
pub(crate) fn bvs<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Flag::V);
    branch_if(cpu, info, taken)
}
