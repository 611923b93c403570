//! Control flow instructions: JMP, JSR, RTS, BRK, RTI, NOP, plus the XXX
//! handler for illegal opcodes.

use crate::addressing::AddressInfo;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;

/// JMP - Jump
pub(crate) fn jmp<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    cpu.pc = info.address;
    false
}

/// JSR - Jump to Subroutine
///
/// Pushes the address of the last byte of the JSR instruction; RTS adds one
/// when returning. PC has already been advanced past the instruction here.
pub(crate) fn jsr<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push16(return_addr);
    cpu.pc = info.address;
    false
}

/// RTS - Return from Subroutine
pub(crate) fn rts<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    cpu.pc = cpu.pop16().wrapping_add(1);
    false
}

/// BRK - Force Interrupt
///
/// Pushes PC past a padding byte and the status with the Break flag set,
/// then jumps through the IRQ vector with interrupts disabled.
pub(crate) fn brk<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push16(return_addr);
    cpu.push(cpu.status() | Flag::B as u8);
    cpu.set_flag(Flag::I, true);
    cpu.pc = cpu.irq_vector();
    false
}

/// RTI - Return from Interrupt
///
/// The Break flag only exists in stack copies of the status register; it is
/// cleared on the way back in, and the unused bit always reads as set.
pub(crate) fn rti<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let status = cpu.pop();
    cpu.set_status((status & !(Flag::B as u8)) | Flag::U as u8);
    cpu.pc = cpu.pop16();
    false
}

/// NOP - No Operation
pub(crate) fn nop<B: MemoryBus>(_cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    false
}

/// XXX captures illegal opcodes, executed as one-byte no-ops.
pub(crate) fn xxx<B: MemoryBus>(_cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    false
}
