//! Shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! Each works either on the accumulator or on memory as a
//! read-modify-write, depending on the addressing mode.

use crate::addressing::AddressInfo;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;

fn read_operand<B: MemoryBus>(cpu: &Cpu<B>, info: AddressInfo) -> u8 {
    if info.accumulator {
        cpu.a()
    } else {
        cpu.read(info.address)
    }
}

fn write_operand<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo, value: u8) {
    if info.accumulator {
        cpu.a = value;
    } else {
        cpu.write(info.address, value);
    }
}

/// ASL - Arithmetic Shift Left
pub(crate) fn asl<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = read_operand(cpu, info);
    let result = value << 1;
    cpu.set_flag(Flag::C, value & 0x80 != 0);
    cpu.set_zn(result);
    write_operand(cpu, info, result);
    false
}

/// LSR - Logical Shift Right
pub(crate) fn lsr<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = read_operand(cpu, info);
    let result = value >> 1;
    cpu.set_flag(Flag::C, value & 0x01 != 0);
    cpu.set_zn(result);
    write_operand(cpu, info, result);
    false
}

/// ROL - Rotate Left through Carry
pub(crate) fn rol<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = read_operand(cpu, info);
    let carry_in = if cpu.flag(Flag::C) { 1 } else { 0 };
    let result = (value << 1) | carry_in;
    cpu.set_flag(Flag::C, value & 0x80 != 0);
    cpu.set_zn(result);
    write_operand(cpu, info, result);
    false
}

/// ROR - Rotate Right through Carry
pub(crate) fn ror<B: MemoryBus>(cpu: &mut Cpu<B>, info: AddressInfo) -> bool {
    let value = read_operand(cpu, info);
    let carry_in = if cpu.flag(Flag::C) { 0x80 } else { 0 };
    let result = (value >> 1) | carry_in;
    cpu.set_flag(Flag::C, value & 0x01 != 0);
    cpu.set_zn(result);
    write_operand(cpu, info, result);
    false
}
