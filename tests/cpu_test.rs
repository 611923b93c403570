//! Tests for CPU construction, reset state, vectors, bus helpers and the
//! stack.

use emu6502::{Cpu, Flag, FlatMemory, MemoryBus};

fn setup_with_reset_vector(vector: u16) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, (vector & 0xFF) as u8);
    memory.write(0xFFFD, (vector >> 8) as u8);
    Cpu::new(memory)
}

#[test]
fn new_cpu_powers_up_in_reset_state() {
    let cpu = setup_with_reset_vector(0x1234);

    assert_eq!(cpu.a(), 0, "accumulator should be 0");
    assert_eq!(cpu.x(), 0, "X register should be 0");
    assert_eq!(cpu.y(), 0, "Y register should be 0");
    assert_eq!(cpu.sp(), 0xFD, "stack pointer should be 0xFD");
    assert_eq!(cpu.pc(), 0x1234, "PC should come from the reset vector");
    assert_eq!(cpu.status(), 0b0010_0100, "only U and I should be set");
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn reset_restores_initial_state() {
    let mut cpu = setup_with_reset_vector(0x8000);
    cpu.bus_mut().write(0x8000, 0xA9); // LDA #$FF
    cpu.bus_mut().write(0x8001, 0xFF);
    cpu.step();
    assert_eq!(cpu.a(), 0xFF);

    cpu.reset();
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.status(), 0x24);
}

#[test]
fn vectors_read_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);
    memory.write(0xFFFE, 0x78);
    memory.write(0xFFFF, 0x56);
    memory.write(0xFFFA, 0xBC);
    memory.write(0xFFFB, 0x9A);

    let cpu = Cpu::new(memory);
    assert_eq!(cpu.reset_vector(), 0x1234);
    assert_eq!(cpu.irq_vector(), 0x5678);
    assert_eq!(cpu.nmi_vector(), 0x9ABC);
}

#[test]
fn read16_is_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0x1234, 0xCD);
    memory.write(0x1235, 0xAB);

    let cpu = Cpu::new(memory);
    assert_eq!(cpu.read16(0x1234), 0xABCD);
}

#[test]
fn write16_round_trips() {
    let mut cpu = setup_with_reset_vector(0x8000);
    cpu.write16(0x2000, 0xBEEF);

    assert_eq!(cpu.read(0x2000), 0xEF);
    assert_eq!(cpu.read(0x2001), 0xBE);
    assert_eq!(cpu.read16(0x2000), 0xBEEF);
}

#[test]
fn get_and_set_flags() {
    let mut cpu = setup_with_reset_vector(0x8000);

    cpu.set_status(0b0000_0010);
    assert!(cpu.flag(Flag::Z), "zero flag should be set");
    assert!(!cpu.flag(Flag::V));

    cpu.set_status(0b0100_0000);
    assert!(cpu.flag(Flag::V), "overflow flag should be set");
    assert!(!cpu.flag(Flag::Z));

    cpu.set_status(0x00);
    cpu.set_flag(Flag::Z, true);
    cpu.set_flag(Flag::V, true);
    assert_eq!(cpu.status(), 0b0100_0010);

    cpu.set_status(0xFF);
    cpu.set_flag(Flag::Z, false);
    cpu.set_flag(Flag::V, false);
    assert_eq!(cpu.status(), 0b1011_1101);
}

#[test]
fn stack_lives_in_page_one_and_grows_down() {
    let mut cpu = setup_with_reset_vector(0x8000);

    cpu.push(0xAB);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.read(0x01FD), 0xAB);
    assert_eq!(cpu.pop(), 0xAB);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn stack_16_bit_round_trip() {
    let mut cpu = setup_with_reset_vector(0x8000);

    cpu.push16(0x1234);
    // Pushed high byte first so the little-endian value reads in order
    assert_eq!(cpu.read(0x01FD), 0x12);
    assert_eq!(cpu.read(0x01FC), 0x34);
    assert_eq!(cpu.pop16(), 0x1234);
}

#[test]
fn run_for_cycles_completes_whole_instructions() {
    let mut cpu = setup_with_reset_vector(0x8000);
    for addr in 0x8000..0x8020 {
        cpu.bus_mut().write(addr, 0xEA); // NOP, 2 cycles each
    }

    let consumed = cpu.run_for_cycles(5);
    assert_eq!(consumed, 6, "three NOPs complete the 5-cycle budget");
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn irq_respects_interrupt_disable() {
    let mut cpu = setup_with_reset_vector(0x8000);
    cpu.write16(0xFFFE, 0x4000);

    // I is set after reset, so the request is ignored
    cpu.irq();
    assert_eq!(cpu.pc(), 0x8000);

    cpu.set_flag(Flag::I, false);
    cpu.irq();
    assert_eq!(cpu.pc(), 0x4000);
    assert!(cpu.flag(Flag::I), "IRQ sets the interrupt disable flag");

    // Pushed status has the break flag cleared
    let pushed_status = cpu.read(0x01FB);
    assert_eq!(pushed_status & Flag::B as u8, 0);
}

#[test]
fn nmi_cannot_be_masked() {
    let mut cpu = setup_with_reset_vector(0x8000);
    cpu.write16(0xFFFA, 0x4321);

    assert!(cpu.flag(Flag::I));
    cpu.nmi();
    assert_eq!(cpu.pc(), 0x4321);

    // Return address went onto the stack
    assert_eq!(cpu.read(0x01FD), 0x80);
    assert_eq!(cpu.read(0x01FC), 0x00);
}
