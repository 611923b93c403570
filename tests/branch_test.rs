//! Tests for the conditional branch instructions, their cycle accounting
//! (extra cycle when taken, another when the target is on a different
//! page) and backward offsets.

use emu6502::{Cpu, Flag, FlatMemory, MemoryBus};

fn setup(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    for (i, byte) in program.iter().enumerate() {
        memory.write(0x8000 + i as u16, *byte);
    }
    Cpu::new(memory)
}

#[test]
fn bne_taken_jumps_and_costs_three_cycles() {
    let mut cpu = setup(&[0xD0, 0x10]); // BNE +$10 (zero clear after reset)
    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x8012);
    assert_eq!(cycles, 3);
}

#[test]
fn bne_not_taken_falls_through_in_two_cycles() {
    let mut cpu = setup(&[0xD0, 0x10]);
    cpu.set_flag(Flag::Z, true);
    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
}

#[test]
fn branch_to_another_page_costs_four_cycles() {
    let mut cpu = setup(&[0xD0, 0xFA]); // BNE -6, back into page 0x7F
    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x7FFC);
    assert_eq!(cycles, 4);
}

#[test]
fn beq_branches_on_zero() {
    let mut cpu = setup(&[0xF0, 0x04]);
    cpu.set_flag(Flag::Z, true);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn bcc_and_bcs_follow_the_carry() {
    let mut cpu = setup(&[0x90, 0x04]); // BCC +4
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);

    let mut cpu = setup(&[0xB0, 0x04]); // BCS +4
    cpu.set_flag(Flag::C, true);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);

    let mut cpu = setup(&[0xB0, 0x04]); // BCS not taken
    cpu.step();
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn bmi_and_bpl_follow_the_negative_flag() {
    let mut cpu = setup(&[0x30, 0x04]); // BMI +4
    cpu.set_flag(Flag::N, true);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);

    let mut cpu = setup(&[0x10, 0x04]); // BPL +4
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn bvc_and_bvs_follow_the_overflow_flag() {
    let mut cpu = setup(&[0x50, 0x04]); // BVC +4
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);

    let mut cpu = setup(&[0x70, 0x04]); // BVS +4
    cpu.set_flag(Flag::V, true);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn backward_branch_forms_a_countdown_loop() {
    // LDX #$03; DEX; BNE -3; NOP
    let mut cpu = setup(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xEA]);
    cpu.step(); // LDX

    // Three passes through DEX/BNE, the last one falling through
    for _ in 0..3 {
        cpu.step(); // DEX
        cpu.step(); // BNE
    }

    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.pc(), 0x8005);
}
