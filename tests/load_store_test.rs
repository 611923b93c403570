//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX,
//! STY) across their addressing modes, including flag updates and cycle
//! counts with page-crossing penalties.

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
fn lda_immediate_loads_and_sets_no_flags() {
    let mut cpu = setup(&[0xA9, 0x42]); // LDA #$42
    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
}

#[test]
fn lda_sets_zero_flag() {
    let mut cpu = setup(&[0xA9, 0x00]);
    cpu.set_a(0xFF);
    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
}

#[test]
fn lda_sets_negative_flag() {
    let mut cpu = setup(&[0xA9, 0x80]);
    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag(Flag::N));
    assert!(!cpu.flag(Flag::Z));
}

#[test]
fn lda_zero_page() {
    let mut cpu = setup(&[0xA5, 0x42]); // LDA $42
    cpu.bus_mut().write(0x0042, 0x37);
    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 3);
}

#[test]
fn lda_absolute_x_pays_for_page_crossing() {
    // LDA $12FE,X with X=1 stays in page 0x12: 4 cycles
    let mut cpu = setup(&[0xBD, 0xFE, 0x12]);
    cpu.set_x(0x01);
    cpu.bus_mut().write(0x12FF, 0x11);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x11);

    // With X=2 the access crosses into page 0x13: 5 cycles
    let mut cpu = setup(&[0xBD, 0xFE, 0x12]);
    cpu.set_x(0x02);
    cpu.bus_mut().write(0x1300, 0x22);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn lda_indirect_indexed() {
    let mut cpu = setup(&[0xB1, 0x40]); // LDA ($40),Y
    cpu.bus_mut().write(0x0040, 0x00);
    cpu.bus_mut().write(0x0041, 0x20);
    cpu.bus_mut().write(0x2010, 0x99);
    cpu.set_y(0x10);
    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cycles, 5);
}

#[test]
fn ldx_immediate_and_zero_page_y() {
    let mut cpu = setup(&[0xA2, 0x7F, 0xB6, 0x10]); // LDX #$7F; LDX $10,Y
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x7F);

    cpu.set_y(0x05);
    cpu.bus_mut().write(0x0015, 0xF0);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.x(), 0xF0);
    assert!(cpu.flag(Flag::N));
}

#[test]
fn ldy_absolute() {
    let mut cpu = setup(&[0xAC, 0x00, 0x20]); // LDY $2000
    cpu.bus_mut().write(0x2000, 0x55);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.y(), 0x55);
}

#[test]
fn sta_zero_page() {
    let mut cpu = setup(&[0x85, 0x42]); // STA $42
    cpu.set_a(0x37);
    let cycles = cpu.step();

    assert_eq!(cpu.read(0x0042), 0x37);
    assert_eq!(cycles, 3);
}

#[test]
fn sta_absolute_x_has_fixed_cost() {
    // Stores never take the page-cross penalty; STA ABX is always 5
    let mut cpu = setup(&[0x9D, 0xFE, 0x12]);
    cpu.set_a(0xAA);
    cpu.set_x(0x02);
    let cycles = cpu.step();

    assert_eq!(cpu.read(0x1300), 0xAA);
    assert_eq!(cycles, 5);
}

#[test]
fn sta_does_not_touch_flags() {
    let mut cpu = setup(&[0x85, 0x42]);
    cpu.set_a(0x00);
    let status = cpu.status();
    cpu.step();
    assert_eq!(cpu.status(), status);
}

#[test]
fn stx_and_sty_store_their_registers() {
    let mut cpu = setup(&[0x8E, 0x00, 0x20, 0x8C, 0x01, 0x20]); // STX $2000; STY $2001
    cpu.set_x(0x12);
    cpu.set_y(0x34);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.read(0x2000), 0x12);
    assert_eq!(cpu.read(0x2001), 0x34);
}
