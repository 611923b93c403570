//! # Disassembler
//!
//! Decodes operations out of memory into a printable representation, used
//! by the TUI instruction listing and handy for debugging.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::{Operation, OPERATIONS};

/// The disassembled representation of a single operation.
#[derive(Debug, Clone)]
pub struct DisassembledOperation {
    /// The raw instruction bytes, opcode first.
    pub bytes: Vec<u8>,
    /// Operand bytes folded into a little-endian value (0 when none).
    pub operand: u16,
    /// The decoding table entry for the opcode.
    pub operation: Operation,
    /// Human-readable form, e.g. `LDA #$42 {IMM}`.
    pub text: String,
}

impl<B: MemoryBus> Cpu<B> {
    /// Decodes the operation at the given address.
    pub fn disassemble(&self, addr: u16) -> DisassembledOperation {
        let opcode = self.read(addr);
        let operation = OPERATIONS[opcode as usize];

        let mut bytes = Vec::with_capacity(operation.size as usize);
        for i in 0..operation.size as u16 {
            bytes.push(self.read(addr.wrapping_add(i)));
        }

        let mut operand: u16 = 0;
        for (i, byte) in bytes.iter().skip(1).enumerate() {
            operand |= (*byte as u16) << (8 * i);
        }

        let name = operation.mnemonic.name();
        let mode = operation.mode.name();
        let text = match operation.mode {
            AddressingMode::Accumulator => format!("{name} A {{{mode}}}"),
            AddressingMode::Immediate => format!("{name} #${:02X} {{{mode}}}", operand as u8),
            AddressingMode::Absolute => format!("{name} ${operand:04X} {{{mode}}}"),
            AddressingMode::AbsoluteX => format!("{name} ${operand:04X},X {{{mode}}}"),
            AddressingMode::AbsoluteY => format!("{name} ${operand:04X},Y {{{mode}}}"),
            AddressingMode::ZeroPage => format!("{name} ${:02X} {{{mode}}}", operand as u8),
            AddressingMode::ZeroPageX => format!("{name} ${:02X},X {{{mode}}}", operand as u8),
            AddressingMode::ZeroPageY => format!("{name} ${:02X},Y {{{mode}}}", operand as u8),
            AddressingMode::Implied => format!("{name} {{{mode}}}"),
            AddressingMode::Relative => {
                // Show the resolved branch target next to the raw offset
                let offset = operand as u8;
                let target = addr
                    .wrapping_add(operation.size as u16)
                    .wrapping_add(offset as i8 as u16);
                format!("{name} ${offset:02X} [${target:04X}] {{{mode}}}")
            }
            AddressingMode::Indirect => format!("{name} (${operand:04X}) {{{mode}}}"),
            AddressingMode::IndexedIndirect => {
                format!("{name} (${:02X},X) {{{mode}}}", operand as u8)
            }
            AddressingMode::IndirectIndexed => {
                format!("{name} (${:02X}),Y {{{mode}}}", operand as u8)
            }
        };

        DisassembledOperation {
            bytes,
            operand,
            operation,
            text,
        }
    }
}
