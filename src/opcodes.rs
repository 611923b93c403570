//! # Operation Lookup Table
//!
//! The single source of truth for instruction decoding: a 256-entry table
//! mapping every opcode byte to its mnemonic, addressing mode, instruction
//! size, and base cycle cost.
//!
//! The table is arranged as the classic 16x16 opcode matrix: the low nibble
//! of the opcode selects the column, the high nibble the row. "Illegal"
//! opcodes are not implemented and are treated as 1-byte, 1-cycle no-ops.

use crate::addressing::AddressingMode;

/// The 56 official 6502 instructions, plus `Xxx` for illegal opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Illegal/undocumented opcode, executed as a no-op.
    Xxx,
}

impl Mnemonic {
    /// Three-letter instruction name as used in disassembly output.
    pub fn name(&self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC", Mnemonic::And => "AND", Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC", Mnemonic::Bcs => "BCS", Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT", Mnemonic::Bmi => "BMI", Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL", Mnemonic::Brk => "BRK", Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS", Mnemonic::Clc => "CLC", Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI", Mnemonic::Clv => "CLV", Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX", Mnemonic::Cpy => "CPY", Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX", Mnemonic::Dey => "DEY", Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC", Mnemonic::Inx => "INX", Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP", Mnemonic::Jsr => "JSR", Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX", Mnemonic::Ldy => "LDY", Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP", Mnemonic::Ora => "ORA", Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP", Mnemonic::Pla => "PLA", Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL", Mnemonic::Ror => "ROR", Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS", Mnemonic::Sbc => "SBC", Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED", Mnemonic::Sei => "SEI", Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX", Mnemonic::Sty => "STY", Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY", Mnemonic::Tsx => "TSX", Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS", Mnemonic::Tya => "TYA", Mnemonic::Xxx => "???",
        }
    }
}

/// Static decoding metadata for a single opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Instruction mnemonic (`Xxx` for illegal opcodes).
    pub mnemonic: Mnemonic,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Total instruction size in bytes, opcode included (1-3).
    pub size: u8,
    /// Base cycle cost before page-crossing or branch penalties.
    pub cycles: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, size: u8, cycles: u8) -> Operation {
    Operation { mnemonic, mode, size, cycles }
}

/// Illegal opcodes behave as 1-byte, 1-cycle no-ops.
const fn ill() -> Operation {
    op(Mnemonic::Xxx, AddressingMode::Implied, 1, 1)
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc,
    Immediate as Imm, Implied as Imp, IndexedIndirect as Izx, Indirect as Ind,
    IndirectIndexed as Izy, Relative as Rel, ZeroPage as Zp0, ZeroPageX as Zpx,
    ZeroPageY as Zpy,
};
use Mnemonic::*;

/// The 256-entry operation table, indexed by opcode byte.
pub const OPERATIONS: [Operation; 256] = [
    // 0x00 - 0x0F
    op(Brk, Imm, 1, 7), op(Ora, Izx, 2, 6), ill(), ill(),
    ill(), op(Ora, Zp0, 2, 3), op(Asl, Zp0, 2, 5), ill(),
    op(Php, Imp, 1, 3), op(Ora, Imm, 2, 2), op(Asl, Acc, 1, 2), ill(),
    ill(), op(Ora, Abs, 3, 4), op(Asl, Abs, 3, 6), ill(),
    // 0x10 - 0x1F
    op(Bpl, Rel, 2, 2), op(Ora, Izy, 2, 5), ill(), ill(),
    ill(), op(Ora, Zpx, 2, 4), op(Asl, Zpx, 2, 6), ill(),
    op(Clc, Imp, 1, 2), op(Ora, Aby, 3, 4), ill(), ill(),
    ill(), op(Ora, Abx, 3, 4), op(Asl, Abx, 3, 7), ill(),
    // 0x20 - 0x2F
    op(Jsr, Abs, 3, 6), op(And, Izx, 2, 6), ill(), ill(),
    op(Bit, Zp0, 2, 3), op(And, Zp0, 2, 3), op(Rol, Zp0, 2, 5), ill(),
    op(Plp, Imp, 1, 4), op(And, Imm, 2, 2), op(Rol, Acc, 1, 2), ill(),
    op(Bit, Abs, 3, 4), op(And, Abs, 3, 4), op(Rol, Abs, 3, 6), ill(),
    // 0x30 - 0x3F
    op(Bmi, Rel, 2, 2), op(And, Izy, 2, 5), ill(), ill(),
    ill(), op(And, Zpx, 2, 4), op(Rol, Zpx, 2, 6), ill(),
    op(Sec, Imp, 1, 2), op(And, Aby, 3, 4), ill(), ill(),
    ill(), op(And, Abx, 3, 4), op(Rol, Abx, 3, 7), ill(),
    // 0x40 - 0x4F
    op(Rti, Imp, 1, 6), op(Eor, Izx, 2, 6), ill(), ill(),
    ill(), op(Eor, Zp0, 2, 3), op(Lsr, Zp0, 2, 5), ill(),
    op(Pha, Imp, 1, 3), op(Eor, Imm, 2, 2), op(Lsr, Acc, 1, 2), ill(),
    op(Jmp, Abs, 3, 3), op(Eor, Abs, 3, 4), op(Lsr, Abs, 3, 6), ill(),
    // 0x50 - 0x5F
    op(Bvc, Rel, 2, 2), op(Eor, Izy, 2, 5), ill(), ill(),
    ill(), op(Eor, Zpx, 2, 4), op(Lsr, Zpx, 2, 6), ill(),
    op(Cli, Imp, 1, 2), op(Eor, Aby, 3, 4), ill(), ill(),
    ill(), op(Eor, Abx, 3, 4), op(Lsr, Abx, 3, 7), ill(),
    // 0x60 - 0x6F
    op(Rts, Imp, 1, 6), op(Adc, Izx, 2, 6), ill(), ill(),
    ill(), op(Adc, Zp0, 2, 3), op(Ror, Zp0, 2, 5), ill(),
    op(Pla, Imp, 1, 4), op(Adc, Imm, 2, 2), op(Ror, Acc, 1, 2), ill(),
    op(Jmp, Ind, 3, 5), op(Adc, Abs, 3, 4), op(Ror, Abs, 3, 6), ill(),
    // 0x70 - 0x7F
    op(Bvs, Rel, 2, 2), op(Adc, Izy, 2, 5), ill(), ill(),
    ill(), op(Adc, Zpx, 2, 4), op(Ror, Zpx, 2, 6), ill(),
    op(Sei, Imp, 1, 2), op(Adc, Aby, 3, 4), ill(), ill(),
    ill(), op(Adc, Abx, 3, 4), op(Ror, Abx, 3, 7), ill(),
    // 0x80 - 0x8F
    ill(), op(Sta, Izx, 2, 6), ill(), ill(),
    op(Sty, Zp0, 2, 3), op(Sta, Zp0, 2, 3), op(Stx, Zp0, 2, 3), ill(),
    op(Dey, Imp, 1, 2), ill(), op(Txa, Imp, 1, 2), ill(),
    op(Sty, Abs, 3, 4), op(Sta, Abs, 3, 4), op(Stx, Abs, 3, 4), ill(),
    // 0x90 - 0x9F
    op(Bcc, Rel, 2, 2), op(Sta, Izy, 2, 6), ill(), ill(),
    op(Sty, Zpx, 2, 4), op(Sta, Zpx, 2, 4), op(Stx, Zpy, 2, 4), ill(),
    op(Tya, Imp, 1, 2), op(Sta, Aby, 3, 5), op(Txs, Imp, 1, 2), ill(),
    ill(), op(Sta, Abx, 3, 5), ill(), ill(),
    // 0xA0 - 0xAF
    op(Ldy, Imm, 2, 2), op(Lda, Izx, 2, 6), op(Ldx, Imm, 2, 2), ill(),
    op(Ldy, Zp0, 2, 3), op(Lda, Zp0, 2, 3), op(Ldx, Zp0, 2, 3), ill(),
    op(Tay, Imp, 1, 2), op(Lda, Imm, 2, 2), op(Tax, Imp, 1, 2), ill(),
    op(Ldy, Abs, 3, 4), op(Lda, Abs, 3, 4), op(Ldx, Abs, 3, 4), ill(),
    // 0xB0 - 0xBF
    op(Bcs, Rel, 2, 2), op(Lda, Izy, 2, 5), ill(), ill(),
    op(Ldy, Zpx, 2, 4), op(Lda, Zpx, 2, 4), op(Ldx, Zpy, 2, 4), ill(),
    op(Clv, Imp, 1, 2), op(Lda, Aby, 3, 4), op(Tsx, Imp, 1, 2), ill(),
    op(Ldy, Abx, 3, 4), op(Lda, Abx, 3, 4), op(Ldx, Aby, 3, 4), ill(),
    // 0xC0 - 0xCF
    op(Cpy, Imm, 2, 2), op(Cmp, Izx, 2, 6), ill(), ill(),
    op(Cpy, Zp0, 2, 3), op(Cmp, Zp0, 2, 3), op(Dec, Zp0, 2, 5), ill(),
    op(Iny, Imp, 1, 2), op(Cmp, Imm, 2, 2), op(Dex, Imp, 1, 2), ill(),
    op(Cpy, Abs, 3, 4), op(Cmp, Abs, 3, 4), op(Dec, Abs, 3, 6), ill(),
    // 0xD0 - 0xDF
    op(Bne, Rel, 2, 2), op(Cmp, Izy, 2, 5), ill(), ill(),
    ill(), op(Cmp, Zpx, 2, 4), op(Dec, Zpx, 2, 6), ill(),
    op(Cld, Imp, 1, 2), op(Cmp, Aby, 3, 4), ill(), ill(),
    ill(), op(Cmp, Abx, 3, 4), op(Dec, Abx, 3, 7), ill(),
    // 0xE0 - 0xEF
    op(Cpx, Imm, 2, 2), op(Sbc, Izx, 2, 6), ill(), ill(),
    op(Cpx, Zp0, 2, 3), op(Sbc, Zp0, 2, 3), op(Inc, Zp0, 2, 5), ill(),
    op(Inx, Imp, 1, 2), op(Sbc, Imm, 2, 2), op(Nop, Imp, 1, 2), ill(),
    op(Cpx, Abs, 3, 4), op(Sbc, Abs, 3, 4), op(Inc, Abs, 3, 6), ill(),
    // 0xF0 - 0xFF
    op(Beq, Rel, 2, 2), op(Sbc, Izy, 2, 5), ill(), ill(),
    ill(), op(Sbc, Zpx, 2, 4), op(Inc, Zpx, 2, 6), ill(),
    op(Sed, Imp, 1, 2), op(Sbc, Aby, 3, 4), ill(), ill(),
    ill(), op(Sbc, Abx, 3, 4), op(Inc, Abx, 3, 7), ill(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_full_coverage() {
        assert_eq!(OPERATIONS.len(), 256);

        // Every entry carries a plausible size and cycle count
        for entry in OPERATIONS.iter() {
            assert!((1..=3).contains(&entry.size));
            assert!((1..=7).contains(&entry.cycles));
        }
    }

    #[test]
    fn well_known_opcodes_decode() {
        let lda_imm = &OPERATIONS[0xA9];
        assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
        assert_eq!(lda_imm.mode, AddressingMode::Immediate);
        assert_eq!(lda_imm.size, 2);
        assert_eq!(lda_imm.cycles, 2);

        let jmp_ind = &OPERATIONS[0x6C];
        assert_eq!(jmp_ind.mnemonic, Mnemonic::Jmp);
        assert_eq!(jmp_ind.mode, AddressingMode::Indirect);

        let brk = &OPERATIONS[0x00];
        assert_eq!(brk.mnemonic, Mnemonic::Brk);
        assert_eq!(brk.cycles, 7);
    }

    #[test]
    fn illegal_opcodes_are_single_byte_nops() {
        let illegal = &OPERATIONS[0x02];
        assert_eq!(illegal.mnemonic, Mnemonic::Xxx);
        assert_eq!(illegal.mnemonic.name(), "???");
        assert_eq!(illegal.size, 1);
        assert_eq!(illegal.cycles, 1);
    }
}
