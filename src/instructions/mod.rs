//! # Instruction Implementations
//!
//! The 6502 implements 56 instructions, organised here by category:
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP
//! - **stack**: PHA, PLA, PHP, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//!
//! Each instruction is a free function taking the CPU and the resolved
//! operand address, returning `true` if the instruction is allowed to pay
//! the page-crossing cycle penalty of its addressing mode. Branches account
//! for their own extra cycles and always return `false`.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::AddressInfo;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;

/// Routes a decoded mnemonic to its implementation.
pub(crate) fn dispatch<B: MemoryBus>(
    cpu: &mut Cpu<B>,
    mnemonic: Mnemonic,
    info: AddressInfo,
) -> bool {
    match mnemonic {
        Mnemonic::Lda => load_store::lda(cpu, info),
        Mnemonic::Ldx => load_store::ldx(cpu, info),
        Mnemonic::Ldy => load_store::ldy(cpu, info),
        Mnemonic::Sta => load_store::sta(cpu, info),
        Mnemonic::Stx => load_store::stx(cpu, info),
        Mnemonic::Sty => load_store::sty(cpu, info),

        Mnemonic::Tax => transfer::tax(cpu, info),
        Mnemonic::Tay => transfer::tay(cpu, info),
        Mnemonic::Txa => transfer::txa(cpu, info),
        Mnemonic::Tya => transfer::tya(cpu, info),
        Mnemonic::Tsx => transfer::tsx(cpu, info),
        Mnemonic::Txs => transfer::txs(cpu, info),

        Mnemonic::Adc => alu::adc(cpu, info),
        Mnemonic::Sbc => alu::sbc(cpu, info),
        Mnemonic::And => alu::and(cpu, info),
        Mnemonic::Ora => alu::ora(cpu, info),
        Mnemonic::Eor => alu::eor(cpu, info),
        Mnemonic::Bit => alu::bit(cpu, info),
        Mnemonic::Cmp => alu::cmp(cpu, info),
        Mnemonic::Cpx => alu::cpx(cpu, info),
        Mnemonic::Cpy => alu::cpy(cpu, info),

        Mnemonic::Inc => inc_dec::inc(cpu, info),
        Mnemonic::Dec => inc_dec::dec(cpu, info),
        Mnemonic::Inx => inc_dec::inx(cpu, info),
        Mnemonic::Iny => inc_dec::iny(cpu, info),
        Mnemonic::Dex => inc_dec::dex(cpu, info),
        Mnemonic::Dey => inc_dec::dey(cpu, info),

        Mnemonic::Asl => shifts::asl(cpu, info),
        Mnemonic::Lsr => shifts::lsr(cpu, info),
        Mnemonic::Rol => shifts::rol(cpu, info),
        Mnemonic::Ror => shifts::ror(cpu, info),

        Mnemonic::Bcc => branches::bcc(cpu, info),
        Mnemonic::Bcs => branches::bcs(cpu, info),
        Mnemonic::Beq => branches::beq(cpu, info),
        Mnemonic::Bne => branches::bne(cpu, info),
        Mnemonic::Bmi => branches::bmi(cpu, info),
        Mnemonic::Bpl => branches::bpl(cpu, info),
        Mnemonic::Bvc => branches::bvc(cpu, info),
        Mnemonic::Bvs => branches::bvs(cpu, info),

        Mnemonic::Jmp => control::jmp(cpu, info),
        Mnemonic::Jsr => control::jsr(cpu, info),
        Mnemonic::Rts => control::rts(cpu, info),
        Mnemonic::Brk => control::brk(cpu, info),
        Mnemonic::Rti => control::rti(cpu, info),
        Mnemonic::Nop => control::nop(cpu, info),
        Mnemonic::Xxx => control::xxx(cpu, info),

        Mnemonic::Pha => stack::pha(cpu, info),
        Mnemonic::Pla => stack::pla(cpu, info),
        Mnemonic::Php => stack::php(cpu, info),
        Mnemonic::Plp => stack::plp(cpu, info),

        Mnemonic::Clc => flags::clc(cpu, info),
        Mnemonic::Sec => flags::sec(cpu, info),
        Mnemonic::Cli => flags::cli(cpu, info),
        Mnemonic::Sei => flags::sei(cpu, info),
        Mnemonic::Cld => flags::cld(cpu, info),
        Mnemonic::Sed => flags::sed(cpu, info),
        Mnemonic::Clv => flags::clv(cpu, info),
    }
}
