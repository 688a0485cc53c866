//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU
//! and the addressing mode from the opcode table, resolves its own operand and applies
//! its effect. Cycle accounting is done by the timing engine, not here.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, Instruction, MemoryBus, CPU};

/// Runs the handler for `instruction`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    mode: AddressingMode,
) {
    match instruction {
        Instruction::Adc => alu::execute_adc(cpu, mode),
        Instruction::Sbc => alu::execute_sbc(cpu, mode),
        Instruction::And => alu::execute_and(cpu, mode),
        Instruction::Ora => alu::execute_ora(cpu, mode),
        Instruction::Eor => alu::execute_eor(cpu, mode),
        Instruction::Cmp => alu::execute_cmp(cpu, mode),
        Instruction::Cpx => alu::execute_cpx(cpu, mode),
        Instruction::Cpy => alu::execute_cpy(cpu, mode),
        Instruction::Bit => alu::execute_bit(cpu, mode),

        Instruction::Bcc => branches::execute_bcc(cpu, mode),
        Instruction::Bcs => branches::execute_bcs(cpu, mode),
        Instruction::Beq => branches::execute_beq(cpu, mode),
        Instruction::Bne => branches::execute_bne(cpu, mode),
        Instruction::Bmi => branches::execute_bmi(cpu, mode),
        Instruction::Bpl => branches::execute_bpl(cpu, mode),
        Instruction::Bvc => branches::execute_bvc(cpu, mode),
        Instruction::Bvs => branches::execute_bvs(cpu, mode),

        Instruction::Asl => shifts::execute_asl(cpu, mode),
        Instruction::Lsr => shifts::execute_lsr(cpu, mode),
        Instruction::Rol => shifts::execute_rol(cpu, mode),
        Instruction::Ror => shifts::execute_ror(cpu, mode),

        Instruction::Lda => load_store::execute_lda(cpu, mode),
        Instruction::Ldx => load_store::execute_ldx(cpu, mode),
        Instruction::Ldy => load_store::execute_ldy(cpu, mode),
        Instruction::Sta => load_store::execute_sta(cpu, mode),
        Instruction::Stx => load_store::execute_stx(cpu, mode),
        Instruction::Sty => load_store::execute_sty(cpu, mode),

        Instruction::Inc => inc_dec::execute_inc(cpu, mode),
        Instruction::Dec => inc_dec::execute_dec(cpu, mode),
        Instruction::Inx => inc_dec::execute_inx(cpu, mode),
        Instruction::Iny => inc_dec::execute_iny(cpu, mode),
        Instruction::Dex => inc_dec::execute_dex(cpu, mode),
        Instruction::Dey => inc_dec::execute_dey(cpu, mode),

        Instruction::Jmp => control::execute_jmp(cpu, mode),
        Instruction::Jsr => control::execute_jsr(cpu, mode),
        Instruction::Rts => control::execute_rts(cpu, mode),
        Instruction::Rti => control::execute_rti(cpu, mode),
        Instruction::Brk => control::execute_brk(cpu, mode),
        Instruction::Nop | Instruction::Illegal => {}

        Instruction::Pha => stack::execute_pha(cpu, mode),
        Instruction::Php => stack::execute_php(cpu, mode),
        Instruction::Pla => stack::execute_pla(cpu, mode),
        Instruction::Plp => stack::execute_plp(cpu, mode),

        Instruction::Clc => flags::execute_clc(cpu, mode),
        Instruction::Cld => flags::execute_cld(cpu, mode),
        Instruction::Cli => flags::execute_cli(cpu, mode),
        Instruction::Clv => flags::execute_clv(cpu, mode),
        Instruction::Sec => flags::execute_sec(cpu, mode),
        Instruction::Sed => flags::execute_sed(cpu, mode),
        Instruction::Sei => flags::execute_sei(cpu, mode),

        Instruction::Tax => transfer::execute_tax(cpu, mode),
        Instruction::Tay => transfer::execute_tay(cpu, mode),
        Instruction::Txa => transfer::execute_txa(cpu, mode),
        Instruction::Tya => transfer::execute_tya(cpu, mode),
        Instruction::Tsx => transfer::execute_tsx(cpu, mode),
        Instruction::Txs => transfer::execute_txs(cpu, mode),
    }
}
