//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Carry clear / set
//! - BEQ, BNE: Zero set / clear
//! - BMI, BPL: Negative set / clear
//! - BVC, BVS: Overflow clear / set
//!
//! The offset byte is only read when the condition holds. It is then added
//! to PC as an unsigned value, with no sign extension, so every taken branch
//! moves forward by 0-255 bytes (wrapping at 0xFFFF). A branch that is not
//! taken leaves PC on the offset byte, which the next fetch decodes as an
//! opcode. The opcode table charges the same extra cycles either way.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, condition: bool) {
    if condition {
        let offset = cpu.resolve(mode);
        cpu.pc = cpu.pc.wrapping_add(offset);
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = !cpu.p.contains(Flags::CARRY);
    branch_if(cpu, mode, condition);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = cpu.p.contains(Flags::CARRY);
    branch_if(cpu, mode, condition);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = cpu.p.contains(Flags::ZERO);
    branch_if(cpu, mode, condition);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = !cpu.p.contains(Flags::ZERO);
    branch_if(cpu, mode, condition);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = cpu.p.contains(Flags::NEGATIVE);
    branch_if(cpu, mode, condition);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = !cpu.p.contains(Flags::NEGATIVE);
    branch_if(cpu, mode, condition);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = !cpu.p.contains(Flags::OVERFLOW);
    branch_if(cpu, mode, condition);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let condition = cpu.p.contains(Flags::OVERFLOW);
    branch_if(cpu, mode, condition);
}
