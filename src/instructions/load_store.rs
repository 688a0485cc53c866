//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.a = cpu.read_operand(mode);
    cpu.p.update_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction. Updates Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.x = cpu.read_operand(mode);
    cpu.p.update_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction. Updates Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.y = cpu.read_operand(mode);
    cpu.p.update_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Writes A to the effective address. No flags are affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.resolve(mode);
    cpu.memory.write(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.resolve(mode);
    cpu.memory.write(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.resolve(mode);
    cpu.memory.write(addr, cpu.y);
}
