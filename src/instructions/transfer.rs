//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer except TXS updates Z and N from the copied value.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.a;
    cpu.p.update_zn(cpu.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.a;
    cpu.p.update_zn(cpu.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.x;
    cpu.p.update_zn(cpu.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.y;
    cpu.p.update_zn(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.sp;
    cpu.p.update_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, no flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.sp = cpu.x;
}
