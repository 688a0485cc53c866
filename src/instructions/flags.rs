//! # Status Flag Instructions
//!
//! - CLC, SEC: Carry
//! - CLD, SED: Decimal
//! - CLI, SEI: Interrupt Disable
//! - CLV: Overflow
//!
//! SEI also sets the Decimal flag.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

/// Executes the CLC (Clear Carry) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.remove(Flags::CARRY);
}

/// Executes the CLD (Clear Decimal) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.remove(Flags::DECIMAL);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.remove(Flags::INTERRUPT_DISABLE);
}

/// Executes the CLV (Clear Overflow) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.remove(Flags::OVERFLOW);
}

/// Executes the SEC (Set Carry) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.insert(Flags::CARRY);
}

/// Executes the SED (Set Decimal) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.insert(Flags::DECIMAL);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
///
/// Sets I and D together.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.p.insert(Flags::INTERRUPT_DISABLE | Flags::DECIMAL);
}
