//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The stack lives at 0x0100-0x01FF and grows downward. Push writes at
//! 0x0100 + SP and then decrements SP; pull increments SP first and then
//! reads. SP wraps in both directions without any overflow signal.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let a = cpu.a;
    cpu.push(a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed as-is, every bit included.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let status = cpu.p.bits();
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.pop();
    cpu.p.update_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores the raw byte, B and the unused bit included.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let status = cpu.pop();
    cpu.p = Flags::from_bits_retain(status);
}
