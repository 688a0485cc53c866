//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each handler widens the operand to 16 bits, shifts it and updates C, Z and
//! N from that wide value, so a bit shifted out past bit 7 still counts
//! against Z (ASL of 0x80 leaves Z clear). The shifted value itself is
//! discarded in every mode: neither the accumulator nor the memory operand is
//! rewritten.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

/// Sets C from the shifted-out bit and Z/N from the unwrapped shifted value.
fn apply_shift_flags<M: MemoryBus>(cpu: &mut CPU<M>, carry_out: bool, result: u16) {
    cpu.p.set(Flags::CARRY, carry_out);
    cpu.p.set(Flags::ZERO, result == 0);
    cpu.p.set(Flags::NEGATIVE, result & 0x80 != 0);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) as u16;
    apply_shift_flags(cpu, value & 0x80 != 0, value << 1);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) as u16;
    apply_shift_flags(cpu, value & 0x01 != 0, value >> 1);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0, bit 7 goes to carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) as u16;
    let carry_in = cpu.p.contains(Flags::CARRY) as u16;
    apply_shift_flags(cpu, value & 0x80 != 0, (value << 1) | carry_in);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7, bit 0 goes to carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) as u16;
    let carry_in = cpu.p.contains(Flags::CARRY) as u16;
    apply_shift_flags(cpu, value & 0x01 != 0, (value >> 1) | (carry_in << 7));
}
