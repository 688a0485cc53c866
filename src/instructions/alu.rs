//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Test bits against the accumulator
//!
//! The Decimal flag is carried but never consulted: ADC and SBC always
//! compute in binary.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator through a 9-bit
/// intermediate sum.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the sum exceeds 0xFF
/// - Overflow (V): Set if both inputs share a sign and the result does not
/// - Zero (Z), Negative (N): From the new accumulator
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let a = cpu.a;
    let carry_in = cpu.p.contains(Flags::CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.p.set(Flags::CARRY, result16 > 0xFF);
    cpu.p.set(Flags::OVERFLOW, !(a ^ value) & (a ^ result) & 0x80 != 0);

    cpu.a = result;
    cpu.p.update_zn(result);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C) as an unsigned 16-bit difference. Carry is the
/// "no borrow" flag: set when the difference did not go below zero.
///
/// # Flag Behavior
///
/// - Carry (C): Set if no borrow occurred
/// - Overflow (V): Set if A and M differ in sign and the result's sign differs from A
/// - Zero (Z), Negative (N): From the new accumulator
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let a = cpu.a;
    let borrow = 1 - cpu.p.contains(Flags::CARRY) as u16;

    let result16 = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow);
    let result = result16 as u8;

    cpu.p.set(Flags::CARRY, result16 < 0x100);
    cpu.p.set(
        Flags::OVERFLOW,
        (a ^ result) & 0x80 != 0 && (a ^ value) & 0x80 != 0,
    );

    cpu.a = result;
    cpu.p.update_zn(result);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.p.update_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.p.update_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.p.update_zn(cpu.a);
}

/// Shared body of CMP, CPX and CPY.
///
/// - Carry (C): register >= operand (unsigned)
/// - Zero (Z): register == operand
/// - Negative (N): bit 7 of the 8-bit difference
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.p.set(Flags::CARRY, register >= value);
    cpu.p.set(Flags::ZERO, register == value);
    cpu.p
        .set(Flags::NEGATIVE, register.wrapping_sub(value) & 0x80 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.a;
    compare(cpu, register, mode);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.x;
    compare(cpu, register, mode);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.y;
    compare(cpu, register, mode);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set if A AND M is zero; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not changed.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.p.set(Flags::ZERO, cpu.a & value == 0);
    cpu.p.set(Flags::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Flags::OVERFLOW, value & 0x40 != 0);
}
