//! # Increment and Decrement Instructions
//!
//! - INX, INY, DEX, DEY: Step an index register by one (wrapping), update Z and N
//! - INC, DEC: Compute the stepped memory value and update Z and N from it
//!
//! Like the shifts, INC and DEC never write the new value back to memory, and
//! they judge Z and N on the 16-bit value: INC of 0xFF yields 0x100, which is
//! not zero.

use crate::{AddressingMode, Flags, MemoryBus, CPU};

fn apply_step_flags<M: MemoryBus>(cpu: &mut CPU<M>, value: u16) {
    cpu.p.set(Flags::ZERO, value == 0);
    cpu.p.set(Flags::NEGATIVE, value & 0x80 != 0);
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode) as u16 + 1;
    apply_step_flags(cpu, value);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = (cpu.read_operand(mode) as u16).wrapping_sub(1);
    apply_step_flags(cpu, value);
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_zn(cpu.x);
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_zn(cpu.y);
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_zn(cpu.x);
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_zn(cpu.y);
}
