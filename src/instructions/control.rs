//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR, RTS: Subroutine call and return
//! - RTI: Return from interrupt
//!
//! NOP needs no handler; the dispatcher treats it like an unassigned opcode.

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, Flags, MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Incrementing PC past the padding byte that follows BRK
/// 2. Setting the B flag
/// 3. Pushing PC high, PC low and the status byte (B included)
/// 4. Setting the I (interrupt disable) flag
/// 5. Loading PC from $FFFE (low) and $FFFF (high)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.p.insert(Flags::BREAK);
    cpu.push_state();
    cpu.pc = cpu.read_word(IRQ_VECTOR);
}

/// Executes the JMP (Jump) instruction.
///
/// Absolute mode jumps to the operand address; Indirect mode jumps to the
/// word stored there. The pointer's high byte is read from pointer + 1 even
/// across a page boundary.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.resolve(mode);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (high byte first), then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = cpu.resolve(mode);
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push((return_address >> 8) as u8);
    cpu.push(return_address as u8);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls PC low then high, and steps past the JSR's last operand byte.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let lo = cpu.pop() as u16;
    let hi = cpu.pop() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then PC low and high. PC is not incremented.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let status = cpu.pop();
    cpu.p = Flags::from_bits_retain(status);
    let lo = cpu.pop() as u16;
    let hi = cpu.pop() as u16;
    cpu.pc = (hi << 8) | lo;
}
