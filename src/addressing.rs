//! # Addressing Modes
//!
//! This module defines the 13 addressing modes and the resolver that turns the
//! bytes following an opcode into either an operand or an effective address.
//!
//! ## Resolver results
//!
//! `CPU::resolve` consumes 0, 1 or 2 bytes at PC and returns a 16-bit value:
//!
//! - **Accumulator, Immediate, Relative**: the operand itself
//! - **Implicit**: nothing consumed, returns 0
//! - **Every other mode**: an effective address
//!
//! Pointer lookups (Indirect, IndirectX, IndirectY) read a full 16-bit pointer
//! from the operand bytes and follow it anywhere in the address space; they
//! are not confined to the zero page. Zero page indexing adds the index
//! register as a 16-bit sum, so `$FF,X` with X=1 addresses 0x0100.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect, IndirectX, IndirectY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page.
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address plus X.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address plus Y.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Raw offset byte for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address plus X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address plus Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Pointer at (operand + X), then dereference.
    ///
    /// Example: LDA ($4000,X)
    IndirectX,

    /// Dereference pointer at operand, then add Y.
    ///
    /// Example: LDA ($4000),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
        }
    }

    /// Short label used in diagnostic opcode names, e.g. `"ABSX"`.
    pub const fn label(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "IMP",
            AddressingMode::Accumulator => "ACC",
            AddressingMode::Immediate => "IMM",
            AddressingMode::ZeroPage => "ZP",
            AddressingMode::ZeroPageX => "ZPX",
            AddressingMode::ZeroPageY => "ZPY",
            AddressingMode::Relative => "REL",
            AddressingMode::Absolute => "ABS",
            AddressingMode::AbsoluteX => "ABSX",
            AddressingMode::AbsoluteY => "ABSY",
            AddressingMode::Indirect => "IND",
            AddressingMode::IndirectX => "INDX",
            AddressingMode::IndirectY => "INDY",
        }
    }

    /// True for modes whose resolved value is the operand rather than an address.
    pub const fn yields_value(self) -> bool {
        matches!(
            self,
            AddressingMode::Accumulator | AddressingMode::Immediate | AddressingMode::Relative
        )
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand for `mode`, advancing PC past the operand bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use step6502::{AddressingMode, CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x02); // PC = 0x0200
    /// mem.load(0x0200, &[0x34, 0x12]);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(0x01);
    ///
    /// assert_eq!(cpu.resolve(AddressingMode::AbsoluteX), 0x1235);
    /// assert_eq!(cpu.pc(), 0x0202);
    /// ```
    pub fn resolve(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Implicit => 0,
            AddressingMode::Accumulator => self.a as u16,
            AddressingMode::Immediate | AddressingMode::Relative | AddressingMode::ZeroPage => {
                self.fetch_byte() as u16
            }
            AddressingMode::ZeroPageX => self.fetch_byte() as u16 + self.x as u16,
            AddressingMode::ZeroPageY => self.fetch_byte() as u16 + self.y as u16,
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                self.read_word(pointer)
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch_word().wrapping_add(self.x as u16);
                self.read_word(pointer)
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_word();
                self.read_word(pointer).wrapping_add(self.y as u16)
            }
        }
    }

    /// Resolves `mode` and returns the byte an instruction operates on.
    ///
    /// Value modes hand back the operand itself; address modes read the byte
    /// at the effective address.
    pub fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve(mode);
        if mode.yields_value() {
            resolved as u8
        } else {
            self.memory.read(resolved)
        }
    }

    fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word; the high byte comes from `addr + 1`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}
