//! # Status Flags Register
//!
//! The processor status register is a single byte. Each named flag is one bit
//! of that byte, so the byte view and the per-flag view always agree.
//!
//! ## Bit layout
//!
//! This core packs the flags in declaration order, low bit first:
//!
//! | Bit | Flag |
//! |-----|------|
//! | 0 | C (Carry) |
//! | 1 | Z (Zero) |
//! | 2 | I (Interrupt Disable) |
//! | 3 | D (Decimal) |
//! | 4 | B (Break) |
//! | 5 | V (Overflow) |
//! | 6 | N (Negative) |
//! | 7 | unused |
//!
//! The unused bit is carried through untouched, so pushing and pulling the
//! status byte restores every bit exactly.

use bitflags::bitflags;

bitflags! {
    /// Processor status register.
    ///
    /// # Examples
    ///
    /// ```
    /// use step6502::Flags;
    ///
    /// let mut p = Flags::empty();
    /// p.insert(Flags::CARRY | Flags::NEGATIVE);
    /// assert_eq!(p.bits(), 0b0100_0001);
    ///
    /// // Byte view and flag view alias the same storage
    /// let p = Flags::from_bits_retain(0x82);
    /// assert!(p.contains(Flags::ZERO));
    /// assert!(p.contains(Flags::UNUSED));
    /// ```
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Carry out of bit 7, or "no borrow" after a subtraction.
        const CARRY = 1 << 0;
        /// Result was zero.
        const ZERO = 1 << 1;
        /// IRQ is ignored while set.
        const INTERRUPT_DISABLE = 1 << 2;
        /// Decimal mode.
        const DECIMAL = 1 << 3;
        /// Set by BRK before the status byte is pushed.
        const BREAK = 1 << 4;
        /// Signed overflow.
        const OVERFLOW = 1 << 5;
        /// Bit 7 of the result.
        const NEGATIVE = 1 << 6;
        /// Not connected to anything, preserved on push/pull.
        const UNUSED = 1 << 7;
    }
}

impl Flags {
    /// Sets Z and N from an 8-bit result.
    pub fn update_zn(&mut self, value: u8) {
        self.set(Flags::ZERO, value == 0);
        self.set(Flags::NEGATIVE, value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(Flags::CARRY.bits(), 0x01);
        assert_eq!(Flags::ZERO.bits(), 0x02);
        assert_eq!(Flags::INTERRUPT_DISABLE.bits(), 0x04);
        assert_eq!(Flags::DECIMAL.bits(), 0x08);
        assert_eq!(Flags::BREAK.bits(), 0x10);
        assert_eq!(Flags::OVERFLOW.bits(), 0x20);
        assert_eq!(Flags::NEGATIVE.bits(), 0x40);
        assert_eq!(Flags::UNUSED.bits(), 0x80);
        assert_eq!(Flags::all().bits(), 0xFF);
    }

    #[test]
    fn test_byte_round_trip_keeps_every_bit() {
        for byte in 0..=255u8 {
            assert_eq!(Flags::from_bits_retain(byte).bits(), byte);
        }
    }

    #[test]
    fn test_update_zn() {
        let mut p = Flags::CARRY;

        p.update_zn(0x00);
        assert!(p.contains(Flags::ZERO));
        assert!(!p.contains(Flags::NEGATIVE));

        p.update_zn(0x80);
        assert!(!p.contains(Flags::ZERO));
        assert!(p.contains(Flags::NEGATIVE));

        p.update_zn(0x7F);
        assert!(!p.contains(Flags::ZERO));
        assert!(!p.contains(Flags::NEGATIVE));

        // Other bits untouched
        assert!(p.contains(Flags::CARRY));
    }
}
