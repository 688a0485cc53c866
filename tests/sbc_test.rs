//! Tests for SBC (Subtract with Carry).
//!
//! Carry acts as "not borrow": C=1 before the subtraction means no borrow,
//! and C=1 after it means the result did not go below zero.

use step6502::{FlatMemory, MemoryBus, CPU};

const EDGE_VALUES: [u8; 4] = [0x00, 0x7F, 0x80, 0xFF];

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn sbc_immediate(a: u8, value: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE9, value]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step();
    cpu
}

#[test]
fn test_sbc_without_borrow() {
    let cpu = sbc_immediate(0x50, 0x20, true);

    assert_eq!(cpu.a(), 0x30);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_with_borrow() {
    let cpu = sbc_immediate(0x50, 0x20, false);
    assert_eq!(cpu.a(), 0x2F);
}

#[test]
fn test_sbc_equal_operands_give_zero() {
    let cpu = sbc_immediate(0x42, 0x42, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_underflow_clears_carry() {
    let cpu = sbc_immediate(0x00, 0x01, true);

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    // -128 - 1 = +127
    let cpu = sbc_immediate(0x80, 0x01, true);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xFD, 0x00, 0x20]);
    cpu.memory_mut().write(0x2001, 0x05);
    cpu.set_a(0x08);
    cpu.set_x(0x01);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x03);
}

#[test]
fn test_sbc_edge_values_match_reference() {
    for &a in &EDGE_VALUES {
        for &m in &EDGE_VALUES {
            for carry in [false, true] {
                let cpu = sbc_immediate(a, m, carry);

                let borrow = !carry as i16;
                let unsigned = a as i16 - m as i16 - borrow;
                let signed = a as i8 as i16 - m as i8 as i16 - borrow;
                let expected = unsigned as u8;

                let case = format!("a={:02X} m={:02X} c={}", a, m, carry);
                assert_eq!(cpu.a(), expected, "{}", case);
                assert_eq!(cpu.flag_c(), unsigned >= 0, "C for {}", case);
                assert_eq!(cpu.flag_z(), expected == 0, "Z for {}", case);
                assert_eq!(cpu.flag_n(), expected & 0x80 != 0, "N for {}", case);
                assert_eq!(
                    cpu.flag_v(),
                    !(-128..=127).contains(&signed),
                    "V for {}",
                    case
                );
            }
        }
    }
}
