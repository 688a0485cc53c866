//! Tests for PHA, PLA, PHP, PLP and the stack pointer.
//!
//! The stack lives in page $01 and grows down: push writes at $0100+SP then
//! decrements SP; pop increments SP then reads. SP wraps in both directions.

use step6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.set_sp(0xFF);
    cpu
}

// ========== PHA / PLA ==========

#[test]
fn test_pha_pushes_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), 4);

    assert_eq!(cpu.memory().read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_pla_pulls_accumulator_and_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x01FF, 0x80);
    cpu.set_sp(0xFE);

    assert_eq!(cpu.step(), 5);

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_pla_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x01FF, 0x00);
    cpu.set_sp(0xFE);
    cpu.set_a(0x55);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA / LDA #$00 / PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x37);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    cpu.step();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== PHP / PLP ==========

#[test]
fn test_php_pushes_raw_status() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0xFF);

    cpu.step();

    assert_eq!(cpu.memory().read(0x01FF), 0xFF);
    assert_eq!(cpu.status(), 0xFF);
}

#[test]
fn test_php_does_not_add_break() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0x01);

    cpu.step();
    assert_eq!(cpu.memory().read(0x01FF), 0x01);
}

#[test]
fn test_plp_restores_every_bit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FF, 0x80);
    cpu.set_sp(0xFE);
    cpu.set_status(0x7F);

    cpu.step();

    assert_eq!(cpu.status(), 0x80);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== Stack Pointer Wrap ==========

#[test]
fn test_push_at_sp_zero_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x99);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_pop_at_sp_ff_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x0100, 0x12);

    cpu.step();

    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.sp(), 0x00);
}

#[test]
fn test_push_pop_api() {
    let mut cpu = setup_cpu();

    cpu.push(0xAA);
    cpu.push(0xBB);
    assert_eq!(cpu.sp(), 0xFD);

    assert_eq!(cpu.pop(), 0xBB);
    assert_eq!(cpu.pop(), 0xAA);
    assert_eq!(cpu.sp(), 0xFF);
}
