//! Tests for the operand resolver.
//!
//! Covers every addressing mode: the value or address it yields and how far
//! it advances PC. Includes the 16-bit zero page index sum and full 16-bit
//! indirect pointers.

use step6502::{AddressingMode, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Value Modes ==========

#[test]
fn test_implicit_consumes_nothing() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x55);

    assert_eq!(cpu.resolve(AddressingMode::Implicit), 0);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_accumulator_yields_a() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x9C);

    assert_eq!(cpu.resolve(AddressingMode::Accumulator), 0x009C);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_immediate_yields_operand_byte() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x42);

    assert_eq!(cpu.resolve(AddressingMode::Immediate), 0x0042);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_relative_yields_raw_offset() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xFE);

    assert_eq!(cpu.resolve(AddressingMode::Relative), 0x00FE);
    assert_eq!(cpu.pc(), 0x8001);
}

// ========== Zero Page ==========

#[test]
fn test_zero_page_address() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x80);

    assert_eq!(cpu.resolve(AddressingMode::ZeroPage), 0x0080);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_zero_page_x_does_not_wrap() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x8000, 0xFF);

    assert_eq!(cpu.resolve(AddressingMode::ZeroPageX), 0x0100);
}

#[test]
fn test_zero_page_y_does_not_wrap() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x10);
    cpu.memory_mut().write(0x8000, 0xF8);

    assert_eq!(cpu.resolve(AddressingMode::ZeroPageY), 0x0108);
    assert_eq!(cpu.pc(), 0x8001);
}

// ========== Absolute ==========

#[test]
fn test_absolute_little_endian() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x34, 0x12]);

    assert_eq!(cpu.resolve(AddressingMode::Absolute), 0x1234);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_absolute_x_crosses_page() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().load(0x8000, &[0xFF, 0x12]);

    assert_eq!(cpu.resolve(AddressingMode::AbsoluteX), 0x1300);
}

#[test]
fn test_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x02);
    cpu.memory_mut().load(0x8000, &[0xFF, 0xFF]);

    assert_eq!(cpu.resolve(AddressingMode::AbsoluteY), 0x0001);
}

// ========== Indirect ==========

#[test]
fn test_indirect_follows_pointer() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x00, 0x30]);
    cpu.memory_mut().load(0x3000, &[0x78, 0x56]);

    assert_eq!(cpu.resolve(AddressingMode::Indirect), 0x5678);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_indirect_pointer_crosses_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xFF, 0x30]);
    cpu.memory_mut().write(0x30FF, 0x78);
    cpu.memory_mut().write(0x3100, 0x56);
    cpu.memory_mut().write(0x3000, 0xEE);

    assert_eq!(cpu.resolve(AddressingMode::Indirect), 0x5678);
}

#[test]
fn test_indirect_x_indexes_sixteen_bit_pointer() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x02);
    cpu.memory_mut().load(0x8000, &[0x00, 0x40]);
    cpu.memory_mut().load(0x4002, &[0x00, 0x50]);

    assert_eq!(cpu.resolve(AddressingMode::IndirectX), 0x5000);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_indirect_y_indexes_after_dereference() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x03);
    cpu.memory_mut().load(0x8000, &[0x00, 0x40]);
    cpu.memory_mut().load(0x4000, &[0xFF, 0x50]);

    assert_eq!(cpu.resolve(AddressingMode::IndirectY), 0x5102);
    assert_eq!(cpu.pc(), 0x8002);
}

// ========== read_operand ==========

#[test]
fn test_read_operand_returns_immediate_value() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x42);

    assert_eq!(cpu.read_operand(AddressingMode::Immediate), 0x42);
}

#[test]
fn test_read_operand_dereferences_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x10);
    cpu.memory_mut().write(0x0010, 0x99);

    assert_eq!(cpu.read_operand(AddressingMode::ZeroPage), 0x99);
}

#[test]
fn test_read_operand_dereferences_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0xAB);

    assert_eq!(cpu.read_operand(AddressingMode::Absolute), 0xAB);
}

#[test]
fn test_read_operand_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x3C);

    assert_eq!(cpu.read_operand(AddressingMode::Accumulator), 0x3C);
}

// ========== Mode Metadata ==========

#[test]
fn test_operand_bytes_match_pc_advance() {
    let modes = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    for mode in modes {
        let mut cpu = setup_cpu();
        cpu.resolve(mode);
        assert_eq!(
            cpu.pc(),
            0x8000 + mode.operand_bytes() as u16,
            "PC advance for {:?}",
            mode
        );
    }
}
