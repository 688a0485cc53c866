//! # CPU State and Execution
//!
//! Processor state and the tick engine that drives it, one clock cycle at a
//! time.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: a single `Flags` byte
//! - **Interrupt latches**: pending NMI and IRQ
//! - **Cycle counter**: ticks left before the next fetch
//!
//! ## Execution Model
//!
//! `tick()` advances the machine by exactly one clock cycle:
//!
//! 1. Busy (`cycles_left > 0`): decrement the counter, nothing else
//! 2. NMI pending: clear it and enter the interrupt handler
//! 3. IRQ pending and I clear: clear it and enter the interrupt handler
//! 4. Otherwise fetch, decode and execute the next opcode, then load its
//!    cycle cost into the counter
//!
//! The whole effect of an instruction lands on its fetch tick; the ticks that
//! follow only burn the cycles it is charged. `step()` runs one full
//! instruction for callers that only care about instruction boundaries.

use crate::{instructions, Flags, MemoryBus, OPCODE_TABLE};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Vector loaded when servicing NMI and IRQ.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Vector loaded on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Vector loaded by BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The processor: registers, status, interrupt latches and cycle counters.
///
/// Generic over the memory implementation via the `MemoryBus` trait. Pass
/// `&mut memory` to borrow a bus for the session, or move one in.
///
/// # Examples
///
/// ```
/// use step6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(&mut memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0x00);
/// assert_eq!(cpu.status(), 0x00);
/// assert_eq!(cpu.cycles_left(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer; the slot it names is STACK_BASE + sp
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) p: Flags,

    /// Pending non-maskable interrupt
    pub(crate) nmi: bool,

    /// Pending interrupt request
    pub(crate) irq: bool,

    /// Ticks left before the next fetch; 0 means idle
    pub(crate) cycles_left: u8,

    /// Total ticks since initialization
    pub(crate) cycles: u64,

    /// Owned or borrowed bus
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Wires a new CPU to `memory` and runs the reset sequence.
    ///
    /// All registers, flags, latches and counters start at zero (SP included);
    /// reset then loads PC from the vector at 0xFFFC/0xFFFD (little-endian).
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            p: Flags::empty(),
            nmi: false,
            irq: false,
            cycles_left: 0,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Reloads PC from the reset vector. No other register changes.
    pub fn reset(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Advances the machine by one clock cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use step6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// cpu.tick(); // fetch and execute
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.cycles_left(), 2);
    ///
    /// cpu.tick();
    /// cpu.tick();
    /// assert_eq!(cpu.cycles_left(), 0);
    /// ```
    pub fn tick(&mut self) {
        self.cycles += 1;

        if self.cycles_left > 0 {
            self.cycles_left -= 1;
            return;
        }

        if self.nmi {
            self.nmi = false;
            log::debug!("servicing NMI at PC=${:04X}", self.pc);
            self.enter_interrupt();
            return;
        }

        if self.irq && !self.p.contains(Flags::INTERRUPT_DISABLE) {
            self.irq = false;
            log::debug!("servicing IRQ at PC=${:04X}", self.pc);
            self.enter_interrupt();
            return;
        }

        let opcode_pc = self.pc;
        let opcode = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let metadata = OPCODE_TABLE[opcode as usize];
        log::trace!(
            "${:04X}: executing opcode ${:02X} {}",
            opcode_pc,
            opcode,
            metadata
        );

        self.cycles_left = metadata.base_cycles;
        instructions::execute(self, metadata.instruction, metadata.addressing_mode);
        if metadata.extra_cycles != 0 {
            self.cycles_left = self.cycles_left.wrapping_add(metadata.extra_cycles);
        }
    }

    /// Runs one whole instruction (or interrupt entry).
    ///
    /// Ticks once, then keeps ticking until the cycle counter drains, and
    /// returns the number of ticks consumed. Called while busy it finishes the
    /// instruction in flight.
    pub fn step(&mut self) -> u64 {
        let start = self.cycles;
        self.tick();
        while self.cycles_left > 0 {
            self.tick();
        }
        self.cycles - start
    }

    /// Ticks exactly `cycle_budget` times and returns the ticks consumed.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        for _ in 0..cycle_budget {
            self.tick();
        }
        cycle_budget
    }

    /// Pushes a byte onto the stack page, then decrements SP (wrapping).
    pub fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte it points at.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes PC high, PC low and status, then sets I.
    pub(crate) fn push_state(&mut self) {
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);
        self.push(self.p.bits());
        self.p.insert(Flags::INTERRUPT_DISABLE);
    }

    /// NMI and IRQ share one entry sequence and one vector.
    fn enter_interrupt(&mut self) {
        self.push_state();
        self.pc = self.read_word(NMI_VECTOR);
    }

    // ========== Interrupt Inputs ==========

    /// Latches a non-maskable interrupt; serviced on the next idle tick.
    pub fn trigger_nmi(&mut self) {
        self.nmi = true;
    }

    /// Latches an interrupt request; serviced on the next idle tick with I clear.
    pub fn trigger_irq(&mut self) {
        self.irq = true;
    }

    /// Sets or clears the IRQ latch.
    pub fn set_irq(&mut self, pending: bool) {
        self.irq = pending;
    }

    /// Returns true while an NMI is waiting to be serviced.
    pub fn nmi_pending(&self) -> bool {
        self.nmi
    }

    /// Returns true while an IRQ is waiting to be serviced.
    pub fn irq_pending(&self) -> bool {
        self.irq
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Getters ==========

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Address of the next byte to fetch.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Offset of the next free stack slot within page $01.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (C at bit 0 ... N at bit 6).
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns the status register.
    pub fn flags(&self) -> Flags {
        self.p
    }

    /// Returns the ticks left before the next fetch.
    pub fn cycles_left(&self) -> u8 {
        self.cycles_left
    }

    /// Returns the total number of ticks since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status byte.
    pub fn set_status(&mut self, value: u8) {
        self.p = Flags::from_bits_retain(value);
    }

    // ========== Status Flag Getters ==========

    pub fn flag_n(&self) -> bool {
        self.p.contains(Flags::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.p.contains(Flags::OVERFLOW)
    }

    pub fn flag_b(&self) -> bool {
        self.p.contains(Flags::BREAK)
    }

    pub fn flag_d(&self) -> bool {
        self.p.contains(Flags::DECIMAL)
    }

    pub fn flag_i(&self) -> bool {
        self.p.contains(Flags::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.p.contains(Flags::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.p.contains(Flags::CARRY)
    }

    // ========== Status Flag Setters ==========

    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(Flags::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(Flags::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set(Flags::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(Flags::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(Flags::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(Flags::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(Flags::CARRY, value);
    }
}
