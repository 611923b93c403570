//! # CPU State and Execution
//!
//! The `Cpu` struct holds all 6502 processor state: the A, X and Y
//! registers, stack pointer, program counter, packed status register and a
//! running cycle count. It is generic over the memory implementation via the
//! [`MemoryBus`] trait.
//!
//! ## Execution model
//!
//! Instructions execute atomically via [`Cpu::step`], which performs a full
//! fetch-decode-execute cycle and returns the number of clock cycles the
//! instruction consumed. Timing is modelled by cycle accounting rather than
//! per-cycle micro-operations: [`Cpu::clock`] advances the emulation by a
//! single cycle by burning down the remaining cost of the instruction
//! executed at the first call.
//!
//! The program counter is advanced by the instruction size *before* the
//! instruction body runs, so control-flow instructions may simply overwrite
//! it.

use tracing::{debug, trace};

use crate::addressing::{pages_differ, AddressInfo, AddressingMode};
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::OPERATIONS;

/// Status register flags.
///
/// The status register stores 8 flags, enumerated here. The bits have
/// different interpretations depending on the instruction being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Flag {
    /// Carry
    C = 1 << 0,
    /// Zero
    Z = 1 << 1,
    /// Disable interrupts
    I = 1 << 2,
    /// Decimal mode (unused by arithmetic in this implementation)
    D = 1 << 3,
    /// Break
    B = 1 << 4,
    /// Unused, reads as set
    U = 1 << 5,
    /// Overflow
    V = 1 << 6,
    /// Negative
    N = 1 << 7,
}

/// 6502 CPU core, generic over its system bus.
#[derive(Debug)]
pub struct Cpu<B: MemoryBus> {
    bus: B,

    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) sp: u8,
    pub(crate) pc: u16,
    pub(crate) status: u8,

    /// Total cycles consumed since the last reset.
    cycles: u64,
    /// Remaining cycles of the instruction currently "in flight" when
    /// pacing execution with [`Cpu::clock`].
    pending: u8,
    /// Extra cycles accumulated by the executing instruction (branches).
    extra_cycles: u8,
}

impl<B: MemoryBus> Cpu<B> {
    /// Creates a new CPU attached to the given bus and resets it.
    ///
    /// The reset loads PC from the reset vector at 0xFFFC/0xFFFD, so the
    /// bus should already contain a valid vector.
    pub fn new(bus: B) -> Self {
        let mut cpu = Self {
            bus,
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: 0x24,
            cycles: 0,
            pending: 0,
            extra_cycles: 0,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU to its initial power-up state.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.pc = self.reset_vector();
        self.status = 0x24; // All flags clear except U and I
        self.cycles = 0;
        self.pending = 0;
        debug!("cpu reset, pc=${:04X}", self.pc);
    }

    /// The 16-bit address stored at the reset vector ($FFFC-$FFFD), loaded
    /// into the program counter on reset.
    pub fn reset_vector(&self) -> u16 {
        self.read16(0xFFFC)
    }

    /// The 16-bit address stored at the IRQ/BRK vector ($FFFE-$FFFF).
    pub fn irq_vector(&self) -> u16 {
        self.read16(0xFFFE)
    }

    /// The 16-bit address stored at the NMI vector ($FFFA-$FFFB).
    pub fn nmi_vector(&self) -> u16 {
        self.read16(0xFFFA)
    }

    /// Advances the emulation by a single clock cycle.
    ///
    /// 6502 instructions take a variable number of cycles. The instruction
    /// executes in full on the first call, and subsequent calls burn down
    /// its remaining cycle cost; [`Cpu::cycles_remaining`] reaches zero when
    /// the instruction boundary is reached.
    pub fn clock(&mut self) {
        if self.pending > 0 {
            self.pending -= 1;
            return;
        }
        let consumed = self.execute_instruction();
        self.pending = consumed - 1;
    }

    /// Executes exactly one instruction and returns its cycle cost,
    /// including any page-crossing or branch penalties.
    pub fn step(&mut self) -> u8 {
        self.pending = 0;
        self.execute_instruction()
    }

    /// Runs until at least `cycle_budget` further cycles have elapsed,
    /// always completing the final instruction. Returns the cycles
    /// actually consumed, which may overshoot the budget by up to one
    /// instruction.
    ///
    /// Useful for frame-locked execution where the CPU must advance a
    /// fixed number of cycles per frame.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.cycles;
        let target = start + cycle_budget;
        while self.cycles < target {
            self.step();
        }
        self.cycles - start
    }

    fn execute_instruction(&mut self) -> u8 {
        let start_pc = self.pc;
        let opcode = self.read(start_pc);
        let op = &OPERATIONS[opcode as usize];

        // Resolve the operand address using this operation's addressing
        // mode. Not every instruction needs one (e.g. NOP, INX, CLC).
        let info = self.resolve(op.mode);

        // Advance PC by the operation size *before* executing, since some
        // instructions alter PC directly (branches, jumps).
        self.pc = self.pc.wrapping_add(op.size as u16);

        self.extra_cycles = 0;
        let page_sensitive = instructions::dispatch(self, op.mnemonic, info);

        // Several addressing modes can require an additional cycle when the
        // access crosses a page boundary, but only for instructions that
        // allow it. Branches account for their own extra cycles instead and
        // always report false here.
        let mut consumed = op.cycles + self.extra_cycles;
        if page_sensitive && info.page_crossed {
            consumed += 1;
        }
        self.cycles += consumed as u64;

        trace!(
            "${:04X}: {} (${:02X}), {} cycles",
            start_pc,
            op.mnemonic.name(),
            opcode,
            consumed
        );
        consumed
    }

    /// Performs an Interrupt Request (IRQ) sequence.
    ///
    /// Ignored while the Disable Interrupts flag is set. Otherwise the
    /// program counter and status (with the Break flag cleared in the
    /// pushed copy) go onto the stack and execution continues at the
    /// address in the IRQ vector.
    pub fn irq(&mut self) {
        if self.flag(Flag::I) {
            return;
        }
        self.push16(self.pc);
        self.push(self.status & !(Flag::B as u8));
        self.set_flag(Flag::I, true);
        self.pc = self.irq_vector();
        self.cycles += 7;
        self.pending = self.pending.saturating_add(7);
        debug!("irq taken, pc=${:04X}", self.pc);
    }

    /// Performs a Non-Maskable Interrupt (NMI) sequence.
    ///
    /// Same as [`Cpu::irq`] but cannot be masked and jumps through the NMI
    /// vector.
    pub fn nmi(&mut self) {
        self.push16(self.pc);
        self.push(self.status & !(Flag::B as u8));
        self.set_flag(Flag::I, true);
        self.pc = self.nmi_vector();
        self.cycles += 7;
        self.pending = self.pending.saturating_add(7);
        debug!("nmi taken, pc=${:04X}", self.pc);
    }

    // ---- Bus access ----

    /// Reads an 8-bit value from the bus.
    pub fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Reads a 16-bit little-endian value from the bus.
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes an 8-bit value to the bus.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Writes a 16-bit value to the bus, least significant byte first.
    pub fn write16(&mut self, addr: u16, value: u16) {
        self.bus.write(addr, (value & 0xFF) as u8);
        self.bus.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Borrows the underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrows the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    // ---- Stack ----

    /// Pushes an 8-bit value onto the stack.
    ///
    /// The stack lives in page 1 and grows downward; SP starts at 0xFD
    /// after reset.
    pub fn push(&mut self, value: u8) {
        self.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes a 16-bit value onto the stack, most significant byte first so
    /// the little-endian value reads back in order.
    pub fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pops an 8-bit value off the stack.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(0x0100 | self.sp as u16)
    }

    /// Pops a 16-bit little-endian value off the stack.
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ---- Flags ----

    /// Returns the value of one status register bit.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status & flag as u8 != 0
    }

    /// Sets or clears one status register bit.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.status |= flag as u8;
        } else {
            self.status &= !(flag as u8);
        }
    }

    /// Sets the Zero and Negative flags from a result value.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set_flag(Flag::Z, value == 0);
        self.set_flag(Flag::N, value & 0x80 != 0);
    }

    /// Branch instructions pay one extra cycle when taken and a second when
    /// the target lies on a different page.
    pub(crate) fn add_branch_cycles(&mut self, info: AddressInfo) {
        self.extra_cycles += 1;
        if info.page_crossed {
            self.extra_cycles += 1;
        }
    }

    // ---- Addressing mode resolution ----

    /// Resolves an addressing mode against the current CPU state, with the
    /// operand bytes expected at PC+1.
    pub fn resolve(&self, mode: AddressingMode) -> AddressInfo {
        match mode {
            AddressingMode::Implied => AddressInfo::default(),
            AddressingMode::Accumulator => AddressInfo {
                accumulator: true,
                ..AddressInfo::default()
            },
            AddressingMode::Immediate => AddressInfo {
                address: self.pc.wrapping_add(1),
                ..AddressInfo::default()
            },
            AddressingMode::ZeroPage => AddressInfo {
                address: self.read(self.pc.wrapping_add(1)) as u16,
                ..AddressInfo::default()
            },
            AddressingMode::ZeroPageX => AddressInfo {
                // Wraps within page zero
                address: self.read(self.pc.wrapping_add(1)).wrapping_add(self.x) as u16,
                ..AddressInfo::default()
            },
            AddressingMode::ZeroPageY => AddressInfo {
                address: self.read(self.pc.wrapping_add(1)).wrapping_add(self.y) as u16,
                ..AddressInfo::default()
            },
            AddressingMode::Absolute => AddressInfo {
                address: self.read16(self.pc.wrapping_add(1)),
                ..AddressInfo::default()
            },
            AddressingMode::AbsoluteX => {
                let base = self.read16(self.pc.wrapping_add(1));
                let address = base.wrapping_add(self.x as u16);
                AddressInfo {
                    address,
                    page_crossed: pages_differ(base, address),
                    accumulator: false,
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.read16(self.pc.wrapping_add(1));
                let address = base.wrapping_add(self.y as u16);
                AddressInfo {
                    address,
                    page_crossed: pages_differ(base, address),
                    accumulator: false,
                }
            }
            AddressingMode::Relative => {
                // Signed 8-bit offset from the address of the next
                // instruction.
                let offset = self.read(self.pc.wrapping_add(1)) as i8;
                let base = self.pc.wrapping_add(2);
                let address = base.wrapping_add(offset as u16);
                AddressInfo {
                    address,
                    page_crossed: pages_differ(base, address),
                    accumulator: false,
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.read16(self.pc.wrapping_add(1));
                // Hardware bug: when the pointer's low byte is 0xFF the
                // high byte of the target is fetched from the start of the
                // same page rather than the next one.
                let lo = self.read(ptr) as u16;
                let hi = if ptr & 0x00FF == 0x00FF {
                    self.read(ptr & 0xFF00) as u16
                } else {
                    self.read(ptr.wrapping_add(1)) as u16
                };
                AddressInfo {
                    address: (hi << 8) | lo,
                    ..AddressInfo::default()
                }
            }
            AddressingMode::IndexedIndirect => {
                let ptr = self.read(self.pc.wrapping_add(1)).wrapping_add(self.x) as u16;
                let lo = self.read(ptr) as u16;
                let hi = self.read((ptr + 1) & 0x00FF) as u16;
                AddressInfo {
                    address: (hi << 8) | lo,
                    ..AddressInfo::default()
                }
            }
            AddressingMode::IndirectIndexed => {
                let ptr = self.read(self.pc.wrapping_add(1)) as u16;
                let lo = self.read(ptr) as u16;
                let hi = self.read((ptr + 1) & 0x00FF) as u16;
                let base = (hi << 8) | lo;
                let address = base.wrapping_add(self.y as u16);
                AddressInfo {
                    address,
                    page_crossed: pages_differ(base, address),
                    accumulator: false,
                }
            }
        }
    }

    // ---- Register access ----

    /// Accumulator register.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer (offset within page 1).
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Packed status register (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Total cycles consumed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Remaining cycles of the in-flight instruction when pacing with
    /// [`Cpu::clock`]; zero at an instruction boundary.
    pub fn cycles_remaining(&self) -> u8 {
        self.pending
    }

    /// Overwrites the accumulator. Intended for tests and debugging tools.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Overwrites the X register. Intended for tests and debugging tools.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Overwrites the Y register. Intended for tests and debugging tools.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Overwrites the program counter. Intended for tests and debugging tools.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Overwrites the packed status register. Intended for tests and
    /// debugging tools.
    pub fn set_status(&mut self, value: u8) {
        self.status = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn flag_bits_match_nv_bdizc_layout() {
        assert_eq!(Flag::C as u8, 0x01);
        assert_eq!(Flag::Z as u8, 0x02);
        assert_eq!(Flag::I as u8, 0x04);
        assert_eq!(Flag::D as u8, 0x08);
        assert_eq!(Flag::B as u8, 0x10);
        assert_eq!(Flag::U as u8, 0x20);
        assert_eq!(Flag::V as u8, 0x40);
        assert_eq!(Flag::N as u8, 0x80);
    }

    #[test]
    fn clock_burns_one_cycle_per_call() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        mem.write(0x8000, 0xEA); // NOP, 2 cycles

        let mut cpu = Cpu::new(mem);
        cpu.clock();
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles_remaining(), 1);
        cpu.clock();
        assert_eq!(cpu.cycles_remaining(), 0);
        assert_eq!(cpu.cycles(), 2);
    }
}
