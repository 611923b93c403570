//! # Built-in Verification Programs
//!
//! Three small machine-code programs, each a deterministic 8-bit arithmetic
//! computation that writes a single known result byte to address 0x0000 in
//! the zero page and then parks the CPU in an infinite `JMP`-to-self loop.
//!
//! The programs never signal completion; the idle loop is the terminal
//! state, and a host detects it (or gives up at a cycle budget) from the
//! outside. Because each run starts from freshly reset memory, re-running a
//! program always reproduces the same output byte.
//!
//! The images are hand-assembled from small freestanding C sources of the
//! form "compute, store through a volatile pointer to 0x0000, spin":
//!
//! ```c
//! uint8_t n = 5, result = 1;
//! while (n > 1) { result *= n; n--; }
//! *((volatile uint8_t*)0x0000) = result;
//! while (1) {}
//! ```

/// Address where program images are placed and the reset vector points.
pub const LOAD_ADDRESS: u16 = 0x8000;

/// Zero-page address that receives the single result byte.
pub const RESULT_ADDRESS: u16 = 0x0000;

/// A self-contained machine-code program with a known expected result.
#[derive(Debug, Clone, Copy)]
pub struct Program {
    /// Short name used for lookup, e.g. `"factorial"`.
    pub name: &'static str,
    /// One-line description of the computation.
    pub description: &'static str,
    /// The machine code, assembled for [`LOAD_ADDRESS`].
    pub code: &'static [u8],
    /// The byte expected at [`RESULT_ADDRESS`] after the program halts.
    pub expected: u8,
}

/// Computes 5! = 120 (0x78).
///
/// Keeps the running product and the decreasing factor in zero page, and
/// multiplies by repeated addition (the 6502 has no multiply instruction):
/// the inner loop adds the product to itself `n` times.
const FACTORIAL: &[u8] = &[
    0xA9, 0x01, //        LDA #$01        ; product = 1
    0x85, 0x10, //        STA $10
    0xA9, 0x05, //        LDA #$05        ; n = 5
    0x85, 0x11, //        STA $11
    // outer: while n > 1
    0xA5, 0x11, //        LDA $11
    0xC9, 0x02, //        CMP #$02
    0x90, 0x11, //        BCC done        ; n < 2
    0xA9, 0x00, //        LDA #$00
    0xA6, 0x11, //        LDX $11         ; X = n
    // mul: A += product, n times
    0x18, //              CLC
    0x65, 0x10, //        ADC $10
    0xCA, //              DEX
    0xD0, 0xFA, //        BNE mul
    0x85, 0x10, //        STA $10         ; product *= n
    0xC6, 0x11, //        DEC $11         ; n--
    0x4C, 0x08, 0x80, //  JMP outer
    // done:
    0xA5, 0x10, //        LDA $10
    0x85, 0x00, //        STA $00         ; result = 120
    0x4C, 0x23, 0x80, //  halt: JMP halt
];

/// Computes the 10th Fibonacci number, F(10) = 55 (0x37).
///
/// Two-variable recurrence starting from F(0)=0, F(1)=1; nine iterations
/// advance `curr` from F(1) to F(10).
const FIBONACCI: &[u8] = &[
    0xA9, 0x00, //        LDA #$00        ; prev = 0
    0x85, 0x10, //        STA $10
    0xA9, 0x01, //        LDA #$01        ; curr = 1
    0x85, 0x11, //        STA $11
    0xA2, 0x09, //        LDX #$09        ; 9 iterations
    // loop:
    0x18, //              CLC
    0xA5, 0x10, //        LDA $10
    0x65, 0x11, //        ADC $11         ; next = prev + curr
    0xA4, 0x11, //        LDY $11
    0x84, 0x10, //        STY $10         ; prev = curr
    0x85, 0x11, //        STA $11         ; curr = next
    0xCA, //              DEX
    0xD0, 0xF2, //        BNE loop
    0xA5, 0x11, //        LDA $11
    0x85, 0x00, //        STA $00         ; result = 55
    0x4C, 0x1C, 0x80, //  halt: JMP halt
];

/// Computes 3 * 10 = 30 (0x1E) by repeated addition.
const MULTIPLY: &[u8] = &[
    0xA9, 0x00, //        LDA #$00
    0xA2, 0x0A, //        LDX #$0A        ; add 3 ten times
    // loop:
    0x18, //              CLC
    0x69, 0x03, //        ADC #$03
    0xCA, //              DEX
    0xD0, 0xFA, //        BNE loop
    0x85, 0x00, //        STA $00         ; result = 30
    0x4C, 0x0C, 0x80, //  halt: JMP halt
];

/// All built-in programs.
pub const PROGRAMS: [Program; 3] = [
    Program {
        name: "factorial",
        description: "Computes 5! and stores 120 (0x78) at 0x0000",
        code: FACTORIAL,
        expected: 0x78,
    },
    Program {
        name: "fibonacci",
        description: "Computes F(10) and stores 55 (0x37) at 0x0000",
        code: FIBONACCI,
        expected: 0x37,
    },
    Program {
        name: "multiply",
        description: "Computes 3 * 10 and stores 30 (0x1E) at 0x0000",
        code: MULTIPLY,
        expected: 0x1E,
    },
];

/// Looks up a built-in program by name.
pub fn builtin(name: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.name == name)
}
