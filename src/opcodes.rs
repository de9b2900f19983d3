//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for 65C816 decode information.
//!
//! Unlike its 8-bit ancestors the 65C816 has no undefined opcodes: all 256
//! byte values decode to a documented instruction. Cycle counts and operand
//! sizes are not tabulated because on this chip they depend on the current
//! width flags, the direct-page alignment, and page crossings; the
//! execution core expresses timing directly as bus traffic instead.
//!
//! The dispatcher does not consult this table - it decodes with a match so
//! the compiler can inline the hot opcodes. The table exists for hosts:
//! debuggers, disassemblers, and the test suite.

use crate::addressing::AddressingMode;

/// Metadata for a single 65C816 opcode.
///
/// # Examples
///
/// ```
/// use lib65816::{AddressingMode, OPCODE_TABLE};
///
/// // Look up LDA absolute (opcode 0xAD)
/// let lda_abs = &OPCODE_TABLE[0xAD];
/// assert_eq!(lda_abs.mnemonic, "LDA");
/// assert_eq!(lda_abs.addressing_mode, AddressingMode::Absolute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "MVN", "XCE").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,
}

use AddressingMode::*;

const fn op(mnemonic: &'static str, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Immediate8),                    // 0x00
    op("ORA", DirectIndexedIndirect),         // 0x01
    op("COP", Immediate8),                    // 0x02
    op("ORA", StackRelative),                 // 0x03
    op("TSB", Direct),                        // 0x04
    op("ORA", Direct),                        // 0x05
    op("ASL", Direct),                        // 0x06
    op("ORA", DirectIndirectLong),            // 0x07
    op("PHP", Implied),                       // 0x08
    op("ORA", ImmediateM),                    // 0x09
    op("ASL", Accumulator),                   // 0x0A
    op("PHD", Implied),                       // 0x0B
    op("TSB", Absolute),                      // 0x0C
    op("ORA", Absolute),                      // 0x0D
    op("ASL", Absolute),                      // 0x0E
    op("ORA", AbsoluteLong),                  // 0x0F
    op("BPL", Relative),                      // 0x10
    op("ORA", DirectIndirectIndexed),         // 0x11
    op("ORA", DirectIndirect),                // 0x12
    op("ORA", StackRelativeIndirectIndexed),  // 0x13
    op("TRB", Direct),                        // 0x14
    op("ORA", DirectX),                       // 0x15
    op("ASL", DirectX),                       // 0x16
    op("ORA", DirectIndirectLongIndexed),     // 0x17
    op("CLC", Implied),                       // 0x18
    op("ORA", AbsoluteY),                     // 0x19
    op("INC", Accumulator),                   // 0x1A
    op("TCS", Implied),                       // 0x1B
    op("TRB", Absolute),                      // 0x1C
    op("ORA", AbsoluteX),                     // 0x1D
    op("ASL", AbsoluteX),                     // 0x1E
    op("ORA", AbsoluteLongX),                 // 0x1F
    op("JSR", Absolute),                      // 0x20
    op("AND", DirectIndexedIndirect),         // 0x21
    op("JSL", AbsoluteLong),                  // 0x22
    op("AND", StackRelative),                 // 0x23
    op("BIT", Direct),                        // 0x24
    op("AND", Direct),                        // 0x25
    op("ROL", Direct),                        // 0x26
    op("AND", DirectIndirectLong),            // 0x27
    op("PLP", Implied),                       // 0x28
    op("AND", ImmediateM),                    // 0x29
    op("ROL", Accumulator),                   // 0x2A
    op("PLD", Implied),                       // 0x2B
    op("BIT", Absolute),                      // 0x2C
    op("AND", Absolute),                      // 0x2D
    op("ROL", Absolute),                      // 0x2E
    op("AND", AbsoluteLong),                  // 0x2F
    op("BMI", Relative),                      // 0x30
    op("AND", DirectIndirectIndexed),         // 0x31
    op("AND", DirectIndirect),                // 0x32
    op("AND", StackRelativeIndirectIndexed),  // 0x33
    op("BIT", DirectX),                       // 0x34
    op("AND", DirectX),                       // 0x35
    op("ROL", DirectX),                       // 0x36
    op("AND", DirectIndirectLongIndexed),     // 0x37
    op("SEC", Implied),                       // 0x38
    op("AND", AbsoluteY),                     // 0x39
    op("DEC", Accumulator),                   // 0x3A
    op("TSC", Implied),                       // 0x3B
    op("BIT", AbsoluteX),                     // 0x3C
    op("AND", AbsoluteX),                     // 0x3D
    op("ROL", AbsoluteX),                     // 0x3E
    op("AND", AbsoluteLongX),                 // 0x3F
    op("RTI", Implied),                       // 0x40
    op("EOR", DirectIndexedIndirect),         // 0x41
    op("WDM", Immediate8),                    // 0x42
    op("EOR", StackRelative),                 // 0x43
    op("MVP", BlockMove),                     // 0x44
    op("EOR", Direct),                        // 0x45
    op("LSR", Direct),                        // 0x46
    op("EOR", DirectIndirectLong),            // 0x47
    op("PHA", Implied),                       // 0x48
    op("EOR", ImmediateM),                    // 0x49
    op("LSR", Accumulator),                   // 0x4A
    op("PHK", Implied),                       // 0x4B
    op("JMP", Absolute),                      // 0x4C
    op("EOR", Absolute),                      // 0x4D
    op("LSR", Absolute),                      // 0x4E
    op("EOR", AbsoluteLong),                  // 0x4F
    op("BVC", Relative),                      // 0x50
    op("EOR", DirectIndirectIndexed),         // 0x51
    op("EOR", DirectIndirect),                // 0x52
    op("EOR", StackRelativeIndirectIndexed),  // 0x53
    op("MVN", BlockMove),                     // 0x54
    op("EOR", DirectX),                       // 0x55
    op("LSR", DirectX),                       // 0x56
    op("EOR", DirectIndirectLongIndexed),     // 0x57
    op("CLI", Implied),                       // 0x58
    op("EOR", AbsoluteY),                     // 0x59
    op("PHY", Implied),                       // 0x5A
    op("TCD", Implied),                       // 0x5B
    op("JML", AbsoluteLong),                  // 0x5C
    op("EOR", AbsoluteX),                     // 0x5D
    op("LSR", AbsoluteX),                     // 0x5E
    op("EOR", AbsoluteLongX),                 // 0x5F
    op("RTS", Implied),                       // 0x60
    op("ADC", DirectIndexedIndirect),         // 0x61
    op("PER", RelativeLong),                  // 0x62
    op("ADC", StackRelative),                 // 0x63
    op("STZ", Direct),                        // 0x64
    op("ADC", Direct),                        // 0x65
    op("ROR", Direct),                        // 0x66
    op("ADC", DirectIndirectLong),            // 0x67
    op("PLA", Implied),                       // 0x68
    op("ADC", ImmediateM),                    // 0x69
    op("ROR", Accumulator),                   // 0x6A
    op("RTL", Implied),                       // 0x6B
    op("JMP", AbsoluteIndirect),              // 0x6C
    op("ADC", Absolute),                      // 0x6D
    op("ROR", Absolute),                      // 0x6E
    op("ADC", AbsoluteLong),                  // 0x6F
    op("BVS", Relative),                      // 0x70
    op("ADC", DirectIndirectIndexed),         // 0x71
    op("ADC", DirectIndirect),                // 0x72
    op("ADC", StackRelativeIndirectIndexed),  // 0x73
    op("STZ", DirectX),                       // 0x74
    op("ADC", DirectX),                       // 0x75
    op("ROR", DirectX),                       // 0x76
    op("ADC", DirectIndirectLongIndexed),     // 0x77
    op("SEI", Implied),                       // 0x78
    op("ADC", AbsoluteY),                     // 0x79
    op("PLY", Implied),                       // 0x7A
    op("TDC", Implied),                       // 0x7B
    op("JMP", AbsoluteIndexedIndirect),       // 0x7C
    op("ADC", AbsoluteX),                     // 0x7D
    op("ROR", AbsoluteX),                     // 0x7E
    op("ADC", AbsoluteLongX),                 // 0x7F
    op("BRA", Relative),                      // 0x80
    op("STA", DirectIndexedIndirect),         // 0x81
    op("BRL", RelativeLong),                  // 0x82
    op("STA", StackRelative),                 // 0x83
    op("STY", Direct),                        // 0x84
    op("STA", Direct),                        // 0x85
    op("STX", Direct),                        // 0x86
    op("STA", DirectIndirectLong),            // 0x87
    op("DEY", Implied),                       // 0x88
    op("BIT", ImmediateM),                    // 0x89
    op("TXA", Implied),                       // 0x8A
    op("PHB", Implied),                       // 0x8B
    op("STY", Absolute),                      // 0x8C
    op("STA", Absolute),                      // 0x8D
    op("STX", Absolute),                      // 0x8E
    op("STA", AbsoluteLong),                  // 0x8F
    op("BCC", Relative),                      // 0x90
    op("STA", DirectIndirectIndexed),         // 0x91
    op("STA", DirectIndirect),                // 0x92
    op("STA", StackRelativeIndirectIndexed),  // 0x93
    op("STY", DirectX),                       // 0x94
    op("STA", DirectX),                       // 0x95
    op("STX", DirectY),                       // 0x96
    op("STA", DirectIndirectLongIndexed),     // 0x97
    op("TYA", Implied),                       // 0x98
    op("STA", AbsoluteY),                     // 0x99
    op("TXS", Implied),                       // 0x9A
    op("TXY", Implied),                       // 0x9B
    op("STZ", Absolute),                      // 0x9C
    op("STA", AbsoluteX),                     // 0x9D
    op("STZ", AbsoluteX),                     // 0x9E
    op("STA", AbsoluteLongX),                 // 0x9F
    op("LDY", ImmediateX),                    // 0xA0
    op("LDA", DirectIndexedIndirect),         // 0xA1
    op("LDX", ImmediateX),                    // 0xA2
    op("LDA", StackRelative),                 // 0xA3
    op("LDY", Direct),                        // 0xA4
    op("LDA", Direct),                        // 0xA5
    op("LDX", Direct),                        // 0xA6
    op("LDA", DirectIndirectLong),            // 0xA7
    op("TAY", Implied),                       // 0xA8
    op("LDA", ImmediateM),                    // 0xA9
    op("TAX", Implied),                       // 0xAA
    op("PLB", Implied),                       // 0xAB
    op("LDY", Absolute),                      // 0xAC
    op("LDA", Absolute),                      // 0xAD
    op("LDX", Absolute),                      // 0xAE
    op("LDA", AbsoluteLong),                  // 0xAF
    op("BCS", Relative),                      // 0xB0
    op("LDA", DirectIndirectIndexed),         // 0xB1
    op("LDA", DirectIndirect),                // 0xB2
    op("LDA", StackRelativeIndirectIndexed),  // 0xB3
    op("LDY", DirectX),                       // 0xB4
    op("LDA", DirectX),                       // 0xB5
    op("LDX", DirectY),                       // 0xB6
    op("LDA", DirectIndirectLongIndexed),     // 0xB7
    op("CLV", Implied),                       // 0xB8
    op("LDA", AbsoluteY),                     // 0xB9
    op("TSX", Implied),                       // 0xBA
    op("TYX", Implied),                       // 0xBB
    op("LDY", AbsoluteX),                     // 0xBC
    op("LDA", AbsoluteX),                     // 0xBD
    op("LDX", AbsoluteY),                     // 0xBE
    op("LDA", AbsoluteLongX),                 // 0xBF
    op("CPY", ImmediateX),                    // 0xC0
    op("CMP", DirectIndexedIndirect),         // 0xC1
    op("REP", Immediate8),                    // 0xC2
    op("CMP", StackRelative),                 // 0xC3
    op("CPY", Direct),                        // 0xC4
    op("CMP", Direct),                        // 0xC5
    op("DEC", Direct),                        // 0xC6
    op("CMP", DirectIndirectLong),            // 0xC7
    op("INY", Implied),                       // 0xC8
    op("CMP", ImmediateM),                    // 0xC9
    op("DEX", Implied),                       // 0xCA
    op("WAI", Implied),                       // 0xCB
    op("CPY", Absolute),                      // 0xCC
    op("CMP", Absolute),                      // 0xCD
    op("DEC", Absolute),                      // 0xCE
    op("CMP", AbsoluteLong),                  // 0xCF
    op("BNE", Relative),                      // 0xD0
    op("CMP", DirectIndirectIndexed),         // 0xD1
    op("CMP", DirectIndirect),                // 0xD2
    op("CMP", StackRelativeIndirectIndexed),  // 0xD3
    op("PEI", DirectIndirect),                // 0xD4
    op("CMP", DirectX),                       // 0xD5
    op("DEC", DirectX),                       // 0xD6
    op("CMP", DirectIndirectLongIndexed),     // 0xD7
    op("CLD", Implied),                       // 0xD8
    op("CMP", AbsoluteY),                     // 0xD9
    op("PHX", Implied),                       // 0xDA
    op("STP", Implied),                       // 0xDB
    op("JML", AbsoluteIndirectLong),          // 0xDC
    op("CMP", AbsoluteX),                     // 0xDD
    op("DEC", AbsoluteX),                     // 0xDE
    op("CMP", AbsoluteLongX),                 // 0xDF
    op("CPX", ImmediateX),                    // 0xE0
    op("SBC", DirectIndexedIndirect),         // 0xE1
    op("SEP", Immediate8),                    // 0xE2
    op("SBC", StackRelative),                 // 0xE3
    op("CPX", Direct),                        // 0xE4
    op("SBC", Direct),                        // 0xE5
    op("INC", Direct),                        // 0xE6
    op("SBC", DirectIndirectLong),            // 0xE7
    op("INX", Implied),                       // 0xE8
    op("SBC", ImmediateM),                    // 0xE9
    op("NOP", Implied),                       // 0xEA
    op("XBA", Implied),                       // 0xEB
    op("CPX", Absolute),                      // 0xEC
    op("SBC", Absolute),                      // 0xED
    op("INC", Absolute),                      // 0xEE
    op("SBC", AbsoluteLong),                  // 0xEF
    op("BEQ", Relative),                      // 0xF0
    op("SBC", DirectIndirectIndexed),         // 0xF1
    op("SBC", DirectIndirect),                // 0xF2
    op("SBC", StackRelativeIndirectIndexed),  // 0xF3
    op("PEA", StackPush),                     // 0xF4
    op("SBC", DirectX),                       // 0xF5
    op("INC", DirectX),                       // 0xF6
    op("SBC", DirectIndirectLongIndexed),     // 0xF7
    op("SED", Implied),                       // 0xF8
    op("SBC", AbsoluteY),                     // 0xF9
    op("PLX", Implied),                       // 0xFA
    op("XCE", Implied),                       // 0xFB
    op("JSR", AbsoluteIndexedIndirect),       // 0xFC
    op("SBC", AbsoluteX),                     // 0xFD
    op("INC", AbsoluteX),                     // 0xFE
    op("SBC", AbsoluteLongX),                 // 0xFF
];
