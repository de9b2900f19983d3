//! # 65C816 Instruction Implementations
//!
//! This module contains the memory-operand instruction implementations,
//! organized by category. Each instruction is a standalone function taking a
//! mutable reference to the CPU plus the `(low, high)` effective addresses
//! produced by an addressing-mode calculator; the function decides from its
//! width flag (M for accumulator/memory operations, X for index operations)
//! whether to touch one address or both.
//!
//! Register-only operations (transfers, flag sets, pushes and pulls, the
//! accumulator forms of the shifts) are implemented inline in the dispatcher
//! where the cycle sequence is a single implied access.
//!
//! ## Categories
//!
//! - **alu**: arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **load_store**: loads and stores (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **shifts**: read-modify-write shifts and bit ops (ASL, LSR, ROL, ROR, TSB, TRB)
//! - **inc_dec**: read-modify-write increment and decrement (INC, DEC)
//! - **control**: multi-cycle control flow (BRK, COP, JSR, JSL, RTS, RTL, RTI,
//!   MVN, MVP, PEA, PEI, PER, WAI, STP)

pub mod alu;
pub mod control;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
