//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, then
//! executes a bounded number of instructions to find panics and invariant
//! violations.

#![no_main]

use arbitrary::Arbitrary;
use lib65816::{Bus, Cpu, FlatMemory};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Accumulator register
    a: u16,
    /// X index register
    x: u16,
    /// Y index register
    y: u16,
    /// Stack pointer
    sp: u16,
    /// Direct-page base
    dp: u16,
    /// Data bank
    db: u8,
    /// Packed status byte, loaded through the normalizing setter
    status: u8,
    /// Whether to leave emulation mode before fuzzing
    native: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the program location (instructions + operands)
    program: [u8; 32],
    /// Direct page / zero page contents
    direct_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset and interrupt vectors all point at small handlers so stray
    // control flow stays inside mapped memory.
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    for vector in [0xFFE4u32, 0xFFE6, 0xFFEA, 0xFFEE, 0xFFF4, 0xFFFA, 0xFFFE] {
        memory.write(vector, 0x00);
        memory.write(vector + 1, 0x90);
    }

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.direct_page);
    memory.load(0x0100, &input.memory.stack_page);

    let mut cpu = Cpu::new(memory);
    cpu.step(); // run the reset sequence

    if input.cpu_state.native {
        // CLC; XCE at the handler address leaves emulation mode
        cpu.bus_mut().load(0x9000, &[0x18, 0xFB]);
        cpu.set_pc(0x9000);
        cpu.step();
        cpu.step();
        cpu.set_pc(0x8000);
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    if cpu.emulation() {
        // seed the stack pointer the way the hardware would hold it
        cpu.set_sp(0x0100 | (input.cpu_state.sp & 0xFF));
    } else {
        cpu.set_sp(input.cpu_state.sp);
    }
    cpu.set_dp(input.cpu_state.dp);
    cpu.set_db(input.cpu_state.db);
    cpu.set_status(input.cpu_state.status);

    // Execute a bounded number of instructions - just no panics.
    for _ in 0..32 {
        cpu.step();
    }

    // Structural invariants that must hold after any instruction.
    let state = cpu.debug_state();
    if state.e {
        assert!(state.mf && state.xf, "emulation mode must pin M and X");
        assert_eq!(state.sp & 0xFF00, 0x0100, "emulation-mode SP must stay in page 1");
    }
    if state.xf {
        assert_eq!(state.x & 0xFF00, 0, "8-bit X must have a clear upper byte");
        assert_eq!(state.y & 0xFF00, 0, "8-bit Y must have a clear upper byte");
    }
});
