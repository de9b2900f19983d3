//! Fuzz target for interrupt delivery.
//!
//! Interleaves NMI edges, IRQ level changes, and resets with instruction
//! stepping to shake out ordering bugs in the arbiter and the WAI/STP
//! gates.

#![no_main]

use arbitrary::Arbitrary;
use lib65816::{Bus, Cpu, FlatMemory};
use libfuzzer_sys::fuzz_target;

/// One scheduled action between steps
#[derive(Debug, Arbitrary)]
enum Action {
    Step,
    Nmi,
    IrqHigh,
    IrqLow,
    SoftReset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    program: [u8; 24],
    actions: Vec<Action>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    for vector in [0xFFE4u32, 0xFFE6, 0xFFEA, 0xFFEE, 0xFFF4, 0xFFFA, 0xFFFE] {
        memory.write(vector, 0x00);
        memory.write(vector + 1, 0x90);
    }
    memory.load(0x8000, &input.program);
    memory.write(0x9000, 0x40); // RTI at every handler

    let mut cpu = Cpu::new(memory);
    cpu.step(); // reset sequence

    for action in input.actions.iter().take(64) {
        match action {
            Action::Step => cpu.step(),
            Action::Nmi => cpu.nmi(),
            Action::IrqHigh => cpu.set_irq(true),
            Action::IrqLow => cpu.set_irq(false),
            Action::SoftReset => cpu.reset(false),
        }
    }

    // Whatever happened, the width invariants hold.
    let state = cpu.debug_state();
    if state.e {
        assert!(state.mf && state.xf);
    }
    if state.xf {
        assert_eq!(state.x & 0xFF00, 0);
        assert_eq!(state.y & 0xFF00, 0);
    }
});
