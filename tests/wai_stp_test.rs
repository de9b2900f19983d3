//! Tests for WAI and STP, including the host-visible waiting flag on the
//! idle callback.

use lib65816::{Bus, Cpu, FlatMemory};

/// Bus that records how many idle ticks arrived with `waiting` set.
struct WaitTrackingBus {
    mem: FlatMemory,
    idle_waiting: u32,
    idle_normal: u32,
}

impl Bus for WaitTrackingBus {
    fn read(&mut self, addr: u32) -> u8 {
        self.mem.read(addr)
    }

    fn write(&mut self, addr: u32, value: u8) {
        self.mem.write(addr, value);
    }

    fn idle(&mut self, waiting: bool) {
        if waiting {
            self.idle_waiting += 1;
        } else {
            self.idle_normal += 1;
        }
    }
}

fn setup_cpu(program: &[u8]) -> Cpu<WaitTrackingBus> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0xFFFA, &[0x00, 0xB2]); // emulation NMI -> $B200
    memory.load(0xFFFE, &[0x00, 0xB3]); // emulation IRQ -> $B300
    memory.load(0x8000, program);
    let mut cpu = Cpu::new(WaitTrackingBus {
        mem: memory,
        idle_waiting: 0,
        idle_normal: 0,
    });
    cpu.step();
    cpu
}

#[test]
fn test_wai_parks_until_interrupt() {
    let mut cpu = setup_cpu(&[0xCB, 0xEA]); // WAI; NOP
    cpu.step(); // WAI
    assert!(cpu.waiting());
    assert_eq!(cpu.pc(), 0x8001);

    // parked ticks are flagged for the host
    cpu.step();
    cpu.step();
    assert_eq!(cpu.bus().idle_waiting, 2);
    assert_eq!(cpu.pc(), 0x8001); // no progress

    cpu.nmi();
    cpu.step(); // leaves the wait and services the NMI on the next step
    assert!(!cpu.waiting());
    cpu.step();
    assert_eq!(cpu.pc(), 0xB200);
}

#[test]
fn test_wai_with_masked_irq_continues_inline() {
    // with I set, an IRQ releases the wait but is not serviced
    let mut cpu = setup_cpu(&[0xCB, 0xEA]); // reset leaves I=1
    cpu.step(); // WAI
    cpu.set_irq(true);

    cpu.step(); // wake
    assert!(!cpu.waiting());
    cpu.step(); // the NOP after WAI executes

    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_stp_halts_until_reset() {
    let mut cpu = setup_cpu(&[0xDB, 0xEA]); // STP; NOP
    cpu.step(); // STP
    assert!(cpu.stopped());

    // interrupts cannot wake a stopped CPU
    cpu.nmi();
    cpu.set_irq(true);
    cpu.step();
    cpu.step();
    assert!(cpu.stopped());
    assert_eq!(cpu.bus().idle_waiting, 2);

    // only reset clears the stop
    cpu.reset(false);
    cpu.step(); // reset sequence
    assert!(!cpu.stopped());
    assert_eq!(cpu.pc(), 0x8000);
}
