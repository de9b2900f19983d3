//! Tests for the conditional branches, BRA, and BRL.

use lib65816::{Bus, Cpu, FlatMemory};

struct CountingBus {
    mem: FlatMemory,
    cycles: u64,
}

impl Bus for CountingBus {
    fn read(&mut self, addr: u32) -> u8 {
        self.cycles += 1;
        self.mem.read(addr)
    }

    fn write(&mut self, addr: u32, value: u8) {
        self.cycles += 1;
        self.mem.write(addr, value);
    }

    fn idle(&mut self, _waiting: bool) {
        self.cycles += 1;
    }
}

fn setup_cpu(program: &[u8]) -> Cpu<CountingBus> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);
    let mut cpu = Cpu::new(CountingBus {
        mem: memory,
        cycles: 0,
    });
    cpu.step();
    cpu
}

fn step_counted(cpu: &mut Cpu<CountingBus>) -> u64 {
    let before = cpu.bus().cycles;
    cpu.step();
    cpu.bus().cycles - before
}

#[test]
fn test_branch_not_taken() {
    let mut cpu = setup_cpu(&[0xD0, 0x10]); // BNE +$10
    cpu.set_flag_z(true);

    let cycles = step_counted(&mut cpu);

    assert_eq!(cpu.pc(), 0x8002); // falls through
    assert_eq!(cycles, 2);
}

#[test]
fn test_branch_taken_forward() {
    let mut cpu = setup_cpu(&[0xD0, 0x10]); // BNE +$10
    cpu.set_flag_z(false);

    let cycles = step_counted(&mut cpu);

    assert_eq!(cpu.pc(), 0x8012);
    assert_eq!(cycles, 3); // taken branch pays one cycle
}

#[test]
fn test_branch_taken_backward() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0xF0, 0xFC]); // NOP; NOP; BEQ -4
    cpu.set_flag_z(true);
    cpu.step();
    cpu.step();

    cpu.step(); // BEQ

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_all_branch_conditions() {
    // each pair: (opcode, flag setter, taken when flag is...)
    let cases: &[(u8, fn(&mut Cpu<CountingBus>, bool), bool)] = &[
        (0x10, |c, v| c.set_flag_n(v), false), // BPL
        (0x30, |c, v| c.set_flag_n(v), true),  // BMI
        (0x50, |c, v| c.set_flag_v(v), false), // BVC
        (0x70, |c, v| c.set_flag_v(v), true),  // BVS
        (0x90, |c, v| c.set_flag_c(v), false), // BCC
        (0xB0, |c, v| c.set_flag_c(v), true),  // BCS
        (0xD0, |c, v| c.set_flag_z(v), false), // BNE
        (0xF0, |c, v| c.set_flag_z(v), true),  // BEQ
    ];

    for &(opcode, set_flag, taken_when) in cases {
        // taken case
        let mut cpu = setup_cpu(&[opcode, 0x02]);
        set_flag(&mut cpu, taken_when);
        cpu.step();
        assert_eq!(cpu.pc(), 0x8004, "opcode {opcode:#04x} should take");

        // not-taken case
        let mut cpu = setup_cpu(&[opcode, 0x02]);
        set_flag(&mut cpu, !taken_when);
        cpu.step();
        assert_eq!(cpu.pc(), 0x8002, "opcode {opcode:#04x} should fall through");
    }
}

#[test]
fn test_bra_always_taken() {
    let mut cpu = setup_cpu(&[0x80, 0x7F]); // BRA +$7F
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);

    let cycles = step_counted(&mut cpu);

    assert_eq!(cpu.pc(), 0x8081);
    assert_eq!(cycles, 3);
}

#[test]
fn test_brl_long_displacement() {
    let mut cpu = setup_cpu(&[0x82, 0x00, 0x10]); // BRL +$1000
    let cycles = step_counted(&mut cpu);

    assert_eq!(cpu.pc(), 0x9003);
    assert_eq!(cycles, 4);
}

#[test]
fn test_brl_negative_displacement() {
    let mut cpu = setup_cpu(&[0x82, 0xFD, 0xFF]); // BRL -3
    cpu.step();

    assert_eq!(cpu.pc(), 0x8000); // back to the BRL itself
}
