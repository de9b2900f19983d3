//! # Control Flow Instructions
//!
//! The multi-cycle control operations: software interrupts (BRK, COP),
//! subroutine linkage (JSR, JSL, RTS, RTL, RTI), the block moves (MVN,
//! MVP), the stack-effect addressing instructions (PEA, PEI, PER), and the
//! processor-halt pair (WAI, STP).
//!
//! The jump family that fits in one or two bus accesses (JMP, JML and the
//! indirect forms) lives in the dispatcher, where the program-bank
//! handling reads more naturally next to the fetch logic.

use crate::cpu::Cpu;
use crate::memory::Bus;

/// BRK: software interrupt through the BRK vector. Pushes the program
/// bank (native mode only), the return PC, and the flag byte with bit 4
/// set, then enters the handler with I set and D clear.
pub(crate) fn execute_brk<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.read_opcode(); // signature byte
    if !cpu.flag_e {
        let k = cpu.k;
        cpu.push_byte(k);
    }
    let pc = cpu.pc;
    cpu.push_word(pc, false);
    let flags = cpu.get_flags() | 0x10;
    cpu.push_byte(flags);
    cpu.flag_i = true;
    cpu.flag_d = false;
    cpu.k = 0;
    let vector: u32 = if cpu.flag_e { 0xFFFE } else { 0xFFE6 };
    cpu.pc = cpu.read_word(vector, vector + 1, true);
}

/// COP: coprocessor interrupt through the COP vector. Same frame as BRK
/// but the flag byte is pushed unmodified.
pub(crate) fn execute_cop<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.read_opcode(); // signature byte
    if !cpu.flag_e {
        let k = cpu.k;
        cpu.push_byte(k);
    }
    let pc = cpu.pc;
    cpu.push_word(pc, false);
    let flags = cpu.get_flags();
    cpu.push_byte(flags);
    cpu.flag_i = true;
    cpu.flag_d = false;
    cpu.k = 0;
    let vector: u32 = if cpu.flag_e { 0xFFF4 } else { 0xFFE4 };
    cpu.pc = cpu.read_word(vector, vector + 1, true);
}

/// JSR absolute: push PC-1, jump within the program bank.
pub(crate) fn execute_jsr<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.read_opcode_word(false);
    cpu.idle();
    let ret = cpu.pc.wrapping_sub(1);
    cpu.push_word(ret, true);
    cpu.pc = value;
}

/// JSL absolute long: fetch a 24-bit target, push PC-1, switch banks.
pub(crate) fn execute_jsl<B: Bus>(cpu: &mut Cpu<B>) {
    let mut value = cpu.read_opcode_word(false) as u32;
    value |= (cpu.read_opcode() as u32) << 16;
    let ret = cpu.pc.wrapping_sub(1);
    cpu.push_word(ret, true);
    cpu.k = (value >> 16) as u8;
    cpu.pc = value as u16;
}

/// RTS: pull the return address and resume at address + 1.
pub(crate) fn execute_rts<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.idle();
    cpu.idle();
    cpu.pc = cpu.pull_word(false).wrapping_add(1);
    cpu.check_interrupts();
    cpu.idle();
}

/// RTL: like RTS but also pulls the program bank.
pub(crate) fn execute_rtl<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.idle();
    cpu.idle();
    cpu.pc = cpu.pull_word(false).wrapping_add(1);
    cpu.check_interrupts();
    cpu.k = cpu.pull_byte();
}

/// RTI: pull flags (normalized through the flag setter), PC, and - in
/// native mode - the program bank.
pub(crate) fn execute_rti<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.adr_imp();
    cpu.idle();
    let flags = cpu.pull_byte();
    cpu.set_flags(flags);
    cpu.pc = cpu.pull_word(false);
    if !cpu.flag_e {
        cpu.k = cpu.pull_byte();
    }
}

/// MVP: block move with descending addresses.
pub(crate) fn execute_mvp<B: Bus>(cpu: &mut Cpu<B>) {
    block_move(cpu, false);
}

/// MVN: block move with ascending addresses.
pub(crate) fn execute_mvn<B: Bus>(cpu: &mut Cpu<B>) {
    block_move(cpu, true);
}

/// One step of a block move: transfer a byte from `src_bank:X` to
/// `dest_bank:Y`, update A/X/Y, and rewind PC so the instruction repeats
/// until A wraps past zero. DB is left holding the destination bank.
fn block_move<B: Bus>(cpu: &mut Cpu<B>, forward: bool) {
    let dest = cpu.read_opcode();
    let src = cpu.read_opcode();
    cpu.db = dest;
    let value = cpu.read(((src as u32) << 16) | cpu.x as u32);
    cpu.write(((dest as u32) << 16) | cpu.y as u32, value);
    cpu.a = cpu.a.wrapping_sub(1);
    if forward {
        cpu.x = cpu.x.wrapping_add(1);
        cpu.y = cpu.y.wrapping_add(1);
    } else {
        cpu.x = cpu.x.wrapping_sub(1);
        cpu.y = cpu.y.wrapping_sub(1);
    }
    if cpu.a != 0xFFFF {
        cpu.pc = cpu.pc.wrapping_sub(3);
    }
    if cpu.flag_x {
        cpu.x &= 0xFF;
        cpu.y &= 0xFF;
    }
    cpu.idle();
    cpu.check_interrupts();
    cpu.idle();
}

/// PEA: push a 16-bit immediate.
pub(crate) fn execute_pea<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.read_opcode_word(false);
    cpu.push_word(value, true);
}

/// PEI: push the 16-bit word at a direct-page location.
pub(crate) fn execute_pei<B: Bus>(cpu: &mut Cpu<B>) {
    let (low, high) = cpu.adr_dp();
    let value = cpu.read_word(low, high, false);
    cpu.push_word(value, true);
}

/// PER: push PC plus a signed 16-bit displacement.
pub(crate) fn execute_per<B: Bus>(cpu: &mut Cpu<B>) {
    let offset = cpu.read_opcode_word(false);
    cpu.idle();
    let value = cpu.pc.wrapping_add(offset);
    cpu.push_word(value, true);
}

/// WAI: park the CPU until an interrupt line is raised.
pub(crate) fn execute_wai<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.waiting = true;
    cpu.idle();
    cpu.idle();
}

/// STP: stop the clock; only a reset restarts execution.
pub(crate) fn execute_stp<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.stopped = true;
    cpu.idle();
    cpu.idle();
}
