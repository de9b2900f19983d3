//! # Increment and Decrement Instructions
//!
//! The memory forms of INC and DEC. Single read-modify-write sequence with
//! the reversed (high-then-low) write-back order in 16-bit mode.

use crate::cpu::Cpu;
use crate::memory::Bus;

pub(crate) fn execute_inc<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let result;
    if cpu.flag_m {
        result = (cpu.read(low) as u16).wrapping_add(1);
        cpu.idle();
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        result = cpu.read_word(low, high, false).wrapping_add(1);
        cpu.idle();
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
}

pub(crate) fn execute_dec<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let result;
    if cpu.flag_m {
        result = (cpu.read(low) as u16).wrapping_sub(1);
        cpu.idle();
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        result = cpu.read_word(low, high, false).wrapping_sub(1);
        cpu.idle();
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
}
