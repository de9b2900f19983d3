//! # Shift, Rotate, and Bit Read-Modify-Write Instructions
//!
//! ASL, LSR, ROL, ROR, TSB, and TRB in their memory forms. Each follows
//! the read-modify-write sequence: read the operand, spend one internal
//! cycle, write the result back. In 16-bit mode the write-back happens
//! high byte first so the bus pattern matches the chip; in 8-bit mode the
//! interrupt poll sits just before the final write.
//!
//! ROL and ROR feed the carry through the vacated bit; ASL and LSR discard
//! it. TSB and TRB compute Z from the pre-modify operand.

use crate::cpu::Cpu;
use crate::memory::Bus;

pub(crate) fn execute_asl<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let result;
    if cpu.flag_m {
        let shifted = (cpu.read(low) as u32) << 1;
        cpu.idle();
        cpu.flag_c = shifted & 0x100 != 0;
        result = shifted as u16;
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        let shifted = (cpu.read_word(low, high, false) as u32) << 1;
        cpu.idle();
        cpu.flag_c = shifted & 0x10000 != 0;
        result = shifted as u16;
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
}

pub(crate) fn execute_lsr<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let result;
    if cpu.flag_m {
        let value = cpu.read(low);
        cpu.idle();
        cpu.flag_c = value & 1 != 0;
        result = (value >> 1) as u16;
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        let value = cpu.read_word(low, high, false);
        cpu.idle();
        cpu.flag_c = value & 1 != 0;
        result = value >> 1;
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
}

pub(crate) fn execute_rol<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let result;
    if cpu.flag_m {
        let rotated = ((cpu.read(low) as u32) << 1) | cpu.flag_c as u32;
        cpu.idle();
        cpu.flag_c = rotated & 0x100 != 0;
        result = rotated as u16;
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        let rotated = ((cpu.read_word(low, high, false) as u32) << 1) | cpu.flag_c as u32;
        cpu.idle();
        cpu.flag_c = rotated & 0x10000 != 0;
        result = rotated as u16;
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
}

pub(crate) fn execute_ror<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    let carry;
    let result;
    if cpu.flag_m {
        let value = cpu.read(low);
        cpu.idle();
        carry = value & 1 != 0;
        result = ((value >> 1) | (cpu.flag_c as u8) << 7) as u16;
        cpu.check_interrupts();
        cpu.write(low, result as u8);
    } else {
        let value = cpu.read_word(low, high, false);
        cpu.idle();
        carry = value & 1 != 0;
        result = (value >> 1) | (cpu.flag_c as u16) << 15;
        cpu.write_word(low, high, result, true, true);
    }
    cpu.set_zn(result, cpu.flag_m);
    cpu.flag_c = carry;
}

/// TSB: Z from `A & operand`, then write back `operand | A`.
pub(crate) fn execute_tsb<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    if cpu.flag_m {
        let value = cpu.read(low);
        cpu.idle();
        cpu.flag_z = (cpu.a as u8 & value) == 0;
        cpu.check_interrupts();
        cpu.write(low, value | cpu.a as u8);
    } else {
        let value = cpu.read_word(low, high, false);
        cpu.idle();
        cpu.flag_z = cpu.a & value == 0;
        let result = value | cpu.a;
        cpu.write_word(low, high, result, true, true);
    }
}

/// TRB: Z from `A & operand`, then write back `operand & !A`.
pub(crate) fn execute_trb<B: Bus>(cpu: &mut Cpu<B>, low: u32, high: u32) {
    if cpu.flag_m {
        let value = cpu.read(low);
        cpu.idle();
        cpu.flag_z = (cpu.a as u8 & value) == 0;
        cpu.check_interrupts();
        cpu.write(low, value & !(cpu.a as u8));
    } else {
        let value = cpu.read_word(low, high, false);
        cpu.idle();
        cpu.flag_z = cpu.a & value == 0;
        let result = value & !cpu.a;
        cpu.write_word(low, high, result, true, true);
    }
}
