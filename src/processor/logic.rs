use num_traits::FromPrimitive;

use crate::constants::{
    MOVR_DEST_MASK, MOVR_DEST_OFFSET, MOVR_SRC_MASK, OPCODE_OFFSET, OPERAND_MASK,
};
use crate::fault::Fault;
use crate::memory::Storage;
use crate::opcode::Opcode;

use super::Machine;

/// Outcome of one `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    Next,
    Halt,
    Fault(Fault),
}

fn update_flags(machine: &mut Machine, result: i32) {
    machine.zf = result == 0;
    machine.nf = result < 0;
    machine.of = !(0..=255).contains(&result);
}

fn alu_add(machine: &mut Machine, value: u8) {
    let result = machine.ra as i32 + value as i32;
    update_flags(machine, result);
    machine.ra = (result & 0xFF) as u8;
}

fn alu_sub(machine: &mut Machine, value: u8) {
    let result = machine.ra as i32 - value as i32;
    update_flags(machine, result);
    machine.ra = (result & 0xFF) as u8;
}

/// `SP` sits at the overflow edge: one more push/CALL/SUBSP would cross
/// `STOFR`.
fn at_overflow_limit(machine: &Machine) -> bool {
    machine.sp == machine.stofr
}

/// `SP` sits at the underflow edge: nothing left to pop/RET/ADDSP.
fn at_underflow_limit(machine: &Machine) -> bool {
    machine.sp == machine.stufr
}

fn push(machine: &mut Machine, value: u8) -> Option<Fault> {
    if at_overflow_limit(machine) {
        return Some(Fault::StackOverflow);
    }
    machine.sp = machine.sp.wrapping_sub(1);
    machine.memory.write(machine.sp, u16::from(value));
    None
}

fn pop(machine: &mut Machine) -> Result<u8, Fault> {
    if at_underflow_limit(machine) {
        return Err(Fault::StackUnderflow);
    }
    let value = machine.memory.read(machine.sp) as u8;
    machine.sp = machine.sp.wrapping_add(1);
    Ok(value)
}

/// Executes the instruction at `machine.pc`, advancing the program counter
/// and mutating machine state in place.
pub fn tick(machine: &mut Machine) -> TickResult {
    let ir = machine.memory.read(machine.pc);
    machine.ir = ir;
    machine.pc = machine.pc.wrapping_add(1);

    let opcode_byte = (ir >> OPCODE_OFFSET) as u8;
    let operand = (ir & OPERAND_MASK) as u8;

    let opcode = match Opcode::from_u8(opcode_byte) {
        Some(opcode) => opcode,
        None => return TickResult::Fault(Fault::UnknownOpcode(opcode_byte)),
    };

    match opcode {
        Opcode::MovR => {
            let dest = (operand & MOVR_DEST_MASK) >> MOVR_DEST_OFFSET;
            let src = operand & MOVR_SRC_MASK;
            if let Some(value) = machine.register_value(src) {
                if let Some(dest_ref) = machine.register_ref(dest) {
                    *dest_ref = value;
                }
            }
        }

        Opcode::MovA => machine.ra = machine.memory.read(operand) as u8,
        Opcode::MovB => machine.rb = machine.memory.read(operand) as u8,
        Opcode::MovC => machine.rc = machine.memory.read(operand) as u8,
        Opcode::MovE => machine.re = machine.memory.read(operand) as u8,

        Opcode::StorA => machine.memory.write(operand, u16::from(machine.ra)),
        Opcode::StorB => machine.memory.write(operand, u16::from(machine.rb)),
        Opcode::StorC => machine.memory.write(operand, u16::from(machine.rc)),
        Opcode::StorE => machine.memory.write(operand, u16::from(machine.re)),

        Opcode::LdimA => machine.ra = operand,
        Opcode::LdimB => machine.rb = operand,
        Opcode::LdimC => machine.rc = operand,
        Opcode::LdimE => machine.re = operand,

        Opcode::JmpN => {
            if machine.nf {
                machine.pc = operand;
            }
        }
        Opcode::JmpZ => {
            if machine.zf {
                machine.pc = operand;
            }
        }
        Opcode::JmpO => {
            if machine.of {
                machine.pc = operand;
            }
        }
        Opcode::Jmp => machine.pc = operand,

        Opcode::Add => alu_add(machine, operand),
        Opcode::Sub => alu_sub(machine, operand),
        Opcode::AddR => {
            let value = machine.register_value(operand).unwrap_or(0);
            alu_add(machine, value);
        }
        Opcode::SubR => {
            let value = machine.register_value(operand).unwrap_or(0);
            alu_sub(machine, value);
        }

        Opcode::Out => {
            let value = if operand != 0 {
                machine.register_value(operand).unwrap_or(machine.ra)
            } else {
                machine.ra
            };
            println!("OUT: {}", value);
        }

        Opcode::Call => {
            if at_overflow_limit(machine) {
                return TickResult::Fault(Fault::StackOverflow);
            }
            machine.sp = machine.sp.wrapping_sub(1);
            machine.memory.write(machine.sp, u16::from(machine.pc));
            machine.pc = operand;
        }
        Opcode::Ret => match pop(machine) {
            Ok(return_pc) => machine.pc = return_pc,
            Err(fault) => return TickResult::Fault(fault),
        },

        Opcode::MovAPtrB => machine.ra = machine.memory.read(machine.rb) as u8,
        Opcode::StorAPtrB => machine.memory.write(machine.rb, u16::from(machine.ra)),

        Opcode::Push => {
            let value = machine.register_value(operand).unwrap_or(0);
            if let Some(fault) = push(machine, value) {
                return TickResult::Fault(fault);
            }
        }
        Opcode::Pop => match pop(machine) {
            Ok(value) => {
                if let Some(dest_ref) = machine.register_ref(operand) {
                    *dest_ref = value;
                }
            }
            Err(fault) => return TickResult::Fault(fault),
        },

        Opcode::AddSp => {
            if at_underflow_limit(machine) {
                return TickResult::Fault(Fault::StackUnderflow);
            }
            machine.sp = machine.sp.wrapping_add(operand);
        }
        Opcode::SubSp => {
            if at_overflow_limit(machine) {
                return TickResult::Fault(Fault::StackOverflow);
            }
            machine.sp = machine.sp.wrapping_sub(operand);
        }

        Opcode::SStof => machine.stofr = operand,
        Opcode::SStuf => {
            machine.stufr = operand;
            machine.sp = operand;
        }

        Opcode::Hlt => return TickResult::Halt,
    }

    TickResult::Next
}
