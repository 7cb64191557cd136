pub mod constants;
pub mod fault;
pub mod memory;
pub mod opcode;
pub mod parse_error;
pub mod processor;
pub mod register;

pub use fault::Fault;
pub use memory::{Memory, Storage};
pub use opcode::{Opcode, OperandClass};
pub use parse_error::ParseEnumError;
pub use processor::{Machine, State, TickResult};
pub use register::RegisterId;

/// Byte order of the on-disk binary image format (see the image format
/// section of the design): little-endian, fixed regardless of host.
pub type Endian = byteorder::LittleEndian;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_machine_is_ready_with_spec_defaults() {
        let machine = Machine::new();
        assert_eq!(machine.state(), State::Ready);
        assert_eq!(machine.register(RegisterId::SP), 255);
    }

    #[test]
    fn scenario_add_and_output() {
        // LDIMA 5 / LDIMB 7 / ADDR RB / OUT / HLT
        let image: Vec<u8> = vec![
            0x05, 0x0A, 0x07, 0x0B, 0x02, 0x14, 0x00, 0x16, 0x00, 0xFF,
        ];
        let mut machine = Machine::new();
        machine.load_program(&image);
        let result = machine.run();
        assert_eq!(result, Ok(()));
        assert_eq!(machine.ra, 12);
        assert_eq!(machine.state(), State::Halted);
    }

    #[test]
    fn scenario_stack_overflow_after_256_pushes() {
        let mut words = Vec::new();
        for _ in 0..256 {
            words.push(0x01u8); // operand: RA
            words.push(0x1Bu8); // opcode: PUSH
        }
        let mut machine = Machine::new();
        machine.load_program(&words);
        let result = machine.run();
        assert_eq!(result, Err(Fault::StackOverflow));
    }
}
