//! Emulator core: loads a tinyvm binary image and runs it to completion.

pub mod error;

use std::fs;
use std::path::Path;

use tinyvm::{Fault, Machine};

pub use error::Error;

/// Reads a binary image file from disk.
pub fn load_image(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error {
        source,
        path: path.to_path_buf(),
    })
}

/// One per-cycle debug trace record, formatted the way the reference
/// emulator's `-d` flag prints it: the state *before* the next fetch.
pub fn trace_line(machine: &Machine, pc_before_fetch: u8) -> String {
    format!(
        "PC={:02X} IR={:04X} OPCODE={:02X} OPERAND={:02X} RA={} RB={} RC={} RE={} ZF={} NF={} OF={} SP={}",
        pc_before_fetch,
        machine.ir,
        (machine.ir >> 8) as u8,
        (machine.ir & 0x00FF) as u8,
        machine.ra,
        machine.rb,
        machine.rc,
        machine.re,
        machine.zf as u8,
        machine.nf as u8,
        machine.of as u8,
        machine.sp,
    )
}

/// Runs `machine` to completion, calling `on_cycle` with the trace line for
/// every executed instruction (used by the `-d` flag; pass a no-op to run
/// silently).
pub fn run_with_trace<F: FnMut(&str)>(machine: &mut Machine, mut on_cycle: F) -> Result<(), Fault> {
    loop {
        let pc_before_fetch = machine.pc;
        let result = machine.step();
        on_cycle(&trace_line(machine, pc_before_fetch));
        match result {
            tinyvm::TickResult::Next => {}
            tinyvm::TickResult::Halt => return Ok(()),
            tinyvm::TickResult::Fault(fault) => return Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_scenario_one_to_halt() {
        let image: Vec<u8> = vec![
            0x05, 0x0A, 0x07, 0x0B, 0x02, 0x14, 0x00, 0x16, 0x00, 0xFF,
        ];
        let mut machine = Machine::new();
        machine.load_program(&image);

        let mut trace = Vec::new();
        let result = run_with_trace(&mut machine, |line| trace.push(line.to_string()));

        assert_eq!(result, Ok(()));
        assert_eq!(machine.ra, 12);
        assert_eq!(trace.len(), 5);
    }

    #[test]
    fn surfaces_stack_overflow_fault() {
        let mut words = Vec::new();
        for _ in 0..256 {
            words.push(0x01u8);
            words.push(0x1Bu8);
        }
        let mut machine = Machine::new();
        machine.load_program(&words);
        let result = run_with_trace(&mut machine, |_| {});
        assert_eq!(result, Err(Fault::StackOverflow));
    }
}
