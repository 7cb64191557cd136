mod logic;

use crate::constants::{DEFAULT_STOFR, DEFAULT_STUFR};
use crate::fault::Fault;
use crate::memory::Memory;
use crate::register::RegisterId;

pub use self::logic::TickResult;

/// Lifecycle state of the emulator. Transitions out of `Running` are
/// one-way: `Halted` and `Faulted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Ready,
    Running,
    Halted,
    Faulted,
}

/// The complete machine state: the five architectural registers, the three
/// flags, the hidden PC/IR/STOFR/STUFR registers, and memory.
///
/// Registers and flags are public so that callers (the emulator CLI's debug
/// trace, tests) can inspect them without a getter per field; `logic::tick`
/// mutates them directly as it executes one instruction.
pub struct Machine {
    pub memory: Memory,
    pub ra: u8,
    pub rb: u8,
    pub rc: u8,
    pub re: u8,
    pub sp: u8,
    pub pc: u8,
    pub ir: u16,
    pub stofr: u8,
    pub stufr: u8,
    pub zf: bool,
    pub nf: bool,
    pub of: bool,
    state: State,
    last_fault: Option<Fault>,
}

impl Machine {
    /// Constructs a machine at reset state: all registers and flags zeroed,
    /// `PC = 0`, `STOFR = 0`, `STUFR = 255`, `SP = STUFR`.
    pub fn new() -> Machine {
        let mut machine = Machine {
            memory: Memory::new(),
            ra: 0,
            rb: 0,
            rc: 0,
            re: 0,
            sp: DEFAULT_STUFR,
            pc: 0,
            ir: 0,
            stofr: DEFAULT_STOFR,
            stufr: DEFAULT_STUFR,
            zf: false,
            nf: false,
            of: false,
            state: State::Ready,
            last_fault: None,
        };
        machine.reset();
        machine
    }

    /// Resets architectural state to power-on defaults without discarding
    /// loaded memory contents.
    pub fn reset(&mut self) {
        self.ra = 0;
        self.rb = 0;
        self.rc = 0;
        self.re = 0;
        self.stofr = DEFAULT_STOFR;
        self.stufr = DEFAULT_STUFR;
        self.sp = self.stufr;
        self.pc = 0;
        self.ir = 0;
        self.zf = false;
        self.nf = false;
        self.of = false;
        self.state = State::Ready;
        self.last_fault = None;
    }

    /// Loads a binary image into memory starting at address 0. Does not
    /// otherwise reset register/flag state; call `reset` first if desired.
    pub fn load_program(&mut self, image: &[u8]) {
        self.memory.load_image(image);
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The fault that halted execution, if `state()` is `Faulted`.
    pub fn fault(&self) -> Option<Fault> {
        self.last_fault
    }

    pub fn register(&self, id: RegisterId) -> u8 {
        match id {
            RegisterId::RA => self.ra,
            RegisterId::RB => self.rb,
            RegisterId::RC => self.rc,
            RegisterId::RE => self.re,
            RegisterId::SP => self.sp,
        }
    }

    /// Looks up a register by its numeric operand code (read-only).
    /// Unknown codes return `None`.
    pub fn register_value(&self, code: u8) -> Option<u8> {
        match code {
            1 => Some(self.ra),
            2 => Some(self.rb),
            3 => Some(self.rc),
            4 => Some(self.re),
            5 => Some(self.sp),
            _ => None,
        }
    }

    /// Looks up a register by its numeric operand code, for in-place
    /// mutation. Unknown codes return `None`; per the spec, `MOVR` (and, by
    /// the same rule, every other register-operand opcode) treats an
    /// unrecognized code as a silent no-op rather than a fault.
    pub fn register_ref(&mut self, code: u8) -> Option<&mut u8> {
        match code {
            1 => Some(&mut self.ra),
            2 => Some(&mut self.rb),
            3 => Some(&mut self.rc),
            4 => Some(&mut self.re),
            5 => Some(&mut self.sp),
            _ => None,
        }
    }

    /// Executes a single fetch/decode/execute cycle, updating `state`
    /// accordingly.
    pub fn step(&mut self) -> TickResult {
        if self.state == State::Ready {
            self.state = State::Running;
        }

        let result = logic::tick(self);

        match result {
            TickResult::Halt => self.state = State::Halted,
            TickResult::Fault(fault) => {
                self.state = State::Faulted;
                self.last_fault = Some(fault);
            }
            TickResult::Next => {}
        }

        result
    }

    /// Runs until halt or fault.
    pub fn run(&mut self) -> Result<(), Fault> {
        loop {
            match self.step() {
                TickResult::Next => {}
                TickResult::Halt => return Ok(()),
                TickResult::Fault(fault) => return Err(fault),
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Machine {
        Machine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_matches_spec_defaults() {
        let machine = Machine::new();
        assert_eq!(machine.state(), State::Ready);
        assert_eq!(machine.sp, 255);
        assert_eq!(machine.stofr, 0);
        assert_eq!(machine.stufr, 255);
        assert_eq!(machine.pc, 0);
    }
}
