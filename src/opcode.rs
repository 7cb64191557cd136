use num_derive::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::str::FromStr;

use crate::parse_error::ParseEnumError;

/// The instruction set, assigned sequentially from `0x01` with `HLT` pinned
/// to `0xFF`. The assembler and the emulator must agree on these numeric
/// values bit-for-bit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    MovR = 0x01,
    MovA = 0x02,
    MovB = 0x03,
    MovC = 0x04,
    MovE = 0x05,
    StorA = 0x06,
    StorB = 0x07,
    StorC = 0x08,
    StorE = 0x09,
    LdimA = 0x0A,
    LdimB = 0x0B,
    LdimC = 0x0C,
    LdimE = 0x0D,
    JmpN = 0x0E,
    JmpZ = 0x0F,
    JmpO = 0x10,
    Jmp = 0x11,
    Add = 0x12,
    Sub = 0x13,
    AddR = 0x14,
    SubR = 0x15,
    Out = 0x16,
    Call = 0x17,
    Ret = 0x18,
    MovAPtrB = 0x19,
    StorAPtrB = 0x1A,
    Push = 0x1B,
    Pop = 0x1C,
    AddSp = 0x1D,
    SubSp = 0x1E,
    SStof = 0x1F,
    SStuf = 0x20,
    Hlt = 0xFF,
}

/// The operand-construction rule an opcode follows, per the encoder's
/// dispatch table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperandClass {
    /// No operand; the operand byte is always 0.
    None,
    /// `OUT`: register code of an optional argument, else 0.
    Output,
    /// Operand byte is a single register code.
    SingleRegister,
    /// Operand byte packs two register codes, `(dest << 4) | src`.
    TwoRegister,
    /// Operand is a resolved label address or a numeric literal.
    ImmediateOrLabel,
}

impl Opcode {
    pub fn operand_class(self) -> OperandClass {
        use Opcode::*;
        match self {
            Ret | MovAPtrB | StorAPtrB | Hlt => OperandClass::None,
            Out => OperandClass::Output,
            Push | Pop | AddR | SubR => OperandClass::SingleRegister,
            MovR => OperandClass::TwoRegister,
            MovA | MovB | MovC | MovE | StorA | StorB | StorC | StorE | LdimA | LdimB | LdimC
            | LdimE | Add | Sub | AddSp | SubSp | Jmp | JmpN | JmpZ | JmpO | Call | SStof
            | SStuf => OperandClass::ImmediateOrLabel,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            MovR => "MOVR",
            MovA => "MOVA",
            MovB => "MOVB",
            MovC => "MOVC",
            MovE => "MOVE",
            StorA => "STORA",
            StorB => "STORB",
            StorC => "STORC",
            StorE => "STORE",
            LdimA => "LDIMA",
            LdimB => "LDIMB",
            LdimC => "LDIMC",
            LdimE => "LDIME",
            JmpN => "JMPN",
            JmpZ => "JMPZ",
            JmpO => "JMPO",
            Jmp => "JMP",
            Add => "ADD",
            Sub => "SUB",
            AddR => "ADDR",
            SubR => "SUBR",
            Out => "OUT",
            Call => "CALL",
            Ret => "RET",
            MovAPtrB => "MOVA_PTRB",
            StorAPtrB => "STORA_PTRB",
            Push => "PUSH",
            Pop => "POP",
            AddSp => "ADDSP",
            SubSp => "SUBSP",
            SStof => "SSTOF",
            SStuf => "SSTUF",
            Hlt => "HLT",
        }
    }
}

impl FromStr for Opcode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Opcode, ParseEnumError> {
        use Opcode::*;
        match s {
            "MOVR" => Ok(MovR),
            "MOVA" => Ok(MovA),
            "MOVB" => Ok(MovB),
            "MOVC" => Ok(MovC),
            "MOVE" => Ok(MovE),
            "STORA" => Ok(StorA),
            "STORB" => Ok(StorB),
            "STORC" => Ok(StorC),
            "STORE" => Ok(StorE),
            "LDIMA" => Ok(LdimA),
            "LDIMB" => Ok(LdimB),
            "LDIMC" => Ok(LdimC),
            "LDIME" => Ok(LdimE),
            "JMPN" => Ok(JmpN),
            "JMPZ" => Ok(JmpZ),
            "JMPO" => Ok(JmpO),
            "JMP" => Ok(Jmp),
            "ADD" => Ok(Add),
            "SUB" => Ok(Sub),
            "ADDR" => Ok(AddR),
            "SUBR" => Ok(SubR),
            "OUT" => Ok(Out),
            "CALL" => Ok(Call),
            "RET" => Ok(Ret),
            "MOVA_PTRB" => Ok(MovAPtrB),
            "STORA_PTRB" => Ok(StorAPtrB),
            "PUSH" => Ok(Push),
            "POP" => Ok(Pop),
            "ADDSP" => Ok(AddSp),
            "SUBSP" => Ok(SubSp),
            "SSTOF" => Ok(SStof),
            "SSTUF" => Ok(SStuf),
            "HLT" => Ok(Hlt),
            _ => Err(ParseEnumError::new(s, "Opcode")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn round_trips_every_mnemonic() {
        let mnemonics = [
            "MOVR", "MOVA", "MOVB", "MOVC", "MOVE", "STORA", "STORB", "STORC", "STORE", "LDIMA",
            "LDIMB", "LDIMC", "LDIME", "JMPN", "JMPZ", "JMPO", "JMP", "ADD", "SUB", "ADDR",
            "SUBR", "OUT", "CALL", "RET", "MOVA_PTRB", "STORA_PTRB", "PUSH", "POP", "ADDSP",
            "SUBSP", "SSTOF", "SSTUF", "HLT",
        ];
        for mnemonic in mnemonics {
            let opcode: Opcode = mnemonic.parse().unwrap();
            assert_eq!(opcode.mnemonic(), mnemonic);
        }
    }

    #[test]
    fn discriminants_match_spec_table() {
        assert_eq!(Opcode::MovR.to_u8(), Some(0x01));
        assert_eq!(Opcode::SStuf.to_u8(), Some(0x20));
        assert_eq!(Opcode::Hlt.to_u8(), Some(0xFF));
    }

    #[test]
    fn from_u8_rejects_gaps() {
        assert_eq!(Opcode::from_u8(0x21), None);
        assert_eq!(Opcode::from_u8(0xFE), None);
    }

    #[test]
    fn rejects_unknown_mnemonic() {
        assert!("NOPE".parse::<Opcode>().is_err());
    }
}
