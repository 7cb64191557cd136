use num_derive::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::str::FromStr;

use crate::parse_error::ParseEnumError;

/// Architectural register identifiers.
///
/// The numeric discriminants are the codes used inside encoded operand
/// bytes: `MOVR`'s `(dest << 4) | src` nibbles, and the single-register
/// operand of `PUSH`/`POP`/`ADDR`/`SUBR`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum RegisterId {
    RA = 1,
    RB = 2,
    RC = 3,
    RE = 4,
    SP = 5,
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for RegisterId {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<RegisterId, ParseEnumError> {
        match s {
            "RA" => Ok(RegisterId::RA),
            "RB" => Ok(RegisterId::RB),
            "RC" => Ok(RegisterId::RC),
            "RE" => Ok(RegisterId::RE),
            "SP" => Ok(RegisterId::SP),
            _ => Err(ParseEnumError::new(s, "RegisterId")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_mnemonic() {
        assert_eq!("RA".parse(), Ok(RegisterId::RA));
        assert_eq!("RB".parse(), Ok(RegisterId::RB));
        assert_eq!("RC".parse(), Ok(RegisterId::RC));
        assert_eq!("RE".parse(), Ok(RegisterId::RE));
        assert_eq!("SP".parse(), Ok(RegisterId::SP));
    }

    #[test]
    fn rejects_unknown_mnemonic() {
        assert!("RZ".parse::<RegisterId>().is_err());
    }

    #[test]
    fn codes_match_spec() {
        use num_traits::ToPrimitive;

        assert_eq!(RegisterId::RA.to_u8(), Some(1));
        assert_eq!(RegisterId::SP.to_u8(), Some(5));
    }
}
