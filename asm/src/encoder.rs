use tinyvm::{Opcode, OperandClass, RegisterId};

use crate::error::AssembleError;
use crate::symtab::{AddressedLine, LabelTable};

fn parse_register(token: &str, line: usize) -> Result<RegisterId, AssembleError> {
    token
        .parse()
        .map_err(|_| AssembleError::UnknownRegister {
            line,
            token: token.to_string(),
        })
}

/// Parses an `immediate-or-label` operand: a leading letter selects a label
/// lookup, otherwise the token is a `0x`/`0X`-prefixed hex literal or a
/// decimal literal, truncated to 8 bits.
fn parse_immediate_or_label(
    token: &str,
    labels: &LabelTable,
    line: usize,
) -> Result<u8, AssembleError> {
    match token.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            labels
                .get(token)
                .copied()
                .ok_or_else(|| AssembleError::UndefinedLabel {
                    line,
                    label: token.to_string(),
                })
        }
        _ => {
            let (digits, radix) = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                Some(rest) => (rest, 16),
                None => (token, 10),
            };
            u32::from_str_radix(digits, radix)
                .map(|value| (value & 0xFF) as u8)
                .map_err(|_| AssembleError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
        }
    }
}

fn operand_token<'a>(
    tokens: &'a [String],
    mnemonic: &str,
    line: usize,
) -> Result<&'a str, AssembleError> {
    tokens
        .get(1)
        .map(String::as_str)
        .ok_or_else(|| AssembleError::MissingOperand {
            line,
            mnemonic: mnemonic.to_string(),
        })
}

/// Encodes one addressed, non-label source line into its 16-bit instruction
/// word.
pub fn encode(line: &AddressedLine, labels: &LabelTable) -> Result<u16, AssembleError> {
    let mnemonic = &line.tokens[0];
    let opcode: Opcode = mnemonic
        .parse()
        .map_err(|_| AssembleError::UnknownMnemonic {
            line: line.line_number,
            token: mnemonic.clone(),
        })?;

    let operand = match opcode.operand_class() {
        OperandClass::None => 0,

        OperandClass::Output => match line.tokens.get(1) {
            Some(token) => parse_register(token, line.line_number)? as u8,
            None => 0,
        },

        OperandClass::SingleRegister => {
            let token = operand_token(line.tokens, mnemonic, line.line_number)?;
            parse_register(token, line.line_number)? as u8
        }

        OperandClass::TwoRegister => {
            if line.tokens.len() < 3 {
                return Err(AssembleError::MovrNeedsTwoRegisters {
                    line: line.line_number,
                });
            }
            let dest = parse_register(&line.tokens[1], line.line_number)? as u8;
            let src = parse_register(&line.tokens[2], line.line_number)? as u8;
            (dest << 4) | src
        }

        OperandClass::ImmediateOrLabel => {
            let token = operand_token(line.tokens, mnemonic, line.line_number)?;
            parse_immediate_or_label(token, labels, line.line_number)?
        }
    };

    Ok(((opcode as u16) << 8) | u16::from(operand))
}
