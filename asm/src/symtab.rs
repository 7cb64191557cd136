use std::collections::HashMap;

use crate::error::AssembleError;
use crate::lexer::TokenLine;

pub const MAX_LABELS: usize = 128;

pub type LabelTable = HashMap<String, u8>;

/// One non-label source line, instruction address already resolved.
pub struct AddressedLine<'a> {
    pub line_number: usize,
    pub address: u8,
    pub tokens: &'a [String],
}

/// Pass 1: assigns each instruction its address and records label
/// definitions. A label definition does not itself occupy an address.
pub fn resolve_labels(token_lines: &[TokenLine]) -> Result<(LabelTable, Vec<AddressedLine>), AssembleError> {
    let mut labels = LabelTable::new();
    let mut addressed = Vec::new();
    let mut address: u8 = 0;

    for token_line in token_lines {
        if let Some(name) = token_line.label_name() {
            if labels.len() >= MAX_LABELS {
                return Err(AssembleError::LabelTableFull {
                    line: token_line.line_number,
                });
            }
            labels.insert(name.to_string(), address);
            continue;
        }

        addressed.push(AddressedLine {
            line_number: token_line.line_number,
            address,
            tokens: &token_line.tokens,
        });
        address = address.wrapping_add(1);
    }

    Ok((labels, addressed))
}
