use crate::error::AssembleError;

pub const MAX_LINES: usize = 1024;
pub const MAX_LINE_BYTES: usize = 256;
pub const MAX_TOKENS: usize = 16;
pub const MAX_TOKEN_BYTES: usize = 64;

/// One source line after comment stripping, trimming, and tokenizing.
/// Empty lines (blank, or comment-only) are dropped before reaching here.
#[derive(Debug, Clone)]
pub struct TokenLine {
    pub line_number: usize,
    pub tokens: Vec<String>,
}

impl TokenLine {
    /// A token-line is a label definition iff its first token ends in `:`.
    pub fn label_name(&self) -> Option<&str> {
        let first = self.tokens.first()?;
        first.strip_suffix(':')
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn split_tokens(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips comments, trims, splits into tokens, and drops empty lines.
pub fn tokenize(source: &str) -> Result<Vec<TokenLine>, AssembleError> {
    let lines: Vec<&str> = source.lines().collect();
    if lines.len() > MAX_LINES {
        return Err(AssembleError::TooManyLines { limit: MAX_LINES });
    }

    let mut token_lines = Vec::new();
    for (index, raw_line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if raw_line.len() > MAX_LINE_BYTES {
            return Err(AssembleError::LineTooLong { line: line_number });
        }

        let stripped = strip_comment(raw_line).trim();
        if stripped.is_empty() {
            continue;
        }

        let tokens = split_tokens(stripped);
        if tokens.len() > MAX_TOKENS {
            return Err(AssembleError::TooManyTokens { line: line_number });
        }
        if let Some(token) = tokens.iter().find(|token| token.len() > MAX_TOKEN_BYTES) {
            return Err(AssembleError::TokenTooLong {
                line: line_number,
                token: token.clone(),
            });
        }

        token_lines.push(TokenLine {
            line_number,
            tokens,
        });
    }

    Ok(token_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_blank_lines() {
        let source = "; full comment\nLDIMA 5 ; load\n\nHLT\n";
        let lines = tokenize(source).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].tokens, vec!["LDIMA", "5"]);
        assert_eq!(lines[1].tokens, vec!["HLT"]);
    }

    #[test]
    fn splits_on_commas_and_whitespace() {
        let lines = tokenize("MOVR RA,RB").unwrap();
        assert_eq!(lines[0].tokens, vec!["MOVR", "RA", "RB"]);
    }

    #[test]
    fn recognizes_label_definitions() {
        let lines = tokenize("loop:\nJMP loop").unwrap();
        assert_eq!(lines[0].label_name(), Some("loop"));
        assert_eq!(lines[1].label_name(), None);
    }

    #[test]
    fn rejects_oversized_line() {
        let source = format!("{}\n", "A".repeat(MAX_LINE_BYTES + 1));
        assert!(matches!(
            tokenize(&source),
            Err(AssembleError::LineTooLong { line: 1 })
        ));
    }
}
