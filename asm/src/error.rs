use std::fmt;
use std::io;
use std::path::PathBuf;

/// A single assembly-time failure, with the source position it occurred at.
#[derive(Debug)]
pub enum AssembleError {
    LineTooLong { line: usize },
    TooManyLines { limit: usize },
    TooManyTokens { line: usize },
    TokenTooLong { line: usize, token: String },
    UnknownMnemonic { line: usize, token: String },
    UnknownRegister { line: usize, token: String },
    MissingOperand { line: usize, mnemonic: String },
    MovrNeedsTwoRegisters { line: usize },
    UndefinedLabel { line: usize, label: String },
    LabelTableFull { line: usize },
    InvalidNumber { line: usize, token: String },
}

impl AssembleError {
    fn line(&self) -> usize {
        match self {
            AssembleError::LineTooLong { line }
            | AssembleError::TooManyTokens { line }
            | AssembleError::TokenTooLong { line, .. }
            | AssembleError::UnknownMnemonic { line, .. }
            | AssembleError::UnknownRegister { line, .. }
            | AssembleError::MissingOperand { line, .. }
            | AssembleError::MovrNeedsTwoRegisters { line }
            | AssembleError::UndefinedLabel { line, .. }
            | AssembleError::LabelTableFull { line }
            | AssembleError::InvalidNumber { line, .. } => *line,
            AssembleError::TooManyLines { .. } => 0,
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            AssembleError::TokenTooLong { token, .. }
            | AssembleError::UnknownMnemonic { token, .. }
            | AssembleError::UnknownRegister { token, .. }
            | AssembleError::UndefinedLabel { label: token, .. }
            | AssembleError::InvalidNumber { token, .. } => Some(token),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            AssembleError::LineTooLong { .. } => "line exceeds 256 bytes".to_string(),
            AssembleError::TooManyLines { limit } => {
                format!("source exceeds {} lines", limit)
            }
            AssembleError::TooManyTokens { .. } => "line has more than 16 tokens".to_string(),
            AssembleError::TokenTooLong { .. } => "token exceeds 64 bytes".to_string(),
            AssembleError::UnknownMnemonic { .. } => "unknown mnemonic".to_string(),
            AssembleError::UnknownRegister { .. } => "unknown register".to_string(),
            AssembleError::MissingOperand { mnemonic, .. } => {
                format!("{} is missing an operand", mnemonic)
            }
            AssembleError::MovrNeedsTwoRegisters { .. } => {
                "MOVR requires two register operands".to_string()
            }
            AssembleError::UndefinedLabel { .. } => "undefined label".to_string(),
            AssembleError::LabelTableFull { .. } => "label table is full (128 labels max)".to_string(),
            AssembleError::InvalidNumber { .. } => "invalid numeric literal".to_string(),
        }
    }
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.token() {
            Some(token) => write!(
                f,
                "Error: {} at line {} near '{}'",
                self.message(),
                self.line(),
                token
            ),
            None => write!(f, "Error: {} at line {}", self.message(), self.line()),
        }
    }
}

impl std::error::Error for AssembleError {}

/// Context attached to an I/O error so the diagnostic names which file
/// failed and why it was being touched.
#[derive(Debug)]
pub enum IoErrorContext {
    ReadSource,
    WriteImage,
}

#[derive(Debug)]
pub enum Error {
    Assemble(AssembleError),
    Io(io::Error, IoErrorContext, PathBuf),
}

impl From<AssembleError> for Error {
    fn from(err: AssembleError) -> Error {
        Error::Assemble(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Assemble(err) => write!(f, "{}", err),
            Error::Io(err, IoErrorContext::ReadSource, path) => {
                write!(f, "Error: could not read '{}': {}", path.display(), err)
            }
            Error::Io(err, IoErrorContext::WriteImage, path) => {
                write!(f, "Error: could not write '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {}
