use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Error {
    pub source: io::Error,
    pub path: PathBuf,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error: could not read '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for Error {}
