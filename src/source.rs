//! Input sources: named files or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::CatError;

/// Token that selects standard input.
pub const STDIN_TOKEN: &str = "-";

/// One input to concatenate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Interpret a command line operand; `-` means standard input.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == STDIN_TOKEN {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// The sources for a list of operands, defaulting to standard input
    /// when the list is empty.
    pub fn from_args<I, P>(args: I) -> Vec<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let sources: Vec<Self> = args.into_iter().map(Self::from_arg).collect();
        if sources.is_empty() {
            vec![Self::Stdin]
        } else {
            sources
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => STDIN_TOKEN.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for buffered reading.
    ///
    /// Dropping the returned reader closes the file.
    pub fn open(&self) -> Result<Box<dyn BufRead>, CatError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| CatError::Open {
                    name: self.name(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
