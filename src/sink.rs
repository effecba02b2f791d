//! Output destination for rendered text.

use std::fmt;
use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::PathBuf;

use crate::error::AsciiArtError;

/// Where rendered lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocator {
    Stdout,
    File(PathBuf),
}

impl OutputLocator {
    /// Resolve a positional argument: absent or `-` writes to stdout.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => OutputLocator::Stdout,
            Some(path) => OutputLocator::File(PathBuf::from(path)),
        }
    }

    /// Open the destination for writing.
    ///
    /// Files are created, or truncated if they exist. The writer flushes at
    /// every newline.
    ///
    /// # Errors
    ///
    /// Returns `AsciiArtError::OutputOpen` if the file cannot be created.
    pub fn open(&self) -> Result<Box<dyn Write>, AsciiArtError> {
        match self {
            OutputLocator::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputLocator::File(path) => {
                let file = File::create(path).map_err(|source| AsciiArtError::OutputOpen {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("Writing output to {:?}", path);
                Ok(Box::new(LineWriter::new(file)))
            }
        }
    }
}

impl fmt::Display for OutputLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLocator::Stdout => f.write_str("<stdout>"),
            OutputLocator::File(path) => write!(f, "{}", path.display()),
        }
    }
}
