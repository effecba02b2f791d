//! Error type for a conversion run.
//!
//! Every error is terminal: the binary prints it to stderr and exits with
//! [`AsciiArtError::exit_code`].

use std::path::PathBuf;

/// Exit code for HTTP fetch failures and non-success responses.
pub const EXIT_FETCH: i32 = 1;
/// Exit code when the output file cannot be opened.
pub const EXIT_OUTPUT_OPEN: i32 = 2;
/// Exit code when the input bytes are not a decodable image.
pub const EXIT_DECODE: i32 = 3;
/// Exit code when the input file (or stdin) cannot be read.
pub const EXIT_INPUT_OPEN: i32 = 4;
/// Exit code for write failures while rendering.
pub const EXIT_WRITE: i32 = 5;
/// Exit code for command-line usage errors (sysexits `EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiArtError {
    #[error("no such alphabet '{name}'")]
    InvalidAlphabetName {
        /// The name that did not match any catalogue entry
        name: String,
    },

    #[error("Could not fetch HTTP resource {url}: {source}")]
    ResourceFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No such location {url} ({status})")]
    ResourceStatus {
        url: String,
        /// HTTP status code of the response
        status: u16,
    },

    #[error("Could not open input file {locator}: {source}")]
    InputOpen {
        /// Path of the input, or `-` for stdin
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open output file {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Could not write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("Could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl AsciiArtError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AsciiArtError::InvalidAlphabetName { .. } => EXIT_USAGE,
            AsciiArtError::ResourceFetch { .. } | AsciiArtError::ResourceStatus { .. } => {
                EXIT_FETCH
            }
            AsciiArtError::OutputOpen { .. } => EXIT_OUTPUT_OPEN,
            AsciiArtError::Decode(_) => EXIT_DECODE,
            AsciiArtError::InputOpen { .. } => EXIT_INPUT_OPEN,
            AsciiArtError::Write(_) | AsciiArtError::Runtime(_) => EXIT_WRITE,
        }
    }

    /// True for both transport failures and non-success HTTP statuses.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AsciiArtError::ResourceFetch { .. } | AsciiArtError::ResourceStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_failure_class() {
        let status = AsciiArtError::ResourceStatus {
            url: "http://x".to_string(),
            status: 404,
        };
        let input = AsciiArtError::InputOpen {
            locator: "a.png".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let output = AsciiArtError::OutputOpen {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let alphabet = AsciiArtError::InvalidAlphabetName {
            name: "bogus".to_string(),
        };

        assert_eq!(status.exit_code(), EXIT_FETCH);
        assert_eq!(output.exit_code(), EXIT_OUTPUT_OPEN);
        assert_eq!(input.exit_code(), EXIT_INPUT_OPEN);
        assert_eq!(alphabet.exit_code(), EXIT_USAGE);
        assert!(status.is_fetch_error());
        assert!(!input.is_fetch_error());
    }

    #[test]
    fn test_status_message_names_location() {
        let err = AsciiArtError::ResourceStatus {
            url: "http://example.com/cat.png".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "No such location http://example.com/cat.png (404)"
        );
    }

    #[test]
    fn test_output_open_message_names_path() {
        let err = AsciiArtError::OutputOpen {
            path: PathBuf::from("/tmp/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Could not open output file /tmp/out.txt: denied");
    }
}
