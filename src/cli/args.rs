//! CLI argument parsing with clap.

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use crate::ascii::{recognized_alphabets, Alphabet, RenderOptions, DEFAULT_ALPHABET};
use crate::convert::ConvertOptions;
use crate::sink::OutputLocator;
use crate::source::InputLocator;

/// Convert a picture into ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciiart")]
#[command(version, about = "Convert a picture into ASCII art", long_about = None)]
pub struct Args {
    /// Width of the output in characters
    #[arg(short, long, default_value = "80", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Which alphabet to use
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_ALPHABET, value_parser = parse_alphabet)]
    pub alphabet: Alphabet,

    /// Invert brightness (for light terminals)
    #[arg(short, long)]
    pub invert: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Input image: file path, http(s) URL, or - for stdin (default: stdin)
    pub input: Option<String>,

    /// Output file (default: stdout)
    pub output: Option<String>,
}

/// Parse and validate an alphabet name against the catalogue.
fn parse_alphabet(s: &str) -> Result<Alphabet, String> {
    Alphabet::from_name(s).map_err(|e| format!("{}. {}", e, recognized_alphabets()))
}

impl Args {
    /// Parse `std::env::args_os()`.
    pub fn try_parse_env() -> Result<Self, clap::Error> {
        Self::try_parse_with_help(std::env::args_os())
    }

    /// Parse an explicit argument list. The help text ends with the list of
    /// recognized alphabets.
    pub fn try_parse_with_help<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .after_help(recognized_alphabets())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn input_locator(&self) -> InputLocator {
        InputLocator::parse(self.input.as_deref())
    }

    pub fn output_locator(&self) -> OutputLocator {
        OutputLocator::parse(self.output.as_deref())
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            width: self.width,
            alphabet: self.alphabet,
            render: RenderOptions {
                invert: self.invert,
            },
        }
    }

    /// Log level selected by `--verbose`; warnings only by default.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
