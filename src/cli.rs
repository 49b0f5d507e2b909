//! Command line definition.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::Options;
use crate::source::Source;

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("RCAT_BUILD_DATE"),
    ")"
);

/// Concatenate FILE(s) to standard output.
///
/// With no FILE, or when FILE is -, read standard input.
#[derive(Parser, Debug)]
#[command(
    name = "rcat",
    version = VERSION,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Equivalent to -vET
    #[arg(short = 'A', long)]
    pub show_all: bool,

    /// Number nonempty output lines, overrides -n
    #[arg(short = 'b', long)]
    pub number_nonblank: bool,

    /// Equivalent to -vE
    #[arg(short = 'e')]
    pub show_ends_nonprinting: bool,

    /// Display $ at end of each line
    #[arg(short = 'E', long)]
    pub show_ends: bool,

    /// Number all output lines
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Suppress repeated empty output lines
    #[arg(short = 's', long)]
    pub squeeze_blank: bool,

    /// Equivalent to -vT
    #[arg(short = 't')]
    pub show_tabs_nonprinting: bool,

    /// Display TAB characters as ^I
    #[arg(short = 'T', long)]
    pub show_tabs: bool,

    /// Use ^ and M- notation, except for LFD and TAB
    #[arg(short = 'v', long)]
    pub show_nonprinting: bool,

    /// Display this help and exit
    #[arg(long)]
    pub help: bool,

    /// Output version information and exit
    #[arg(long)]
    pub version: bool,

    /// Files to concatenate
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Fold the combination flags (-A, -e, -t) into plain options.
    pub fn options(&self) -> Options {
        Options {
            number: self.number,
            number_nonblank: self.number_nonblank,
            squeeze_blank: self.squeeze_blank,
            show_ends: self.show_ends || self.show_all || self.show_ends_nonprinting,
            show_tabs: self.show_tabs || self.show_all || self.show_tabs_nonprinting,
            show_nonprinting: self.show_nonprinting
                || self.show_all
                || self.show_ends_nonprinting
                || self.show_tabs_nonprinting,
        }
    }

    /// Help or version text to print instead of reading any source.
    ///
    /// Only consulted after the whole command line parsed, so an unknown
    /// option anywhere still fails. `--help` wins over `--version`.
    pub fn informational_text(&self) -> Option<String> {
        if self.help {
            Some(Self::command().render_long_help().to_string())
        } else if self.version {
            Some(Self::command().render_version())
        } else {
            None
        }
    }

    /// The sources to read, in order; standard input if none were named.
    pub fn sources(&self) -> Vec<Source> {
        Source::from_args(self.files.iter().cloned())
    }
}

/// Exit code for an unrecognized option or any other parse error.
pub const USAGE_ERROR_EXIT: u8 = 1;
