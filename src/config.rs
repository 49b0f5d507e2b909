//! Display configuration.
//!
//! [`Options`] is the raw set of flags as requested on the command line;
//! [`Options::resolve`] applies the override rules once and yields the
//! immutable [`Config`] that the renderer reads.

/// Flags as requested, before override rules are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Number all output lines (`-n`)
    pub number: bool,
    /// Number non-blank output lines (`-b`), wins over `number`
    pub number_nonblank: bool,
    /// Collapse runs of blank lines into one (`-s`)
    pub squeeze_blank: bool,
    /// Display `$` before each line-feed (`-E`)
    pub show_ends: bool,
    /// Display tabs as `^I` (`-T`)
    pub show_tabs: bool,
    /// Use `^` and `M-` notation for non-printing bytes (`-v`)
    pub show_nonprinting: bool,
}

impl Options {
    /// Resolve the requested flags into a [`Config`].
    ///
    /// `number_nonblank` overrides `number`: when both are requested only
    /// non-blank lines are numbered.
    pub fn resolve(self) -> Config {
        Config {
            show_numbers: self.number && !self.number_nonblank,
            number_nonblank: self.number_nonblank,
            squeeze_blank: self.squeeze_blank,
            show_ends: self.show_ends,
            show_tabs: self.show_tabs,
            show_nonprinting: self.show_nonprinting,
        }
    }
}

/// Resolved, immutable display configuration.
///
/// Only obtainable through [`Options::resolve`], so `show_numbers` and
/// `number_nonblank` are never both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    show_numbers: bool,
    number_nonblank: bool,
    squeeze_blank: bool,
    show_ends: bool,
    show_tabs: bool,
    show_nonprinting: bool,
}

impl Config {
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    pub fn number_nonblank(&self) -> bool {
        self.number_nonblank
    }

    pub fn squeeze_blank(&self) -> bool {
        self.squeeze_blank
    }

    pub fn show_ends(&self) -> bool {
        self.show_ends
    }

    pub fn show_tabs(&self) -> bool {
        self.show_tabs
    }

    pub fn show_nonprinting(&self) -> bool {
        self.show_nonprinting
    }
}
