//! Per-line rendering: numbering, blank squeezing and per-byte display rules.

use super::escape::escape;
use crate::config::Config;

/// Width of the right-justified line number field.
const NUMBER_WIDTH: usize = 6;

/// State carried from one line to the next for a whole invocation.
///
/// Neither field is reset between sources: numbering is continuous and a
/// blank run that spans two sources is squeezed as one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    line_number: u64,
    previous_was_blank: bool,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            line_number: 1,
            previous_was_blank: false,
        }
    }

    /// The number the next numbered line will get.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

/// A line is blank when it is empty or a lone line-feed.
pub fn is_blank(line: &[u8]) -> bool {
    line.is_empty() || line == b"\n"
}

/// Renders lines according to a [`Config`].
///
/// Holds no state of its own; everything that spans lines lives in the
/// [`RenderState`] passed to [`LineRenderer::render`].
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer<'a> {
    config: &'a Config,
}

impl<'a> LineRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Append the output for `line` to `out` and advance `state`.
    ///
    /// Returns `false` when the line was squeezed away and nothing was written.
    pub fn render(&self, line: &[u8], state: &mut RenderState, out: &mut Vec<u8>) -> bool {
        let config = self.config;
        let blank = is_blank(line);

        if config.squeeze_blank() && blank && state.previous_was_blank {
            return false;
        }
        state.previous_was_blank = blank;

        if (config.number_nonblank() && !blank) || config.show_numbers() {
            out.extend_from_slice(
                format!("{:>width$}\t", state.line_number, width = NUMBER_WIDTH).as_bytes(),
            );
            state.line_number += 1;
        }

        for &byte in line {
            if config.show_tabs() && byte == b'\t' {
                out.extend_from_slice(b"^I");
            } else if config.show_ends() && byte == b'\n' {
                out.extend_from_slice(b"$\n");
            } else if config.show_nonprinting() {
                out.extend_from_slice(escape(byte).as_bytes());
            } else {
                out.push(byte);
            }
        }

        true
    }
}
