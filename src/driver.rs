//! Stream driver: feeds every source, line by line, through one renderer.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::CatError;
use crate::render::{LineRenderer, RenderState};
use crate::source::Source;

/// Program name used to prefix diagnostics.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Sources read to the end
    pub completed: usize,
    /// Sources skipped because they could not be opened or read
    pub failed: usize,
    /// Input lines read across all sources, including squeezed ones
    pub lines: u64,
}

/// Concatenates sources with a shared [`RenderState`].
pub struct Concatenator<'a> {
    renderer: LineRenderer<'a>,
    state: RenderState,
}

impl<'a> Concatenator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            renderer: LineRenderer::new(config),
            state: RenderState::new(),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Render every source in order to `out`.
    ///
    /// Sources that fail to open or read are reported on `diag` as
    /// `rcat: <name>: <reason>` and skipped. Only a failure to write `out`
    /// stops the run.
    pub fn run<W, D>(
        &mut self,
        sources: &[Source],
        out: &mut W,
        diag: &mut D,
    ) -> Result<Summary, CatError>
    where
        W: Write,
        D: Write,
    {
        let mut summary = Summary::default();

        for source in sources {
            let name = source.name();
            let result = source.open().and_then(|reader| {
                tracing::debug!(source = %name, "opened source");
                self.render_stream(reader, &name, out)
            });

            match result {
                Ok(lines) => {
                    tracing::debug!(source = %name, lines, "finished source");
                    summary.completed += 1;
                    summary.lines += lines;
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::debug!(source = %name, error = %err, "skipping source");
                    summary.failed += 1;
                    // Diagnostics are best effort; stderr going away must not stop output
                    let _ = writeln!(diag, "{}: {}", PROGRAM_NAME, err);
                }
            }
        }

        out.flush().map_err(CatError::Write)?;
        Ok(summary)
    }

    /// Render one already-open stream, returning the number of lines read.
    ///
    /// `name` only labels read errors. Lines rendered before a read error
    /// have already been written.
    pub fn render_stream<R, W>(
        &mut self,
        mut reader: R,
        name: &str,
        out: &mut W,
    ) -> Result<u64, CatError>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = Vec::new();
        let mut rendered = Vec::new();
        let mut lines = 0;

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| CatError::Read {
                    name: name.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            lines += 1;

            rendered.clear();
            if self.renderer.render(&line, &mut self.state, &mut rendered) {
                out.write_all(&rendered).map_err(CatError::Write)?;
            } else {
                tracing::trace!(source = %name, line = lines, "squeezed blank line");
            }
        }

        Ok(lines)
    }
}
