//! rcat - concatenate files to standard output.
//!
//! The core is [`render::LineRenderer`], which turns one input line into its
//! displayed form under a resolved [`Config`]. [`Concatenator`] drives it over
//! a sequence of [`Source`]s while keeping line numbers and blank-squeeze state
//! continuous across them.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod source;

pub use cli::Cli;
pub use config::{Config, Options};
pub use driver::{Concatenator, Summary};
pub use error::CatError;
pub use render::{LineRenderer, RenderState};
pub use source::Source;
