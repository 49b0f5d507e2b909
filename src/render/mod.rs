//! Line rendering pipeline.

pub mod escape;
pub mod line;

pub use escape::{escape, Escaped};
pub use line::{is_blank, LineRenderer, RenderState};
