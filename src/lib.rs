//! Argument-labelled debug printing.
//!
//! `probe!(x, y + 1, "label")` prints, for each argument, the source text
//! that produced the value (when that text is worth showing) next to the
//! value's representation, type and length, with nested structures
//! pretty-printed as an indented tree.
//!
//! The pieces are usable on their own: [`segment::split_call`] recovers
//! per-argument source from call text, [`render`] holds the value model,
//! describer and pretty-printer, and [`report::Reporter`] assembles one
//! invocation's output.

pub mod error;
pub mod lexer;
mod macros;
pub mod render;
pub mod report;
pub mod segment;

pub use error::ProbeError;
pub use render::{describe, render, Value, ValueDescription};
pub use report::{CallSite, Reporter};
pub use segment::{split_call, ArgumentFragment};
