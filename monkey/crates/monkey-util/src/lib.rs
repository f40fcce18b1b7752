//! monkey-util - Foundation types shared by every interpreter phase.
//!
//! Two small pieces live here:
//!
//! - [`Span`]: a byte range in the source plus the line/column where it
//!   starts, attached to tokens and diagnostics.
//! - [`Handler`] and [`Diagnostic`]: the error-accumulation layer. The
//!   parser records syntax errors here and keeps going; the driver asks
//!   `has_errors()` before handing the program to the evaluator.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
