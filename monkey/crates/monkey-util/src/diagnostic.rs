//! Diagnostic - Error accumulation and reporting.
//!
//! The parser does not stop at the first syntax error; it records a
//! [`Diagnostic`] on the shared [`Handler`] and keeps parsing where it
//! can. The driver consults [`Handler::has_errors`] before evaluation and
//! prints the accumulated messages otherwise.

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents evaluation.
    Error,
    /// A warning that does not prevent evaluation.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

/// Handler for collecting diagnostics.
///
/// Interior mutability lets the parser hold a shared reference while
/// recording errors mid-parse.
///
/// # Examples
///
/// ```
/// use monkey_util::{Handler, Span};
///
/// let handler = Handler::new();
/// handler.error("expected next token to be ), got ; instead", Span::DUMMY);
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates a new empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records an error diagnostic.
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Records a warning diagnostic.
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Records a pre-built diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any errors have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// All recorded diagnostics, in the order they were emitted.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// The message strings of all recorded errors, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .map(|d| d.message.clone())
            .collect()
    }

    /// Discards all recorded diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_empty_handler() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_error_accumulation() {
        let handler = Handler::new();
        handler.error("first", Span::DUMMY);
        handler.error("second", Span::DUMMY);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.error_messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let handler = Handler::new();
        handler.warning("unused", Span::DUMMY);

        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.diagnostics().len(), 1);
    }

    #[test]
    fn test_clear() {
        let handler = Handler::new();
        handler.error("oops", Span::DUMMY);
        handler.clear();

        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_error_messages_skip_warnings() {
        let handler = Handler::new();
        handler.warning("w", Span::DUMMY);
        handler.error("e", Span::DUMMY);

        assert_eq!(handler.error_messages(), vec!["e"]);
    }
}
