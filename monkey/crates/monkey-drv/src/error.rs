//! Error handling for the monkey driver.

use thiserror::Error;

/// Errors surfaced by the driver when running a source file.
///
/// Parse and runtime failures carry the exact in-language messages; I/O
/// failures are host errors and map to a distinct exit code.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The program did not parse. Messages are in accumulation order.
    #[error("parser errors:\n\t{}", .0.join("\n\t"))]
    Parse(Vec<String>),

    /// Evaluation produced a runtime error value.
    #[error("ERROR: {0}")]
    Runtime(String),
}

/// Result type alias using [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = DriverError::Parse(vec![
            "expected next token to be ), got EOF instead".to_string(),
            "no prefix parse function for ; found".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "parser errors:\n\texpected next token to be ), got EOF instead\n\tno prefix parse function for ; found"
        );
    }

    #[test]
    fn test_runtime_error_display() {
        let err = DriverError::Runtime("identifier not found: foobar".to_string());
        assert_eq!(err.to_string(), "ERROR: identifier not found: foobar");
    }

    #[test]
    fn test_io_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DriverError::from(io);
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
