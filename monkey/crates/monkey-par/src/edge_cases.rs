//! Edge case tests for monkey-par
