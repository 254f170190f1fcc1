//! Error types for the Cuneiform compiler.

use thiserror::Error;

/// An error that occurred while compiling Cuneiform source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{line}:{col}] {kind:?}: {message}")]
pub struct CompileError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub kind: ErrorKind,
}

/// Lexing never fails, so the only kind today is a grammar violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
}

impl CompileError {
    pub fn syntax(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            kind: ErrorKind::Syntax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position_and_kind() {
        let err = CompileError::syntax("expected TASK, got PURPOSE", 3, 1);
        assert_eq!(err.to_string(), "[3:1] Syntax: expected TASK, got PURPOSE");
    }
}
