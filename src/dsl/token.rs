//! Token types for the Cuneiform lexer.

use std::fmt;

use serde::Serialize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text: the word for keywords and identifiers, the
    /// enclosed text for strings, empty for EOF.
    pub value: String,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Keywords
    Task,
    Purpose,
    Input,
    Process,
    Output,
    If,
    Else,
    Repeat,

    // Literals
    Identifier,
    String,

    // Delimiters
    Colon,

    // Special
    Newline,
    Eof,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            col,
        }
    }

    /// The literal value carried by this token. EOF has none.
    pub fn literal(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Eof => None,
            _ => Some(&self.value),
        }
    }
}

impl TokenKind {
    /// Upper-case name used in diagnostics and dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Task => "TASK",
            TokenKind::Purpose => "PURPOSE",
            TokenKind::Input => "INPUT",
            TokenKind::Process => "PROCESS",
            TokenKind::Output => "OUTPUT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Colon => "COLON",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Task
                | TokenKind::Purpose
                | TokenKind::Input
                | TokenKind::Process
                | TokenKind::Output
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Repeat
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal() {
            Some(v) => write!(f, "Token({}, {:?}, {}:{})", self.kind, v, self.line, self.col),
            None => write!(f, "Token({}, None, {}:{})", self.kind, self.line, self.col),
        }
    }
}

/// Keyword table. Matching is case-sensitive; each keyword has a Korean
/// and an English surface form.
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "작업" | "TASK" => TokenKind::Task,
        "설명" | "PURPOSE" => TokenKind::Purpose,
        "입력" | "INPUT" => TokenKind::Input,
        "처리" | "PROCESS" => TokenKind::Process,
        "출력" | "OUTPUT" => TokenKind::Output,
        "만약" | "IF" => TokenKind::If,
        "아니면" | "ELSE" => TokenKind::Else,
        "반복" | "REPEAT" => TokenKind::Repeat,
        _ => return None,
    };
    Some(kind)
}
