//! Cuneiform compiler — source text → tokens → task AST → prompt.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod prompt;
pub mod token;

pub use ast::*;
pub use error::{CompileError, ErrorKind};
pub use token::{Token, TokenKind};

use lexer::Lexer;
use parser::Parser;

/// Scan source text into tokens. Never fails.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Parse a token stream into a task AST.
pub fn parse(tokens: Vec<Token>) -> Result<Program, CompileError> {
    Parser::new(tokens).parse()
}

/// Render a task AST as a prompt.
pub fn generate(tasks: &[TaskNode]) -> String {
    prompt::generate(tasks)
}

/// The Cuneiform compiler.
///
/// Runs source text through lexer → parser → prompt generator.
pub struct Compiler;

impl Compiler {
    /// Scan source into tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let tokens = tokenize(source);
        tracing::debug!(count = tokens.len(), "tokenized source");
        tokens
    }

    /// Parse source into a task AST.
    pub fn parse(source: &str) -> Result<Program, CompileError> {
        let program = parse(Self::tokenize(source))?;
        tracing::debug!(tasks = program.len(), "parsed program");
        Ok(program)
    }

    /// Parse source and render it as a prompt.
    pub fn compile(source: &str) -> Result<String, CompileError> {
        let program = Self::parse(source)?;
        Ok(generate(&program))
    }
}
