//! Parser for the Cuneiform language.
//!
//! Recursive descent over the token stream. Each task block is
//! `TASK : IDENTIFIER` followed by optional fields; `OUTPUT` is always the
//! last field a block reads, and anything the grammar does not know yet
//! is skipped.

use super::ast::{Program, TaskNode};
use super::error::CompileError;
use super::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let (line, col) = tokens.last().map_or((1, 1), |t| (t.line, t.col));
            tokens.push(Token::new(TokenKind::Eof, "", line, col));
        }
        Self { tokens, pos: 0 }
    }

    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut tasks = Vec::new();

        while !self.is_at_end() {
            tasks.push(self.parse_task()?);
        }

        Ok(tasks)
    }

    fn parse_task(&mut self) -> Result<TaskNode, CompileError> {
        self.skip_newlines();
        self.expect(TokenKind::Task)?;
        self.expect(TokenKind::Colon)?;
        let name = self.expect(TokenKind::Identifier)?.value.clone();
        self.skip_newlines();

        let mut purpose = None;
        let mut output = None;

        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Purpose => {
                    self.advance();
                    self.expect(TokenKind::Colon)?;
                    purpose = self.take_literal();
                    self.skip_newlines();
                }
                TokenKind::Output => {
                    self.advance();
                    self.expect(TokenKind::Colon)?;
                    output = self.take_literal();
                    self.skip_newlines();
                    break;
                }
                kind => {
                    if kind.is_keyword() {
                        let t = self.peek();
                        tracing::trace!(
                            line = t.line,
                            col = t.col,
                            "skipping reserved keyword {kind}"
                        );
                    }
                    self.advance();
                }
            }
        }

        Ok(TaskNode::new(name, purpose, output))
    }

    /// Consume the current token and return its literal. EOF is left in
    /// place and yields `None`.
    fn take_literal(&mut self) -> Option<String> {
        let value = self.peek().literal()?.to_string();
        self.advance();
        Some(value)
    }

    // --- Utility methods ---

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.peek().kind == TokenKind::Eof
    }

    fn skip_newlines(&mut self) {
        while !self.is_at_end() && self.peek().kind == TokenKind::Newline {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, CompileError> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            let t = self.peek();
            Err(CompileError::syntax(
                format!("expected {kind}, got {}", t.kind),
                t.line,
                t.col,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::error::ErrorKind;
    use crate::dsl::lexer::Lexer;

    fn parse(src: &str) -> Result<Program, CompileError> {
        let tokens = Lexer::new(src).tokenize();
        let mut parser = Parser::new(tokens);
        parser.parse()
    }

    #[test]
    fn parse_empty_program() {
        let prog = parse("").unwrap();
        assert!(prog.is_empty());
    }

    #[test]
    fn parse_only_eof_token() {
        let mut parser = Parser::new(vec![Token::new(TokenKind::Eof, "", 1, 1)]);
        assert!(parser.parse().unwrap().is_empty());
    }

    #[test]
    fn parse_blank_lines_and_comments_need_a_task() {
        for src in ["\n\n", "# c\n", "\n\n# nothing here\n\n"] {
            let err = parse(src).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Syntax, "failed for {src:?}");
            assert_eq!(err.message, "expected TASK, got EOF");
        }
    }

    #[test]
    fn parse_leading_comment_before_task() {
        let prog = parse("# greeting\n\nTASK: a\nOUTPUT: \"b\"\n\n").unwrap();
        assert_eq!(prog, vec![TaskNode::new("a", None, Some("b".into()))]);
    }

    #[test]
    fn parse_task_with_output() {
        let prog = parse("TASK: Greeting\nOUTPUT: \"hi\"\n").unwrap();
        assert_eq!(prog.len(), 1);
        assert_eq!(prog[0].name, "Greeting");
        assert_eq!(prog[0].purpose, None);
        assert_eq!(prog[0].output.as_deref(), Some("hi"));
        assert!(prog[0].inputs.is_empty());
        assert!(prog[0].process.is_empty());
    }

    #[test]
    fn parse_korean_task() {
        let src = "\n작업: 인사말\n설명: \"첫 번째 테스트\"\n출력: \"안녕하세요\"\n";
        let prog = parse(src).unwrap();
        assert_eq!(
            prog,
            vec![TaskNode::new(
                "인사말",
                Some("첫 번째 테스트".to_string()),
                Some("안녕하세요".to_string()),
            )]
        );
    }

    #[test]
    fn parse_unquoted_purpose_takes_one_token() {
        let prog = parse("작업: 인사말\n설명: 첫 번째 테스트\n출력: \"x\"").unwrap();
        assert_eq!(prog[0].purpose.as_deref(), Some("첫"));
        assert_eq!(prog[0].output.as_deref(), Some("x"));
    }

    #[test]
    fn parse_multiple_tasks_in_order() {
        let src = "TASK: First\nOUTPUT: \"a\"\n\nTASK: Second\nPURPOSE: \"p\"\nOUTPUT: \"b\"\n";
        let prog = parse(src).unwrap();
        let names: Vec<&str> = prog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(prog[1].purpose.as_deref(), Some("p"));
    }

    #[test]
    fn parse_skips_reserved_keywords() {
        let src = r#"
TASK: Meeting_Request_Email
PURPOSE: "Request a meeting"
INPUT:
  Recipient = "Team Leader Kim"
PROCESS: "draft"
IF urgent ELSE later
REPEAT 3
OUTPUT: "Business Email"
"#;
        let prog = parse(src).unwrap();
        assert_eq!(prog.len(), 1);
        assert_eq!(prog[0].purpose.as_deref(), Some("Request a meeting"));
        assert_eq!(prog[0].output.as_deref(), Some("Business Email"));
        assert!(prog[0].inputs.is_empty());
        assert!(prog[0].process.is_empty());
    }

    #[test]
    fn parse_later_purpose_overwrites() {
        let prog = parse("TASK: t\nPURPOSE: \"one\"\nPURPOSE: \"two\"\nOUTPUT: \"o\"").unwrap();
        assert_eq!(prog[0].purpose.as_deref(), Some("two"));
    }

    #[test]
    fn parse_output_ends_task_fields() {
        let prog = parse("TASK: t\nOUTPUT: \"o\"\nPURPOSE: \"late\"\n");
        // PURPOSE after OUTPUT starts a new block, which must begin with TASK.
        let err = prog.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn parse_task_without_output_consumes_rest() {
        let prog = parse("TASK: a\nPURPOSE: \"p\"\nTASK: b\nOUTPUT: \"o\"").unwrap();
        assert_eq!(prog.len(), 1);
        assert_eq!(prog[0].name, "a");
        assert_eq!(prog[0].output.as_deref(), Some("o"));
    }

    #[test]
    fn parse_output_at_eof_is_none() {
        let prog = parse("TASK: t\nOUTPUT:").unwrap();
        assert_eq!(prog[0].output, None);
    }

    #[test]
    fn parse_output_followed_by_newline_captures_it() {
        let err = parse("TASK: t\nOUTPUT:\n\"o\"").unwrap_err();
        // the newline is taken as the value, "o" then starts a new block
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "expected TASK, got STRING");
    }

    #[test]
    fn parse_error_field_without_task() {
        let err = parse("OUTPUT: \"orphan\"\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "expected TASK, got OUTPUT");
        assert_eq!((err.line, err.col), (1, 1));
    }

    #[test]
    fn parse_error_missing_colon() {
        let err = parse("TASK Greeting").unwrap_err();
        assert_eq!(err.message, "expected COLON, got IDENTIFIER");
    }

    #[test]
    fn parse_error_missing_name() {
        let err = parse("TASK: \"quoted\"").unwrap_err();
        assert_eq!(err.message, "expected IDENTIFIER, got STRING");
        let err = parse("TASK:").unwrap_err();
        assert_eq!(err.message, "expected IDENTIFIER, got EOF");
    }

    #[test]
    fn parse_error_keyword_as_name() {
        let err = parse("TASK: OUTPUT").unwrap_err();
        assert_eq!(err.message, "expected IDENTIFIER, got OUTPUT");
    }

    #[test]
    fn parse_error_field_missing_colon() {
        let err = parse("TASK: t\nOUTPUT \"o\"").unwrap_err();
        assert_eq!(err.message, "expected COLON, got STRING");
        assert_eq!((err.line, err.col), (2, 8));
    }

    #[test]
    fn parse_tokens_without_eof() {
        let tokens = vec![
            Token::new(TokenKind::Task, "TASK", 1, 1),
            Token::new(TokenKind::Colon, ":", 1, 5),
            Token::new(TokenKind::Identifier, "t", 1, 7),
        ];
        let prog = Parser::new(tokens).parse().unwrap();
        assert_eq!(prog, vec![TaskNode::new("t", None, None)]);
    }
}
