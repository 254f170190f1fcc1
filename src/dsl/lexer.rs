//! Lexer for the Cuneiform language.
//!
//! Converts source text into a stream of [`Token`]s. Lexing never fails:
//! characters that start no token are consumed and dropped, and an
//! unterminated string literal runs to the end of the source.

use super::token::{keyword, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Scan the whole source. The result always ends with exactly one EOF.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let ch = self.peek();

            let token = match ch {
                ' ' | '\t' => {
                    self.skip_whitespace();
                    continue;
                }
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '\n' => self.single_char(TokenKind::Newline),
                ':' => self.single_char(TokenKind::Colon),
                '"' => self.lex_string(),
                c if starts_word(c) => self.lex_word(),
                _ => {
                    self.advance();
                    continue;
                }
            };

            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line, self.col));
        tokens
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.peek(), ' ' | '\t') {
            self.advance();
        }
    }

    /// Skip a `#` comment up to, but not including, the newline.
    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        let ch = self.advance();
        Token::new(kind, ch, line, col)
    }

    fn lex_string(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        self.advance(); // consume opening '"'
        let mut s = String::new();
        while !self.is_at_end() && self.peek() != '"' {
            s.push(self.advance());
        }
        if !self.is_at_end() {
            self.advance(); // consume closing '"'
        }
        Token::new(TokenKind::String, s, line, col)
    }

    fn lex_word(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        s.push(self.advance());
        while !self.is_at_end() && continues_word(self.peek()) {
            s.push(self.advance());
        }

        let kind = keyword(&s).unwrap_or(TokenKind::Identifier);
        Token::new(kind, s, line, col)
    }
}

fn starts_word(c: char) -> bool {
    c.is_alphanumeric() || !c.is_ascii()
}

fn continues_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || !c.is_ascii()
}
