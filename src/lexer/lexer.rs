use log::{debug, trace};

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenAttribute, TokenKind, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

/// Columns a tab advances by.
pub const TAB_WIDTH: u32 = 4;

/// Hand-rolled scanner with a single token of lookahead.
///
/// Tokens are produced on demand by [`Lexer::next_token`]; [`Lexer::peek`] scans one token ahead
/// and caches it until the next call to `next_token`. Once the input is exhausted every further
/// call returns an `EOF` token at the final position.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    peeked: Option<Token>,
    unknown_count: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            peeked: None,
            unknown_count: 0,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token(),
        };
        self.peeked.insert(token)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token(),
        }
    }

    /// Number of `UNKNOWN` tokens scanned so far.
    pub fn unknown_count(&self) -> usize {
        self.unknown_count
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += 1;
        self.column += 1;
        Some(c)
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(c) = self.at() {
            if !predicate(c) {
                break;
            }
            taken.push(c);
            self.advance();
        }
        taken
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            match c {
                '\n' => {
                    self.pos += 1;
                    self.new_line();
                }
                '\r' => {
                    self.pos += 1;
                    if self.at() == Some('\n') {
                        self.pos += 1;
                    }
                    self.new_line();
                }
                '\t' => {
                    self.pos += 1;
                    self.column += TAB_WIDTH;
                }
                c if c.is_whitespace() => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position();

        let token = match self.at() {
            None => MK_TOKEN!(TokenKind::EOF, start),
            Some(c) if c.is_ascii_alphabetic() => self.read_word(start),
            Some(c) if c.is_ascii_digit() => self.read_number(start),
            Some('\'') => self.read_char_literal(start),
            Some(c) => self.read_operator(c, start),
        };

        if token.kind == TokenKind::Unknown {
            self.unknown_count += 1;
            debug!("unknown token at {}", token.position);
        }
        trace!("{}", token);

        token
    }

    /// Identifier, reserved word or boolean literal.
    fn read_word(&mut self, start: Position) -> Token {
        let word = self.take_while(|c| c.is_ascii_alphanumeric());

        if let Some(kind) = RESERVED_LOOKUP.get(word.as_str()) {
            return MK_TOKEN!(*kind, start);
        }

        match word.as_str() {
            "true" => MK_TOKEN!(TokenKind::BooleanConst, TokenAttribute::Boolean(true), start),
            "false" => MK_TOKEN!(TokenKind::BooleanConst, TokenAttribute::Boolean(false), start),
            _ => MK_TOKEN!(TokenKind::Identifier, TokenAttribute::Identifier(word), start),
        }
    }

    fn read_number(&mut self, start: Position) -> Token {
        let mut number = self.take_while(|c| c.is_ascii_digit());

        if self.at() == Some('.') {
            self.advance();

            if !self.at().is_some_and(|c| c.is_ascii_digit()) {
                // No backtracking past the dot: the rest of the run is one unknown lexeme.
                self.take_while(|c| !c.is_whitespace());
                return MK_TOKEN!(TokenKind::Unknown, start);
            }

            number.push('.');
            number.push_str(&self.take_while(|c| c.is_ascii_digit()));

            return match number.parse::<f32>() {
                Ok(value) => MK_TOKEN!(TokenKind::FloatConst, TokenAttribute::Float(value), start),
                Err(_) => MK_TOKEN!(TokenKind::Unknown, start),
            };
        }

        match number.parse::<i32>() {
            Ok(value) => MK_TOKEN!(TokenKind::IntConst, TokenAttribute::Int(value), start),
            Err(_) => {
                debug!("integer literal {} out of range", number);
                MK_TOKEN!(TokenKind::Unknown, start)
            }
        }
    }

    /// `'x'` with exactly one alphabetic character. A malformed literal consumes the quote and,
    /// when present, the single letter after it; scanning resumes right after that.
    fn read_char_literal(&mut self, start: Position) -> Token {
        self.advance();

        if let Some(c) = self.at() {
            if c.is_alphabetic() {
                if self.peek_next() == Some('\'') {
                    self.advance();
                    self.advance();
                    return MK_TOKEN!(TokenKind::CharConst, TokenAttribute::Char(c), start);
                }
                self.advance();
            }
        }

        MK_TOKEN!(TokenKind::Unknown, start)
    }

    fn read_operator(&mut self, c: char, start: Position) -> Token {
        self.advance();

        let kind = match c {
            '&' => self.follow('&', TokenKind::And, TokenKind::Unknown),
            '|' => self.follow('|', TokenKind::Or, TokenKind::Unknown),
            '=' => self.follow('=', TokenKind::Equals, TokenKind::Assignment),
            '!' => self.follow('=', TokenKind::NotEquals, TokenKind::Not),
            '<' => self.follow('=', TokenKind::LessEquals, TokenKind::Less),
            '>' => self.follow('=', TokenKind::GreaterEquals, TokenKind::Greater),
            _ => *PUNCTUATION_LOOKUP.get(&c).unwrap_or(&TokenKind::Unknown),
        };

        MK_TOKEN!(kind, start)
    }

    fn follow(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.at() == Some(expected) {
            self.advance();
            matched
        } else {
            otherwise
        }
    }
}

/// Scans `source` up to and including the first `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            break;
        }
    }

    tokens
}
