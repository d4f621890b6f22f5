//! Parser implementation for building the Abstract Syntax Tree.
//!
//! Statements are parsed by recursive descent, expressions by precedence climbing over the
//! binding powers registered in [`super::lookups`]. The parser pulls tokens from the lexer one
//! at a time and never fails: every mismatch is recorded as an [`Error`] and parsing resumes,
//! either right away or after skipping to a recovery token.
//!
//! Besides the tree, the parser collects four flat lists for the type checker:
//! - every declaration
//! - every identifier reference
//! - every assignment (array assignments included)
//! - every `if`/`while` condition

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::{
        ast::{Identifier, Program, VarDecl},
        expressions::Expr,
        statements::Assignment,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt_list,
    types::parse_declarations,
};

pub struct Parser {
    lexer: Lexer,
    /// Token under the cursor
    token: Token,
    /// Number of tokens consumed so far; identifies the current token
    token_index: usize,
    /// Index of the last token an error was reported for
    error_token: Option<usize>,
    errors: Vec<Error>,
    /// Expressions and statements currently open
    nesting: usize,

    declarations: Vec<VarDecl>,
    identifiers: Vec<Identifier>,
    assignments: Vec<Assignment>,
    conditions: Vec<Expr>,

    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

/// Deepest nesting of expressions and statements the parser descends into. Anything deeper is
/// reported and skipped so recursion stays bounded.
pub const MAX_NESTING: usize = 256;

/// Everything the parser produces for one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProgram {
    pub program: Program,
    pub declarations: Vec<VarDecl>,
    pub identifiers: Vec<Identifier>,
    pub assignments: Vec<Assignment>,
    pub conditions: Vec<Expr>,
    /// Syntax errors in the order they were found
    pub errors: Vec<Error>,
    /// `UNKNOWN` tokens produced by the lexer
    pub lexical_errors: usize,
}

impl ParsedProgram {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl Parser {
    /// Creates a parser positioned on the first token of `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            token,
            token_index: 0,
            error_token: None,
            errors: vec![],
            nesting: 0,
            declarations: vec![],
            identifiers: vec![],
            assignments: vec![],
            conditions: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Moves to the next token and returns the one that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        self.token_index += 1;
        mem::replace(&mut self.token, next)
    }

    /// Consumes the current token if it is of kind `expected`, otherwise reports an error and
    /// leaves the cursor where it is.
    pub fn expect(&mut self, expected: TokenKind) -> bool {
        if self.token.kind == expected {
            self.advance();
            true
        } else {
            self.error(expected);
            false
        }
    }

    /// Reports the current token as unexpected. A token is reported at most once.
    pub fn error(&mut self, expected: TokenKind) {
        if self.error_token == Some(self.token_index) {
            return;
        }

        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                found: self.token.kind,
                expected,
            },
            self.token.position,
        );
        debug!("{}", error);

        self.errors.push(error);
        self.error_token = Some(self.token_index);
    }

    /// Panic-mode recovery: discards tokens until one of `follow` (or `EOF`) is current.
    pub fn skip_to(&mut self, follow: &[TokenKind]) {
        while self.token.kind != TokenKind::EOF {
            if self.token.is_one_of_many(follow) {
                return;
            }
            self.advance();
        }
    }

    /// Opens one level of nesting. Past [`MAX_NESTING`] the current token is reported as
    /// `expected`, the rest of the construct is skipped and `false` is returned.
    pub fn enter_nesting(&mut self, expected: TokenKind) -> bool {
        if self.nesting >= MAX_NESTING {
            debug!("nesting limit reached at {}", self.token.position);
            self.error(expected);
            self.skip_to(&[TokenKind::Semicolon, TokenKind::CloseCurly]);
            return false;
        }

        self.nesting += 1;
        true
    }

    pub fn leave_nesting(&mut self, levels: usize) {
        self.nesting -= levels;
    }

    pub fn record_declaration(&mut self, declaration: VarDecl) {
        self.declarations.push(declaration);
    }

    pub fn record_identifier(&mut self, identifier: Identifier) {
        self.identifiers.push(identifier);
    }

    pub fn record_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn record_condition(&mut self, condition: Expr) {
        self.conditions.push(condition);
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers an infix handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a prefix handler. `-` is both prefix and infix, so this leaves binding powers
    /// alone.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// `Program ::= 'int' 'main' '(' ')' '{' Declarations StatementList '}' EOF`
    pub fn parse_program(mut self) -> ParsedProgram {
        self.expect(TokenKind::Int);
        self.expect(TokenKind::Main);
        self.expect(TokenKind::OpenParen);
        self.expect(TokenKind::CloseParen);
        self.expect(TokenKind::OpenCurly);

        let declarations = parse_declarations(&mut self);
        let statements = parse_stmt_list(&mut self);

        self.expect(TokenKind::CloseCurly);
        self.expect(TokenKind::EOF);

        // Scan whatever trails the program so every unknown lexeme is counted.
        while self.token.kind != TokenKind::EOF {
            self.advance();
        }

        debug!(
            "parsed {} declarations, {} statements, {} syntax errors",
            self.declarations.len(),
            statements.len(),
            self.errors.len()
        );

        ParsedProgram {
            program: Program {
                declarations,
                statements,
            },
            declarations: self.declarations,
            identifiers: self.identifiers,
            assignments: self.assignments,
            conditions: self.conditions,
            errors: self.errors,
            lexical_errors: self.lexer.unknown_count(),
        }
    }
}

/// Parses a whole program from `lexer`.
pub fn parse(lexer: Lexer) -> ParsedProgram {
    Parser::new(lexer).parse_program()
}

pub fn parse_source(source: &str) -> ParsedProgram {
    parse(Lexer::new(source))
}
