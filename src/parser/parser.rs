//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry
//! point. The parser uses a Pratt parser approach with NUD/LED handlers
//! for expression parsing and specialized functions for statement
//! parsing.
//!
//! The handler and binding power tables live in `lookups` as immutable
//! process-wide maps.

use std::rc::Rc;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and tracks the current position
/// in it. The position only ever moves forward; the grammar needs one
/// token of lookahead plus a binding power comparison.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance for a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .expect("Parser position past the EOF token")
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens
            .get(self.pos - 1)
            .expect("Parser position past the EOF token")
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches and consumes it,
    /// otherwise returns an Error naming the expected and found kinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: kind,
                },
                self.get_position(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It parses statements until
/// EOF and returns the whole program as one block statement. The first
/// malformed construct aborts the parse; no partial AST is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens);

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.get_position(),
        },
    })
}
