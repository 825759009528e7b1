//! Type annotation parsing.
//!
//! A type is an identifier followed by any number of `[]` suffixes:
//! `i32`, `P`, `i32[][]`. Each suffix wraps the type parsed so far, so
//! `i32[][]` reads as an array of `i32[]`.

use crate::{
    ast::{
        ast::TypeWrapper,
        types::{ArrayType, SymbolType},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    let named = TypeWrapper::new(SymbolType { name });

    if parser.current_token_kind() == TokenKind::OpenBracket {
        return parse_array_type(parser, named);
    }
    Ok(named)
}

pub fn parse_array_type(parser: &mut Parser, underlying: TypeWrapper) -> Result<TypeWrapper, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    let array = TypeWrapper::new(ArrayType { underlying });

    if parser.current_token_kind() == TokenKind::OpenBracket {
        return parse_array_type(parser, array);
    }
    Ok(array)
}
