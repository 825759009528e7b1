use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            AssignmentExpr, BinaryExpr, BoolExpr, CallExpr, GroupExpr, IndexExpr, MemberExpr,
            NumberExpr, PrefixExpr, StringExpr, StructLiteralExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{BindingPower, BP_LOOKUP, LED_LOOKUP, NUD_LOOKUP},
    parser::Parser,
};

/// Parses one expression with the precedence climbing loop.
///
/// A head form is parsed first, then tail forms accumulate onto it while
/// the next token binds tighter than `min_power`.
pub fn parse_expr(parser: &mut Parser, min_power: u8) -> Result<ExprWrapper, Error> {
    let token_kind = parser.current_token_kind();
    let nud = NUD_LOOKUP.get(&token_kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )
    })?;

    let mut left = nud(parser)?;

    loop {
        let next_kind = parser.current_token_kind();
        let power = BP_LOOKUP
            .get(&next_kind)
            .copied()
            .unwrap_or(BindingPower::NONE);
        if power.left <= min_power {
            break;
        }

        let led = LED_LOOKUP.get(&next_kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            )
        })?;

        left = led(parser, left, power.right)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse();

            match result {
                Ok(value) => Ok(ExprWrapper::new(NumberExpr {
                    value,
                    span: parser.advance().span.clone(),
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => Ok(ExprWrapper::new(StringExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::True | TokenKind::False => {
            let value = parser.current_token_kind() == TokenKind::True;
            Ok(ExprWrapper::new(BoolExpr {
                value,
                span: parser.advance().span.clone(),
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Unary `+`/`-`. The operand is parsed with the additive left power as
/// the minimum, so a prefix binds its operand tighter than `+`/`-` but
/// looser than `*`: `-a * b` is `-(a * b)`, `-a + b` is `(-a) + b`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::ADDITIVE.left)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right: rhs,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();
    let inner = parse_expr(parser, 0)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(GroupExpr {
        span: Span {
            start,
            end: parser.get_position(),
        },
        inner,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    right_power: u8,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, right_power)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    right_power: u8,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let rhs = parse_expr(parser, right_power)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: rhs.get_span().end.clone(),
        },
        assignee: left,
        operator: operator_token,
        value: rhs,
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _right_power: u8,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, 0)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_position(),
        },
        callee: left,
        arguments: args,
    }))
}

/// Struct literal tail form: `P { x: 1, y: 2, }`. Every member
/// assignment ends with a comma; the terminating comma is not optional.
pub fn parse_struct_literal_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _right_power: u8,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let mut members = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let member_name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let member_value = parse_expr(parser, 0)?;
        members.push((member_name, member_value));

        parser.expect(TokenKind::Comma)?;
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(ExprWrapper::new(StructLiteralExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_position(),
        },
        struct_expr: left,
        members,
    }))
}

pub fn parse_index_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _right_power: u8,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let index = parse_expr(parser, 0)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(IndexExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_position(),
        },
        base: left,
        index,
    }))
}

/// Member access consumes a single identifier; `a.b.c` chains to the
/// left through the expression loop.
pub fn parse_member_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _right_power: u8,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let member = parser.expect(TokenKind::Identifier)?.value;

    Ok(ExprWrapper::new(MemberExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_position(),
        },
        base: left,
        member,
    }))
}
