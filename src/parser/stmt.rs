use crate::{
    ast::{
        ast::{Expr, StmtWrapper},
        statements::{
            BlockStmt, ExpressionStmt, ForStmt, FuncDeclStmt, IfStmt, StructDeclStmt, VarDeclStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::lookups::STMT_LOOKUP,
    Span,
};

use super::{expr::parse_expr, parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = STMT_LOOKUP.get(&parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let expr = parse_expr(parser, 0)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expr.get_span().clone(),
        expression: expr,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start_token = parser.advance().clone();

    let variable_name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::Colon)?;
    let declared_type = parse_type(parser)?;

    let assigned_value;
    if parser.current_token_kind() != TokenKind::Semicolon {
        parser.expect(TokenKind::Assignment)?;
        assigned_value = Some(parse_expr(parser, 0)?);
    } else {
        assigned_value = None;
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(VarDeclStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.get_position(),
        },
        identifier: variable_name,
        declared_type,
        assigned_value,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start.clone();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

pub fn parse_struct_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let member_name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let member_type = parse_type(parser)?;
        members.push((member_name, member_type));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(StmtWrapper::new(StructDeclStmt {
        name,
        members,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

pub fn parse_func_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        parameters.push((name, ty));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type;
    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        return_type = Some(parse_type(parser)?);
    } else {
        return_type = None;
    }

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(FuncDeclStmt {
        span: Span {
            start,
            end: parser.get_position(),
        },
        identifier,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, 0)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_stmt(parser)?;

    let else_body;
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        else_body = Some(parse_stmt(parser)?);
    } else {
        else_body = None;
    }

    Ok(StmtWrapper::new(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// The `for` header is asymmetric on purpose: the init is a full
/// statement and the condition a terminated expression statement, but
/// the iteration expression has no terminator before the closing paren.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;

    let init = parse_stmt(parser)?;

    let condition = parse_expr(parser, 0)?;
    parser.expect(TokenKind::Semicolon)?;

    let iteration = parse_expr(parser, 0)?;

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(ForStmt {
        init,
        condition,
        iteration,
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}
