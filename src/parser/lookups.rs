use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// A binding power pair for one infix/postfix token.
///
/// The expression loop stops as soon as the next token's `left` power is
/// less than or equal to the current minimum, and recurses into the
/// right-hand side with the token's `right` power as the new minimum.
/// Under that rule `left < right` makes an operator left-associative and
/// `left > right` makes it right-associative.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    /// Expression terminators: always stop the loop.
    pub const NONE: BindingPower = BindingPower { left: 0, right: 0 };
    pub const ASSIGNMENT: BindingPower = BindingPower { left: 2, right: 1 };
    pub const LOGICAL: BindingPower = BindingPower { left: 3, right: 4 };
    pub const EQUALITY: BindingPower = BindingPower { left: 5, right: 6 };
    pub const RELATIONAL: BindingPower = BindingPower { left: 7, right: 8 };
    pub const ADDITIVE: BindingPower = BindingPower { left: 9, right: 10 };
    pub const MULTIPLICATIVE: BindingPower = BindingPower { left: 11, right: 12 };
    /// Call, struct literal and index forms parse their own interior up
    /// to the closing delimiter, so the right power is unused.
    pub const POSTFIX: BindingPower = BindingPower { left: 13, right: 0 };
    /// Member access chains left through the loop itself.
    pub const MEMBER: BindingPower = BindingPower { left: 15, right: 0 };
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NudHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LedHandler = fn(&mut Parser, ExprWrapper, u8) -> Result<ExprWrapper, Error>;

// The lookup tables are process-wide and immutable: built once on first
// use and shared read-only by every parser instance.
lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();

        map.insert(TokenKind::Assignment, BindingPower::ASSIGNMENT);
        map.insert(TokenKind::PlusEquals, BindingPower::ASSIGNMENT);
        map.insert(TokenKind::MinusEquals, BindingPower::ASSIGNMENT);

        map.insert(TokenKind::Or, BindingPower::LOGICAL);
        map.insert(TokenKind::And, BindingPower::LOGICAL);

        map.insert(TokenKind::Equals, BindingPower::EQUALITY);
        map.insert(TokenKind::NotEquals, BindingPower::EQUALITY);

        map.insert(TokenKind::Less, BindingPower::RELATIONAL);
        map.insert(TokenKind::LessEquals, BindingPower::RELATIONAL);
        map.insert(TokenKind::Greater, BindingPower::RELATIONAL);
        map.insert(TokenKind::GreaterEquals, BindingPower::RELATIONAL);

        map.insert(TokenKind::Plus, BindingPower::ADDITIVE);
        map.insert(TokenKind::Dash, BindingPower::ADDITIVE);

        map.insert(TokenKind::Star, BindingPower::MULTIPLICATIVE);
        map.insert(TokenKind::Slash, BindingPower::MULTIPLICATIVE);
        map.insert(TokenKind::Percent, BindingPower::MULTIPLICATIVE);

        map.insert(TokenKind::OpenParen, BindingPower::POSTFIX);
        map.insert(TokenKind::OpenCurly, BindingPower::POSTFIX);
        map.insert(TokenKind::OpenBracket, BindingPower::POSTFIX);

        map.insert(TokenKind::Dot, BindingPower::MEMBER);

        // Terminators stop any expression.
        map.insert(TokenKind::EOF, BindingPower::NONE);
        map.insert(TokenKind::Semicolon, BindingPower::NONE);
        map.insert(TokenKind::CloseParen, BindingPower::NONE);
        map.insert(TokenKind::CloseCurly, BindingPower::NONE);
        map.insert(TokenKind::CloseBracket, BindingPower::NONE);
        map.insert(TokenKind::Comma, BindingPower::NONE);

        map
    };

    pub static ref NUD_LOOKUP: HashMap<TokenKind, NudHandler> = {
        let mut map: HashMap<TokenKind, NudHandler> = HashMap::new();

        map.insert(TokenKind::Number, parse_primary_expr);
        map.insert(TokenKind::String, parse_primary_expr);
        map.insert(TokenKind::Identifier, parse_primary_expr);
        map.insert(TokenKind::True, parse_primary_expr);
        map.insert(TokenKind::False, parse_primary_expr);
        map.insert(TokenKind::Plus, parse_prefix_expr);
        map.insert(TokenKind::Dash, parse_prefix_expr);
        map.insert(TokenKind::OpenParen, parse_grouping_expr);

        map
    };

    pub static ref LED_LOOKUP: HashMap<TokenKind, LedHandler> = {
        let mut map: HashMap<TokenKind, LedHandler> = HashMap::new();

        map.insert(TokenKind::Assignment, parse_assignment_expr);
        map.insert(TokenKind::PlusEquals, parse_assignment_expr);
        map.insert(TokenKind::MinusEquals, parse_assignment_expr);

        map.insert(TokenKind::Or, parse_binary_expr);
        map.insert(TokenKind::And, parse_binary_expr);
        map.insert(TokenKind::Equals, parse_binary_expr);
        map.insert(TokenKind::NotEquals, parse_binary_expr);
        map.insert(TokenKind::Less, parse_binary_expr);
        map.insert(TokenKind::LessEquals, parse_binary_expr);
        map.insert(TokenKind::Greater, parse_binary_expr);
        map.insert(TokenKind::GreaterEquals, parse_binary_expr);
        map.insert(TokenKind::Plus, parse_binary_expr);
        map.insert(TokenKind::Dash, parse_binary_expr);
        map.insert(TokenKind::Star, parse_binary_expr);
        map.insert(TokenKind::Slash, parse_binary_expr);
        map.insert(TokenKind::Percent, parse_binary_expr);

        map.insert(TokenKind::OpenParen, parse_call_expr);
        map.insert(TokenKind::OpenCurly, parse_struct_literal_expr);
        map.insert(TokenKind::OpenBracket, parse_index_expr);
        map.insert(TokenKind::Dot, parse_member_expr);

        map
    };

    pub static ref STMT_LOOKUP: HashMap<TokenKind, StmtHandler> = {
        let mut map: HashMap<TokenKind, StmtHandler> = HashMap::new();

        map.insert(TokenKind::OpenCurly, parse_block_stmt);
        map.insert(TokenKind::Let, parse_var_decl_stmt);
        map.insert(TokenKind::Struct, parse_struct_decl_stmt);
        map.insert(TokenKind::Func, parse_func_decl_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::For, parse_for_stmt);

        map
    };
}
