use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, Stmt, StmtType, StmtWrapper, Type as AstType, TypeType},
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, GroupExpr, IndexExpr, MemberExpr, PrefixExpr,
            StructLiteralExpr, SymbolExpr,
        },
        statements::{
            BlockStmt, ExpressionStmt, ForStmt, FuncDeclStmt, IfStmt, StructDeclStmt, VarDeclStmt,
        },
    },
    errors::errors::Diagnostic,
    lexer::tokens::TokenKind,
};

use super::types::{FuncType, Primitive, StructType, Type};

const BAD_STMT_NODE: &str = "statement node does not match its discriminant";
const BAD_EXPR_NODE: &str = "expression node does not match its discriminant";

/// One lexical scope: the names declared directly in it.
///
/// Variables, struct types and functions live in separate tables, which
/// is what gives identifier resolution its category priority.
#[derive(Debug, Default)]
pub struct TypeEnv {
    variables: HashMap<String, Type>,
    structs: HashMap<String, StructType>,
    funcs: HashMap<String, FuncType>,
}

impl TypeEnv {
    pub fn new() -> Self {
        TypeEnv::default()
    }

    pub fn define_variable(&mut self, name: String, variable_type: Type) {
        self.variables.insert(name, variable_type);
    }

    pub fn get_variable(&self, name: &str) -> Option<&Type> {
        self.variables.get(name)
    }

    pub fn define_struct(&mut self, name: String, struct_type: StructType) {
        self.structs.insert(name, struct_type);
    }

    pub fn get_struct(&self, name: &str) -> Option<&StructType> {
        self.structs.get(name)
    }

    pub fn define_func(&mut self, name: String, func_type: FuncType) {
        self.funcs.insert(name, func_type);
    }

    pub fn get_func(&self, name: &str) -> Option<&FuncType> {
        self.funcs.get(name)
    }
}

/// The type checker.
///
/// Walks the AST once, collecting diagnostics; it never mutates the tree
/// and never stops at the first semantic error. Scopes are a plain stack
/// pushed and popped in lockstep with the nesting of the program.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub errors: Vec<Diagnostic>,
    scopes: Vec<TypeEnv>,
}

/// Type checks a whole program and returns the ordered diagnostics.
/// An empty list means the program is well typed.
pub fn check(program: &BlockStmt) -> Vec<Diagnostic> {
    let mut type_checker = TypeChecker::new();
    type_checker.check_block_stmt(program);
    type_checker.errors
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            errors: vec![],
            scopes: vec![],
        }
    }

    fn err(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic);
    }

    fn push_scope(&mut self) {
        self.scopes.push(TypeEnv::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn current_scope_mut(&mut self) -> &mut TypeEnv {
        self.scopes
            .last_mut()
            .expect("type checker has no open scope")
    }

    fn current_scope(&self) -> &TypeEnv {
        self.scopes.last().expect("type checker has no open scope")
    }

    /// Innermost-out variable lookup.
    fn lookup_variable(&self, name: &str) -> Option<&Type> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_variable(name))
    }

    fn lookup_struct(&self, name: &str) -> Option<&StructType> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_struct(name))
    }

    fn lookup_func(&self, name: &str) -> Option<&FuncType> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_func(name))
    }

    /// Resolves a syntactic type annotation to a semantic type: the
    /// primitive set first, then the structs in scope. Failure reports
    /// one diagnostic and yields the unresolved sentinel.
    fn resolve_type(&mut self, annotation: &TypeType) -> Option<Type> {
        match annotation {
            TypeType::Symbol(name) => {
                if let Some(primitive) = Primitive::from_name(name) {
                    return Some(Type::Primitive(primitive));
                }
                if let Some(struct_type) = self.lookup_struct(name) {
                    return Some(Type::Struct(struct_type.clone()));
                }
                self.err(Diagnostic::UndefinedType { name: name.clone() });
                None
            }
            TypeType::Array(element) => {
                let element_type = self.resolve_type(element)?;
                Some(Type::Array(Box::new(element_type)))
            }
        }
    }

    pub fn check_block_stmt(&mut self, block: &BlockStmt) {
        self.push_scope();
        for stmt in block.iter() {
            self.check_stmt(stmt);
        }
        self.pop_scope();
    }

    pub fn check_stmt(&mut self, stmt: &StmtWrapper) {
        match stmt.get_stmt_type() {
            StmtType::BlockStmt => {
                let block = stmt.as_any().downcast_ref::<BlockStmt>().expect(BAD_STMT_NODE);
                self.check_block_stmt(block);
            }
            StmtType::ExpressionStmt => {
                let expr_stmt = stmt
                    .as_any()
                    .downcast_ref::<ExpressionStmt>()
                    .expect(BAD_STMT_NODE);
                self.infer_type(&expr_stmt.expression);
            }
            StmtType::VarDeclStmt => {
                let var_decl = stmt
                    .as_any()
                    .downcast_ref::<VarDeclStmt>()
                    .expect(BAD_STMT_NODE);
                self.check_var_decl_stmt(var_decl);
            }
            StmtType::StructDeclStmt => {
                let struct_decl = stmt
                    .as_any()
                    .downcast_ref::<StructDeclStmt>()
                    .expect(BAD_STMT_NODE);
                self.check_struct_decl_stmt(struct_decl);
            }
            StmtType::FuncDeclStmt => {
                let func_decl = stmt
                    .as_any()
                    .downcast_ref::<FuncDeclStmt>()
                    .expect(BAD_STMT_NODE);
                self.check_func_decl_stmt(func_decl);
            }
            StmtType::IfStmt => {
                let if_stmt = stmt.as_any().downcast_ref::<IfStmt>().expect(BAD_STMT_NODE);
                self.check_if_stmt(if_stmt);
            }
            StmtType::ForStmt => {
                let for_stmt = stmt.as_any().downcast_ref::<ForStmt>().expect(BAD_STMT_NODE);
                self.check_for_stmt(for_stmt);
            }
        }
    }

    /// `let name: T = init;` - the initializer must match the annotation
    /// structurally, and the variable is bound under the declared type
    /// whatever the initializer turned out to be.
    fn check_var_decl_stmt(&mut self, stmt: &VarDeclStmt) {
        let Some(declared_type) = self.resolve_type(&stmt.declared_type.get_type_type()) else {
            return;
        };

        if let Some(init) = &stmt.assigned_value {
            if let Some(init_type) = self.infer_type(init) {
                if !declared_type.equals(&init_type) {
                    self.err(Diagnostic::VarDeclTypeMismatch {
                        name: stmt.identifier.clone(),
                        declared: declared_type.to_string(),
                        found: init_type.to_string(),
                    });
                }
            }
        }

        self.current_scope_mut()
            .define_variable(stmt.identifier.clone(), declared_type);
    }

    fn check_struct_decl_stmt(&mut self, stmt: &StructDeclStmt) {
        if self.current_scope().get_struct(&stmt.name).is_some() {
            self.err(Diagnostic::RedeclaredStruct {
                name: stmt.name.clone(),
            });
            return;
        }

        // Member annotations resolve inside their own scope.
        self.push_scope();
        let mut members: Vec<(String, Type)> = Vec::with_capacity(stmt.members.len());
        for (member_name, member_annotation) in &stmt.members {
            let resolved = self.resolve_type(&member_annotation.get_type_type());
            if let Some(existing) = members.iter_mut().find(|(name, _)| name == member_name) {
                self.err(Diagnostic::DuplicateStructMember {
                    member: member_name.clone(),
                    name: stmt.name.clone(),
                });
                // The last occurrence wins.
                if let Some(member_type) = resolved {
                    existing.1 = member_type;
                }
            } else if let Some(member_type) = resolved {
                members.push((member_name.clone(), member_type));
            }
        }
        self.pop_scope();

        let struct_type = StructType {
            name: stmt.name.clone(),
            members,
        };
        self.current_scope_mut()
            .define_struct(stmt.name.clone(), struct_type);
    }

    /// Parameter and return annotations resolve in the declaring scope;
    /// the function is registered before its body is checked so the body
    /// can call it recursively.
    fn check_func_decl_stmt(&mut self, stmt: &FuncDeclStmt) {
        if self.current_scope().get_func(&stmt.identifier).is_some() {
            self.err(Diagnostic::RedeclaredFunction {
                name: stmt.identifier.clone(),
            });
            return;
        }

        let return_type = match &stmt.return_type {
            Some(annotation) => match self.resolve_type(&annotation.get_type_type()) {
                Some(return_type) => return_type,
                None => return,
            },
            None => Type::Primitive(Primitive::Void),
        };

        let mut param_types = Vec::with_capacity(stmt.parameters.len());
        let mut param_bindings = Vec::with_capacity(stmt.parameters.len());
        for (param_name, param_annotation) in &stmt.parameters {
            let Some(param_type) = self.resolve_type(&param_annotation.get_type_type()) else {
                return;
            };
            param_types.push(param_type.clone());
            param_bindings.push((param_name.clone(), param_type));
        }

        let func_type = FuncType {
            param_types,
            return_type: Box::new(return_type),
        };
        self.current_scope_mut()
            .define_func(stmt.identifier.clone(), func_type);

        self.push_scope();
        for (param_name, param_type) in param_bindings {
            self.current_scope_mut().define_variable(param_name, param_type);
        }
        self.check_block_stmt(&stmt.body);
        self.pop_scope();
    }

    fn check_if_stmt(&mut self, stmt: &IfStmt) {
        let cond_type = self.infer_type(&stmt.condition);
        if !matches!(&cond_type, Some(t) if t.is_primitive(Primitive::Bool)) {
            self.err(Diagnostic::IfCondNotBoolean);
        }

        self.check_stmt(&stmt.then_body);
        if let Some(else_body) = &stmt.else_body {
            self.check_stmt(else_body);
        }
    }

    /// The init statement and the iteration expression run against the
    /// enclosing scope; only the body opens a new one.
    fn check_for_stmt(&mut self, stmt: &ForStmt) {
        self.check_stmt(&stmt.init);

        let cond_type = self.infer_type(&stmt.condition);
        if !matches!(&cond_type, Some(t) if t.is_primitive(Primitive::Bool)) {
            self.err(Diagnostic::ForCondNotBoolean);
        }

        self.infer_type(&stmt.iteration);
        self.check_block_stmt(&stmt.body);
    }

    /// Infers the type of an expression, appending diagnostics along the
    /// way. `None` is the unresolved sentinel: a subexpression already
    /// failed, and whatever depends on it stays silent instead of piling
    /// up derived errors.
    pub fn infer_type(&mut self, expr: &ExprWrapper) -> Option<Type> {
        match expr.get_expr_type() {
            ExprType::Number => Some(Type::Primitive(Primitive::I32)),
            ExprType::String => Some(Type::Primitive(Primitive::String)),
            ExprType::Bool => Some(Type::Primitive(Primitive::Bool)),
            ExprType::Symbol => {
                let symbol = expr.as_any().downcast_ref::<SymbolExpr>().expect(BAD_EXPR_NODE);
                self.infer_symbol_type(symbol)
            }
            ExprType::Prefix => {
                let prefix = expr.as_any().downcast_ref::<PrefixExpr>().expect(BAD_EXPR_NODE);
                self.check_prefix_expr(prefix)
            }
            ExprType::Binary => {
                let binary = expr.as_any().downcast_ref::<BinaryExpr>().expect(BAD_EXPR_NODE);
                self.check_binary_expr(binary)
            }
            ExprType::Group => {
                let group = expr.as_any().downcast_ref::<GroupExpr>().expect(BAD_EXPR_NODE);
                self.infer_type(&group.inner)
            }
            ExprType::Call => {
                let call = expr.as_any().downcast_ref::<CallExpr>().expect(BAD_EXPR_NODE);
                self.check_call_expr(call)
            }
            ExprType::StructLiteral => {
                let struct_literal = expr
                    .as_any()
                    .downcast_ref::<StructLiteralExpr>()
                    .expect(BAD_EXPR_NODE);
                self.check_struct_literal_expr(struct_literal)
            }
            ExprType::Member => {
                let member = expr.as_any().downcast_ref::<MemberExpr>().expect(BAD_EXPR_NODE);
                self.check_member_expr(member)
            }
            ExprType::Index => {
                let index = expr.as_any().downcast_ref::<IndexExpr>().expect(BAD_EXPR_NODE);
                self.check_index_expr(index)
            }
            ExprType::Assignment => {
                let assignment = expr
                    .as_any()
                    .downcast_ref::<AssignmentExpr>()
                    .expect(BAD_EXPR_NODE);
                self.check_assignment_expr(assignment)
            }
        }
    }

    /// Identifier resolution: variables first, then struct type names,
    /// then functions; the first category that matches wins.
    fn infer_symbol_type(&mut self, symbol: &SymbolExpr) -> Option<Type> {
        if let Some(variable_type) = self.lookup_variable(&symbol.value) {
            return Some(variable_type.clone());
        }
        if let Some(struct_type) = self.lookup_struct(&symbol.value) {
            return Some(Type::Struct(struct_type.clone()));
        }
        if let Some(func_type) = self.lookup_func(&symbol.value) {
            return Some(Type::Func(func_type.clone()));
        }
        self.err(Diagnostic::UndefinedVariable {
            name: symbol.value.clone(),
        });
        None
    }

    fn check_prefix_expr(&mut self, expr: &PrefixExpr) -> Option<Type> {
        let operand_type = self.infer_type(&expr.right)?;

        match expr.operator.kind {
            TokenKind::Plus | TokenKind::Dash => {
                if operand_type.is_numeric() {
                    return Some(operand_type);
                }
                self.err(Diagnostic::InvalidUnaryOperand {
                    operator: expr.operator.value.clone(),
                    operand: operand_type.to_string(),
                });
                None
            }
            TokenKind::Not => {
                if operand_type.is_primitive(Primitive::Bool) {
                    return Some(Type::Primitive(Primitive::Bool));
                }
                self.err(Diagnostic::InvalidUnaryOperand {
                    operator: expr.operator.value.clone(),
                    operand: operand_type.to_string(),
                });
                None
            }
            _ => {
                self.err(Diagnostic::UnsupportedUnaryOperator {
                    operator: expr.operator.value.clone(),
                });
                None
            }
        }
    }

    fn check_binary_expr(&mut self, expr: &BinaryExpr) -> Option<Type> {
        let left_type = self.infer_type(&expr.left);
        let right_type = self.infer_type(&expr.right);
        let (Some(left_type), Some(right_type)) = (left_type, right_type) else {
            return None;
        };

        match expr.operator.kind {
            TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent => {
                if left_type.is_numeric() && right_type.is_numeric() {
                    // No promotion across numeric widths; the left
                    // operand's type stands in for the result.
                    return Some(left_type);
                }
                if expr.operator.kind == TokenKind::Plus
                    && left_type.is_primitive(Primitive::String)
                    && right_type.is_primitive(Primitive::String)
                {
                    return Some(Type::Primitive(Primitive::String));
                }
                self.err(Diagnostic::InvalidBinaryOperands {
                    operator: expr.operator.value.clone(),
                    lhs: left_type.to_string(),
                    rhs: right_type.to_string(),
                });
                None
            }
            TokenKind::Equals | TokenKind::NotEquals => {
                if !left_type.equals(&right_type) {
                    self.err(Diagnostic::IncomparableTypes {
                        lhs: left_type.to_string(),
                        rhs: right_type.to_string(),
                    });
                    return None;
                }
                Some(Type::Primitive(Primitive::Bool))
            }
            TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals => {
                if left_type.is_numeric() && right_type.is_numeric() {
                    return Some(Type::Primitive(Primitive::Bool));
                }
                self.err(Diagnostic::InvalidBinaryOperands {
                    operator: expr.operator.value.clone(),
                    lhs: left_type.to_string(),
                    rhs: right_type.to_string(),
                });
                None
            }
            _ => {
                self.err(Diagnostic::UnsupportedBinaryOperator {
                    operator: expr.operator.value.clone(),
                });
                None
            }
        }
    }

    /// Argument checking stops at the first problem: a count mismatch or
    /// the first argument whose type does not line up. One diagnostic
    /// per call site.
    fn check_call_expr(&mut self, expr: &CallExpr) -> Option<Type> {
        let callee_type = self.infer_type(&expr.callee)?;

        let func_type = match callee_type {
            Type::Func(func_type) => func_type,
            other => {
                self.err(Diagnostic::NotAFunction {
                    found: other.to_string(),
                });
                return None;
            }
        };

        if expr.arguments.len() != func_type.param_types.len() {
            self.err(Diagnostic::WrongArgumentCount {
                expected: func_type.param_types.len(),
                found: expr.arguments.len(),
            });
            return None;
        }

        for (index, argument) in expr.arguments.iter().enumerate() {
            let argument_type = self.infer_type(argument)?;
            if !func_type.param_types[index].equals(&argument_type) {
                self.err(Diagnostic::ArgumentTypeMismatch {
                    index: index + 1,
                    expected: func_type.param_types[index].to_string(),
                    found: argument_type.to_string(),
                });
                return None;
            }
        }

        Some(*func_type.return_type)
    }

    /// Member accounting for a struct literal: unknown names, repeated
    /// assignments and value mismatches each report independently, then
    /// any member left unassigned reports once, in declaration order.
    fn check_struct_literal_expr(&mut self, expr: &StructLiteralExpr) -> Option<Type> {
        let struct_type_value = self.infer_type(&expr.struct_expr)?;

        let struct_type = match struct_type_value {
            Type::Struct(struct_type) => struct_type,
            other => {
                self.err(Diagnostic::NotAStruct {
                    found: other.to_string(),
                });
                return None;
            }
        };

        let mut assigned: Vec<(String, bool)> = struct_type
            .members
            .iter()
            .map(|(name, _)| (name.clone(), false))
            .collect();

        for (member_name, member_value) in &expr.members {
            let Some(member_type) = struct_type.member_type(member_name) else {
                self.err(Diagnostic::NotAStructMember {
                    member: member_name.clone(),
                    name: struct_type.name.clone(),
                });
                continue;
            };
            let member_type = member_type.clone();

            let flag = assigned
                .iter_mut()
                .find(|(name, _)| name == member_name)
                .expect("assignment ledger misses a struct member");
            if flag.1 {
                self.err(Diagnostic::StructMemberReassigned {
                    member: member_name.clone(),
                });
                continue;
            }
            flag.1 = true;

            let Some(value_type) = self.infer_type(member_value) else {
                continue;
            };
            if !member_type.equals(&value_type) {
                self.err(Diagnostic::StructMemberTypeMismatch {
                    member: member_name.clone(),
                    expected: member_type.to_string(),
                    found: value_type.to_string(),
                });
            }
        }

        for (member_name, was_assigned) in &assigned {
            if !*was_assigned {
                self.err(Diagnostic::StructMemberNotAssigned {
                    member: member_name.clone(),
                });
            }
        }

        Some(Type::Struct(struct_type))
    }

    fn check_member_expr(&mut self, expr: &MemberExpr) -> Option<Type> {
        let base_type = self.infer_type(&expr.base)?;

        let struct_type = match base_type {
            Type::Struct(struct_type) => struct_type,
            other => {
                self.err(Diagnostic::NotAStruct {
                    found: other.to_string(),
                });
                return None;
            }
        };

        let Some(member_type) = struct_type.member_type(&expr.member) else {
            self.err(Diagnostic::NotAStructMember {
                member: expr.member.clone(),
                name: struct_type.name.clone(),
            });
            return None;
        };

        Some(member_type.clone())
    }

    /// Indexing requires an array base and a numeric index; the result
    /// is the element type.
    fn check_index_expr(&mut self, expr: &IndexExpr) -> Option<Type> {
        let base_type = self.infer_type(&expr.base);
        let index_type = self.infer_type(&expr.index);

        let element_type = match base_type? {
            Type::Array(element_type) => element_type,
            other => {
                self.err(Diagnostic::NotAnArray {
                    found: other.to_string(),
                });
                return None;
            }
        };

        if let Some(index_type) = index_type {
            if !index_type.is_numeric() {
                self.err(Diagnostic::NonNumericIndex {
                    found: index_type.to_string(),
                });
            }
        }

        Some(*element_type)
    }

    /// Both sides have to resolve before they are compared; the result
    /// is the target's type even when the comparison failed.
    fn check_assignment_expr(&mut self, expr: &AssignmentExpr) -> Option<Type> {
        let assignee_type = self.infer_type(&expr.assignee);
        let value_type = self.infer_type(&expr.value);
        let (Some(assignee_type), Some(value_type)) = (assignee_type, value_type) else {
            return None;
        };

        if !assignee_type.equals(&value_type) {
            self.err(Diagnostic::AssignTypeMismatch {
                expected: assignee_type.to_string(),
                found: value_type.to_string(),
            });
        }

        Some(assignee_type)
    }
}
