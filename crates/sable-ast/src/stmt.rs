//! Statement AST nodes.

use crate::expr::Expr;
use crate::{Ident, TypeName};
use sable_core::Span;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression statement (expr;)
    Expr(ExprStmt<'ast>),
    /// Local variable declaration
    VarDecl(VarDeclStmt<'ast>),
    /// Return statement
    Return(ReturnStmt<'ast>),
    /// If statement
    If(&'ast IfStmt<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// Break statement
    Break(BreakStmt),
    /// Continue statement
    Continue(ContinueStmt),
    /// Nested block
    Block(Block<'ast>),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::VarDecl(s) => s.span,
            Self::Return(s) => s.span,
            Self::If(s) => s.span,
            Self::While(s) => s.span,
            Self::Break(s) => s.span,
            Self::Continue(s) => s.span,
            Self::Block(s) => s.span,
        }
    }
}

/// An expression evaluated for its effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A local variable declaration.
///
/// Examples:
/// - `int x;`
/// - `def m = {"a": 1};`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclStmt<'ast> {
    /// Declared type
    pub ty: TypeName<'ast>,
    /// Variable name
    pub name: Ident<'ast>,
    /// Optional initializer
    pub init: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// A return statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    /// Returned value, absent for a bare `return;`
    pub value: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// An if statement with optional else branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_branch: &'ast Stmt<'ast>,
    pub else_branch: Option<&'ast Stmt<'ast>>,
    /// Source location
    pub span: Span,
}

/// A while loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub body: &'ast Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A break statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakStmt {
    /// Source location
    pub span: Span,
}

/// A continue statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinueStmt {
    /// Source location
    pub span: Span,
}

/// A block of statements with its own scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}
