//! Expression AST nodes.
//!
//! The set of forms is closed: the compiler dispatches over [`Expr`] with a
//! single `match` and never needs an extension point.

use crate::{BinaryOp, Ident, TypeName, UnaryOp};
use sable_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal value
    Literal(LiteralExpr<'ast>),
    /// Local variable read
    Variable(VariableExpr<'ast>),
    /// Assignment to a local
    Assign(&'ast AssignExpr<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Object construction (`new T(args)`)
    New(&'ast NewExpr<'ast>),
    /// Call to a function declared in the same class
    Call(&'ast CallExpr<'ast>),
    /// Instance method call (`receiver.name(args)`)
    MethodCall(&'ast MethodCallExpr<'ast>),
    /// Static method call (`Type.name(args)`)
    StaticCall(&'ast StaticCallExpr<'ast>),
    /// Explicit cast (`(T) expr`)
    Cast(&'ast CastExpr<'ast>),
    /// Map literal (`{k: v, ...}`)
    MapInit(&'ast MapInitExpr<'ast>),
    /// List literal (`[v, ...]`)
    ListInit(&'ast ListInitExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Variable(e) => e.span,
            Self::Assign(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::New(e) => e.span,
            Self::Call(e) => e.span,
            Self::MethodCall(e) => e.span,
            Self::StaticCall(e) => e.span,
            Self::Cast(e) => e.span,
            Self::MapInit(e) => e.span,
            Self::ListInit(e) => e.span,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind
    pub kind: LiteralKind<'ast>,
    /// Source location
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    /// String contents with escapes already processed
    String(&'ast str),
    Null,
}

/// A variable reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableExpr<'ast> {
    pub name: Ident<'ast>,
    /// Source location
    pub span: Span,
}

/// An assignment expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    /// Left-hand side (target)
    pub target: &'ast Expr<'ast>,
    /// Right-hand side (value)
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// Object construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpr<'ast> {
    /// Type being constructed
    pub ty: TypeName<'ast>,
    /// Constructor arguments
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A call to a function of the enclosing class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub name: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// An instance method call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodCallExpr<'ast> {
    /// The object the method is called on
    pub receiver: &'ast Expr<'ast>,
    pub name: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A static method call on a named type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCallExpr<'ast> {
    pub ty: TypeName<'ast>,
    pub name: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// An explicit cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastExpr<'ast> {
    /// The target type
    pub target: TypeName<'ast>,
    /// The expression being cast
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A map literal.
///
/// Keys and values are kept as parallel lists in source order; a
/// well-formed tree has one value per key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapInitExpr<'ast> {
    pub keys: &'ast [Expr<'ast>],
    pub values: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A list literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListInitExpr<'ast> {
    pub values: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}
