//! Declaration AST nodes: functions and the class that owns them.

use crate::stmt::Block;
use crate::{Ident, TypeName};
use sable_core::Span;

/// A function parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    pub ty: TypeName<'ast>,
    pub name: Ident<'ast>,
    /// Source location
    pub span: Span,
}

/// A function declared in a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDecl<'ast> {
    pub name: Ident<'ast>,
    pub return_type: TypeName<'ast>,
    pub params: &'ast [Param<'ast>],
    pub body: Block<'ast>,
    /// Callable without an instance
    pub is_static: bool,
    /// Synthesized by the compiler front end rather than written by the user
    pub is_internal: bool,
    /// Source location
    pub span: Span,
}

impl FunctionDecl<'_> {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// The root of one compilation unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDecl<'ast> {
    /// Class name
    pub name: &'ast str,
    /// Full source text the class was parsed from
    pub source: &'ast str,
    /// Functions in declaration order
    pub functions: &'ast [FunctionDecl<'ast>],
    /// Source location
    pub span: Span,
}
