//! Names appearing in the tree.

use sable_core::Span;

/// An identifier with its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}

/// A type as written in source, resolved later against the whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

impl<'ast> TypeName<'ast> {
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}
