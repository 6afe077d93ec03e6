//! The contract between a node and the analysis that asks for it.
//!
//! Every expression is analyzed with an [`Input`] describing what its parent
//! needs and answers with an [`Output`] carrying the type it actually
//! produces and its lowered IR. Reconciling the two is left to the cast
//! engine.

use sable_core::TypeRef;

use crate::ir::IrExpr;

/// What a parent expects from a child expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    /// Type the parent will convert the result to.
    pub expected: TypeRef,
    /// The parent uses the produced value.
    pub read: bool,
    /// The parent stores into the node.
    pub write: bool,
    /// Explicit conversions are permitted.
    pub explicit: bool,
    /// The analysis was synthesized by the compiler.
    pub internal: bool,
}

impl Input {
    /// A value of `expected` is read.
    pub fn read(expected: TypeRef) -> Self {
        Self {
            expected,
            read: true,
            write: false,
            explicit: false,
            internal: false,
        }
    }

    /// An expression evaluated for its effect only.
    pub fn statement() -> Self {
        Self {
            read: false,
            ..Self::read(TypeRef::void())
        }
    }

    /// A store target.
    pub fn write() -> Self {
        Self {
            read: false,
            write: true,
            ..Self::read(TypeRef::dynamic())
        }
    }

    pub fn explicit(mut self) -> Self {
        self.explicit = true;
        self
    }

    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }
}

/// What a child produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// The type the node naturally produces, before any conversion.
    pub actual: TypeRef,
    /// The lowered node.
    pub node: IrExpr,
}

impl Output {
    pub fn new(node: IrExpr) -> Self {
        Self {
            actual: node.ty,
            node,
        }
    }
}
