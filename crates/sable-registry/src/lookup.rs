//! Failed whitelist queries.

use std::fmt;

use sable_core::{CompilationError, Span};
use thiserror::Error;

/// The kind of member a lookup asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constructor,
    Method,
    StaticMethod,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberKind::Constructor => "constructor",
            MemberKind::Method => "method",
            MemberKind::StaticMethod => "static method",
        };
        write!(f, "{}", s)
    }
}

/// A constructor or method absent from the whitelist.
///
/// Carries the canonical owner name and the requested key so the caller can
/// report it at the location of the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} [{type_name}, {name}/{arity}] not found")]
pub struct NotFound {
    pub kind: MemberKind,
    /// Canonical name of the type that was searched.
    pub type_name: String,
    /// Requested member name.
    pub name: String,
    /// Requested parameter count.
    pub arity: usize,
}

impl NotFound {
    /// Convert into the lookup failure that aborts a compilation.
    pub fn into_error(self, span: Span) -> CompilationError {
        CompilationError::lookup_failure(span, self.to_string())
    }
}
