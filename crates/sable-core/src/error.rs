//! Error types for whitelist construction and compilation.
//!
//! ```text
//! RegistrationError  - whitelist load-time failures
//! CompilationError   - the single diagnostic of a failed compilation
//! ```
//!
//! Compilation is fail-fast: the first [`CompilationError`] aborts the unit
//! and is propagated unchanged with `?` to the caller.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Compilation Errors
// ============================================================================

/// Categories of compilation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An expression is used where its read/write capability does not fit.
    ContractViolation,
    /// A type, member, variable or function is not available.
    LookupFailure,
    /// The tree handed to analysis breaks a structural invariant.
    StructuralInconsistency,
    /// A name is declared twice where it must be unique.
    DuplicateDeclaration,
    /// No legal conversion exists between two types.
    CastFailure,
    /// Missing return, unreachable statement, or loop jump outside a loop.
    ControlFlow,
}

impl ErrorKind {
    /// Returns a human-readable name for this error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ContractViolation => "contract violation",
            ErrorKind::LookupFailure => "lookup failure",
            ErrorKind::StructuralInconsistency => "structural inconsistency",
            ErrorKind::DuplicateDeclaration => "duplicate declaration",
            ErrorKind::CastFailure => "cast failure",
            ErrorKind::ControlFlow => "control flow",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A location-tagged compilation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct CompilationError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Location of the offending node.
    pub span: Span,
    /// Human-readable description.
    pub message: String,
}

impl CompilationError {
    /// Create a new compilation error.
    pub fn new(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn contract_violation(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContractViolation, span, message)
    }

    pub fn lookup_failure(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LookupFailure, span, message)
    }

    pub fn structural(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StructuralInconsistency, span, message)
    }

    pub fn duplicate(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateDeclaration, span, message)
    }

    pub fn cast_failure(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CastFailure, span, message)
    }

    pub fn control_flow(span: Span, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ControlFlow, span, message)
    }

    /// Format the error with the offending source line and a caret.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = format!("Error at {}: {}\n", self.span, self.kind);
        if !self.message.is_empty() {
            output.push_str(&format!("  {}\n", self.message));
        }

        let mut offset = (self.span.offset as usize).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);

        if let Some(line_text) = source.get(line_start..line_end) {
            let column = source[line_start..offset].chars().count();
            let pointer = if self.span.len <= 1 {
                "^".to_string()
            } else {
                "^".to_string() + &"~".repeat((self.span.len - 1) as usize)
            };
            output.push_str("  |\n");
            output.push_str(&format!("{:>3} | {}\n", self.span.line, line_text));
            output.push_str(&format!("  | {}{}\n", " ".repeat(column), pointer));
        }

        output
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while building a whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A referenced type was not found.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A member with this overload key already exists.
    #[error("duplicate member: [{owner}, {name}/{arity}] is already registered")]
    DuplicateMember {
        /// Canonical name of the owning type.
        owner: String,
        /// Member name.
        name: String,
        /// Parameter count.
        arity: usize,
    },

    /// Members can only be attached to host classes.
    #[error("type '{0}' is a primitive and cannot declare members")]
    PrimitiveOwner(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_error_display() {
        let err = CompilationError::lookup_failure(
            Span::new(2, 14, 3),
            "method [HashMap, put/3] not found",
        );
        assert_eq!(
            err.to_string(),
            "lookup failure at 2:14: method [HashMap, put/3] not found"
        );
    }

    #[test]
    fn error_kinds_are_distinct() {
        let a = CompilationError::cast_failure(Span::default(), "x");
        let b = CompilationError::contract_violation(Span::default(), "x");
        assert_eq!(a.kind, ErrorKind::CastFailure);
        assert_eq!(b.kind, ErrorKind::ContractViolation);
        assert_ne!(a, b);
    }

    #[test]
    fn display_with_source_points_at_offset() {
        let source = "int f() {\n  return x;\n}";
        let err = CompilationError::lookup_failure(Span::new(2, 19, 1), "variable [x] is not defined");
        let rendered = err.display_with_source(source);

        assert!(rendered.contains("Error at 2:19: lookup failure"));
        assert!(rendered.contains("  2 |   return x;"));
        assert!(rendered.contains("  |          ^"));
    }

    #[test]
    fn display_with_source_inside_multibyte_char() {
        let err = CompilationError::lookup_failure(Span::new(1, 1, 1), "variable [é] is not defined");
        let rendered = err.display_with_source("é = 1;");

        assert!(rendered.contains("  1 | é = 1;"));
        assert!(rendered.contains("  | ^\n"));
    }

    #[test]
    fn registration_error_display() {
        let err = RegistrationError::DuplicateMember {
            owner: "HashMap".to_string(),
            name: "put".to_string(),
            arity: 2,
        };
        assert_eq!(
            err.to_string(),
            "duplicate member: [HashMap, put/2] is already registered"
        );
    }
}
