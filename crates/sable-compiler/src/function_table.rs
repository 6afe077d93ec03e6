//! Per-class registry of declared function signatures.
//!
//! The table is filled completely by the signature pass before any body is
//! lowered, so a function may call another declared later in the class.
//! Overloads are keyed by name and arity only.

use std::fmt;

use rustc_hash::FxHashMap;
use sable_core::{CompilationError, Span, TypeHash, TypeRef};

/// Resolved signature of a function declared in the class being compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<TypeRef>,
    pub return_type: TypeRef,
    pub is_static: bool,
    /// Synthesized by the front end rather than written by the user.
    pub is_internal: bool,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, params: Vec<TypeRef>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            is_static: false,
            is_internal: false,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_internal(mut self, is_internal: bool) -> Self {
        self.is_internal = is_internal;
        self
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The table key, `name/arity`.
    pub fn key(&self) -> String {
        FunctionTable::local_key(&self.name, self.arity())
    }

    pub fn hash(&self) -> TypeHash {
        TypeHash::from_local_function(&self.name, self.arity())
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity())
    }
}

/// Functions of one class, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    functions: Vec<FunctionSignature>,
    by_key: FxHashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the key a function is stored under.
    pub fn local_key(name: &str, arity: usize) -> String {
        format!("{name}/{arity}")
    }

    /// Register a signature. A second function with the same name and arity
    /// is rejected at `span`.
    pub fn add_function(
        &mut self,
        signature: FunctionSignature,
        span: Span,
    ) -> Result<(), CompilationError> {
        let key = signature.key();
        if self.by_key.contains_key(&key) {
            return Err(CompilationError::duplicate(
                span,
                format!("Illegal duplicate functions [{key}]."),
            ));
        }
        self.by_key.insert(key, self.functions.len());
        self.functions.push(signature);
        Ok(())
    }

    pub fn get(&self, name: &str, arity: usize) -> Option<&FunctionSignature> {
        self.by_key
            .get(&Self::local_key(name, arity))
            .and_then(|&index| self.functions.get(index))
    }

    pub fn contains(&self, name: &str, arity: usize) -> bool {
        self.by_key.contains_key(&Self::local_key(name, arity))
    }

    /// Signatures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
