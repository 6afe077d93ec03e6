//! CompilationContext - state shared by every node of one compilation.
//!
//! Holds the read-only whitelist handle, the settings, the class's function
//! table and the scope of the function currently being lowered. A context is
//! created per compilation and never shared between threads.

use sable_ast::TypeName;
use sable_core::{CompilationError, Span, TypeRef};
use sable_registry::Whitelist;

use crate::function_table::{FunctionSignature, FunctionTable};
use crate::scope::LocalScope;
use crate::settings::CompilerSettings;

type Result<T> = std::result::Result<T, CompilationError>;

/// Per-compilation context passed by reference into every analysis.
#[derive(Debug)]
pub struct CompilationContext<'w> {
    whitelist: &'w Whitelist,
    settings: CompilerSettings,
    functions: FunctionTable,
    scope: LocalScope,
}

impl<'w> CompilationContext<'w> {
    pub fn new(whitelist: &'w Whitelist, settings: CompilerSettings) -> Self {
        Self {
            whitelist,
            settings,
            functions: FunctionTable::new(),
            scope: LocalScope::new(),
        }
    }

    #[inline]
    pub fn whitelist(&self) -> &'w Whitelist {
        self.whitelist
    }

    #[inline]
    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    // ==========================================================================
    // Function Table
    // ==========================================================================

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn register_function(
        &mut self,
        signature: FunctionSignature,
        span: Span,
    ) -> Result<()> {
        self.functions.add_function(signature, span)
    }

    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<&FunctionSignature> {
        self.functions.get(name, arity)
    }

    /// Hand the finished table to the class root.
    pub fn into_function_table(self) -> FunctionTable {
        self.functions
    }

    // ==========================================================================
    // Scope
    // ==========================================================================

    /// Start lowering a new function body with a fresh root frame.
    pub fn begin_function(&mut self) {
        self.scope = LocalScope::new();
    }

    pub fn scope(&self) -> &LocalScope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut LocalScope {
        &mut self.scope
    }

    // ==========================================================================
    // Types
    // ==========================================================================

    /// Resolve a type name written in source.
    pub fn resolve_type(&self, name: &TypeName<'_>) -> Result<TypeRef> {
        self.whitelist.resolve_type(name.name).ok_or_else(|| {
            log::debug!("unresolved type [{}] at {}", name.name, name.span);
            CompilationError::lookup_failure(
                name.span,
                format!("cannot resolve type [{}]", name.name),
            )
        })
    }

    /// Canonical name of a resolved type, for diagnostics.
    pub fn type_name(&self, ty: TypeRef) -> &'w str {
        self.whitelist.type_name(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_core::ErrorKind;

    #[test]
    fn resolves_whitelisted_types() {
        let whitelist = Whitelist::with_primitives();
        let ctx = CompilationContext::new(&whitelist, CompilerSettings::default());

        let ty = ctx
            .resolve_type(&TypeName::new("long", Span::default()))
            .unwrap();
        assert_eq!(ty, TypeRef::long());
        assert_eq!(ctx.type_name(ty), "long");
    }

    #[test]
    fn unknown_type_is_a_lookup_failure() {
        let whitelist = Whitelist::with_primitives();
        let ctx = CompilationContext::new(&whitelist, CompilerSettings::default());

        let err = ctx
            .resolve_type(&TypeName::new("Widget", Span::new(4, 2, 6)))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.span, Span::new(4, 2, 6));
        assert_eq!(err.message, "cannot resolve type [Widget]");
    }

    #[test]
    fn begin_function_resets_scope() {
        let whitelist = Whitelist::with_primitives();
        let mut ctx = CompilationContext::new(&whitelist, CompilerSettings::default());
        ctx.scope_mut()
            .declare("x", TypeRef::int(), Span::default())
            .unwrap();

        ctx.begin_function();
        assert!(ctx.scope().get("x").is_none());
    }
}
