//! Sable
//!
//! Semantic analysis and IR lowering for the Sable embeddable scripting
//! language. A parsed class goes in, a typed IR class ready for code
//! generation comes out, or the first error found in the class.
//!
//! ## Crates
//!
//! - [`core`]: spans, type identities, whitelist entries and errors
//! - [`ast`]: the arena-allocated syntax tree and [`AstBuilder`]
//! - [`registry`]: the [`Whitelist`] of host types and members
//! - [`compiler`]: scopes, the cast engine, both passes and the IR
//!
//! ## Example
//!
//! ```
//! use sable::{AstBuilder, Bump, Whitelist};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let body = [b.ret(Some(b.map(&[b.string("a")], &[b.int(1)])))];
//! let class = b.class(
//!     "Script",
//!     "def build() { return {\"a\": 1}; }",
//!     &[b.function("build", "def", &[], &body)],
//! );
//!
//! let whitelist = Whitelist::with_base_library()?;
//! let ir = sable::compile(class, &whitelist)?;
//! assert_eq!(ir.constant(sable::NAME_CONSTANT), Some("Script"));
//! assert!(ir.function("build", 0).is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use sable_ast as ast;
pub use sable_compiler as compiler;
pub use sable_core as core;
pub use sable_registry as registry;

pub use bumpalo::Bump;
pub use sable_ast::{AstBuilder, ClassDecl};
pub use sable_compiler::{
    ClassCompiler, CompilerSettings, IrClass, IrFunction, IrStmt, NAME_CONSTANT, SOURCE_CONSTANT,
};
pub use sable_core::{CompilationError, ErrorKind, RegistrationError, Span, TypeRef};
pub use sable_registry::Whitelist;

/// Compile `class` against `whitelist` with default settings.
///
/// # Errors
///
/// Returns the first [`CompilationError`] found in the class.
pub fn compile(class: &ClassDecl<'_>, whitelist: &Whitelist) -> Result<IrClass, CompilationError> {
    compile_with_settings(class, whitelist, CompilerSettings::default())
}

/// Compile `class` against `whitelist` with explicit settings.
///
/// # Errors
///
/// Returns the first [`CompilationError`] found in the class.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_with_settings(
    class: &ClassDecl<'_>,
    whitelist: &Whitelist,
    settings: CompilerSettings,
) -> Result<IrClass, CompilationError> {
    sable_compiler::compile_class(class, whitelist, settings)
}
