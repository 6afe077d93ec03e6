//! Syntax tree for Sable scripts.
//!
//! Nodes borrow from a `bumpalo::Bump` arena and stay valid for its
//! lifetime. Every node carries a [`Span`](sable_core::Span) so diagnostics
//! can point back into the source.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use sable_ast::AstBuilder;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let body = [b.ret(Some(b.int(1)))];
//! let f = b.function("one", "int", &[], &body);
//! let class = b.class("Script", "int one() { return 1; }", &[f]);
//! assert_eq!(class.functions.len(), 1);
//! ```

mod builder;
pub mod decl;
pub mod expr;
mod names;
pub mod ops;
pub mod stmt;

pub use builder::AstBuilder;
pub use decl::*;
pub use expr::*;
pub use names::{Ident, TypeName};
pub use ops::*;
pub use stmt::*;
