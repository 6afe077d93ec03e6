//! Core types shared by every Sable crate.
//!
//! ## Modules
//!
//! - [`span`]: source locations attached to AST and IR nodes
//! - [`type_hash`]: deterministic type and member identity
//! - [`type_ref`]: resolved type references, including the dynamic marker
//! - [`entries`]: whitelist entries (classes, primitives, member signatures)
//! - [`error`]: registration and compilation errors

pub mod entries;
pub mod error;
mod primitive_kind;
pub mod span;
pub mod type_hash;
mod type_ref;

pub use entries::{CONSTRUCTOR_NAME, ClassEntry, MemberSignature, PrimitiveEntry, TypeEntry};
pub use error::{CompilationError, ErrorKind, RegistrationError};
pub use primitive_kind::PrimitiveKind;
pub use span::Span;
pub use type_hash::{TypeHash, hash_constants, primitives};
pub use type_ref::TypeRef;
