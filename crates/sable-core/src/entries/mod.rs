//! Whitelist entry types.
//!
//! - [`TypeEntry`] - Unified enum wrapping all type entries
//! - [`ClassEntry`] - Host classes and interfaces
//! - [`PrimitiveEntry`] - Built-in primitive types
//! - [`MemberSignature`] - Constructors and methods

mod class;
mod member;
mod primitive;
mod type_entry;

pub use class::ClassEntry;
pub use member::{CONSTRUCTOR_NAME, MemberSignature};
pub use primitive::PrimitiveEntry;
pub use type_entry::TypeEntry;
