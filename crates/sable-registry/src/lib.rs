//! Sable whitelist.
//!
//! The whitelist is the compiler's only view of the host: every type a
//! script names and every constructor or method it calls must be registered
//! here first. It is built once at load time and then shared read-only by
//! any number of concurrent compilations.
//!
//! ```
//! use sable_registry::Whitelist;
//!
//! let whitelist = Whitelist::with_base_library().unwrap();
//! let map = whitelist.resolve_type("HashMap").unwrap();
//! assert!(whitelist.resolve_method(map, false, "put", 2).is_ok());
//! assert!(whitelist.resolve_method(map, false, "put", 3).is_err());
//! ```

mod base_library;
mod lookup;
mod whitelist;

pub use base_library::install_base_library;
pub use lookup::{MemberKind, NotFound};
pub use whitelist::Whitelist;
