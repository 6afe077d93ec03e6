//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash computed from a canonical type name, or from
//! an `(owner, name, arity)` member key. Hashes are stable across runs, so the
//! code generator can use them as link keys without a registration order.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// Types, members and local functions sharing a name must not collide.
pub mod hash_constants {
    /// Separator constant mixed between key components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for script-local function hashes.
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for instance method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for static method hashes.
    pub const STATIC_METHOD: u64 = 0x3e9f5d2a8c7b1403;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;
}

/// A deterministic 64-bit hash identifying a type or member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a canonical type name.
    ///
    /// ```
    /// use sable_core::{TypeHash, primitives};
    ///
    /// assert_eq!(TypeHash::from_name("int"), primitives::INT);
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a member hash from its overload identity.
    ///
    /// Overloads are told apart by arity alone, so parameter types do not
    /// participate in the hash.
    #[inline]
    pub fn from_member(owner: TypeHash, name: &str, arity: usize, is_static: bool) -> Self {
        let domain = if is_static {
            hash_constants::STATIC_METHOD
        } else {
            hash_constants::METHOD
        };
        let hash = domain ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        TypeHash(hash.wrapping_mul(hash_constants::SEP).wrapping_add(arity as u64))
    }

    /// Create a constructor hash from owner type and arity.
    #[inline]
    pub fn from_constructor(owner: TypeHash, arity: usize) -> Self {
        let hash = hash_constants::CONSTRUCTOR ^ owner.0;
        TypeHash(hash.wrapping_mul(hash_constants::SEP).wrapping_add(arity as u64))
    }

    /// Create a hash for a script-local function from name and arity.
    #[inline]
    pub fn from_local_function(name: &str, arity: usize) -> Self {
        let hash = hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0);
        TypeHash(hash.wrapping_mul(hash_constants::SEP).wrapping_add(arity as u64))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Well-known constant hashes for the built-in types.
///
/// Pre-computed from `TypeHash::from_name()`.
pub mod primitives {
    use super::TypeHash;

    /// Hash for `void`
    pub const VOID: TypeHash = TypeHash(0xe4b3797ddcf989ea);

    /// Hash for `bool`
    pub const BOOL: TypeHash = TypeHash(0x1e0c8fa4cced99c1);

    /// Hash for `byte` (8-bit signed integer)
    pub const BYTE: TypeHash = TypeHash(0xfbea3524db185ced);

    /// Hash for `short` (16-bit signed integer)
    pub const SHORT: TypeHash = TypeHash(0x8b77a39f7b0d6cd8);

    /// Hash for `int` (32-bit signed integer)
    pub const INT: TypeHash = TypeHash(0x4f5e5320cd1c92bf);

    /// Hash for `long` (64-bit signed integer)
    pub const LONG: TypeHash = TypeHash(0x4c4e14cbc59a4ec9);

    /// Hash for `float`
    pub const FLOAT: TypeHash = TypeHash(0x02d5a2fddaf5bb69);

    /// Hash for `double`
    pub const DOUBLE: TypeHash = TypeHash(0xeb125587f6c2a79b);

    /// Hash for `def`, the dynamic type resolved at runtime.
    pub const DEF: TypeHash = TypeHash(0x9699ce89e13f10d4);

    /// Hash for the host `String` class.
    ///
    /// `String` is a whitelisted class, not a primitive; this constant lets
    /// string literals find it without a name lookup.
    pub const STRING: TypeHash = TypeHash(0xb496d499073b895b);

    /// Hash for the host `Object` class, the root of the class hierarchy.
    pub const OBJECT: TypeHash = TypeHash(0x3b851cdce78e08ca);

    /// Hash for the host `HashMap` class backing map literals.
    pub const HASH_MAP: TypeHash = TypeHash(0x77f31c62baca10da);

    /// Hash for the host `ArrayList` class backing list literals.
    pub const ARRAY_LIST: TypeHash = TypeHash(0x4c2a15bf117792be);
}
