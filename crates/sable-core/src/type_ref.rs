//! Resolved type references.
//!
//! A [`TypeRef`] names either a concrete whitelisted type or the dynamic
//! marker `def`. It is a thin wrapper over the type's [`TypeHash`], so it is
//! `Copy` and compared by identity. Canonical names live in the whitelist.

use std::fmt;

use crate::{PrimitiveKind, TypeHash, primitives};

/// A reference to a resolved type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Identity of the referenced type.
    pub type_hash: TypeHash,
}

impl TypeRef {
    /// Create a type reference from a hash.
    #[inline]
    pub const fn new(type_hash: TypeHash) -> Self {
        Self { type_hash }
    }

    /// Reference to a primitive kind.
    #[inline]
    pub const fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.type_hash())
    }

    /// The dynamic marker.
    #[inline]
    pub const fn dynamic() -> Self {
        Self::new(primitives::DEF)
    }

    #[inline]
    pub const fn void() -> Self {
        Self::new(primitives::VOID)
    }

    #[inline]
    pub const fn bool() -> Self {
        Self::new(primitives::BOOL)
    }

    #[inline]
    pub const fn int() -> Self {
        Self::new(primitives::INT)
    }

    #[inline]
    pub const fn long() -> Self {
        Self::new(primitives::LONG)
    }

    #[inline]
    pub const fn double() -> Self {
        Self::new(primitives::DOUBLE)
    }

    /// The host `String` class.
    #[inline]
    pub const fn string() -> Self {
        Self::new(primitives::STRING)
    }

    /// Whether this is the dynamic marker.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.type_hash == primitives::DEF
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.type_hash == primitives::VOID
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        self.type_hash == primitives::BOOL
    }

    /// The primitive kind, if this references a built-in type.
    #[inline]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        PrimitiveKind::from_hash(self.type_hash)
    }

    /// Whether this is a built-in type other than `def`.
    pub fn is_primitive(&self) -> bool {
        matches!(self.primitive_kind(), Some(kind) if kind != PrimitiveKind::Def)
    }

    pub fn is_numeric(&self) -> bool {
        self.primitive_kind().is_some_and(PrimitiveKind::is_numeric)
    }

    /// Whether values of this type are host object references.
    ///
    /// Anything that is not a built-in type is a reference type.
    pub fn is_reference(&self) -> bool {
        self.primitive_kind().is_none()
    }

    /// Whether `null` may stand for a value of this type.
    pub fn is_nullable(&self) -> bool {
        self.is_reference() || self.is_dynamic()
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        Self::primitive(kind)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive_kind() {
            Some(kind) => write!(f, "TypeRef({})", kind.name()),
            None => write!(f, "TypeRef({})", self.type_hash),
        }
    }
}
