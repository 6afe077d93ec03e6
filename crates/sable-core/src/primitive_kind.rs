//! Built-in primitive types.

use std::fmt;

use crate::TypeHash;

/// The built-in types every whitelist carries.
///
/// `Def` is the dynamic marker: a value whose concrete type is only known
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Def,
}

impl PrimitiveKind {
    /// Every primitive kind, in registration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Void,
        PrimitiveKind::Bool,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Def,
    ];

    /// Get the TypeHash for this primitive type.
    pub const fn type_hash(self) -> TypeHash {
        use crate::primitives;
        match self {
            PrimitiveKind::Void => primitives::VOID,
            PrimitiveKind::Bool => primitives::BOOL,
            PrimitiveKind::Byte => primitives::BYTE,
            PrimitiveKind::Short => primitives::SHORT,
            PrimitiveKind::Int => primitives::INT,
            PrimitiveKind::Long => primitives::LONG,
            PrimitiveKind::Float => primitives::FLOAT,
            PrimitiveKind::Double => primitives::DOUBLE,
            PrimitiveKind::Def => primitives::DEF,
        }
    }

    /// Get the name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Def => "def",
        }
    }

    /// Look up the primitive kind for a type hash.
    pub fn from_hash(hash: TypeHash) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_hash() == hash)
    }

    /// Position in the numeric promotion order, or `None` for non-numerics.
    ///
    /// `byte < short < int < long < float < double`
    pub const fn numeric_rank(self) -> Option<u8> {
        match self {
            PrimitiveKind::Byte => Some(0),
            PrimitiveKind::Short => Some(1),
            PrimitiveKind::Int => Some(2),
            PrimitiveKind::Long => Some(3),
            PrimitiveKind::Float => Some(4),
            PrimitiveKind::Double => Some(5),
            _ => None,
        }
    }

    /// Whether this is one of the numeric types.
    pub const fn is_numeric(self) -> bool {
        self.numeric_rank().is_some()
    }

    /// Whether this is an integral numeric type.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_hash_to_constants() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(TypeHash::from_name(kind.name()), kind.type_hash());
        }
    }

    #[test]
    fn from_hash_roundtrip() {
        assert_eq!(
            PrimitiveKind::from_hash(crate::primitives::LONG),
            Some(PrimitiveKind::Long)
        );
        assert_eq!(PrimitiveKind::from_hash(crate::primitives::STRING), None);
    }

    #[test]
    fn numeric_order() {
        assert!(PrimitiveKind::Byte.numeric_rank() < PrimitiveKind::Short.numeric_rank());
        assert!(PrimitiveKind::Long.numeric_rank() < PrimitiveKind::Float.numeric_rank());
        assert!(PrimitiveKind::Float.numeric_rank() < PrimitiveKind::Double.numeric_rank());
        assert!(!PrimitiveKind::Bool.is_numeric());
        assert!(!PrimitiveKind::Def.is_numeric());
    }

    #[test]
    fn integral_kinds() {
        assert!(PrimitiveKind::Int.is_integral());
        assert!(!PrimitiveKind::Double.is_integral());
    }
}
