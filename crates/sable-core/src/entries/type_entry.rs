//! Unified type entry for whitelist storage.

use crate::TypeHash;

use super::{ClassEntry, PrimitiveEntry};

/// A whitelisted type: a built-in primitive or a host class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// Built-in type (int, bool, def, etc.).
    Primitive(PrimitiveEntry),
    /// Host class or interface.
    Class(ClassEntry),
}

impl TypeEntry {
    /// Get the type hash for this entry.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(e) => e.type_hash,
            TypeEntry::Class(e) => e.type_hash,
        }
    }

    /// Get the canonical name.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(e) => e.name(),
            TypeEntry::Class(e) => &e.name,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }

    /// Get as a class entry, if this is one.
    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(e) => Some(e),
            TypeEntry::Primitive(_) => None,
        }
    }
}

impl From<PrimitiveEntry> for TypeEntry {
    fn from(entry: PrimitiveEntry) -> Self {
        TypeEntry::Primitive(entry)
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrimitiveKind, primitives};

    #[test]
    fn primitive_entry_accessors() {
        let entry: TypeEntry = PrimitiveEntry::new(PrimitiveKind::Bool).into();
        assert!(entry.is_primitive());
        assert_eq!(entry.name(), "bool");
        assert_eq!(entry.type_hash(), primitives::BOOL);
        assert!(entry.as_class().is_none());
    }

    #[test]
    fn class_entry_accessors() {
        let entry: TypeEntry = ClassEntry::new("String").into();
        assert!(!entry.is_primitive());
        assert_eq!(entry.name(), "String");
        assert_eq!(entry.type_hash(), primitives::STRING);
        assert!(entry.as_class().is_some());
    }
}
