//! Host class entry.

use crate::TypeHash;

/// Registry entry for a host class or interface.
///
/// Members are stored in the whitelist keyed by their member hash; the entry
/// keeps the hashes so the class can be walked without a second index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    /// Canonical name, as reported in diagnostics.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Base class type hash (single inheritance).
    pub base_class: Option<TypeHash>,
    /// Implemented interface type hashes.
    pub interfaces: Vec<TypeHash>,
    /// Whether this type is an interface.
    pub is_interface: bool,
    /// Constructor member hashes.
    pub constructors: Vec<TypeHash>,
    /// Instance and static method member hashes.
    pub methods: Vec<TypeHash>,
}

impl ClassEntry {
    /// Create a new class entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            base_class: None,
            interfaces: Vec::new(),
            is_interface: false,
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create a new interface entry.
    pub fn interface(name: impl Into<String>) -> Self {
        let mut entry = Self::new(name);
        entry.is_interface = true;
        entry
    }

    // === Builder Methods ===

    /// Set the base class.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_class = Some(base);
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Direct supertypes: base class first, then interfaces in order.
    pub fn supertypes(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.base_class
            .into_iter()
            .chain(self.interfaces.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    #[test]
    fn class_entry_builders() {
        let list = TypeHash::from_name("List");
        let entry = ClassEntry::new("ArrayList")
            .with_base(primitives::OBJECT)
            .with_interface(list);

        assert_eq!(entry.type_hash, primitives::ARRAY_LIST);
        assert_eq!(entry.base_class, Some(primitives::OBJECT));
        assert!(!entry.is_interface);
        assert_eq!(
            entry.supertypes().collect::<Vec<_>>(),
            vec![primitives::OBJECT, list]
        );
    }

    #[test]
    fn interface_entry() {
        let entry = ClassEntry::interface("Map");
        assert!(entry.is_interface);
        assert_eq!(entry.supertypes().count(), 0);
    }
}
