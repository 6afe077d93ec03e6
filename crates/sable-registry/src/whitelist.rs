//! Whitelist - the lookup service over host-sanctioned types and members.
//!
//! # Storage Model
//!
//! - **Types**: every `TypeEntry` stored by `TypeHash`, with a name index
//!   for resolving type names written in scripts.
//! - **Members**: constructors and methods stored by member hash, which
//!   encodes `(owner, name, arity)`. Class entries keep the hashes of the
//!   members they declare.
//!
//! # Thread Safety
//!
//! Registration needs `&mut self` and happens once at load time. Afterwards
//! every query takes `&self`, so a finished whitelist can be shared across
//! threads behind an `Arc` with no locking.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use sable_core::{
    ClassEntry, MemberSignature, PrimitiveEntry, PrimitiveKind, RegistrationError, TypeEntry,
    TypeHash, TypeRef, primitives,
};

use crate::lookup::{MemberKind, NotFound};

/// Host types, constructors and methods a script may use.
#[derive(Debug, Default)]
pub struct Whitelist {
    /// Types by hash.
    types: FxHashMap<TypeHash, TypeEntry>,
    /// Canonical name -> hash.
    types_by_name: FxHashMap<String, TypeHash>,
    /// Constructors and methods by member hash.
    members: FxHashMap<TypeHash, MemberSignature>,
}

impl Whitelist {
    /// Create a new empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a whitelist with all primitives pre-registered.
    pub fn with_primitives() -> Self {
        let mut whitelist = Self::new();
        whitelist.register_all_primitives();
        whitelist
    }

    /// Create a whitelist with primitives and the base host library.
    pub fn with_base_library() -> Result<Self, RegistrationError> {
        let mut whitelist = Self::with_primitives();
        crate::install_base_library(&mut whitelist)?;
        Ok(whitelist)
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a primitive type.
    ///
    /// Primitives are always registered (no duplicate check).
    pub fn register_primitive(&mut self, entry: PrimitiveEntry) {
        self.types_by_name
            .insert(entry.name().to_string(), entry.type_hash);
        self.types.insert(entry.type_hash, TypeEntry::Primitive(entry));
    }

    /// Register all primitive types, including the dynamic marker.
    pub fn register_all_primitives(&mut self) {
        for kind in PrimitiveKind::ALL {
            self.register_primitive(PrimitiveEntry::new(kind));
        }
    }

    /// Register a host class or interface.
    ///
    /// The base class and interfaces must already be registered.
    pub fn register_type(&mut self, entry: ClassEntry) -> Result<TypeHash, RegistrationError> {
        if self.types_by_name.contains_key(&entry.name) || self.types.contains_key(&entry.type_hash)
        {
            return Err(RegistrationError::DuplicateType(entry.name));
        }

        for supertype in entry.supertypes() {
            match self.types.get(&supertype) {
                Some(TypeEntry::Class(_)) => {}
                Some(TypeEntry::Primitive(p)) => {
                    return Err(RegistrationError::PrimitiveOwner(p.name().to_string()));
                }
                None => return Err(RegistrationError::TypeNotFound(supertype.to_string())),
            }
        }

        let hash = entry.type_hash;
        self.types_by_name.insert(entry.name.clone(), hash);
        self.types.insert(hash, TypeEntry::Class(entry));
        Ok(hash)
    }

    /// Register a constructor.
    pub fn register_constructor(&mut self, sig: MemberSignature) -> Result<(), RegistrationError> {
        self.register_member(sig)
    }

    /// Register an instance or static method.
    pub fn register_method(&mut self, sig: MemberSignature) -> Result<(), RegistrationError> {
        self.register_member(sig)
    }

    fn register_member(&mut self, sig: MemberSignature) -> Result<(), RegistrationError> {
        let owner_name = self.type_name(sig.owner).to_string();
        let hash = sig.member_hash();

        if self.members.contains_key(&hash) {
            return Err(RegistrationError::DuplicateMember {
                owner: owner_name,
                name: sig.name,
                arity: sig.params.len(),
            });
        }

        let class = match self.types.get_mut(&sig.owner.type_hash) {
            Some(TypeEntry::Class(class)) => class,
            Some(TypeEntry::Primitive(_)) => {
                return Err(RegistrationError::PrimitiveOwner(owner_name));
            }
            None => return Err(RegistrationError::TypeNotFound(owner_name)),
        };

        if sig.is_constructor() {
            class.constructors.push(hash);
        } else {
            class.methods.push(hash);
        }
        self.members.insert(hash, sig);
        Ok(())
    }

    // ==========================================================================
    // Type queries
    // ==========================================================================

    /// Get a type entry by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Get a type entry by canonical name.
    pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.types_by_name
            .get(name)
            .and_then(|hash| self.types.get(hash))
    }

    /// Resolve a type name written in a script.
    pub fn resolve_type(&self, name: &str) -> Option<TypeRef> {
        self.types_by_name.get(name).copied().map(TypeRef::new)
    }

    /// Whether a type is registered.
    pub fn contains(&self, ty: TypeRef) -> bool {
        self.types.contains_key(&ty.type_hash)
    }

    /// Canonical name of a type, as used in diagnostics.
    pub fn type_name(&self, ty: TypeRef) -> &str {
        self.types
            .get(&ty.type_hash)
            .map_or("<unregistered>", TypeEntry::name)
    }

    /// Get the class entry for a type, if it is a host class.
    pub fn class(&self, ty: TypeRef) -> Option<&ClassEntry> {
        self.types.get(&ty.type_hash).and_then(TypeEntry::as_class)
    }

    /// Get the number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get the number of registered constructors and methods.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether a value of `sub` may be used where `sup` is expected without a
    /// runtime check.
    ///
    /// Every registered host type is a subtype of `Object`.
    pub fn is_subtype(&self, sub: TypeRef, sup: TypeRef) -> bool {
        if sub == sup {
            return true;
        }
        self.supertypes_of(sub)
            .any(|candidate| candidate == sup.type_hash)
    }

    /// Breadth-first walk over all transitive supertypes of `ty`, base class
    /// before interfaces. `ty` itself is not yielded. `Object` comes last for
    /// any registered reference type that does not reach it on its own.
    fn supertypes_of(&self, ty: TypeRef) -> impl Iterator<Item = TypeHash> + '_ {
        let mut queue: VecDeque<TypeHash> = VecDeque::new();
        let mut seen: FxHashSet<TypeHash> = FxHashSet::default();
        queue.push_back(ty.type_hash);
        seen.insert(ty.type_hash);
        let mut root_pending = ty.is_reference() && self.contains(ty);

        std::iter::from_fn(move || {
            while let Some(current) = queue.pop_front() {
                if let Some(class) = self.types.get(&current).and_then(TypeEntry::as_class) {
                    for supertype in class.supertypes() {
                        if seen.insert(supertype) {
                            queue.push_back(supertype);
                        }
                    }
                }
                if current != ty.type_hash {
                    return Some(current);
                }
            }
            if root_pending {
                root_pending = false;
                let object = primitives::OBJECT;
                if self.types.contains_key(&object) && seen.insert(object) {
                    return Some(object);
                }
            }
            None
        })
    }

    // ==========================================================================
    // Member lookup
    // ==========================================================================

    /// Resolve a constructor by arity.
    pub fn resolve_constructor(
        &self,
        ty: TypeRef,
        arity: usize,
    ) -> Result<&MemberSignature, NotFound> {
        self.members
            .get(&TypeHash::from_constructor(ty.type_hash, arity))
            .ok_or_else(|| {
                self.not_found(MemberKind::Constructor, ty, sable_core::CONSTRUCTOR_NAME, arity)
            })
    }

    /// Resolve a method by name and arity.
    ///
    /// Static methods are looked up on `ty` alone. Instance methods are looked
    /// up on `ty`, then its base classes and implemented interfaces, nearest
    /// first.
    pub fn resolve_method(
        &self,
        ty: TypeRef,
        is_static: bool,
        name: &str,
        arity: usize,
    ) -> Result<&MemberSignature, NotFound> {
        let lookup = |owner: TypeHash| {
            self.members
                .get(&TypeHash::from_member(owner, name, arity, is_static))
        };

        let found = if is_static {
            lookup(ty.type_hash)
        } else {
            lookup(ty.type_hash).or_else(|| self.supertypes_of(ty).find_map(lookup))
        };

        found.ok_or_else(|| {
            let kind = if is_static {
                MemberKind::StaticMethod
            } else {
                MemberKind::Method
            };
            self.not_found(kind, ty, name, arity)
        })
    }

    fn not_found(&self, kind: MemberKind, ty: TypeRef, name: &str, arity: usize) -> NotFound {
        NotFound {
            kind,
            type_name: self.type_name(ty).to_string(),
            name: name.to_string(),
            arity,
        }
    }
}
