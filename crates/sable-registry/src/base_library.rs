//! The base host library.
//!
//! A small set of host classes most embeddings expose: the `Object` root,
//! `String`, the collection interfaces and their `ArrayList`/`HashMap`
//! implementations that back list and map literals, and static `Math`
//! helpers.

use sable_core::{ClassEntry, MemberSignature, RegistrationError, TypeHash, TypeRef, primitives};

use crate::Whitelist;

/// Register the base host library into `whitelist`.
///
/// Primitives must already be registered.
pub fn install_base_library(whitelist: &mut Whitelist) -> Result<(), RegistrationError> {
    let def = TypeRef::dynamic();
    let int = TypeRef::int();
    let boolean = TypeRef::bool();
    let double = TypeRef::double();
    let void = TypeRef::void();
    let string = TypeRef::string();

    // Object
    let object = whitelist.register_type(ClassEntry::new("Object"))?;
    let mut b = Members::new(whitelist, object);
    b.constructor(&[])?;
    b.method("equals", &[def], boolean)?;
    b.method("hashCode", &[], int)?;
    b.method("toString", &[], string)?;

    // String
    let string_hash = whitelist.register_type(ClassEntry::new("String").with_base(object))?;
    let mut b = Members::new(whitelist, string_hash);
    b.constructor(&[])?;
    b.method("length", &[], int)?;
    b.method("isEmpty", &[], boolean)?;
    b.method("contains", &[string], boolean)?;
    b.method("startsWith", &[string], boolean)?;
    b.method("endsWith", &[string], boolean)?;
    b.method("indexOf", &[string], int)?;
    b.method("concat", &[string], string)?;
    b.method("substring", &[int], string)?;
    b.method("substring", &[int, int], string)?;
    b.method("toLowerCase", &[], string)?;
    b.method("toUpperCase", &[], string)?;
    b.method("trim", &[], string)?;
    b.static_method("valueOf", &[def], string)?;

    // Collection
    let collection = whitelist.register_type(ClassEntry::interface("Collection"))?;
    let mut b = Members::new(whitelist, collection);
    b.method("add", &[def], boolean)?;
    b.method("contains", &[def], boolean)?;
    b.method("isEmpty", &[], boolean)?;
    b.method("size", &[], int)?;
    b.method("clear", &[], void)?;

    // List
    let list =
        whitelist.register_type(ClassEntry::interface("List").with_interface(collection))?;
    let mut b = Members::new(whitelist, list);
    b.method("add", &[int, def], void)?;
    b.method("get", &[int], def)?;
    b.method("set", &[int, def], def)?;
    b.method("remove", &[int], def)?;
    b.method("indexOf", &[def], int)?;

    // ArrayList
    let array_list = whitelist.register_type(
        ClassEntry::new("ArrayList")
            .with_base(object)
            .with_interface(list),
    )?;
    debug_assert_eq!(array_list, primitives::ARRAY_LIST);
    let mut b = Members::new(whitelist, array_list);
    b.constructor(&[])?;
    b.constructor(&[int])?;

    // Map
    let map = whitelist.register_type(ClassEntry::interface("Map"))?;
    let mut b = Members::new(whitelist, map);
    b.method("put", &[def, def], def)?;
    b.method("get", &[def], def)?;
    b.method("getOrDefault", &[def, def], def)?;
    b.method("containsKey", &[def], boolean)?;
    b.method("remove", &[def], def)?;
    b.method("isEmpty", &[], boolean)?;
    b.method("size", &[], int)?;
    b.method("clear", &[], void)?;

    // HashMap
    let hash_map = whitelist.register_type(
        ClassEntry::new("HashMap")
            .with_base(object)
            .with_interface(map),
    )?;
    debug_assert_eq!(hash_map, primitives::HASH_MAP);
    let mut b = Members::new(whitelist, hash_map);
    b.constructor(&[])?;
    b.constructor(&[int])?;

    // Math
    let math = whitelist.register_type(ClassEntry::new("Math").with_base(object))?;
    let mut b = Members::new(whitelist, math);
    b.static_method("abs", &[double], double)?;
    b.static_method("sqrt", &[double], double)?;
    b.static_method("floor", &[double], double)?;
    b.static_method("ceil", &[double], double)?;
    b.static_method("max", &[double, double], double)?;
    b.static_method("min", &[double, double], double)?;
    b.static_method("pow", &[double, double], double)?;

    Ok(())
}

/// Registers members of one owner type.
struct Members<'w> {
    whitelist: &'w mut Whitelist,
    owner: TypeHash,
}

impl<'w> Members<'w> {
    fn new(whitelist: &'w mut Whitelist, owner: TypeHash) -> Self {
        Self { whitelist, owner }
    }

    fn constructor(&mut self, params: &[TypeRef]) -> Result<(), RegistrationError> {
        self.whitelist
            .register_constructor(MemberSignature::constructor(self.owner, params.to_vec()))
    }

    fn method(
        &mut self,
        name: &str,
        params: &[TypeRef],
        ret: TypeRef,
    ) -> Result<(), RegistrationError> {
        self.whitelist.register_method(MemberSignature::method(
            self.owner,
            name,
            params.to_vec(),
            ret,
        ))
    }

    fn static_method(
        &mut self,
        name: &str,
        params: &[TypeRef],
        ret: TypeRef,
    ) -> Result<(), RegistrationError> {
        self.whitelist.register_method(MemberSignature::static_method(
            self.owner,
            name,
            params.to_vec(),
            ret,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_library_installs() {
        let whitelist = Whitelist::with_base_library().unwrap();
        for name in [
            "Object",
            "String",
            "Collection",
            "List",
            "ArrayList",
            "Map",
            "HashMap",
            "Math",
        ] {
            assert!(whitelist.resolve_type(name).is_some(), "missing {name}");
        }
        assert_eq!(whitelist.resolve_type("String"), Some(TypeRef::string()));
    }

    #[test]
    fn base_library_installs_once() {
        let mut whitelist = Whitelist::with_base_library().unwrap();
        let err = install_base_library(&mut whitelist).unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateType("Object".to_string()));
    }

    #[test]
    fn aggregate_members_resolve() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let map = TypeRef::new(primitives::HASH_MAP);
        let list = TypeRef::new(primitives::ARRAY_LIST);

        assert!(whitelist.resolve_constructor(map, 0).is_ok());
        assert!(whitelist.resolve_constructor(list, 0).is_ok());

        let put = whitelist.resolve_method(map, false, "put", 2).unwrap();
        assert_eq!(put.owner, whitelist.resolve_type("Map").unwrap());

        let add = whitelist.resolve_method(list, false, "add", 1).unwrap();
        assert_eq!(add.owner, whitelist.resolve_type("Collection").unwrap());
        assert_eq!(add.return_type, TypeRef::bool());
    }

    #[test]
    fn overloads_by_arity() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let string = TypeRef::string();
        let one = whitelist.resolve_method(string, false, "substring", 1).unwrap();
        let two = whitelist.resolve_method(string, false, "substring", 2).unwrap();
        assert_eq!(one.arity(), 1);
        assert_eq!(two.arity(), 2);
    }

    #[test]
    fn collections_are_subtypes_of_their_interfaces() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let list = TypeRef::new(primitives::ARRAY_LIST);
        let collection = whitelist.resolve_type("Collection").unwrap();
        let map = whitelist.resolve_type("Map").unwrap();

        assert!(whitelist.is_subtype(list, collection));
        assert!(!whitelist.is_subtype(list, map));
        assert!(whitelist.is_subtype(TypeRef::new(primitives::HASH_MAP), map));
    }

    #[test]
    fn interface_receivers_reach_object_members() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let map = whitelist.resolve_type("Map").unwrap();
        let object = whitelist.resolve_type("Object").unwrap();

        let hash_code = whitelist.resolve_method(map, false, "hashCode", 0).unwrap();
        assert_eq!(hash_code.owner, object);
        assert!(whitelist.is_subtype(map, object));
    }

    #[test]
    fn math_is_static_only() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let math = whitelist.resolve_type("Math").unwrap();
        assert!(whitelist.resolve_method(math, true, "max", 2).is_ok());
        assert!(whitelist.resolve_method(math, false, "max", 2).is_err());
    }
}
