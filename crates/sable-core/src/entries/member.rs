//! Whitelisted member signatures.

use crate::{TypeHash, TypeRef};

/// Conventional name every constructor is registered under.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// A constructor or method the host exposes to scripts.
///
/// Overload identity is `(owner, name, arity)`: two members with the same
/// owner and name must differ in parameter count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSignature {
    /// Type declaring the member.
    pub owner: TypeRef,
    /// Member name; [`CONSTRUCTOR_NAME`] for constructors.
    pub name: String,
    /// Parameter types in declaration order.
    pub params: Vec<TypeRef>,
    /// Produced type; the owner for constructors.
    pub return_type: TypeRef,
    /// Whether the member is called without a receiver.
    pub is_static: bool,
}

impl MemberSignature {
    /// A constructor of `owner`.
    pub fn constructor(owner: TypeHash, params: Vec<TypeRef>) -> Self {
        Self {
            owner: TypeRef::new(owner),
            name: CONSTRUCTOR_NAME.to_string(),
            params,
            return_type: TypeRef::new(owner),
            is_static: false,
        }
    }

    /// An instance method of `owner`.
    pub fn method(
        owner: TypeHash,
        name: impl Into<String>,
        params: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        Self {
            owner: TypeRef::new(owner),
            name: name.into(),
            params,
            return_type,
            is_static: false,
        }
    }

    /// A static method of `owner`.
    pub fn static_method(
        owner: TypeHash,
        name: impl Into<String>,
        params: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        Self {
            is_static: true,
            ..Self::method(owner, name, params, return_type)
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Key under which this member is stored and resolved.
    pub fn member_hash(&self) -> TypeHash {
        if self.is_constructor() {
            TypeHash::from_constructor(self.owner.type_hash, self.arity())
        } else {
            TypeHash::from_member(self.owner.type_hash, &self.name, self.arity(), self.is_static)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    #[test]
    fn constructor_signature() {
        let ctor = MemberSignature::constructor(primitives::HASH_MAP, vec![]);
        assert!(ctor.is_constructor());
        assert_eq!(ctor.name, "<init>");
        assert_eq!(ctor.return_type, TypeRef::new(primitives::HASH_MAP));
        assert_eq!(
            ctor.member_hash(),
            TypeHash::from_constructor(primitives::HASH_MAP, 0)
        );
    }

    #[test]
    fn method_signature_key() {
        let put = MemberSignature::method(
            primitives::HASH_MAP,
            "put",
            vec![TypeRef::dynamic(), TypeRef::dynamic()],
            TypeRef::dynamic(),
        );
        assert_eq!(put.arity(), 2);
        assert!(!put.is_static);
        assert_eq!(
            put.member_hash(),
            TypeHash::from_member(primitives::HASH_MAP, "put", 2, false)
        );
    }

    #[test]
    fn static_method_signature() {
        let math = TypeHash::from_name("Math");
        let max = MemberSignature::static_method(
            math,
            "max",
            vec![TypeRef::double(), TypeRef::double()],
            TypeRef::double(),
        );
        assert!(max.is_static);
        assert_eq!(max.member_hash(), TypeHash::from_member(math, "max", 2, true));
    }
}
