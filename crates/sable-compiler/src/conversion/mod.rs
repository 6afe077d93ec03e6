//! Cast engine.
//!
//! Decides whether a value of one type may stand where another is expected,
//! and wraps lowered expressions in a cast node when it may. Rules are
//! checked in this order:
//! 1. Identity (no conversion, no wrapper)
//! 2. Anything to `def` (implicit)
//! 3. `def` to a concrete type (explicit, or in compiler-synthesized analysis)
//! 4. Numeric widening (implicit) and narrowing (explicit)
//! 5. Upcast to a supertype (implicit) and downcast (explicit)
//!
//! Everything else fails with a cast error naming both types.

use sable_core::{CompilationError, Span, TypeRef};
use sable_registry::Whitelist;

use crate::context::CompilationContext;
use crate::ir::{IrExpr, IrExprKind};

mod primitive;

pub use primitive::{find_numeric_cast, numeric_promotion};

/// A conversion between two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cast {
    pub from: TypeRef,
    pub to: TypeRef,
    pub kind: CastKind,
}

/// The kind of conversion being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    /// Same type on both sides.
    Identity,
    /// Boxing into the dynamic marker.
    ToDynamic,
    /// Runtime-checked conversion out of the dynamic marker.
    FromDynamic,
    /// Numeric conversion up the promotion order.
    NumericWidening,
    /// Numeric conversion down the promotion order.
    NumericNarrowing,
    /// Reference to one of its supertypes.
    Upcast,
    /// Reference to one of its subtypes, checked at runtime.
    Downcast,
}

impl CastKind {
    /// Whether the conversion may be applied with the given permissions.
    pub fn is_allowed(self, explicit: bool, internal: bool) -> bool {
        match self {
            CastKind::Identity
            | CastKind::ToDynamic
            | CastKind::NumericWidening
            | CastKind::Upcast => true,
            CastKind::FromDynamic => explicit || internal,
            CastKind::NumericNarrowing | CastKind::Downcast => explicit,
        }
    }
}

impl Cast {
    pub fn is_identity(&self) -> bool {
        self.kind == CastKind::Identity
    }
}

/// Classify the conversion from `from` to `to`, ignoring permissions.
pub fn classify_cast(whitelist: &Whitelist, from: TypeRef, to: TypeRef) -> Option<CastKind> {
    if from == to {
        return Some(CastKind::Identity);
    }
    if from.is_void() || to.is_void() {
        return None;
    }
    if to.is_dynamic() {
        return Some(CastKind::ToDynamic);
    }
    if from.is_dynamic() {
        return Some(CastKind::FromDynamic);
    }
    if let Some(kind) = find_numeric_cast(from, to) {
        return Some(kind);
    }
    if from.is_reference() && to.is_reference() {
        if whitelist.is_subtype(from, to) {
            return Some(CastKind::Upcast);
        }
        if whitelist.is_subtype(to, from) {
            return Some(CastKind::Downcast);
        }
    }
    None
}

/// Find a conversion from `from` to `to` that the permissions allow.
pub fn find_cast(
    whitelist: &Whitelist,
    from: TypeRef,
    to: TypeRef,
    explicit: bool,
    internal: bool,
) -> Option<Cast> {
    classify_cast(whitelist, from, to)
        .filter(|kind| kind.is_allowed(explicit, internal))
        .map(|kind| Cast { from, to, kind })
}

/// Convert a lowered expression to `to`.
///
/// Identity conversions return `node` untouched. Otherwise `node` is wrapped
/// in a cast node, or a cast failure is reported at `span`.
pub fn apply_cast(
    ctx: &CompilationContext<'_>,
    node: IrExpr,
    to: TypeRef,
    explicit: bool,
    internal: bool,
    span: Span,
) -> Result<IrExpr, CompilationError> {
    let from = node.ty;
    let Some(cast) = find_cast(ctx.whitelist(), from, to, explicit, internal) else {
        log::debug!(
            "cast from [{}] to [{}] rejected at {}",
            ctx.type_name(from),
            ctx.type_name(to),
            span
        );
        return Err(CompilationError::cast_failure(
            span,
            format!(
                "cannot cast from [{}] to [{}]",
                ctx.type_name(from),
                ctx.type_name(to)
            ),
        ));
    };

    if cast.is_identity() {
        return Ok(node);
    }

    log::trace!(
        "{:?} cast [{}] -> [{}] at {}",
        cast.kind,
        ctx.type_name(from),
        ctx.type_name(to),
        span
    );
    Ok(IrExpr::new(
        IrExprKind::Cast {
            cast,
            expr: Box::new(node),
        },
        to,
        span,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Constant;
    use crate::settings::CompilerSettings;
    use sable_core::{ErrorKind, PrimitiveKind, primitives};

    fn whitelist() -> Whitelist {
        Whitelist::with_base_library().unwrap()
    }

    #[test]
    fn identity_needs_no_permission() {
        let wl = whitelist();
        let cast = find_cast(&wl, TypeRef::string(), TypeRef::string(), false, false).unwrap();
        assert!(cast.is_identity());
    }

    #[test]
    fn anything_boxes_to_dynamic() {
        let wl = whitelist();
        for ty in [TypeRef::int(), TypeRef::bool(), TypeRef::string()] {
            let cast = find_cast(&wl, ty, TypeRef::dynamic(), false, false).unwrap();
            assert_eq!(cast.kind, CastKind::ToDynamic);
        }
    }

    #[test]
    fn dynamic_to_concrete_needs_explicit_or_internal() {
        let wl = whitelist();
        let (def, int) = (TypeRef::dynamic(), TypeRef::int());
        assert!(find_cast(&wl, def, int, false, false).is_none());
        assert_eq!(
            find_cast(&wl, def, int, true, false).unwrap().kind,
            CastKind::FromDynamic
        );
        assert_eq!(
            find_cast(&wl, def, int, false, true).unwrap().kind,
            CastKind::FromDynamic
        );
    }

    #[test]
    fn numeric_narrowing_needs_explicit() {
        let wl = whitelist();
        assert!(find_cast(&wl, TypeRef::int(), TypeRef::long(), false, false).is_some());
        assert!(find_cast(&wl, TypeRef::long(), TypeRef::int(), false, false).is_none());
        assert!(find_cast(&wl, TypeRef::long(), TypeRef::int(), false, true).is_none());

        let cast = find_cast(&wl, TypeRef::long(), TypeRef::int(), true, false).unwrap();
        assert_eq!(cast.kind, CastKind::NumericNarrowing);
    }

    #[test]
    fn upcast_implicit_downcast_explicit() {
        let wl = whitelist();
        let list = TypeRef::new(primitives::ARRAY_LIST);
        let collection = wl.resolve_type("Collection").unwrap();

        assert_eq!(
            find_cast(&wl, list, collection, false, false).unwrap().kind,
            CastKind::Upcast
        );
        assert!(find_cast(&wl, collection, list, false, false).is_none());
        assert_eq!(
            find_cast(&wl, collection, list, true, false).unwrap().kind,
            CastKind::Downcast
        );
    }

    #[test]
    fn unrelated_types_never_convert() {
        let wl = whitelist();
        let map = TypeRef::new(primitives::HASH_MAP);
        assert!(find_cast(&wl, TypeRef::string(), map, true, true).is_none());
        assert!(find_cast(&wl, TypeRef::bool(), TypeRef::int(), true, true).is_none());
        assert!(find_cast(&wl, TypeRef::int(), TypeRef::string(), true, true).is_none());
        assert!(find_cast(&wl, TypeRef::void(), TypeRef::dynamic(), true, true).is_none());
    }

    #[test]
    fn byte_widens_to_short() {
        let wl = whitelist();
        let byte = TypeRef::primitive(PrimitiveKind::Byte);
        let short = TypeRef::primitive(PrimitiveKind::Short);
        assert!(find_cast(&wl, byte, short, false, false).is_some());
    }

    #[test]
    fn apply_elides_identity() {
        let wl = whitelist();
        let ctx = CompilationContext::new(&wl, CompilerSettings::default());
        let node = IrExpr::constant(Constant::Int(1), TypeRef::int(), Span::default());

        let cast = apply_cast(&ctx, node.clone(), TypeRef::int(), false, false, Span::default())
            .unwrap();
        assert_eq!(cast, node);
    }

    #[test]
    fn apply_wraps_widening() {
        let wl = whitelist();
        let ctx = CompilationContext::new(&wl, CompilerSettings::default());
        let node = IrExpr::constant(Constant::Int(1), TypeRef::int(), Span::default());

        let cast = apply_cast(&ctx, node, TypeRef::long(), false, false, Span::default())
            .unwrap();
        assert_eq!(cast.ty, TypeRef::long());
        let IrExprKind::Cast { cast, expr } = cast.kind else {
            panic!("expected cast node");
        };
        assert_eq!(cast.kind, CastKind::NumericWidening);
        assert_eq!(cast.from, TypeRef::int());
        assert_eq!(expr.ty, TypeRef::int());
    }

    #[test]
    fn apply_reports_both_type_names() {
        let wl = whitelist();
        let ctx = CompilationContext::new(&wl, CompilerSettings::default());
        let node = IrExpr::constant(Constant::Bool(true), TypeRef::bool(), Span::default());

        let err = apply_cast(&ctx, node, TypeRef::string(), false, false, Span::new(3, 1, 4))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CastFailure);
        assert_eq!(err.span, Span::new(3, 1, 4));
        assert_eq!(err.message, "cannot cast from [bool] to [String]");
    }
}
