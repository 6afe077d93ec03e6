//! Numeric conversions and promotion.
//!
//! Numeric types are ordered `byte < short < int < long < float < double`.
//! Moving up the order widens, moving down narrows.

use sable_core::{PrimitiveKind, TypeRef};

use super::CastKind;

/// Conversion between two numeric types, if both are numeric and differ.
pub fn find_numeric_cast(from: TypeRef, to: TypeRef) -> Option<CastKind> {
    let from_rank = from.primitive_kind().and_then(PrimitiveKind::numeric_rank)?;
    let to_rank = to.primitive_kind().and_then(PrimitiveKind::numeric_rank)?;

    match from_rank.cmp(&to_rank) {
        std::cmp::Ordering::Less => Some(CastKind::NumericWidening),
        std::cmp::Ordering::Greater => Some(CastKind::NumericNarrowing),
        std::cmp::Ordering::Equal => None,
    }
}

/// The wider of two numeric types, or `None` if either is not numeric.
pub fn numeric_promotion(left: TypeRef, right: TypeRef) -> Option<TypeRef> {
    let left_rank = left.primitive_kind().and_then(PrimitiveKind::numeric_rank)?;
    let right_rank = right.primitive_kind().and_then(PrimitiveKind::numeric_rank)?;
    Some(if left_rank >= right_rank { left } else { right })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_and_narrowing() {
        let byte = TypeRef::primitive(PrimitiveKind::Byte);
        assert_eq!(
            find_numeric_cast(byte, TypeRef::int()),
            Some(CastKind::NumericWidening)
        );
        assert_eq!(
            find_numeric_cast(TypeRef::int(), TypeRef::double()),
            Some(CastKind::NumericWidening)
        );
        assert_eq!(
            find_numeric_cast(TypeRef::double(), TypeRef::long()),
            Some(CastKind::NumericNarrowing)
        );
    }

    #[test]
    fn non_numeric_has_no_numeric_cast() {
        assert_eq!(find_numeric_cast(TypeRef::bool(), TypeRef::int()), None);
        assert_eq!(find_numeric_cast(TypeRef::int(), TypeRef::dynamic()), None);
        assert_eq!(find_numeric_cast(TypeRef::int(), TypeRef::int()), None);
    }

    #[test]
    fn promotion_picks_wider() {
        assert_eq!(
            numeric_promotion(TypeRef::int(), TypeRef::long()),
            Some(TypeRef::long())
        );
        assert_eq!(
            numeric_promotion(TypeRef::double(), TypeRef::int()),
            Some(TypeRef::double())
        );
        let float = TypeRef::primitive(PrimitiveKind::Float);
        assert_eq!(numeric_promotion(TypeRef::long(), float), Some(float));
        assert_eq!(numeric_promotion(TypeRef::bool(), TypeRef::int()), None);
    }
}
