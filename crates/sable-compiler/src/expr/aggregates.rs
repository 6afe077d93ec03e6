//! Map and list literals.
//!
//! A literal lowers to construction of its host collection followed by one
//! insertion per element in source order. The constructor and insertion
//! method are resolved before any element is looked at, so a whitelist
//! without the collection fails without analyzing the elements.

use sable_ast::{Expr, ListInitExpr, MapInitExpr};
use sable_core::{CONSTRUCTOR_NAME, CompilationError, MemberSignature, Span, TypeRef, primitives};
use sable_registry::{MemberKind, NotFound};

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};
use crate::ir::{IrExpr, IrExprKind};

/// Analyze `{k: v, ...}`.
pub fn compile_map_init(
    compiler: &mut ExprCompiler<'_, '_>,
    map: &MapInitExpr<'_>,
    input: Input,
) -> Result<Output> {
    if !input.read {
        return Err(CompilationError::contract_violation(
            map.span,
            "Must read from map initializer.",
        ));
    }

    let ty = TypeRef::new(primitives::HASH_MAP);
    let (constructor, put) = resolve_collection(compiler, ty, "HashMap", "put", 2, map.span)?;

    if map.keys.len() != map.values.len() {
        return Err(CompilationError::structural(
            map.span,
            "Illegal tree structure.",
        ));
    }

    let mut entries = Vec::with_capacity(map.keys.len());
    for (key, value) in map.keys.iter().zip(map.values) {
        let key = compile_element(compiler, key)?;
        let value = compile_element(compiler, value)?;
        entries.push((key, value));
    }

    Ok(Output::new(IrExpr::new(
        IrExprKind::MapInit {
            constructor,
            put,
            entries,
        },
        ty,
        map.span,
    )))
}

/// Analyze `[v, ...]`.
pub fn compile_list_init(
    compiler: &mut ExprCompiler<'_, '_>,
    list: &ListInitExpr<'_>,
    input: Input,
) -> Result<Output> {
    if !input.read {
        return Err(CompilationError::contract_violation(
            list.span,
            "Must read from list initializer.",
        ));
    }

    let ty = TypeRef::new(primitives::ARRAY_LIST);
    let (constructor, add) = resolve_collection(compiler, ty, "ArrayList", "add", 1, list.span)?;

    let values = list
        .values
        .iter()
        .map(|value| compile_element(compiler, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Output::new(IrExpr::new(
        IrExprKind::ListInit {
            constructor,
            add,
            values,
        },
        ty,
        list.span,
    )))
}

/// Resolve the no-argument constructor and the insertion method of a
/// collection type.
fn resolve_collection(
    compiler: &ExprCompiler<'_, '_>,
    ty: TypeRef,
    type_name: &str,
    method: &str,
    arity: usize,
    span: Span,
) -> Result<(MemberSignature, MemberSignature)> {
    let whitelist = compiler.ctx().whitelist();
    if !whitelist.contains(ty) {
        let missing = NotFound {
            kind: MemberKind::Constructor,
            type_name: type_name.to_string(),
            name: CONSTRUCTOR_NAME.to_string(),
            arity: 0,
        };
        return Err(missing.into_error(span));
    }

    let constructor = whitelist
        .resolve_constructor(ty, 0)
        .map_err(|missing| missing.into_error(span))?;
    let insert = whitelist
        .resolve_method(ty, false, method, arity)
        .map_err(|missing| missing.into_error(span))?;
    Ok((constructor.clone(), insert.clone()))
}

/// Elements are boxed to `def` by compiler-synthesized analysis.
fn compile_element(compiler: &mut ExprCompiler<'_, '_>, expr: &Expr<'_>) -> Result<IrExpr> {
    compiler.analyze_and_cast(expr, Input::read(TypeRef::dynamic()).internal())
}
