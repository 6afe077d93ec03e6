//! Literal expression analysis.
//!
//! Literals only produce values. `null` takes the expected type when that
//! type can hold a null reference.

use sable_ast::{LiteralExpr, LiteralKind};
use sable_core::{CompilationError, TypeRef};

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};
use crate::ir::{Constant, IrExpr};

/// Analyze a literal expression.
pub fn compile_literal(
    compiler: &mut ExprCompiler<'_, '_>,
    lit: &LiteralExpr<'_>,
    input: Input,
) -> Result<Output> {
    if !input.read {
        return Err(CompilationError::contract_violation(
            lit.span,
            "must read from constant",
        ));
    }

    let (value, ty) = match lit.kind {
        LiteralKind::Int(v) => (Constant::Int(v), TypeRef::int()),
        LiteralKind::Long(v) => (Constant::Long(v), TypeRef::long()),
        LiteralKind::Double(v) => (Constant::Double(v), TypeRef::double()),
        LiteralKind::Bool(v) => (Constant::Bool(v), TypeRef::bool()),
        LiteralKind::String(v) => (Constant::String(v.to_string()), string_type(compiler, lit)?),
        LiteralKind::Null => (Constant::Null, null_type(compiler, lit, input)?),
    };

    Ok(Output::new(IrExpr::constant(value, ty, lit.span)))
}

fn string_type(compiler: &ExprCompiler<'_, '_>, lit: &LiteralExpr<'_>) -> Result<TypeRef> {
    let string = TypeRef::string();
    if compiler.ctx().whitelist().contains(string) {
        Ok(string)
    } else {
        Err(CompilationError::lookup_failure(
            lit.span,
            "cannot resolve type [String]",
        ))
    }
}

fn null_type(
    compiler: &ExprCompiler<'_, '_>,
    lit: &LiteralExpr<'_>,
    input: Input,
) -> Result<TypeRef> {
    if input.expected.is_nullable() {
        Ok(input.expected)
    } else {
        Err(CompilationError::cast_failure(
            lit.span,
            format!(
                "cannot cast from [null] to [{}]",
                compiler.ctx().type_name(input.expected)
            ),
        ))
    }
}
