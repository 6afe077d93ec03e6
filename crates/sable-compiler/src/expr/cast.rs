//! Explicit cast expressions.

use sable_ast::CastExpr;
use sable_core::CompilationError;

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};

/// Analyze `(T) expr`.
///
/// The operand is analyzed against `T` with explicit conversions allowed, so
/// narrowing, downcasts and conversions out of `def` all succeed here.
pub fn compile_cast(
    compiler: &mut ExprCompiler<'_, '_>,
    cast: &CastExpr<'_>,
    input: Input,
) -> Result<Output> {
    let target = compiler.ctx().resolve_type(&cast.target)?;
    if !input.read {
        return Err(CompilationError::contract_violation(
            cast.span,
            format!(
                "not a statement: result not used from cast to [{}]",
                compiler.ctx().type_name(target)
            ),
        ));
    }

    let operand = Input {
        internal: input.internal,
        ..Input::read(target).explicit()
    };
    let mut node = compiler.analyze_and_cast(cast.expr, operand)?;
    node.span = cast.span;
    Ok(Output::new(node))
}
