//! Binary and unary operators.
//!
//! Operands are analyzed for their natural types first. The operator then
//! picks the type both operands are converted to and the type it produces:
//!
//! | Operator        | Operands                     | Result         |
//! |-----------------|------------------------------|----------------|
//! | `+ - * / %`     | numeric (promoted), or any   | operand type   |
//! |                 | non-void type beside `def`   |                |
//! | `< <= > >=`     | same as arithmetic           | `bool`         |
//! | `== !=`         | same type, numeric, related  | `bool`         |
//! |                 | references, or `def`         |                |
//! | `&& \|\|`       | `bool` or `def`              | `bool`         |

use sable_ast::{BinaryExpr, BinaryOp, UnaryExpr, UnaryOp};
use sable_core::{CompilationError, TypeRef};
use sable_registry::Whitelist;

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};
use crate::conversion::{apply_cast, numeric_promotion};
use crate::ir::{IrExpr, IrExprKind};

/// Analyze a binary operation.
pub fn compile_binary(
    compiler: &mut ExprCompiler<'_, '_>,
    bin: &BinaryExpr<'_>,
    input: Input,
) -> Result<Output> {
    if !input.read {
        return Err(CompilationError::contract_violation(
            bin.span,
            format!("not a statement: result not used from [{}] operation", bin.op),
        ));
    }

    let left = compiler.analyze(bin.left, Input::read(TypeRef::dynamic()))?;
    let right = compiler.analyze(bin.right, Input::read(TypeRef::dynamic()))?;

    let ctx = compiler.ctx();
    let Some((operand_ty, result_ty)) =
        binary_types(ctx.whitelist(), bin.op, left.actual, right.actual)
    else {
        return Err(CompilationError::cast_failure(
            bin.span,
            format!(
                "cannot apply [{}] to types [{}] and [{}]",
                bin.op,
                ctx.type_name(left.actual),
                ctx.type_name(right.actual)
            ),
        ));
    };

    let left = apply_cast(ctx, left.node, operand_ty, false, true, bin.left.span())?;
    let right = apply_cast(ctx, right.node, operand_ty, false, true, bin.right.span())?;

    Ok(Output::new(IrExpr::new(
        IrExprKind::Binary {
            op: bin.op,
            operand_ty,
            left: Box::new(left),
            right: Box::new(right),
        },
        result_ty,
        bin.span,
    )))
}

/// Operand and result types of `op`, or `None` if the operator does not
/// apply.
fn binary_types(
    whitelist: &Whitelist,
    op: BinaryOp,
    left: TypeRef,
    right: TypeRef,
) -> Option<(TypeRef, TypeRef)> {
    if left.is_void() || right.is_void() {
        return None;
    }
    let dynamic = left.is_dynamic() || right.is_dynamic();

    if op.is_logical() {
        let accepts = |ty: TypeRef| ty.is_bool() || ty.is_dynamic();
        return (accepts(left) && accepts(right)).then_some((TypeRef::bool(), TypeRef::bool()));
    }

    if op.is_arithmetic() || op.is_relational() {
        let operand = if dynamic {
            TypeRef::dynamic()
        } else {
            numeric_promotion(left, right)?
        };
        let result = if op.is_relational() {
            TypeRef::bool()
        } else {
            operand
        };
        return Some((operand, result));
    }

    // Equality
    let operand = if dynamic {
        TypeRef::dynamic()
    } else if left == right {
        left
    } else if let Some(promoted) = numeric_promotion(left, right) {
        promoted
    } else if left.is_reference() && right.is_reference() {
        if whitelist.is_subtype(left, right) {
            right
        } else if whitelist.is_subtype(right, left) {
            left
        } else {
            return None;
        }
    } else {
        return None;
    };
    Some((operand, TypeRef::bool()))
}

/// Analyze a unary operation.
pub fn compile_unary(
    compiler: &mut ExprCompiler<'_, '_>,
    un: &UnaryExpr<'_>,
    input: Input,
) -> Result<Output> {
    if !input.read {
        return Err(CompilationError::contract_violation(
            un.span,
            format!("not a statement: result not used from [{}] operation", un.op),
        ));
    }

    let operand = compiler.analyze(un.operand, Input::read(TypeRef::dynamic()))?;
    let actual = operand.actual;

    let target = match un.op {
        UnaryOp::Neg if actual.is_numeric() || actual.is_dynamic() => Some(actual),
        UnaryOp::LogicalNot if actual.is_bool() || actual.is_dynamic() => Some(TypeRef::bool()),
        _ => None,
    };
    let ctx = compiler.ctx();
    let Some(ty) = target else {
        return Err(CompilationError::cast_failure(
            un.span,
            format!(
                "cannot apply [{}] to type [{}]",
                un.op,
                ctx.type_name(actual)
            ),
        ));
    };

    let operand = apply_cast(ctx, operand.node, ty, false, true, un.operand.span())?;
    Ok(Output::new(IrExpr::new(
        IrExprKind::Unary {
            op: un.op,
            operand: Box::new(operand),
        },
        ty,
        un.span,
    )))
}
