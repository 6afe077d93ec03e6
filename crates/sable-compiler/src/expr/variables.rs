//! Local variable reads and assignments.

use sable_ast::{AssignExpr, VariableExpr};
use sable_core::{CompilationError, TypeRef};

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};
use crate::ir::{IrExpr, IrExprKind};

/// Analyze a variable reference, as a value or as a store target.
pub fn compile_variable(
    compiler: &mut ExprCompiler<'_, '_>,
    var: &VariableExpr<'_>,
    input: Input,
) -> Result<Output> {
    let name = var.name.name;
    let Some(local) = compiler.ctx().scope().get(name) else {
        return Err(CompilationError::lookup_failure(
            var.span,
            format!("variable [{name}] is not defined"),
        ));
    };

    if !input.read && !input.write {
        return Err(CompilationError::contract_violation(
            var.span,
            format!("not a statement: result not used from variable [{name}]"),
        ));
    }

    let node = IrExpr::new(
        IrExprKind::Local {
            slot: local.slot,
            name: local.name.clone(),
        },
        local.ty,
        var.span,
    );
    Ok(Output::new(node))
}

/// Analyze an assignment to a local.
///
/// The value is converted to the variable's type. When the assignment is
/// read, it produces the stored value.
pub fn compile_assign(
    compiler: &mut ExprCompiler<'_, '_>,
    assign: &AssignExpr<'_>,
    input: Input,
) -> Result<Output> {
    let target = compiler.analyze(assign.target, Input::write())?;
    let IrExprKind::Local { slot, name } = target.node.kind else {
        return Err(CompilationError::structural(
            assign.target.span(),
            "Illegal tree structure.",
        ));
    };

    let value = compiler.analyze_and_cast(assign.value, Input::read(target.actual))?;
    let ty = if input.read {
        target.actual
    } else {
        TypeRef::void()
    };

    Ok(Output::new(IrExpr::new(
        IrExprKind::Store {
            slot,
            name,
            value: Box::new(value),
            read: input.read,
        },
        ty,
        assign.span,
    )))
}
