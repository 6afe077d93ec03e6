//! Local variable declarations.

use sable_ast::VarDeclStmt;
use sable_core::CompilationError;

use super::{Flow, Result, StmtCompiler};
use crate::analysis::Input;
use crate::ir::IrStmt;

impl<'a, 'w> StmtCompiler<'a, 'w> {
    /// Lower `T name [= init];`.
    ///
    /// The initializer is analyzed before the name is bound, so it cannot
    /// refer to the variable it initializes.
    pub(crate) fn compile_var_decl(&mut self, decl: &VarDeclStmt<'_>) -> Result<(IrStmt, Flow)> {
        let ty = self.ctx.resolve_type(&decl.ty)?;
        let name = decl.name.name;
        if ty.is_void() {
            return Err(CompilationError::contract_violation(
                decl.ty.span,
                format!("cannot declare variable [{name}] of type [void]"),
            ));
        }

        let init = match decl.init {
            Some(init) => Some(
                self.expr_compiler()
                    .analyze_and_cast(init, Input::read(ty))?,
            ),
            None => None,
        };

        let slot = self.ctx.scope_mut().declare(name, ty, decl.name.span)?;
        Ok((
            IrStmt::Declare {
                slot,
                name: name.to_string(),
                ty,
                init,
                span: decl.span,
            },
            Flow::fallthrough(),
        ))
    }
}
