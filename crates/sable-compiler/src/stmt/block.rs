//! Blocks and the reachability rule.

use sable_ast::Block;
use sable_core::CompilationError;

use super::{Flow, Result, StmtCompiler};
use crate::ir::IrStmt;

impl<'a, 'w> StmtCompiler<'a, 'w> {
    /// Lower a block in its own scope frame.
    pub(crate) fn compile_block(&mut self, block: &Block<'_>) -> Result<(IrStmt, Flow)> {
        self.ctx.scope_mut().push_scope();
        let result = self.compile_stmts(block);
        self.ctx.scope_mut().pop_scope();

        let (stmts, flow) = result?;
        Ok((
            IrStmt::Block {
                stmts,
                span: block.span,
            },
            flow,
        ))
    }

    /// Lower the statements of a block in the current frame.
    ///
    /// A statement following one that never completes is rejected.
    pub(crate) fn compile_stmts(&mut self, block: &Block<'_>) -> Result<(Vec<IrStmt>, Flow)> {
        let mut stmts = Vec::with_capacity(block.stmts.len());
        let mut flow = Flow::fallthrough();

        for stmt in block.stmts {
            if flow.escapes {
                return Err(CompilationError::control_flow(
                    stmt.span(),
                    "unreachable statement",
                ));
            }
            let (lowered, stmt_flow) = self.compile(stmt)?;
            stmts.push(lowered);
            flow = Flow {
                returns: stmt_flow.returns,
                escapes: stmt_flow.escapes,
                breaks: flow.breaks || stmt_flow.breaks,
            };
        }

        Ok((stmts, flow))
    }
}
