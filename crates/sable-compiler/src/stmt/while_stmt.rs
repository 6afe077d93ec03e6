//! While loops, break and continue.

use sable_ast::{BreakStmt, ContinueStmt, Expr, LiteralKind, WhileStmt};
use sable_core::{CompilationError, TypeRef};

use super::{Flow, Result, StmtCompiler};
use crate::analysis::Input;
use crate::ir::IrStmt;

impl<'a, 'w> StmtCompiler<'a, 'w> {
    /// Lower `while (cond) body`.
    ///
    /// A loop whose condition is the literal `true` and whose body never
    /// breaks leaves the function only through `return`, so it counts as
    /// returning on every path.
    pub(crate) fn compile_while(&mut self, while_stmt: &WhileStmt<'_>) -> Result<(IrStmt, Flow)> {
        let condition = self
            .expr_compiler()
            .analyze_and_cast(while_stmt.condition, Input::read(TypeRef::bool()))?;

        self.loop_depth += 1;
        let body = self.compile_branch(while_stmt.body);
        self.loop_depth -= 1;
        let (body, body_flow) = body?;

        let infinite = is_constant_true(while_stmt.condition);
        let exits = infinite && !body_flow.breaks;
        let flow = Flow {
            returns: exits,
            escapes: exits,
            breaks: false,
        };

        Ok((
            IrStmt::While {
                condition,
                body: Box::new(body),
                loop_budget: self.ctx.settings().loop_budget(),
                span: while_stmt.span,
            },
            flow,
        ))
    }

    pub(crate) fn compile_break(&mut self, brk: &BreakStmt) -> Result<(IrStmt, Flow)> {
        if self.loop_depth == 0 {
            return Err(CompilationError::control_flow(
                brk.span,
                "break statement outside of a loop",
            ));
        }
        let flow = Flow {
            escapes: true,
            breaks: true,
            ..Flow::fallthrough()
        };
        Ok((IrStmt::Break { span: brk.span }, flow))
    }

    pub(crate) fn compile_continue(&mut self, cont: &ContinueStmt) -> Result<(IrStmt, Flow)> {
        if self.loop_depth == 0 {
            return Err(CompilationError::control_flow(
                cont.span,
                "continue statement outside of a loop",
            ));
        }
        let flow = Flow {
            escapes: true,
            ..Flow::fallthrough()
        };
        Ok((IrStmt::Continue { span: cont.span }, flow))
    }
}

fn is_constant_true(expr: &Expr<'_>) -> bool {
    matches!(expr, Expr::Literal(lit) if lit.kind == LiteralKind::Bool(true))
}
