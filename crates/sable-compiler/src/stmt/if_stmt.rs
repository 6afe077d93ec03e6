//! If statements.

use sable_ast::{IfStmt, Stmt};
use sable_core::TypeRef;

use super::{Flow, Result, StmtCompiler};
use crate::analysis::Input;
use crate::ir::IrStmt;

impl<'a, 'w> StmtCompiler<'a, 'w> {
    /// Lower `if (cond) then [else otherwise]`.
    ///
    /// Every path returns only when both branches do; without an else
    /// branch the statement always falls through.
    pub(crate) fn compile_if(&mut self, if_stmt: &IfStmt<'_>) -> Result<(IrStmt, Flow)> {
        let condition = self
            .expr_compiler()
            .analyze_and_cast(if_stmt.condition, Input::read(TypeRef::bool()))?;

        let (then_branch, then_flow) = self.compile_branch(if_stmt.then_branch)?;
        let (else_branch, flow) = match if_stmt.else_branch {
            Some(else_stmt) => {
                let (lowered, else_flow) = self.compile_branch(else_stmt)?;
                let flow = Flow {
                    returns: then_flow.returns && else_flow.returns,
                    escapes: then_flow.escapes && else_flow.escapes,
                    breaks: then_flow.breaks || else_flow.breaks,
                };
                (Some(Box::new(lowered)), flow)
            }
            None => (
                None,
                Flow {
                    breaks: then_flow.breaks,
                    ..Flow::fallthrough()
                },
            ),
        };

        Ok((
            IrStmt::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
                span: if_stmt.span,
            },
            flow,
        ))
    }

    /// Lower a branch or loop body in its own scope frame.
    pub(crate) fn compile_branch(&mut self, stmt: &Stmt<'_>) -> Result<(IrStmt, Flow)> {
        self.ctx.scope_mut().push_scope();
        let result = self.compile(stmt);
        self.ctx.scope_mut().pop_scope();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use sable_core::ErrorKind;

    #[test]
    fn both_branches_returning_returns() {
        let fx = Fixture::new();
        let b = fx.builder();
        let stmt = b.if_stmt(
            b.bool(true),
            b.ret(Some(b.int(1))),
            Some(b.ret(Some(b.int(2)))),
        );

        let (_, flow) = fx.compile(TypeRef::int(), &stmt).unwrap();
        assert!(flow.returns);
        assert!(flow.escapes);
    }

    #[test]
    fn missing_else_falls_through() {
        let fx = Fixture::new();
        let b = fx.builder();
        let stmt = b.if_stmt(b.bool(true), b.ret(Some(b.int(1))), None);

        let (lowered, flow) = fx.compile(TypeRef::int(), &stmt).unwrap();
        assert!(!flow.returns);
        assert!(matches!(lowered, IrStmt::If { else_branch: None, .. }));
    }

    #[test]
    fn condition_must_be_bool() {
        let fx = Fixture::new();
        let b = fx.builder();
        let cond = b.int(1);
        let stmt = b.if_stmt(cond, b.block_stmt(&[]), None);

        let err = fx.compile(TypeRef::void(), &stmt).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CastFailure);
        assert_eq!(err.span, cond.span());
        assert_eq!(err.message, "cannot cast from [int] to [bool]");
    }

    #[test]
    fn branch_declarations_stay_in_branch() {
        let fx = Fixture::new();
        let b = fx.builder();
        let stmt = b.block_stmt(&[
            b.if_stmt(b.bool(true), b.var_decl("int", "x", None), None),
            b.expr_stmt(b.assign(b.var("x"), b.int(1))),
        ]);

        let err = fx.compile(TypeRef::void(), &stmt).unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
    }
}
