//! Statement analysis and lowering.
//!
//! The [`StmtCompiler`] lowers statements of one function body and tracks
//! control flow as it goes:
//! - Blocks open a nested scope frame
//! - Declarations analyze their initializer before binding the name
//! - Returns are checked against the function's return type
//! - If/while conditions must be `bool`
//! - `break`/`continue` need an enclosing loop, and nothing may follow an
//!   unconditional jump in the same block
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = StmtCompiler::new(&mut ctx, &signature);
//! let (stmt, flow) = compiler.compile(&stmt)?;
//! ```

mod block;
mod if_stmt;
mod return_stmt;
mod var_decl;
mod while_stmt;

use sable_ast::{ExprStmt, Stmt};
use sable_core::CompilationError;

use crate::analysis::Input;
use crate::context::CompilationContext;
use crate::expr::ExprCompiler;
use crate::function_table::FunctionSignature;
use crate::ir::IrStmt;

type Result<T> = std::result::Result<T, CompilationError>;

/// What a lowered statement does to control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flow {
    /// Every path leaves the function (returns or never terminates).
    pub returns: bool,
    /// Control never reaches the following statement.
    pub escapes: bool,
    /// Some path breaks out of the innermost enclosing loop.
    pub breaks: bool,
}

impl Flow {
    /// Control continues with the next statement.
    pub fn fallthrough() -> Self {
        Self::default()
    }

    fn exits_function() -> Self {
        Self {
            returns: true,
            escapes: true,
            breaks: false,
        }
    }
}

/// Lowers statements of one function body.
pub struct StmtCompiler<'a, 'w> {
    /// Compilation context with whitelist, function table and local scope
    ctx: &'a mut CompilationContext<'w>,
    /// Signature of the function being lowered
    signature: &'a FunctionSignature,
    /// Number of loops enclosing the current statement
    loop_depth: u32,
}

impl<'a, 'w> StmtCompiler<'a, 'w> {
    pub fn new(ctx: &'a mut CompilationContext<'w>, signature: &'a FunctionSignature) -> Self {
        Self {
            ctx,
            signature,
            loop_depth: 0,
        }
    }

    /// Lower a statement.
    pub fn compile(&mut self, stmt: &Stmt<'_>) -> Result<(IrStmt, Flow)> {
        match stmt {
            Stmt::Expr(expr_stmt) => self.compile_expr_stmt(expr_stmt),
            Stmt::VarDecl(var_decl) => self.compile_var_decl(var_decl),
            Stmt::Return(ret) => self.compile_return(ret),
            Stmt::If(if_stmt) => self.compile_if(if_stmt),
            Stmt::While(while_stmt) => self.compile_while(while_stmt),
            Stmt::Break(brk) => self.compile_break(brk),
            Stmt::Continue(cont) => self.compile_continue(cont),
            Stmt::Block(block) => self.compile_block(block),
        }
    }

    /// Lower an expression evaluated for its effect.
    ///
    /// A value left behind by the expression is marked for discarding.
    fn compile_expr_stmt(&mut self, expr_stmt: &ExprStmt<'_>) -> Result<(IrStmt, Flow)> {
        let output = self
            .expr_compiler()
            .analyze(expr_stmt.expr, Input::statement())?;
        let discards_value = output.node.produces_value();
        let stmt = IrStmt::Expr {
            expr: output.node,
            discards_value,
            span: expr_stmt.span,
        };
        Ok((stmt, Flow::fallthrough()))
    }

    fn expr_compiler(&mut self) -> ExprCompiler<'_, 'w> {
        ExprCompiler::new(&mut *self.ctx)
    }
}

#[cfg(test)]
mod test_support {
    use bumpalo::Bump;
    use sable_ast::{AstBuilder, Stmt};
    use sable_core::{CompilationError, TypeRef};
    use sable_registry::Whitelist;

    use super::{Flow, StmtCompiler};
    use crate::context::CompilationContext;
    use crate::function_table::FunctionSignature;
    use crate::ir::IrStmt;
    use crate::settings::CompilerSettings;

    pub(super) struct Fixture {
        pub arena: Bump,
        pub whitelist: Whitelist,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                arena: Bump::new(),
                whitelist: Whitelist::with_base_library().unwrap(),
            }
        }

        pub fn builder(&self) -> AstBuilder<'_> {
            AstBuilder::new(&self.arena)
        }

        /// Lower `stmt` inside a function returning `return_type`.
        pub fn compile(
            &self,
            return_type: TypeRef,
            stmt: &Stmt<'_>,
        ) -> Result<(IrStmt, Flow), CompilationError> {
            self.compile_with(CompilerSettings::default(), return_type, stmt)
        }

        pub fn compile_with(
            &self,
            settings: CompilerSettings,
            return_type: TypeRef,
            stmt: &Stmt<'_>,
        ) -> Result<(IrStmt, Flow), CompilationError> {
            let mut ctx = CompilationContext::new(&self.whitelist, settings);
            let signature = FunctionSignature::new("f", vec![], return_type);
            StmtCompiler::new(&mut ctx, &signature).compile(stmt)
        }
    }
}
