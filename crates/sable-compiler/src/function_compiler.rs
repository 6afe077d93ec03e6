//! Function compiler for lowering one function body to IR.
//!
//! [`FunctionCompiler`] handles:
//!
//! - Setting up a fresh scope with the parameters in slots `0..arity`
//! - Lowering the body statements in the function frame
//! - Verifying every path of a non-void function returns
//! - Marking void bodies that can fall off their end for an implicit return
//!
//! # Example
//!
//! ```ignore
//! let compiler = FunctionCompiler::new(&mut ctx, &signature);
//! let function = compiler.compile(&decl)?;
//! ```

use sable_ast::FunctionDecl;
use sable_core::CompilationError;

use crate::context::CompilationContext;
use crate::function_table::FunctionSignature;
use crate::ir::IrFunction;
use crate::stmt::{Flow, StmtCompiler};

type Result<T> = std::result::Result<T, CompilationError>;

/// Lowers a single function body.
pub struct FunctionCompiler<'a, 'w> {
    /// Compilation context with whitelist, function table and local scope
    ctx: &'a mut CompilationContext<'w>,
    /// Signature registered for this function in the first pass
    signature: &'a FunctionSignature,
}

impl<'a, 'w> FunctionCompiler<'a, 'w> {
    pub fn new(ctx: &'a mut CompilationContext<'w>, signature: &'a FunctionSignature) -> Self {
        Self { ctx, signature }
    }

    /// Lower `decl` against the signature this compiler was created with.
    pub fn compile(mut self, decl: &FunctionDecl<'_>) -> Result<IrFunction> {
        let param_slots = self.setup_parameters(decl)?;

        let mut stmt_compiler = StmtCompiler::new(&mut *self.ctx, self.signature);
        let (body, flow) = stmt_compiler.compile_stmts(&decl.body)?;

        self.verify_returns(flow, decl)?;

        let function = IrFunction {
            signature: self.signature.clone(),
            param_slots,
            body,
            frame_size: self.ctx.scope().frame_size(),
            auto_return: !flow.escapes,
            span: decl.span,
        };
        log::debug!(
            "lowered function [{}] with {} statements, frame size {}",
            function.signature,
            function.body.len(),
            function.frame_size
        );
        Ok(function)
    }

    /// Open a fresh scope and bind the parameters in declaration order.
    fn setup_parameters(&mut self, decl: &FunctionDecl<'_>) -> Result<Vec<u32>> {
        self.ctx.begin_function();

        decl.params
            .iter()
            .zip(&self.signature.params)
            .map(|(param, &ty)| {
                self.ctx
                    .scope_mut()
                    .declare_param(param.name.name, ty, param.name.span)
            })
            .collect()
    }

    /// Every path of a non-void function must end in a return.
    fn verify_returns(&self, flow: Flow, decl: &FunctionDecl<'_>) -> Result<()> {
        if self.signature.return_type.is_void() || flow.returns {
            return Ok(());
        }
        Err(CompilationError::control_flow(
            decl.span,
            format!(
                "not all paths provide a return value for function [{}]",
                self.signature
            ),
        ))
    }
}
