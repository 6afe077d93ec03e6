//! Signature Pass (Pass 1) - Register all function signatures.
//!
//! Walks the class's function declarations in order, resolves parameter and
//! return type names through the whitelist and registers each signature in
//! the function table. Bodies are not looked at.

use sable_ast::{ClassDecl, FunctionDecl};
use sable_core::CompilationError;

use crate::context::CompilationContext;
use crate::function_table::FunctionSignature;

type Result<T> = std::result::Result<T, CompilationError>;

/// Pass 1: register the signatures of every function in a class.
pub struct SignaturePass<'a, 'w> {
    ctx: &'a mut CompilationContext<'w>,
}

impl<'a, 'w> SignaturePass<'a, 'w> {
    pub fn new(ctx: &'a mut CompilationContext<'w>) -> Self {
        Self { ctx }
    }

    /// Run the pass and return the number of functions registered.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, class: &ClassDecl<'_>) -> Result<usize> {
        for decl in class.functions {
            self.visit_function(decl)?;
        }
        Ok(class.functions.len())
    }

    fn visit_function(&mut self, decl: &FunctionDecl<'_>) -> Result<()> {
        let params = decl
            .params
            .iter()
            .map(|param| self.ctx.resolve_type(&param.ty))
            .collect::<Result<Vec<_>>>()?;
        let return_type = self.ctx.resolve_type(&decl.return_type)?;

        let signature = FunctionSignature::new(decl.name.name, params, return_type)
            .with_static(decl.is_static)
            .with_internal(decl.is_internal);
        log::debug!("registering function [{signature}]");
        self.ctx.register_function(signature, decl.span)
    }
}
