//! Lowering Pass (Pass 2) - Lower every function body to IR.
//!
//! Runs after [`SignaturePass`](super::SignaturePass) has filled the function
//! table. Each body is lowered by a [`FunctionCompiler`] with a fresh scope.

use sable_ast::{ClassDecl, FunctionDecl};
use sable_core::CompilationError;

use crate::context::CompilationContext;
use crate::function_compiler::FunctionCompiler;
use crate::ir::IrFunction;

type Result<T> = std::result::Result<T, CompilationError>;

/// Pass 2: lower the bodies of every function in a class.
pub struct LoweringPass<'a, 'w> {
    ctx: &'a mut CompilationContext<'w>,
}

impl<'a, 'w> LoweringPass<'a, 'w> {
    pub fn new(ctx: &'a mut CompilationContext<'w>) -> Self {
        Self { ctx }
    }

    /// Run the pass and return the lowered functions in declaration order.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, class: &ClassDecl<'_>) -> Result<Vec<IrFunction>> {
        class
            .functions
            .iter()
            .map(|decl| self.lower_function(decl))
            .collect()
    }

    fn lower_function(&mut self, decl: &FunctionDecl<'_>) -> Result<IrFunction> {
        let Some(signature) = self
            .ctx
            .lookup_function(decl.name.name, decl.arity())
            .cloned()
        else {
            return Err(CompilationError::structural(
                decl.span,
                "Illegal tree structure.",
            ));
        };
        FunctionCompiler::new(&mut *self.ctx, &signature).compile(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::SignaturePass;
    use crate::settings::CompilerSettings;
    use bumpalo::Bump;
    use sable_ast::AstBuilder;
    use sable_core::ErrorKind;
    use sable_registry::Whitelist;

    #[test]
    fn forward_calls_resolve() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let whitelist = Whitelist::with_base_library().unwrap();
        let class = b.class(
            "Script",
            "",
            &[
                b.function("g", "int", &[], &[b.ret(Some(b.call("h", &[b.int(2)])))]),
                b.function("h", "int", &[("int", "x")], &[b.ret(Some(b.var("x")))]),
            ],
        );

        let mut ctx = CompilationContext::new(&whitelist, CompilerSettings::default());
        SignaturePass::new(&mut ctx).run(class).unwrap();
        let functions = LoweringPass::new(&mut ctx).run(class).unwrap();

        let names: Vec<_> = functions.iter().map(|f| f.signature.key()).collect();
        assert_eq!(names, ["g/0", "h/1"]);
    }

    #[test]
    fn lowering_without_signatures_is_structural() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let whitelist = Whitelist::with_base_library().unwrap();
        let class = b.class("Script", "", &[b.function("f", "void", &[], &[])]);

        let mut ctx = CompilationContext::new(&whitelist, CompilerSettings::default());
        let err = LoweringPass::new(&mut ctx).run(class).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StructuralInconsistency);
    }

    #[test]
    fn each_function_gets_a_fresh_scope() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let whitelist = Whitelist::with_base_library().unwrap();
        let class = b.class(
            "Script",
            "",
            &[
                b.function("a", "void", &[], &[b.var_decl("int", "x", None)]),
                b.function("b", "void", &[], &[b.var_decl("int", "x", None)]),
            ],
        );

        let mut ctx = CompilationContext::new(&whitelist, CompilerSettings::default());
        SignaturePass::new(&mut ctx).run(class).unwrap();
        let functions = LoweringPass::new(&mut ctx).run(class).unwrap();
        assert!(functions.iter().all(|f| f.frame_size == 1));
    }
}
