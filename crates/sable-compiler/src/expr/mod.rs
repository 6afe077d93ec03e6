//! Expression analysis and lowering.
//!
//! [`ExprCompiler::analyze`] dispatches over the closed set of expression
//! forms. Each form checks the [`Input`] it was given, analyzes its children
//! with inputs of its own, reconciles their types through the cast engine
//! and returns the lowered node together with the type it produces.
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = ExprCompiler::new(&mut ctx);
//!
//! // Natural type of an expression
//! let out = compiler.analyze(&expr, Input::read(TypeRef::dynamic()))?;
//!
//! // Expression converted to the type its parent needs
//! let node = compiler.analyze_and_cast(&expr, Input::read(TypeRef::int()))?;
//! ```

mod aggregates;
mod calls;
mod cast;
mod literals;
mod operators;
mod variables;

use sable_ast::Expr;
use sable_core::{CompilationError, TypeRef};

use crate::analysis::{Input, Output};
use crate::context::CompilationContext;
use crate::conversion::apply_cast;
use crate::ir::IrExpr;

type Result<T> = std::result::Result<T, CompilationError>;

/// Analyzes and lowers expressions of one function body.
pub struct ExprCompiler<'a, 'w> {
    ctx: &'a mut CompilationContext<'w>,
}

impl<'a, 'w> ExprCompiler<'a, 'w> {
    pub fn new(ctx: &'a mut CompilationContext<'w>) -> Self {
        Self { ctx }
    }

    pub(crate) fn ctx(&self) -> &CompilationContext<'w> {
        &*self.ctx
    }

    /// Analyze `expr` against `input` and return its natural type and IR.
    pub fn analyze(&mut self, expr: &Expr<'_>, input: Input) -> Result<Output> {
        if input.write && !matches!(expr, Expr::Variable(_)) {
            return Err(CompilationError::contract_violation(
                expr.span(),
                format!(
                    "invalid assignment: cannot assign a value to {}",
                    describe(expr)
                ),
            ));
        }

        match expr {
            Expr::Literal(lit) => literals::compile_literal(self, lit, input),
            Expr::Variable(var) => variables::compile_variable(self, var, input),
            Expr::Assign(assign) => variables::compile_assign(self, assign, input),
            Expr::Binary(bin) => operators::compile_binary(self, bin, input),
            Expr::Unary(un) => operators::compile_unary(self, un, input),
            Expr::New(new) => calls::compile_new(self, new, input),
            Expr::Call(call) => calls::compile_call(self, call, input),
            Expr::MethodCall(call) => calls::compile_method_call(self, call, input),
            Expr::StaticCall(call) => calls::compile_static_call(self, call, input),
            Expr::Cast(cast) => cast::compile_cast(self, cast, input),
            Expr::MapInit(map) => aggregates::compile_map_init(self, map, input),
            Expr::ListInit(list) => aggregates::compile_list_init(self, list, input),
        }
    }

    /// Analyze `expr` and convert the result to `input.expected`.
    pub fn analyze_and_cast(&mut self, expr: &Expr<'_>, input: Input) -> Result<IrExpr> {
        let output = self.analyze(expr, input)?;
        self.cast(output.node, input.expected, input, expr)
    }

    /// Convert an analyzed child to `to` with the permissions in `input`.
    fn cast(&self, node: IrExpr, to: TypeRef, input: Input, expr: &Expr<'_>) -> Result<IrExpr> {
        apply_cast(
            self.ctx(),
            node,
            to,
            input.explicit,
            input.internal,
            expr.span(),
        )
    }

    /// Analyze each argument against its parameter type.
    fn compile_args(&mut self, args: &[Expr<'_>], params: &[TypeRef]) -> Result<Vec<IrExpr>> {
        args.iter()
            .zip(params)
            .map(|(arg, param)| self.analyze_and_cast(arg, Input::read(*param)))
            .collect()
    }
}

/// How an expression form is named in diagnostics.
fn describe(expr: &Expr<'_>) -> &'static str {
    match expr {
        Expr::Literal(_) => "a constant",
        Expr::Variable(_) => "a variable",
        Expr::Assign(_) => "an assignment",
        Expr::Binary(_) => "a binary operation",
        Expr::Unary(_) => "a unary operation",
        Expr::New(_) => "a new object",
        Expr::Call(_) | Expr::MethodCall(_) | Expr::StaticCall(_) => "a call",
        Expr::Cast(_) => "a cast",
        Expr::MapInit(_) => "a map initializer",
        Expr::ListInit(_) => "a list initializer",
    }
}

#[cfg(test)]
mod test_support {
    use bumpalo::Bump;
    use sable_ast::AstBuilder;
    use sable_registry::Whitelist;

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
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use crate::ir::IrExprKind;
    use crate::settings::CompilerSettings;
    use sable_core::ErrorKind;

    #[test]
    fn write_to_non_variable_is_rejected() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = CompilationContext::new(&fx.whitelist, CompilerSettings::default());
        let expr = b.assign(b.int(1), b.int(2));
        let Expr::Assign(assign) = expr else {
            unreachable!()
        };

        let err = ExprCompiler::new(&mut ctx)
            .analyze(expr, Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContractViolation);
        assert_eq!(err.span, assign.target.span());
        assert_eq!(
            err.message,
            "invalid assignment: cannot assign a value to a constant"
        );
    }

    #[test]
    fn analyze_and_cast_wraps_when_types_differ() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = CompilationContext::new(&fx.whitelist, CompilerSettings::default());

        let node = ExprCompiler::new(&mut ctx)
            .analyze_and_cast(b.int(7), Input::read(TypeRef::double()))
            .unwrap();
        assert_eq!(node.ty, TypeRef::double());
        assert!(matches!(node.kind, IrExprKind::Cast { .. }));
    }

    #[test]
    fn analyze_reports_natural_type() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = CompilationContext::new(&fx.whitelist, CompilerSettings::default());

        let out = ExprCompiler::new(&mut ctx)
            .analyze(b.long(7), Input::read(TypeRef::double()))
            .unwrap();
        assert_eq!(out.actual, TypeRef::long());
        assert_eq!(out.node.ty, TypeRef::long());
    }
}
