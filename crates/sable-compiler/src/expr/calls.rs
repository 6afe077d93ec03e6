//! Construction and calls.
//!
//! Host constructors and methods are resolved through the whitelist by name
//! and arity; functions of the class being compiled through the function
//! table. Arguments are converted to the resolved parameter types.

use sable_ast::{CallExpr, MethodCallExpr, NewExpr, StaticCallExpr};
use sable_core::{CompilationError, MemberSignature, Span, TypeRef};
use sable_registry::{MemberKind, NotFound};

use super::{ExprCompiler, Result};
use crate::analysis::{Input, Output};
use crate::ir::{IrExpr, IrExprKind};

/// Analyze `new T(args)`.
pub fn compile_new(
    compiler: &mut ExprCompiler<'_, '_>,
    new: &NewExpr<'_>,
    _input: Input,
) -> Result<Output> {
    let ctx = compiler.ctx();
    let ty = ctx.resolve_type(&new.ty)?;
    let constructor = ctx
        .whitelist()
        .resolve_constructor(ty, new.args.len())
        .map_err(|missing| missing.into_error(new.span))?;

    let args = compiler.compile_args(new.args, &constructor.params)?;
    Ok(Output::new(IrExpr::new(
        IrExprKind::New {
            constructor: constructor.clone(),
            args,
        },
        ty,
        new.span,
    )))
}

/// Analyze a call to a function of the class being compiled.
pub fn compile_call(
    compiler: &mut ExprCompiler<'_, '_>,
    call: &CallExpr<'_>,
    input: Input,
) -> Result<Output> {
    let name = call.name.name;
    let arity = call.args.len();
    let Some(function) = compiler.ctx().lookup_function(name, arity).cloned() else {
        return Err(CompilationError::lookup_failure(
            call.span,
            format!("function [{name}/{arity}] not found"),
        ));
    };

    if input.read && function.return_type.is_void() {
        return Err(CompilationError::contract_violation(
            call.span,
            format!("must read from call to void function [{function}]"),
        ));
    }

    let args = compiler.compile_args(call.args, &function.params)?;
    let ty = function.return_type;
    Ok(Output::new(IrExpr::new(
        IrExprKind::CallLocal { function, args },
        ty,
        call.span,
    )))
}

/// Analyze `receiver.name(args)`.
pub fn compile_method_call(
    compiler: &mut ExprCompiler<'_, '_>,
    call: &MethodCallExpr<'_>,
    input: Input,
) -> Result<Output> {
    let name = call.name.name;
    let arity = call.args.len();
    let receiver = compiler.analyze(call.receiver, Input::read(TypeRef::dynamic()))?;

    if receiver.actual.is_dynamic() {
        if !compiler.ctx().settings().dynamic_receivers {
            let missing = NotFound {
                kind: MemberKind::Method,
                type_name: compiler.ctx().type_name(receiver.actual).to_string(),
                name: name.to_string(),
                arity,
            };
            return Err(missing.into_error(call.span));
        }

        let args = call
            .args
            .iter()
            .map(|arg| compiler.analyze_and_cast(arg, Input::read(TypeRef::dynamic())))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Output::new(IrExpr::new(
            IrExprKind::CallDynamic {
                receiver: Box::new(receiver.node),
                name: name.to_string(),
                args,
            },
            TypeRef::dynamic(),
            call.span,
        )));
    }

    let method = compiler
        .ctx()
        .whitelist()
        .resolve_method(receiver.actual, false, name, arity)
        .map_err(|missing| missing.into_error(call.span))?;
    check_void_read(compiler, method, input, call.span)?;

    let args = compiler.compile_args(call.args, &method.params)?;
    Ok(Output::new(IrExpr::new(
        IrExprKind::CallMethod {
            receiver: Box::new(receiver.node),
            method: method.clone(),
            args,
        },
        method.return_type,
        call.span,
    )))
}

/// Analyze `Type.name(args)`.
pub fn compile_static_call(
    compiler: &mut ExprCompiler<'_, '_>,
    call: &StaticCallExpr<'_>,
    input: Input,
) -> Result<Output> {
    let ctx = compiler.ctx();
    let ty = ctx.resolve_type(&call.ty)?;
    let method = ctx
        .whitelist()
        .resolve_method(ty, true, call.name.name, call.args.len())
        .map_err(|missing| missing.into_error(call.span))?;
    check_void_read(compiler, method, input, call.span)?;

    let args = compiler.compile_args(call.args, &method.params)?;
    Ok(Output::new(IrExpr::new(
        IrExprKind::CallStatic {
            method: method.clone(),
            args,
        },
        method.return_type,
        call.span,
    )))
}

fn check_void_read(
    compiler: &ExprCompiler<'_, '_>,
    method: &MemberSignature,
    input: Input,
    span: Span,
) -> Result<()> {
    if input.read && method.return_type.is_void() {
        return Err(CompilationError::contract_violation(
            span,
            format!(
                "must read from call to void method [{}, {}/{}]",
                compiler.ctx().type_name(method.owner),
                method.name,
                method.arity()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use crate::context::CompilationContext;
    use crate::function_table::FunctionSignature;
    use crate::settings::CompilerSettings;
    use sable_core::{ErrorKind, primitives};

    fn context(fx: &Fixture) -> CompilationContext<'_> {
        let mut ctx = CompilationContext::new(&fx.whitelist, CompilerSettings::default());
        ctx.scope_mut()
            .declare("d", TypeRef::dynamic(), Span::default())
            .unwrap();
        ctx.scope_mut()
            .declare("s", TypeRef::string(), Span::default())
            .unwrap();
        ctx.scope_mut()
            .declare("n", TypeRef::int(), Span::default())
            .unwrap();
        ctx
    }

    #[test]
    fn new_resolves_constructor_by_arity() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let out = ExprCompiler::new(&mut ctx)
            .analyze(b.new_object("ArrayList", &[b.int(8)]), Input::statement())
            .unwrap();
        assert_eq!(out.actual, TypeRef::new(primitives::ARRAY_LIST));
        let IrExprKind::New { constructor, args } = out.node.kind else {
            panic!("expected new");
        };
        assert_eq!(constructor.arity(), 1);
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn missing_constructor() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let err = ExprCompiler::new(&mut ctx)
            .analyze(
                b.new_object("HashMap", &[b.int(1), b.int(2)]),
                Input::statement(),
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "constructor [HashMap, <init>/2] not found");
    }

    #[test]
    fn local_call_converts_arguments() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);
        ctx.register_function(
            FunctionSignature::new("scale", vec![TypeRef::double()], TypeRef::double()),
            Span::default(),
        )
        .unwrap();

        let out = ExprCompiler::new(&mut ctx)
            .analyze(b.call("scale", &[b.var("n")]), Input::read(TypeRef::double()))
            .unwrap();
        assert_eq!(out.actual, TypeRef::double());
        let IrExprKind::CallLocal { function, args } = out.node.kind else {
            panic!("expected local call");
        };
        assert_eq!(function.key(), "scale/1");
        assert_eq!(args[0].ty, TypeRef::double());
    }

    #[test]
    fn local_call_unknown_arity() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);
        ctx.register_function(
            FunctionSignature::new("f", vec![TypeRef::int()], TypeRef::int()),
            Span::default(),
        )
        .unwrap();

        let err = ExprCompiler::new(&mut ctx)
            .analyze(b.call("f", &[]), Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "function [f/0] not found");
    }

    #[test]
    fn reading_void_local_call_fails() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);
        ctx.register_function(
            FunctionSignature::new("log", vec![], TypeRef::void()),
            Span::default(),
        )
        .unwrap();
        let call = b.call("log", &[]);

        let mut compiler = ExprCompiler::new(&mut ctx);
        assert!(compiler.analyze(call, Input::statement()).is_ok());

        let err = compiler
            .analyze(call, Input::read(TypeRef::dynamic()))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContractViolation);
        assert_eq!(err.span, call.span());
        assert_eq!(err.message, "must read from call to void function [log/0]");
    }

    #[test]
    fn method_resolves_through_interfaces() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let out = ExprCompiler::new(&mut ctx)
            .analyze(
                b.method(b.list(&[]), "add", &[b.int(1)]),
                Input::statement(),
            )
            .unwrap();
        assert_eq!(out.actual, TypeRef::bool());
        let IrExprKind::CallMethod { method, args, .. } = out.node.kind else {
            panic!("expected method call");
        };
        assert_eq!(method.owner, fx.whitelist.resolve_type("Collection").unwrap());
        assert_eq!(args[0].ty, TypeRef::dynamic());
    }

    #[test]
    fn missing_method_names_receiver_type() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let err = ExprCompiler::new(&mut ctx)
            .analyze(b.method(b.var("s"), "reverse", &[]), Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "method [String, reverse/0] not found");
    }

    #[test]
    fn primitive_receiver_has_no_methods() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let err = ExprCompiler::new(&mut ctx)
            .analyze(b.method(b.var("n"), "toString", &[]), Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "method [int, toString/0] not found");
    }

    #[test]
    fn dynamic_receiver_dispatches_at_runtime() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let out = ExprCompiler::new(&mut ctx)
            .analyze(
                b.method(b.var("d"), "anything", &[b.int(1), b.string("x")]),
                Input::read(TypeRef::dynamic()),
            )
            .unwrap();
        assert_eq!(out.actual, TypeRef::dynamic());
        let IrExprKind::CallDynamic { name, args, .. } = out.node.kind else {
            panic!("expected dynamic call");
        };
        assert_eq!(name, "anything");
        assert!(args.iter().all(|arg| arg.ty.is_dynamic()));
    }

    #[test]
    fn dynamic_receiver_rejected_in_static_mode() {
        let fx = Fixture::new();
        let b = fx.builder();
        let settings = CompilerSettings::default().with_dynamic_receivers(false);
        let mut ctx = CompilationContext::new(&fx.whitelist, settings);
        ctx.scope_mut()
            .declare("d", TypeRef::dynamic(), Span::default())
            .unwrap();

        let err = ExprCompiler::new(&mut ctx)
            .analyze(b.method(b.var("d"), "size", &[]), Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "method [def, size/0] not found");
    }

    #[test]
    fn reading_void_method_fails() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let err = ExprCompiler::new(&mut ctx)
            .analyze(
                b.method(b.map(&[], &[]), "clear", &[]),
                Input::read(TypeRef::dynamic()),
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContractViolation);
        assert_eq!(err.message, "must read from call to void method [Map, clear/0]");
    }

    #[test]
    fn static_call_on_named_type() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let out = ExprCompiler::new(&mut ctx)
            .analyze(
                b.static_call("Math", "max", &[b.var("n"), b.double(2.0)]),
                Input::read(TypeRef::double()),
            )
            .unwrap();
        assert_eq!(out.actual, TypeRef::double());
        assert!(matches!(out.node.kind, IrExprKind::CallStatic { .. }));
    }

    #[test]
    fn static_lookup_ignores_instance_methods() {
        let fx = Fixture::new();
        let b = fx.builder();
        let mut ctx = context(&fx);

        let err = ExprCompiler::new(&mut ctx)
            .analyze(b.static_call("String", "length", &[]), Input::statement())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LookupFailure);
        assert_eq!(err.message, "static method [String, length/0] not found");
    }
}
