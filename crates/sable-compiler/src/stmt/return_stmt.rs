//! Return statements.

use sable_ast::ReturnStmt;
use sable_core::CompilationError;

use super::{Flow, Result, StmtCompiler};
use crate::analysis::Input;
use crate::ir::IrStmt;

impl<'a, 'w> StmtCompiler<'a, 'w> {
    /// Lower `return [value];`.
    ///
    /// The value is converted to the function's return type. A `void`
    /// function returns nothing; any other function must return a value.
    pub(crate) fn compile_return(&mut self, ret: &ReturnStmt<'_>) -> Result<(IrStmt, Flow)> {
        let return_type = self.signature.return_type;

        let value = match (ret.value, return_type.is_void()) {
            (Some(value), false) => Some(
                self.expr_compiler()
                    .analyze_and_cast(value, Input::read(return_type))?,
            ),
            (None, true) => None,
            (Some(value), true) => {
                return Err(CompilationError::contract_violation(
                    value.span(),
                    format!(
                        "cannot return a value from void function [{}]",
                        self.signature
                    ),
                ));
            }
            (None, false) => {
                return Err(CompilationError::contract_violation(
                    ret.span,
                    format!(
                        "must return a value of type [{}] from function [{}]",
                        self.ctx.type_name(return_type),
                        self.signature
                    ),
                ));
            }
        };

        Ok((
            IrStmt::Return {
                value,
                span: ret.span,
            },
            Flow::exits_function(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use crate::ir::IrExprKind;
    use sable_core::{ErrorKind, TypeRef};

    #[test]
    fn return_converts_to_return_type() {
        let fx = Fixture::new();
        let b = fx.builder();
        let stmt = b.ret(Some(b.int(1)));

        let (lowered, flow) = fx.compile(TypeRef::long(), &stmt).unwrap();
        assert!(flow.returns);
        let IrStmt::Return { value: Some(value), .. } = lowered else {
            panic!("expected return with value");
        };
        assert_eq!(value.ty, TypeRef::long());
        assert!(matches!(value.kind, IrExprKind::Cast { .. }));
    }

    #[test]
    fn bare_return_from_void() {
        let fx = Fixture::new();
        let b = fx.builder();
        let (lowered, _) = fx.compile(TypeRef::void(), &b.ret(None)).unwrap();
        assert!(matches!(lowered, IrStmt::Return { value: None, .. }));
    }

    #[test]
    fn value_from_void_function() {
        let fx = Fixture::new();
        let b = fx.builder();
        let err = fx.compile(TypeRef::void(), &b.ret(Some(b.int(1)))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContractViolation);
        assert_eq!(err.message, "cannot return a value from void function [f/0]");
    }

    #[test]
    fn missing_value() {
        let fx = Fixture::new();
        let b = fx.builder();
        let err = fx.compile(TypeRef::int(), &b.ret(None)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ContractViolation);
        assert_eq!(
            err.message,
            "must return a value of type [int] from function [f/0]"
        );
    }

    #[test]
    fn returning_null_from_reference_function() {
        let fx = Fixture::new();
        let b = fx.builder();
        let (lowered, _) = fx.compile(TypeRef::string(), &b.ret(Some(b.null()))).unwrap();
        let IrStmt::Return { value: Some(value), .. } = lowered else {
            panic!("expected return with value");
        };
        assert_eq!(value.ty, TypeRef::string());
    }
}
