//! Indented-tree rendering of the IR, for debugging and snapshot tests.

use std::fmt::{self, Write};

use sable_core::{MemberSignature, TypeRef};
use sable_registry::Whitelist;

use super::{Constant, IrClass, IrExpr, IrExprKind, IrFunction, IrStmt};

const INDENT: &str = "  ";

/// Renders an [`IrClass`] with canonical type names.
pub struct IrPrinter<'a> {
    class: &'a IrClass,
    whitelist: &'a Whitelist,
}

impl IrClass {
    /// Display adapter that names types through `whitelist`.
    pub fn display<'a>(&'a self, whitelist: &'a Whitelist) -> IrPrinter<'a> {
        IrPrinter {
            class: self,
            whitelist,
        }
    }
}

impl fmt::Display for IrPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {}", self.class.name)?;
        for constant in &self.class.constants {
            writeln!(f, "{INDENT}const {} = {:?}", constant.name, constant.value)?;
        }
        for function in &self.class.functions {
            self.function(f, function)?;
        }
        Ok(())
    }
}

impl IrPrinter<'_> {
    fn ty(&self, ty: TypeRef) -> &str {
        self.whitelist.type_name(ty)
    }

    fn member(&self, member: &MemberSignature) -> String {
        format!(
            "[{}, {}/{}]",
            self.ty(member.owner),
            member.name,
            member.arity()
        )
    }

    fn function(&self, f: &mut fmt::Formatter<'_>, function: &IrFunction) -> fmt::Result {
        let sig = &function.signature;
        let params: Vec<_> = sig.params.iter().map(|p| self.ty(*p)).collect();
        write!(
            f,
            "{INDENT}function {} {}({}) frame={}",
            self.ty(sig.return_type),
            sig.name,
            params.join(", "),
            function.frame_size
        )?;
        if sig.is_static {
            f.write_str(" static")?;
        }
        if sig.is_internal {
            f.write_str(" internal")?;
        }
        f.write_char('\n')?;
        for stmt in &function.body {
            self.stmt(f, stmt, 2)?;
        }
        if function.auto_return {
            writeln!(f, "{}return (implicit)", INDENT.repeat(2))?;
        }
        Ok(())
    }

    fn stmt(&self, f: &mut fmt::Formatter<'_>, stmt: &IrStmt, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        match stmt {
            IrStmt::Expr {
                expr,
                discards_value,
                ..
            } => {
                if *discards_value {
                    writeln!(f, "{pad}expr (pop)")?;
                } else {
                    writeln!(f, "{pad}expr")?;
                }
                self.expr(f, expr, depth + 1)
            }
            IrStmt::Declare {
                slot,
                name,
                ty,
                init,
                ..
            } => {
                writeln!(f, "{pad}declare {} {name}#{slot}", self.ty(*ty))?;
                match init {
                    Some(init) => self.expr(f, init, depth + 1),
                    None => Ok(()),
                }
            }
            IrStmt::Return { value, .. } => {
                writeln!(f, "{pad}return")?;
                match value {
                    Some(value) => self.expr(f, value, depth + 1),
                    None => Ok(()),
                }
            }
            IrStmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                writeln!(f, "{pad}if")?;
                self.expr(f, condition, depth + 1)?;
                writeln!(f, "{pad}then")?;
                self.stmt(f, then_branch, depth + 1)?;
                if let Some(else_branch) = else_branch {
                    writeln!(f, "{pad}else")?;
                    self.stmt(f, else_branch, depth + 1)?;
                }
                Ok(())
            }
            IrStmt::While {
                condition,
                body,
                loop_budget,
                ..
            } => {
                match loop_budget {
                    Some(budget) => writeln!(f, "{pad}while budget={budget}")?,
                    None => writeln!(f, "{pad}while")?,
                }
                self.expr(f, condition, depth + 1)?;
                writeln!(f, "{pad}do")?;
                self.stmt(f, body, depth + 1)
            }
            IrStmt::Break { .. } => writeln!(f, "{pad}break"),
            IrStmt::Continue { .. } => writeln!(f, "{pad}continue"),
            IrStmt::Block { stmts, .. } => {
                writeln!(f, "{pad}block")?;
                for stmt in stmts {
                    self.stmt(f, stmt, depth + 1)?;
                }
                Ok(())
            }
        }
    }

    fn exprs(&self, f: &mut fmt::Formatter<'_>, exprs: &[IrExpr], depth: usize) -> fmt::Result {
        for expr in exprs {
            self.expr(f, expr, depth)?;
        }
        Ok(())
    }

    fn expr(&self, f: &mut fmt::Formatter<'_>, expr: &IrExpr, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        let ty = self.ty(expr.ty);
        match &expr.kind {
            IrExprKind::Constant(value) => match value {
                Constant::Int(v) => writeln!(f, "{pad}const {v} : {ty}"),
                Constant::Long(v) => writeln!(f, "{pad}const {v}L : {ty}"),
                Constant::Double(v) => writeln!(f, "{pad}const {v:?} : {ty}"),
                Constant::Bool(v) => writeln!(f, "{pad}const {v} : {ty}"),
                Constant::String(v) => writeln!(f, "{pad}const {v:?} : {ty}"),
                Constant::Null => writeln!(f, "{pad}const null : {ty}"),
            },
            IrExprKind::Local { slot, name } => writeln!(f, "{pad}local {name}#{slot} : {ty}"),
            IrExprKind::Store {
                slot,
                name,
                value,
                read,
            } => {
                let suffix = if *read { " (dup)" } else { "" };
                writeln!(f, "{pad}store {name}#{slot}{suffix} : {ty}")?;
                self.expr(f, value, depth + 1)
            }
            IrExprKind::Binary {
                op,
                operand_ty,
                left,
                right,
            } => {
                writeln!(f, "{pad}binary {op} [{}] : {ty}", self.ty(*operand_ty))?;
                self.expr(f, left, depth + 1)?;
                self.expr(f, right, depth + 1)
            }
            IrExprKind::Unary { op, operand } => {
                writeln!(f, "{pad}unary {op} : {ty}")?;
                self.expr(f, operand, depth + 1)
            }
            IrExprKind::Cast { cast, expr } => {
                writeln!(
                    f,
                    "{pad}cast {:?} [{}] -> [{}]",
                    cast.kind,
                    self.ty(cast.from),
                    self.ty(cast.to)
                )?;
                self.expr(f, expr, depth + 1)
            }
            IrExprKind::New { constructor, args } => {
                writeln!(f, "{pad}new {} : {ty}", self.member(constructor))?;
                self.exprs(f, args, depth + 1)
            }
            IrExprKind::CallLocal { function, args } => {
                writeln!(f, "{pad}call {function} : {ty}")?;
                self.exprs(f, args, depth + 1)
            }
            IrExprKind::CallMethod {
                receiver,
                method,
                args,
            } => {
                writeln!(f, "{pad}invoke {} : {ty}", self.member(method))?;
                self.expr(f, receiver, depth + 1)?;
                self.exprs(f, args, depth + 1)
            }
            IrExprKind::CallDynamic {
                receiver,
                name,
                args,
            } => {
                writeln!(f, "{pad}invoke dynamic {name}/{} : {ty}", args.len())?;
                self.expr(f, receiver, depth + 1)?;
                self.exprs(f, args, depth + 1)
            }
            IrExprKind::CallStatic { method, args } => {
                writeln!(f, "{pad}invoke static {} : {ty}", self.member(method))?;
                self.exprs(f, args, depth + 1)
            }
            IrExprKind::MapInit {
                constructor,
                put,
                entries,
            } => {
                writeln!(
                    f,
                    "{pad}map {} {} : {ty}",
                    self.member(constructor),
                    self.member(put)
                )?;
                for (key, value) in entries {
                    writeln!(f, "{pad}{INDENT}entry")?;
                    self.expr(f, key, depth + 2)?;
                    self.expr(f, value, depth + 2)?;
                }
                Ok(())
            }
            IrExprKind::ListInit {
                constructor,
                add,
                values,
            } => {
                writeln!(
                    f,
                    "{pad}list {} {} : {ty}",
                    self.member(constructor),
                    self.member(add)
                )?;
                self.exprs(f, values, depth + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function_table::{FunctionSignature, FunctionTable};
    use sable_core::Span;

    #[test]
    fn renders_class_tree() {
        let whitelist = Whitelist::with_base_library().unwrap();
        let signature = FunctionSignature::new("one", vec![], TypeRef::int());
        let function = IrFunction {
            signature,
            param_slots: vec![],
            body: vec![IrStmt::Return {
                value: Some(IrExpr::constant(
                    Constant::Int(1),
                    TypeRef::int(),
                    Span::default(),
                )),
                span: Span::default(),
            }],
            frame_size: 0,
            auto_return: false,
            span: Span::default(),
        };
        let class = IrClass::new(
            "Script",
            "src",
            FunctionTable::new(),
            vec![function],
            Span::default(),
        );

        let rendered = class.display(&whitelist).to_string();
        let expected = "\
class Script
  const $NAME = \"Script\"
  const $SOURCE = \"src\"
  function int one() frame=0
    return
      const 1 : int
";
        assert_eq!(rendered, expected);
    }
}
