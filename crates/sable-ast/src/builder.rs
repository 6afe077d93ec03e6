//! Programmatic construction of arena-allocated trees.
//!
//! The builder stands in for a parser when hosts, tests or benchmarks need
//! a tree. Each node receives a distinct one-byte span on the current line,
//! so a diagnostic can be matched back to the node that caused it.

use std::cell::Cell;

use bumpalo::Bump;
use sable_core::Span;

use crate::{
    AssignExpr, BinaryExpr, BinaryOp, Block, BreakStmt, CallExpr, CastExpr, ClassDecl,
    ContinueStmt, Expr, ExprStmt, FunctionDecl, Ident, IfStmt, ListInitExpr, LiteralExpr,
    LiteralKind, MapInitExpr, MethodCallExpr, NewExpr, Param, ReturnStmt, StaticCallExpr, Stmt,
    TypeName, UnaryExpr, UnaryOp, VarDeclStmt, VariableExpr, WhileStmt,
};

/// Allocates AST nodes into a borrowed arena.
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    line: Cell<u32>,
    offset: Cell<u32>,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            line: Cell::new(1),
            offset: Cell::new(0),
        }
    }

    /// Move subsequent nodes to the next line.
    pub fn newline(&self) {
        self.line.set(self.line.get() + 1);
    }

    fn next_span(&self) -> Span {
        let offset = self.offset.get();
        self.offset.set(offset + 1);
        Span::new(self.line.get(), offset, 1)
    }

    fn alloc(&self, expr: Expr<'ast>) -> &'ast Expr<'ast> {
        self.arena.alloc(expr)
    }

    fn exprs(&self, items: &[&'ast Expr<'ast>]) -> &'ast [Expr<'ast>] {
        self.arena.alloc_slice_fill_iter(items.iter().map(|e| **e))
    }

    // === Names ===

    pub fn ident(&self, name: &str) -> Ident<'ast> {
        Ident::new(self.arena.alloc_str(name), self.next_span())
    }

    pub fn ty(&self, name: &str) -> TypeName<'ast> {
        TypeName::new(self.arena.alloc_str(name), self.next_span())
    }

    // === Expressions ===

    fn literal(&self, kind: LiteralKind<'ast>) -> &'ast Expr<'ast> {
        self.alloc(Expr::Literal(LiteralExpr {
            kind,
            span: self.next_span(),
        }))
    }

    pub fn int(&self, value: i32) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Int(value))
    }

    pub fn long(&self, value: i64) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Long(value))
    }

    pub fn double(&self, value: f64) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Double(value))
    }

    pub fn bool(&self, value: bool) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Bool(value))
    }

    pub fn string(&self, value: &str) -> &'ast Expr<'ast> {
        let value = self.arena.alloc_str(value);
        self.literal(LiteralKind::String(value))
    }

    pub fn null(&self) -> &'ast Expr<'ast> {
        self.literal(LiteralKind::Null)
    }

    pub fn var(&self, name: &str) -> &'ast Expr<'ast> {
        let name = self.ident(name);
        self.alloc(Expr::Variable(VariableExpr {
            name,
            span: name.span,
        }))
    }

    pub fn assign(&self, target: &'ast Expr<'ast>, value: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(AssignExpr {
            target,
            value,
            span: self.next_span(),
        });
        self.alloc(Expr::Assign(node))
    }

    pub fn binary(
        &self,
        left: &'ast Expr<'ast>,
        op: BinaryOp,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(BinaryExpr {
            left,
            op,
            right,
            span: self.next_span(),
        });
        self.alloc(Expr::Binary(node))
    }

    pub fn unary(&self, op: UnaryOp, operand: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(UnaryExpr {
            op,
            operand,
            span: self.next_span(),
        });
        self.alloc(Expr::Unary(node))
    }

    pub fn new_object(&self, ty: &str, args: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(NewExpr {
            ty: self.ty(ty),
            args: self.exprs(args),
            span: self.next_span(),
        });
        self.alloc(Expr::New(node))
    }

    pub fn call(&self, name: &str, args: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(CallExpr {
            name: self.ident(name),
            args: self.exprs(args),
            span: self.next_span(),
        });
        self.alloc(Expr::Call(node))
    }

    pub fn method(
        &self,
        receiver: &'ast Expr<'ast>,
        name: &str,
        args: &[&'ast Expr<'ast>],
    ) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(MethodCallExpr {
            receiver,
            name: self.ident(name),
            args: self.exprs(args),
            span: self.next_span(),
        });
        self.alloc(Expr::MethodCall(node))
    }

    pub fn static_call(&self, ty: &str, name: &str, args: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(StaticCallExpr {
            ty: self.ty(ty),
            name: self.ident(name),
            args: self.exprs(args),
            span: self.next_span(),
        });
        self.alloc(Expr::StaticCall(node))
    }

    pub fn cast(&self, target: &str, expr: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(CastExpr {
            target: self.ty(target),
            expr,
            span: self.next_span(),
        });
        self.alloc(Expr::Cast(node))
    }

    /// Map literal from parallel key and value lists.
    pub fn map(&self, keys: &[&'ast Expr<'ast>], values: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(MapInitExpr {
            keys: self.exprs(keys),
            values: self.exprs(values),
            span: self.next_span(),
        });
        self.alloc(Expr::MapInit(node))
    }

    pub fn list(&self, values: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(ListInitExpr {
            values: self.exprs(values),
            span: self.next_span(),
        });
        self.alloc(Expr::ListInit(node))
    }

    // === Statements ===

    pub fn expr_stmt(&self, expr: &'ast Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr,
            span: self.next_span(),
        })
    }

    pub fn var_decl(&self, ty: &str, name: &str, init: Option<&'ast Expr<'ast>>) -> Stmt<'ast> {
        Stmt::VarDecl(VarDeclStmt {
            ty: self.ty(ty),
            name: self.ident(name),
            init,
            span: self.next_span(),
        })
    }

    pub fn ret(&self, value: Option<&'ast Expr<'ast>>) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt {
            value,
            span: self.next_span(),
        })
    }

    pub fn if_stmt(
        &self,
        condition: &'ast Expr<'ast>,
        then_branch: Stmt<'ast>,
        else_branch: Option<Stmt<'ast>>,
    ) -> Stmt<'ast> {
        let then_branch: &'ast Stmt<'ast> = self.arena.alloc(then_branch);
        let else_branch = else_branch.map(|stmt| -> &'ast Stmt<'ast> { self.arena.alloc(stmt) });
        Stmt::If(self.arena.alloc(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: self.next_span(),
        }))
    }

    pub fn while_stmt(&self, condition: &'ast Expr<'ast>, body: Stmt<'ast>) -> Stmt<'ast> {
        let body: &'ast Stmt<'ast> = self.arena.alloc(body);
        Stmt::While(self.arena.alloc(WhileStmt {
            condition,
            body,
            span: self.next_span(),
        }))
    }

    pub fn brk(&self) -> Stmt<'ast> {
        Stmt::Break(BreakStmt {
            span: self.next_span(),
        })
    }

    pub fn cont(&self) -> Stmt<'ast> {
        Stmt::Continue(ContinueStmt {
            span: self.next_span(),
        })
    }

    pub fn block(&self, stmts: &[Stmt<'ast>]) -> Block<'ast> {
        Block {
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.next_span(),
        }
    }

    pub fn block_stmt(&self, stmts: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::Block(self.block(stmts))
    }

    // === Declarations ===

    /// A function with `(type, name)` parameters.
    pub fn function(
        &self,
        name: &str,
        return_type: &str,
        params: &[(&str, &str)],
        body: &[Stmt<'ast>],
    ) -> FunctionDecl<'ast> {
        let params = self
            .arena
            .alloc_slice_fill_iter(params.iter().map(|(ty, name)| Param {
                ty: self.ty(ty),
                name: self.ident(name),
                span: self.next_span(),
            }));
        FunctionDecl {
            name: self.ident(name),
            return_type: self.ty(return_type),
            params,
            body: self.block(body),
            is_static: false,
            is_internal: false,
            span: self.next_span(),
        }
    }

    pub fn class(
        &self,
        name: &str,
        source: &str,
        functions: &[FunctionDecl<'ast>],
    ) -> &'ast ClassDecl<'ast> {
        self.arena.alloc(ClassDecl {
            name: self.arena.alloc_str(name),
            source: self.arena.alloc_str(source),
            functions: self.arena.alloc_slice_copy(functions),
            span: self.next_span(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_distinct() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let one = b.int(1);
        let two = b.int(2);
        assert_ne!(one.span(), two.span());
    }

    #[test]
    fn newline_advances_line() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let first = b.int(1);
        b.newline();
        let second = b.int(2);
        assert_eq!(first.span().line, 1);
        assert_eq!(second.span().line, 2);
    }

    #[test]
    fn map_keeps_parallel_lists() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let map = b.map(&[b.string("a"), b.string("b")], &[b.int(1), b.int(2)]);
        let Expr::MapInit(init) = map else {
            panic!("expected map literal");
        };
        assert_eq!(init.keys.len(), 2);
        assert_eq!(init.values.len(), 2);
        assert!(matches!(
            init.keys[0],
            Expr::Literal(LiteralExpr {
                kind: LiteralKind::String("a"),
                ..
            })
        ));
    }

    #[test]
    fn function_declaration_shape() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let body = [b.ret(Some(b.var("a")))];
        let f = b.function("id", "int", &[("int", "a")], &body);

        assert_eq!(f.name.name, "id");
        assert_eq!(f.arity(), 1);
        assert_eq!(f.params[0].ty.name, "int");
        assert_eq!(f.body.stmts.len(), 1);
        assert!(!f.is_static);
    }

    #[test]
    fn class_holds_source() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let class = b.class("Script", "return 1;", &[]);
        assert_eq!(class.name, "Script");
        assert_eq!(class.source, "return 1;");
        assert!(class.functions.is_empty());
    }
}
