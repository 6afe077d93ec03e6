//! Typed intermediate representation.
//!
//! The IR is the output of analysis: an immutable tree in which every
//! expression carries its resolved type and every member reference is a
//! resolved signature. Code generation consumes it as-is.
//!
//! ## Layout
//!
//! ```text
//! IrClass
//! ├── constants   ($NAME, $SOURCE)
//! ├── function_table
//! └── functions: IrFunction
//!     └── body: IrStmt → IrExpr
//! ```

use sable_ast::{BinaryOp, UnaryOp};
use sable_core::{MemberSignature, Span, TypeRef};

use crate::conversion::Cast;
use crate::function_table::{FunctionSignature, FunctionTable};

mod display;

pub use display::IrPrinter;

/// Name of the class-name constant attached to every class.
pub const NAME_CONSTANT: &str = "$NAME";

/// Name of the source-text constant attached to every class.
pub const SOURCE_CONSTANT: &str = "$SOURCE";

// ============================================================================
// Expressions
// ============================================================================

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    String(String),
    Null,
}

/// A lowered expression.
#[derive(Debug, Clone, PartialEq)]
pub struct IrExpr {
    pub kind: IrExprKind,
    /// Type of the produced value (`void` when nothing is produced).
    pub ty: TypeRef,
    pub span: Span,
}

/// The lowered expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum IrExprKind {
    Constant(Constant),

    /// Load of a local slot.
    Local { slot: u32, name: String },

    /// Store into a local slot. When `read` is set, the stored value is also
    /// the result of the expression.
    Store {
        slot: u32,
        name: String,
        value: Box<IrExpr>,
        read: bool,
    },

    /// Both operands have already been converted to `operand_ty`.
    Binary {
        op: BinaryOp,
        operand_ty: TypeRef,
        left: Box<IrExpr>,
        right: Box<IrExpr>,
    },

    Unary { op: UnaryOp, operand: Box<IrExpr> },

    /// A conversion inserted by the cast engine.
    Cast { cast: Cast, expr: Box<IrExpr> },

    New {
        constructor: MemberSignature,
        args: Vec<IrExpr>,
    },

    /// Call to a function of the class being compiled.
    CallLocal {
        function: FunctionSignature,
        args: Vec<IrExpr>,
    },

    /// Instance call resolved against the whitelist.
    CallMethod {
        receiver: Box<IrExpr>,
        method: MemberSignature,
        args: Vec<IrExpr>,
    },

    /// Instance call on a `def` receiver, dispatched at runtime by name and
    /// argument count.
    CallDynamic {
        receiver: Box<IrExpr>,
        name: String,
        args: Vec<IrExpr>,
    },

    CallStatic {
        method: MemberSignature,
        args: Vec<IrExpr>,
    },

    /// Construct, then one `put` per entry in source order.
    MapInit {
        constructor: MemberSignature,
        put: MemberSignature,
        entries: Vec<(IrExpr, IrExpr)>,
    },

    /// Construct, then one `add` per value in source order.
    ListInit {
        constructor: MemberSignature,
        add: MemberSignature,
        values: Vec<IrExpr>,
    },
}

impl IrExpr {
    pub fn new(kind: IrExprKind, ty: TypeRef, span: Span) -> Self {
        Self { kind, ty, span }
    }

    pub fn constant(value: Constant, ty: TypeRef, span: Span) -> Self {
        Self::new(IrExprKind::Constant(value), ty, span)
    }

    /// Whether evaluation leaves a value behind.
    pub fn produces_value(&self) -> bool {
        !self.ty.is_void()
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A lowered statement.
#[derive(Debug, Clone, PartialEq)]
pub enum IrStmt {
    /// Expression evaluated for effect. `discards_value` is set when the
    /// expression leaves a value the generator must pop.
    Expr {
        expr: IrExpr,
        discards_value: bool,
        span: Span,
    },
    Declare {
        slot: u32,
        name: String,
        ty: TypeRef,
        init: Option<IrExpr>,
        span: Span,
    },
    Return {
        value: Option<IrExpr>,
        span: Span,
    },
    If {
        condition: IrExpr,
        then_branch: Box<IrStmt>,
        else_branch: Option<Box<IrStmt>>,
        span: Span,
    },
    /// `loop_budget` is the iteration limit the generated code enforces.
    While {
        condition: IrExpr,
        body: Box<IrStmt>,
        loop_budget: Option<u32>,
        span: Span,
    },
    Break {
        span: Span,
    },
    Continue {
        span: Span,
    },
    Block {
        stmts: Vec<IrStmt>,
        span: Span,
    },
}

impl IrStmt {
    pub fn span(&self) -> Span {
        match self {
            IrStmt::Expr { span, .. }
            | IrStmt::Declare { span, .. }
            | IrStmt::Return { span, .. }
            | IrStmt::If { span, .. }
            | IrStmt::While { span, .. }
            | IrStmt::Break { span }
            | IrStmt::Continue { span }
            | IrStmt::Block { span, .. } => *span,
        }
    }
}

// ============================================================================
// Functions and classes
// ============================================================================

/// A lowered function body.
#[derive(Debug, Clone, PartialEq)]
pub struct IrFunction {
    pub signature: FunctionSignature,
    /// Slot of each parameter, in declaration order.
    pub param_slots: Vec<u32>,
    pub body: Vec<IrStmt>,
    /// Number of local slots the frame needs, parameters included.
    pub frame_size: u32,
    /// The body can fall off its end; the generator appends a bare return.
    pub auto_return: bool,
    pub span: Span,
}

/// A named class-level constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrConstant {
    pub name: String,
    pub value: String,
}

/// The root of a compiled unit.
#[derive(Debug, Clone, PartialEq)]
pub struct IrClass {
    pub name: String,
    /// Full source text the class was compiled from.
    pub source: String,
    /// Always holds `$NAME` and `$SOURCE`.
    pub constants: Vec<IrConstant>,
    pub function_table: FunctionTable,
    /// Lowered functions in declaration order.
    pub functions: Vec<IrFunction>,
    pub span: Span,
}

impl IrClass {
    pub(crate) fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        function_table: FunctionTable,
        functions: Vec<IrFunction>,
        span: Span,
    ) -> Self {
        let name = name.into();
        let source = source.into();
        let constants = vec![
            IrConstant {
                name: NAME_CONSTANT.to_string(),
                value: name.clone(),
            },
            IrConstant {
                name: SOURCE_CONSTANT.to_string(),
                value: source.clone(),
            },
        ];
        Self {
            name,
            source,
            constants,
            function_table,
            functions,
            span,
        }
    }

    /// Look up a class constant by name.
    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Look up a lowered function by name and arity.
    pub fn function(&self, name: &str, arity: usize) -> Option<&IrFunction> {
        self.functions
            .iter()
            .find(|f| f.signature.name == name && f.signature.arity() == arity)
    }
}
