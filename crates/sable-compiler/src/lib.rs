//! Sable Compiler
//!
//! Semantic analysis and IR lowering for one Sable class.
//!
//! ## Architecture
//!
//! - **Pass 1 (Signatures)**: resolve every function signature into the function table
//! - **Pass 2 (Lowering)**: type check every function body and lower it to IR
//!
//! ## Modules
//!
//! - [`analysis`]: read/write contract between a node and its parent
//! - [`class_compiler`]: class root compiler driving both passes
//! - [`context`]: per-compilation context (whitelist handle, function table, scope)
//! - [`conversion`]: cast engine deciding legal conversions between types
//! - [`expr`]: expression analysis and lowering
//! - [`function_compiler`]: lowering of a single function body
//! - [`function_table`]: function signatures keyed by name and arity
//! - [`ir`]: the typed intermediate representation handed to code generation
//! - [`passes`]: the two compiler passes
//! - [`scope`]: lexical scopes and local slot allocation
//! - [`settings`]: compiler settings
//! - [`stmt`]: statement lowering and control-flow checks

pub mod analysis;
pub mod class_compiler;
pub mod context;
pub mod conversion;
pub mod expr;
pub mod function_compiler;
pub mod function_table;
pub mod ir;
pub mod passes;
pub mod scope;
pub mod settings;
pub mod stmt;

pub use analysis::{Input, Output};
pub use class_compiler::{ClassCompiler, CompilerState, compile_class};
pub use context::CompilationContext;
pub use conversion::{Cast, CastKind, apply_cast, classify_cast, find_cast};
pub use expr::ExprCompiler;
pub use function_compiler::FunctionCompiler;
pub use function_table::{FunctionSignature, FunctionTable};
pub use ir::{
    Constant, IrClass, IrConstant, IrExpr, IrExprKind, IrFunction, IrPrinter, IrStmt,
    NAME_CONSTANT, SOURCE_CONSTANT,
};
pub use passes::{LoweringPass, SignaturePass};
pub use scope::{LocalScope, LocalVar};
pub use settings::{CompilerSettings, DEFAULT_MAX_LOOP_COUNTER};
pub use stmt::{Flow, StmtCompiler};

// Re-export CompilationError from core for convenience
pub use sable_core::{CompilationError, ErrorKind};
