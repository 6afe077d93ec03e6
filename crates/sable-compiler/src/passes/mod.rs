//! Compiler passes.
//!
//! - [`signatures`]: Pass 1 - resolve and register every function signature
//! - [`lowering`]: Pass 2 - analyze and lower every function body
//!
//! Pass 1 finishes for the whole class before Pass 2 starts, so a body may
//! call a function declared after it.

pub mod lowering;
pub mod signatures;

pub use lowering::LoweringPass;
pub use signatures::SignaturePass;
