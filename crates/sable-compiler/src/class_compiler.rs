//! Class root compiler.
//!
//! Drives the two passes over one class and assembles the [`IrClass`]:
//!
//! ```text
//! Ready ──► CollectingSignatures ──► LoweringBodies ──► Finished
//!                   │                      │
//!                   └──────────┬───────────┘
//!                              ▼
//!                           Aborted
//! ```
//!
//! The first error aborts the class. Nothing built for a failed class is
//! returned, and the whitelist is only ever read.

use sable_ast::ClassDecl;
use sable_core::CompilationError;
use sable_registry::Whitelist;

use crate::context::CompilationContext;
use crate::ir::IrClass;
use crate::passes::{LoweringPass, SignaturePass};
use crate::settings::CompilerSettings;

type Result<T> = std::result::Result<T, CompilationError>;

/// Where a [`ClassCompiler`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerState {
    /// No class compiled yet.
    Ready,
    /// Pass 1 is registering function signatures.
    CollectingSignatures,
    /// Pass 2 is lowering function bodies.
    LoweringBodies,
    /// The last class compiled to IR.
    Finished,
    /// The last class failed with an error.
    Aborted,
}

/// Compiles classes against one whitelist.
///
/// A compiler holds no per-class state between runs, so it can be reused for
/// any number of classes.
#[derive(Debug)]
pub struct ClassCompiler<'w> {
    whitelist: &'w Whitelist,
    settings: CompilerSettings,
    state: CompilerState,
}

impl<'w> ClassCompiler<'w> {
    pub fn new(whitelist: &'w Whitelist, settings: CompilerSettings) -> Self {
        Self {
            whitelist,
            settings,
            state: CompilerState::Ready,
        }
    }

    pub fn state(&self) -> CompilerState {
        self.state
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Compile `class` to IR.
    pub fn compile(&mut self, class: &ClassDecl<'_>) -> Result<IrClass> {
        let result = self.run(class);
        self.state = match &result {
            Ok(_) => CompilerState::Finished,
            Err(_) => CompilerState::Aborted,
        };
        result.inspect_err(|err| {
            log::debug!(
                "compilation of class [{}] aborted: {} at {}",
                class.name,
                err.kind,
                err.span
            );
        })
    }

    fn run(&mut self, class: &ClassDecl<'_>) -> Result<IrClass> {
        let mut ctx = CompilationContext::new(self.whitelist, self.settings);

        self.state = CompilerState::CollectingSignatures;
        log::debug!("collecting signatures of class [{}]", class.name);
        let registered = SignaturePass::new(&mut ctx).run(class)?;

        self.state = CompilerState::LoweringBodies;
        log::debug!(
            "lowering {registered} function bodies of class [{}]",
            class.name
        );
        let functions = LoweringPass::new(&mut ctx).run(class)?;

        Ok(IrClass::new(
            class.name,
            class.source,
            ctx.into_function_table(),
            functions,
            class.span,
        ))
    }
}

/// Compile `class` against `whitelist` in one call.
pub fn compile_class(
    class: &ClassDecl<'_>,
    whitelist: &Whitelist,
    settings: CompilerSettings,
) -> Result<IrClass> {
    ClassCompiler::new(whitelist, settings).compile(class)
}
