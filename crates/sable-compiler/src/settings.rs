//! Compiler configuration.

/// Default iteration budget attached to every lowered loop.
pub const DEFAULT_MAX_LOOP_COUNTER: u32 = 1_000_000;

/// Host-supplied knobs for one [`ClassCompiler`](crate::ClassCompiler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerSettings {
    /// Iterations a single loop may run before the generated code aborts.
    /// `0` disables the guard.
    pub max_loop_counter: u32,
    /// Whether method calls on a `def` receiver lower to runtime dispatch.
    /// When off, such calls fail to compile.
    pub dynamic_receivers: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            max_loop_counter: DEFAULT_MAX_LOOP_COUNTER,
            dynamic_receivers: true,
        }
    }
}

impl CompilerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_loop_counter(mut self, max_loop_counter: u32) -> Self {
        self.max_loop_counter = max_loop_counter;
        self
    }

    pub fn with_dynamic_receivers(mut self, dynamic_receivers: bool) -> Self {
        self.dynamic_receivers = dynamic_receivers;
        self
    }

    /// The budget carried by lowered loops, or `None` when disabled.
    pub fn loop_budget(&self) -> Option<u32> {
        (self.max_loop_counter != 0).then_some(self.max_loop_counter)
    }
}
