//! Local scope management for function compilation.
//!
//! `LocalScope` tracks the local variables of one function body:
//! - declaration with storage slot allocation
//! - nested block frames (if/while bodies, explicit blocks)
//! - shadowing across frames, restored when the inner frame closes
//!
//! Frames are discarded wholesale. Slots freed by a closed frame are reused
//! by its siblings; the frame size is the peak number of live slots.

use rustc_hash::FxHashMap;
use sable_core::{CompilationError, Span, TypeRef};

// ============================================================================
// Types
// ============================================================================

/// Information about a local variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    /// Variable name
    pub name: String,
    /// Declared type
    pub ty: TypeRef,
    /// Storage slot index
    pub slot: u32,
    /// Frame depth where declared
    pub depth: u32,
    /// Source location of declaration
    pub span: Span,
}

// ============================================================================
// LocalScope
// ============================================================================

/// Frame chain for the function being compiled.
#[derive(Debug, Default)]
pub struct LocalScope {
    /// Visible variables by name
    variables: FxHashMap<String, LocalVar>,

    /// Current frame depth (0 = function frame)
    scope_depth: u32,

    /// Variables hidden by a declaration in a deeper frame, tagged with the
    /// depth at which the shadowing happened
    shadowed: Vec<(u32, String, LocalVar)>,

    /// `next_slot` at the time each open frame was entered
    slot_marks: Vec<u32>,

    /// Next free storage slot
    next_slot: u32,

    /// Peak number of simultaneously live slots
    max_slot: u32,
}

impl LocalScope {
    /// Create an empty scope with only the function frame open.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Frame Management
    // ==========================================================================

    /// Enter a nested frame.
    pub fn push_scope(&mut self) {
        self.slot_marks.push(self.next_slot);
        self.scope_depth += 1;
    }

    /// Leave the current frame, dropping everything declared in it.
    ///
    /// The function frame is never popped.
    pub fn pop_scope(&mut self) {
        let Some(mark) = self.slot_marks.pop() else {
            return;
        };

        let depth = self.scope_depth;
        self.variables.retain(|_, var| var.depth < depth);

        while let Some((shadowing_depth, _, _)) = self.shadowed.last() {
            if *shadowing_depth != depth {
                break;
            }
            if let Some((_, name, var)) = self.shadowed.pop() {
                self.variables.insert(name, var);
            }
        }

        self.next_slot = mark;
        self.scope_depth -= 1;
    }

    /// Current frame depth.
    pub fn depth(&self) -> u32 {
        self.scope_depth
    }

    // ==========================================================================
    // Declaration
    // ==========================================================================

    /// Bind `name` in the current frame and return its slot.
    ///
    /// Fails when `name` is already bound in the same frame. A binding from
    /// an enclosing frame is shadowed until this frame closes.
    pub fn declare(
        &mut self,
        name: &str,
        ty: TypeRef,
        span: Span,
    ) -> Result<u32, CompilationError> {
        if let Some(existing) = self.variables.get(name) {
            if existing.depth == self.scope_depth {
                return Err(CompilationError::duplicate(
                    span,
                    format!("variable [{name}] is already defined"),
                ));
            }
            self.shadowed
                .push((self.scope_depth, name.to_string(), existing.clone()));
        }

        let slot = self.allocate_slot();
        self.variables.insert(
            name.to_string(),
            LocalVar {
                name: name.to_string(),
                ty,
                slot,
                depth: self.scope_depth,
                span,
            },
        );
        Ok(slot)
    }

    /// Bind a function parameter in the function frame.
    pub fn declare_param(
        &mut self,
        name: &str,
        ty: TypeRef,
        span: Span,
    ) -> Result<u32, CompilationError> {
        debug_assert_eq!(self.scope_depth, 0, "parameters belong to the function frame");
        self.declare(name, ty, span)
    }

    fn allocate_slot(&mut self) -> u32 {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.max_slot = self.max_slot.max(self.next_slot);
        slot
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Resolve `name`, innermost binding first.
    pub fn get(&self, name: &str) -> Option<&LocalVar> {
        self.variables.get(name)
    }

    /// Whether `name` is visible from the current frame.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of slots the function frame needs.
    pub fn frame_size(&self) -> u32 {
        self.max_slot
    }
}
