//! Diagnostics sink for testing surveys without a tracing subscriber.
//!
//! `TestDiagnostics` records every warning the engine reports so tests can
//! assert on the recovered error paths. Clones share one buffer, so a copy
//! can be handed to the engine while the test keeps another for inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! let diagnostics = TestDiagnostics::new();
//! let engine = SurveyEngine::with_diagnostics(&declaration, Box::new(diagnostics.clone()));
//!
//! engine.advance();
//! assert!(diagnostics.warnings().is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Diagnostics, Warning};

/// A [`Diagnostics`] implementation that collects warnings in memory.
#[derive(Debug, Clone, Default)]
pub struct TestDiagnostics {
    warnings: Rc<RefCell<Vec<Warning>>>,
}

impl TestDiagnostics {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of everything recorded so far.
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.warnings.borrow_mut().clear();
    }
}

impl Diagnostics for TestDiagnostics {
    fn warning(&self, warning: Warning) {
        self.warnings.borrow_mut().push(warning);
    }
}
