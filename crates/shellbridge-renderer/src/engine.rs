//! The boundary to the embedding script engine.

use std::rc::Rc;

/// A script execution context owned by the engine (one per frame).
///
/// The bridge stores a context alongside each pending callback so the
/// callback can later run in the context it was created in, and re-enters it
/// through [`ContextScope`] when the reply arrives.
pub trait ExecutionContext {
    /// Suspend whatever the engine considers current and make this context
    /// current.
    fn enter(&self);

    /// Restore the previously current context.
    fn exit(&self);

    /// Whether this context is still attached to a live browser frame.
    fn is_bound(&self) -> bool;
}

/// Scoped re-entry into an [`ExecutionContext`].
///
/// Entering returns a guard whose drop restores the previous context, so
/// every enter has exactly one matching exit on every path out of a callback
/// invocation, including unwinds. Never pair `enter`/`exit` by hand.
#[must_use = "dropping the scope is what exits the context"]
pub struct ContextScope {
    context: Rc<dyn ExecutionContext>,
}

impl ContextScope {
    /// Enter `context` and hold it current until the scope is dropped.
    pub fn enter(context: Rc<dyn ExecutionContext>) -> Self {
        context.enter();
        Self { context }
    }
}

impl Drop for ContextScope {
    fn drop(&mut self) {
        self.context.exit();
    }
}
