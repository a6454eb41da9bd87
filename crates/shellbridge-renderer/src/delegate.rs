//! The pluggable render delegate chain.

use std::rc::Rc;

use crate::engine::ExecutionContext;
use crate::message::{ProcessId, ProcessMessage};

/// A plug-in observer of bridge and context lifecycle, and an optional
/// message handler.
///
/// Delegates are offered every inbound message and every lifecycle event in
/// registration order. All methods have no-op defaults; implement only what
/// the delegate cares about.
pub trait RenderDelegate {
    /// The bridge finished initializing (the engine registered the
    /// extension surface).
    fn on_bridge_initialized(&self) {}

    /// A script execution context was created.
    fn on_context_created(&self, _context: &Rc<dyn ExecutionContext>) {}

    /// A script execution context was released.
    fn on_context_released(&self, _context: &Rc<dyn ExecutionContext>) {}

    /// An inbound message arrived from `source`. Return `true` to claim it
    /// and stop the chain.
    fn on_process_message(&self, _source: ProcessId, _message: &ProcessMessage) -> bool {
        false
    }
}
