//! The pending callback registry.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use shellbridge_values::ScriptFunction;

use crate::engine::ExecutionContext;

/// A process-local callback id.
///
/// Allocated monotonically for the lifetime of the bridge, only when script
/// supplies a callback argument, and never reused while the callback is
/// pending. Travels as the integer in slot 0 of the outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(i32);

impl CallbackId {
    /// Wrap a raw wire id.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw wire representation.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the registry holds for one in-flight host call: the context the call
/// was made in and the callback to invoke when the reply arrives.
pub struct PendingCallback {
    /// The execution context current at dispatch time.
    pub context: Rc<dyn ExecutionContext>,
    /// The script-supplied callback.
    pub function: Rc<dyn ScriptFunction>,
}

/// Maps callback ids to their pending entries.
///
/// Owned by the bridge and touched only from the renderer thread, so there is
/// no interior mutability and no locking. An entry lives from dispatch until
/// the matching `invokeCallback` message is processed; a call the host never
/// answers leaks its entry permanently (known limitation, no timeout exists).
#[derive(Default)]
pub struct CallbackRegistry {
    entries: HashMap<CallbackId, PendingCallback>,
    next_id: i32,
}

impl CallbackRegistry {
    /// An empty registry; ids start at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id.
    pub fn allocate_id(&mut self) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Insert a new entry under `id`.
    ///
    /// # Panics
    ///
    /// If `id` is already pending. Ids come from [`allocate_id`]
    /// (monotonic), so a duplicate is a programming error, not a runtime
    /// condition.
    ///
    /// [`allocate_id`]: Self::allocate_id
    pub fn register(
        &mut self,
        id: CallbackId,
        context: Rc<dyn ExecutionContext>,
        function: Rc<dyn ScriptFunction>,
    ) {
        let previous = self.entries.insert(id, PendingCallback { context, function });
        assert!(previous.is_none(), "callback id {id} registered twice");
    }

    /// Atomically look up and erase the entry for `id`.
    ///
    /// Returns `None` for an id that is not pending, so a given callback can
    /// fire at most once.
    pub fn resolve_and_remove(&mut self, id: CallbackId) -> Option<PendingCallback> {
        self.entries.remove(&id)
    }

    /// Number of callbacks still waiting for a reply.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callbacks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
