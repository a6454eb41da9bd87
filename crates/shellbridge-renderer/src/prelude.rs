//! Convenience re-exports for embedders.
//!
//! ```rust
//! use shellbridge_renderer::prelude::*;
//! ```

pub use crate::bridge::RendererBridge;
pub use crate::config::BridgeConfig;
pub use crate::delegate::RenderDelegate;
pub use crate::engine::{ContextScope, ExecutionContext};
pub use crate::error::{BridgeError, BridgeResult};
pub use crate::message::{
    GET_ELAPSED_MILLISECONDS, INVOKE_CALLBACK_MESSAGE, ProcessId, ProcessMessage,
};
pub use crate::registry::{CallbackId, CallbackRegistry, PendingCallback};
pub use crate::sink::{ChannelSink, MessageSink};

pub use shellbridge_values::{
    ListEntry, ListValue, ScriptFunction, ScriptValue, set_slot, to_list, to_script,
};
