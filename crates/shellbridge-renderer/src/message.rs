//! Process messages exchanged with the browser process.

use serde::{Deserialize, Serialize};
use shellbridge_values::ListValue;

/// Name of the inbound message that completes a pending callback.
///
/// `args[0]` is the integer [`CallbackId`](crate::CallbackId); `args[1..]`
/// are the values to pass to the callback, in order.
pub const INVOKE_CALLBACK_MESSAGE: &str = "invokeCallback";

/// Name of the one extension call resolved entirely inside the renderer
/// process. Zero arguments, synchronous double return, no message sent.
pub const GET_ELAPSED_MILLISECONDS: &str = "GetElapsedMilliseconds";

/// The process a message originates from or targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessId {
    /// The browser (host) process.
    Browser,
    /// A renderer process.
    Renderer,
}

/// A named message with one typed list as its argument container.
///
/// Immutable once sent; ownership transfers to the outbound channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMessage {
    /// The message name. For outbound traffic this is the extension call
    /// name; inbound, the reserved [`INVOKE_CALLBACK_MESSAGE`] or a name a
    /// delegate understands.
    pub name: String,
    /// The argument list.
    pub args: ListValue,
}

impl ProcessMessage {
    /// Build a message.
    #[must_use]
    pub fn new(name: impl Into<String>, args: ListValue) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use shellbridge_values::ListEntry;

    use super::*;

    #[test]
    fn serde_round_trip() {
        let mut args = ListValue::new();
        args.set(0, ListEntry::Int(3));
        args.set(1, ListEntry::String("x".into()));
        let message = ProcessMessage::new("openFile", args);

        let json = serde_json::to_string(&message).unwrap();
        let back: ProcessMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
