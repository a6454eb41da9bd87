use thiserror::Error;

use crate::registry::CallbackId;

/// Errors that can occur during bridge operations.
///
/// Invariant violations (a message from the wrong process, an extension call
/// outside a bound script context, a duplicate callback id) are programming
/// errors and assert instead of appearing here.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A callback-requiring extension call was made without a callback as
    /// its first argument. Nothing was sent.
    #[error("Extension call {call} requires a callback as its first argument")]
    MissingCallback {
        /// The extension call name.
        call: String,
    },
    /// An `invokeCallback` message named a callback id that is not pending
    /// (already fired, or never allocated). The message is dropped.
    #[error("No pending callback with id {id}")]
    UnknownCallback {
        /// The id the browser process sent.
        id: CallbackId,
    },
    /// An `invokeCallback` message whose first argument slot is not an
    /// integer id.
    #[error("invokeCallback message carries a non-integer callback id")]
    MalformedCallbackId,
    /// The outbound channel to the browser process is gone.
    #[error("Outbound channel to the browser process is closed")]
    ChannelClosed,
    /// The bridge configuration failed to parse.
    #[error("Failed to parse bridge configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// A specialized Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
