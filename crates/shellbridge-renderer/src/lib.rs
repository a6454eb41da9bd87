//! shellbridge renderer: the bridge between page script and the browser
//! process.
//!
//! This crate runs inside the renderer process of an embedded web view and
//! does three things:
//!
//! 1. **Dispatch**: intercepts named extension calls from script. One
//!    reserved call (`GetElapsedMilliseconds`) is answered synchronously;
//!    every other call is packaged into a [`ProcessMessage`] and handed to
//!    the outbound [`MessageSink`], registering the script-supplied callback
//!    under a fresh [`CallbackId`].
//! 2. **Routing**: receives messages from the browser process, offers them
//!    to the [`RenderDelegate`] chain, and resolves the built-in
//!    `invokeCallback` message by re-entering the callback's original
//!    [`ExecutionContext`] and invoking the stored callable.
//! 3. **Lifecycle fan-out**: forwards bridge initialization and script
//!    context created/released events to every registered delegate in order.
//!
//! # Threading model
//!
//! Everything here runs on the engine's single renderer thread; there are no
//! locks and no interior mutability. The outbound channel to the browser
//! process is the only asynchronous boundary: sending never blocks, and a
//! reply arrives later as an independent inbound message.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod bridge;
mod config;
mod delegate;
mod engine;
mod error;
mod message;
mod registry;
mod sink;

pub use bridge::RendererBridge;
pub use config::BridgeConfig;
pub use delegate::RenderDelegate;
pub use engine::{ContextScope, ExecutionContext};
pub use error::{BridgeError, BridgeResult};
pub use message::{GET_ELAPSED_MILLISECONDS, INVOKE_CALLBACK_MESSAGE, ProcessId, ProcessMessage};
pub use registry::{CallbackId, CallbackRegistry, PendingCallback};
pub use sink::{ChannelSink, MessageSink};
