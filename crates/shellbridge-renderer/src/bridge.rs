//! The renderer bridge: extension call dispatch and inbound message routing.

use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, warn};

use shellbridge_values::{ListEntry, ListValue, ScriptValue, set_slot, to_script};

use crate::config::BridgeConfig;
use crate::delegate::RenderDelegate;
use crate::engine::{ContextScope, ExecutionContext};
use crate::error::{BridgeError, BridgeResult};
use crate::message::{
    GET_ELAPSED_MILLISECONDS, INVOKE_CALLBACK_MESSAGE, ProcessId, ProcessMessage,
};
use crate::registry::{CallbackId, CallbackRegistry};
use crate::sink::MessageSink;

/// The per-renderer bridge instance.
///
/// Owns the pending callback registry, the delegate chain, and the outbound
/// sink. All methods run on the engine's renderer thread; see the crate docs
/// for the threading model.
pub struct RendererBridge {
    config: BridgeConfig,
    registry: CallbackRegistry,
    delegates: Vec<Rc<dyn RenderDelegate>>,
    sink: Box<dyn MessageSink>,
    started_at: Instant,
}

impl RendererBridge {
    /// Create a bridge that sends outbound messages into `sink`.
    #[must_use]
    pub fn new(config: BridgeConfig, sink: Box<dyn MessageSink>) -> Self {
        Self {
            config,
            registry: CallbackRegistry::new(),
            delegates: Vec::new(),
            sink,
            started_at: Instant::now(),
        }
    }

    /// Append a delegate to the chain. Delegates are offered events in
    /// registration order.
    pub fn add_delegate(&mut self, delegate: Rc<dyn RenderDelegate>) {
        self.delegates.push(delegate);
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Number of callbacks still waiting for a host reply.
    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        self.registry.len()
    }

    /// Milliseconds since this bridge was constructed. Always non-negative.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }

    /// Signal that the engine registered the extension surface. Fans the
    /// initialization event out to every delegate in order.
    pub fn initialize(&self) {
        debug!(extension = %self.config.extension_name, "Renderer bridge initialized");
        for delegate in &self.delegates {
            delegate.on_bridge_initialized();
        }
    }

    /// Fan a context-created lifecycle event out to the delegates.
    pub fn context_created(&self, context: &Rc<dyn ExecutionContext>) {
        for delegate in &self.delegates {
            delegate.on_context_created(context);
        }
    }

    /// Fan a context-released lifecycle event out to the delegates.
    pub fn context_released(&self, context: &Rc<dyn ExecutionContext>) {
        for delegate in &self.delegates {
            delegate.on_context_released(context);
        }
    }

    /// Dispatch an extension call named `name` made from script inside
    /// `context`.
    ///
    /// The reserved [`GET_ELAPSED_MILLISECONDS`] call is answered
    /// synchronously and sends nothing. Every other call is packaged into a
    /// [`ProcessMessage`]: if arguments are present, the first must be a
    /// callable, which is registered under a fresh [`CallbackId`]. The id
    /// travels as slot 0 (callables themselves are not transmissible), and
    /// the remaining arguments are converted into slots 1.. preserving their
    /// original index.
    ///
    /// Returns `Ok(Some(value))` for a synchronous result, `Ok(None)` when
    /// the call was accepted and forwarded.
    ///
    /// # Errors
    ///
    /// [`BridgeError::MissingCallback`] if arguments are present but the
    /// first is not callable (nothing is sent);
    /// [`BridgeError::ChannelClosed`] if the outbound channel is gone.
    ///
    /// # Panics
    ///
    /// If `context` is no longer bound to a live frame: extension calls can
    /// only originate inside a valid script context, so an unbound context
    /// is a programming error in the embedding.
    pub fn execute(
        &mut self,
        name: &str,
        args: &[ScriptValue],
        context: &Rc<dyn ExecutionContext>,
    ) -> BridgeResult<Option<ScriptValue>> {
        if name == GET_ELAPSED_MILLISECONDS {
            return Ok(Some(ScriptValue::Double(self.elapsed_ms())));
        }

        assert!(
            context.is_bound(),
            "extension call {name} dispatched outside a bound script context"
        );

        let mut outbound = ListValue::with_len(args.len());
        if let Some((first, rest)) = args.split_first() {
            let Some(function) = first.as_function() else {
                warn!(call = name, "Extension call made without a callback argument");
                return Err(BridgeError::MissingCallback {
                    call: name.to_owned(),
                });
            };

            let id = self.registry.allocate_id();
            self.registry.register(id, Rc::clone(context), Rc::clone(function));
            outbound.set(0, ListEntry::Int(id.as_i32()));

            for (offset, value) in rest.iter().enumerate() {
                set_slot(&mut outbound, offset.wrapping_add(1), value);
            }

            if self.registry.len() >= self.config.pending_warn_threshold {
                warn!(
                    pending = self.registry.len(),
                    threshold = self.config.pending_warn_threshold,
                    "Pending callback registry keeps growing; host replies may be going missing"
                );
            }
        }

        debug!(
            call = name,
            args = outbound.len(),
            "Forwarding extension call to the browser process"
        );
        self.sink.send(ProcessMessage::new(name, outbound))?;
        Ok(None)
    }

    /// Route an inbound message from the browser process.
    ///
    /// The message is offered to the delegate chain first; the first
    /// delegate to claim it stops the chain. An unclaimed
    /// [`INVOKE_CALLBACK_MESSAGE`] resolves its pending callback, re-enters
    /// the callback's original context, invokes it with the converted
    /// arguments from slots 1.., and retires the registry entry. A message
    /// naming an unknown or already-fired callback id is dropped with a
    /// warning, so a callback never fires twice.
    ///
    /// Returns whether anything (a delegate or the built-in callback
    /// invocation) handled the message.
    ///
    /// # Panics
    ///
    /// If `source` is not the browser process; no other process may talk to
    /// the renderer bridge.
    pub fn on_process_message(&mut self, source: ProcessId, message: &ProcessMessage) -> bool {
        assert_eq!(
            source,
            ProcessId::Browser,
            "renderer bridge received a message from a non-browser process"
        );

        for delegate in &self.delegates {
            if delegate.on_process_message(source, message) {
                return true;
            }
        }

        if message.name == INVOKE_CALLBACK_MESSAGE {
            return match self.invoke_pending_callback(message) {
                Ok(()) => true,
                Err(error) => {
                    warn!(%error, "Dropping invokeCallback message");
                    false
                },
            };
        }

        false
    }

    fn invoke_pending_callback(&mut self, message: &ProcessMessage) -> BridgeResult<()> {
        let ListEntry::Int(raw) = *message.args.get(0) else {
            return Err(BridgeError::MalformedCallbackId);
        };
        let id = CallbackId::from_raw(raw);

        let Some(pending) = self.registry.resolve_and_remove(id) else {
            return Err(BridgeError::UnknownCallback { id });
        };

        let args: Vec<ScriptValue> = (1..message.args.len())
            .map(|index| to_script(&message.args, index))
            .collect();

        debug!(%id, args = args.len(), "Invoking pending callback");

        // The scope guard keeps enter/exit paired even if the callback
        // unwinds; the callback's return value is ignored.
        let _scope = ContextScope::enter(pending.context);
        pending.function.invoke(&args);
        Ok(())
    }
}
