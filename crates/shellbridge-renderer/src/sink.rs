//! The outbound channel to the browser process.

use tokio::sync::mpsc;
use tracing::trace;

use crate::error::{BridgeError, BridgeResult};
use crate::message::ProcessMessage;

/// Where outbound messages go.
///
/// This is the one asynchronous boundary of the bridge: `send` hands the
/// message off without blocking and without waiting for the host to process
/// it; the eventual reply arrives as an independent inbound message.
pub trait MessageSink {
    /// Transfer ownership of `message` to the channel.
    ///
    /// # Errors
    ///
    /// [`BridgeError::ChannelClosed`] if the host side of the channel is
    /// gone.
    fn send(&self, message: ProcessMessage) -> BridgeResult<()>;
}

/// A [`MessageSink`] backed by an unbounded tokio channel.
///
/// The embedding transport owns the receiving half and forwards each message
/// to the browser process.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<ProcessMessage>,
}

impl ChannelSink {
    /// Create a sink and the receiver the transport drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProcessMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl MessageSink for ChannelSink {
    fn send(&self, message: ProcessMessage) -> BridgeResult<()> {
        trace!(name = %message.name, "Queueing outbound process message");
        self.sender
            .send(message)
            .map_err(|_| BridgeError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use shellbridge_values::ListValue;

    use super::*;

    #[tokio::test]
    async fn sent_messages_reach_the_receiver() {
        let (sink, mut receiver) = ChannelSink::new();
        sink.send(ProcessMessage::new("openFile", ListValue::new()))
            .unwrap();

        let received = receiver.recv().await.unwrap();
        assert_eq!(received.name, "openFile");
    }

    #[tokio::test]
    async fn send_after_receiver_drop_is_channel_closed() {
        let (sink, receiver) = ChannelSink::new();
        drop(receiver);

        let result = sink.send(ProcessMessage::new("openFile", ListValue::new()));
        assert!(matches!(result, Err(BridgeError::ChannelClosed)));
    }
}
