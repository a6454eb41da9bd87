//! End-to-end flow: script call → outbound channel → host reply →
//! callback completion in the original context.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shellbridge_renderer::prelude::*;

#[derive(Default)]
struct FakeContext {
    entered: Cell<u32>,
    exited: Cell<u32>,
}

impl ExecutionContext for FakeContext {
    fn enter(&self) {
        self.entered.set(self.entered.get().wrapping_add(1));
    }

    fn exit(&self) {
        self.exited.set(self.exited.get().wrapping_add(1));
    }

    fn is_bound(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct RecordingFunction {
    calls: RefCell<Vec<Vec<ScriptValue>>>,
}

impl ScriptFunction for RecordingFunction {
    fn invoke(&self, args: &[ScriptValue]) {
        self.calls.borrow_mut().push(args.to_vec());
    }
}

#[tokio::test]
async fn extension_call_round_trips_through_the_channel() {
    let (sink, mut outbound) = ChannelSink::new();
    let mut bridge = RendererBridge::new(BridgeConfig::default(), Box::new(sink));
    bridge.initialize();

    let context = Rc::new(FakeContext::default());
    let erased = Rc::clone(&context) as Rc<dyn ExecutionContext>;
    let function = Rc::new(RecordingFunction::default());

    let args = vec![
        ScriptValue::Function(Rc::clone(&function) as Rc<dyn ScriptFunction>),
        ScriptValue::String("/projects/readme.md".into()),
        ScriptValue::Array(vec![ScriptValue::Int(2), ScriptValue::Int(3)]),
    ];
    let result = bridge.execute("readFile", &args, &erased).unwrap();
    assert!(result.is_none());

    // The transport drains the channel and forwards to the browser process.
    let message = outbound.recv().await.unwrap();
    assert_eq!(message.name, "readFile");
    assert_eq!(message.args.len(), 3);
    assert_eq!(*message.args.get(0), ListEntry::Int(0));
    assert_eq!(
        *message.args.get(1),
        ListEntry::String("/projects/readme.md".into())
    );
    assert_eq!(bridge.pending_callbacks(), 1);

    // The host answers with the same id and two return values.
    let mut reply_args = ListValue::new();
    reply_args.set(0, message.args.get(0).clone());
    reply_args.set(1, ListEntry::String("contents".into()));
    reply_args.set(2, ListEntry::Int(42));
    let reply = ProcessMessage::new(INVOKE_CALLBACK_MESSAGE, reply_args);

    assert!(bridge.on_process_message(ProcessId::Browser, &reply));

    assert_eq!(context.entered.get(), 1);
    assert_eq!(context.exited.get(), 1);
    assert_eq!(bridge.pending_callbacks(), 0);

    let calls = function.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![ScriptValue::String("contents".into()), ScriptValue::Int(42)]
    );
}

#[tokio::test]
async fn elapsed_time_call_never_touches_the_channel() {
    let (sink, mut outbound) = ChannelSink::new();
    let mut bridge = RendererBridge::new(BridgeConfig::default(), Box::new(sink));
    let context = Rc::new(FakeContext::default()) as Rc<dyn ExecutionContext>;

    let result = bridge.execute(GET_ELAPSED_MILLISECONDS, &[], &context).unwrap();
    let Some(ScriptValue::Double(ms)) = result else {
        panic!("expected a synchronous double");
    };
    assert!(ms >= 0.0);

    drop(bridge);
    assert!(outbound.recv().await.is_none());
}

#[tokio::test]
async fn failed_dispatch_sends_nothing() {
    let (sink, mut outbound) = ChannelSink::new();
    let mut bridge = RendererBridge::new(BridgeConfig::default(), Box::new(sink));
    let context = Rc::new(FakeContext::default()) as Rc<dyn ExecutionContext>;

    let result = bridge.execute("readFile", &[ScriptValue::Int(7)], &context);
    assert!(matches!(result, Err(BridgeError::MissingCallback { .. })));

    drop(bridge);
    assert!(outbound.recv().await.is_none());
}
