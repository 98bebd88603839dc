use std::sync::{Arc, Mutex};
use std::time::Duration;

use copywriter_engine::{EngineEvent, EngineHandle, FailureKind, PromptSender, SendError};

#[derive(Default)]
struct ScriptedSender {
    prompts: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl PromptSender for ScriptedSender {
    async fn send(&self, prompt: &str) -> Result<String, SendError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt == "fail" {
            return Err(SendError::new(
                FailureKind::Timeout,
                "timeout of 30000ms exceeded",
            ));
        }
        Ok(format!("reply to {prompt}"))
    }
}

#[test]
fn engine_reports_reply_for_sent_prompt() {
    let sender = Arc::new(ScriptedSender::default());
    let engine = EngineHandle::with_sender(sender.clone()).expect("engine");
    assert!(engine.try_recv().is_none());

    engine.send("hello");
    let event = engine.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        EngineEvent::RequestCompleted {
            result: Ok("reply to hello".to_string())
        }
    );
    assert_eq!(*sender.prompts.lock().unwrap(), vec!["hello".to_string()]);
}

#[test]
fn engine_reports_failures() {
    let engine = EngineHandle::with_sender(Arc::new(ScriptedSender::default())).expect("engine");

    engine.send("fail");
    let event = engine.recv_timeout(Duration::from_secs(5)).expect("event");

    match event {
        EngineEvent::RequestCompleted { result: Err(err) } => {
            assert_eq!(err.kind, FailureKind::Timeout);
            assert_eq!(err.to_string(), "timeout of 30000ms exceeded");
        }
        other => panic!("unexpected event {other:?}"),
    }
}
