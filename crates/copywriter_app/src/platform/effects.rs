use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use copywriter_core::{Effect, Msg};
use copywriter_engine::{EngineError, EngineEvent, EngineHandle, WebhookSettings};
use engine_logging::{engine_info, engine_warn};

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    clipboard: Option<Clipboard>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: WebhookSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        engine_info!(
            "Webhook url={} timeout_ms={}",
            settings.url,
            settings.request_timeout.as_millis()
        );
        let engine = Arc::new(EngineHandle::new(settings)?);
        let runner = Self {
            engine,
            // Opened lazily; on X11 the copied text lives as long as this handle.
            clipboard: None,
            msg_tx,
        };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendPrompt { prompt } => {
                    engine_info!("SendPrompt prompt_len={}", prompt.len());
                    self.engine.send(prompt);
                }
                Effect::CopyToClipboard { text } => {
                    let result = self.copy(&text);
                    let _ = self.msg_tx.send(copy_outcome(result, &text));
                }
            }
        }
    }

    fn copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(Duration::from_millis(100)) {
                if msg_tx.send(event_to_msg(event)).is_err() {
                    break;
                }
            }
        });
    }
}

fn copy_outcome(result: Result<(), arboard::Error>, text: &str) -> Msg {
    match result {
        Ok(()) => {
            engine_info!("Copied {} chars to clipboard", text.chars().count());
            Msg::CopySucceeded
        }
        Err(err) => {
            engine_warn!("Clipboard copy failed: {}", err);
            Msg::CopyFailed
        }
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RequestCompleted { result: Ok(text) } => Msg::ReplyReceived(text),
        EngineEvent::RequestCompleted { result: Err(err) } => Msg::RequestFailed(err.to_string()),
    }
}
