use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};

use crate::webhook::{PromptSender, ReqwestSender, WebhookSettings};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Send { prompt: String },
}

/// Runs webhook requests on a background tokio runtime and reports completions.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: WebhookSettings) -> Result<Self, EngineError> {
        let sender = ReqwestSender::new(settings).map_err(EngineError::Client)?;
        Self::with_sender(Arc::new(sender))
    }

    pub fn with_sender(sender: Arc<dyn PromptSender>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("copywriter-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let sender = sender.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(sender.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn send(&self, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Send {
            prompt: prompt.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    sender: &dyn PromptSender,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Send { prompt } => {
            let result = sender.send(&prompt).await;
            match &result {
                Ok(text) => engine_info!("Reply received len={}", text.len()),
                Err(err) => engine_warn!("Request failed ({}): {}", err.kind, err),
            }
            let _ = event_tx.send(EngineEvent::RequestCompleted { result });
        }
    }
}
