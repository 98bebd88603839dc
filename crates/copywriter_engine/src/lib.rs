//! Copywriter engine: webhook IO and effect execution.
mod engine;
mod reply;
mod types;
mod webhook;

pub use engine::EngineHandle;
pub use reply::{reply_text, server_error_message};
pub use types::{EngineError, EngineEvent, FailureKind, SendError};
pub use webhook::{
    utc_timestamp, Clock, PromptRequest, PromptSender, ReqwestSender, WebhookSettings,
    DEFAULT_WEBHOOK_URL,
};
