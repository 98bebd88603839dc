//! Copywriter core: pure state machine, view-model helpers and reply formatting.
mod effect;
mod markdown;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use markdown::{normalize_escaped_newlines, to_markdown};
pub use msg::Msg;
pub use state::{AppState, Severity, NOTIFICATION_TICKS};
pub use update::{
    update, COPIED_NOTICE, COPY_FAILED_NOTICE, EMPTY_PROMPT_NOTICE, ERROR_PREFIX,
    REQUEST_FAILED_NOTICE, RESPONSE_RECEIVED_NOTICE,
};
pub use view_model::{AppViewModel, NotificationView};
