use crate::markdown::normalize_escaped_newlines;
use crate::{AppState, Effect, Msg, Severity};

pub const EMPTY_PROMPT_NOTICE: &str = "Please enter a prompt";
pub const RESPONSE_RECEIVED_NOTICE: &str = "Response received successfully!";
pub const REQUEST_FAILED_NOTICE: &str =
    "Failed to get response. Please check your connection and try again.";
pub const COPIED_NOTICE: &str = "Response copied to clipboard!";
pub const COPY_FAILED_NOTICE: &str = "Failed to copy to clipboard";

/// Prefix of the response text shown when a request fails.
pub const ERROR_PREFIX: &str = "Error: ";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(text) => {
            // The prompt box is read-only while a request is pending.
            if !state.is_loading() {
                state.set_prompt(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.is_loading() {
                return (state, Vec::new());
            }
            if state.prompt().trim().is_empty() {
                state.notify(Severity::Error, EMPTY_PROMPT_NOTICE);
                return (state, Vec::new());
            }
            state.begin_request();
            vec![Effect::SendPrompt {
                prompt: state.prompt().to_owned(),
            }]
        }
        Msg::ClearClicked => {
            // Does not cancel a pending request; its reply still lands.
            state.clear();
            Vec::new()
        }
        Msg::CopyClicked => {
            if state.can_copy() {
                vec![Effect::CopyToClipboard {
                    text: state.response().to_owned(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ReplyReceived(text) => {
            state.finish_request(normalize_escaped_newlines(&text));
            state.notify(Severity::Success, RESPONSE_RECEIVED_NOTICE);
            Vec::new()
        }
        Msg::RequestFailed(reason) => {
            state.finish_request(format!("{ERROR_PREFIX}{reason}"));
            state.notify(Severity::Error, REQUEST_FAILED_NOTICE);
            Vec::new()
        }
        Msg::CopySucceeded => {
            state.notify(Severity::Success, COPIED_NOTICE);
            Vec::new()
        }
        Msg::CopyFailed => {
            state.notify(Severity::Error, COPY_FAILED_NOTICE);
            Vec::new()
        }
        Msg::Tick => {
            state.tick();
            Vec::new()
        }
    };

    (state, effects)
}
