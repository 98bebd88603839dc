#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the prompt box (full new text).
    PromptChanged(String),
    /// User pressed Send.
    SubmitClicked,
    /// User pressed Clear.
    ClearClicked,
    /// User pressed Copy.
    CopyClicked,
    /// Engine delivered the reply text for the pending request.
    ReplyReceived(String),
    /// Engine failed the pending request; carries the error description.
    RequestFailed(String),
    /// Clipboard accepted the copied text.
    CopySucceeded,
    /// Clipboard rejected the copied text.
    CopyFailed,
    /// UI timer tick.
    Tick,
}
