use crate::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub prompt: String,
    /// Normalized reply text or error message; this is what Copy puts on the clipboard.
    pub response: String,
    pub response_markdown: String,
    pub loading: bool,
    /// The response section is visible while loading or once a response exists.
    pub show_response: bool,
    pub can_submit: bool,
    pub can_copy: bool,
    pub spinner_step: u64,
    /// Oldest first.
    pub notifications: Vec<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
}
