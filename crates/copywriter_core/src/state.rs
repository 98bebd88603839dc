use crate::markdown::to_markdown;
use crate::view_model::{AppViewModel, NotificationView};

/// Ticks a notification stays visible (5 s at the app's 125 ms tick).
pub const NOTIFICATION_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    id: u64,
    severity: Severity,
    text: String,
    remaining_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    prompt: String,
    response: String,
    loading: bool,
    notifications: Vec<Notification>,
    next_notification_id: u64,
    spinner_step: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            prompt: self.prompt.clone(),
            response: self.response.clone(),
            response_markdown: to_markdown(&self.response),
            loading: self.loading,
            show_response: self.loading || !self.response.is_empty(),
            can_submit: !self.loading,
            can_copy: self.can_copy(),
            spinner_step: self.spinner_step,
            notifications: self
                .notifications
                .iter()
                .map(|n| NotificationView {
                    id: n.id,
                    severity: n.severity,
                    text: n.text.clone(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_copy(&self) -> bool {
        !self.loading && !self.response.is_empty()
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_prompt(&mut self, prompt: String) {
        if self.prompt != prompt {
            self.prompt = prompt;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.response.clear();
        self.spinner_step = 0;
        self.dirty = true;
    }

    pub(crate) fn finish_request(&mut self, response: String) {
        self.loading = false;
        self.response = response;
        self.dirty = true;
    }

    pub(crate) fn clear(&mut self) {
        self.prompt.clear();
        self.response.clear();
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id: self.next_notification_id,
            severity,
            text: text.into(),
            remaining_ticks: NOTIFICATION_TICKS,
        });
        self.dirty = true;
    }

    pub(crate) fn tick(&mut self) {
        let before = self.notifications.len();
        for notification in &mut self.notifications {
            notification.remaining_ticks = notification.remaining_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.remaining_ticks > 0);

        if self.loading {
            self.spinner_step = self.spinner_step.wrapping_add(1);
            self.dirty = true;
        }
        if self.notifications.len() != before {
            self.dirty = true;
        }
    }
}
