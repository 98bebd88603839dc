#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendPrompt { prompt: String },
    CopyToClipboard { text: String },
}
