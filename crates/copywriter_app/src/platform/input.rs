use copywriter_core::Msg;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Response scroll step for PageUp/PageDown.
const PAGE_LINES: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Msg(Msg),
    Scroll(i32),
    Quit,
    Ignore,
}

/// Maps a key press to an action, given the current prompt text.
pub fn map_key(key: KeyEvent, prompt: &str) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('s') if ctrl => KeyAction::Msg(Msg::SubmitClicked),
        KeyCode::Char('l') if ctrl => KeyAction::Msg(Msg::ClearClicked),
        KeyCode::Char('y') if ctrl => KeyAction::Msg(Msg::CopyClicked),
        KeyCode::Char(_) if ctrl => KeyAction::Ignore,
        KeyCode::Char(c) => KeyAction::Msg(Msg::PromptChanged(format!("{prompt}{c}"))),
        KeyCode::Enter => KeyAction::Msg(Msg::PromptChanged(format!("{prompt}\n"))),
        KeyCode::Backspace if !prompt.is_empty() => {
            let mut text = prompt.to_owned();
            text.pop();
            KeyAction::Msg(Msg::PromptChanged(text))
        }
        KeyCode::Up => KeyAction::Scroll(-1),
        KeyCode::Down => KeyAction::Scroll(1),
        KeyCode::PageUp => KeyAction::Scroll(-PAGE_LINES),
        KeyCode::PageDown => KeyAction::Scroll(PAGE_LINES),
        _ => KeyAction::Ignore,
    }
}

/// Appends bracketed-paste text to the prompt, keeping its line breaks.
pub fn paste(prompt: &str, text: &str) -> Msg {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Msg::PromptChanged(format!("{prompt}{text}"))
}
