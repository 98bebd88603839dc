use ratatui::style::Color;

pub const TITLE: &str = "Copywriter Assistant";
pub const LABEL_PROMPT: &str = "Zadajte váš prompt:";
pub const PLACEHOLDER_PROMPT: &str = "Napíšte vašu správu sem...";
pub const BUTTON_SEND: &str = "Odoslať";
pub const BUTTON_SENDING: &str = "Odosiela sa...";
pub const BUTTON_CLEAR: &str = "Vymazať";
pub const BUTTON_COPY: &str = "Kopírovať odpoveď";
pub const LABEL_RESPONSE: &str = "Odpoveď:";
pub const LABEL_WAITING: &str = "Čakám na odpoveď...";
pub const KEY_HINTS: &str = "Ctrl+S odoslať · Ctrl+L vymazať · Ctrl+Y kopírovať · ↑/↓ PgUp/PgDn posun · Esc koniec";

pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const ACCENT: Color = Color::Rgb(101, 150, 243);
pub const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 245);
pub const TEXT_MUTED: Color = Color::Rgb(105, 116, 133);
pub const BORDER_DIM: Color = Color::Rgb(45, 50, 60);
pub const SUCCESS: Color = Color::Rgb(131, 179, 102);
pub const ERROR: Color = Color::Rgb(204, 92, 68);

pub const GREETING: Color = Color::Rgb(97, 175, 239);
pub const HEADING: Color = Color::Rgb(178, 220, 226);
pub const DIVIDER: Color = Color::Rgb(70, 85, 110);
pub const BOLD: Color = Color::Rgb(224, 208, 183);
pub const ITALIC: Color = Color::Rgb(152, 195, 121);
pub const LIST_BULLET: Color = Color::Rgb(198, 120, 221);
