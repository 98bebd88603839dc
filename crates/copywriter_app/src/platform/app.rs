use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use copywriter_core::{update, AppState, Msg};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use engine_logging::{engine_debug, engine_info, LogDestination};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::config::load_config;
use super::effects::EffectRunner;
use super::input::{self, KeyAction};
use super::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_millis(125);
const POLL_INTERVAL: Duration = Duration::from_millis(30);

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, source) = load_config(&cwd);
    engine_logging::initialize(
        LogDestination::File(config.log_file.clone()),
        config.log_level(),
    );
    source.log();

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config.webhook_settings(), msg_tx.clone())
        .context("failed to start the webhook engine")?;

    // Background tick to expire notifications and animate the spinner.
    thread::spawn(move || {
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut terminal = setup_terminal().context("failed to set up the terminal")?;
    let mut session = Session::new(effects, msg_rx);
    let result = session.run(&mut terminal);
    restore_terminal(&mut terminal).context("failed to restore the terminal")?;

    engine_info!("Session ended");
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()
}

struct Session {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    response_scroll: u16,
    response_viewport: Rect,
    redraw: bool,
}

impl Session {
    fn new(effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            effects,
            msg_rx,
            response_scroll: 0,
            response_viewport: Rect::default(),
            redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        loop {
            self.process_pending_messages();

            if std::mem::take(&mut self.redraw) {
                let view = self.state.view();
                let scroll = self.response_scroll;
                let mut viewport = self.response_viewport;
                terminal.draw(|frame| {
                    viewport = ui::layout::response_viewport(frame.area());
                    ui::render::render(frame, &view, scroll);
                })?;
                self.response_viewport = viewport;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match input::map_key(key, self.state.prompt()) {
                        KeyAction::Msg(msg) => self.dispatch_msg(msg),
                        KeyAction::Scroll(delta) => self.scroll_response(delta),
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Ignore => {}
                    }
                }
                Event::Paste(text) => {
                    let msg = input::paste(self.state.prompt(), &text);
                    self.dispatch_msg(msg);
                }
                Event::Resize(..) => self.redraw = true,
                _ => {}
            }
        }
    }

    fn process_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        if !matches!(msg, Msg::Tick) {
            engine_debug!("Dispatch {}", msg_label(&msg));
        }
        let resets_scroll = matches!(
            msg,
            Msg::SubmitClicked | Msg::ClearClicked | Msg::ReplyReceived(_) | Msg::RequestFailed(_)
        );

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        }
        self.state = state;

        if resets_scroll {
            self.response_scroll = 0;
        }
        self.effects.enqueue(effects);
    }

    fn scroll_response(&mut self, delta: i32) {
        let max = ui::render::max_response_scroll(
            &self.state.view().response_markdown,
            self.response_viewport,
        );
        let next = (i64::from(self.response_scroll) + i64::from(delta)).clamp(0, i64::from(max));
        let next = u16::try_from(next).unwrap_or(max);
        if next != self.response_scroll {
            self.response_scroll = next;
            self.redraw = true;
        }
    }
}

// Prompt and reply text stay out of the log.
fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::PromptChanged(_) => "PromptChanged",
        Msg::SubmitClicked => "SubmitClicked",
        Msg::ClearClicked => "ClearClicked",
        Msg::CopyClicked => "CopyClicked",
        Msg::ReplyReceived(_) => "ReplyReceived",
        Msg::RequestFailed(_) => "RequestFailed",
        Msg::CopySucceeded => "CopySucceeded",
        Msg::CopyFailed => "CopyFailed",
        Msg::Tick => "Tick",
    }
}
