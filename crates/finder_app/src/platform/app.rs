use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use finder_core::{update, AppState, Msg};
use finder_logging::{finder_error, finder_info, finder_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{self, ConfigSource};
use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::input::UiAction;

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path_from_args(std::env::args());
    let loaded = config::load_config(&config_path)?;
    let requested = loaded.config.log_destination;
    let destination = requested.for_ui();
    logging::initialize(
        destination,
        finder_logging::parse_level(&loaded.config.log_level),
    );
    if destination != requested {
        finder_warn!(
            "log_destination {:?} would draw over the UI; logging to {} instead",
            requested,
            logging::LOG_FILENAME
        );
    }
    match &loaded.source {
        ConfigSource::File(path) => finder_info!("Loaded config from {:?}", path),
        ConfigSource::Defaults => finder_info!("No config at {:?}; using defaults", config_path),
    }

    let runner = EffectRunner::new(loaded.config.extract_settings())
        .context("failed to start extraction engine")?;
    let state = AppState::with_ordering(loaded.config.response_ordering.into());
    let mut app = App::new(state, runner);

    let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
    let result = app.run(&mut guard.terminal);
    if let Err(err) = &result {
        finder_error!("UI loop failed: {:#}", err);
    }
    finder_info!("Exiting");
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    should_quit: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        self.draw(terminal)?;

        while !self.should_quit {
            let mut resized = false;
            if event::poll(ui::constants::POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = ui::input::map_key(
                            key,
                            self.state.url_input(),
                            !self.state.is_loading(),
                        );
                        if let Some(action) = action {
                            self.handle_action(action);
                        }
                    }
                    Event::Paste(text) => {
                        let edited = ui::input::apply_paste(self.state.url_input(), &text);
                        self.dispatch_msg(Msg::InputChanged(edited));
                    }
                    Event::Resize(..) => resized = true,
                    _ => {}
                }
            }

            for msg in self.runner.drain_events() {
                self.dispatch_msg(msg);
            }

            if self.state.consume_dirty() || resized {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Edit(text) => self.dispatch_msg(Msg::InputChanged(text)),
            UiAction::Submit => self.dispatch_msg(Msg::SubmitRequested),
            UiAction::Quit => self.should_quit = true,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn draw(&self, terminal: &mut AppTerminal) -> io::Result<()> {
        let view = self.state.view();
        terminal.draw(|frame| ui::render::render(frame, &view))?;
        Ok(())
    }
}

/// Owns the terminal in raw/alternate-screen mode and restores it on drop.
struct TerminalGuard {
    terminal: AppTerminal,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                Err(err)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}
