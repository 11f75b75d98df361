use std::io::stdout;
use std::time::Duration;

use anyhow::Context;
use askpdf_core::{update, AppState, Msg};
use askpdf_logging::{askpdf_debug, askpdf_info};
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::DefaultTerminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::FormUi;
use super::ui;
use super::ui::layout::FormAreas;

/// How long to wait for terminal input before checking engine results.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    askpdf_info!("Starting form, backend={}", config.backend_url);
    let runner = EffectRunner::new(config.submit_settings()).context("starting engine")?;

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    // Bracketed paste is how terminals hand over dropped files.
    if let Err(err) = execute!(stdout(), EnableBracketedPaste, EnableMouseCapture) {
        ratatui::restore();
        return Err(err).context("enabling paste and mouse capture");
    }

    let result = FormApp::new(runner).run(&mut terminal);

    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
    result
}

struct FormApp {
    state: AppState,
    ui: FormUi,
    areas: FormAreas,
    runner: EffectRunner,
}

impl FormApp {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            ui: FormUi::default(),
            areas: FormAreas::default(),
            runner,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let mut needs_draw = true;

        while !self.ui.should_quit() {
            for msg in self.runner.poll() {
                self.dispatch_msg(msg);
            }
            if self.state.consume_dirty() {
                needs_draw = true;
            }

            if needs_draw {
                self.draw(terminal)?;
                needs_draw = false;
            }

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                let view = self.state.view();
                for msg in self.ui.handle_event(&event, &view, &self.areas) {
                    self.dispatch_msg(msg);
                }
                needs_draw = true;
            } else if self.state.is_loading() {
                self.ui.advance_spinner();
                needs_draw = true;
            }
        }

        askpdf_info!("Form closed");
        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let view = self.state.view();
        let form_ui = &self.ui;
        let mut areas = self.areas;
        terminal.draw(|frame| {
            areas = ui::layout::compute(frame.area(), view.file_count);
            ui::render::render(frame, &areas, &view, form_ui);
        })?;
        self.areas = areas;
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        askpdf_debug!("dispatch {}", msg_label(&msg));
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }
}

/// Message name without payload; queries and answers stay out of debug logs.
fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::FilesSelected(_) => "FilesSelected",
        Msg::DragOver => "DragOver",
        Msg::DragLeave => "DragLeave",
        Msg::FilesDropped(_) => "FilesDropped",
        Msg::QueryChanged(_) => "QueryChanged",
        Msg::SubmitClicked => "SubmitClicked",
        Msg::SubmitCompleted { .. } => "SubmitCompleted",
    }
}
