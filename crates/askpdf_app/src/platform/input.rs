//! Terminal input → core messages.
//!
//! Holds the bits of form state that only matter to the terminal: focus, the
//! path being typed, answer scroll and the spinner frame.

use askpdf_core::{parse_path_list, AppViewModel, DropZone, Msg};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::ui::constants::{SCROLL_STEP, SPINNER_FRAMES};
use super::ui::layout::FormAreas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Files,
    Query,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Files => Focus::Query,
            Focus::Query => Focus::Submit,
            Focus::Submit => Focus::Files,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Files => Focus::Submit,
            Focus::Query => Focus::Files,
            Focus::Submit => Focus::Query,
        }
    }
}

#[derive(Debug, Default)]
pub struct FormUi {
    pub focus: Focus,
    pub path_input: String,
    pub answer_scroll: u16,
    pub(crate) spinner_frame: usize,
    pub(crate) quit: bool,
}

impl FormUi {
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        view: &AppViewModel,
        areas: &FormAreas,
    ) -> Vec<Msg> {
        match event {
            Event::Key(key) => self.handle_key(*key, view),
            Event::Paste(text) => self.handle_paste(text, view),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, view, areas),
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, view: &AppViewModel) -> Vec<Msg> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                Vec::new()
            }
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                Vec::new()
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Vec::new()
            }
            KeyCode::PageUp => {
                self.answer_scroll = self.answer_scroll.saturating_sub(SCROLL_STEP);
                Vec::new()
            }
            KeyCode::PageDown => {
                self.answer_scroll = self.answer_scroll.saturating_add(SCROLL_STEP);
                Vec::new()
            }
            KeyCode::Enter => match self.focus {
                Focus::Files => {
                    // Nothing typed: keep whatever was dropped.
                    let files = parse_path_list(&std::mem::take(&mut self.path_input));
                    if files.is_empty() {
                        return Vec::new();
                    }
                    self.focus = Focus::Query;
                    vec![Msg::FilesSelected(files)]
                }
                Focus::Query | Focus::Submit => self.submit(),
            },
            KeyCode::Backspace => match self.focus {
                Focus::Files => {
                    self.path_input.pop();
                    Vec::new()
                }
                Focus::Query => {
                    let mut query = view.query.clone();
                    query.pop();
                    vec![Msg::QueryChanged(query)]
                }
                Focus::Submit => Vec::new(),
            },
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                match self.focus {
                    Focus::Files => {
                        self.path_input.push(ch);
                        Vec::new()
                    }
                    Focus::Query => {
                        let mut query = view.query.clone();
                        query.push(ch);
                        vec![Msg::QueryChanged(query)]
                    }
                    Focus::Submit if ch == ' ' => self.submit(),
                    Focus::Submit => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// Terminals deliver a file drop as a paste of its path(s).
    ///
    /// In the query field only absolute paths (which is what terminals send,
    /// `file://` URLs included) count as a drop, so a word that happens to
    /// name a file in the working directory stays part of the question.
    fn handle_paste(&mut self, text: &str, view: &AppViewModel) -> Vec<Msg> {
        let dropped = parse_path_list(text);
        let is_drop = !dropped.is_empty()
            && dropped.iter().all(|file| {
                file.path.is_file() && (self.focus != Focus::Query || file.path.is_absolute())
            });
        if is_drop {
            return vec![Msg::FilesDropped(dropped)];
        }

        let flattened = text.replace(['\r', '\n'], " ");
        match self.focus {
            Focus::Files => {
                self.path_input.push_str(&flattened);
                Vec::new()
            }
            Focus::Query => vec![Msg::QueryChanged(format!("{}{}", view.query, flattened))],
            Focus::Submit => Vec::new(),
        }
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        view: &AppViewModel,
        areas: &FormAreas,
    ) -> Vec<Msg> {
        let over_zone = FormAreas::hit(areas.drop_zone, mouse.column, mouse.row);
        let dragging = view.drop_zone == DropZone::Dragging;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if over_zone {
                    self.focus = Focus::Files;
                } else if FormAreas::hit(areas.query, mouse.column, mouse.row) {
                    self.focus = Focus::Query;
                } else if FormAreas::hit(areas.submit, mouse.column, mouse.row) {
                    self.focus = Focus::Submit;
                    return self.submit();
                }
                Vec::new()
            }
            MouseEventKind::Drag(MouseButton::Left) if over_zone && !dragging => {
                vec![Msg::DragOver]
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved if !over_zone && dragging => {
                vec![Msg::DragLeave]
            }
            MouseEventKind::Up(_) if dragging => vec![Msg::DragLeave],
            MouseEventKind::ScrollUp if FormAreas::hit(areas.answer, mouse.column, mouse.row) => {
                self.answer_scroll = self.answer_scroll.saturating_sub(1);
                Vec::new()
            }
            MouseEventKind::ScrollDown
                if FormAreas::hit(areas.answer, mouse.column, mouse.row) =>
            {
                self.answer_scroll = self.answer_scroll.saturating_add(1);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn submit(&mut self) -> Vec<Msg> {
        self.answer_scroll = 0;
        vec![Msg::SubmitClicked]
    }
}
