use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::constants::MAX_FILE_ROWS;

/// Screen regions of the form, recomputed on every draw and reused for mouse hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormAreas {
    pub header: Rect,
    pub drop_zone: Rect,
    pub file_list: Rect,
    pub query: Rect,
    pub submit: Rect,
    pub status: Rect,
    pub answer: Rect,
    pub footer: Rect,
}

impl FormAreas {
    pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
        rect.contains(Position::new(column, row))
    }
}

pub fn compute(area: Rect, file_count: usize) -> FormAreas {
    let file_rows = if file_count == 0 {
        0
    } else {
        // Header line plus the visible names.
        file_count.min(MAX_FILE_ROWS) as u16 + 1
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(file_rows),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    FormAreas {
        header: chunks[0],
        drop_zone: chunks[1],
        file_list: chunks[2],
        query: chunks[3],
        submit: chunks[4],
        status: chunks[5],
        answer: chunks[6],
        footer: chunks[7],
    }
}
