use askpdf_core::{AppViewModel, DropZone, LOADING_HINT};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::FormAreas;
use crate::platform::input::{Focus, FormUi};

pub fn render(frame: &mut Frame, areas: &FormAreas, view: &AppViewModel, ui: &FormUi) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {KEY_HELP}"), Style::default().fg(Color::DarkGray)),
        ])),
        areas.header,
    );

    render_drop_zone(frame, areas.drop_zone, view, ui);
    render_file_list(frame, areas.file_list, view);
    render_query(frame, areas.query, view, ui);
    render_submit(frame, areas.submit, view, ui);

    if view.loading {
        frame.render_widget(
            Paragraph::new(format!("{} {}", ui.spinner(), LOADING_HINT))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            areas.status,
        );
    }

    if let Some(answer) = &view.answer {
        frame.render_widget(
            Paragraph::new(answer.as_str())
                .block(
                    Block::default()
                        .title(ANSWER_TITLE)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                )
                .wrap(Wrap { trim: false })
                .scroll((ui.answer_scroll, 0)),
            areas.answer,
        );
    }

    frame.render_widget(
        Paragraph::new(FOOTER)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        areas.footer,
    );
}

fn render_drop_zone(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &FormUi) {
    let zone_color = match view.drop_zone {
        DropZone::Dragging => Color::Blue,
        DropZone::HasFiles => Color::Green,
        DropZone::Empty => Color::DarkGray,
    };
    let focused = ui.focus == Focus::Files;

    let lines = vec![
        Line::from(Span::styled(
            DROP_HINT,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DROP_SUBHINT, Style::default().fg(Color::Gray))),
        Line::from(format!("> {}", ui.path_input)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(focus_block("Files", focused).border_style(Style::default().fg(zone_color))),
        area,
    );

    if focused {
        // "> " prefix, centred line.
        let line_width = text_width(&ui.path_input).saturating_add(2);
        let inner_width = area.width.saturating_sub(2);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(inner_width.saturating_sub(line_width) / 2)
            .saturating_add(line_width);
        place_cursor(frame, area, x, area.y.saturating_add(3));
    }
}

fn render_file_list(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if view.file_count == 0 || area.height == 0 {
        return;
    }
    let mut lines = vec![Line::from(Span::styled(
        format!("{} file(s) selected:", view.file_count),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let visible = usize::from(area.height.saturating_sub(1));
    for row in view.files.iter().take(visible) {
        let mut spans = vec![Span::raw("  • "), Span::raw(row.name.as_str())];
        if !row.is_pdf {
            spans.push(Span::styled(
                " (not a PDF)",
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(spans));
    }
    if view.file_count > visible {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(
                format!("  (+{} more)", view.file_count - visible),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_query(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &FormUi) {
    let focused = ui.focus == Focus::Query;
    let text = if view.query.is_empty() {
        Span::styled(QUERY_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.query.as_str())
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).block(focus_block("Question", focused)),
        area,
    );

    if focused {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(text_width(&view.query));
        place_cursor(frame, area, x, area.y.saturating_add(1));
    }
}

fn render_submit(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &FormUi) {
    let style = if view.submit_enabled {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(view.submit_label)
            .style(style)
            .alignment(Alignment::Center)
            .block(focus_block("", ui.focus == Focus::Submit)),
        area,
    );
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block
            .border_style(Style::default().fg(Color::Cyan))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

/// Character count clamped to the terminal coordinate range.
fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn place_cursor(frame: &mut Frame, area: Rect, x: u16, y: u16) {
    let max_x = area.x.saturating_add(area.width).saturating_sub(2);
    frame.set_cursor_position(Position::new(x.min(max_x), y));
}
