//! Multi-step application form: step indicator, fields and actions

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::platform::{
    ADD_RECORD_SHORTCUT, BACK_SHORTCUT, NEXT_SHORTCUT, REMOVE_RECORD_SHORTCUT, SUBMIT_SHORTCUT,
};
use crate::state::{FieldSlot, FormSession};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::centered_column;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};

const FORM_WIDTH: u16 = 80;

/// One vertical item of the field list
enum Row<'a> {
    RecordHeader(usize),
    Field { index: usize, slot: FieldSlot<'a> },
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::RecordHeader(_) => 1,
            Row::Field { slot, .. } => field_height(slot.field),
        }
    }
}

/// Field slots with a header in front of every group record
fn build_rows(slots: Vec<FieldSlot<'_>>) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(slots.len());
    let mut last_record = None;
    for (index, slot) in slots.into_iter().enumerate() {
        if slot.record.is_some() && slot.record != last_record {
            rows.push(Row::RecordHeader(slot.record.unwrap_or_default()));
        }
        last_record = slot.record;
        rows.push(Row::Field { index, slot });
    }
    rows
}

/// First row to draw so the focused field fits in `height`
fn first_visible_row(heights: &[u16], focused_row: usize, height: u16) -> usize {
    let mut start = 0;
    while start < focused_row {
        let needed: u16 = heights[start..=focused_row].iter().sum();
        if needed <= height {
            break;
        }
        start += 1;
    }
    start
}

pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.form.as_ref() else {
        return;
    };
    let area = centered_column(area, FORM_WIDTH);
    let banner_height = if session.submit_error().is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Heading + step indicator
            Constraint::Length(banner_height), // Submission failure
            Constraint::Min(3),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Back / Next / Submit
            Constraint::Length(1),             // Shortcuts
        ])
        .split(area);

    draw_header(frame, chunks[0], session);
    if let Some(message) = session.submit_error() {
        draw_failure_banner(frame, chunks[1], message);
    }
    draw_fields(frame, chunks[2], session);
    draw_actions(frame, chunks[3], session);
    draw_shortcuts(frame, chunks[4], session);
}

fn draw_header(frame: &mut Frame, area: Rect, session: &FormSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        session.kind().heading(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    if session.section_count() > 1 {
        let step = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Step {} of {}: ", session.section(), session.section_count()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                session.section_title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(step, chunks[1]);

        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label("")
            .ratio(session.section() as f64 / session.section_count() as f64);
        frame.render_widget(gauge, chunks[2]);
    } else {
        let title = Paragraph::new(Span::styled(
            session.section_title(),
            Style::default().fg(Color::Cyan),
        ));
        frame.render_widget(title, chunks[1]);
    }
}

fn draw_failure_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(vec![
            Span::raw("Your answers are kept. Press "),
            Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(" to try again."),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                " Submission failed ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    let focus = session.focus();
    let rows = build_rows(session.slots());
    let heights: Vec<u16> = rows.iter().map(Row::height).collect();
    let focused_row = rows
        .iter()
        .position(|row| matches!(row, Row::Field { index, .. } if *index == focus))
        .unwrap_or(0);
    let start = first_visible_row(&heights, focused_row, area.height);

    let mut y = area.y;
    for (row, height) in rows.iter().zip(&heights).skip(start) {
        if y + height > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, *height);
        match row {
            Row::RecordHeader(record) => {
                let header = Paragraph::new(Span::styled(
                    format!("Co-founder {}", record + 1),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ));
                frame.render_widget(header, row_area);
            }
            Row::Field { index, slot } => {
                let error = session.errors().get(&slot.key);
                draw_field(frame, row_area, slot.field, *index == focus, error);
            }
        }
        y += height;
    }
}

fn draw_actions(frame: &mut Frame, area: Rect, session: &FormSession) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(0),
            Constraint::Length(34),
        ])
        .split(area);

    let submitting = session.is_submitting();
    if session.section_count() > 1 {
        render_button(
            frame,
            chunks[0],
            &format!("Back ({BACK_SHORTCUT})"),
            None,
            !session.is_first_section() && !submitting,
        );
    }

    let (label, accent) = if submitting {
        ("Submitting...".to_string(), Color::Yellow)
    } else if session.is_last_section() {
        (
            format!("{} ({SUBMIT_SHORTCUT})", session.kind().submit_label()),
            Color::Green,
        )
    } else {
        (format!("Next ({NEXT_SHORTCUT})"), Color::Cyan)
    };
    render_button(frame, chunks[2], &label, Some(accent), !submitting);
}

fn draw_shortcuts(frame: &mut Frame, area: Rect, session: &FormSession) {
    let hint = Style::default().fg(Color::DarkGray);
    let key = Style::default().fg(Color::Gray);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::styled(" field  ", hint),
        Span::styled("←/→", key),
        Span::styled(" choose  ", hint),
    ];
    if session.slots().iter().any(|slot| slot.record.is_some()) {
        spans.extend([
            Span::styled(ADD_RECORD_SHORTCUT, key),
            Span::styled(" add co-founder  ", hint),
            Span::styled(REMOVE_RECORD_SHORTCUT, key),
            Span::styled(" remove  ", hint),
        ]);
    }
    spans.extend([Span::styled("Esc", key), Span::styled(" leave", hint)]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormKind;

    #[test]
    fn test_first_visible_row_keeps_focus_on_screen() {
        let heights = [3, 3, 3, 6, 3];
        assert_eq!(first_visible_row(&heights, 0, 10), 0);
        assert_eq!(first_visible_row(&heights, 2, 10), 0);
        assert_eq!(first_visible_row(&heights, 3, 10), 2);
        assert_eq!(first_visible_row(&heights, 4, 10), 3);
    }

    #[test]
    fn test_record_headers_precede_each_record() {
        let mut session = FormSession::new(FormKind::CohortApply);
        session.set_fields([
            ("fullName", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("location", "London"),
        ]);
        session.next();
        session.set_fields([
            ("startupName", "Engine Co"),
            ("idea", "Analytical engines"),
            ("stage", "Idea"),
            ("isPivot", "No"),
        ]);
        session.next();
        session.set_field("hasCoFounders", "Yes");
        session.add_co_founder();

        let rows = build_rows(session.slots());
        let headers: Vec<usize> = rows
            .iter()
            .filter_map(|row| match row {
                Row::RecordHeader(record) => Some(*record),
                Row::Field { .. } => None,
            })
            .collect();
        assert_eq!(headers, vec![0, 1]);
    }
}
