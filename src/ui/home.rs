//! Landing page: hero and the promotional sections

use super::widgets::{centered_column, wrap_text};
use crate::app::App;
use crate::state::Site;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Text column width of the landing page
const CONTENT_WIDTH: u16 = 72;

/// Pre-wrapped page lines plus the first line of each anchored section
struct HomePage {
    lines: Vec<Line<'static>>,
    anchors: Vec<(&'static str, u16)>,
}

fn build_page(site: Site) -> HomePage {
    let width = CONTENT_WIDTH as usize;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            site.headline(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(site.tagline(), width - 8)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray))).centered()),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled(" a ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(" Apply Now", Style::default().fg(Color::Cyan)),
        ])
        .centered(),
    );
    lines.push(Line::from(""));

    let mut anchors = Vec::new();
    for section in site.sections() {
        lines.push(Line::from(""));
        anchors.push((section.anchor, lines.len() as u16));
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));

        for card in section.cards {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Cyan)),
                Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.extend(
                wrap_text(card.body, width - 2)
                    .into_iter()
                    .map(|l| Line::from(format!("  {l}"))),
            );
            lines.push(Line::from(""));
        }
    }

    HomePage { lines, anchors }
}

/// Scroll offset of a section anchor
pub fn anchor_offset(site: Site, anchor: &str) -> Option<u16> {
    build_page(site)
        .anchors
        .into_iter()
        .find(|(name, _)| *name == anchor)
        .map(|(_, offset)| offset)
}

/// Largest scroll offset that keeps a `height`-row viewport filled
pub fn max_offset(site: Site, height: u16) -> u16 {
    (build_page(site).lines.len() as u16).saturating_sub(height)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let page = build_page(app.state.site);
    // The state limit may lag a resize by one frame
    let max_offset = (page.lines.len() as u16).saturating_sub(area.height);
    let offset = app.state.scroll_offset.min(max_offset);

    let column = centered_column(area, CONTENT_WIDTH);
    frame.render_widget(Paragraph::new(page.lines).scroll((offset, 0)), column);
}
