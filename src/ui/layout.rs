//! Page frame: navbar, content area and footer

use crate::app::App;
use crate::state::{Site, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Navbar height in rows (content + bottom border)
pub const NAVBAR_HEIGHT: u16 = 2;
/// Footer height in rows (copyright + key hints)
pub const FOOTER_HEIGHT: u16 = 2;

/// Split the frame into navbar, content and footer
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Brand on the left, section anchors and the Apply link on the right
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let site = app.state.site;
    let on_home = matches!(app.state.current_view, View::Home);

    let mut spans = vec![Span::styled(
        format!(" {} ", site.brand()),
        Style::default()
            .fg(brand_color(site))
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));

    for (idx, section) in site.sections().iter().enumerate() {
        let active = on_home && app.state.active_anchor.as_deref() == Some(section.anchor);
        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!("{}", idx + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(format!(" {}  ", section.nav_label), label_style));
    }

    let apply_active = matches!(app.state.current_view, View::Form);
    let apply_style = if apply_active {
        Style::default()
            .fg(Color::Black)
            .bg(brand_color(site))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(brand_color(site)).add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled("a", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(" Apply Now ", apply_style));

    let navbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(navbar, area);
}

/// Copyright line and the key hints for the current view
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let copyright = Paragraph::new(Line::from(Span::styled(
        app.state.site.footer(),
        Style::default().fg(Color::DarkGray),
    )))
    .centered();
    frame.render_widget(copyright, chunks[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.state.current_route),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled(view_hints(app), Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(hints, chunks[1]);
}

fn brand_color(site: Site) -> Color {
    match site {
        Site::ThirtyUnderThirty => Color::Magenta,
        Site::ForeBridge => Color::Blue,
    }
}

/// Get keyboard hints for the current view
fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Home => {
            let extra = match app.state.site {
                Site::ThirtyUnderThirty => "p:quick apply",
                Site::ForeBridge => "c:contact",
            };
            format!("j/k:scroll  1-3:jump  a:apply  {extra}  ::go to  q:quit")
        }
        View::Form => "Tab:next field  Esc:leave form  ^C:quit".to_string(),
        View::NotFound => "Enter:home  ::go to  q:quit".to_string(),
    }
}
