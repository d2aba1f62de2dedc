use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use lc_core::content::PAGE_TITLE;

use crate::app::App;
use crate::sections;
use crate::widgets::status_bar;

/// Traditional-process accent.
pub const HUMAN_COLOR: Color = Color::Red;
/// AI-process accent.
pub const AI_COLOR: Color = Color::Green;
pub const MUTED: Color = Color::DarkGray;

/// Master render function: title, stats banner, process panels, complexity
/// analysis, capabilities, optional ROI summary, status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let mut constraints = vec![
        Constraint::Length(1),                                // title
        Constraint::Length(sections::banner::HEIGHT),         // stats banner
        Constraint::Length(sections::panels::HEIGHT),         // human vs AI panels
        Constraint::Length(sections::complexity::HEIGHT),     // complexity + timeline
        Constraint::Length(sections::capabilities::HEIGHT),   // capabilities
    ];
    if app.show_roi_summary {
        constraints.push(Constraint::Length(sections::roi::HEIGHT));
    }
    constraints.push(Constraint::Min(0)); // filler
    constraints.push(Constraint::Length(1)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_title(frame, chunks[0]);
    sections::banner::render(frame, app, chunks[1]);
    sections::panels::render(frame, app, chunks[2]);
    sections::complexity::render(frame, app, chunks[3]);
    sections::capabilities::render(frame, chunks[4]);
    if app.show_roi_summary {
        sections::roi::render(frame, chunks[5]);
    }
    status_bar::render(frame, app, chunks[chunks.len() - 1]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(PAGE_TITLE))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}
