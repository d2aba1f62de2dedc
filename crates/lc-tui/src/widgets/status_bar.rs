use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use lc_core::steps::STEP_COUNT;

use crate::app::App;

/// Render the bottom status bar: key hints, timer state, wall clock.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");

    let (state, state_color) = if app.comparison.is_active() {
        ("running", Color::Green)
    } else {
        ("stopped", Color::Red)
    };

    let left = vec![
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
        Span::styled(format!("timers {}", state), Style::default().fg(state_color)),
        Span::raw(format!(
            "  step {}/{}",
            app.comparison.steps().index() + 1,
            STEP_COUNT
        )),
    ];

    // Left-aligned hints and right-aligned timestamp share one line; pad the
    // middle.
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_text = format!("{}", now);
    let total_width = area.width as usize;
    let padding = if total_width > left_len + right_text.len() {
        total_width - left_len - right_text.len()
    } else {
        1
    };

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        right_text,
        Style::default().fg(Color::Gray),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
