use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::glyphs::{BAR_EMPTY, BAR_FULL};

/// Builds a horizontal gauge line with label and trailing text.
///
/// Example output: ` Case Processing [████████░░░░░░] 66% `
///
/// `percent` may be fractional; the filled width is truncated so a bar only
/// looks full at 100. The filled portion uses `color`; the empty portion is
/// dark gray. Returns `None` when `width` leaves no room for the bar.
pub fn gauge_line(
    label: &str,
    percent: f64,
    trailing: &str,
    width: u16,
    color: Color,
) -> Option<Line<'static>> {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };

    let label_display = if label.is_empty() {
        String::new()
    } else {
        format!(" {}", label)
    };
    let trailing_display = if trailing.is_empty() {
        String::new()
    } else {
        format!(" {}", trailing)
    };
    // " label" + " [" + "]" + " trailing"
    let overhead = label_display.chars().count() + 2 + 1 + trailing_display.chars().count();
    let bar_width = (width as usize).saturating_sub(overhead);
    if bar_width == 0 {
        return None;
    }

    let filled_count = ((bar_width as f64) * percent / 100.0).floor() as usize;
    let empty_count = bar_width.saturating_sub(filled_count);

    Some(Line::from(vec![
        Span::styled(label_display, Style::default().fg(Color::White)),
        Span::raw(" ["),
        Span::styled(BAR_FULL.repeat(filled_count), Style::default().fg(color)),
        Span::styled(BAR_EMPTY.repeat(empty_count), Style::default().fg(Color::DarkGray)),
        Span::raw("]"),
        Span::styled(trailing_display, Style::default().fg(Color::White)),
    ]))
}

/// Renders a gauge into `area`, skipping it when the area is too small.
pub fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    percent: f64,
    trailing: &str,
    color: Color,
) {
    if area.height == 0 {
        return;
    }
    if let Some(line) = gauge_line(label, percent, trailing, area.width, color) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
