use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lc_core::content::ROI_CALLOUTS;

use crate::glyphs::ROI_MARKERS;
use crate::ui::{AI_COLOR, MUTED};

pub const HEIGHT: u16 = 5;

/// ROI impact summary. Only drawn when `display.show_roi_summary` is set.
pub fn render(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, (callout, marker)) in ROI_CALLOUTS.iter().zip(ROI_MARKERS).enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(if i == 1 { " ROI Impact Analysis " } else { "" })
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(AI_COLOR));
        let text = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(AI_COLOR)),
                Span::styled(
                    callout.headline,
                    Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(callout.label, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(callout.detail, Style::default().fg(MUTED))),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(text, cols[i]);
    }
}
