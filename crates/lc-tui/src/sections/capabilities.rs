use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lc_core::content::CAPABILITIES;

use crate::glyphs::CAPABILITY_MARKERS;
use crate::ui::{AI_COLOR, MUTED};

pub const HEIGHT: u16 = 4;

/// Three AI capability cards.
pub fn render(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, (cap, marker)) in CAPABILITIES.iter().zip(CAPABILITY_MARKERS).enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AI_COLOR));
        let text = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(AI_COLOR)),
                Span::styled(cap.title, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(cap.description, Style::default().fg(MUTED))),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(text, cols[i]);
    }
}
