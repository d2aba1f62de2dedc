use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lc_core::content::COST_SAVINGS_LABEL;

use crate::app::App;
use crate::ui::{AI_COLOR, HUMAN_COLOR, MUTED};

pub const HEIGHT: u16 = 5;

/// Real-time stats banner: four KPI cards.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let snap = app.snapshot();
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let cards: [(&str, Vec<Line>, Color); 4] = [
        (
            "Documents Processed",
            vec![Line::from(Span::styled(
                snap.display.processed_documents.clone(),
                bold(Color::White),
            ))],
            Color::Gray,
        ),
        (
            "Time Elapsed",
            vec![Line::from(Span::styled(
                snap.display.elapsed.clone(),
                bold(Color::White),
            ))],
            Color::Gray,
        ),
        (
            "Cost Per Case",
            vec![
                Line::from(vec![
                    Span::styled(
                        snap.display.human_cost.clone(),
                        Style::default()
                            .fg(HUMAN_COLOR)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                    Span::raw("  "),
                    Span::styled(snap.display.ai_cost.clone(), bold(AI_COLOR)),
                ]),
                Line::from(Span::styled(COST_SAVINGS_LABEL, Style::default().fg(AI_COLOR))),
            ],
            AI_COLOR,
        ),
        (
            "Annual Savings",
            vec![
                Line::from(Span::styled(snap.display.annual_savings.clone(), bold(AI_COLOR))),
                Line::from(Span::styled("per case/day", Style::default().fg(MUTED))),
            ],
            AI_COLOR,
        ),
    ];

    for (i, (title, lines, color)) in cards.into_iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(color));
        let text = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(text, cols[i]);
    }
}
