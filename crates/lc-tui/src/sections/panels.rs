use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lc_core::content::{PanelFacts, Side, AI_PANEL, HUMAN_PANEL, HUMAN_STAFF, NETWORK_NODES};
use lc_core::format::format_percent;

use crate::app::App;
use crate::glyphs;
use crate::ui::{AI_COLOR, HUMAN_COLOR, MUTED};
use crate::widgets::{doc_grid, gauge_bar};

pub const HEIGHT: u16 = 13;

/// Side-by-side traditional and AI process panels.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_panel(frame, app, &HUMAN_PANEL, cols[0]);
    render_panel(frame, app, &AI_PANEL, cols[1]);
}

fn render_panel(frame: &mut Frame, app: &App, facts: &PanelFacts, area: Rect) {
    let metrics = app.comparison.metrics();
    let (color, icon, progress, documents) = match facts.side {
        Side::Human => (
            HUMAN_COLOR,
            glyphs::PEOPLE,
            metrics.human_progress(),
            metrics.human_documents(),
        ),
        Side::Ai => (
            AI_COLOR,
            glyphs::BRAIN,
            metrics.ai_progress(),
            metrics.ai_documents(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(
                format!("{} ", facts.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (time_icon, rate_icon) = match facts.side {
        Side::Human => (glyphs::CLOCK, glyphs::ALERT),
        Side::Ai => (glyphs::BOLT, glyphs::CHECK),
    };

    let mut lines = Vec::with_capacity(HEIGHT as usize);
    lines.push(
        gauge_bar::gauge_line(
            "Case Processing",
            progress,
            &format_percent(progress),
            inner.width,
            color,
        )
        .unwrap_or_default(),
    );
    lines.push(Line::default());
    lines.push(fact_line(time_icon, "Processing Time", facts.processing_time, color, inner.width));
    lines.push(fact_line(rate_icon, "Error Rate", facts.error_rate, color, inner.width));
    lines.push(Line::default());
    lines.push(fact_line(
        glyphs::DOCUMENT,
        "Documents/Hour",
        facts.documents_per_hour,
        color,
        inner.width,
    ));
    lines.extend(doc_grid::grid_lines(documents, color));
    lines.push(Line::default());
    match facts.side {
        Side::Human => lines.extend(resources_lines(color)),
        Side::Ai => lines.extend(network_lines(metrics.elapsed_ticks(), color)),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// ` ◷ Processing Time        3 Days`, value flush right.
fn fact_line(icon: &str, label: &str, value: &str, color: Color, width: u16) -> Line<'static> {
    let left = format!(" {} {}", icon, label);
    let used = left.chars().count() + value.chars().count();
    let pad = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(label.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(pad)),
        Span::styled(value.to_string(), Style::default().fg(Color::Gray)),
    ])
}

fn resources_lines(color: Color) -> Vec<Line<'static>> {
    let staff: Vec<Span> = (0..HUMAN_STAFF)
        .map(|_| Span::styled(format!(" [{}] ", glyphs::PEOPLE), Style::default().fg(color)))
        .collect();
    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", glyphs::PEOPLE), Style::default().fg(color)),
            Span::styled("Resources Required", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(staff),
    ]
}

/// Network ring: six nodes around the core, one node lit at a time. The lit
/// node moves with elapsed ticks, so the animation needs no timer of its own.
fn network_lines(elapsed_ticks: u64, color: Color) -> Vec<Line<'static>> {
    let lit = pulse_node(elapsed_ticks);
    let node = |i: usize| {
        if i == lit {
            Span::styled(format!(" {} ", glyphs::NODE), Style::default().fg(color))
        } else {
            Span::styled(format!(" {} ", glyphs::NODE_DIM), Style::default().fg(MUTED))
        }
    };
    let half = NETWORK_NODES / 2;
    let mut ring: Vec<Span> = (0..half).map(node).collect();
    ring.push(Span::styled(
        format!(" {} ", glyphs::BRAIN),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    ring.extend((half..NETWORK_NODES).map(node));
    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", glyphs::NETWORK), Style::default().fg(color)),
            Span::styled("Agent Network", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(ring),
    ]
}

/// Index of the lit network node: advances every two metric ticks.
pub fn pulse_node(elapsed_ticks: u64) -> usize {
    ((elapsed_ticks / 2) % NETWORK_NODES as u64) as usize
}
