use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lc_core::content::{StepDescription, AI_PROCESS, HUMAN_PROCESS};
use lc_core::steps::{StepCycler, PROCESS_STEPS, STEP_COUNT};

use crate::app::App;
use crate::glyphs;
use crate::ui::{AI_COLOR, HUMAN_COLOR, MUTED};
use crate::widgets::gauge_bar;

pub const HEIGHT: u16 = 17;

/// Process complexity analysis: the two step lists, then the timeline.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Process Complexity Analysis ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // step lists
            Constraint::Length(1), // spacing
            Constraint::Min(0),    // timeline
        ])
        .split(inner);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_step_list(
        frame,
        "Traditional Process Steps",
        &HUMAN_PROCESS,
        &glyphs::HUMAN_STEP_MARKERS,
        HUMAN_COLOR,
        lists[0],
    );
    render_step_list(
        frame,
        "AI-Powered Process",
        &AI_PROCESS,
        &glyphs::AI_STEP_MARKERS,
        AI_COLOR,
        lists[1],
    );

    render_timeline(frame, app.comparison.steps(), rows[2]);
}

fn render_step_list(
    frame: &mut Frame,
    heading: &str,
    steps: &[StepDescription],
    markers: &[&str],
    color: Color,
    area: Rect,
) {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", heading),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    for (step, marker) in steps.iter().zip(markers) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(color)),
            Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", step.description),
            Style::default().fg(MUTED),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Timeline bar filled to `(active + 1) / N`, then one column per step;
/// reached columns are highlighted.
fn render_timeline(frame: &mut Frame, steps: &StepCycler, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(1), // bar
            Constraint::Length(1), // spacing
            Constraint::Min(0),    // columns
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Process Timeline Comparison")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );

    gauge_bar::render_gauge(
        frame,
        rows[1],
        "",
        steps.fill_fraction() * 100.0,
        &format!("{}/{}", steps.index() + 1, STEP_COUNT),
        AI_COLOR,
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, STEP_COUNT as u32); STEP_COUNT])
        .split(rows[3]);

    for (i, step) in PROCESS_STEPS.iter().enumerate() {
        let reached = steps.is_reached(i);
        let title_style = if reached {
            Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        let lines = vec![
            Line::from(Span::styled(step.title, title_style)),
            Line::from(vec![
                Span::styled(
                    step.human_time,
                    Style::default()
                        .fg(HUMAN_COLOR)
                        .add_modifier(Modifier::CROSSED_OUT),
                ),
                Span::raw(format!(" {} ", glyphs::ARROW)),
                Span::styled(
                    step.ai_time,
                    if reached {
                        Style::default().fg(AI_COLOR)
                    } else {
                        Style::default().fg(MUTED)
                    },
                ),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            cols[i],
        );
    }
}
