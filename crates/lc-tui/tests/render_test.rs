//! Render tests for the comparison page.
//!
//! Each test renders the full UI into a 140x50 buffer and checks that the
//! expected content appears.

use std::time::{Duration, Instant};

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use lc_core::config::Config;

// Include binary-crate modules via path for testing.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/glyphs.rs"]
mod glyphs;
#[path = "../src/sections/mod.rs"]
mod sections;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WIDTH: u16 = 140;
const HEIGHT: u16 = 50;

/// App mounted at `t0`, advanced by `ms` milliseconds.
fn app_after(config: &Config, ms: u64) -> app::App {
    let t0 = Instant::now();
    let mut app = app::App::new(config, t0);
    app.tick(t0 + Duration::from_millis(ms));
    app
}

fn render_to_string(app: &app::App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    buffer_to_string(&buf)
}

/// Convert a ratatui Buffer to a readable string (rows joined by newlines).
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            let cell = &buf[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Assert that the rendered output contains the given substring.
fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected to find {:?} in rendered output.\nFull output:\n{}",
        needle,
        output
    );
}

fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert_contains(output, needle);
    }
}

/// The rendered row containing `needle`.
fn row_with<'a>(output: &'a str, needle: &str) -> &'a str {
    output
        .lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no row contains {needle:?}"))
}

// ===========================================================================
// Title and banner
// ===========================================================================

#[test]
fn render_title() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains(&output, "Litigation Case Management: Human vs AI Agents");
}

#[test]
fn render_banner_cards() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains_all(
        &output,
        &[
            "Documents Processed",
            "Time Elapsed",
            "Cost Per Case",
            "Annual Savings",
            "$3,450.00",
            "$0.25",
            "99.99% Savings",
            "$1,259,158",
            "per case/day",
        ],
    );
}

#[test]
fn render_banner_values_at_start() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains(&output, "0 seconds");
}

#[test]
fn render_banner_values_after_running() {
    // 250 ticks: 1,000 processed documents (capped), 4 minutes elapsed.
    let output = render_to_string(&app_after(&Config::default(), 25_000));
    assert_contains(&output, "1,000");
    assert_contains(&output, "4 minutes");
}

#[test]
fn render_banner_uses_configured_separator() {
    let mut config = Config::default();
    config.display.thousands_separator = ".".into();
    let output = render_to_string(&app_after(&config, 25_000));
    assert_contains(&output, "$1.259.158");
    assert_contains(&output, "$3.450.00");
}

// ===========================================================================
// Process panels
// ===========================================================================

#[test]
fn render_panel_titles_and_facts() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains_all(
        &output,
        &[
            "Traditional Process",
            "AI Agent Process",
            "Case Processing",
            "Processing Time",
            "3 Days",
            "30 Seconds",
            "Error Rate",
            "8-12%",
            "< 0.1%",
            "Documents/Hour",
            "~30",
            "~36,000",
            "Resources Required",
            "Agent Network",
        ],
    );
}

#[test]
fn render_progress_percentages() {
    // 50 ticks: human 5%, AI 50%.
    let output = render_to_string(&app_after(&Config::default(), 5_000));
    let row = row_with(&output, "Case Processing");
    assert!(row.contains("5%"), "row: {row}");
    assert!(row.contains("50%"), "row: {row}");
}

#[test]
fn render_document_grid_fill() {
    // 5 ticks: AI documents = 50 -> five filled cells; human = 5 -> one.
    let app = app_after(&Config::default(), 500);
    assert_eq!(app.comparison.metrics().ai_documents(), 50);
    assert_eq!(widgets::doc_grid::filled_cells(50), 5);
    assert_eq!(widgets::doc_grid::filled_cells(5), 1);
    // Both grids draw every cell, filled or not.
    let output = render_to_string(&app);
    assert!(output.matches(glyphs::DOCUMENT).count() >= 20);
}

// ===========================================================================
// Complexity and timeline
// ===========================================================================

#[test]
fn render_process_lists() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains_all(
        &output,
        &[
            "Process Complexity Analysis",
            "Traditional Process Steps",
            "AI-Powered Process",
            "Manual Document Review",
            "Individual document analysis by legal staff",
            "Automated Document Processing",
            "Neural Network Analysis",
            "Deep Learning Analysis",
            "Automated Generation",
        ],
    );
}

#[test]
fn render_timeline_columns() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains_all(
        &output,
        &[
            "Process Timeline Comparison",
            "Document Analysis",
            "Legal Research",
            "Case Evaluation",
            "Document Generation",
            "4 hours → 30 seconds",
            "8 hours → 45 seconds",
            "6 hours → 15 seconds",
            "4 hours → 10 seconds",
        ],
    );
}

#[test]
fn render_timeline_counter_follows_step() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains(&output, "1/4");
    let output = render_to_string(&app_after(&Config::default(), 6_000));
    assert_contains(&output, "4/4");
    let output = render_to_string(&app_after(&Config::default(), 8_000));
    assert_contains(&output, "1/4");
}

// ===========================================================================
// Capabilities and ROI
// ===========================================================================

#[test]
fn render_capabilities() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert_contains_all(
        &output,
        &[
            "Parallel Processing",
            "Multiple cases simultaneously",
            "Smart Filtering",
            "24/7 Operation",
        ],
    );
}

#[test]
fn roi_summary_hidden_by_default() {
    let output = render_to_string(&app_after(&Config::default(), 0));
    assert!(!output.contains("ROI Impact Analysis"));
    assert!(!output.contains("99.99% Faster"));
}

#[test]
fn roi_summary_shown_when_configured() {
    let mut config = Config::default();
    config.display.show_roi_summary = true;
    let output = render_to_string(&app_after(&config, 0));
    assert_contains_all(
        &output,
        &[
            "ROI Impact Analysis",
            "99.99% Faster",
            "3 Days → 30 Seconds",
            "99.99% Cost Reduction",
            "99.9% Accuracy",
        ],
    );
}

// ===========================================================================
// Status bar
// ===========================================================================

#[test]
fn status_bar_shows_timer_state() {
    let mut app = app_after(&Config::default(), 0);
    assert_contains(&render_to_string(&app), "timers running");
    app.quit();
    assert_contains(&render_to_string(&app), "timers stopped");
}

#[test]
fn small_terminal_does_not_panic() {
    let app = app_after(&Config::default(), 1_000);
    let backend = TestBackend::new(30, 10);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}
