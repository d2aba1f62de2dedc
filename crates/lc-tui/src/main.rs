mod app;
mod command;
mod effects;
mod glyphs;
mod sections;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use lc_core::config::Config;

use crate::app::App;
use crate::command::SimClock;
use crate::effects::EffectManager;

fn main() -> Result<()> {
    // Parse CLI args (simple, no clap dependency).
    let args: Vec<String> = std::env::args().collect();
    let headless = args.iter().any(|a| a == "--headless");
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = match config_path {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    lc_telemetry::logging::init("lc-tui", &config.general.log_level, config.general.log_json);

    if headless {
        return run_headless(&config);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(&config);

    restore_terminal()?;
    result
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame_interval = config.timing.frame_interval();
    let mut fx = EffectManager::new(config.display.effects);
    fx.add_named("mount", effects::fade_in());

    let mut app = App::new(config, Instant::now());
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        app.tick(now);
        if app.just_completed {
            app.just_completed = false;
            tracing::info!("all counters saturated");
            fx.add_named("complete", effects::completion_burst());
        }

        let delta = now.duration_since(last_frame);
        last_frame = now;
        terminal.draw(|frame| {
            ui::render(frame, &app);
            let area = frame.area();
            fx.tick_and_render(delta, frame.buffer_mut(), area);
        })?;

        // Sleep until the next frame or the next timer firing, whichever is
        // sooner; key presses wake us early.
        let wait = app
            .comparison
            .until_next_due(Instant::now())
            .map_or(frame_interval, |due| due.min(frame_interval));
        if ct_event::poll(wait)? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            fx.remove_all();
            break;
        }
    }

    Ok(())
}

/// Headless mode: reads commands from stdin, outputs JSON lines to stdout.
/// No terminal rendering; time only moves on `advance`.
///
/// Usage: `echo '{"cmd":"advance","args":[2000]}' | lc-tui --headless`
fn run_headless(config: &Config) -> Result<()> {
    let mut clock = SimClock::new(Instant::now());
    let mut app = App::new(config, clock.now());

    emit_event(&serde_json::json!({
        "event": "started",
        "metrics_interval_ms": config.timing.metrics_interval_ms,
        "step_interval_ms": config.timing.step_interval_ms,
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };
        for out in command::handle_line(&mut app, &mut clock, &line) {
            println!("{}", out);
        }
        let _ = io::stdout().flush();

        if app.should_quit {
            break;
        }
    }

    app.comparison.teardown();
    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{}", s);
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
