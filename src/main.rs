//! Interactive demo for the tick-slider widget.
//!
//! Drag the tick strip with the mouse (or use the scroll wheel) to change
//! the value; the arrow keys write the bound value externally so you can
//! watch the widget chase it with a programmatic scroll.

mod app;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use tick_slider::{ui::theme::Theme, EdgeMask, Slider, SliderConfig, SliderState};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Snap-to-tick slider demo")]
struct Cli {
    /// Lower bound of the value range.
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Upper bound of the value range.
    #[arg(long, default_value_t = 10.0)]
    max: f64,

    /// Step between ticks in the value domain.
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// Width of one tick item, in columns.
    #[arg(long, default_value_t = 1)]
    item_width: u16,

    /// Spacing between tick items, in columns.
    #[arg(long, default_value_t = 5)]
    spacing: u16,

    /// Edge fade width in columns (0 hides the mask).
    #[arg(long, default_value_t = 8)]
    edge_fade: u16,

    /// Initial value.
    #[arg(long, default_value_t = 0.0)]
    value: f64,
}

fn dispatch(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(k) => handler::handle_key(state, k),
        AppEvent::Mouse(m) => handler::handle_mouse(state, m),
        AppEvent::Resize(_, _) | AppEvent::Frame => {}
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the UI owns stdout
        .init();

    let cli = Cli::parse();

    // ── build the slider ──────────────────────────────────────
    // Malformed configuration fails here, before any terminal setup.
    let config = SliderConfig::new(cli.min, cli.max, cli.step)?;
    let initial = cli.value.clamp(cli.min, cli.max);
    let slider = SliderState::new(config, cli.item_width, cli.spacing, initial)?
        .on_edit(|v| tracing::debug!(value = v, "committed edit"));
    let mut state = AppState::new(initial, slider);

    let edge_mask = if cli.edge_fade == 0 {
        EdgeMask::Hidden
    } else {
        EdgeMask::Visible(cli.edge_fade)
    };

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(50));

    // ── event loop ────────────────────────────────────────────
    loop {
        // Advance the animation and observe the bound value before drawing.
        state.slider.sync(state.value);
        if state.slider.take_tick_feedback() {
            state.last_tick = Some(Instant::now());
            // Terminal bell — the closest thing to haptics we have here.
            execute!(io::stdout(), Print("\x07"))?;
        }

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),    // slider pane
                    Constraint::Length(1), // status bar
                ])
                .split(frame.area());

            let title = format!(
                " value {:.2}  ·  tick {}/{} ",
                state.value,
                state.slider.settled_index(),
                state.slider.config().max_index(),
            );
            let block = Block::default()
                .title(title)
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());

            let slider = Slider::new().block(block).edge_mask(edge_mask);
            state.slider_area = chunks[0];
            frame.render_stateful_widget(slider, chunks[0], &mut state.slider);

            let (status, style) = if state.tick_flash() {
                ("  • tick", Theme::tick_flash_style())
            } else {
                (
                    "  drag or scroll the strip · ←/→ set value externally · Home/End bounds · q quit",
                    Theme::status_bar_style(),
                )
            };
            frame.render_widget(Paragraph::new(status).style(style), chunks[1]);
        })?;

        // Process the first event, then batch-drain everything queued so a
        // burst of drag updates costs a single redraw.
        match events.recv().await {
            Some(event) => dispatch(&mut state, event),
            None => break, // event reader died
        }
        while let Ok(event) = events.try_recv() {
            dispatch(&mut state, event);
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
