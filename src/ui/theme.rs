//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── slider surface ─────────────────────────────────────────
    pub fn anchor_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tick_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn major_tick_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tick_label_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn overlay_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Inner half of the edge fade — readable but clearly receding.
    pub fn edge_fade_style() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Outer half of the edge fade — almost gone.
    pub fn edge_fade_strong_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn tick_flash_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
