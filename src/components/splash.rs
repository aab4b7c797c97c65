//! Splash screen component
//!
//! Shows a stack of photo frames briefly before the carousel screen.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const LOGO: [&str; 7] = [
    "  ┌────────┐  ┌──────────────┐  ┌────────┐  ",
    "  │        │  │   ▣      ▣   │  │        │  ",
    "  │   ▣    │  │              │  │    ▣   │  ",
    "  │        │  │      ▣▣      │  │        │  ",
    "  │        │  │   ▣      ▣   │  │        │  ",
    "  └────────┘  └──────────────┘  └────────┘  ",
    "                  •  ◉  •                   ",
];

const TITLE: &str = "carousel-tui";
const SUBTITLE: &str = "Swipe through a gallery in your terminal";

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let background = Color::Rgb(0, 0, 0);
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        let logo_height = LOGO.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 4) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|line| {
                Line::from(
                    line.chars()
                        .map(|c| {
                            let fg = match c {
                                '▣' => Color::Rgb(255, 179, 71),
                                '◉' => Color::White,
                                '•' => Color::DarkGray,
                                _ => Color::Cyan,
                            };
                            Span::styled(c.to_string(), Style::default().fg(fg).bg(background))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let centered = |text_width: usize, row: Rect| {
            let width = (text_width as u16).min(area.width);
            Rect::new(area.x + (area.width - width) / 2, row.y, width, row.height)
        };

        let logo_width = LOGO[0].chars().count();
        frame.render_widget(Paragraph::new(logo), centered(logo_width, chunks[1]));

        let title = Paragraph::new(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, centered(TITLE.len(), chunks[3]));

        let subtitle = Paragraph::new(Span::styled(
            SUBTITLE,
            Style::default().fg(Color::DarkGray).bg(background),
        ));
        frame.render_widget(subtitle, centered(SUBTITLE.len(), chunks[4]));

        Ok(())
    }
}
