//! Search bar component
//!
//! Unfocused and empty it shows a placeholder; focused it shows the query
//! with a cursor and a clear hint. Mouse clicks focus and unfocus it.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MAGNIFIER: &str = "⌕";
const CLEAR_HINT: &str = " ✕ Esc";

#[derive(Default)]
pub struct SearchBar {
    pub query: String,
    pub focused: bool,
    /// Drawn at the top of the screen after the header scrolled away
    pub pinned: bool,
    area: Option<Rect>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn unfocus(&mut self) {
        self.focused = false;
    }

    /// Clear-button behaviour: drop the query and unfocus
    pub fn clear(&mut self) {
        self.query.clear();
        self.focused = false;
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    /// Tail of the query that fits in `width` columns
    fn visible_query(&self, width: usize) -> &str {
        let mut start = 0;
        while self.query[start..].width() > width {
            match self.query[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.query[start..]
    }
}

impl Component for SearchBar {
    /// Only called while focused
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let inside = self.contains(mouse.column, mouse.row);
        let action = if inside && !self.focused {
            Some(Action::EnterSearchMode)
        } else if !inside && self.focused {
            Some(Action::ExitSearchMode)
        } else {
            None
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = Some(area);

        let (border_color, background) = if self.pinned {
            (Color::Gray, Style::default().bg(Color::DarkGray))
        } else {
            (Color::DarkGray, Style::default())
        };
        let border_color = if self.focused { Color::Cyan } else { border_color };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(background);

        let paragraph = if self.focused {
            let inner_width = area.width.saturating_sub(2) as usize;
            let text_width = inner_width
                .saturating_sub(MAGNIFIER.width() + 1)
                .saturating_sub(CLEAR_HINT.width() + 1);

            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", MAGNIFIER), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}_", self.visible_query(text_width)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(CLEAR_HINT, Style::default().fg(Color::DarkGray)),
            ]))
            .block(block)
        } else if self.query.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", MAGNIFIER), Style::default().fg(Color::Gray)),
                Span::styled("Search", Style::default().fg(Color::Gray)),
            ]))
            .block(block)
            .alignment(Alignment::Center)
        } else {
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", MAGNIFIER), Style::default().fg(Color::Gray)),
                Span::styled(
                    self.query.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .block(block)
        };

        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(bar: &mut SearchBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| bar.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_placeholder_when_unfocused_and_empty() {
        let mut bar = SearchBar::new();
        assert!(render(&mut bar).contains("Search"));
    }

    #[test]
    fn test_focused_shows_query_and_clear_hint() {
        let mut bar = SearchBar::new();
        bar.focus();
        bar.push('1');
        bar.push('2');

        let text = render(&mut bar);
        assert!(text.contains("12_"));
        assert!(text.contains("Esc"));
        assert!(!text.contains("Search"));
    }

    #[test]
    fn test_keys_while_focused() {
        let mut bar = SearchBar::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            bar.handle_key_event(key(KeyCode::Char('x'))).unwrap(),
            Some(Action::SearchInput('x'))
        );
        assert_eq!(
            bar.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ClearSearch)
        );
        assert_eq!(
            bar.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ExitSearchMode)
        );
        assert_eq!(
            bar.handle_key_event(key(KeyCode::Backspace)).unwrap(),
            Some(Action::SearchBackspace)
        );
    }

    #[test]
    fn test_clicks_focus_and_unfocus() {
        let mut bar = SearchBar::new();
        render(&mut bar);

        assert_eq!(
            bar.handle_mouse_event(click(5, 1)).unwrap(),
            Some(Action::EnterSearchMode)
        );
        bar.focus();
        assert_eq!(bar.handle_mouse_event(click(5, 1)).unwrap(), None);
        assert_eq!(
            bar.handle_mouse_event(click(5, 10)).unwrap(),
            Some(Action::ExitSearchMode)
        );
    }

    #[test]
    fn test_clear() {
        let mut bar = SearchBar::new();
        bar.focus();
        bar.push('a');
        bar.clear();
        assert!(bar.query.is_empty());
        assert!(!bar.focused);
    }

    #[test]
    fn test_long_query_keeps_tail_visible() {
        let mut bar = SearchBar::new();
        bar.query = "abcdefghij".to_string();
        assert_eq!(bar.visible_query(4), "ghij");
        assert_eq!(bar.visible_query(20), "abcdefghij");
        assert_eq!(bar.visible_query(0), "");
    }
}
