//! Page indicator - one dot per card, the active one distinguished

use crate::component::Component;
use crate::model::UiState;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ACTIVE_MARKER: &str = "◉";
const PLAIN_MARKER: &str = "•";

pub struct PageIndicator {
    state: UiState,
    count: usize,
    /// Briefly emphasised after a committed page change
    flash: bool,
}

impl PageIndicator {
    pub fn new(state: UiState, count: usize) -> Self {
        Self {
            state,
            count,
            flash: false,
        }
    }

    pub fn set_flash(&mut self, flash: bool) {
        self.flash = flash;
    }

    /// The marker line for `active` out of `count` pages
    pub fn indicator_line(count: usize, active: usize, flash: bool) -> Line<'static> {
        let active_style = if flash {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut spans = Vec::with_capacity(count * 2);
        for index in 0..count {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            if index == active {
                spans.push(Span::styled(ACTIVE_MARKER, active_style));
            } else {
                spans.push(Span::styled(PLAIN_MARKER, Style::default().fg(Color::DarkGray)));
            }
        }
        Line::from(spans)
    }
}

impl Component for PageIndicator {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.count == 0 || area.height == 0 {
            return Ok(());
        }

        let line = Self::indicator_line(self.count, self.state.active_index(), self.flash);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::carousel::{CarouselController, DragSample};
    use ratatui::{backend::TestBackend, Terminal};

    fn markers(line: &Line) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>()
            .replace(' ', "")
    }

    #[test]
    fn test_exactly_one_active_marker() {
        for active in 0..5 {
            let line = PageIndicator::indicator_line(5, active, false);
            let markers = markers(&line);
            assert_eq!(markers.chars().count(), 5);
            assert_eq!(markers.matches(ACTIVE_MARKER).count(), 1);
            assert_eq!(markers.chars().nth(active), ACTIVE_MARKER.chars().next());
        }
    }

    #[test]
    fn test_flash_changes_active_style() {
        let calm = PageIndicator::indicator_line(3, 1, false);
        let flashing = PageIndicator::indicator_line(3, 1, true);
        assert_ne!(calm.spans[2].style, flashing.spans[2].style);
        assert_eq!(calm.spans[0].style, flashing.spans[0].style);
    }

    #[test]
    fn test_follows_shared_state() {
        let state = UiState::new();
        let mut controller = CarouselController::new(state.clone(), 4);
        let mut indicator = PageIndicator::new(state, 4);

        controller.on_drag_end(DragSample::new(-60.0));
        controller.on_drag_end(DragSample::new(-60.0));

        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|frame| indicator.draw(frame, frame.area()).unwrap())
            .unwrap();
        let row: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert_eq!(row.trim(), "• • ◉ •");
    }

    #[test]
    fn test_no_items_renders_nothing() {
        let mut indicator = PageIndicator::new(UiState::new(), 0);
        let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();
        terminal
            .draw(|frame| indicator.draw(frame, frame.area()).unwrap())
            .unwrap();
        assert!(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|cell| cell.symbol() == " "));
    }
}
