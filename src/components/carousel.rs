//! Carousel component - the swipeable card row
//!
//! Draws cards where the layout calculator puts them and adapts raw input
//! into drag gestures. A left-button drag that starts inside the carousel
//! is a gesture; pointer travel in columns is scaled by `cell_width` into
//! layout units. Arrow keys (and `h`/`l`) deliver a complete swipe.

use crate::action::Action;
use crate::component::Component;
use crate::config::Config;
use crate::model::carousel::COMMIT_THRESHOLD;
use crate::model::item::{CarouselItem, PHOTO_GLYPH};
use crate::model::layout::{card_x, compute_layout, CarouselConfig};
use crate::model::UiState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Travel of a keyboard swipe, comfortably past the commit threshold
pub const KEY_SWIPE_DISTANCE: f32 = COMMIT_THRESHOLD * 2.0;

/// Fewer rows than this and no card is drawn (top and bottom border plus content)
const MIN_CARD_ROWS: u16 = 3;

/// Card row component. Reads the shared state, never writes it.
pub struct CarouselComponent {
    state: UiState,
    items: Vec<CarouselItem>,
    spacing: f32,
    edge_reveal: f32,
    cell_width: f32,
    /// Column where the current gesture started
    drag_origin: Option<u16>,
    /// Translation of the most recent move in the current gesture
    last_translation: f32,
    /// Area of the last draw, for hit testing
    area: Option<Rect>,
}

impl CarouselComponent {
    pub fn new(state: UiState, items: Vec<CarouselItem>, config: &Config) -> Self {
        Self {
            state,
            items,
            spacing: config.spacing,
            edge_reveal: config.edge_reveal,
            cell_width: config.cell_width,
            drag_origin: None,
            last_translation: 0.0,
            area: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// End a gesture in progress at its last recorded translation.
    ///
    /// Returns `None` when no gesture is active. Release events that arrive
    /// afterwards are ignored.
    pub fn interrupt(&mut self) -> Option<Action> {
        self.drag_origin.take()?;
        let translation_x = std::mem::take(&mut self.last_translation);
        tracing::debug!("gesture interrupted at {:.1}", translation_x);
        Some(Action::DragEnd(translation_x))
    }

    /// Geometry for a viewport `columns` cells wide
    pub fn layout_config(&self, columns: u16) -> CarouselConfig {
        CarouselConfig {
            item_count: self.items.len(),
            spacing: self.spacing,
            edge_reveal: self.edge_reveal,
            viewport_width: columns as f32 * self.cell_width,
        }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|area| {
            area.height >= MIN_CARD_ROWS
                && column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    fn translation(&self, origin: u16, column: u16) -> f32 {
        (column as f32 - origin as f32) * self.cell_width
    }
}

impl Component for CarouselComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // A key swipe while the pointer holds a card only releases it
        if self.is_dragging() {
            return Ok(self.interrupt());
        }

        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::DragEnd(KEY_SWIPE_DISTANCE)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::DragEnd(-KEY_SWIPE_DISTANCE)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.contains(mouse.column, mouse.row) {
                    self.drag_origin = Some(mouse.column);
                    self.last_translation = 0.0;
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag_origin.map(|origin| {
                self.last_translation = self.translation(origin, mouse.column);
                Action::DragUpdate(self.last_translation)
            }),
            MouseEventKind::Up(MouseButton::Left) => self.drag_origin.take().map(|origin| {
                self.last_translation = 0.0;
                Action::DragEnd(self.translation(origin, mouse.column))
            }),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = Some(area);
        if self.items.is_empty() || area.width == 0 || area.height < MIN_CARD_ROWS {
            return Ok(());
        }

        let snapshot = self.state.snapshot();
        let config = self.layout_config(area.width);
        let layout = compute_layout(&config, snapshot.active_index, snapshot.drag_displacement);
        let viewport_columns = area.width as f32;
        let grabbed = self.is_dragging();

        for (index, item) in self.items.iter().enumerate() {
            let left = (card_x(&config, &layout, index) / self.cell_width).round();
            let right = left + (layout.card_width / self.cell_width).round();

            let start = left.max(0.0);
            let end = right.min(viewport_columns);
            if end - start < 1.0 {
                continue;
            }

            let mut borders = Borders::TOP | Borders::BOTTOM;
            if left >= 0.0 {
                borders |= Borders::LEFT;
            }
            if right <= viewport_columns {
                borders |= Borders::RIGHT;
            }

            let rect = Rect::new(
                area.x + start as u16,
                area.y,
                (end - start) as u16,
                area.height,
            );
            let card = CardView {
                index,
                item,
                active: index == snapshot.active_index,
                grabbed,
                borders,
            };
            card.render(frame, rect);
        }

        Ok(())
    }
}

/// One visible (possibly clipped) card
struct CardView<'a> {
    index: usize,
    item: &'a CarouselItem,
    active: bool,
    /// A mouse gesture is in progress
    grabbed: bool,
    borders: Borders,
}

impl CardView<'_> {
    fn render(&self, frame: &mut Frame, rect: Rect) {
        let border_color = if self.active && self.grabbed {
            Color::Yellow
        } else if self.active {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let inner_height = rect.height.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(""); inner_height.saturating_sub(3) / 2];
        lines.push(Line::from(Span::styled(
            PHOTO_GLYPH,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Photo {}", self.index + 1),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.item.image_name.clone(),
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(self.borders)
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, rect);
    }
}
