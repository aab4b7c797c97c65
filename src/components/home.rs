//! Home component - the carousel screen
//!
//! Composes carousel, page indicator, search bar and item list into one
//! vertically scrollable screen. Owns the catalog, the search query and the
//! carousel controller; the views only read the shared `UiState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::carousel::CarouselComponent;
use crate::components::item_list::render_item_list;
use crate::components::layout::{calculate_screen_layout, CAROUSEL_ROWS, INDICATOR_ROWS};
use crate::components::page_indicator::PageIndicator;
use crate::components::search_bar::SearchBar;
use crate::config::Config;
use crate::model::item::{self, filter_items, ListItem};
use crate::model::{CarouselController, DragPhase, DragSample, PageChange, PageFeedback, UiState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListState, Paragraph},
    Frame,
};

pub struct HomeComponent {
    controller: CarouselController,
    pub carousel: CarouselComponent,
    pub indicator: PageIndicator,
    pub search_bar: SearchBar,
    items: Vec<ListItem>,
    pub list_state: ListState,
    /// Rows scrolled past the top of the screen
    pub scroll_offset: u16,
}

impl HomeComponent {
    pub fn new(config: &Config, state: UiState, feedback: impl PageFeedback + 'static) -> Self {
        let cards = item::carousel_items(config.image_count);
        let controller =
            CarouselController::new(state.clone(), cards.len()).with_feedback(feedback);

        let mut home = Self {
            controller,
            carousel: CarouselComponent::new(state.clone(), cards, config),
            indicator: PageIndicator::new(state, config.image_count),
            search_bar: SearchBar::new(),
            items: item::populate(),
            list_state: ListState::default(),
            scroll_offset: 0,
        };
        home.select_first();
        home
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────────────────────

    pub fn drag_update(&mut self, translation_x: f32) {
        self.controller.on_drag_update(DragSample::new(translation_x));
    }

    pub fn drag_end(&mut self, translation_x: f32) -> Option<PageChange> {
        self.controller.on_drag_end(DragSample::new(translation_x))
    }

    pub fn has_carousel(&self) -> bool {
        self.carousel.item_count() > 0
    }

    pub fn active_index(&self) -> usize {
        self.controller.state().active_index()
    }

    pub fn is_swiping(&self) -> bool {
        self.controller.phase() == DragPhase::Dragging
    }

    /// End a mouse gesture in progress at its last translation
    pub fn interrupt_gesture(&mut self) -> Option<PageChange> {
        match self.carousel.interrupt() {
            Some(Action::DragEnd(translation_x)) => self.drag_end(translation_x),
            _ => None,
        }
    }

    /// Rebuild the carousel for a reloaded config, keeping the active card
    /// when it still exists
    pub fn apply_config(&mut self, config: &Config) {
        self.interrupt_gesture();

        let cards = item::carousel_items(config.image_count);
        self.controller.set_item_count(cards.len());

        let state = self.controller.state().clone();
        self.carousel = CarouselComponent::new(state.clone(), cards, config);
        self.indicator = PageIndicator::new(state, config.image_count);

        // The header may have shrunk to nothing
        self.scroll_offset = self.scroll_offset.min(self.header_rows());
        self.search_bar.pinned = self.is_search_pinned();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────

    /// Rows the header occupies when fully expanded
    pub fn header_rows(&self) -> u16 {
        if self.has_carousel() {
            CAROUSEL_ROWS + INDICATOR_ROWS
        } else {
            0
        }
    }

    /// The header has scrolled away and the search bar sticks to the top
    pub fn is_search_pinned(&self) -> bool {
        self.has_carousel() && self.scroll_offset >= self.header_rows()
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.header_rows());
        self.search_bar.pinned = self.is_search_pinned();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.search_bar.pinned = self.is_search_pinned();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Items matching the current query
    pub fn filtered_items(&self) -> Vec<&ListItem> {
        filter_items(&self.items, &self.search_bar.query)
    }

    /// Select next item, wrapping to the first
    pub fn next(&mut self) {
        let len = self.filtered_items().len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Select previous item, wrapping to the last
    pub fn previous(&mut self) {
        let len = self.filtered_items().len();
        if len == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(previous));
    }

    pub fn select_first(&mut self) {
        let selection = if self.filtered_items().is_empty() {
            None
        } else {
            Some(0)
        };
        self.list_state.select(selection);
    }

    pub fn select_last(&mut self) {
        let len = self.filtered_items().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_bar.focus();
    }

    pub fn exit_search_mode(&mut self) {
        self.search_bar.unfocus();
    }

    pub fn clear_search(&mut self) {
        self.search_bar.clear();
        self.select_first();
    }

    pub fn search_input(&mut self, c: char) {
        self.search_bar.push(c);
        self.select_first();
    }

    pub fn search_backspace(&mut self) {
        self.search_bar.pop();
        self.select_first();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // List navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Screen scrolling
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollDown)
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollUp)
            }

            // Carousel
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                return self.carousel.handle_key_event(key);
            }

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            KeyCode::Char('r') => Some(Action::ReloadConfig),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(action) = self.carousel.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        if let Some(action) = self.search_bar.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }

        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_screen_layout(area, self.has_carousel(), self.scroll_offset);

        self.carousel.draw(frame, layout.carousel)?;
        self.indicator.draw(frame, layout.indicator)?;
        self.search_bar.draw(frame, layout.search)?;

        let visible = filter_items(&self.items, &self.search_bar.query);
        render_item_list(
            frame,
            layout.list,
            &visible,
            self.items.len(),
            &mut self.list_state,
        );

        render_help_bar(frame, layout.help, self.search_bar.focused, self.is_swiping());
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect, search_focused: bool, swiping: bool) {
    let spans = if swiping {
        vec![Span::styled(
            " Swiping... release to settle",
            Style::default().fg(Color::Cyan),
        )]
    } else if search_focused {
        vec![
            key_hint("Esc", Color::Yellow),
            Span::raw("Clear  "),
            key_hint("Enter", Color::Green),
            Span::raw("Done"),
        ]
    } else {
        vec![
            key_hint("q", Color::Yellow),
            Span::raw("Quit "),
            key_hint("←/→", Color::Cyan),
            Span::raw("Swipe "),
            key_hint("j/k", Color::Cyan),
            Span::raw("Move "),
            key_hint("/", Color::Cyan),
            Span::raw("Search "),
            key_hint("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
