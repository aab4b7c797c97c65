//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it routes events and actions between components
//! and turns committed page changes into user-visible feedback.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HelpDialog, HomeComponent, QuitDialog, SplashComponent};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, SubscriptionId};
use crate::model::{PageChange, UiState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::cell::Cell;
use std::rc::Rc;

/// Ticks the page indicator stays highlighted after a page change
const FLASH_TICKS: u8 = 3;

/// Written by the carousel feedback hook, drained by the App and main loop
#[derive(Debug, Default)]
struct FeedbackSignal {
    flash_ticks: Cell<u8>,
    ring_bell: Cell<bool>,
    bell: Cell<bool>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Shared carousel state
    ui_state: UiState,
    subscription: SubscriptionId,

    /// Set by any state change, cleared by the main loop after drawing
    needs_redraw: Rc<Cell<bool>>,

    feedback: Rc<FeedbackSignal>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config) -> App {
        let ui_state = UiState::new();

        let needs_redraw = Rc::new(Cell::new(true));
        let dirty = Rc::clone(&needs_redraw);
        let subscription = ui_state.subscribe(move |_| dirty.set(true));

        let feedback = Rc::new(FeedbackSignal::default());
        feedback.ring_bell.set(config.bell_on_page_change);
        let signal = Rc::clone(&feedback);
        let on_page_change = move |change: PageChange| {
            signal.flash_ticks.set(FLASH_TICKS);
            if signal.ring_bell.get() {
                signal.bell.set(true);
            }
            tracing::debug!(
                "page feedback: {} -> {} ({})",
                change.from,
                change.to,
                if change.is_forward() { "forward" } else { "back" }
            );
        };

        App {
            mode: AppMode::Splash,
            modals: ModalStack::new(),
            should_quit: false,
            home: HomeComponent::new(config, ui_state.clone(), on_page_change),
            ui_state,
            subscription,
            needs_redraw,
            feedback,
            splash: SplashComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Whether the screen is out of date; clears the flag
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Whether a bell is pending; clears the request
    pub fn take_bell(&self) -> bool {
        self.feedback.bell.replace(false)
    }

    /// Release a card held by the pointer, e.g. before a modal takes input
    fn interrupt_gesture(&mut self) {
        if self.home.interrupt_gesture().is_some() {
            self.sync_flash();
        }
    }

    fn reload_config(&mut self) {
        self.interrupt_gesture();
        let config = Config::load();
        self.feedback.ring_bell.set(config.bell_on_page_change);
        self.home.apply_config(&config);
        tracing::info!("config reloaded: {} cards", config.image_count);
    }

    fn sync_flash(&mut self) {
        self.home
            .indicator
            .set_flash(self.feedback.flash_ticks.get() > 0);
    }

    fn tick_flash(&mut self) {
        let ticks = self.feedback.flash_ticks.get();
        if ticks > 0 {
            self.feedback.flash_ticks.set(ticks - 1);
            self.sync_flash();
            self.needs_redraw.set(true);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.ui_state.unsubscribe(self.subscription);
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        self.home.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Components may change view state without emitting an action
        self.needs_redraw.set(true);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top() {
                    self.handle_modal_key_event(modal, key)
                } else if self.home.search_bar.focused {
                    self.home.search_bar.handle_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }
        if mouse.kind != MouseEventKind::Moved {
            self.needs_redraw.set(true);
        }
        self.home.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            tracing::trace!("{}", action);
            self.needs_redraw.set(true);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.tick_flash();
            }
            Action::SplashComplete => {
                tracing::info!("splash complete, showing carousel");
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}
            Action::ReloadConfig => self.reload_config(),

            // ─────────────────────────────────────────────────────────────────
            // Carousel
            // ─────────────────────────────────────────────────────────────────
            Action::DragUpdate(translation_x) => self.home.drag_update(translation_x),
            Action::DragEnd(translation_x) => {
                if self.home.drag_end(translation_x).is_some() {
                    self.sync_flash();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // List and Scrolling (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(),
            Action::PrevItem => self.home.previous(),
            Action::FirstItem => self.home.select_first(),
            Action::LastItem => self.home.select_last(),
            Action::ScrollUp => self.home.scroll_up(),
            Action::ScrollDown => self.home.scroll_down(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.interrupt_gesture();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if self.modals.top() != Some(Modal::Help) {
                    self.interrupt_gesture();
                    self.help_dialog.scroll_offset = 0;
                }
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::ClearSearch => self.home.clear_search(),
            Action::SearchInput(c) => self.home.search_input(c),
            Action::SearchBackspace => self.home.search_backspace(),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                self.home.draw(frame, area)?;

                let modals: Vec<Modal> = self.modals.iter().copied().collect();
                for modal in modals {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}
