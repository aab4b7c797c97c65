//! Component trait - Interface for UI components
//!
//! A component turns raw terminal events into Actions, applies Actions to
//! its own state, and draws itself into the area it is given.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` map input to an Action
/// 2. `update` applies an Action, optionally returning a follow-up
/// 3. `draw` renders
pub trait Component {
    /// One-time setup after construction
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key press to an Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Map a mouse event to an Action.
    ///
    /// Coordinates are absolute terminal cells; components compare them
    /// against the area they were last drawn into.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`. Must not change observable state.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
