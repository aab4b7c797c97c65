//! Model layer - state and the carousel core
//!
//! - `UiState` - shared, observable carousel state
//! - `layout` - pure card geometry
//! - `CarouselController` - drag state machine, sole writer of `UiState`
//! - `item` - static catalog and search filter
//! - `ModalStack` - modal overlay management

pub mod carousel;
pub mod item;
pub mod layout;
pub mod modal;
pub mod ui;

pub use carousel::{CarouselController, DragPhase, DragSample, PageChange, PageFeedback};
pub use ui::UiState;
