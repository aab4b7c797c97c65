//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod carousel;
pub mod help_dialog;
pub mod home;
pub mod item_list;
pub mod layout;
pub mod page_indicator;
pub mod quit_dialog;
pub mod search_bar;
pub mod splash;

pub use help_dialog::HelpDialog;
pub use home::HomeComponent;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
