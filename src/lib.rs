pub mod core;
pub mod toggle;
pub mod ui;
pub mod utils;


pub use toggle::{Interactable, ToggleConfig, ToggleWidget, ToggleWidgetPlugin};
