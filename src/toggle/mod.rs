//! Animated toggle switch
//!
//! A two-state control that tweens its background color, underlay scale and
//! indicator position when clicked or submitted, with a short horizontal
//! bounce on the indicator halfway through.
//!
//! - `widget`: state, listeners and the `Interactable` capability
//! - `visuals`: resting state as a pure function of the value
//! - `transition`: the time-sampled move track and bounce tracks
//! - `systems`: Bevy input, animation and element sync
//! - `spawn`: building a toggle and its elements in one call

pub mod config;
pub mod ease;
pub mod listeners;
pub mod spawn;
pub mod systems;
pub mod transition;
pub mod visuals;
pub mod widget;

pub use config::ToggleConfig;
pub use ease::EaseCurve;
pub use listeners::ListenerId;
pub use spawn::{spawn_animated_toggle, spawn_animated_toggle_with};
pub use systems::{
    SetToggleValue, ToggleElements, ToggleSystemSet, ToggleValueChanged,
    ToggleWidgetPlugin,
};
pub use transition::{Bounce, BouncePhase, Transition};
pub use visuals::VisualState;
pub use widget::{Interactable, ToggleWidget};
