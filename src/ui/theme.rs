use bevy::prelude::*;

// Window
pub const WINDOW_TITLE: &str = "Animated Toggle";
pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 320.0;

// Background Color
pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

// Text
pub const LABEL_FONT_SIZE: f32 = 24.0;
pub const LABEL_TEXT_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

// Toggle Geometry ////////////////////////////////////////////////////////////

/// Size of the whole track
pub const TOGGLE_WIDTH: f32 = 64.0;
pub const TOGGLE_HEIGHT: f32 = 32.0;
/// Diameter of the indicator circle
pub const TOGGLE_INDICATOR_SIZE: f32 = 24.0;

// Toggle Colors //////////////////////////////////////////////////////////////

/// Underlay shown over the background while the toggle is off
pub const TOGGLE_UNDERLAY_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);
pub const TOGGLE_INDICATOR_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
