// Settings ///////////////////////////////////////////////////////////////////
// This module contains the default tuning for the toggle widget.

use bevy::prelude::*;

// Animation //////////////////////////////////////////////////////////////////

/// Length of a full on/off transition, in seconds
pub const DEFAULT_ANIMATION_DURATION: f32 = 1.0;
/// How far the indicator stretches horizontally at the peak of the bounce
/// (0.2 means 120% of its resting width)
pub const DEFAULT_BOUNCE_SCALE: f32 = 0.2;

// Colors /////////////////////////////////////////////////////////////////////

/// Background tint while the toggle is off
pub const DEFAULT_DISABLED_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Background tint while the toggle is on
pub const DEFAULT_ENABLED_COLOR: [f32; 4] = [0.0, 0.45, 1.0, 1.0];

// Indicator Anchors //////////////////////////////////////////////////////////

/// Indicator offset inside the track while off, in logical pixels
pub const DEFAULT_DISABLED_ANCHOR: [f32; 2] = [4.0, 4.0];
/// Indicator offset inside the track while on, in logical pixels
pub const DEFAULT_ENABLED_ANCHOR: [f32; 2] = [36.0, 4.0];

// Input //////////////////////////////////////////////////////////////////////

/// Keys that count as a submit action on the focused toggle
pub const SUBMIT_KEYS: [KeyCode; 3] =
    [KeyCode::Enter, KeyCode::NumpadEnter, KeyCode::Space];

/// Runtime-adjustable settings stored as a resource
#[derive(Resource, Debug, Clone)]
pub struct ToggleSettings {
    pub submit_keys: Vec<KeyCode>,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            submit_keys: SUBMIT_KEYS.to_vec(),
        }
    }
}
