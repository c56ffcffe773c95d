//! Target-state derivation
//!
//! Pure functions from `is_on` to what the three toggle elements should show.
//! Both the snap in `set_value` and the end of every transition go through
//! `VisualState::target`, so they can never disagree.

use crate::toggle::config::ToggleConfig;
use bevy::prelude::*;

/// Everything the widget writes to its elements on a given frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Tint of the static background
    pub background_color: Color,
    /// Scale of the dynamic underlay
    pub underlay_scale: Vec3,
    /// Offset of the indicator inside the track
    pub indicator_position: Vec2,
    /// Horizontal stretch of the indicator, 1.0 at rest
    pub indicator_scale_x: f32,
}

impl VisualState {
    /// Resting state for the given value
    pub fn target(is_on: bool, config: &ToggleConfig) -> Self {
        Self {
            background_color: background_color(is_on, config),
            underlay_scale: underlay_scale(is_on),
            indicator_position: indicator_position(is_on, config),
            indicator_scale_x: 1.0,
        }
    }
}

pub fn background_color(is_on: bool, config: &ToggleConfig) -> Color {
    if is_on {
        config.enabled_color()
    } else {
        config.disabled_color()
    }
}

/// The "off" underlay collapses while the toggle is on.
pub fn underlay_scale(is_on: bool) -> Vec3 {
    if is_on {
        Vec3::ZERO
    } else {
        Vec3::ONE
    }
}

pub fn indicator_position(is_on: bool, config: &ToggleConfig) -> Vec2 {
    if is_on {
        config.enabled_anchor()
    } else {
        config.disabled_anchor()
    }
}
