//! Transition state machines
//!
//! An interaction starts two independent tracks:
//!
//! - `Transition` moves color, underlay scale and indicator position to the
//!   new target. A later interaction replaces it.
//! - `Bounce` stretches the indicator horizontally. Bounces are never
//!   replaced; each one runs to the end of its own timeline.
//!
//! Timeline for a duration `d`:
//!
//! ```text
//! 0           d/2          3d/4          d
//! |-- color / underlay / indicator move --|
//! |-- Waiting --|-- Expanding --|-- Contracting --|
//! ```

use crate::toggle::config::ToggleConfig;
use crate::toggle::ease::EaseCurve;
use crate::toggle::visuals::VisualState;
use bevy::color::Mix;
use bevy::prelude::*;

/// Indicator X scale when no bounce is stretching it
pub const REST_SCALE_X: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: VisualState,
    to: VisualState,
    duration: f32,
    elapsed: f32,
    color_ease: EaseCurve,
    underlay_scale_ease: EaseCurve,
    move_ease: EaseCurve,
}

impl Transition {
    pub fn new(from: VisualState, to: VisualState, config: &ToggleConfig) -> Self {
        Self {
            from,
            to,
            duration: config.animation_duration,
            elapsed: 0.0,
            color_ease: config.color_ease,
            underlay_scale_ease: config.underlay_scale_ease,
            move_ease: config.move_ease,
        }
    }

    pub fn target(&self) -> &VisualState {
        &self.to
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Move the local clock forward by `delta` seconds
    pub fn advance(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed = (self.elapsed + delta).min(self.duration);
        }
    }

    /// Visual state at the current local time
    pub fn sample(&self) -> VisualState {
        self.sample_at(self.elapsed)
    }

    /// Visual state at local time `t` seconds.
    ///
    /// `indicator_scale_x` is left at the target's resting value; the bounce
    /// track owns it.
    pub fn sample_at(&self, t: f32) -> VisualState {
        if t >= self.duration {
            return self.to;
        }
        let s = t.max(0.0) / self.duration;

        let color = self.color_ease.progress(s);
        let underlay = self.underlay_scale_ease.progress(s);
        let movement = self.move_ease.progress(s);

        VisualState {
            background_color: self
                .from
                .background_color
                .mix(&self.to.background_color, color),
            underlay_scale: self
                .from
                .underlay_scale
                .lerp(self.to.underlay_scale, underlay),
            indicator_position: self
                .from
                .indicator_position
                .lerp(self.to.indicator_position, movement),
            indicator_scale_x: self.to.indicator_scale_x,
        }
    }
}

/// Where a bounce is on its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePhase {
    Waiting,
    Expanding,
    Contracting,
    Done,
}

/// The indicator's horizontal bounce
#[derive(Debug, Clone, PartialEq)]
pub struct Bounce {
    duration: f32,
    elapsed: f32,
    bounce_scale: f32,
    ease: EaseCurve,
    /// Stretch showing when the expand phase began
    start: Option<f32>,
}

impl Bounce {
    pub fn new(config: &ToggleConfig) -> Self {
        Self {
            duration: config.animation_duration,
            elapsed: 0.0,
            bounce_scale: config.bounce_scale,
            ease: config.bounce_ease,
            start: None,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn phase(&self) -> BouncePhase {
        self.phase_at(self.elapsed)
    }

    pub fn phase_at(&self, t: f32) -> BouncePhase {
        let d = self.duration;
        if t >= d {
            BouncePhase::Done
        } else if t >= d * 0.75 {
            BouncePhase::Contracting
        } else if t >= d * 0.5 {
            BouncePhase::Expanding
        } else {
            BouncePhase::Waiting
        }
    }

    /// Move the local clock forward by `delta` seconds.
    ///
    /// `live_scale_x` is what the indicator shows right now; the expand phase
    /// picks up from it so a bounce that overlaps another never jumps.
    pub fn advance(&mut self, delta: f32, live_scale_x: f32) {
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + delta).min(self.duration);
        if self.start.is_none() && self.phase() != BouncePhase::Waiting {
            self.start = Some(live_scale_x);
        }
    }

    /// Stretch at the current local time, `None` while still waiting
    pub fn scale_x(&self) -> Option<f32> {
        self.scale_x_at(self.elapsed)
    }

    pub fn scale_x_at(&self, t: f32) -> Option<f32> {
        let d = self.duration;
        let quarter = d * 0.25;
        let start = self.start.unwrap_or(REST_SCALE_X);
        let peak = REST_SCALE_X + self.bounce_scale;

        match self.phase_at(t) {
            BouncePhase::Waiting => None,
            BouncePhase::Expanding => {
                let p = self.ease.progress((t - d * 0.5) / quarter);
                Some(start + (peak - start) * p)
            }
            BouncePhase::Contracting => {
                let p = self.ease.progress((t - d * 0.75) / quarter);
                Some(peak + (REST_SCALE_X - peak) * p)
            }
            BouncePhase::Done => Some(REST_SCALE_X),
        }
    }
}
