//! Ease curve selectors for the toggle transition.
//!
//! `EaseCurve` is the serializable name a config file uses; the actual shape
//! comes from Bevy's `EaseFunction`.

use bevy::math::curve::{Curve, EaseFunction};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EaseCurve {
    Linear,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    OutBack,
    InOutBack,
    OutElastic,
    OutBounce,
}

impl EaseCurve {
    pub fn function(self) -> EaseFunction {
        match self {
            EaseCurve::Linear => EaseFunction::Linear,
            EaseCurve::InQuad => EaseFunction::QuadraticIn,
            EaseCurve::OutQuad => EaseFunction::QuadraticOut,
            EaseCurve::InOutQuad => EaseFunction::QuadraticInOut,
            EaseCurve::InCubic => EaseFunction::CubicIn,
            EaseCurve::OutCubic => EaseFunction::CubicOut,
            EaseCurve::InOutCubic => EaseFunction::CubicInOut,
            EaseCurve::InSine => EaseFunction::SineIn,
            EaseCurve::OutSine => EaseFunction::SineOut,
            EaseCurve::InOutSine => EaseFunction::SineInOut,
            EaseCurve::InExpo => EaseFunction::ExponentialIn,
            EaseCurve::OutExpo => EaseFunction::ExponentialOut,
            EaseCurve::InOutExpo => EaseFunction::ExponentialInOut,
            EaseCurve::OutBack => EaseFunction::BackOut,
            EaseCurve::InOutBack => EaseFunction::BackInOut,
            EaseCurve::OutElastic => EaseFunction::ElasticOut,
            EaseCurve::OutBounce => EaseFunction::BounceOut,
        }
    }

    /// Map normalized time to interpolation progress.
    ///
    /// `t` is clamped to `0.0..=1.0`. The result may leave that range for
    /// overshooting curves like `OutBack` and `OutElastic`.
    pub fn progress(self, t: f32) -> f32 {
        if !t.is_finite() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        // Pin the endpoints so every curve lands exactly on its target
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.function().sample_clamped(t)
    }
}
