//! The toggle widget
//!
//! `ToggleWidget` owns the boolean state, the listener list and the in-flight
//! transition. It knows nothing about entities: the systems in
//! `toggle::systems` feed it input and copy `displayed()` onto the elements.

use crate::core::errors::ToggleResult;
use crate::toggle::config::ToggleConfig;
use crate::toggle::listeners::{ListenerId, ToggleListeners};
use crate::toggle::transition::{Bounce, Transition, REST_SCALE_X};
use crate::toggle::visuals::VisualState;
use bevy::prelude::*;

/// Anything that reacts to pointer clicks and submit actions.
///
/// Input systems only talk to this trait, so every input modality maps to the
/// same `interact` call.
pub trait Interactable {
    fn interact(&mut self);

    fn on_pointer_click(&mut self) {
        self.interact();
    }

    fn on_submit(&mut self) {
        self.interact();
    }
}

#[derive(Component, Debug)]
pub struct ToggleWidget {
    is_on: bool,
    config: ToggleConfig,
    listeners: ToggleListeners,
    displayed: VisualState,
    transition: Option<Transition>,
    /// Oldest first; each runs out its own timeline
    bounces: Vec<Bounce>,
}

impl ToggleWidget {
    /// Build a widget, rejecting invalid configuration up front
    pub fn new(config: ToggleConfig) -> ToggleResult<Self> {
        config.validate()?;
        let is_on = config.is_on;
        Ok(Self {
            is_on,
            displayed: VisualState::target(is_on, &config),
            config,
            listeners: ToggleListeners::default(),
            transition: None,
            bounces: Vec::new(),
        })
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Set the value and snap to it. No animation, no notification.
    pub fn set_value(&mut self, value: bool) {
        self.is_on = value;
        self.refresh_visual_state();
    }

    /// Snap every element to the resting state for the current value
    pub fn refresh_visual_state(&mut self) {
        self.transition = None;
        self.bounces.clear();
        self.displayed = VisualState::target(self.is_on, &self.config);
    }

    /// Resting state the widget is heading to
    pub fn target(&self) -> VisualState {
        VisualState::target(self.is_on, &self.config)
    }

    /// What the elements should show this frame
    pub fn displayed(&self) -> VisualState {
        self.displayed
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Bounces still running, oldest first
    pub fn bounces(&self) -> &[Bounce] {
        &self.bounces
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || !self.bounces.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(bool) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Advance the running transition and bounces by `delta` seconds.
    ///
    /// Returns true while the displayed state is still changing. Finished
    /// tracks are dropped here.
    pub fn advance(&mut self, delta: f32) -> bool {
        if !self.is_animating() {
            return false;
        }
        let live_scale_x = self.displayed.indicator_scale_x;

        if let Some(transition) = self.transition.as_mut() {
            transition.advance(delta);
            self.displayed = transition.sample();
            if transition.is_finished() {
                debug!("Toggle transition finished (is_on: {})", self.is_on);
                self.transition = None;
            }
        }

        for bounce in self.bounces.iter_mut() {
            bounce.advance(delta, live_scale_x);
        }
        // The newest bounce that has started owns the stretch
        self.displayed.indicator_scale_x = self
            .bounces
            .iter()
            .rev()
            .filter(|bounce| !bounce.is_finished())
            .find_map(Bounce::scale_x)
            .unwrap_or(REST_SCALE_X);
        self.bounces.retain(|bounce| !bounce.is_finished());
        true
    }
}

impl Interactable for ToggleWidget {
    fn interact(&mut self) {
        self.is_on = !self.is_on;
        self.listeners.notify(self.is_on);

        // A new transition replaces the old one and starts from what is
        // currently on screen. Running bounces are left to finish.
        let to = VisualState::target(self.is_on, &self.config);
        self.transition = Some(Transition::new(self.displayed, to, &self.config));
        self.bounces.push(Bounce::new(&self.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(widget: &mut ToggleWidget) -> Arc<Mutex<Vec<bool>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        widget.subscribe(move |on| sink.lock().unwrap().push(on));
        seen
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ToggleConfig {
            animation_duration: 0.0,
            ..default()
        };
        assert!(ToggleWidget::new(config).is_err());
    }

    #[test]
    fn test_starts_at_configured_state() {
        let config = ToggleConfig {
            is_on: true,
            ..default()
        };
        let widget = ToggleWidget::new(config.clone()).unwrap();
        assert!(widget.is_on());
        assert_eq!(widget.displayed(), VisualState::target(true, &config));
        assert!(!widget.is_animating());
    }

    #[test]
    fn test_set_value_is_idempotent_and_silent() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        let seen = recorder(&mut widget);

        widget.set_value(true);
        let once = widget.displayed();
        widget.set_value(true);
        assert_eq!(widget.displayed(), once);
        assert_eq!(once, widget.target());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_interact_flips_and_notifies_once() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        let seen = recorder(&mut widget);

        widget.interact();
        assert!(widget.is_on());
        assert_eq!(*seen.lock().unwrap(), vec![true]);
        assert!(widget.is_animating());

        widget.interact();
        assert!(!widget.is_on());
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_listener_sees_value_before_interact_returns() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        let seen = recorder(&mut widget);
        widget.on_pointer_click();
        assert_eq!(seen.lock().unwrap().last(), Some(&true));
        widget.on_submit();
        assert_eq!(seen.lock().unwrap().last(), Some(&false));
    }

    #[test]
    fn test_set_value_cancels_transition() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        widget.interact();
        widget.advance(0.1);
        widget.set_value(false);
        assert!(!widget.is_animating());
        assert_eq!(widget.displayed(), widget.target());
        assert!(!widget.advance(0.1));
    }

    #[test]
    fn test_advance_reaches_target_and_releases_transition() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        widget.interact();
        assert_eq!(widget.transition().unwrap().target(), &widget.target());

        let duration = widget.config().animation_duration;
        assert!(widget.advance(duration * 0.5));
        assert_ne!(widget.displayed(), widget.target());
        assert!(widget.advance(duration));
        assert_eq!(widget.displayed(), widget.target());
        assert!(!widget.is_animating());
    }

    #[test]
    fn test_second_interact_lets_running_bounce_finish() {
        let config = ToggleConfig {
            animation_duration: 1.0,
            bounce_scale: 0.2,
            bounce_ease: crate::toggle::EaseCurve::Linear,
            ..default()
        };
        let mut widget = ToggleWidget::new(config).unwrap();
        let scale_x = |widget: &ToggleWidget| widget.displayed().indicator_scale_x;

        widget.interact();
        widget.advance(0.75);
        assert!((scale_x(&widget) - 1.2).abs() < 1e-5);

        // Second click at the peak of the first bounce
        widget.interact();
        assert_eq!(widget.bounces().len(), 2);

        // The first bounce keeps contracting instead of freezing at the peak
        widget.advance(0.125);
        assert!((scale_x(&widget) - 1.1).abs() < 1e-5);

        widget.advance(0.125);
        assert_eq!(widget.bounces().len(), 1);
        assert_eq!(scale_x(&widget), 1.0);

        // The second bounce runs its own full timeline from rest
        widget.advance(0.25);
        assert_eq!(scale_x(&widget), 1.0);
        widget.advance(0.25);
        assert!((scale_x(&widget) - 1.2).abs() < 1e-5);
        widget.advance(0.25);
        assert_eq!(scale_x(&widget), 1.0);
        assert!(!widget.is_animating());
        assert_eq!(widget.displayed(), widget.target());
    }

    #[test]
    fn test_set_value_drops_running_bounces() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        widget.interact();
        widget.interact();
        assert_eq!(widget.bounces().len(), 2);
        widget.refresh_visual_state();
        assert!(widget.bounces().is_empty());
        assert_eq!(widget.displayed(), widget.target());
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let mut widget = ToggleWidget::new(ToggleConfig::default()).unwrap();
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        let id = widget.subscribe(move |_| *counter.lock().unwrap() += 1);
        assert!(widget.unsubscribe(id));
        widget.interact();
        assert_eq!(*hits.lock().unwrap(), 0);
    }
}
