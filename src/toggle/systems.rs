//! ECS glue for the toggle widget
//!
//! Input arrives through Bevy's `Interaction` and keyboard state, time through
//! `Time`, and the widget's `displayed()` state is copied onto the three
//! element entities named in `ToggleElements`.

use crate::core::settings::ToggleSettings;
use crate::toggle::widget::{Interactable, ToggleWidget};
use bevy::input_focus::InputFocus;
use bevy::prelude::*;

/// The three entities a toggle animates. The scene graph owns them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleElements {
    /// Static background, tinted between the two colors
    pub background: Entity,
    /// Dynamic underlay, scaled down to nothing while on
    pub underlay: Entity,
    /// The moving circle
    pub indicator: Entity,
}

#[derive(Component)]
pub struct ToggleBackground;

#[derive(Component)]
pub struct ToggleUnderlay;

#[derive(Component)]
pub struct ToggleIndicator;

/// Sent every time a user interaction changes a toggle
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleValueChanged {
    pub toggle: Entity,
    pub is_on: bool,
}

/// Request to set a toggle's value without animating or notifying
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetToggleValue {
    pub toggle: Entity,
    pub value: bool,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToggleSystemSet {
    /// Element validation, value requests and user input
    Input,
    /// Advancing transitions and writing element properties
    Animate,
}

pub struct ToggleWidgetPlugin;

impl Plugin for ToggleWidgetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToggleSettings>()
            .add_event::<ToggleValueChanged>()
            .add_event::<SetToggleValue>()
            .configure_sets(
                Update,
                (ToggleSystemSet::Input, ToggleSystemSet::Animate).chain(),
            )
            .add_systems(
                Update,
                (
                    validate_toggle_elements,
                    handle_set_toggle_value,
                    handle_toggle_clicks,
                    handle_toggle_submit,
                )
                    .chain()
                    .in_set(ToggleSystemSet::Input),
            )
            .add_systems(
                Update,
                (advance_toggle_transitions, apply_toggle_visuals)
                    .chain()
                    .in_set(ToggleSystemSet::Animate),
            );
    }
}

/// Check element references as soon as a toggle is attached
pub fn validate_toggle_elements(
    toggles: Query<(Entity, &ToggleElements), Added<ToggleElements>>,
    backgrounds: Query<(), With<BackgroundColor>>,
    animated: Query<(), (With<Transform>, With<Node>)>,
) -> Result {
    for (entity, elements) in toggles.iter() {
        if !backgrounds.contains(elements.background) {
            return Err(format!(
                "Toggle {entity} background {} has no BackgroundColor",
                elements.background
            )
            .into());
        }
        for (role, element) in
            [("underlay", elements.underlay), ("indicator", elements.indicator)]
        {
            if !animated.contains(element) {
                return Err(format!(
                    "Toggle {entity} {role} {element} needs Node and Transform"
                )
                .into());
            }
        }
        debug!("Toggle {entity} attached with valid elements");
    }
    Ok(())
}

pub fn handle_set_toggle_value(
    mut requests: EventReader<SetToggleValue>,
    mut toggles: Query<&mut ToggleWidget>,
) {
    for request in requests.read() {
        let Ok(mut widget) = toggles.get_mut(request.toggle) else {
            warn!("SetToggleValue for {} which is not a toggle", request.toggle);
            continue;
        };
        widget.set_value(request.value);
    }
}

/// Pointer clicks arrive as `Interaction::Pressed` on the toggle root
pub fn handle_toggle_clicks(
    mut toggles: Query<
        (Entity, &Interaction, &mut ToggleWidget),
        Changed<Interaction>,
    >,
    mut focus: Option<ResMut<InputFocus>>,
    mut changed: EventWriter<ToggleValueChanged>,
) {
    for (entity, interaction, mut widget) in toggles.iter_mut() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        widget.on_pointer_click();
        if let Some(focus) = focus.as_mut() {
            focus.set(entity);
        }
        info!("Toggle {entity} clicked, now {}", on_off(widget.is_on()));
        changed.write(ToggleValueChanged {
            toggle: entity,
            is_on: widget.is_on(),
        });
    }
}

/// Submit keys act on whichever toggle holds input focus
pub fn handle_toggle_submit(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<ToggleSettings>,
    focus: Option<Res<InputFocus>>,
    mut toggles: Query<&mut ToggleWidget>,
    mut changed: EventWriter<ToggleValueChanged>,
) {
    if !keyboard.any_just_pressed(settings.submit_keys.iter().copied()) {
        return;
    }
    let Some(entity) = focus.and_then(|focus| focus.get()) else {
        return;
    };
    let Ok(mut widget) = toggles.get_mut(entity) else {
        return;
    };
    widget.on_submit();
    info!("Toggle {entity} submitted, now {}", on_off(widget.is_on()));
    changed.write(ToggleValueChanged {
        toggle: entity,
        is_on: widget.is_on(),
    });
}

pub fn advance_toggle_transitions(
    time: Res<Time>,
    mut toggles: Query<&mut ToggleWidget>,
) {
    let delta = time.delta_secs();
    for mut widget in toggles.iter_mut() {
        // Only touch the component mutably while animating
        if widget.is_animating() {
            widget.advance(delta);
        }
    }
}

/// Copy each changed widget's displayed state onto its elements
pub fn apply_toggle_visuals(
    toggles: Query<(&ToggleWidget, &ToggleElements), Changed<ToggleWidget>>,
    mut backgrounds: Query<&mut BackgroundColor>,
    mut animated: Query<(&mut Transform, &mut Node)>,
) {
    for (widget, elements) in toggles.iter() {
        let visuals = widget.displayed();

        if let Ok(mut background) = backgrounds.get_mut(elements.background) {
            background.0 = visuals.background_color;
        }

        if let Ok((mut transform, _)) = animated.get_mut(elements.underlay) {
            transform.scale = visuals.underlay_scale;
        }

        if let Ok((mut transform, mut node)) =
            animated.get_mut(elements.indicator)
        {
            transform.scale.x = visuals.indicator_scale_x;
            node.left = Val::Px(visuals.indicator_position.x);
            node.top = Val::Px(visuals.indicator_position.y);
        }
    }
}

fn on_off(is_on: bool) -> &'static str {
    if is_on {
        "on"
    } else {
        "off"
    }
}
