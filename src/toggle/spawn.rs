//! Spawning a complete toggle
//!
//! Builds the root node and its three elements in one go, so the
//! `ToggleElements` references are valid by construction.

use crate::core::errors::ToggleResult;
use crate::toggle::config::ToggleConfig;
use crate::toggle::systems::{
    ToggleBackground, ToggleElements, ToggleIndicator, ToggleUnderlay,
};
use crate::toggle::widget::ToggleWidget;
use crate::ui::theme::*;
use bevy::prelude::*;

#[derive(Component)]
pub struct AnimatedToggleRoot;

/// Spawn a toggle under `parent` and return the root entity.
///
/// The root carries `Button`, so Bevy's UI picking drives `Interaction` on it.
pub fn spawn_animated_toggle(
    commands: &mut Commands,
    parent: Entity,
    config: ToggleConfig,
) -> ToggleResult<Entity> {
    spawn_animated_toggle_with(commands, parent, config, |_| {})
}

/// Same as `spawn_animated_toggle`, with a hook to subscribe listeners before
/// the widget is inserted
pub fn spawn_animated_toggle_with<F>(
    commands: &mut Commands,
    parent: Entity,
    config: ToggleConfig,
    setup: F,
) -> ToggleResult<Entity>
where
    F: FnOnce(&mut ToggleWidget),
{
    let mut widget = ToggleWidget::new(config)?;
    setup(&mut widget);
    let visuals = widget.displayed();
    let radius = BorderRadius::all(Val::Px(TOGGLE_HEIGHT / 2.0));

    let background = commands
        .spawn((
            ToggleBackground,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(visuals.background_color),
            radius,
        ))
        .id();

    let underlay = commands
        .spawn((
            ToggleUnderlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(TOGGLE_UNDERLAY_COLOR),
            radius,
            Transform::from_scale(visuals.underlay_scale),
        ))
        .id();

    let indicator = commands
        .spawn((
            ToggleIndicator,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(TOGGLE_INDICATOR_SIZE),
                height: Val::Px(TOGGLE_INDICATOR_SIZE),
                left: Val::Px(visuals.indicator_position.x),
                top: Val::Px(visuals.indicator_position.y),
                ..default()
            },
            BackgroundColor(TOGGLE_INDICATOR_COLOR),
            BorderRadius::MAX,
            Transform::from_scale(Vec3::new(visuals.indicator_scale_x, 1.0, 1.0)),
        ))
        .id();

    let root = commands
        .spawn((
            AnimatedToggleRoot,
            Button,
            Node {
                width: Val::Px(TOGGLE_WIDTH),
                height: Val::Px(TOGGLE_HEIGHT),
                ..default()
            },
            widget,
            ToggleElements {
                background,
                underlay,
                indicator,
            },
        ))
        .add_children(&[background, underlay, indicator])
        .id();

    commands.entity(parent).add_child(root);
    Ok(root)
}
