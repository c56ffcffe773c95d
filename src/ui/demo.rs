//! Demo scene: one toggle with a label that follows its value

use crate::core::cli::CliArgs;
use crate::toggle::spawn::spawn_animated_toggle_with;
use crate::toggle::systems::{ToggleSystemSet, ToggleValueChanged};
use crate::toggle::widget::ToggleWidget;
use crate::ui::theme::*;
use bevy::prelude::*;

#[derive(Component)]
pub struct ValueLabel;

#[derive(Component)]
pub struct DebugLabel;

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_demo)
            .add_systems(
                Update,
                (
                    update_value_label,
                    update_debug_label.run_if(debug_enabled),
                )
                    .after(ToggleSystemSet::Animate),
            )
            .add_systems(Update, exit_on_esc);
    }
}

fn debug_enabled(cli_args: Res<CliArgs>) -> bool {
    cli_args.debug
}

pub fn setup_demo(mut commands: Commands, cli_args: Res<CliArgs>) -> Result {
    commands.spawn(Camera2d);

    let container = commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::Px(16.0),
            ..default()
        })
        .id();

    let config = cli_args.toggle_config()?;
    let label = label_text(config.is_on);
    let toggle = spawn_animated_toggle_with(
        &mut commands,
        container,
        config,
        |widget| {
            widget.subscribe(|is_on| {
                debug!("Toggle listener received {is_on}");
            });
        },
    )?;
    info!("Spawned demo toggle {toggle}");

    let value_label = commands
        .spawn((ValueLabel, label_bundle(label)))
        .id();
    commands.entity(container).add_child(value_label);

    if cli_args.debug {
        let debug_label = commands
            .spawn((DebugLabel, label_bundle(String::new())))
            .id();
        commands.entity(container).add_child(debug_label);
    }
    Ok(())
}

fn label_bundle(text: String) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(LABEL_TEXT_COLOR),
    )
}

fn label_text(is_on: bool) -> String {
    if is_on {
        "On".to_string()
    } else {
        "Off".to_string()
    }
}

pub fn update_value_label(
    mut changes: EventReader<ToggleValueChanged>,
    mut labels: Query<&mut Text, With<ValueLabel>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    for mut text in labels.iter_mut() {
        text.0 = label_text(change.is_on);
    }
}

pub fn update_debug_label(
    toggles: Query<&ToggleWidget>,
    mut labels: Query<&mut Text, With<DebugLabel>>,
) {
    let Some(widget) = toggles.iter().next() else {
        return;
    };
    let status = match widget.bounces().last() {
        Some(bounce) => format!(
            "{} bounce(s), newest {:?} at {:.2}s, scale x {:.2}",
            widget.bounces().len(),
            bounce.phase(),
            bounce.elapsed(),
            widget.displayed().indicator_scale_x
        ),
        None if widget.is_animating() => "moving".to_string(),
        None => "idle".to_string(),
    };
    for mut text in labels.iter_mut() {
        text.0.clone_from(&status);
    }
}

fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
