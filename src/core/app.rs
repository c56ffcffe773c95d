//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::errors::ToggleResult;
use crate::toggle::ToggleWidgetPlugin;
use crate::ui::theme::{
    BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use crate::ui::DemoPlugin;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> ToggleResult<App> {
    cli_args.validate()?;
    // Surface config mistakes before a window ever opens
    cli_args.toggle_config()?;

    let mut app = App::new();
    app.insert_resource(cli_args)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Keep redrawing while transitions run, even without input
        .insert_resource(WinitSettings::game())
        .add_plugins(configure_default_plugins())
        .add_plugins((ToggleWidgetPlugin, DemoPlugin));
    Ok(app)
}

/// Configure the default Bevy plugins with custom settings
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}
