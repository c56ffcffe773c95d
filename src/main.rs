// An animated toggle switch made with the Bevy game engine.

use animated_toggle::core::{create_app, CliArgs};
use animated_toggle::utils::logger::init_custom_logger;

fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse_args();
    init_custom_logger(cli_args.debug);
    create_app(cli_args)?.run();
    Ok(())
}
