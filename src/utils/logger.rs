use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Logger without timestamps, colors kept.
///
/// Use TOGGLE_LOG=info or TOGGLE_LOG=debug to increase verbosity.
/// Example: TOGGLE_LOG=debug cargo run
pub fn init_custom_logger(debug: bool) {
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let fallback = if debug { "debug" } else { "warn" };
    let default_level =
        std::env::var("TOGGLE_LOG").unwrap_or_else(|_| fallback.to_string());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    let mut filter = tracing_subscriber::filter::EnvFilter::from_default_env();
    for directive in [
        default_level.as_str(),
        "wgpu_core=error",
        "wgpu_hal=error",
        "bevy_render=error",
    ] {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(err) => eprintln!("Ignoring log directive '{directive}': {err}"),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(filter),
        )
        .init();
}
