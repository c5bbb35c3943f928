use log::LevelFilter;

/// Set up `env_logger` on stderr.
///
/// Only warnings are shown by default so the terminal stays clean for the
/// interactive grid; `debug_enabled` lowers the level to Debug. `RUST_LOG`
/// overrides both when set.
pub fn init_logger(debug_enabled: bool) {
    let level = level_for(debug_enabled);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // a second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
