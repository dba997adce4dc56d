//! Log output setup.

use log::LevelFilter;

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "TESSELLATION_LOG";

/// Parses a level name, case-insensitively.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Installs a stdout logger at the level named by [`LOG_ENV`], `info` by default.
pub fn init() -> Result<(), String> {
    let level = match std::env::var(LOG_ENV) {
        Ok(value) => parse_level(&value).unwrap_or_else(|| {
            eprintln!("Unknown log level '{}' in {}, using info", value, LOG_ENV);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}
