// src/logging.rs
use env_logger::Env;

/// Initialises `env_logger` on stderr. `RUST_LOG` wins over `-v` flags.
pub fn init(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
