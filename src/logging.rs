use std::sync::Once;

/// Logger configuration.
///
/// The level comes from the command line rather than `RUST_LOG`, so a run
/// never depends on the environment.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Map a `-v` count onto a level: warn, info, debug, trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        Self {
            level,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level);
        builder.write_style(config.write_style);
        // A test harness may already have installed a logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized at {}", config.level);
        }
    });
}
