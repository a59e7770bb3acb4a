use std::sync::Once;

/// Logger settings for binaries embedding the engine.
///
/// `env_filter` uses `env_logger` directive syntax, for example
/// `"fringe_engine::dispatch=debug,fringe_web=trace"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// ANSI coloring. `Never` when stderr is captured by a frontend process.
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a millisecond timestamp; frame timing is easier to
    /// read at that resolution.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Filter directives in effect: `env_filter`, else `rust_log`, else `info`.
    fn directives(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| "info".to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on stderr, once per process.
///
/// Stdout stays free for command streams. Later calls, and calls after some
/// other logger was installed, leave the existing logger in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&directives)
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized with {directives:?}"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}
