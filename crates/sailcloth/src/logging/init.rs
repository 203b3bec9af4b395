use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g. `"sailcloth=debug"` to
/// see viewport lifecycle or `"sailcloth=trace"` to add per-frame timing.
/// Without it `RUST_LOG` is consulted, then `warn` is used.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are ignored.
///
/// A logger the host installed first is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Frame loops are chatty below warn.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(e) => log::debug!("logger already installed: {e}"),
        }
    });
}
