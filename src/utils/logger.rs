use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Layout of log lines on stderr. Rendered views always go to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per event, for log collectors.
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset. `--verbose` wins over a configured level.
pub fn default_directives(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "certify_hub=debug,info".to_string(),
        (false, Some(level)) => format!("certify_hub={}", level),
        (false, None) => "certify_hub=info".to_string(),
    }
}

pub fn init_logger(format: LogFormat, verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, level)));
    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json().flatten_event(true)).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false, None), "certify_hub=info");
        assert_eq!(default_directives(false, Some("warn")), "certify_hub=warn");
        assert_eq!(default_directives(true, Some("warn")), "certify_hub=debug,info");
    }

    #[test]
    fn test_log_format_from_flag() {
        assert_eq!(LogFormat::from_json_flag(true), LogFormat::Json);
        assert_eq!(LogFormat::from_json_flag(false), LogFormat::Compact);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
