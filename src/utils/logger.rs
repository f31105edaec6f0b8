use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Monitoring output is logged at
/// info, so `--monitor` lifts the quiet default.
pub fn default_directive(verbose: bool, monitor: bool) -> &'static str {
    if verbose {
        "cogify=debug"
    } else if monitor {
        "cogify=info"
    } else {
        "cogify=warn"
    }
}

/// Logs go to stderr; stdout carries only the progress lines.
pub fn init_cli_logger(verbose: bool, monitor: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, monitor)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "cogify=warn");
        assert_eq!(default_directive(false, true), "cogify=info");
        assert_eq!(default_directive(true, false), "cogify=debug");
        assert_eq!(default_directive(true, true), "cogify=debug");
    }
}
