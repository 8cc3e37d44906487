use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the fallback filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "mtg_embed=debug,info".to_string(),
        (false, Some(level)) => format!("mtg_embed={}", level),
        (false, None) => "mtg_embed=info".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, json: bool) {
    let directive = default_directive(verbose, level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "mtg_embed=info");
        assert_eq!(default_directive(false, Some("warn")), "mtg_embed=warn");
        assert_eq!(default_directive(true, Some("warn")), "mtg_embed=debug,info");
    }
}
