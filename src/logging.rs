//! Diagnostics go to stderr so stdout only ever carries results.

use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,wayrecon=debug" } else { "warn" }
}

/// Initialize stderr logging. `RUST_LOG` overrides the verbosity chosen by `-v`.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_depends_on_verbose() {
        assert_eq!(default_filter(true), "warn,wayrecon=debug");
        assert_eq!(default_filter(false), "warn");
    }
}
