//! Diagnostic logging setup.
//!
//! Log events go to stderr through `tracing_subscriber::fmt`. Stdout is kept
//! for command output so `--json` stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn directive_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Builds the log filter.
///
/// An explicit `-v` wins over `RUST_LOG`; without one, `RUST_LOG` is used
/// when set and `warn` otherwise.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    if verbosity > 0 {
        return EnvFilter::new(directive_for_verbosity(verbosity));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(directive_for_verbosity(0), "warn");
        assert_eq!(directive_for_verbosity(1), "info");
        assert_eq!(directive_for_verbosity(2), "debug");
        assert_eq!(directive_for_verbosity(7), "debug");
    }

    #[test]
    fn test_explicit_verbosity_filter() {
        assert_eq!(build_filter(2).to_string(), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(1);
    }
}
