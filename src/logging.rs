//! Logging setup
//!
//! Logs go to stderr so report output on stdout stays clean. `RUST_LOG`
//! takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a given `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "finreport=debug",
        _ => "trace",
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(default_directive(0), "error");
        assert_eq!(default_directive(1), "finreport=debug");
        assert_eq!(default_directive(2), "trace");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_init_twice() {
        init(1);
        init(2);
    }
}
