pub mod app_loop;
pub mod command;
pub mod config;
pub mod recording;
pub mod ui_text;

use std::io;

use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "Adventure";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Builds the log filter: `RUST_LOG` first, then the configured directive, then `warn`.
pub fn log_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs go to stderr so they never interleave with game text on stdout.
pub fn init_tracing(configured: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(configured))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_snapshot_hash_is_16_hex_digits() {
        assert_eq!(format_snapshot_hash(0), "0x0000000000000000");
        assert_eq!(format_snapshot_hash(255), "0x00000000000000ff");
        assert_eq!(format_snapshot_hash(u64::MAX), "0xffffffffffffffff");
    }
}
