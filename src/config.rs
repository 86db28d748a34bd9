//! Runtime configuration

use std::path::PathBuf;

/// Environment variable overriding the database location
pub const DATABASE_PATH_ENV: &str = "BMI_DATABASE_PATH";

/// Default tracing directive when RUST_LOG does not say otherwise
pub const DEFAULT_LOG_DIRECTIVE: &str = "bmi_tracker=info";

/// Get the database path from environment or use default
///
/// The default is `data/bmi.db` under the project root, found by stepping out of
/// `target/debug` or `target/release` when run from a build directory.
pub fn database_path() -> PathBuf {
    std::env::var(DATABASE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("bmi.db");
            path
        })
}
