//! Reporting of errors that are logged and then ignored.

use std::fmt::Display;

use tracing::error;

/// Logs that `action` failed because of `err`, as `"<action> failed: <err>"`.
///
/// For errors that are reported and then ignored, such as failing to remove a
/// scratch file during cleanup.
pub fn log_err(action: &str, err: &dyn Display) {
    error!("{action} failed: {err}");
}
