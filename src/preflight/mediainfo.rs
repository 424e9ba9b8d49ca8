//! MediaInfo preflight check.

use super::CheckResult;
use crate::services::mediainfo;
use std::path::Path;

/// Check if the MediaInfo executable is installed.
pub fn check(executable: &Path) -> CheckResult {
    if mediainfo::is_installed(executable) {
        match mediainfo::get_version(executable) {
            Ok(version) => CheckResult::ok("MediaInfo", format!("installed ({})", version)),
            Err(_) => CheckResult::ok("MediaInfo", "installed"),
        }
    } else {
        CheckResult::fail(
            "MediaInfo",
            format!("{} not found", executable.display()),
            "Install MediaInfo: sudo apt install mediainfo",
        )
    }
}
