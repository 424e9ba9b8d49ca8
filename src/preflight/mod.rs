//! Preflight checks module.

mod mediainfo;

use crate::models::config::Config;
use colored::Colorize;

/// Outcome of one environment check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub success: bool,
    pub message: String,
    /// How to fix a failed check.
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            success: true,
            message: message.into(),
            hint: None,
        }
    }

    pub fn fail(name: &'static str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name,
            success: false,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

/// Check everything a catalog run needs before touching any file.
pub fn run_preflight_checks(config: &Config) -> Vec<CheckResult> {
    vec![mediainfo::check(&config.mediainfo.executable)]
}

/// Render one result; a failed check gets its hint on a second line.
pub fn format_result(result: &CheckResult) -> String {
    let tag = if result.success {
        "[OK]".green()
    } else {
        "[FAIL]".red()
    };
    let mut line = format!("{} {}: {}", tag, result.name.bold(), result.message);
    if let (false, Some(hint)) = (result.success, result.hint.as_deref()) {
        line.push_str(&format!("\n  {} {}", "->".yellow(), hint));
    }
    line
}

pub fn print_results(results: &[CheckResult]) {
    for result in results {
        println!("{}", format_result(result));
    }
}

/// Whether the run may proceed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let ok = vec![CheckResult::ok("MediaInfo", "installed")];
        assert!(all_passed(&ok));

        let failed = vec![
            CheckResult::ok("MediaInfo", "installed"),
            CheckResult::fail("Other", "missing", "install it"),
        ];
        assert!(!all_passed(&failed));
    }

    #[test]
    fn test_format_passed_check() {
        let line = format_result(&CheckResult::ok("MediaInfo", "installed (v23.04)"));
        assert!(line.contains("[OK]"));
        assert!(line.contains("installed (v23.04)"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_format_failed_check_shows_hint() {
        let line = format_result(&CheckResult::fail(
            "MediaInfo",
            "mediainfo not found",
            "Install MediaInfo",
        ));
        let lines: Vec<&str> = line.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[FAIL]"));
        assert!(lines[0].contains("mediainfo not found"));
        assert!(lines[1].contains("Install MediaInfo"));
    }

    #[test]
    fn test_missing_executable_fails_check() {
        let mut config = Config::default();
        config.mediainfo.executable = "definitely-not-a-mediainfo-binary".into();
        let results = run_preflight_checks(&config);
        assert!(!all_passed(&results));
        assert!(results[0].hint.is_some());
    }
}
