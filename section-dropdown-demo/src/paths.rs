//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "section-dropdown";
const APPLICATION: &str = "section-dropdown-demo";

/// Where the demo writes its log.
///
/// - Linux: `$XDG_CACHE_HOME/section-dropdown-demo/latest.log`
/// - macOS: `~/Library/Caches/dev.section-dropdown.section-dropdown-demo/latest.log`
/// - Elsewhere, or without a home directory: `./section-dropdown-demo.log`
pub fn log_file() -> PathBuf {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().join("latest.log"))
        .unwrap_or_else(|| PathBuf::from("section-dropdown-demo.log"))
}
