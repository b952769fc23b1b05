//! Database path resolution: `~/` expansion and config-relative names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths (after `~` expansion) are kept; bare names land in `base`.
pub fn resolve_in(base: &Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}
