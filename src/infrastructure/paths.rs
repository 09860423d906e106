//! Path utilities for the Zellij sandbox environment.
//!
//! The host filesystem is mounted under `/host` inside the plugin sandbox, so
//! user-facing paths like `~/.local/share` need translating before use.

use std::path::{Path, PathBuf};

/// File that holds favorites and preferences inside the data directory.
pub const STORAGE_FILE_NAME: &str = "countryscope.json";

/// Returns the data directory for countryscope storage and logs.
///
/// The directory is `/host/.local/share/zellij/countryscope` in the sandbox,
/// which usually resolves to `~/.local/share/zellij/countryscope` on the host.
///
/// # Examples
///
/// ```
/// use countryscope::infrastructure::default_data_dir;
///
/// let data_dir = default_data_dir();
/// assert!(data_dir.ends_with("zellij/countryscope"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("countryscope")
}

/// Path of the JSON key-value file within `data_dir`.
#[must_use]
pub fn storage_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORAGE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use countryscope::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data"), "/host/data");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_lives_in_data_dir() {
        let dir = default_data_dir();
        assert_eq!(
            storage_path(&dir),
            PathBuf::from("/host/.local/share/zellij/countryscope/countryscope.json")
        );
    }

    #[test]
    fn tilde_in_the_middle_is_kept() {
        assert_eq!(expand_tilde("/tmp/~cache"), "/tmp/~cache");
        assert_eq!(expand_tilde("~user/dir"), "~user/dir");
    }
}
