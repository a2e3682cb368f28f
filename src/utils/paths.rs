//! Path utilities

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::CONFIG_FILE;

/// Find the directory containing RMAKE.toml, walking up from `start`
pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(CONFIG_FILE).exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Default installation prefix: ~/.local, or ./local when the home
/// directory cannot be determined
pub fn default_prefix() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".local"))
        .unwrap_or_else(|| PathBuf::from("local"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_root_is_found_from_a_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_root(&nested), Some(dir.path().to_path_buf()));
    }
}
