//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is used as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/redirects/        ← cwd
/// /home/user/site/redirects.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("redirects.toml"), "").unwrap();

        let found = find_config_file(Path::new("redirects.toml"), dir.path());
        assert_eq!(found, Some(dir.path().join("redirects.toml")));
    }

    #[test]
    fn test_find_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("redirects/raw");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("redirects.toml"), "").unwrap();

        let found = find_config_file(Path::new("redirects.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("redirects.toml")));
    }

    #[test]
    fn test_find_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&path, dir.path()), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("surely-not-present-redirector.toml");
        assert_eq!(find_config_file(name, dir.path()), None);
    }
}
