//! Path management for matricula
//!
//! Provides XDG-compliant path resolution for configuration files.
//!
//! ## Path Resolution Order
//!
//! 1. `MATRICULA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/matricula` or `~/.config/matricula`
//! 3. Windows: `%APPDATA%\matricula`

use std::path::PathBuf;

use crate::error::MatriculaError;

/// Manages all paths used by matricula
#[derive(Debug, Clone)]
pub struct MatriculaPaths {
    /// Base directory for all matricula data
    base_dir: PathBuf,
}

impl MatriculaPaths {
    /// Create a new MatriculaPaths instance
    ///
    /// Path resolution:
    /// 1. `MATRICULA_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/matricula` or `~/.config/matricula`
    /// 3. Windows: `%APPDATA%\matricula`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MatriculaError> {
        let base_dir = if let Ok(custom) = std::env::var("MATRICULA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MatriculaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/matricula/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MatriculaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MatriculaError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if matricula has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MatriculaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| MatriculaError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("matricula"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MatriculaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MatriculaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("matricula"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatriculaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("matricula");
        let paths = MatriculaPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatriculaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
