//! User settings for matricula
//!
//! The settings file carries the schema version and the validation message
//! catalog, so clubs can reword (or relocalize) every user-facing text
//! without rebuilding.

use serde::{Deserialize, Serialize};

use super::messages::MessageCatalog;
use super::paths::MatriculaPaths;
use crate::error::{MatriculaError, MatriculaResult};

/// User settings for matricula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Validation and notification texts
    #[serde(default)]
    pub messages: MessageCatalog,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            messages: MessageCatalog::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults on first run
    pub fn load_or_create(paths: &MatriculaPaths) -> MatriculaResult<Self> {
        let file = paths.settings_file();

        if file.exists() {
            let contents = std::fs::read_to_string(&file)
                .map_err(|e| MatriculaError::Io(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| MatriculaError::Config(format!("Invalid settings file: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &MatriculaPaths) -> MatriculaResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MatriculaError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatriculaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatriculaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.messages.email_invalid = "E-mail malformado.".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.messages.email_invalid, "E-mail malformado.");
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatriculaPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), "not json").unwrap();
        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(MatriculaError::Config(_))));
    }
}
