//! CLI command handlers
//!
//! Non-interactive entry points: offline validation of a record file and a
//! configuration printout.

use std::path::Path;

use crate::config::{MatriculaPaths, Settings};
use crate::error::{MatriculaError, MatriculaResult};
use crate::form::validation::DATE_FORMAT;
use crate::form::{validate_field, FieldKey, FieldKind};
use crate::models::AthleteRecord;

/// Validate an athlete record stored as JSON and print a per-field report.
///
/// Exits through an error when any rule fails, so scripts can gate on the
/// exit code.
pub fn handle_check_command(file: &Path, settings: &Settings) -> MatriculaResult<()> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| MatriculaError::Io(format!("Failed to read {}: {}", file.display(), e)))?;
    let record: AthleteRecord = serde_json::from_str(&contents)
        .map_err(|e| MatriculaError::Json(format!("Invalid record file: {}", e)))?;

    println!("Checking {} ({})", file.display(), record.id);
    println!();

    let mut failures = 0usize;
    for field in FieldKey::ALL {
        let value = match field.kind() {
            FieldKind::Text => field
                .text_of(&record)
                .unwrap_or_default()
                .to_string(),
            FieldKind::Date => record
                .birth_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            FieldKind::Collection => continue,
        };

        let message = validate_field(field, &value, &settings.messages);
        if message.is_empty() {
            println!("  {:<20} ok", field.as_str());
        } else {
            println!("  {:<20} {}", field.as_str(), message);
            failures += 1;
        }
    }

    println!();
    if failures == 0 {
        println!("All fields pass.");
        Ok(())
    } else {
        println!("{} field(s) failed validation.", failures);
        Err(MatriculaError::Validation(format!(
            "{} field(s) failed validation",
            failures
        )))
    }
}

/// Print the resolved paths and current settings
pub fn handle_config_command(paths: &MatriculaPaths, settings: &Settings) -> MatriculaResult<()> {
    println!("matricula configuration");
    println!();
    println!("  Base directory:  {}", paths.base_dir().display());
    println!("  Settings file:   {}", paths.settings_file().display());
    println!("  Initialized:     {}", paths.is_initialized());
    println!("  Schema version:  {}", settings.schema_version);

    Ok(())
}
