use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::utils::get_utc_iso_datetime;

/// Centralized function to append error messages to an errors log file
/// (`errors.log` unless configured otherwise)
///
/// # Arguments
/// * `log_path` - The log file, created on first use
/// * `error_type` - A description of the error type/category (e.g., "Malformed Row Report")
/// * `error_message` - The actual error message content
pub fn write_error_to_log(log_path: &Path, error_type: &str, error_message: &str) {
    let timestamp = get_utc_iso_datetime();
    let log_entry = format!("\n[{}] {}:\n{}\n", timestamp, error_type, error_message);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        let _ = writeln!(file, "{}", log_entry);
    }
}

/// Write a generated document, replacing any existing file and creating
/// missing parent directories
pub fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    return Ok(());
}
