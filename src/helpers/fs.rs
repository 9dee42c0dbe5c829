//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "power-forecast").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get the application's configuration directory without creating it
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/power-forecast/` or `$XDG_CONFIG_HOME/power-forecast/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.power-forecast/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\power-forecast\config\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/power-forecast/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.power-forecast/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\power-forecast\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
