use super::types::History;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the data directory path (~/.config/risk-mapper/)
pub fn get_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("risk-mapper")
}

/// Get the default history file path (~/.config/risk-mapper/history.json)
pub fn get_history_path() -> PathBuf {
    get_data_dir().join("history.json")
}

/// Ensure the data directory exists
pub fn ensure_data_dir() -> Result<()> {
    let data_dir = get_data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory at {}", data_dir.display())
        })?;
    }
    Ok(())
}

/// Load assessment history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_history(path: &Path) -> Result<History> {
    if !path.exists() {
        return Ok(History::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let history: History = serde_json::from_reader(file).context("Failed to load history")?;

    // Version check
    if history.version != 1 {
        anyhow::bail!("Unsupported history version: {}", history.version);
    }

    Ok(history)
}

/// Save assessment history to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted
/// state. Creates the data directory if it doesn't exist.
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    ensure_data_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, history).context("Failed to serialize history")?;

    file.commit().context("Failed to save history")?;

    Ok(())
}
