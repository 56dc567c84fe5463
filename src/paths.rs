use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

pub const DB_FILE: &str = "snippets.db";
pub const LOG_FILE: &str = "snippets.log";
pub const CONFIG_FILE: &str = "config.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "snippets")
}

/// Data directory (~/.local/share/snippets or platform equivalent), created if missing
pub fn data_dir() -> Result<PathBuf> {
    let dir = project_dirs()
        .ok_or(Error::DataDir)?
        .data_dir()
        .to_path_buf();

    ensure_dir(&dir)?;
    Ok(dir)
}

/// Default config file location (~/.config/snippets/config.toml or platform equivalent)
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Creates the parent directory of `file` if it has one.
pub fn ensure_parent(file: &Path) -> Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
