//! JSON persistence for the panel layout and the selected icon.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

pub const SAVE_DIR: &str = "savedata";
pub const ENTRIES_FILE: &str = "entries.json";
pub const IMAGE_FILE: &str = "image.json";

/// Sentinel for the bundled icon; never written to disk.
pub const DEFAULT_ICON: &str = "default";

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "file error: {}", e),
            StorageError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Serialize, Deserialize)]
struct EntriesFile {
    #[serde(rename = "left-list")]
    left: Vec<Entry>,
    #[serde(rename = "right-list")]
    right: Vec<Entry>,
}

#[derive(Serialize, Deserialize)]
struct IconFile {
    image: String,
}

pub fn save_entries(left: &[Entry], right: &[Entry]) -> Result<()> {
    save_entries_to(Path::new(SAVE_DIR), left, right)
}

pub fn load_entries() -> Result<(Vec<Entry>, Vec<Entry>)> {
    load_entries_from(Path::new(SAVE_DIR))
}

/// Returns Ok(false) when the icon is still the bundled default and there
/// is nothing worth writing.
pub fn save_icon(icon: &str) -> Result<bool> {
    save_icon_to(Path::new(SAVE_DIR), icon)
}

pub fn load_icon() -> Result<String> {
    load_icon_from(Path::new(SAVE_DIR))
}

pub fn save_entries_to(dir: &Path, left: &[Entry], right: &[Entry]) -> Result<()> {
    fs::create_dir_all(dir)?;
    let doc = EntriesFile {
        left: left.to_vec(),
        right: right.to_vec(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(dir.join(ENTRIES_FILE), json)?;
    Ok(())
}

pub fn load_entries_from(dir: &Path) -> Result<(Vec<Entry>, Vec<Entry>)> {
    let raw = fs::read_to_string(dir.join(ENTRIES_FILE))?;
    let mut doc: EntriesFile = serde_json::from_str(&raw)?;
    for entry in doc.left.iter_mut().chain(doc.right.iter_mut()) {
        entry.normalize();
    }
    Ok((doc.left, doc.right))
}

pub fn save_icon_to(dir: &Path, icon: &str) -> Result<bool> {
    if icon == DEFAULT_ICON {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    let doc = IconFile {
        image: icon.to_string(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(dir.join(IMAGE_FILE), json)?;
    Ok(true)
}

pub fn load_icon_from(dir: &Path) -> Result<String> {
    let raw = fs::read_to_string(dir.join(IMAGE_FILE))?;
    let doc: IconFile = serde_json::from_str(&raw)?;
    Ok(doc.image)
}
