//! Zoom level remembered between sessions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;
use crate::ui_scale::UiScale;

pub const UI_SCALE_FILE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiScaleFile {
    pub format_version: u32,
    pub ui_scale: f32,
}

impl UiScaleFile {
    pub fn from_scale(scale: UiScale) -> Self {
        Self { format_version: UI_SCALE_FILE_VERSION, ui_scale: scale.get() }
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("ui_scale.json"))
    }

    /// Writes a sibling temp file and renames it into place.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)
    }

    /// Saved scale, or `None` when the file is absent, unreadable or from another version.
    pub fn load_scale(path: &Path) -> Option<f32> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<Self>(&content) {
            Ok(file) if file.format_version == UI_SCALE_FILE_VERSION => Some(file.ui_scale),
            Ok(file) => {
                log::warn!("ignoring ui scale file version {}", file.format_version);
                None
            }
            Err(err) => {
                log::warn!("ignoring unreadable ui scale file {}: {err}", path.display());
                None
            }
        }
    }
}
