//! Loading hand-made text maps from a directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use game_core::Map;
use game_core::mapgen::parse_text_map;

pub const MAP_EXTENSION: &str = "txt";

/// Parses every `*.txt` file in `dir`, ordered by file name.
///
/// A missing directory yields no maps; a file that fails to parse is an error.
pub fn load_map_directory(dir: &Path) -> Result<Vec<Map>> {
    if !dir.is_dir() {
        log::info!("no map directory at {}, using generated maps only", dir.display());
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list map directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == MAP_EXTENSION))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read map file: {}", path.display()))?;
            let map = parse_text_map(&text)
                .with_context(|| format!("Failed to parse map file: {}", path.display()))?;
            log::debug!("loaded map {} ({}x{})", path.display(), map.width(), map.height());
            Ok(map)
        })
        .collect()
}
