pub mod app_loop;
pub mod key_map;
pub mod map_dir;
pub mod map_view;
pub mod panels;
pub mod seed;
pub mod settings;
pub mod ui_scale;
pub mod ui_scale_file;

/// Name used for the window title and the per-user data directories.
pub const APP_NAME: &str = "asciiventure";

/// `0x` plus 16 lowercase hex digits, matching the `sim` tool output.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
