//! Map construction: procedural room layouts and parsed text maps.

mod layout;
mod seed;
mod text;

use rand_chacha::ChaCha8Rng;

use crate::config::MapgenConfig;
use crate::state::Map;

pub use text::parse_text_map;

pub(crate) use seed::{random_below, roll_percent};

/// Rooms joined by L-shaped corridors; the first room holds the spawn point and
/// the last one the portal.
pub fn generate_random_map(rng: &mut ChaCha8Rng, config: &MapgenConfig) -> Map {
    let layout = layout::build_room_layout(rng, config);
    log::debug!(
        "generated {}x{} map with {} rooms",
        config.width,
        config.height,
        layout.rooms.len()
    );
    layout.map
}
