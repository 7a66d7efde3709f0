pub mod flags;
pub mod trig;

pub use flags::{CollisionFlags, TileFlags};

/// Side length of the locally loaded region, in tiles.
pub const REGION_SIZE: usize = 104;

/// Fine (sub-tile) units per tile: world coordinates carry 9 fractional
/// bits, so one tile spans 512 fine units.
pub const TILE_UNITS: i32 = 512;

/// Shift converting fine units to whole tiles.
pub const TILE_SHIFT: u32 = 9;
