mod region;
mod tile;

pub mod loader;

pub use region::{CollisionPlane, FlagGrid, HeightGrid, Region, RegionError, HEIGHT_GRID};
pub use tile::{Avatar, ScreenPoint, Tile};
