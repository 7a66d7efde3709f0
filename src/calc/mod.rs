mod height;
mod measure;
mod minimap;
mod projection;

pub use height::tile_height;
pub use measure::{angle_to, distance_between, distance_to};
pub use minimap::{closest_tile_on_map, tile_on_map, tile_to_minimap, world_to_minimap};
pub use projection::{
    closest_tile_on_screen, ground_to_screen, point_on_screen, tile_on_screen, tile_to_screen,
    tile_to_screen_offset, world_to_screen,
};
