//! Distances and bearings between tiles.

use glam::DVec2;

use crate::world::{Avatar, Tile};

/// Euclidean distance between two tiles, in tile units.
pub fn distance_between(a: Tile, b: Tile) -> f64 {
    DVec2::new(a.x as f64, a.y as f64).distance(DVec2::new(b.x as f64, b.y as f64))
}

/// Truncated Euclidean distance from the avatar to a tile.
pub fn distance_to(avatar: &Avatar, tile: Tile) -> i32 {
    distance_between(avatar.tile, tile) as i32
}

/// Bearing from the avatar to a tile, in degrees anti-clockwise from east
/// (0–359).
pub fn angle_to(avatar: &Avatar, tile: Tile) -> i32 {
    let dy = (tile.y - avatar.tile.y) as f64;
    let dx = (tile.x - avatar.tile.x) as f64;
    let degrees = dy.atan2(dx).to_degrees() as i32;
    if degrees >= 0 { degrees } else { 360 + degrees }
}
