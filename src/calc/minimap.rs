//! World-tile to minimap-pixel projection.
//!
//! A pure 2-D rotate/scale/translate: four minimap pixels per tile,
//! centred on the avatar's sub-tile position, spun by the minimap angle
//! through the fixed-point trig tables and pinned to the minimap
//! component's screen rectangle. Every missing piece of interface state
//! yields the off-screen sentinel instead of an error.

use crate::defs::trig::{ANGLE_MASK, COS_TABLE, SIN_TABLE, TRIG_SHIFT};
use crate::scene::MinimapView;
use crate::world::{Avatar, Region, ScreenPoint, Tile};

use super::measure::distance_between;
use super::projection::MAX_BISECT;

/// Tiles beyond this avatar distance can never be on the minimap.
const MAP_RADIUS: f64 = 17.0;

/// Project world tile coordinates onto the minimap.
pub fn world_to_minimap(
    map: &MinimapView,
    region: &Region,
    avatar: &Avatar,
    x: i32,
    y: i32,
) -> ScreenPoint {
    if distance_between(avatar.tile, Tile::new(x, y, avatar.tile.plane)) > MAP_RADIUS {
        return ScreenPoint::OFF_SCREEN;
    }
    let (base_x, base_y) = region.base();
    // Four pixels per tile, half a tile to the cell centre, minus the
    // avatar's own pixel offset inside its tile.
    let vx = (x - base_x) * 4 + 2 - avatar.fine_x / 128;
    let vy = (y - base_y) * 4 + 2 - avatar.fine_y / 128;

    let Some(rect) = map.rect else {
        return ScreenPoint::OFF_SCREEN;
    };

    let dist_sq = vx * vx + vy * vy;
    let radius = 10 + (rect.width / 2).max(rect.height / 2);
    if radius * radius < dist_sq {
        return ScreenPoint::OFF_SCREEN;
    }

    let mut angle = ANGLE_MASK & map.rotation;
    if !map.north_locked {
        angle = ANGLE_MASK & (map.yaw + map.rotation);
    }

    let mut cs = SIN_TABLE[angle as usize];
    let mut cc = COS_TABLE[angle as usize];
    if !map.north_locked {
        let fact = 256 + map.zoom;
        if fact == 0 {
            // Degenerate zoom from a half-read client state.
            return ScreenPoint::OFF_SCREEN;
        }
        cs = 256 * cs / fact;
        cc = 256 * cc / fact;
    }

    let rx = (cc * vx + cs * vy) >> TRIG_SHIFT;
    let ry = (cc * vy - cs * vx) >> TRIG_SHIFT;

    // Minimap y grows northward, screen y downward.
    ScreenPoint::new(
        rx + rect.x + rect.width / 2,
        -ry + rect.y + rect.height / 2,
    )
}

/// Minimap position of a tile.
pub fn tile_to_minimap(map: &MinimapView, region: &Region, avatar: &Avatar, tile: Tile) -> ScreenPoint {
    world_to_minimap(map, region, avatar, tile.x, tile.y)
}

/// Cheap gate for "is this tile within minimap range".
pub fn tile_on_map(avatar: &Avatar, tile: Tile) -> bool {
    distance_between(avatar.tile, tile) < 15.0
}

/// Closest tile to `tile` within minimap range, walking the midpoint
/// toward the avatar a bounded number of times.
pub fn closest_tile_on_map(avatar: &Avatar, tile: Tile) -> Option<Tile> {
    let mut probe = tile;
    for _ in 0..MAX_BISECT {
        if tile_on_map(avatar, probe) {
            return Some(probe);
        }
        probe = probe.midpoint(avatar.tile);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScreenRect;

    fn fixed_map() -> MinimapView {
        MinimapView {
            rotation: 0,
            yaw: 0,
            zoom: 0,
            north_locked: true,
            rect: Some(ScreenRect::new(548, 5, 146, 151)),
        }
    }

    /// Avatar on tile (3250, 3450) of a region based at (3200, 3400),
    /// standing exactly on the tile's south-west corner.
    fn avatar() -> Avatar {
        Avatar::new(Tile::new(3250, 3450, 0), 50 * 512, 50 * 512)
    }

    #[test]
    fn north_locked_map_is_a_pure_translation() {
        let map = fixed_map();
        let region = Region::new(3200, 3400);
        let me = avatar();
        // Three tiles east, one north: vector (3*4+2, 1*4+2) = (14, 6).
        let p = world_to_minimap(&map, &region, &me, 3253, 3451);
        assert_eq!(p, ScreenPoint::new(14 + 548 + 73, -6 + 5 + 75));
        // The avatar's own tile sits two pixels off centre.
        let p = world_to_minimap(&map, &region, &me, 3250, 3450);
        assert_eq!(p, ScreenPoint::new(2 + 548 + 73, -2 + 5 + 75));
    }

    #[test]
    fn distance_gate_rejects_far_tiles() {
        let map = fixed_map();
        let region = Region::new(3200, 3400);
        let me = avatar();
        assert_eq!(
            world_to_minimap(&map, &region, &me, 3250 + 18, 3450),
            ScreenPoint::OFF_SCREEN
        );
        // 17 exactly is still allowed.
        assert!(world_to_minimap(&map, &region, &me, 3250 + 17, 3450).is_visible());
    }

    #[test]
    fn missing_component_is_off_screen() {
        let mut map = fixed_map();
        map.rect = None;
        let region = Region::new(3200, 3400);
        assert_eq!(
            world_to_minimap(&map, &region, &avatar(), 3251, 3450),
            ScreenPoint::OFF_SCREEN
        );
    }

    #[test]
    fn quarter_turn_swaps_the_axes() {
        let mut map = fixed_map();
        map.rotation = 4096; // π/2: cs = 32768, cc = 0.
        let region = Region::new(3200, 3400);
        let me = avatar();
        // Vector (14, 6) rotates to (6, -14).
        let p = world_to_minimap(&map, &region, &me, 3253, 3451);
        assert_eq!(p, ScreenPoint::new(6 + 548 + 73, 14 + 5 + 75));
    }

    #[test]
    fn camera_yaw_applies_unless_north_locked() {
        let mut map = fixed_map();
        map.north_locked = false;
        map.yaw = 4096;
        let region = Region::new(3200, 3400);
        let me = avatar();
        let p = world_to_minimap(&map, &region, &me, 3253, 3451);
        // Same quarter turn as above, now contributed by the camera.
        assert_eq!(p, ScreenPoint::new(6 + 548 + 73, 14 + 5 + 75));

        map.north_locked = true;
        let p = world_to_minimap(&map, &region, &me, 3253, 3451);
        assert_eq!(p, ScreenPoint::new(14 + 548 + 73, -6 + 5 + 75));
    }

    #[test]
    fn zoom_shrinks_the_vector() {
        let mut map = fixed_map();
        map.north_locked = false;
        map.zoom = 256; // halves the scale
        let region = Region::new(3200, 3400);
        let me = avatar();
        let p = world_to_minimap(&map, &region, &me, 3253, 3451);
        // cc = 16384: (16384 * 14) >> 15 = 7, (16384 * 6) >> 15 = 3.
        assert_eq!(p, ScreenPoint::new(7 + 548 + 73, -3 + 5 + 75));
    }

    #[test]
    fn map_range_bisection() {
        let me = avatar();
        assert_eq!(
            closest_tile_on_map(&me, Tile::new(3250, 3460, 0)),
            Some(Tile::new(3250, 3460, 0))
        );
        let far = Tile::new(3250, 3450 + 64, 0);
        let found = closest_tile_on_map(&me, far).expect("bisection converges");
        assert!(tile_on_map(&me, found));
        assert_eq!(found, Tile::new(3250, 3458, 0));
    }
}
