//! Perspective projection from world space into screen pixels.
//!
//! This reimplements the renderer's camera math outside the renderer: the
//! observed client hands us its viewport and world→camera transform, and
//! we reproduce its fixed-point pipeline bit for bit (per-axis dot
//! products truncated to integers, an `f32` depth, an integral multiplier
//! product divided by the depth). Input targeting depends on exact pixel
//! agreement with what the client draws, so the cast points are part of
//! the contract.

use crate::defs::{REGION_SIZE, TILE_UNITS};
use crate::scene::{FrameMode, Scene, ScreenFrame};
use crate::world::{Region, ScreenPoint, Tile};

use super::height::tile_height;

/// Fine-coordinate window accepted by [`ground_to_screen`]: one tile in
/// from the region edge on the low side, two tiles on the high side.
const FINE_MIN: i32 = TILE_UNITS;
const FINE_MAX: i32 = (REGION_SIZE as i32 - 2) * TILE_UNITS;

/// Halvings [`closest_tile_on_screen`] and its minimap twin attempt before
/// giving up. The walk converges onto the avatar well inside this.
pub(crate) const MAX_BISECT: u32 = 16;

/// Project a world-relative point into screen pixels.
///
/// `x`/`y` are fine east/north coordinates, `z` the height above the
/// ground plane. Points behind the near clip, beyond the draw distance or
/// outside the viewport yield [`ScreenPoint::OFF_SCREEN`].
pub fn world_to_screen(scene: &Scene, x: i32, y: i32, z: i32) -> ScreenPoint {
    let vp = &scene.viewport;
    let tf = &scene.camera;

    // The transform's y coefficients take the vertical axis.
    let depth_dot = (tf.z_x * x as f32 + tf.z_y * z as f32 + tf.z_z * y as f32) as i32;
    let depth = tf.z_off + depth_dot as f32;
    if depth < vp.z_near as f32 || depth > vp.z_far as f32 {
        return ScreenPoint::OFF_SCREEN;
    }

    let x_dot = (tf.x_x * x as f32 + tf.x_y * z as f32 + tf.x_z * y as f32) as i32;
    let y_dot = (tf.y_x * x as f32 + tf.y_y * z as f32 + tf.y_z * y as f32) as i32;
    let px = ((vp.x_mult as i64 * (tf.x_off as i32 + x_dot) as i64) as f32 / depth) as i32;
    let py = ((vp.y_mult as i64 * (tf.y_off as i32 + y_dot) as i64) as f32 / depth) as i32;

    if (px as f32) < vp.x1 || (px as f32) > vp.x2 || (py as f32) < vp.y1 || (py as f32) > vp.y2 {
        return ScreenPoint::OFF_SCREEN;
    }

    match scene.frame.mode {
        FrameMode::Fixed => ScreenPoint::new(
            (px as f32 - vp.x1) as i32 + 4,
            (py as f32 - vp.y1) as i32 + 4,
        ),
        FrameMode::Resizable => {
            ScreenPoint::new((px as f32 - vp.x1) as i32, (py as f32 - vp.y1) as i32)
        }
    }
}

/// Project a point on the ground, sampling the terrain height underneath.
///
/// `x`/`y` are region-relative fine coordinates; `height` is an extra
/// offset above the ground. Without height data, or outside the interior
/// fine window, the point is not projectable.
pub fn ground_to_screen(
    scene: &Scene,
    region: &Region,
    plane: usize,
    x: i32,
    y: i32,
    height: i32,
) -> ScreenPoint {
    if !region.has_heights() || x < FINE_MIN || y < FINE_MIN || x > FINE_MAX || y > FINE_MAX {
        return ScreenPoint::OFF_SCREEN;
    }
    let z = tile_height(region, plane, x, y) + height;
    world_to_screen(scene, x, y, z)
}

/// Screen position of a point inside a tile.
///
/// `dx`/`dy` pick the spot within the tile (0.0 = south-west corner,
/// 1.0 = the far edge), `height` an offset normal to the ground.
pub fn tile_to_screen_offset(
    scene: &Scene,
    region: &Region,
    tile: Tile,
    dx: f64,
    dy: f64,
    height: i32,
) -> ScreenPoint {
    let (lx, ly) = region.to_local(tile);
    ground_to_screen(
        scene,
        region,
        tile.plane as usize,
        ((lx as f64 + dx) * TILE_UNITS as f64) as i32,
        ((ly as f64 + dy) * TILE_UNITS as f64) as i32,
        height,
    )
}

/// Screen position of a tile's centre at ground level.
pub fn tile_to_screen(scene: &Scene, region: &Region, tile: Tile) -> ScreenPoint {
    tile_to_screen_offset(scene, region, tile, 0.5, 0.5, 0)
}

/// Whether a point lands inside the 3-D view, excluding the interface
/// chrome along the right and bottom edges.
pub fn point_on_screen(frame: &ScreenFrame, p: ScreenPoint) -> bool {
    match frame.mode {
        FrameMode::Fixed => {
            p.x > 4 && p.x < frame.width - 253 && p.y > 4 && p.y < frame.height - 169
        }
        FrameMode::Resizable => {
            p.x > 0 && p.x < frame.width - 260 && p.y > 0 && p.y < frame.height - 149
        }
    }
}

/// Whether a tile's centre is visible in the 3-D view.
pub fn tile_on_screen(scene: &Scene, region: &Region, tile: Tile) -> bool {
    point_on_screen(&scene.frame, tile_to_screen(scene, region, tile))
}

/// Closest tile to `tile` that is visible in the 3-D view, walking the
/// midpoint toward `anchor` (normally the avatar) a bounded number of
/// times. `None` when not even the anchor's surroundings are visible.
pub fn closest_tile_on_screen(
    scene: &Scene,
    region: &Region,
    anchor: Tile,
    tile: Tile,
) -> Option<Tile> {
    let mut probe = tile;
    for _ in 0..MAX_BISECT {
        if tile_on_screen(scene, region, probe) {
            return Some(probe);
        }
        probe = probe.midpoint(anchor);
    }
    None
}
