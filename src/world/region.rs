//! The locally loaded terrain window.
//!
//! The observed client keeps a 104×104 tile region centred on the avatar:
//! per-plane ground heights, per-plane collision bitmasks and a per-plane
//! byte of tile flags, all addressed relative to a world base offset. A
//! `Region` is one immutable snapshot of that window; the external state
//! feed builds a fresh one on every region change and publishes it whole.

use thiserror::Error;

use crate::defs::flags::{CollisionFlags, TileFlags};
use crate::defs::REGION_SIZE;
use crate::world::tile::Tile;

/// Heights carry one extra row/column so corner interpolation at the far
/// edge needs no branching.
pub const HEIGHT_GRID: usize = REGION_SIZE + 1;

/// Collision storage carries a one-cell halo of fully blocked cells on
/// every side; cell (x, y) lives at (x+1, y+1).
const HALO_GRID: usize = REGION_SIZE + 2;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("grid holds {got} cells, expected {expected}")]
    BadDimensions { expected: usize, got: usize },
}

/*=======================================================================*/
/*                           Per-plane grids                             */
/*=======================================================================*/

/// Ground heights for one plane, 105×105, x-major.
#[derive(Clone, Debug)]
pub struct HeightGrid {
    cells: Vec<i32>,
}

impl HeightGrid {
    /// Wrap a raw 105×105 height grid (x-major).
    pub fn from_raw(cells: Vec<i32>) -> Result<Self, RegionError> {
        if cells.len() != HEIGHT_GRID * HEIGHT_GRID {
            return Err(RegionError::BadDimensions {
                expected: HEIGHT_GRID * HEIGHT_GRID,
                got: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Flat grid at a single height.
    pub fn level(height: i32) -> Self {
        Self {
            cells: vec![height; HEIGHT_GRID * HEIGHT_GRID],
        }
    }

    #[inline]
    pub fn at(&self, x: i32, y: i32) -> i32 {
        self.cells[x as usize * HEIGHT_GRID + y as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, height: i32) {
        self.cells[x as usize * HEIGHT_GRID + y as usize] = height;
    }

    pub(crate) fn raw(&self) -> &[i32] {
        &self.cells
    }
}

/// Collision bitmasks for one plane with the blocked halo baked in.
#[derive(Clone, Debug)]
pub struct CollisionPlane {
    cells: Vec<u32>,
}

impl CollisionPlane {
    /// A fully open plane (halo cells stay blocked).
    pub fn open() -> Self {
        let mut cells = vec![CollisionFlags::all().bits(); HALO_GRID * HALO_GRID];
        for x in 0..REGION_SIZE {
            for y in 0..REGION_SIZE {
                cells[(x + 1) * HALO_GRID + y + 1] = 0;
            }
        }
        Self { cells }
    }

    /// Wrap a raw 104×104 mask grid (x-major, no halo).
    pub fn from_raw(masks: Vec<u32>) -> Result<Self, RegionError> {
        if masks.len() != REGION_SIZE * REGION_SIZE {
            return Err(RegionError::BadDimensions {
                expected: REGION_SIZE * REGION_SIZE,
                got: masks.len(),
            });
        }
        let mut plane = Self::open();
        for x in 0..REGION_SIZE {
            for y in 0..REGION_SIZE {
                plane.cells[(x + 1) * HALO_GRID + y + 1] = masks[x * REGION_SIZE + y];
            }
        }
        Ok(plane)
    }

    /// Raw mask of cell (x, y). Any coordinate outside the stored halo
    /// reads as fully blocked, keeping every caller total.
    #[inline]
    pub fn mask(&self, x: i32, y: i32) -> u32 {
        if x < -1 || y < -1 || x > REGION_SIZE as i32 || y > REGION_SIZE as i32 {
            return CollisionFlags::all().bits();
        }
        self.cells[(x + 1) as usize * HALO_GRID + (y + 1) as usize]
    }

    #[inline]
    pub fn flags(&self, x: i32, y: i32) -> CollisionFlags {
        CollisionFlags::from_bits_truncate(self.mask(x, y))
    }

    /// Overwrite the mask of an in-region cell.
    pub fn set(&mut self, x: i32, y: i32, flags: CollisionFlags) {
        assert!(x >= 0 && y >= 0 && (x as usize) < REGION_SIZE && (y as usize) < REGION_SIZE);
        self.cells[(x + 1) as usize * HALO_GRID + (y + 1) as usize] = flags.bits();
    }

    /// OR extra flags into an in-region cell.
    pub fn add(&mut self, x: i32, y: i32, flags: CollisionFlags) {
        assert!(x >= 0 && y >= 0 && (x as usize) < REGION_SIZE && (y as usize) < REGION_SIZE);
        self.cells[(x + 1) as usize * HALO_GRID + (y + 1) as usize] |= flags.bits();
    }
}

/// Per-tile flag bytes for one plane, 104×104, x-major.
#[derive(Clone, Debug)]
pub struct FlagGrid {
    cells: Vec<u8>,
}

impl Default for FlagGrid {
    fn default() -> Self {
        Self {
            cells: vec![0; REGION_SIZE * REGION_SIZE],
        }
    }
}

impl FlagGrid {
    pub fn from_raw(cells: Vec<u8>) -> Result<Self, RegionError> {
        if cells.len() != REGION_SIZE * REGION_SIZE {
            return Err(RegionError::BadDimensions {
                expected: REGION_SIZE * REGION_SIZE,
                got: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> TileFlags {
        TileFlags::from_bits_truncate(self.cells[x as usize * REGION_SIZE + y as usize])
    }

    pub fn set(&mut self, x: i32, y: i32, flags: TileFlags) {
        self.cells[x as usize * REGION_SIZE + y as usize] = flags.bits();
    }

    pub(crate) fn raw(&self) -> &[u8] {
        &self.cells
    }
}

/*=======================================================================*/
/*                                Region                                 */
/*=======================================================================*/

/// One immutable snapshot of the loaded region.
#[derive(Clone, Debug)]
pub struct Region {
    base: (i32, i32),
    tile_flags: [FlagGrid; 4],
    heights: [Option<HeightGrid>; 4],
    collision: [Option<CollisionPlane>; 4],
}

impl Region {
    /// An empty region at `base`: no height or collision data yet, so every
    /// query falls back to its safe default.
    pub fn new(base_x: i32, base_y: i32) -> Self {
        Self {
            base: (base_x, base_y),
            tile_flags: Default::default(),
            heights: Default::default(),
            collision: Default::default(),
        }
    }

    /// World tile of the region's local (0, 0).
    #[inline]
    pub fn base(&self) -> (i32, i32) {
        self.base
    }

    pub fn set_tile_flags(&mut self, plane: usize, grid: FlagGrid) {
        self.tile_flags[plane] = grid;
    }

    pub fn set_heights(&mut self, plane: usize, grid: HeightGrid) {
        self.heights[plane] = Some(grid);
    }

    pub fn set_collision(&mut self, plane: usize, grid: CollisionPlane) {
        self.collision[plane] = Some(grid);
    }

    pub fn tile_flags(&self, plane: usize) -> Option<&FlagGrid> {
        self.tile_flags.get(plane)
    }

    pub fn heights(&self, plane: usize) -> Option<&HeightGrid> {
        self.heights.get(plane).and_then(Option::as_ref)
    }

    pub fn collision(&self, plane: usize) -> Option<&CollisionPlane> {
        self.collision.get(plane).and_then(Option::as_ref)
    }

    /// Whether any plane has height data loaded at all.
    pub fn has_heights(&self) -> bool {
        self.heights.iter().any(Option::is_some)
    }

    /// Bridge flag of cell (x, y). Bridges are always marked on plane 1.
    #[inline]
    pub fn bridge_at(&self, x: i32, y: i32) -> bool {
        self.tile_flags[1].get(x, y).contains(TileFlags::BRIDGE)
    }

    /// Translate a world tile into region-local coordinates.
    #[inline]
    pub fn to_local(&self, tile: Tile) -> (i32, i32) {
        (tile.x - self.base.0, tile.y - self.base.1)
    }

    /// Whether a world tile falls inside the loaded window.
    pub fn is_local(&self, tile: Tile) -> bool {
        let (x, y) = self.to_local(tile);
        x >= 0 && y >= 0 && (x as usize) < REGION_SIZE && (y as usize) < REGION_SIZE
    }
}
