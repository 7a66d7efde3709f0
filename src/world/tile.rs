/// A world tile coordinate: east/north position plus floor plane (0–3).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub plane: u8,
}

impl Tile {
    pub const fn new(x: i32, y: i32, plane: u8) -> Self {
        Self { x, y, plane }
    }

    /// Midpoint toward `other` on the same plane (integer halving, the
    /// step used by the on-screen/on-map bisection helpers).
    pub fn midpoint(self, other: Tile) -> Tile {
        Tile::new((self.x + other.x) / 2, (self.y + other.y) / 2, self.plane)
    }
}

/// A point in screen pixels, or [`ScreenPoint::OFF_SCREEN`] when the
/// queried location has no valid screen position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    /// Sentinel for "not representable on screen". Callers must test with
    /// [`ScreenPoint::is_visible`] before using the coordinates.
    pub const OFF_SCREEN: ScreenPoint = ScreenPoint { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self != Self::OFF_SCREEN
    }
}

/// The avatar's observed position: its world tile plus its region-relative
/// fine position (1/512-tile units), which the minimap projector needs for
/// sub-tile centering.
#[derive(Clone, Copy, Debug)]
pub struct Avatar {
    pub tile: Tile,
    pub fine_x: i32,
    pub fine_y: i32,
}

impl Avatar {
    pub const fn new(tile: Tile, fine_x: i32, fine_y: i32) -> Self {
        Self {
            tile,
            fine_x,
            fine_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_screen_sentinel() {
        assert!(!ScreenPoint::OFF_SCREEN.is_visible());
        assert!(ScreenPoint::new(0, 0).is_visible());
        assert!(ScreenPoint::new(-1, 0).is_visible());
    }

    #[test]
    fn midpoint_keeps_plane() {
        let a = Tile::new(10, 20, 2);
        let b = Tile::new(20, 10, 0);
        assert_eq!(a.midpoint(b), Tile::new(15, 15, 2));
    }
}
