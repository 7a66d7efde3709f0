/// Absolute screen rectangle of an interface component.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Minimap display state observed from the client.
///
/// `rotation` is the map's own spin and `yaw` the camera's contribution,
/// both in 16384-step angle units; `zoom` feeds the `256/(256+zoom)`
/// rescale. `rect` is the on-screen component, `None` while the interface
/// is not resolved yet.
#[derive(Clone, Copy, Debug)]
pub struct MinimapView {
    pub rotation: i32,
    pub yaw: i32,
    pub zoom: i32,
    /// Compass-locked display mode: the map never rotates with the camera
    /// and ignores the zoom rescale.
    pub north_locked: bool,
    pub rect: Option<ScreenRect>,
}

impl Default for MinimapView {
    fn default() -> Self {
        Self {
            rotation: 0,
            yaw: 0,
            zoom: 0,
            north_locked: false,
            rect: None,
        }
    }
}
