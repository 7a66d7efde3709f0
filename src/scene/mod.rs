mod minimap;
mod view;

pub use minimap::{MinimapView, ScreenRect};
pub use view::{CameraTransform, FrameMode, Scene, ScreenFrame, Viewport};
