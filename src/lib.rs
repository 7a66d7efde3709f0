//! Screen-projection and grid-navigation core for game automation.
//!
//! The crate answers two questions over snapshots of an observed game
//! client, with the client's exact fixed-point arithmetic:
//!
//! * **where does a world point land on screen**: perspective projection
//!   through the hooked camera transform ([`calc::world_to_screen`] and
//!   its tile/ground/minimap wrappers), with terrain height sampled from
//!   the loaded region ([`calc::tile_height`]);
//! * **how far is a tile on foot**: a breadth-first flood over the
//!   region's collision bitmasks ([`nav::path_length`]).
//!
//! Geometry queries are total. Anything not representable on screen comes
//! back as [`world::ScreenPoint::OFF_SCREEN`] and unreachable paths as -1;
//! nothing in a query path panics. An external feed publishes fresh
//! [`scene::Scene`], [`world::Region`] and [`scene::MinimapView`]
//! snapshots through [`feed::Published`]; everything here only reads them.

pub mod calc;
pub mod defs;
pub mod feed;
pub mod nav;
pub mod scene;
pub mod world;

pub use defs::{CollisionFlags, TileFlags, REGION_SIZE, TILE_SHIFT, TILE_UNITS};
pub use world::{Avatar, CollisionPlane, FlagGrid, HeightGrid, Region, ScreenPoint, Tile};
