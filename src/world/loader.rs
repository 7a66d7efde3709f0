//! Region dump reader/writer.
//!
//! A dump is one `Region` snapshot serialized little-endian so captured
//! regions can be replayed offline by tests and the `path_view` tool:
//!
//! ```text
//! magic        b"RGN1"
//! base         x: i32, y: i32
//! tile flags   4 planes × 104×104 u8 (x-major)
//! heights      presence bitmask u8, then 105×105 i32 per present plane
//! collision    presence bitmask u8, then 104×104 u32 per present plane
//! ```
//!
//! The live state feed stays out of scope; this is the offline exchange
//! format between it and this crate.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::defs::REGION_SIZE;
use crate::world::region::{
    CollisionPlane, FlagGrid, HeightGrid, Region, RegionError, HEIGHT_GRID,
};

const MAGIC: [u8; 4] = *b"RGN1";

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header magic wasn't `RGN1`.
    #[error("not a region dump")]
    BadMagic,

    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Load a region dump from disk.
pub fn load_region<P: AsRef<Path>>(path: P) -> Result<Region, DumpError> {
    let mut r = BufReader::new(File::open(path)?);

    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(DumpError::BadMagic);
    }

    let base_x = r.read_i32::<LE>()?;
    let base_y = r.read_i32::<LE>()?;
    let mut region = Region::new(base_x, base_y);

    for plane in 0..4 {
        let mut cells = vec![0u8; REGION_SIZE * REGION_SIZE];
        r.read_exact(&mut cells)?;
        region.set_tile_flags(plane, FlagGrid::from_raw(cells)?);
    }

    let present = r.read_u8()?;
    for plane in 0..4 {
        if present & (1 << plane) == 0 {
            continue;
        }
        let mut cells = vec![0i32; HEIGHT_GRID * HEIGHT_GRID];
        r.read_i32_into::<LE>(&mut cells)?;
        region.set_heights(plane, HeightGrid::from_raw(cells)?);
    }

    let present = r.read_u8()?;
    for plane in 0..4 {
        if present & (1 << plane) == 0 {
            continue;
        }
        let mut cells = vec![0u32; REGION_SIZE * REGION_SIZE];
        r.read_u32_into::<LE>(&mut cells)?;
        region.set_collision(plane, CollisionPlane::from_raw(cells)?);
    }

    Ok(region)
}

/// Write a region dump to disk.
pub fn save_region<P: AsRef<Path>>(path: P, region: &Region) -> Result<(), DumpError> {
    let mut w = BufWriter::new(File::create(path)?);

    w.write_all(&MAGIC)?;
    let (base_x, base_y) = region.base();
    w.write_i32::<LE>(base_x)?;
    w.write_i32::<LE>(base_y)?;

    // Planes always carry a flag grid, zeroed when nothing is set.
    for plane in 0..4 {
        if let Some(grid) = region.tile_flags(plane) {
            w.write_all(grid.raw())?;
        }
    }

    let mut present = 0u8;
    for plane in 0..4 {
        if region.heights(plane).is_some() {
            present |= 1 << plane;
        }
    }
    w.write_u8(present)?;
    for plane in 0..4 {
        if let Some(grid) = region.heights(plane) {
            for &h in grid.raw() {
                w.write_i32::<LE>(h)?;
            }
        }
    }

    let mut present = 0u8;
    for plane in 0..4 {
        if region.collision(plane).is_some() {
            present |= 1 << plane;
        }
    }
    w.write_u8(present)?;
    for plane in 0..4 {
        if let Some(grid) = region.collision(plane) {
            for x in 0..REGION_SIZE as i32 {
                for y in 0..REGION_SIZE as i32 {
                    w.write_u32::<LE>(grid.mask(x, y))?;
                }
            }
        }
    }

    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::flags::{CollisionFlags, TileFlags};

    fn sample_region() -> Region {
        let mut region = Region::new(3200, 3400);
        let mut flags = FlagGrid::default();
        flags.set(12, 13, TileFlags::BRIDGE);
        region.set_tile_flags(1, flags);

        let mut heights = HeightGrid::level(-240);
        heights.set(50, 50, -480);
        region.set_heights(0, heights);

        let mut coll = CollisionPlane::open();
        coll.set(40, 41, CollisionFlags::OBJECT | CollisionFlags::WALL_EAST);
        region.set_collision(0, coll);
        region
    }

    #[test]
    fn dump_survives_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sample.rgn");
        save_region(&path, &sample_region()).unwrap();
        let back = load_region(&path).unwrap();

        assert_eq!(back.base(), (3200, 3400));
        assert!(back.bridge_at(12, 13));
        assert_eq!(back.heights(0).unwrap().at(50, 50), -480);
        assert_eq!(back.heights(0).unwrap().at(0, 0), -240);
        assert!(back.heights(1).is_none());
        let coll = back.collision(0).unwrap();
        assert_eq!(
            coll.flags(40, 41),
            CollisionFlags::OBJECT | CollisionFlags::WALL_EAST
        );
        assert_eq!(coll.mask(0, 0), 0);
        assert!(back.collision(2).is_none());
    }

    #[test]
    fn rejects_garbage_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bogus.rgn");
        std::fs::write(&path, b"NOTRGN__").unwrap();
        let err = load_region(&path).unwrap_err();
        assert!(matches!(err, DumpError::BadMagic));
    }

    #[test]
    fn truncated_dump_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("short.rgn");
        std::fs::write(&path, b"RGN1\x00\x00").unwrap();
        let err = load_region(&path).unwrap_err();
        assert!(matches!(err, DumpError::Io(_)));
    }
}
