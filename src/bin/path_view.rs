//! Collision-grid viewer.
//!
//! Renders one plane of a region dump (or a built-in demo region) and
//! reports the path length between two cells:
//!
//! ```bash
//! cargo run --bin path_view -- --start 20,52 --dest 84,52 [dump.rgn]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use once_cell::sync::Lazy;
use regex::Regex;

use navcore::nav::path_length;
use navcore::world::loader::load_region;
use navcore::{CollisionFlags, CollisionPlane, Region, REGION_SIZE};

const SCALE: usize = 6;
const SIDE: usize = REGION_SIZE * SCALE;

#[derive(Parser)]
#[command(about = "Render a region's collision plane and a path query")]
struct Args {
    /// Region dump to display; a synthetic demo region when omitted.
    dump: Option<PathBuf>,

    /// Floor plane to display.
    #[arg(long, default_value_t = 0)]
    plane: usize,

    /// Start cell, region-local "x,y".
    #[arg(long, default_value = "20,52", value_parser = parse_cell)]
    start: (i32, i32),

    /// Destination cell, region-local "x,y".
    #[arg(long, default_value = "84,52", value_parser = parse_cell)]
    dest: (i32, i32),

    /// Accept any tile beside the destination (object targets).
    #[arg(long)]
    adjacent: bool,
}

fn parse_cell(s: &str) -> Result<(i32, i32), String> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}),(\d{1,3})$").unwrap());
    let caps = RE
        .captures(s)
        .ok_or_else(|| format!("`{s}` is not a x,y cell"))?;
    // The pattern admits only 1-3 digit numbers, which always parse.
    Ok((caps[1].parse().unwrap(), caps[2].parse().unwrap()))
}

/// A region with a long wall and one gap, enough to watch the flood pick
/// a detour.
fn demo_region() -> Region {
    let mut grid = CollisionPlane::open();
    for y in 0..REGION_SIZE as i32 {
        if !(30..34).contains(&y) {
            grid.add(52, y, CollisionFlags::OBJECT);
        }
    }
    for x in 20..40 {
        grid.add(x, 70, CollisionFlags::WALL_NORTH);
        grid.add(x, 71, CollisionFlags::WALL_SOUTH);
    }
    let mut region = Region::new(0, 0);
    region.set_collision(0, grid);
    region
}

fn cell_colour(flags: CollisionFlags, cell: (i32, i32), args: &Args) -> u32 {
    if cell == args.start {
        return 0x00_40c040;
    }
    if cell == args.dest {
        return 0x00_4060e0;
    }
    if flags.intersects(CollisionFlags::SOLID) {
        0x00_b03030
    } else if !flags.is_empty() {
        0x00_c08030 // wall bits only
    } else {
        0x00_202428
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let region = match &args.dump {
        Some(path) => load_region(path).with_context(|| format!("loading {}", path.display()))?,
        None => demo_region(),
    };
    let grid = region
        .collision(args.plane)
        .with_context(|| format!("no collision data for plane {}", args.plane))?;

    let len = path_length(grid, args.start, args.dest, args.adjacent);
    match len {
        -1 => println!(
            "{:?} -> {:?}: unreachable within the loaded region",
            args.start, args.dest
        ),
        n => println!("{:?} -> {:?}: {n} steps", args.start, args.dest),
    }

    // Rasterise the plane, north up.
    let mut buffer = vec![0u32; SIDE * SIDE];
    for x in 0..REGION_SIZE as i32 {
        for y in 0..REGION_SIZE as i32 {
            let colour = cell_colour(grid.flags(x, y), (x, y), &args);
            let px = x as usize * SCALE;
            let py = (REGION_SIZE - 1 - y as usize) * SCALE;
            for dy in 0..SCALE - 1 {
                for dx in 0..SCALE - 1 {
                    buffer[(py + dy) * SIDE + px + dx] = colour;
                }
            }
        }
    }

    let mut window = Window::new("navcore path view", SIDE, SIDE, WindowOptions::default())?;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, SIDE, SIDE)?;
    }
    Ok(())
}
