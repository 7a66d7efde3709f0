//! Fixed-point trigonometric tables.
//!
//! The client carves the full turn into 16384 angle steps and stores
//! sine/cosine scaled by 32768, so a 2-D rotation is two multiplies and a
//! 15-bit shift. The tables are computed once on first use and never
//! touched again.

use once_cell::sync::Lazy;

/// Angle steps per full turn.
pub const ANGLE_STEPS: usize = 16384;

/// Mask that wraps any angle into `0..ANGLE_STEPS`.
pub const ANGLE_MASK: i32 = 0x3fff;

/// Right-shift undoing the 32768 table scale after a multiply.
pub const TRIG_SHIFT: u32 = 15;

// One angle step in radians.
const STEP: f64 = 0.000_383_495_196_971_410_29;

pub static SIN_TABLE: Lazy<[i32; ANGLE_STEPS]> = Lazy::new(|| {
    let mut t = [0i32; ANGLE_STEPS];
    for (i, v) in t.iter_mut().enumerate() {
        *v = (32768.0 * (i as f64 * STEP).sin()) as i32;
    }
    t
});

pub static COS_TABLE: Lazy<[i32; ANGLE_STEPS]> = Lazy::new(|| {
    let mut t = [0i32; ANGLE_STEPS];
    for (i, v) in t.iter_mut().enumerate() {
        *v = (32768.0 * (i as f64 * STEP).cos()) as i32;
    }
    t
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_values() {
        assert_eq!(SIN_TABLE[0], 0);
        assert_eq!(COS_TABLE[0], 32768);
        // 4096 steps = π/2 exactly.
        assert_eq!(SIN_TABLE[4096], 32768);
        assert_eq!(COS_TABLE[4096], 0);
    }

    #[test]
    fn unit_magnitude_throughout() {
        for i in (0..ANGLE_STEPS).step_by(37) {
            let s = SIN_TABLE[i] as i64;
            let c = COS_TABLE[i] as i64;
            let mag = s * s + c * c;
            // Truncation loses at most a couple of counts per component.
            let unit = 32768i64 * 32768;
            assert!((mag - unit).abs() < unit / 500, "index {i}: {mag}");
        }
    }

    #[test]
    fn mask_wraps_negative_angles() {
        assert_eq!(ANGLE_MASK & -1, ANGLE_STEPS as i32 - 1);
        assert_eq!(ANGLE_MASK & ANGLE_STEPS as i32, 0);
    }
}
