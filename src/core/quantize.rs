//! ANSI-256 approximation by per-channel snapping onto the color cube.
//!
//! Each channel is moved to the nearer end of the pair of cube levels that
//! brackets it. This is not a perceptual nearest-color search over the whole
//! palette; the grayscale ramp and system colors are only reachable through
//! an exact palette match.

use crate::core::constants::CUBE_STEPS;

/// Snap one channel onto [`CUBE_STEPS`]. Ties go to the lower level.
pub fn snap_channel(value: u8) -> u8 {
    CUBE_STEPS
        .windows(2)
        .find_map(|pair| {
            let (lo, hi) = (pair[0], pair[1]);
            (lo..=hi)
                .contains(&value)
                .then(|| if value - lo <= hi - value { lo } else { hi })
        })
        .unwrap_or(CUBE_STEPS[CUBE_STEPS.len() - 1])
}

/// Snap all three channels and render them as 6 lowercase hex digits.
pub fn snap_to_cube([r, g, b]: [u8; 3]) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        snap_channel(r),
        snap_channel(g),
        snap_channel(b)
    )
}
