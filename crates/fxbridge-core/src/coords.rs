//! Coordinate conversion between engine space and GUI space.

use glam::IVec2;

/// Convert a native y coordinate into the GUI's top-down space.
///
/// The surface height is rounded to the nearest pixel before flipping.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn flip_y(surface_height: f64, native_y: i32) -> i32 {
    surface_height.round() as i32 - native_y
}

/// Convert surface-local coordinates into screen-absolute ones.
#[inline]
#[must_use]
pub fn to_screen(local: IVec2, window_offset: IVec2) -> IVec2 {
    local + window_offset
}
