//! Quality bounds shared by every non-legendary item.

/// Lowest quality an item can age down to.
pub const QUALITY_MIN: i32 = 0;

/// Highest quality an item can age up to.
pub const QUALITY_MAX: i32 = 50;

/// Box a quality value into `[QUALITY_MIN, QUALITY_MAX]`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(QUALITY_MIN, QUALITY_MAX)
}
