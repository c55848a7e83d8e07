// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Round to the nearest integer, ties away from zero.
///
/// `f64::round` already ties away from zero; the cast saturates on
/// non-finite input.
#[inline]
pub fn round_away(v: f64) -> i32 {
    v.round() as i32
}
