//! Scroll-snap resolution in pitch space.
//!
//! Pitch is the fixed visual distance between adjacent ticks (item width +
//! spacing), measured in terminal columns.  These functions know nothing
//! about the value range; [`convert`](super::convert) handles the
//! value-domain rounding on its own scale and the two are deliberately kept
//! separate.

/// Multiple of `pitch` nearest to `offset`.
///
/// `lower = floor(offset / pitch) * pitch`, `upper = lower + pitch`; returns
/// whichever is closer, preferring `lower` on an exact tie.  Called once per
/// drag release to pick the offset the surface settles on, not continuously
/// during the drag.
pub fn nearest_pitch_multiple(offset: f64, pitch: f64) -> f64 {
    let lower = (offset / pitch).floor() * pitch;
    let upper = lower + pitch;
    if offset - lower <= upper - offset {
        lower
    } else {
        upper
    }
}

/// Tick index a raw `offset` snaps to, clamped to `[0, max_index]`.
pub fn index_from_offset(offset: f64, pitch: f64, max_index: usize) -> usize {
    let snapped = nearest_pitch_multiple(offset, pitch);
    (snapped / pitch).round().clamp(0.0, max_index as f64) as usize
}

/// Column offset at which tick `index` sits under the anchor.
pub fn offset_from_index(index: usize, pitch: f64) -> f64 {
    index as f64 * pitch
}
