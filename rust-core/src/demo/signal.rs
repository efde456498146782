//! Synthetic test signals

/// One period of the demo waveform
pub const SQUARE_PERIOD: [f64; 4] = [0.0, 0.0, 1.0, 1.0];

/// Repeat `[0, 0, 1, 1]` out to `len` samples
///
/// Lengths that are not a multiple of 4 end mid-period.
pub fn square_pattern(len: usize) -> Vec<f64> {
    SQUARE_PERIOD.iter().copied().cycle().take(len).collect()
}
