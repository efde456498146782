//! One-sided spectrum extraction from halfcomplex transform output
//!
//! Retained bins are 1..N/2 (exclusive): DC and Nyquist are left out.

use super::halfcomplex::HalfcomplexBuffer;
use num_complex::Complex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// One retained bin of the spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumSample {
    /// Bin frequency in cycles per unit of sample spacing (Hz for seconds)
    pub frequency: f64,

    /// |X[k]|
    pub magnitude: f64,
}

fn retained_bins(buffer: &HalfcomplexBuffer) -> impl Iterator<Item = Complex<f64>> + '_ {
    (1..buffer.len() / 2).filter_map(move |k| buffer.bin(k))
}

/// Magnitude spectrum sqrt(re² + im²) for bins 1..N/2
///
/// # Returns
/// `max(0, N/2 - 1)` values in ascending bin order; empty for N < 4
pub fn compute_magnitude_spectrum(buffer: &HalfcomplexBuffer) -> Vec<f64> {
    retained_bins(buffer).map(|c| c.norm_sqr().sqrt()).collect()
}

/// Power spectrum re² + im² over the same bins as [`compute_magnitude_spectrum`]
pub fn compute_power_spectrum(buffer: &HalfcomplexBuffer) -> Vec<f64> {
    retained_bins(buffer).map(|c| c.norm_sqr()).collect()
}

/// Frequencies of the retained bins
///
/// # Arguments
/// * `bin_count` - Number of bins, normally the magnitude spectrum length
/// * `sample_spacing` - Time between samples (inverse of sample rate)
/// * `total_samples` - Transform length N
///
/// # Returns
/// `i / (sample_spacing * total_samples)` for i = 1..=bin_count
pub fn compute_frequency_bins(
    bin_count: usize,
    sample_spacing: f64,
    total_samples: usize,
) -> Result<Vec<f64>, SpectrumError> {
    if !(sample_spacing.is_finite() && sample_spacing > 0.0) {
        return Err(SpectrumError::InvalidArgument(format!(
            "sample spacing must be finite and positive, got {}",
            sample_spacing
        )));
    }
    if total_samples == 0 {
        return Err(SpectrumError::InvalidArgument(
            "total samples must be at least 1".to_string(),
        ));
    }

    // Both the span and every i / span must stay finite
    let span = sample_spacing * total_samples as f64;
    let highest = bin_count.max(1) as f64 / span;
    if !(span.is_finite() && (1.0 / span).is_finite() && highest.is_finite()) {
        return Err(SpectrumError::InvalidArgument(format!(
            "sample spacing {} over {} samples gives no representable frequencies",
            sample_spacing, total_samples
        )));
    }

    Ok((1..=bin_count).map(|i| i as f64 / span).collect())
}

/// Pair each retained magnitude with its frequency
pub fn extract_spectrum(
    buffer: &HalfcomplexBuffer,
    sample_spacing: f64,
) -> Result<Vec<SpectrumSample>, SpectrumError> {
    let magnitudes = compute_magnitude_spectrum(buffer);
    let frequencies = compute_frequency_bins(magnitudes.len(), sample_spacing, buffer.len())?;

    Ok(frequencies
        .into_iter()
        .zip(magnitudes)
        .map(|(frequency, magnitude)| SpectrumSample {
            frequency,
            magnitude,
        })
        .collect())
}
