//! The two console demos: real-to-complex and real-to-real (halfcomplex)

pub mod report;
pub mod signal;

pub use report::{ComplexReport, HalfcomplexReport};
pub use signal::square_pattern;

use crate::spectrum::{compute_frequency_bins, compute_magnitude_spectrum, SpectrumError};
use crate::transform::{HalfcomplexPlan, RealToComplexPlan, TransformError};
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid demo configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of samples in the test signal (and transform length)
    pub signal_len: usize,

    /// Time between samples, inverse of the sample rate
    pub sample_spacing: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            signal_len: 16,
            sample_spacing: 1.0,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.signal_len == 0 {
            return Err(DemoError::InvalidConfig(
                "signal length must be at least 1".to_string(),
            ));
        }
        if !(self.sample_spacing.is_finite() && self.sample_spacing > 0.0) {
            return Err(DemoError::InvalidConfig(format!(
                "sample spacing must be finite and positive, got {}",
                self.sample_spacing
            )));
        }
        Ok(())
    }
}

/// Transform the test signal and keep the complex half-spectrum
pub fn real_to_complex(config: &DemoConfig) -> Result<ComplexReport, DemoError> {
    config.validate()?;
    debug!("real_to_complex: planning {} samples", config.signal_len);

    let input = square_pattern(config.signal_len);
    let mut plan = RealToComplexPlan::new(config.signal_len)?;
    let output = plan.execute(&input)?;

    info!(
        "real_to_complex: {} samples -> {} complex bins",
        input.len(),
        output.len()
    );

    Ok(ComplexReport { input, output })
}

/// Transform the test signal into halfcomplex form, then derive its spectrum
pub fn real_to_real(config: &DemoConfig) -> Result<HalfcomplexReport, DemoError> {
    config.validate()?;
    debug!("real_to_real: planning {} samples", config.signal_len);

    let input = square_pattern(config.signal_len);
    let mut plan = HalfcomplexPlan::new(config.signal_len)?;
    let halfcomplex = plan.execute(&input)?;

    let magnitudes = compute_magnitude_spectrum(&halfcomplex);
    let frequencies =
        compute_frequency_bins(magnitudes.len(), config.sample_spacing, halfcomplex.len())?;

    info!(
        "real_to_real: {} samples -> {} spectrum bins",
        input.len(),
        magnitudes.len()
    );

    Ok(HalfcomplexReport {
        input,
        halfcomplex: halfcomplex.into_inner(),
        magnitudes,
        frequencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.signal_len, 16);
        assert_eq!(config.sample_spacing, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let zero_len = DemoConfig {
            signal_len: 0,
            ..DemoConfig::default()
        };
        assert!(matches!(
            real_to_complex(&zero_len),
            Err(DemoError::InvalidConfig(_))
        ));

        let bad_spacing = DemoConfig {
            sample_spacing: 0.0,
            ..DemoConfig::default()
        };
        assert!(matches!(
            real_to_real(&bad_spacing),
            Err(DemoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_real_to_complex_default() {
        let report = real_to_complex(&DemoConfig::default()).unwrap();

        assert_eq!(report.input, square_pattern(16));
        assert_eq!(report.output.len(), 9);
        assert!((report.output[0].re - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_real_to_real_default() {
        let report = real_to_real(&DemoConfig::default()).unwrap();

        assert_eq!(report.halfcomplex.len(), 16);
        assert_eq!(report.magnitudes.len(), 7);
        assert!(report.magnitudes.iter().all(|&m| m >= 0.0));
        assert!((report.magnitudes[3] - 32.0_f64.sqrt()).abs() < 1e-10);

        let expected: Vec<f64> = (1..=7).map(|i| i as f64 / 16.0).collect();
        assert_eq!(report.frequencies, expected);
    }

    #[test]
    fn test_real_to_real_sample_spacing() {
        let config = DemoConfig {
            signal_len: 32,
            sample_spacing: 0.5,
        };
        let report = real_to_real(&config).unwrap();

        assert_eq!(report.magnitudes.len(), 15);
        assert_eq!(report.frequencies[0], 1.0 / 16.0);
        // Period 4 at 8 periods -> peak in bin 8
        assert!((report.magnitudes[7] - 8.0 * 2.0_f64.sqrt()).abs() < 1e-9);
    }
}
