//! Halfcomplex spectra and magnitude/frequency extraction

pub mod halfcomplex;
pub mod extractor;

pub use halfcomplex::HalfcomplexBuffer;
pub use extractor::{
    compute_frequency_bins, compute_magnitude_spectrum, compute_power_spectrum,
    extract_spectrum, SpectrumError, SpectrumSample,
};
