//! FFT Tour - real-input DFTs and halfcomplex spectrum extraction
//! 
//! Thin plans over realfft plus the magnitude/frequency derivation for
//! halfcomplex-packed output.

pub mod demo;
pub mod spectrum;
pub mod transform;

pub use spectrum::{
    compute_frequency_bins, compute_magnitude_spectrum, HalfcomplexBuffer, SpectrumSample,
};
pub use transform::{HalfcomplexPlan, RealToComplexPlan};
