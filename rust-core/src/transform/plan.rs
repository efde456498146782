//! Real-input DFT plans using realfft
//!
//! A plan is built once for a fixed length and executed any number of times.

use crate::spectrum::HalfcomplexBuffer;
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Cannot plan a transform of length 0")]
    EmptyPlan,

    #[error("Input length mismatch: plan expects {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("FFT backend failed: {0}")]
    Backend(#[from] realfft::FftError),
}

/// Forward real FFT with reusable buffers, shared by both plan kinds
struct RealForward {
    /// Transform length (number of real samples)
    len: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Scratch copy of the input (realfft overwrites its input)
    input_buffer: Vec<f64>,

    /// Output half-spectrum, len/2 + 1 bins
    output_buffer: Vec<Complex<f64>>,
}

impl RealForward {
    fn new(len: usize) -> Result<Self, TransformError> {
        if len == 0 {
            return Err(TransformError::EmptyPlan);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(len);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            len,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Run the transform; the caller's input is left untouched
    fn process(&mut self, input: &[f64]) -> Result<&[Complex<f64>], TransformError> {
        if input.len() != self.len {
            return Err(TransformError::LengthMismatch {
                expected: self.len,
                actual: input.len(),
            });
        }

        self.input_buffer.copy_from_slice(input);
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)?;

        Ok(&self.output_buffer)
    }

    fn num_bins(&self) -> usize {
        self.len / 2 + 1
    }
}

/// Real-to-complex plan: N real samples in, N/2 + 1 complex bins out
pub struct RealToComplexPlan {
    engine: RealForward,
}

impl RealToComplexPlan {
    /// Plan a forward transform of `len` real samples
    pub fn new(len: usize) -> Result<Self, TransformError> {
        Ok(Self {
            engine: RealForward::new(len)?,
        })
    }

    /// Execute the plan
    ///
    /// # Returns
    /// Unnormalised bins X[k] for k = 0..=len/2
    pub fn execute(&mut self, input: &[f64]) -> Result<Vec<Complex<f64>>, TransformError> {
        self.engine.process(input).map(|bins| bins.to_vec())
    }

    pub fn len(&self) -> usize {
        self.engine.len
    }

    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }
}

/// Real-to-real plan producing halfcomplex packed output
pub struct HalfcomplexPlan {
    engine: RealForward,
}

impl HalfcomplexPlan {
    /// Plan a forward transform of `len` real samples
    pub fn new(len: usize) -> Result<Self, TransformError> {
        Ok(Self {
            engine: RealForward::new(len)?,
        })
    }

    /// Execute the plan
    ///
    /// # Returns
    /// `len` reals: Re(X[0..=len/2]) ascending, then Im(X[k]) mirrored from the end
    pub fn execute(&mut self, input: &[f64]) -> Result<HalfcomplexBuffer, TransformError> {
        let len = self.engine.len;
        let bins = self.engine.process(input)?;
        Ok(HalfcomplexBuffer::from_half_spectrum(bins, len))
    }

    pub fn len(&self) -> usize {
        self.engine.len
    }

    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }
}
