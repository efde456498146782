//! Fixed-length transform plans backed by realfft

pub mod plan;

pub use plan::{HalfcomplexPlan, RealToComplexPlan, TransformError};
