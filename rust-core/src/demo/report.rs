//! Demo results and their console rendering

use num_complex::Complex;
use std::fmt;

/// Output of the real-to-complex demo
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexReport {
    pub input: Vec<f64>,

    /// X[k] for k = 0..=N/2
    pub output: Vec<Complex<f64>>,
}

/// Output of the real-to-real (halfcomplex) demo
#[derive(Debug, Clone, PartialEq)]
pub struct HalfcomplexReport {
    pub input: Vec<f64>,
    pub halfcomplex: Vec<f64>,
    pub magnitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for v in values {
        write!(f, " {}", v)?;
    }
    writeln!(f)
}

impl fmt::Display for ComplexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input array:")?;
        write_values(f, &self.input)?;

        writeln!(f, "Output array:")?;
        for c in &self.output {
            write!(f, " ({},{})", c.re, c.im)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HalfcomplexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input array:")?;
        write_values(f, &self.input)?;

        writeln!(f, "\"Halfcomplex\" output array:")?;
        write_values(f, &self.halfcomplex)?;

        writeln!(f, "Power spectrum:")?;
        write_values(f, &self.magnitudes)?;

        writeln!(f, "Frequencies of spectrum:")?;
        write_values(f, &self.frequencies)
    }
}
