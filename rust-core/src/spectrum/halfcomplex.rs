//! Halfcomplex packed spectrum
//!
//! The DFT of N real samples is conjugate-symmetric, so N reals are enough to
//! hold it. Halfcomplex packing stores
//!
//! ```text
//! [ r0, r1, r2, ..., r(N/2), i((N+1)/2 - 1), ..., i2, i1 ]
//! ```
//!
//! i.e. for 0 < k < N/2 the real part of bin k sits at index k and its
//! imaginary part at index N - k. Bin 0 (DC) and, for even N, bin N/2
//! (Nyquist) are purely real and have no imaginary slot.

use num_complex::Complex;

/// Owned halfcomplex sequence of N reals
///
/// Any length is accepted. Lengths 0 and 1 are degenerate but valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HalfcomplexBuffer {
    data: Vec<f64>,
}

impl HalfcomplexBuffer {
    /// Pack the non-redundant half of a real-input DFT
    ///
    /// # Arguments
    /// * `bins` - X[k] for k = 0..=n/2 (extra bins ignored, missing bins read as zero)
    /// * `n` - Length of the original real signal
    pub fn from_half_spectrum(bins: &[Complex<f64>], n: usize) -> Self {
        let mut data = vec![0.0; n];
        let num_bins = if n == 0 { 0 } else { n / 2 + 1 };

        for (k, bin) in bins.iter().enumerate().take(num_bins) {
            data[k] = bin.re;
            // DC and Nyquist have no imaginary slot
            if k > 0 && n - k > k {
                data[n - k] = bin.im;
            }
        }

        Self { data }
    }

    /// Number of packed reals (the transform length N)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Number of logical bins represented (N/2 + 1, or 0 when empty)
    pub fn num_bins(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() / 2 + 1
        }
    }

    /// Logical bin `k` as a complex value
    ///
    /// Returns `None` for `k > N/2` or an empty buffer.
    pub fn bin(&self, k: usize) -> Option<Complex<f64>> {
        let n = self.data.len();
        if k >= self.num_bins() {
            return None;
        }

        let re = self.data[k];
        let im = if k == 0 || 2 * k == n {
            0.0
        } else {
            self.data[n - k]
        };

        Some(Complex::new(re, im))
    }
}

impl From<Vec<f64>> for HalfcomplexBuffer {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl AsRef<[f64]> for HalfcomplexBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_even_length() {
        let bins: Vec<Complex<f64>> = (0..=4)
            .map(|k| Complex::new(k as f64, 10.0 * k as f64))
            .collect();
        let hc = HalfcomplexBuffer::from_half_spectrum(&bins, 8);

        // r0 r1 r2 r3 r4 i3 i2 i1
        assert_eq!(
            hc.as_slice(),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 30.0, 20.0, 10.0]
        );
    }

    #[test]
    fn test_packing_odd_length() {
        let bins: Vec<Complex<f64>> = (0..=2)
            .map(|k| Complex::new(k as f64, 10.0 * k as f64))
            .collect();
        let hc = HalfcomplexBuffer::from_half_spectrum(&bins, 5);

        // r0 r1 r2 i2 i1
        assert_eq!(hc.as_slice(), &[0.0, 1.0, 2.0, 20.0, 10.0]);
    }

    #[test]
    fn test_bin_accessor() {
        let hc = HalfcomplexBuffer::from(vec![0.0, 1.0, 2.0, 3.0, 4.0, 30.0, 20.0, 10.0]);

        assert_eq!(hc.num_bins(), 5);
        assert_eq!(hc.bin(0), Some(Complex::new(0.0, 0.0)));
        assert_eq!(hc.bin(1), Some(Complex::new(1.0, 10.0)));
        assert_eq!(hc.bin(3), Some(Complex::new(3.0, 30.0)));
        // Nyquist is real
        assert_eq!(hc.bin(4), Some(Complex::new(4.0, 0.0)));
        assert_eq!(hc.bin(5), None);
    }

    #[test]
    fn test_degenerate_lengths() {
        let empty = HalfcomplexBuffer::default();
        assert!(empty.is_empty());
        assert_eq!(empty.num_bins(), 0);
        assert_eq!(empty.bin(0), None);

        let single = HalfcomplexBuffer::from(vec![7.0]);
        assert_eq!(single.num_bins(), 1);
        assert_eq!(single.bin(0), Some(Complex::new(7.0, 0.0)));
        assert_eq!(single.bin(1), None);
    }

    #[test]
    fn test_packing_into_zero_length() {
        let hc = HalfcomplexBuffer::from_half_spectrum(&[Complex::new(1.0, 0.0)], 0);
        assert!(hc.is_empty());
        assert_eq!(hc.bin(0), None);

        let one = HalfcomplexBuffer::from_half_spectrum(&[Complex::new(2.0, 5.0)], 1);
        assert_eq!(one.as_slice(), &[2.0]);
    }

    #[test]
    fn test_short_bin_slice_zero_fills() {
        let hc = HalfcomplexBuffer::from_half_spectrum(&[Complex::new(3.0, 0.0)], 4);
        assert_eq!(hc.as_slice(), &[3.0, 0.0, 0.0, 0.0]);
    }
}
