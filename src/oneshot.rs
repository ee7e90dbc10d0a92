//! One-call transforms that plan, run and discard a [`MixedRadixFft`].
//!
//! Handy for a single transform. Repeated transforms of one length should keep
//! a plan around, or use [`FftPlanner`](crate::fft::FftPlanner).
//!
//! The `_as` variants pick the working precision independently of the input
//! element type, e.g. an `f32` signal through an `f64` transform. The `_n`
//! variants take a length and a single-pass iterator instead of a slice; the
//! `_iter` variants take an iterator that already knows its length.

use alloc::vec::Vec;

use crate::access::Source;
use crate::fft::MixedRadixFft;
use crate::num::{Complex, Float, ToComplex};

/// Forward transform of `input` at its own precision.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    fft_as::<T, _>(input)
}

/// Forward transform of `input` computed over `Complex<T>`.
pub fn fft_as<T, S>(input: &[S]) -> Vec<Complex<T>>
where
    T: Float,
    S: ToComplex<T> + Copy,
{
    MixedRadixFft::<T>::from_len(input.len()).forward_vec(input)
}

/// Forward transform of the first `size` items of a stream.
pub fn fft_n<T, I>(input: I, size: usize) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator<Item = Complex<T>>,
{
    fft_n_as::<T, _>(input, size)
}

/// Forward transform of the first `size` items of a stream, computed over
/// `Complex<T>`.
pub fn fft_n_as<T, I>(input: I, size: usize) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator,
    I::Item: ToComplex<T> + Copy,
{
    MixedRadixFft::<T>::from_len(size).forward_vec(Source::sequential(input))
}

/// Inverse transform of `input` at its own precision.
pub fn ifft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    ifft_as::<T, _>(input)
}

/// Inverse transform of `input` computed over `Complex<T>`.
pub fn ifft_as<T, S>(input: &[S]) -> Vec<Complex<T>>
where
    T: Float,
    S: ToComplex<T> + Copy,
{
    MixedRadixFft::<T>::from_len(input.len()).inverse_vec(input)
}

/// Inverse transform of the first `size` items of a stream.
pub fn ifft_n<T, I>(input: I, size: usize) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator<Item = Complex<T>>,
{
    ifft_n_as::<T, _>(input, size)
}

/// Inverse transform of the first `size` items of a stream, computed over
/// `Complex<T>`.
pub fn ifft_n_as<T, I>(input: I, size: usize) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator,
    I::Item: ToComplex<T> + Copy,
{
    MixedRadixFft::<T>::from_len(size).inverse_vec(Source::sequential(input))
}

/// Forward transform of every item of a length-aware iterator.
pub fn fft_iter<T, I>(input: I) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator<Item = Complex<T>>,
    I::IntoIter: ExactSizeIterator,
{
    fft_iter_as::<T, _>(input)
}

/// Forward transform of every item of a length-aware iterator, computed over
/// `Complex<T>`.
pub fn fft_iter_as<T, I>(input: I) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: ToComplex<T> + Copy,
{
    let input = input.into_iter();
    let size = input.len();
    fft_n_as::<T, _>(input, size)
}

/// Inverse transform of every item of a length-aware iterator.
pub fn ifft_iter<T, I>(input: I) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator<Item = Complex<T>>,
    I::IntoIter: ExactSizeIterator,
{
    ifft_iter_as::<T, _>(input)
}

/// Inverse transform of every item of a length-aware iterator, computed over
/// `Complex<T>`.
pub fn ifft_iter_as<T, I>(input: I) -> Vec<Complex<T>>
where
    T: Float,
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: ToComplex<T> + Copy,
{
    let input = input.into_iter();
    let size = input.len();
    ifft_n_as::<T, _>(input, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{Complex32, Complex64};
    use alloc::vec;

    #[test]
    fn test_fft_infers_precision() {
        let input = vec![Complex32::new(1.0, 0.0); 5];
        let out: Vec<Complex32> = fft(&input);
        assert!((out[0].re - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_fft_as_widens() {
        let input = [Complex32::new(1.0, 0.0), Complex32::new(0.0, 1.0), Complex32::zero()];
        let out = fft_as::<f64, _>(&input);
        let direct = fft(&[Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0), Complex64::zero()]);
        assert_eq!(out, direct);
    }

    #[test]
    fn test_stream_variants_match_slices() {
        let input: Vec<Complex64> = (0..10)
            .map(|i| Complex64::new(i as f64, (i * i) as f64 * 0.1))
            .collect();
        assert_eq!(fft_n(input.iter().copied(), 10), fft(&input));
        assert_eq!(ifft_n(input.iter().copied(), 10), ifft(&input));
        assert_eq!(fft_n_as::<f64, _>(input.iter(), 10), fft(&input));
        assert_eq!(ifft_n_as::<f64, _>(input.iter(), 10), ifft_as::<f64, _>(&input));
    }

    #[test]
    fn test_roundtrip_prime_length() {
        let input: Vec<Complex64> = (0..13).map(|i| Complex64::new(i as f64, -1.0)).collect();
        let back = ifft(&fft(&input));
        for (a, b) in input.iter().zip(back.iter()) {
            assert!((*a - *b).norm_sqr() < 1e-20);
        }
    }

    #[test]
    fn test_iter_variants_infer_length() {
        let sample = |i: usize| Complex64::new((i % 5) as f64, -0.5 * i as f64);
        let input: Vec<Complex64> = (0..24).map(sample).collect();
        assert_eq!(fft_iter((0..24).map(sample)), fft(&input));
        assert_eq!(ifft_iter((0..24).map(sample)), ifft(&input));

        let reversed: Vec<Complex64> = input.iter().rev().copied().collect();
        assert_eq!(fft_iter(input.iter().rev().copied()), fft(&reversed));
        assert_eq!(fft_iter_as::<f64, _>(input.iter()), fft(&input));
        assert_eq!(ifft_iter_as::<f64, _>(input.iter()), ifft(&input));
        assert!(fft_iter(core::iter::empty::<Complex64>()).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let input: [Complex64; 0] = [];
        assert!(fft(&input).is_empty());
        assert!(ifft_n(core::iter::empty::<Complex64>(), 0).is_empty());
    }
}
