//! Mixed-radix Fast Fourier Transform.
//!
//! A [`MixedRadixFft`] is planned once per length: the length is factored
//! into radices, the `N` roots of unity are tabulated, and the digit-reversal
//! and pass schedule are derived. Each call then permutes the input into a
//! fresh working buffer, runs one butterfly pass per radix and, for the
//! inverse, scales by `1/N`. A plan is immutable and can be shared between
//! threads; [`FftPlanner`] keeps one plan per length.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::access::{Sink, Source};
use crate::butterflies::{run_passes, schedule, Pass};
use crate::factor::factorize;
use crate::num::{Complex, Float, ToComplex};
use crate::permute::DigitReversal;
use crate::twiddle::TwiddleTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The requested length is negative or does not fit in `usize`.
    InvalidSize,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "transform size must be non-negative"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Sign of the exponent in the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FftDirection {
    /// `X_k = Σ x_n · e^(-2πi·kn/N)`
    #[default]
    Forward,
    /// `x_n = (1/N) · Σ X_k · e^(+2πi·kn/N)`
    Inverse,
}

/// A planned transform of one fixed length.
#[derive(Clone, Debug)]
pub struct MixedRadixFft<T: Float> {
    len: usize,
    radices: Vec<usize>,
    twiddles: TwiddleTable<T>,
    permuter: DigitReversal,
    passes: Vec<Pass>,
}

impl<T: Float> MixedRadixFft<T> {
    /// Plan a transform of `size` samples.
    ///
    /// Accepts any integer type; a negative size is rejected with
    /// [`FftError::InvalidSize`]. A size of zero yields a plan whose
    /// transforms produce empty output.
    pub fn new<S>(size: S) -> Result<Self, FftError>
    where
        S: TryInto<usize>,
    {
        let len = size.try_into().map_err(|_| FftError::InvalidSize)?;
        Ok(Self::from_len(len))
    }

    /// Plan a transform of `len` samples. Infallible counterpart of
    /// [`new`](Self::new) for lengths already known to be valid.
    pub fn from_len(len: usize) -> Self {
        let radices = factorize(len);
        let twiddles = TwiddleTable::new(len);
        let permuter = DigitReversal::new(&radices);
        let passes = schedule(&radices, len);
        #[cfg(feature = "verbose-logging")]
        log::debug!("planned {}-point transform, radices {:?}", len, radices);
        Self {
            len,
            radices,
            twiddles,
            permuter,
            passes,
        }
    }

    /// Number of samples consumed and produced per call.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Radices in discovery order; the last one is processed first.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    pub fn twiddles(&self) -> &TwiddleTable<T> {
        &self.twiddles
    }

    /// Transform `input` in the given direction and hand the result to
    /// `output`.
    ///
    /// `input` must supply exactly [`len`](Self::len) samples. Slices, arrays
    /// and vectors bind as random-access sources; wrap a single-pass iterator
    /// with [`Source::sequential`]. A slice output is overwritten from the
    /// start and must hold at least `len` samples; a vector output is
    /// appended to.
    ///
    /// # Panics
    /// If a random-access source or an overwritten slice is shorter than
    /// `len`.
    pub fn process<'a, 'b, S>(
        &self,
        direction: FftDirection,
        input: impl Into<Source<'a, S>>,
        output: impl Into<Sink<'b, T>>,
    ) where
        S: ToComplex<T> + Copy + 'a,
    {
        let buffer = self.transform(direction, input.into());
        output.into().write(buffer);
    }

    /// Forward transform; same as [`forward`](Self::forward).
    pub fn process_default<'a, 'b, S>(
        &self,
        input: impl Into<Source<'a, S>>,
        output: impl Into<Sink<'b, T>>,
    ) where
        S: ToComplex<T> + Copy + 'a,
    {
        self.process(FftDirection::default(), input, output)
    }

    pub fn forward<'a, 'b, S>(
        &self,
        input: impl Into<Source<'a, S>>,
        output: impl Into<Sink<'b, T>>,
    ) where
        S: ToComplex<T> + Copy + 'a,
    {
        self.process(FftDirection::Forward, input, output)
    }

    pub fn inverse<'a, 'b, S>(
        &self,
        input: impl Into<Source<'a, S>>,
        output: impl Into<Sink<'b, T>>,
    ) where
        S: ToComplex<T> + Copy + 'a,
    {
        self.process(FftDirection::Inverse, input, output)
    }

    /// Forward transform into a new vector.
    pub fn forward_vec<'a, S>(&self, input: impl Into<Source<'a, S>>) -> Vec<Complex<T>>
    where
        S: ToComplex<T> + Copy + 'a,
    {
        self.transform(FftDirection::Forward, input.into())
    }

    /// Inverse transform into a new vector.
    pub fn inverse_vec<'a, S>(&self, input: impl Into<Source<'a, S>>) -> Vec<Complex<T>>
    where
        S: ToComplex<T> + Copy + 'a,
    {
        self.transform(FftDirection::Inverse, input.into())
    }

    /// Transform the first `len` samples of `data` in place.
    ///
    /// # Panics
    /// If `data` is shorter than `len`.
    pub fn process_in_place(&self, direction: FftDirection, data: &mut [Complex<T>]) {
        let buffer = self.transform(direction, Source::Indexed(&*data));
        data[..buffer.len()].copy_from_slice(&buffer);
    }

    fn transform<S>(&self, direction: FftDirection, input: Source<'_, S>) -> Vec<Complex<T>>
    where
        S: ToComplex<T> + Copy,
    {
        let mut buffer = vec![Complex::zero(); self.len];
        if self.len == 0 {
            return buffer;
        }
        match input {
            Source::Indexed(samples) => {
                self.permuter
                    .indexed(samples, &mut buffer, |s: S| s.to_complex())
            }
            Source::Sequential(stream) => {
                self.permuter
                    .sequential(stream, &mut buffer, |s: S| s.to_complex())
            }
        }
        run_passes(&mut buffer, &self.passes, &self.twiddles, direction);
        if direction == FftDirection::Inverse {
            let inv_n = T::one() / T::from_f64(self.len as f64);
            for c in buffer.iter_mut() {
                *c = c.scale(inv_n);
            }
        }
        buffer
    }
}

/// Cache of transform plans keyed by length.
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<MixedRadixFft<T>>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Plan for `size` samples, built on first request and shared afterwards.
    pub fn plan<S>(&mut self, size: S) -> Result<Arc<MixedRadixFft<T>>, FftError>
    where
        S: TryInto<usize>,
    {
        let len = size.try_into().map_err(|_| FftError::InvalidSize)?;
        if let Some(plan) = self.cache.get(&len) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(MixedRadixFft::from_len(len));
        self.cache.insert(len, Arc::clone(&plan));
        Ok(plan)
    }

    /// Number of cached plans.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{Complex32, Complex64};

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            MixedRadixFft::<f64>::new(-1).unwrap_err(),
            FftError::InvalidSize
        );
        assert_eq!(
            MixedRadixFft::<f32>::new(i64::MIN).unwrap_err(),
            FftError::InvalidSize
        );
    }

    #[test]
    fn test_zero_size_is_empty() {
        let fft = MixedRadixFft::<f64>::new(0usize).unwrap();
        assert!(fft.is_empty());
        assert!(fft.radices().is_empty());
        assert!(fft.twiddles().is_empty());
        let input: [Complex64; 0] = [];
        assert!(fft.forward_vec(&input).is_empty());
        assert!(fft.inverse_vec(&input).is_empty());
    }

    #[test]
    fn test_fft_impulse_and_dc() {
        let fft = MixedRadixFft::<f32>::new(4).unwrap();
        let impulse = [
            Complex32::new(1.0, 0.0),
            Complex32::zero(),
            Complex32::zero(),
            Complex32::zero(),
        ];
        for c in fft.forward_vec(&impulse) {
            assert!((c.re - 1.0).abs() < 1e-6, "re = {}", c.re);
            assert!(c.im.abs() < 1e-6, "im = {}", c.im);
        }
        let ones = [Complex32::new(1.0, 0.0); 4];
        let out = fft.forward_vec(&ones);
        assert!((out[0].re - 4.0).abs() < 1e-6);
        for c in &out[1..] {
            assert!(c.re.abs() < 1e-6);
            assert!(c.im.abs() < 1e-6);
        }
    }

    #[test]
    fn test_default_direction_is_forward() {
        let fft = MixedRadixFft::<f64>::new(6).unwrap();
        let input: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 1.0)).collect();
        let mut a: Vec<Complex64> = Vec::new();
        let mut b: Vec<Complex64> = Vec::new();
        fft.process_default(&input, &mut a);
        fft.forward(&input, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_in_place_matches_out_of_place() {
        let fft = MixedRadixFft::<f64>::new(12).unwrap();
        let input: Vec<Complex64> = (0..12)
            .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
            .collect();
        let expected = fft.inverse_vec(&input);
        let mut data = input.clone();
        fft.process_in_place(FftDirection::Inverse, &mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_planner_reuses_plans() {
        let mut planner = FftPlanner::<f32>::new();
        let a = planner.plan(30).unwrap();
        let b = planner.plan(30usize).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        planner.plan(31).unwrap();
        assert_eq!(planner.len(), 2);
        assert_eq!(planner.plan(-5).unwrap_err(), FftError::InvalidSize);
        planner.clear();
        assert!(planner.is_empty());
    }

    #[test]
    fn test_error_display() {
        let msg = alloc::format!("{}", FftError::InvalidSize);
        assert!(msg.contains("non-negative"));
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod property_tests {
    use super::*;
    use crate::num::Complex64;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Random lengths up to 2000, many with a large leftover factor.
    #[test]
    fn random_lengths_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut planner = FftPlanner::<f64>::new();
        for _ in 0..20 {
            let len = rng.gen_range(1..2000usize);
            let input: Vec<Complex64> = (0..len)
                .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect();
            let plan = planner.plan(len).unwrap();
            let back = plan.inverse_vec(&plan.forward_vec(&input));
            for (a, b) in input.iter().zip(back.iter()) {
                assert!((*a - *b).norm_sqr() < 1e-18, "len = {len}");
            }
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip(len in 1usize..96, ref signal in proptest::collection::vec(-1000.0f64..1000.0, 192)) {
            let input: Vec<Complex64> = signal
                .chunks_exact(2)
                .take(len)
                .map(|c| Complex64::new(c[0], c[1]))
                .collect();
            let fft = MixedRadixFft::<f64>::new(len).unwrap();
            let back = fft.inverse_vec(&fft.forward_vec(&input));
            for (a, b) in input.iter().zip(back.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-7 * len as f64);
                prop_assert!((a.im - b.im).abs() < 1e-7 * len as f64);
            }
        }

        #[test]
        fn prop_sequential_source_matches_indexed(len in 1usize..128, seed in 0u64..1000) {
            let input: Vec<Complex64> = (0..len)
                .map(|i| Complex64::new(libm::sin(i as f64 + seed as f64), libm::cos(i as f64 * 0.3)))
                .collect();
            let fft = MixedRadixFft::<f64>::new(len).unwrap();
            let a = fft.forward_vec(&input);
            let b = fft.forward_vec(Source::sequential(input.iter().copied()));
            prop_assert_eq!(a, b);
        }
    }
}
