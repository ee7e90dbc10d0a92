//! Precomputed roots of unity shared by every butterfly pass.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::fft::FftDirection;
use crate::num::{Complex, Float};

/// `twiddle[k] = exp(-2πi·k/n)` for `k` in `0..n`.
///
/// The table stores forward-direction factors only; inverse lookups return the
/// conjugate.
#[derive(Clone, Debug, PartialEq)]
pub struct TwiddleTable<T: Float> {
    table: Vec<Complex<T>>,
}

impl<T: Float> TwiddleTable<T> {
    /// Angles are evaluated in `f64` and rounded once into `T`.
    pub fn new(n: usize) -> Self {
        let step = -2.0 * PI / n as f64;
        let table = (0..n)
            .map(|k| Complex::<f64>::expi(step * k as f64).cast())
            .collect();
        Self { table }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Factor at `index` for the given direction. `index` must be below
    /// [`len`](Self::len).
    #[inline(always)]
    pub fn get(&self, index: usize, direction: FftDirection) -> Complex<T> {
        let w = self.table[index];
        match direction {
            FftDirection::Forward => w,
            FftDirection::Inverse => w.conj(),
        }
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.table
    }
}
