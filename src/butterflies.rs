//! Butterfly passes of the mixed-radix cascade.
//!
//! After digit reversal the buffer holds `N / r_last` contiguous groups, each
//! the input of one innermost DFT. Every pass fuses `radix` neighbouring
//! sub-transforms of length `remainder` into one of length
//! `radix · remainder`, in place. Within a window of that length, output
//! `i + q·remainder` is
//!
//! ```text
//! Σ_k x[i + k·remainder] · W^(k·(i + q·remainder)·stride),  W = exp(-2πi/N)
//! ```
//!
//! where `stride · radix · remainder = N`. Radices 2 to 5 have closed forms;
//! anything else takes the O(radix²) generic path.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::FftDirection;
use crate::num::{Complex, Float};
use crate::twiddle::TwiddleTable;

/// One stage of the cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pass {
    /// Size of the local DFT fused by this pass.
    pub radix: usize,
    /// Length of each sub-transform being combined, and the spacing between
    /// the `radix` samples of one butterfly.
    pub remainder: usize,
    /// Twiddle table step: product of the radices discovered before this one.
    pub stride: usize,
}

impl Pass {
    /// Length of the windows this pass operates on.
    #[inline]
    pub fn window(&self) -> usize {
        self.radix * self.remainder
    }
}

/// Build the pass list for `radices` (product `n`) in execution order: the
/// radix discovered last runs first.
pub fn schedule(radices: &[usize], n: usize) -> Vec<Pass> {
    let mut passes = Vec::with_capacity(radices.len());
    let mut remainder = n;
    let mut stride = 1usize;
    for &radix in radices {
        remainder /= radix;
        passes.push(Pass {
            radix,
            remainder,
            stride,
        });
        stride *= radix;
    }
    passes.reverse();
    passes
}

/// Run every pass over the digit-reversed `buffer`.
pub fn run_passes<T: Float>(
    buffer: &mut [Complex<T>],
    passes: &[Pass],
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
) {
    let generic_len = passes
        .iter()
        .filter(|p| p.radix > 5)
        .map(|p| p.radix)
        .max()
        .unwrap_or(0);
    let mut scratch = vec![Complex::zero(); generic_len];

    for pass in passes {
        #[cfg(feature = "verbose-logging")]
        log::trace!(
            "butterfly pass: radix={} remainder={} stride={} {:?}",
            pass.radix,
            pass.remainder,
            pass.stride,
            direction
        );
        for window in buffer.chunks_exact_mut(pass.window()) {
            match pass.radix {
                1 => {}
                2 => butterfly2(window, pass, twiddles, direction),
                3 => butterfly3(window, pass, twiddles, direction),
                4 => butterfly4(window, pass, twiddles, direction),
                5 => butterfly5(window, pass, twiddles, direction),
                _ => butterfly_generic(window, pass, twiddles, direction, &mut scratch),
            }
        }
    }
}

#[inline]
fn butterfly2<T: Float>(
    window: &mut [Complex<T>],
    pass: &Pass,
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
) {
    let m = pass.remainder;
    let (lo, hi) = window.split_at_mut(m);
    for (i, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
        let t = *b * twiddles.get(i * pass.stride, direction);
        *b = *a - t;
        *a += t;
    }
}

#[inline]
fn butterfly3<T: Float>(
    window: &mut [Complex<T>],
    pass: &Pass,
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
) {
    let m = pass.remainder;
    let s = pass.stride;
    // Imaginary part of the one-third turn: ∓√3/2.
    let sin3 = twiddles.get(m * s, direction).im;
    let half = T::half();
    for i in 0..m {
        let x0 = window[i];
        let t1 = window[m + i] * twiddles.get(i * s, direction);
        let t2 = window[2 * m + i] * twiddles.get(2 * i * s, direction);
        let sum = t1 + t2;
        let rot = (t1 - t2).scale(sin3).mul_i();
        let mid = x0 - sum.scale(half);
        window[i] = x0 + sum;
        window[m + i] = mid + rot;
        window[2 * m + i] = mid - rot;
    }
}

#[inline]
fn butterfly4<T: Float>(
    window: &mut [Complex<T>],
    pass: &Pass,
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
) {
    let m = pass.remainder;
    let s = pass.stride;
    for i in 0..m {
        let x0 = window[i];
        let t0 = window[m + i] * twiddles.get(i * s, direction);
        let t1 = window[2 * m + i] * twiddles.get(2 * i * s, direction);
        let t2 = window[3 * m + i] * twiddles.get(3 * i * s, direction);
        let even_sum = x0 + t1;
        let even_diff = x0 - t1;
        let odd_sum = t0 + t2;
        // Quarter-turn twiddle: -i forward, +i inverse.
        let odd_diff = match direction {
            FftDirection::Forward => (t0 - t2).mul_neg_i(),
            FftDirection::Inverse => (t0 - t2).mul_i(),
        };
        window[i] = even_sum + odd_sum;
        window[m + i] = even_diff + odd_diff;
        window[2 * m + i] = even_sum - odd_sum;
        window[3 * m + i] = even_diff - odd_diff;
    }
}

#[inline]
fn butterfly5<T: Float>(
    window: &mut [Complex<T>],
    pass: &Pass,
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
) {
    let m = pass.remainder;
    let s = pass.stride;
    let w1 = twiddles.get(m * s, direction);
    let w2 = twiddles.get(2 * m * s, direction);
    for i in 0..m {
        let x0 = window[i];
        let a = window[m + i] * twiddles.get(i * s, direction);
        let b = window[2 * m + i] * twiddles.get(2 * i * s, direction);
        let c = window[3 * m + i] * twiddles.get(3 * i * s, direction);
        let d = window[4 * m + i] * twiddles.get(4 * i * s, direction);

        // W^4 = conj(W) and W^3 = conj(W^2), so the outputs pair up into
        // symmetric real parts and antisymmetric imaginary parts.
        let ad_sum = a + d;
        let ad_diff = a - d;
        let bc_sum = b + c;
        let bc_diff = b - c;

        window[i] = x0 + ad_sum + bc_sum;

        let sym1 = x0 + ad_sum.scale(w1.re) + bc_sum.scale(w2.re);
        let anti1 = (ad_diff.scale(w1.im) + bc_diff.scale(w2.im)).mul_i();
        window[m + i] = sym1 + anti1;
        window[4 * m + i] = sym1 - anti1;

        let sym2 = x0 + ad_sum.scale(w2.re) + bc_sum.scale(w1.re);
        let anti2 = (ad_diff.scale(w2.im) - bc_diff.scale(w1.im)).mul_i();
        window[2 * m + i] = sym2 + anti2;
        window[3 * m + i] = sym2 - anti2;
    }
}

/// Direct `radix`-point DFT for each of the `remainder` butterflies in the
/// window. `scratch` holds at least `radix` samples.
fn butterfly_generic<T: Float>(
    window: &mut [Complex<T>],
    pass: &Pass,
    twiddles: &TwiddleTable<T>,
    direction: FftDirection,
    scratch: &mut [Complex<T>],
) {
    let n = twiddles.len();
    let r = pass.radix;
    let m = pass.remainder;
    let gathered = &mut scratch[..r];
    for i in 0..m {
        for (k, slot) in gathered.iter_mut().enumerate() {
            *slot = window[i + k * m];
        }
        for q in 0..r {
            let j = i + q * m;
            let step = (j * pass.stride) % n;
            let mut index = 0usize;
            let mut acc = Complex::zero();
            for &x in gathered.iter() {
                acc += x * twiddles.get(index, direction);
                index += step;
                if index >= n {
                    index -= n;
                }
            }
            window[j] = acc;
        }
    }
}
