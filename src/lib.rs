//! # mixfft - mixed-radix FFT for any length
//!
//! Discrete Fourier Transform and its inverse for complex sequences of
//! arbitrary length, using an iterative mixed-radix Cooley–Tukey cascade.
//!
//! ## How it works
//!
//! - The length `N` is factored into radices, small ones first (4, 2, 3, 5, 7,
//!   ...); a large prime factor is kept whole as the last radix.
//! - The `N` roots of unity are tabulated once per plan.
//! - Each call digit-reverses the input into a working buffer and runs one
//!   in-place butterfly pass per radix. Radices 2, 3, 4 and 5 have closed-form
//!   kernels; everything else uses a direct O(radix²) DFT.
//! - The inverse conjugates the twiddles and scales by `1/N`.
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`FftError`]
//! - `verbose-logging`: plan and pass diagnostics through the `log` facade
//! - `internal-tests`: property tests with `proptest`
//!
//! ## Example
//!
//! ```
//! use mixfft::{Complex64, MixedRadixFft};
//!
//! let fft = MixedRadixFft::<f64>::new(6).unwrap();
//! let input: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let spectrum = fft.forward_vec(&input);
//! let back = fft.inverse_vec(&spectrum);
//! assert!((back[3].re - 3.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Transform plans, directions, errors and the plan cache.
pub mod fft;

/// Complex sample type and the real-number capability trait.
pub mod num;

/// Factoring a length into radices.
pub mod factor;

/// Precomputed roots of unity.
pub mod twiddle;

/// Mixed-radix digit-reversal permutation.
pub mod permute;

/// Per-radix butterfly passes.
pub mod butterflies;

/// Input and output access patterns.
pub mod access;

/// Plan-and-discard convenience functions.
pub mod oneshot;

pub use access::{Sink, Source};
pub use fft::{FftDirection, FftError, FftPlanner, MixedRadixFft};
pub use num::{Complex, Complex32, Complex64, Float, ToComplex};
pub use oneshot::{
    fft, fft_as, fft_iter, fft_iter_as, fft_n, fft_n_as, ifft, ifft_as, ifft_iter, ifft_iter_as,
    ifft_n, ifft_n_as,
};
