//! Mixed-radix digit reversal.
//!
//! Before the first butterfly pass the input is reordered so that every
//! innermost DFT reads a contiguous block of `radices.last()` samples. Source
//! position `d0 + r0·d1 + r0·r1·d2 + … + stride·j` lands at
//! `block·(… + r_{L-2}·d_{L-3} + d_{L-2}) + j`: the leading digits are written
//! in reverse and the innermost digit `j` stays in place inside its block.
//!
//! Two realizations produce the same permutation. [`DigitReversal::indexed`]
//! needs positional reads and copies one block per odometer step.
//! [`DigitReversal::sequential`] consumes the source exactly once, in order,
//! and places one sample per step.

use alloc::vec;
use alloc::vec::Vec;

/// Place-value plan for one radix list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitReversal {
    radices: Vec<usize>,
    place: Vec<usize>,
    block: usize,
    stride: usize,
}

impl DigitReversal {
    /// `radices` must multiply to the transform length; an empty list plans
    /// the empty transform.
    pub fn new(radices: &[usize]) -> Self {
        let (block, digits) = match radices.split_last() {
            Some((&last, rest)) => (last, rest),
            None => (0, &[][..]),
        };
        let len: usize = radices.iter().product();
        let stride = if block == 0 { 0 } else { len / block };

        // place[k] is the product of the digit radices strictly right of k.
        let mut place = vec![1usize; digits.len()];
        for k in (0..digits.len().saturating_sub(1)).rev() {
            place[k] = place[k + 1] * digits[k + 1];
        }

        Self {
            radices: digits.to_vec(),
            place,
            block,
            stride,
        }
    }

    /// Total number of samples permuted.
    #[inline]
    pub fn len(&self) -> usize {
        self.block * self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the contiguous destination blocks (the innermost radix).
    #[inline]
    pub fn block(&self) -> usize {
        self.block
    }

    /// Distance in the source between consecutive members of one block.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    fn odometer(&self) -> Odometer<'_> {
        Odometer {
            radices: &self.radices,
            place: &self.place,
            digits: vec![0; self.radices.len()],
            offset: 0,
        }
    }

    /// Permute from a positionally readable source, one block per step.
    ///
    /// `src` and `dst` must both hold [`len`](Self::len) elements.
    pub fn indexed<S, D, F>(&self, src: &[S], dst: &mut [D], mut map: F)
    where
        S: Copy,
        F: FnMut(S) -> D,
    {
        debug_assert!(src.len() >= self.len());
        debug_assert!(dst.len() >= self.len());
        let mut odometer = self.odometer();
        for i in 0..self.stride {
            let base = self.block * odometer.offset();
            for (j, slot) in dst[base..base + self.block].iter_mut().enumerate() {
                *slot = map(src[i + self.stride * j]);
            }
            odometer.advance();
        }
    }

    /// Permute from a single forward pass over `src`, one sample per step.
    ///
    /// Reads at most [`len`](Self::len) items. If `src` ends early the
    /// remaining destination slots are left untouched.
    pub fn sequential<I, D, F>(&self, src: I, dst: &mut [D], mut map: F)
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> D,
    {
        debug_assert!(dst.len() >= self.len());
        let mut src = src.into_iter();
        let mut odometer = self.odometer();
        for i in 0..self.block {
            for _ in 0..self.stride {
                let Some(value) = src.next() else {
                    return;
                };
                dst[self.block * odometer.offset() + i] = map(value);
                odometer.advance();
            }
        }
    }
}

/// Mixed-radix counter over the leading digits, least significant first,
/// that keeps its weighted position up to date on every step.
struct Odometer<'a> {
    radices: &'a [usize],
    place: &'a [usize],
    digits: Vec<usize>,
    offset: usize,
}

impl Odometer<'_> {
    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    /// Step by one, carrying into higher digits. Wraps to zero after
    /// `product(radices)` steps.
    #[inline]
    fn advance(&mut self) {
        for k in 0..self.digits.len() {
            self.digits[k] += 1;
            self.offset += self.place[k];
            if self.digits[k] < self.radices[k] {
                return;
            }
            self.offset -= self.radices[k] * self.place[k];
            self.digits[k] = 0;
        }
    }
}
