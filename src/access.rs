//! How a transform reads its input and writes its output.
//!
//! The access pattern is fixed where the caller binds the data, as one of a
//! closed set of variants. A [`Source`] that supports positional reads goes
//! through the block-copying permuter; a single-pass stream goes through the
//! one-sample-at-a-time permuter. A [`Sink`] either overwrites a slice or
//! appends to a vector.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Input samples of element type `S`.
pub enum Source<'a, S> {
    /// Random access: any position may be read, in any order.
    Indexed(&'a [S]),
    /// One forward pass; each item is read exactly once.
    Sequential(Box<dyn Iterator<Item = S> + 'a>),
}

impl<'a, S> Source<'a, S> {
    /// Bind a single-pass stream.
    pub fn sequential<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
    {
        Source::Sequential(Box::new(iter.into_iter()))
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, Source::Indexed(_))
    }
}

impl<'a, S> From<&'a [S]> for Source<'a, S> {
    fn from(samples: &'a [S]) -> Self {
        Source::Indexed(samples)
    }
}

impl<'a, S> From<&'a mut [S]> for Source<'a, S> {
    fn from(samples: &'a mut [S]) -> Self {
        Source::Indexed(samples)
    }
}

impl<'a, S, const N: usize> From<&'a [S; N]> for Source<'a, S> {
    fn from(samples: &'a [S; N]) -> Self {
        Source::Indexed(samples.as_slice())
    }
}

impl<'a, S> From<&'a Vec<S>> for Source<'a, S> {
    fn from(samples: &'a Vec<S>) -> Self {
        Source::Indexed(samples.as_slice())
    }
}

/// Destination for transform output.
pub enum Sink<'a, T: Float> {
    /// Overwrite positions `0..N` of an existing slice, which must be at
    /// least `N` long.
    Overwrite(&'a mut [Complex<T>]),
    /// Push `N` samples onto the end of a vector.
    Append(&'a mut Vec<Complex<T>>),
}

impl<T: Float> Sink<'_, T> {
    /// Hand over a finished working buffer.
    pub(crate) fn write(self, buffer: Vec<Complex<T>>) {
        match self {
            Sink::Overwrite(out) => out[..buffer.len()].copy_from_slice(&buffer),
            Sink::Append(out) => {
                if out.is_empty() {
                    *out = buffer;
                } else {
                    out.extend(buffer);
                }
            }
        }
    }
}

impl<'a, T: Float> From<&'a mut [Complex<T>]> for Sink<'a, T> {
    fn from(out: &'a mut [Complex<T>]) -> Self {
        Sink::Overwrite(out)
    }
}

impl<'a, T: Float, const N: usize> From<&'a mut [Complex<T>; N]> for Sink<'a, T> {
    fn from(out: &'a mut [Complex<T>; N]) -> Self {
        Sink::Overwrite(out.as_mut_slice())
    }
}

impl<'a, T: Float> From<&'a mut Vec<Complex<T>>> for Sink<'a, T> {
    fn from(out: &'a mut Vec<Complex<T>>) -> Self {
        Sink::Append(out)
    }
}
