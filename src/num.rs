//! Numeric building blocks: the [`Float`] capability trait and the
//! [`Complex`] sample type every transform operates on.

/// Real element type of a [`Complex`] sample.
///
/// Only what the butterflies need: field arithmetic, a zero and one,
/// lossless-enough conversion through `f64`, and `sin`/`cos` for the twiddle
/// table. Trigonometry goes through `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn cos(self) -> Self;
    fn sin(self) -> Self;

    #[inline(always)]
    fn half() -> Self {
        Self::from_f64(0.5)
    }
}

impl Float for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
}

impl Float for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    #[inline(always)]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `cos(theta) + i·sin(theta)`
    pub fn expi(theta: T) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Multiply both parts by a real factor.
    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self::new(self.re * k, self.im * k)
    }

    /// Multiply by `i` (a quarter turn counter-clockwise).
    #[inline(always)]
    pub fn mul_i(self) -> Self {
        Self::new(-self.im, self.re)
    }

    /// Multiply by `-i` (a quarter turn clockwise).
    #[inline(always)]
    pub fn mul_neg_i(self) -> Self {
        Self::new(self.im, -self.re)
    }

    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Convert to a sample over another real type, going through `f64`.
    #[inline(always)]
    pub fn cast<U: Float>(self) -> Complex<U> {
        Complex::new(U::from_f64(self.re.to_f64()), U::from_f64(self.im.to_f64()))
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

/// Conversion of an input element into the working sample type of a
/// transform. Lets callers run an `f32` signal through an `f64` transform.
pub trait ToComplex<T: Float> {
    fn to_complex(self) -> Complex<T>;
}

impl<U: Float, T: Float> ToComplex<T> for Complex<U> {
    #[inline(always)]
    fn to_complex(self) -> Complex<T> {
        self.cast()
    }
}

impl<T: Float, U: Float> ToComplex<T> for &Complex<U> {
    #[inline(always)]
    fn to_complex(self) -> Complex<T> {
        self.cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a * b;
        assert!((c.re - 11.0).abs() < 1e-12);
        assert!((c.im - (-2.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n, Complex64::new(-1.0, 2.0));
        assert_eq!(a.conj(), Complex64::new(1.0, 2.0));
        assert_eq!(a.scale(2.0), Complex64::new(2.0, -4.0));
    }

    #[test]
    fn test_quarter_turns() {
        let a = Complex64::new(3.0, 5.0);
        let i = Complex64::new(0.0, 1.0);
        assert_eq!(a.mul_i(), a * i);
        assert_eq!(a.mul_neg_i(), a * -i);
    }

    #[test]
    fn test_expi_unit_circle() {
        let w = Complex64::expi(core::f64::consts::FRAC_PI_2);
        assert!(w.re.abs() < 1e-12);
        assert!((w.im - 1.0).abs() < 1e-12);
        assert!((w.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cast_widens() {
        let a = Complex32::new(0.25, -1.5);
        let b: Complex64 = a.to_complex();
        assert_eq!(b, Complex64::new(0.25, -1.5));
        let c: Complex32 = (&b).to_complex();
        assert_eq!(c, a);
    }
}
