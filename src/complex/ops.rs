//! Implementations of `std::ops` and the numeric element traits.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::approx::ApproxEq;
use crate::traits::{Number, One, Zero};

use super::Complex;

// More general impl than what the derive generates.
impl<T, U> PartialEq<Complex<U>> for Complex<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Complex<U>) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl<T: Eq> Eq for Complex<T> {}

impl<T> ApproxEq for Complex<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.re.abs_diff_eq(&other.re, abs_tolerance)
            && self.im.abs_diff_eq(&other.im, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.re.rel_diff_eq(&other.re, rel_tolerance)
            && self.im.rel_diff_eq(&other.im, rel_tolerance)
    }
}

// `Zero`/`One` make `Complex<T>` satisfy `Number` whenever `T` does, so complex values can be
// used as elements of `Vector` and `Matrix` like any other numeric type.
impl<T: Zero> Zero for Complex<T> {
    const ZERO: Self = Complex {
        re: T::ZERO,
        im: T::ZERO,
    };
}

impl<T: Zero + One> One for Complex<T> {
    const ONE: Self = Complex {
        re: T::ONE,
        im: T::ZERO,
    };
}

/// Component-wise additive inverse.
impl<T> Neg for Complex<T>
where
    T: Neg,
{
    type Output = Complex<T::Output>;

    fn neg(self) -> Self::Output {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

/// Component-wise addition.
impl<T> Add for Complex<T>
where
    T: Add,
{
    type Output = Complex<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

/// Component-wise addition.
impl<T> AddAssign for Complex<T>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

/// Component-wise subtraction.
impl<T> Sub for Complex<T>
where
    T: Sub,
{
    type Output = Complex<T::Output>;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

/// Component-wise subtraction.
impl<T> SubAssign for Complex<T>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

/// Complex multiplication: `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
impl<T> Mul for Complex<T>
where
    T: Number,
{
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T> MulAssign for Complex<T>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Complex division via the conjugate identity: `a / b = a · conj(b) / |b|²`.
///
/// Dividing by a complex number with zero modulus follows the element type's division-by-zero
/// behavior: floating-point elements produce NaN or infinite components, integer elements panic.
///
/// ```
/// # use qc_linalg::*;
/// assert_eq!(complex(-2, 1) / complex(1, 2), complex(0, 1));
///
/// let q = complex(1.0_f32, 1.0) / Complexf::ZERO;
/// assert!(q.re.is_nan() && q.im.is_nan());
/// ```
impl<T> Div for Complex<T>
where
    T: Number,
{
    type Output = Complex<T>;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        }
    }
}

impl<T> DivAssign for Complex<T>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::complex;

    #[test]
    fn assign_ops() {
        let mut c = complex(1, 2);
        c += complex(3, -1);
        assert_eq!(c, complex(4, 1));
        c -= complex(4, 0);
        assert_eq!(c, complex(0, 1));
        c *= complex(0, 1);
        assert_eq!(c, complex(-1, 0));
        c /= complex(0, 1);
        assert_eq!(c, complex(0, 1));
    }
}
