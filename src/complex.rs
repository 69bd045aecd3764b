use std::fmt;
use std::ops::Neg;

use crate::traits::{Number, One, Sqrt, ToFloat, Trig, Zero};

mod ops;

/// A complex number with [`f32`] components.
pub type Complexf = Complex<f32>;

/// A complex number: a real and an imaginary component of element type `T`.
///
/// # Construction
///
/// - The freestanding [`complex`] function directly creates a value from its two components.
/// - [`Complex::new`] does the same as an associated function.
/// - [`Complex::from_polar`] creates a value from polar coordinates.
/// - [`Complex::ZERO`], [`Complex::ONE`] and [`Complex::I`] (the imaginary unit) are provided as
///   constants.
///
/// # Arithmetic
///
/// The standard field operations are available through the [`Add`], [`Sub`], [`Mul`], [`Div`] and
/// [`Neg`] operator impls (plus their `*Assign` counterparts). All of them are component- or
/// formula-wise pure functions that return new values; operands are never mutated.
///
/// ```
/// # use qc_linalg::*;
/// assert_eq!(complex(2, 3) + complex(2, 3), complex(4, 6));
/// assert_eq!(Complexf::I * Complexf::I, -Complexf::ONE); // i² = -1
/// ```
///
/// [`Add`]: std::ops::Add
/// [`Sub`]: std::ops::Sub
/// [`Mul`]: std::ops::Mul
/// [`Div`]: std::ops::Div
/// [`Neg`]: std::ops::Neg
#[derive(Clone, Copy, Debug, Hash)]
#[repr(C)]
pub struct Complex<T> {
    /// The real component.
    pub re: T,
    /// The imaginary component.
    pub im: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> Complex<T> {
    /// The additive identity, `0 + 0i`.
    pub const ZERO: Self = Complex {
        re: T::ZERO,
        im: T::ZERO,
    };
}

impl<T: Zero + One> Complex<T> {
    /// The multiplicative identity, `1 + 0i`.
    pub const ONE: Self = Complex {
        re: T::ONE,
        im: T::ZERO,
    };

    /// The imaginary unit, `0 + 1i`.
    pub const I: Self = Complex {
        re: T::ZERO,
        im: T::ONE,
    };
}

impl<T> Complex<T> {
    /// Creates a complex number from its real and imaginary components.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Returns the complex conjugate, negating the imaginary component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// assert_eq!(complex(1, -1).conjugate(), complex(1, 1));
    /// ```
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Returns the squared modulus `re² + im²`, exact in the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// assert_eq!(complex(3, 4).modulus2(), 25);
    /// ```
    pub fn modulus2(self) -> T
    where
        T: Number,
    {
        self.re * self.re + self.im * self.im
    }

    /// Returns the modulus (Euclidean magnitude) `sqrt(re² + im²)`.
    ///
    /// The result is computed in [`f32`] even for integer element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// assert_eq!(complex(3, 4).modulus(), 5.0);
    /// assert_approx_eq!(complex(1, -1).modulus(), 2.0_f32.sqrt());
    /// ```
    #[doc(alias = "magnitude", alias = "norm")]
    pub fn modulus(self) -> f32
    where
        T: Number + ToFloat,
    {
        self.modulus2().to_f32().sqrt()
    }

    /// Returns the phase (argument): the angle in radians relative to the positive real axis.
    ///
    /// Computed with the two-argument arctangent, so the result is quadrant-aware and lies in
    /// the range (−π, π]. Like [`modulus`][Self::modulus], the result is an [`f32`] even for
    /// integer element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// assert_approx_eq!(complex(1, 1).phase(), PI / 4.0);
    /// assert_approx_eq!(complex(-1, 0).phase(), PI);
    /// ```
    #[doc(alias = "argument", alias = "arg")]
    pub fn phase(self) -> f32
    where
        T: ToFloat,
    {
        self.im.to_f32().atan2(self.re.to_f32())
    }

    /// Creates a complex number from its polar representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// let c = Complexf::from_polar(2.0_f32.sqrt(), PI / 4.0);
    /// assert_approx_eq!(c, complex(1.0, 1.0));
    /// ```
    pub fn from_polar(modulus: T, phase: T) -> Self
    where
        T: Number + Trig,
    {
        Self {
            re: modulus * phase.cos(),
            im: modulus * phase.sin(),
        }
    }

    /// Converts this complex number to its polar representation `(modulus, phase)`.
    ///
    /// Unlike [`modulus`][Self::modulus] and [`phase`][Self::phase], this computes both parts in
    /// the element type's own precision, so it is only available for floating-point elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// let (modulus, phase) = complex(1.0_f32, 1.0).to_polar();
    /// assert_approx_eq!(modulus, 2.0_f32.sqrt());
    /// assert_approx_eq!(phase, PI / 4.0);
    /// ```
    pub fn to_polar(self) -> (T, T)
    where
        T: Number + Sqrt + Trig,
    {
        (self.modulus2().sqrt(), self.im.atan2(self.re))
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}

/// Constructs a [`Complex`] number from its real and imaginary components.
#[inline]
pub const fn complex<T>(re: T, im: T) -> Complex<T> {
    Complex { re, im }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn add() {
        let a = complex(2, 3);
        let b = complex(2, 3);
        assert_eq!(a + b, complex(4, 6));

        let c = complex(-2.3_f32, 3.4);
        let d = complex(2.3_f32, -3.4);
        assert_approx_eq!(c + d, Complexf::ZERO).abs(1e-6);
    }

    #[test]
    fn add_laws() {
        let a = complex(0.5_f32, -1.25);
        let b = complex(3.75_f32, 2.5);
        let c = complex(-2.0_f32, 0.125);

        assert_eq!(a + b, b + a);
        assert_approx_eq!((a + b) + c, a + (b + c)).abs(1e-6);
    }

    #[test]
    fn sub() {
        assert_eq!(complex(2, 3) - complex(2, 3), Complex::ZERO);

        let c = complex(-2.3_f32, 3.4);
        let d = complex(2.3_f32, -3.4);
        assert_approx_eq!(c - d, complex(-4.6, 6.8)).abs(1e-6);
    }

    #[test]
    fn mul() {
        // i² = -1
        assert_eq!(complex(0, 1) * complex(0, 1), complex(-1, 0));

        assert_eq!(complex(1, 2) * complex(3, 4), complex(-5, 10));
    }

    #[test]
    fn div() {
        // (-2 + i) / (1 + 2i) = i, exactly representable in integers.
        assert_eq!(complex(-2, 1) / complex(1, 2), complex(0, 1));

        // Dividing by the multiplicative identity changes nothing.
        let a = complex(3.0_f32, -7.0);
        assert_eq!(a / Complexf::ONE, a);

        // z / z = 1 for non-zero z.
        assert_approx_eq!(a / a, Complexf::ONE).abs(1e-6);
    }

    #[test]
    fn div_by_zero() {
        let q = complex(1.0_f32, 1.0) / Complexf::ZERO;
        assert!(q.re.is_nan());
        assert!(q.im.is_nan());
    }

    #[test]
    fn modulus() {
        assert_approx_eq!(complex(1, -1).modulus(), 2.0_f32.sqrt()).abs(1e-6);
        assert_eq!(complex(3, 4).modulus2(), 25);
        assert_eq!(Complex::<i32>::ZERO.modulus(), 0.0);
    }

    #[test]
    fn conjugate() {
        let c = complex(1, -1);
        assert_eq!(c.conjugate(), complex(1, 1));
        assert_eq!(c.conjugate().conjugate(), c);

        // a + conj(a) is purely real, and conjugation preserves the modulus.
        let a = complex(2.5_f32, -4.5);
        assert_eq!((a + a.conjugate()).im, 0.0);
        assert_approx_eq!(a.modulus(), a.conjugate().modulus()).abs(1e-6);
    }

    #[test]
    fn phase() {
        assert_approx_eq!(complex(1, 1).phase(), PI / 4.0).abs(1e-6);

        // Quadrant-aware: results cover (-π, π].
        assert_approx_eq!(complex(-1, 1).phase(), 3.0 * PI / 4.0).abs(1e-6);
        assert_approx_eq!(complex(-1, -1).phase(), -3.0 * PI / 4.0).abs(1e-6);
        assert_approx_eq!(complex(0, -1).phase(), -PI / 2.0).abs(1e-6);
        assert_approx_eq!(complex(-1, 0).phase(), PI).abs(1e-6);

        for c in [complex(3, 1), complex(-2, 7), complex(-4, -4), complex(5, -9)] {
            let phase = c.phase();
            assert!(phase > -PI && phase <= PI);
        }
    }

    #[test]
    fn polar_round_trip() {
        let c = complex(1.0_f32, 1.0);
        let (modulus, phase) = c.to_polar();
        assert_approx_eq!(modulus, 2.0_f32.sqrt()).abs(1e-6);
        assert_approx_eq!(phase, PI / 4.0).abs(1e-6);
        assert_approx_eq!(Complexf::from_polar(modulus, phase), c).abs(1e-6);
    }

    #[test]
    fn constants() {
        assert_eq!(Complexf::I * Complexf::I, -Complexf::ONE);
        assert_eq!(Complexf::ONE + Complexf::ZERO, Complexf::ONE);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", complex(2, 3)), "2+3i");
        assert_eq!(format!("{}", complex(2, -3)), "2-3i");
        assert_eq!(format!("{}", complex(0.5, 1.5)), "0.5+1.5i");
    }
}
