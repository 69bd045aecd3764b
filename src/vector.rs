use std::{array, fmt};

use crate::complex::Complex;
use crate::traits::Zero;

mod ops;

/// A fixed-size vector of [`Complex`] numbers: an element of *C^n*.
pub type CVector<T, const N: usize> = Vector<Complex<T>, N>;

/// An `N`-element vector storing elements of type `T`.
///
/// The length is a const generic parameter, so it is fixed at construction and can never change;
/// operations on vectors of different lengths are rejected at compile time rather than checked at
/// runtime.
///
/// # Construction
///
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - The [`Default`] implementation initializes each element with its default value.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this.
///
/// # Operations
///
/// Element-wise addition and subtraction ([`Add`]/[`Sub`]), the additive inverse ([`Neg`]), and
/// scalar multiplication ([`Mul`], with the scalar on either side for complex elements) are
/// provided as operator impls. All of them return new vectors of the same length.
///
/// ```
/// # use qc_linalg::*;
/// let a: CVector<i32, 2> = [complex(2, -3), complex(-5, 3)].into();
/// let b: CVector<i32, 2> = [complex(-2, 3), complex(5, -3)].into();
/// assert_eq!(a + b, CVector::ZERO);
/// assert_eq!(a + (-a), CVector::ZERO);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Add`]: std::ops::Add
/// [`Sub`]: std::ops::Sub
/// [`Neg`]: std::ops::Neg
/// [`Mul`]: std::ops::Mul
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let v = Vector::<_, 3>::splat(complex(1, 0));
    /// assert_eq!(v, [complex(1, 0); 3]);
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let v: CVector<i32, 2> = [complex(1, -2), complex(0, 3)].into();
    /// assert_eq!(v.map(Complex::conjugate), [complex(1, 2), complex(0, -3)]);
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(DebugViaDisplay))
            .finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::complex::{complex, Complexf};

    use super::*;

    #[test]
    fn access() {
        let cv: CVector<i32, 3> = [complex(2, 3), complex(1, -1), complex(-1, 0)].into();

        assert_eq!(cv[0], complex(2, 3));
        assert_eq!(cv[1], complex(1, -1));
        assert_eq!(cv[2], complex(-1, 0));
        assert_eq!(cv.as_slice().len(), 3);
    }

    #[test]
    fn add() {
        let a: CVector<i32, 2> = [complex(2, -3), complex(-5, 3)].into();
        let b: CVector<i32, 2> = [complex(-2, 3), complex(5, -3)].into();

        assert_eq!(a + b, CVector::ZERO);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn scale() {
        let c = complex(3, 2);
        let a: CVector<i32, 4> =
            [complex(6, 3), complex(0, 0), complex(5, 1), complex(4, 0)].into();

        let expected = [complex(12, 21), complex(0, 0), complex(13, 13), complex(12, 8)];
        assert_eq!(c * a, expected);
        assert_eq!(a * c, expected);
    }

    #[test]
    fn scale_compatibility() {
        // c1 * (c2 * a) == (c1 * c2) * a
        let c1 = complex(0.5_f32, -2.0);
        let c2 = complex(-1.5_f32, 3.0);
        let a: CVector<f32, 3> =
            [complex(1.0, 2.0), complex(-0.25, 0.0), complex(0.0, -4.0)].into();

        assert_approx_eq!(c1 * (c2 * a), (c1 * c2) * a).abs(1e-6);
    }

    #[test]
    fn inverse() {
        let a: CVector<i32, 4> =
            [complex(6, 3), complex(0, 0), complex(5, 1), complex(4, 0)].into();

        let neg = -a;
        for i in 0..4 {
            assert_eq!(neg[i], complex(-a[i].re, -a[i].im));
        }
        assert_eq!(a + neg, CVector::ZERO);
        assert_eq!(-(-a), a);
    }

    #[test]
    fn sub() {
        let a: CVector<i32, 2> = [complex(4, 2), complex(-1, 1)].into();
        let b: CVector<i32, 2> = [complex(1, 1), complex(1, 1)].into();

        assert_eq!(a - b, [complex(3, 1), complex(-2, 0)]);
        assert_eq!(a - a, CVector::ZERO);
    }

    #[test]
    fn assign_ops() {
        let mut v: CVector<i32, 2> = [complex(1, 1), complex(2, 2)].into();
        v += [complex(1, 0), complex(0, 1)].into();
        assert_eq!(v, [complex(2, 1), complex(2, 3)]);
        v -= [complex(2, 1), complex(2, 3)].into();
        assert_eq!(v, CVector::ZERO);
    }

    #[test]
    fn fmt() {
        let v: CVector<i32, 2> = [complex(0, 1), complex(2, -3)].into();
        assert_eq!(format!("{v}"), "[0+1i, 2-3i]");

        let f: Vector<f32, 2> = [0.0, 1.0].into();
        assert_eq!(format!("{f:?}"), "[0.0, 1.0]");
    }

    #[test]
    fn approx() {
        let a: Vector<f32, 2> = [1.0, 2.0].into();
        let b: Vector<f32, 2> = [1.0 + 5e-7, 2.0 - 5e-7].into();
        assert_approx_eq!(a, b).abs(1e-6);
    }

    #[test]
    fn zero_vector_is_fixed_point_of_scaling() {
        let z = CVector::<f32, 3>::ZERO;
        assert_eq!(Complexf::I * z, z);
    }
}
