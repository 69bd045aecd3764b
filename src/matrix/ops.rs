//! Implementations of `std::ops`.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::approx::ApproxEq;
use crate::complex::Complex;
use crate::traits::Number;

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Cell-wise additive inverse: every cell is negated in both components.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Cell-wise addition.
impl<T, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Add,
{
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut rhs = rhs.0.into_iter().flatten();
        self.map(|lhs| lhs + rhs.next().unwrap())
    }
}

/// Cell-wise addition.
impl<T, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.0
            .iter_mut()
            .flatten()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Cell-wise subtraction.
impl<T, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Sub,
{
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut rhs = rhs.0.into_iter().flatten();
        self.map(|lhs| lhs - rhs.next().unwrap())
    }
}

/// Cell-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.0
            .iter_mut()
            .flatten()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Mul + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Scalar-Matrix multiplication (scaling), with the complex scalar on the left as in the usual
/// mathematical notation `c · a`.
///
/// ```
/// # use qc_linalg::*;
/// let a: CMatrix<i32, 1, 2> = Matrix::from_rows([[complex(6, 3), complex(5, 1)]]);
/// assert_eq!(complex(3, 2) * a, Matrix::from_rows([[complex(12, 21), complex(13, 13)]]));
/// ```
impl<T, const R: usize, const C: usize> Mul<Matrix<Complex<T>, R, C>> for Complex<T>
where
    T: Number,
{
    type Output = Matrix<Complex<T>, R, C>;

    fn mul(self, rhs: Matrix<Complex<T>, R, C>) -> Self::Output {
        rhs.map(|elem| self * elem)
    }
}
