use std::{array, fmt};

use crate::complex::Complex;
use crate::traits::Zero;
use crate::vector::Vector;

mod ops;

/// A fixed-size matrix of [`Complex`] numbers: an element of *C^(m×n)*.
pub type CMatrix<T, const R: usize, const C: usize> = Matrix<Complex<T>, R, C>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// Both dimensions are const generic parameters, so they are fixed at construction; operations
/// between matrices of different shapes are rejected at compile time, not checked at runtime.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - The [`Default`] implementation initializes each element with its default value.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`.
/// The first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use qc_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// and [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Operations
///
/// Element-wise addition and subtraction ([`Add`]/[`Sub`]), the additive inverse ([`Neg`]), and
/// scalar multiplication ([`Mul`], with the scalar on either side for complex elements) are
/// provided as operator impls, mirroring the [`Vector`] operations cell by cell.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Add`]: std::ops::Add
/// [`Sub`]: std::ops::Sub
/// [`Neg`]: std::ops::Neg
/// [`Mul`]: std::ops::Mul
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_ROW: [T; C] = [T::ZERO; C];

    /// A matrix with every element set to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([Self::ZERO_ROW; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [complex(0, 1), complex(-2, 3)],
    ///     [complex(4, -5), complex(6, -7)],
    /// ]);
    /// assert_eq!(mat[(1, 0)], complex(4, -5));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [complex(0, 1), complex(2, -3)],
    /// ]);
    /// assert_eq!(mat.map(Complex::conjugate), Matrix::from_rows([
    ///     [complex(0, -1), complex(2, 3)],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the row at index `row` as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use qc_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [complex(0, 1), complex(-2, 3)],
    ///     [complex(4, -5), complex(6, -7)],
    /// ]);
    /// assert_eq!(mat.row(1), [complex(4, -5), complex(6, -7)]);
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::complex::complex;

    use super::*;

    #[test]
    fn add() {
        let a: CMatrix<i32, 2, 2> = Matrix::from_rows([
            [complex(0, 1), complex(2, 3)],
            [complex(4, 5), complex(6, 7)],
        ]);
        let b: CMatrix<i32, 2, 2> = Matrix::from_rows([
            [complex(0, -1), complex(-2, -3)],
            [complex(-4, -5), complex(-6, -7)],
        ]);

        assert_eq!(a + b, CMatrix::ZERO);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn scale() {
        let c = complex(2, -5);
        let a: CMatrix<i32, 2, 2> = Matrix::from_rows([
            [complex(0, 1), complex(-2, 3)],
            [complex(4, -5), complex(6, -7)],
        ]);

        let scaled = c * a;
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(scaled[(row, col)], c * a[(row, col)]);
            }
        }
        assert_eq!(a * c, scaled);
    }

    #[test]
    fn scale_compatibility() {
        let c1 = complex(1.5_f32, 0.25);
        let c2 = complex(-2.0_f32, 1.0);
        let a: CMatrix<f32, 2, 3> = Matrix::from_fn(|row, col| complex(row as f32, col as f32));

        assert_approx_eq!(c1 * (c2 * a), (c1 * c2) * a).abs(1e-6);
    }

    #[test]
    fn inverse() {
        let a: CMatrix<i32, 2, 2> = Matrix::from_rows([
            [complex(0, 1), complex(-2, 3)],
            [complex(4, -5), complex(6, -7)],
        ]);

        let expected: CMatrix<i32, 2, 2> = Matrix::from_rows([
            [complex(0, -1), complex(2, -3)],
            [complex(-4, 5), complex(-6, 7)],
        ]);
        assert_eq!(-a, expected);
        assert_eq!(a + (-a), CMatrix::ZERO);
        assert_eq!(-(-a), a);
    }

    #[test]
    fn sub() {
        let a: CMatrix<i32, 1, 2> = Matrix::from_rows([[complex(4, 2), complex(-1, 1)]]);
        let b: CMatrix<i32, 1, 2> = Matrix::from_rows([[complex(1, 1), complex(1, 1)]]);

        assert_eq!(a - b, Matrix::from_rows([[complex(3, 1), complex(-2, 0)]]));
        assert_eq!(a - a, CMatrix::ZERO);
    }

    #[test]
    fn non_square() {
        // Rectangular shapes work the same way; both dimensions stay fixed.
        let a: CMatrix<i32, 2, 3> = Matrix::from_fn(|row, col| complex(row as i32, col as i32));
        let doubled = a + a;
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(doubled[(row, col)], complex(2 * row as i32, 2 * col as i32));
            }
        }
    }

    #[test]
    fn access() {
        let mut mat = Matrix::from_rows([[complex(0, 1), complex(2, 3)]]);

        assert_eq!(mat.get(0, 1), Some(&complex(2, 3)));
        assert_eq!(mat.get(1, 0), None);
        assert_eq!(mat.row(0), [complex(0, 1), complex(2, 3)]);

        if let Some(elem) = mat.get_mut(0, 0) {
            *elem = complex(9, 9);
        }
        assert_eq!(mat[(0, 0)], complex(9, 9));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row on its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(
            format!("{:?}", Matrix::<f32, 2, 2>::ZERO),
            "[[0.0, 0.0], [0.0, 0.0]]"
        );
    }
}
