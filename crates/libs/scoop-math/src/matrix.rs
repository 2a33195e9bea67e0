//! Fixed-shape matrices with compile-time dimensions, stored column-major.

use crate::{error::Error, vector::Vector};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Float, One, Zero};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

/// An `R`x`C` matrix of elements of type `T` on the stack.
///
/// Storage is column-major: the payload holds `C` columns of `R` elements
/// each, so the logical cell `(row, col)` lives at flat offset
/// `col * R + row`. This matches the flat-sequence construction contract of
/// [`from_slice`](Self::from_slice) and the layout the homogeneous-transform
/// factories are written against.
///
/// Like [`Vector`], the type has value semantics and never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; R]; C]);

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a new matrix from an array of `C` columns of `R` elements
    /// each.
    pub const fn new(cols: [[T; R]; C]) -> Self { Self(cols) }

    /// Creates a new matrix with all elements set to zero.
    pub fn zeros() -> Self
    where
        T: Zero + Copy,
    {
        Self([[T::zero(); R]; C])
    }

    /// Creates a new matrix with all elements set to the given value.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([[value; R]; C])
    }

    /// Creates a new matrix with `diagonal` on the main diagonal and zero
    /// everywhere else.
    pub fn from_diagonal(diagonal: T) -> Self
    where
        T: Zero + Copy,
    {
        let mut cols = [[T::zero(); R]; C];
        for (i, col) in cols.iter_mut().enumerate().take(R.min(C)) {
            col[i] = diagonal;
        }
        Self(cols)
    }

    /// The identity matrix: ones on the main diagonal.
    pub fn identity() -> Self
    where
        T: Zero + One + Copy,
    {
        Self::from_diagonal(T::one())
    }

    /// Creates a new matrix from a flat slice of exactly `R * C` elements in
    /// column-major order: column 0's `R` elements first, then column 1's,
    /// and so on.
    ///
    /// Note the asymmetry with [`Vector::from_slice`], which takes natural
    /// index order; downstream literal initializers are written against the
    /// column-major contract.
    ///
    /// Returns [`Error::LengthMismatch`] when the slice length differs from
    /// `R * C`.
    ///
    /// ```
    /// use scoop_math::Matrix;
    ///
    /// let m = Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m[[0, 0]], 1);
    /// assert_eq!(m[[1, 0]], 2);
    /// assert_eq!(m[[0, 1]], 3);
    /// assert_eq!(m[[1, 1]], 4);
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if values.len() != R * C {
            return Err(Error::LengthMismatch {
                expected: R * C,
                actual: values.len(),
            });
        }
        Ok(Self(core::array::from_fn(|col| {
            core::array::from_fn(|row| values[col * R + row])
        })))
    }

    /// Returns the number of elements, always `R * C`.
    pub const fn len(&self) -> usize { R * C }

    /// Returns `true` when the matrix has no elements.
    pub const fn is_empty(&self) -> bool { R * C == 0 }

    /// Returns a reference to the element at the flat offset `index`
    /// (column-major), or [`Error::IndexOutOfRange`] when `index >= R * C`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index >= R * C {
            return Err(Error::IndexOutOfRange {
                index,
                len: R * C,
            });
        }
        Ok(&self.0[index / R][index % R])
    }

    /// Returns a mutable reference to the element at the flat offset
    /// `index`, or [`Error::IndexOutOfRange`] when `index >= R * C`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= R * C {
            return Err(Error::IndexOutOfRange {
                index,
                len: R * C,
            });
        }
        Ok(&mut self.0[index / R][index % R])
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// Maps to the flat offset `col * R + row` and goes through the same
    /// checked accessor as [`at`](Self::at).
    pub fn at_rc(&self, row: usize, col: usize) -> Result<&T, Error> {
        self.at(col * R + row)
    }

    /// Returns a mutable reference to the element at `(row, col)`, checked
    /// like [`at_rc`](Self::at_rc).
    pub fn at_rc_mut(&mut self, row: usize, col: usize) -> Result<&mut T, Error> {
        self.at_mut(col * R + row)
    }

    /// Returns column `col` as an array reference.
    pub fn col(&self, col: usize) -> &[T; R] { &self.0[col] }

    /// Returns the elements as a flat column-major slice.
    pub fn as_slice(&self) -> &[T] { self.0.as_flattened() }

    /// Returns the elements as a flat column-major mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.0.as_flattened_mut() }

    /// Reinterprets a single-column matrix as a vector of its `R` rows.
    ///
    /// Returns [`Error::InvalidShape`] when the matrix has more than one
    /// column. For the compile-time-shaped equivalent use the
    /// `From<Matrix<T, R, 1>>` conversion on [`Vector`].
    pub fn as_vector(&self) -> Result<Vector<T, R>, Error>
    where
        T: Copy,
    {
        if C != 1 {
            return Err(Error::InvalidShape {
                rows: R,
                cols: C,
                expected: "a single-column matrix",
            });
        }
        Ok(Vector::new(self.0[0]))
    }

    /// Returns the transpose: a `C`x`R` matrix with `new(col, row) =
    /// old(row, col)` for every cell. A full re-layout, not a view.
    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix(core::array::from_fn(|new_col| {
            core::array::from_fn(|new_row| self.0[new_row][new_col])
        }))
    }

    /// Elementwise product with another matrix of identical shape.
    ///
    /// Named only, like [`Vector::hadamard`]; the `*` operator is reserved
    /// for the matrix product.
    pub fn hadamard(&self, other: &Self) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        Self(core::array::from_fn(|c| {
            core::array::from_fn(|r| self.0[c][r] * other.0[c][r])
        }))
    }

    /// In-place elementwise product with another matrix of identical shape.
    pub fn hadamard_assign(&mut self, other: &Self)
    where
        T: Copy + Mul<Output = T>,
    {
        for (x, &rhs) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *x = *x * rhs;
        }
    }
}

impl<T: Zero + One + Copy> Matrix<T, 4, 4> {
    /// Homogeneous translation matrix. Only defined for the 4x4 shape.
    ///
    /// The translation occupies the last column, flat column-major layout
    /// `[1,0,0,0, 0,1,0,0, 0,0,1,0, dx,dy,dz,1]`, so right-multiplying a
    /// column vector `[x, y, z, 1]` yields `[x+dx, y+dy, z+dz, 1]`.
    pub fn from_translation(delta: Vector<T, 3>) -> Self {
        let o = T::zero();
        let l = T::one();
        Self::new([
            [l, o, o, o],
            [o, l, o, o],
            [o, o, l, o],
            [delta[0], delta[1], delta[2], l],
        ])
    }

    /// Homogeneous scale matrix: the three multipliers on the leading
    /// diagonal and 1 in the bottom-right cell. Only defined for the 4x4
    /// shape.
    pub fn from_scale(factors: Vector<T, 3>) -> Self {
        let o = T::zero();
        let l = T::one();
        Self::new([
            [factors[0], o, o, o],
            [o, factors[1], o, o],
            [o, o, factors[2], o],
            [o, o, o, l],
        ])
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self { Self::zeros() }
}

/// Unchecked flat column-major indexing.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index / R][index % R] }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index / R][index % R]
    }
}

/// Unchecked 2-D indexing as `m[[row, col]]`.
impl<T, const R: usize, const C: usize> Index<[usize; 2]> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; 2]) -> &Self::Output { &self.0[index[1]][index[0]] }
}

impl<T, const R: usize, const C: usize> IndexMut<[usize; 2]> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: [usize; 2]) -> &mut Self::Output {
        &mut self.0[index[1]][index[0]]
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Error> { Self::from_slice(values) }
}

impl<T, const R: usize> From<Matrix<T, R, 1>> for Vector<T, R> {
    fn from(mat: Matrix<T, R, 1>) -> Self {
        let [col] = mat.0;
        Vector::new(col)
    }
}

impl<T, const R: usize> From<Vector<T, R>> for Matrix<T, R, 1> {
    fn from(vec: Vector<T, R>) -> Self { Matrix([vec.0]) }
}

macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);* $(;)?) => {
        $(
            impl<T, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C>
            where
                T: Copy + $trait<Output = T>,
            {
                type Output = Self;

                fn $op(self, rhs: T) -> Self {
                    Self(core::array::from_fn(|c| {
                        core::array::from_fn(|r| self.0[c][r].$op(rhs))
                    }))
                }
            }

            impl<T, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C>
            where
                T: Copy + $trait<Output = T>,
            {
                fn $assign_op(&mut self, rhs: T) {
                    for x in self.as_mut_slice() {
                        *x = x.$op(rhs);
                    }
                }
            }
        )*
    };
}

impl_scalar_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
}

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);* $(;)?) => {
        $(
            impl<T, const R: usize, const C: usize> $trait for Matrix<T, R, C>
            where
                T: Copy + $trait<Output = T>,
            {
                type Output = Self;

                fn $op(self, rhs: Self) -> Self {
                    Self(core::array::from_fn(|c| {
                        core::array::from_fn(|r| self.0[c][r].$op(rhs.0[c][r]))
                    }))
                }
            }

            impl<T, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C>
            where
                T: Copy + $trait<Output = T>,
            {
                fn $assign_op(&mut self, rhs: Self) {
                    for (x, rhs) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                        *x = x.$op(*rhs);
                    }
                }
            }
        )*
    };
}

impl_elementwise_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
}

// Scalar division multiplies by the reciprocal, as for vectors.
impl<T: Float, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(self, rhs: T) -> Self { self * (T::one() / rhs) }
}

impl<T: Float, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, rhs: T) { *self *= T::one() / rhs; }
}

/// Matrix product. The inner dimension is enforced by the type system: the
/// right operand must have exactly `C` rows.
impl<T, const R: usize, const C: usize, const C2: usize> Mul<Matrix<T, C, C2>>
    for Matrix<T, R, C>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Matrix<T, R, C2>;

    fn mul(self, rhs: Matrix<T, C, C2>) -> Matrix<T, R, C2> {
        Matrix(core::array::from_fn(|col| {
            core::array::from_fn(|row| {
                let mut dot = T::zero();
                for m in 0..C {
                    dot = dot + self.0[m][row] * rhs.0[col][m];
                }
                dot
            })
        }))
    }
}

/// Right-multiplication by a column vector: each output component is the dot
/// product of a matrix row with the vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::new(core::array::from_fn(|row| {
            let mut dot = T::zero();
            for col in 0..C {
                dot = dot + self.0[col][row] * rhs.0[col];
            }
            dot
        }))
    }
}

/// In-place matrix product with a square right operand.
///
/// The product is computed into a fresh matrix before overwriting `self`:
/// every output cell reads several original cells, so accumulating directly
/// into `self` would corrupt inputs mid-computation.
impl<T, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) { *self = *self * rhs; }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}
