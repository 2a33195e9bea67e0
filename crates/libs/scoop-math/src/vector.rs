//! Fixed-length vectors with compile-time dimension.

use crate::error::Error;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::{AsPrimitive, Float, Zero};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A fixed-length vector of `N` elements of type `T` on the stack.
///
/// Elements are stored in natural index order. The type has value semantics:
/// it is `Copy` whenever `T` is, and copying copies all `N` elements. No heap
/// allocation takes place anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Creates a new vector from an array of elements in index order.
    pub const fn new(data: [T; N]) -> Self { Self(data) }

    /// Creates a new vector with all elements set to zero.
    pub fn zeros() -> Self
    where
        T: Zero + Copy,
    {
        Self([T::zero(); N])
    }

    /// Creates a new vector with all elements set to the given value.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Creates a new vector from a slice of exactly `N` elements in index
    /// order.
    ///
    /// Returns [`Error::LengthMismatch`] when the slice length differs from
    /// `N`.
    pub fn from_slice(values: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if values.len() != N {
            return Err(Error::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        Ok(Self(core::array::from_fn(|i| values[i])))
    }

    /// Returns the number of elements, always `N`.
    pub const fn len(&self) -> usize { N }

    /// Returns `true` when the vector has no elements.
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns a reference to the element at `index`, or
    /// [`Error::IndexOutOfRange`] when `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.0
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::IndexOutOfRange`] when `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.0.iter() }

    /// Returns a mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Sum of all elements.
    pub fn sum(&self) -> T
    where
        T: Zero + Add<Output = T>,
    {
        self.0.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Dot product with another vector of the same size.
    pub fn dot(&self, other: &Self) -> T
    where
        T: Zero + Add<Output = T> + Mul<Output = T>,
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean norm, accumulated in `f64`.
    ///
    /// The accumulation happens in double precision regardless of `T`, so
    /// fixed-width integer element types do not overflow on the way.
    pub fn norm_sqr(&self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.0
            .iter()
            .map(|x| {
                let x = x.as_();
                x * x
            })
            .sum()
    }

    /// Euclidean norm (magnitude), returned as `f64` regardless of `T`.
    pub fn norm(&self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.norm_sqr().sqrt()
    }

    /// Euclidean distance to another vector of the same size, returned as
    /// `f64`.
    ///
    /// Differences are taken in double precision, so the operation is also
    /// well defined for unsigned element types.
    pub fn distance(&self, other: &Self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = a.as_() - b.as_();
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Elementwise product with another vector of the same size.
    ///
    /// Deliberately not exposed as a `*` operator; vector-vector `*` has no
    /// single conventional meaning.
    pub fn hadamard(&self, other: &Self) -> Self
    where
        T: Mul<Output = T>,
    {
        Self(core::array::from_fn(|i| self.0[i] * other.0[i]))
    }

    /// In-place elementwise product with another vector of the same size.
    pub fn hadamard_assign(&mut self, other: &Self)
    where
        T: Mul<Output = T>,
    {
        for (x, &rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *x = *x * rhs;
        }
    }
}

impl<T: Copy + Mul<Output = T> + Sub<Output = T>> Vector<T, 3> {
    /// 3-D cross product. Only defined for three-component vectors.
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Self([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns this vector scaled to unit norm.
    ///
    /// The norm of a zero vector is zero; the scale factor is then non-finite
    /// and so are the resulting components. Callers must guard against zero
    /// input themselves.
    pub fn normalized(&self) -> Self {
        let inv = T::one() / self.dot(self).sqrt();
        *self * inv
    }

    /// Scales this vector to unit norm in place. Same zero-vector caveat as
    /// [`normalized`](Self::normalized).
    pub fn normalize(&mut self) { *self = self.normalized(); }
}

impl<T: Zero + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Error> { Self::from_slice(values) }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self { Self(data) }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type IntoIter = core::array::IntoIter<T, N>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);* $(;)?) => {
        $(
            impl<T, const N: usize> $trait<T> for Vector<T, N>
            where
                T: Copy + $trait<Output = T>,
            {
                type Output = Self;

                fn $op(self, rhs: T) -> Self {
                    Self(core::array::from_fn(|i| self.0[i].$op(rhs)))
                }
            }

            impl<T, const N: usize> $assign_trait<T> for Vector<T, N>
            where
                T: Copy + $trait<Output = T>,
            {
                fn $assign_op(&mut self, rhs: T) {
                    for x in self.0.iter_mut() {
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

macro_rules! impl_vector_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);* $(;)?) => {
        $(
            impl<T, const N: usize> $trait for Vector<T, N>
            where
                T: Copy + $trait<Output = T>,
            {
                type Output = Self;

                fn $op(self, rhs: Self) -> Self {
                    Self(core::array::from_fn(|i| self.0[i].$op(rhs.0[i])))
                }
            }

            impl<T, const N: usize> $assign_trait for Vector<T, N>
            where
                T: Copy + $trait<Output = T>,
            {
                fn $assign_op(&mut self, rhs: Self) {
                    for (x, rhs) in self.0.iter_mut().zip(rhs.0) {
                        *x = x.$op(rhs);
                    }
                }
            }
        )*
    };
}

impl_vector_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
}

// Scalar division multiplies by the reciprocal, hence floats only; an integer
// reciprocal would truncate to zero.
impl<T: Float, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self { self * (T::one() / rhs) }
}

impl<T: Float, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) { *self *= T::one() / rhs; }
}

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self { Self(core::array::from_fn(|i| -self.0[i])) }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction() {
        let v = Vector::new([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        let z = Vector::<i32, 4>::zeros();
        assert_eq!(z, Vector::new([0, 0, 0, 0]));
        assert_eq!(z, Vector::default());

        let s = Vector::<f32, 3>::splat(2.5);
        assert_eq!(s, Vector::new([2.5, 2.5, 2.5]));
    }

    #[test]
    fn from_slice_checks_length() {
        let v = Vector::<i32, 3>::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v, Vector::new([1, 2, 3]));

        assert_eq!(
            Vector::<i32, 3>::from_slice(&[1, 2]),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Vector::<i32, 3>::try_from([1, 2, 3, 4].as_slice()),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn checked_indexing() {
        let mut v = Vector::new([1, 2, 3]);
        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(2), Ok(&3));
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));

        *v.at_mut(1).unwrap() = 7;
        assert_eq!(v[1], 7);
        assert_eq!(
            v.at_mut(9),
            Err(Error::IndexOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn iteration() {
        let mut v = Vector::new([1, 2, 3, 4]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        for x in &mut v {
            *x += 10;
        }
        assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![11, 12, 13, 14]);
    }

    #[test]
    fn sum_and_dot() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a.sum(), 6);
        assert_eq!(a.dot(&b), 32);
    }

    #[test]
    fn basis_dot_products() {
        let basis = [
            Vector::new([1.0f64, 0.0, 0.0]),
            Vector::new([0.0, 1.0, 0.0]),
            Vector::new([0.0, 0.0, 1.0]),
        ];
        for (i, ei) in basis.iter().enumerate() {
            for (j, ej) in basis.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(ei.dot(ej), expected);
            }
        }
    }

    #[test]
    fn norm_is_f64_even_for_integers() {
        // 3-4-5 triangle with u8 elements; naive u8 accumulation of the
        // squares would wrap.
        let v = Vector::<u8, 2>::new([30, 40]);
        assert_eq!(v.norm(), 50.0);

        let single = Vector::new([0.0f32, -2.5, 0.0]);
        assert_abs_diff_eq!(single.norm(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn distance_is_symmetric_and_unsigned_safe() {
        let a = Vector::<u32, 3>::new([1, 2, 3]);
        let b = Vector::<u32, 3>::new([4, 6, 3]);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn cross_products() {
        let x = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);
        let z = Vector::new([0.0, 0.0, 1.0]);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(y.cross(&x), -z);
    }

    #[test]
    fn normalization() {
        let v = Vector::new([3.0f64, 0.0, 4.0]);
        assert_abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            v.normalized(),
            Vector::new([0.6, 0.0, 0.8]),
            epsilon = 1e-12
        );

        let mut w = Vector::new([0.0f64, -7.0]);
        w.normalize();
        assert_abs_diff_eq!(w, Vector::new([0.0, -1.0]), epsilon = 1e-12);
    }

    #[test]
    fn scalar_arithmetic() {
        let v = Vector::new([1.0f64, 2.0, 3.0]);
        assert_eq!(v + 1.0, Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(v - 1.0, Vector::new([0.0, 1.0, 2.0]));
        assert_eq!(v * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_abs_diff_eq!(v / 2.0, Vector::new([0.5, 1.0, 1.5]), epsilon = 1e-12);

        let mut w = v;
        w += 1.0;
        w -= 2.0;
        w *= 4.0;
        w /= 2.0;
        assert_abs_diff_eq!(w, Vector::new([0.0, 2.0, 4.0]), epsilon = 1e-12);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a + b, Vector::new([5, 7, 9]));
        assert_eq!(b - a, Vector::new([3, 3, 3]));
        assert_eq!((a + b) - b, a);

        let mut c = a;
        c += b;
        assert_eq!(c, Vector::new([5, 7, 9]));
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn hadamard_products() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a.hadamard(&b), Vector::new([4, 10, 18]));

        let mut c = a;
        c.hadamard_assign(&b);
        assert_eq!(c, Vector::new([4, 10, 18]));
    }
}
