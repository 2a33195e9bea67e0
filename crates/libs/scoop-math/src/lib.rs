//! Generic fixed-dimension linear algebra primitives.
//!
//! Two stack-resident, copy-cheap containers parameterized over a numeric
//! element type and compile-time dimensions:
//!
//! - [`Vector<T, N>`](Vector), a fixed-length sequence of `N` elements with
//!   arithmetic, metric and normalization operations;
//! - [`Matrix<T, R, C>`](Matrix), an `R`x`C` grid stored column-major, with
//!   arithmetic, shape transforms, matrix/vector products and homogeneous
//!   transform factories for the 4x4 shape.
//!
//! Shape-dependent capabilities are gated at compile time: `cross` exists
//! only on three-component vectors, the transform factories only on 4x4
//! matrices, and the inner dimension of a matrix product is checked by the
//! type system. Checked construction and indexing report contract violations
//! through [`Error`].
//!
//! ```
//! use scoop_math::{FMat4, FVec3, FVec4};
//!
//! let m = FMat4::from_translation(FVec3::new([1.0, 2.0, 3.0]));
//! let p = m * FVec4::new([0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(p, FVec4::new([1.0, 2.0, 3.0, 1.0]));
//! ```

mod aliases;
mod error;
mod matrix;
mod vector;

pub use aliases::*;
pub use error::Error;
pub use matrix::Matrix;
pub use vector::Vector;
