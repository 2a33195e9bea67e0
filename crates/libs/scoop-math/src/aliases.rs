//! Typed alias families for the common element types and small dimensions.

use crate::{matrix::Matrix, vector::Vector};
use paste::paste;

macro_rules! typed_aliases {
    ($($prefix:ident => $t:ty),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Vector of `", stringify!($t), "` elements.")]
                pub type [<$prefix Vec>]<const N: usize> = Vector<$t, N>;
                #[doc = concat!("Two-component `", stringify!($t), "` vector.")]
                pub type [<$prefix Vec2>] = Vector<$t, 2>;
                #[doc = concat!("Three-component `", stringify!($t), "` vector.")]
                pub type [<$prefix Vec3>] = Vector<$t, 3>;
                #[doc = concat!("Four-component `", stringify!($t), "` vector.")]
                pub type [<$prefix Vec4>] = Vector<$t, 4>;

                #[doc = concat!("Matrix of `", stringify!($t), "` elements.")]
                pub type [<$prefix Mat>]<const R: usize, const C: usize> = Matrix<$t, R, C>;
                #[doc = concat!("2x2 `", stringify!($t), "` matrix.")]
                pub type [<$prefix Mat2>] = Matrix<$t, 2, 2>;
                #[doc = concat!("3x3 `", stringify!($t), "` matrix.")]
                pub type [<$prefix Mat3>] = Matrix<$t, 3, 3>;
                #[doc = concat!("4x4 `", stringify!($t), "` matrix.")]
                pub type [<$prefix Mat4>] = Matrix<$t, 4, 4>;
            )*
        }
    };
}

typed_aliases! {
    F => f32,
    D => f64,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
}
