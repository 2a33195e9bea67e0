//! Property tests over randomly generated vectors and matrices.

use approx::{abs_diff_eq, relative_eq};
use proptest::prelude::*;
use scoop_math::{DMat3, DVec3, Matrix, Vector};

const RANGE: std::ops::Range<f64> = -1.0e3..1.0e3;

fn vec3() -> impl Strategy<Value = DVec3> {
    prop::array::uniform3(RANGE).prop_map(Vector::new)
}

fn ivec4() -> impl Strategy<Value = Vector<i64, 4>> {
    prop::array::uniform4(-1_000_i64..1_000).prop_map(Vector::new)
}

fn mat3() -> impl Strategy<Value = DMat3> {
    prop::array::uniform3(prop::array::uniform3(RANGE)).prop_map(Matrix::new)
}

proptest! {
    #[test]
    fn add_then_sub_restores_float(a in vec3(), b in vec3()) {
        prop_assert!(relative_eq!((a + b) - b, a, epsilon = 1e-9, max_relative = 1e-9));
    }

    #[test]
    fn add_then_sub_restores_int_exactly(a in ivec4(), b in ivec4()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn single_nonzero_element_norm(x in RANGE, i in 0_usize..3) {
        let mut v = DVec3::zeros();
        v[i] = x;
        prop_assert!(relative_eq!(v.norm(), x.abs(), max_relative = 1e-15));
    }

    #[test]
    fn normalized_has_unit_norm(a in vec3()) {
        prop_assume!(a.norm() > 1e-6);
        prop_assert!(relative_eq!(a.normalized().norm(), 1.0, max_relative = 1e-12));
    }

    #[test]
    fn distance_is_norm_of_difference(a in vec3(), b in vec3()) {
        // Both paths take the elementwise differences in f64, so the two
        // computations agree exactly.
        prop_assert_eq!(a.distance(&b), (a - b).norm());
    }

    #[test]
    fn hadamard_commutes(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.hadamard(&b), b.hadamard(&a));
    }

    #[test]
    fn cross_anticommutes(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(&b), -(b.cross(&a)));
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(&b);
        prop_assert!(abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-4));
        prop_assert!(abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-4));
    }

    #[test]
    fn transpose_involution(m in mat3()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn identity_is_left_neutral(m in mat3()) {
        prop_assert_eq!(DMat3::identity() * m, m);
    }

    #[test]
    fn product_associative_within_tolerance(a in mat3(), b in mat3(), c in mat3()) {
        prop_assert!(relative_eq!(
            (a * b) * c,
            a * (b * c),
            epsilon = 1e-5,
            max_relative = 1e-9
        ));
    }

    #[test]
    fn matrix_vector_product_matches_single_column_product(m in mat3(), v in vec3()) {
        let col: Matrix<f64, 3, 1> = v.into();
        prop_assert_eq!(Matrix::from(m * v), m * col);
    }
}
