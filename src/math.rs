//! Math helpers for transform flattening.
//!
//! The export data model stores transforms as plain arrays (`[f32; 3]`,
//! `[f32; 4]`); `nalgebra` is used only here, to compose the TRS matrix
//! that crosses the boundary.

use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3};

/// Create a quaternion from a `[x, y, z, w]` array.
pub fn quat_from_array(a: [f32; 4]) -> Quaternion<f32> {
    Quaternion::new(a[3], a[0], a[1], a[2])
}

/// Compose a local TRS matrix and flatten it into the 16-float boundary
/// layout: basis rows first, translation in elements 12..=14, element 15
/// equal to 1. A point transforms as a row vector (`p' = p * M`).
///
/// The rotation quaternion is assumed to be unit length, as supplied by
/// the host hierarchy.
pub fn trs_to_row_major(translation: [f32; 3], rotation: [f32; 4], scale: [f32; 3]) -> [f32; 16] {
    let r = UnitQuaternion::new_unchecked(quat_from_array(rotation));
    let m = Matrix4::new_translation(&Vector3::from(translation))
        * r.to_homogeneous()
        * Matrix4::new_nonuniform_scaling(&Vector3::from(scale));
    // Column-major storage of the column-vector form is exactly the
    // row-major layout of its row-vector transpose.
    let mut out = [0.0f32; 16];
    out.copy_from_slice(m.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn identity_trs() {
        let m = trs_to_row_major([0.0; 3], [0.0, 0.0, 0.0, 1.0], [1.0; 3]);
        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(m, expected);
    }

    #[test]
    fn translation_goes_into_last_row() {
        let m = trs_to_row_major([1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], [1.0; 3]);
        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            1.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(m, expected);
    }

    #[test]
    fn scale_on_the_diagonal() {
        let m = trs_to_row_major([0.0; 3], [0.0, 0.0, 0.0, 1.0], [2.0, 3.0, 4.0]);
        assert_eq!(m[0], 2.0);
        assert_eq!(m[5], 3.0);
        assert_eq!(m[10], 4.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn rotation_y_90() {
        // 90 degrees about Y: quaternion (0, sin45, 0, cos45).
        let s = FRAC_PI_4.sin();
        let c = FRAC_PI_4.cos();
        let m = trs_to_row_major([0.0; 3], [0.0, s, 0.0, c], [1.0; 3]);
        #[rustfmt::skip]
        let expected = [
            0.0, 0.0, -1.0, 0.0,
            0.0, 1.0,  0.0, 0.0,
            1.0, 0.0,  0.0, 0.0,
            0.0, 0.0,  0.0, 1.0,
        ];
        for (a, b) in m.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-6);
        }
    }

    #[test]
    fn quat_array_component_order() {
        let q = quat_from_array([0.1, 0.2, 0.3, 0.9]);
        assert_eq!(q.coords.x, 0.1);
        assert_eq!(q.coords.y, 0.2);
        assert_eq!(q.coords.z, 0.3);
        assert_eq!(q.w, 0.9);
    }
}
