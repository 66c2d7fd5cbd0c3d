//! 2D vectors and 4x4 transforms for feeding simple GL style renderers.
//!
//! `Vec2<T>` is generic over its scalar; `Mat4` is always `f32`. Both are
//! `Pod`, so they can be handed to a vertex buffer or uniform as bytes.

pub mod vec;
pub mod mat;

pub use mat::Mat4;
pub use vec::{Vec2, Vec2d, Vec2f, Vec2i, Vec4};

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    #[test]
    fn test() {
        use crate::vec::Vec2f;
        use crate::mat::Mat4;

        let model = Mat4::translate(2.0, 1.0) * Mat4::rotate_z(core::f32::consts::FRAC_PI_2);
        let proj = Mat4::ortho(-2.0, 2.0, -1.5, 1.5, -1.0, 1.0);

        let mut p = Vec2f::new(1.0, 0.0);
        p += Vec2f::up();

        let ndc = proj * model * p;
        assert_abs_diff_eq!(ndc.x, 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc.y, 4.0 / 3.0, epsilon = 1e-5);

        println!("{:.2} {}", proj * model, ndc);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shape() {
        use crate::{Mat4, Vec2i};

        let v: Vec2i = serde_json::from_str(r#"{"x":1,"y":-2}"#).unwrap();
        assert_eq!(v, Vec2i::new(1, -2));

        let json = serde_json::to_string(&Mat4::identity()).unwrap();
        assert_eq!(serde_json::from_str::<Mat4>(&json).unwrap(), Mat4::identity());
    }
}
