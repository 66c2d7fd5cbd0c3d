use core::fmt;
use core::ops;

use bytemuck::{Pod, Zeroable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec::*;

/// 4x4 single precision matrix, stored row-major: `e[row][col]`.
///
/// Points are column vectors multiplied on the right, so `a * b` applied to a
/// point transforms it by `b` first and then by `a`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Mat4 {
    pub e: [[f32; 4]; 4],
}

impl Mat4 {
    #[inline]
    pub fn new() -> Mat4 {
        Mat4::default()
    }

    #[inline]
    pub fn zero() -> Mat4 {
        Mat4::new()
    }

    #[inline]
    pub fn identity() -> Mat4 {
        Mat4::scale_uniform(1.0)
    }

    #[inline]
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
        Mat4 { e: rows }
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.e = [[0.0; 4]; 4];
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from(self.e[i])
    }

    #[inline]
    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self.e[0][j], self.e[1][j], self.e[2][j], self.e[3][j])
    }

    /// Column-major flat layout, as GL style uniforms expect.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.transpose().e)
    }

    #[inline]
    pub fn transpose(&self) -> Mat4 {
        let mut m = Mat4::new();
        for i in 0..4 {
            for j in 0..4 {
                m.e[i][j] = self.e[j][i];
            }
        }
        m
    }

    /// Diagonal matrix with `d` on all four diagonal entries.
    #[inline]
    pub fn scale_uniform(d: f32) -> Mat4 {
        let mut m = Mat4::new();
        for i in 0..4 {
            m.e[i][i] = d;
        }
        m
    }

    /// 2D translation, z offset 0.
    #[inline]
    pub fn translate(tx: f32, ty: f32) -> Mat4 {
        Mat4::translate3(tx, ty, 0.0)
    }

    pub fn translate3(tx: f32, ty: f32, tz: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][3] = tx;
        m.e[1][3] = ty;
        m.e[2][3] = tz;
        m
    }

    /// 2D scale, z factor 1.
    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Mat4 {
        Mat4::scale3(sx, sy, 1.0)
    }

    pub fn scale3(sx: f32, sy: f32, sz: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][0] = sx;
        m.e[1][1] = sy;
        m.e[2][2] = sz;
        m
    }

    /// Counter-clockwise rotation about the z axis.
    pub fn rotate_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();

        let mut m = Mat4::identity();
        m.e[0][0] = c;
        m.e[0][1] = -s;
        m.e[1][0] = s;
        m.e[1][1] = c;
        m
    }

    /// OpenGL style orthographic projection, maps the box to [-1, 1] on all
    /// three axes. Degenerate bounds divide by zero.
    pub fn ortho(left: f32, right: f32, bottom: f32,
                 top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][0] = 2.0 / (right - left);
        m.e[1][1] = 2.0 / (top - bottom);
        m.e[2][2] = -2.0 / (far - near);
        m.e[0][3] = -(right + left) / (right - left);
        m.e[1][3] = -(top + bottom) / (top - bottom);
        m.e[2][3] = -(far + near) / (far - near);
        m
    }

    /// OpenGL style symmetric perspective projection. `fov_y` is the full
    /// vertical field of view in radians; the result needs a divide by w.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_y / 2.0).tan();

        let mut m = Mat4::new();
        m.e[0][0] = f / aspect;
        m.e[1][1] = f;
        m.e[2][2] = (far + near) / (near - far);
        m.e[2][3] = (2.0 * far * near) / (near - far);
        m.e[3][2] = -1.0;
        m
    }

    // Shared by determinant and inverse: the six 2x2 minors of the top two
    // rows and of the bottom two rows.
    #[inline]
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = &self.e;

        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];

        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];

        (s, c)
    }

    #[inline]
    fn det_from_minors(s: &[f32; 6], c: &[f32; 6]) -> f32 {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        Mat4::det_from_minors(&s, &c)
    }

    /// General inverse by cofactor expansion. `None` when the determinant is
    /// exactly zero; nearly singular matrices still invert, badly.
    pub fn inverse(&self) -> Option<Mat4> {
        let (s, c) = self.minors();
        let det = Mat4::det_from_minors(&s, &c);
        if det == 0.0 {
            log::trace!("matrix is singular, no inverse:\n{}", self);
            return None;
        }

        let a = &self.e;
        let adj = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];

        Some(Mat4::from_rows(adj) * (1.0 / det))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.e {
            write!(f, "| ")?;
            for v in row {
                match f.precision() {
                    Some(p) => write!(f, "{:.p$} ", v, p = p)?,
                    None => write!(f, "{} ", v)?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl ops::Mul<f32> for Mat4 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: f32) -> Mat4 {
        let mut m = self;
        for row in m.e.iter_mut() {
            for v in row.iter_mut() {
                *v *= rhs;
            }
        }
        m
    }
}

impl ops::Mul<Mat4> for f32 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

impl ops::MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl ops::Mul<Mat4> for Mat4 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut m = Mat4::new();
        for row in 0..4 {
            let a = self.row(row);
            for col in 0..4 {
                m.e[row][col] = a.dot(rhs.col(col));
            }
        }
        m
    }
}

impl ops::MulAssign<Mat4> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

/// 2D point transform: the vector is taken as (x, y, 0, 1) and only the x and
/// y rows are evaluated. No divide by w, so use `Mat4 * Vec4` for projections
/// that need one.
impl ops::Mul<Vec2f> for Mat4 {
    type Output = Vec2f;

    #[inline]
    fn mul(self, v: Vec2f) -> Vec2f {
        let m = &self.e;
        Vec2::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][3],
            m[1][0] * v.x + m[1][1] * v.y + m[1][3],
        )
    }
}

impl ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}
