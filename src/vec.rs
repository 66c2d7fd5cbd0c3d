use core::fmt;
use core::ops;

use bytemuck::{Pod, Zeroable};
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two component vector over any numeric scalar.
///
/// Equality is exact, component by component. Callers that need a tolerance
/// have to apply it themselves.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;

// Two fields of the same Pod scalar under repr(C) leave no padding.
unsafe impl<T: Zeroable> Zeroable for Vec2<T> {}
unsafe impl<T: Pod> Pod for Vec2<T> {}

impl<T> Vec2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Vec2<T> {
        Vec2 { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    #[inline]
    pub fn from_scalar(a: T) -> Vec2<T> {
        Vec2 { x: a, y: a }
    }

    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: Zero + One> Vec2<T> {
    #[inline]
    pub fn ones() -> Vec2<T> {
        Vec2::new(T::one(), T::one())
    }

    #[inline]
    pub fn zeros() -> Vec2<T> {
        Vec2::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn up() -> Vec2<T> {
        Vec2::new(T::zero(), T::one())
    }
}

impl<T: Num + Copy> Vec2<T> {
    #[inline]
    pub fn dot(self, rhs: Vec2<T>) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// z component of the 3D cross product of (x, y, 0) and (rhs.x, rhs.y, 0).
    #[inline]
    pub fn cross(self, rhs: Vec2<T>) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: Float> Vec2<T> {
    #[inline]
    pub fn magnitude(self) -> T {
        // hypot keeps tiny and huge components from under/overflowing the squares.
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is exactly zero.
    #[inline]
    pub fn normalized(self) -> Vec2<T> {
        let mag = self.magnitude();
        if mag == T::zero() {
            Vec2::zeros()
        } else {
            Vec2::new(self.x / mag, self.y / mag)
        }
    }

    /// Angle to the positive x axis, in (-pi, pi].
    #[inline]
    pub fn direction(self) -> T {
        self.y.atan2(self.x)
    }

    /// Unsigned angle between the two vectors in [0, pi]. NaN when either
    /// vector has zero magnitude.
    #[inline]
    pub fn angle_between(self, other: Vec2<T>) -> T {
        let dot = self.dot(other);
        let mag = self.magnitude() * other.magnitude();
        let cos = dot / mag;
        if cos.is_nan() {
            return cos;
        }
        // Rounding can push parallel vectors just past +-1.
        cos.max(-T::one()).min(T::one()).acos()
    }

    #[inline]
    pub fn lerp(self, b: Vec2<T>, t: T) -> Vec2<T> {
        self * (T::one() - t) + b * t
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Vec2 { x, y }
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vec2 { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$})", self.x, self.y, p = p),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl<T: Num + Copy> ops::Add for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn add(self, rhs: Vec2<T>) -> Vec2<T> {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Num + Copy> ops::Sub for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, rhs: Vec2<T>) -> Vec2<T> {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: Num + Copy> ops::AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2<T>) {
        *self = *self + rhs;
    }
}

impl<T: Num + Copy> ops::SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2<T>) {
        *self = *self - rhs;
    }
}

impl<T: Num + Copy> ops::Mul<T> for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn mul(self, rhs: T) -> Vec2<T> {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Float scalars divide by zero into inf/NaN; integer scalars panic on a zero
/// divisor, as Rust integer division does.
impl<T: Num + Copy> ops::Div<T> for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn div(self, rhs: T) -> Vec2<T> {
        Vec2 { x: self.x / rhs, y: self.y / rhs }
    }
}

impl<T: Num + Copy> ops::MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Num + Copy> ops::DivAssign<T> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn neg(self) -> Vec2<T> {
        Vec2 { x: -self.x, y: -self.y }
    }
}

// Scalar on the left can't be written generically over T.
macro_rules! scalar_lhs_mul_impl {
    ($($t: ident),*) => {
        $(
            impl ops::Mul<Vec2<$t>> for $t {
                type Output = Vec2<$t>;

                #[inline]
                fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> {
                    rhs * self
                }
            }
        )*
    }
}

scalar_lhs_mul_impl!(f32, f64, i32);

/// Homogeneous 4 component point, the full input of a `Mat4` product.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    /// Lifts a 2D point to (x, y, 0, 1).
    #[inline]
    pub fn point(p: Vec2f) -> Vec4 {
        Vec4 { x: p.x, y: p.y, z: 0.0, w: 1.0 }
    }

    #[inline]
    pub fn xy(self) -> Vec2f {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn dot(self, b: Vec4) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }

    /// x and y divided by w. A zero w yields inf or NaN.
    #[inline]
    pub fn perspective_divide(self) -> Vec2f {
        Vec2::new(self.x / self.w, self.y / self.w)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Vec4 { x, y, z, w }
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$}, {:.p$})",
                              self.x, self.y, self.z, self.w, p = p),
            None => write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w),
        }
    }
}
