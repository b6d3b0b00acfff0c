use std::ops::{Add, Div, Index, Mul, Neg, Sub};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    pub fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// Vector 3 operations
impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    pub fn zero() -> Self {
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn unit_y() -> Self {
        Vector3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    pub fn length(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns the zero vector for a zero-length input instead of NaNs.
    pub fn normalize(&self) -> Vector3 {
        let length = self.length();
        if length != 0.0 {
            Vector3 {
                x: self.x / length,
                y: self.y / length,
                z: self.z / length,
            }
        } else {
            Vector3::zero()
        }
    }

    pub fn dot(self, rhs: Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    pub fn min(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
            z: self.z.min(rhs.z),
        }
    }

    pub fn max(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
            z: self.z.max(rhs.z),
        }
    }

    pub fn max_component(&self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f32) -> Self::Output {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[repr(C)]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Vector4 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
    /// The w component of the vector.
    pub w: f32,
}

impl Vector4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }

    pub fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Vector4;

    fn mul(self, scalar: f32) -> Vector4 {
        Vector4 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Add for Vector4 {
    type Output = Vector4;

    fn add(self, other: Vector4) -> Vector4 {
        Vector4 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

/// Column-major 3x3 matrix, the layout `glUniformMatrix3fv` expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Matrix3 {
    pub fn from_cols(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Matrix3 { x, y, z }
    }

    pub fn identity() -> Self {
        Matrix3 {
            x: Vector3::new(1.0, 0.0, 0.0),
            y: Vector3::new(0.0, 1.0, 0.0),
            z: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn determinant(&self) -> f32 {
        self.x.dot(self.y.cross(self.z))
    }

    pub fn transpose(&self) -> Matrix3 {
        Matrix3 {
            x: Vector3::new(self.x.x, self.y.x, self.z.x),
            y: Vector3::new(self.x.y, self.y.y, self.z.y),
            z: Vector3::new(self.x.z, self.y.z, self.z.z),
        }
    }

    /// `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Matrix3> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }

        // Rows of the inverse are the cross products of the columns.
        let r0 = self.y.cross(self.z) / det;
        let r1 = self.z.cross(self.x) / det;
        let r2 = self.x.cross(self.y) / det;
        Some(Matrix3::from_cols(r0, r1, r2).transpose())
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    /// The first column of the matrix.
    pub x: Vector4,
    /// The second column of the matrix.
    pub y: Vector4,
    /// The third column of the matrix.
    pub z: Vector4,
    /// The fourth column of the matrix.
    pub w: Vector4,
}

// Matrix4 operations
impl Matrix4 {
    pub fn identity() -> Self {
        Matrix4 {
            x: Vector4::new(1.0, 0.0, 0.0, 0.0),
            y: Vector4::new(0.0, 1.0, 0.0, 0.0),
            z: Vector4::new(0.0, 0.0, 1.0, 0.0),
            w: Vector4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn from_scale(scale: f32) -> Self {
        Matrix4 {
            x: Vector4::new(scale, 0.0, 0.0, 0.0),
            y: Vector4::new(0.0, scale, 0.0, 0.0),
            z: Vector4::new(0.0, 0.0, scale, 0.0),
            w: Vector4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Matrix4 {
            x: Vector4::new(1.0, 0.0, 0.0, 0.0),
            y: Vector4::new(0.0, 1.0, 0.0, 0.0),
            z: Vector4::new(0.0, 0.0, 1.0, 0.0),
            w: Vector4::new(translation.x, translation.y, translation.z, 1.0),
        }
    }

    /// Counter-clockwise rotation about `axis` (normalized here). A zero axis yields identity.
    pub fn from_axis_angle(axis: Vector3, angle_degrees: f32) -> Self {
        let axis = axis.normalize();
        if axis == Vector3::zero() {
            return Matrix4::identity();
        }

        let angle_radians = angle_degrees.to_radians();
        let cos_a = angle_radians.cos();
        let sin_a = angle_radians.sin();
        let one_minus_cos_a = 1.0 - cos_a;

        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        Matrix4 {
            x: Vector4::new(
                x * x * one_minus_cos_a + cos_a,
                xy * one_minus_cos_a + z * sin_a,
                xz * one_minus_cos_a - y * sin_a,
                0.0,
            ),
            y: Vector4::new(
                xy * one_minus_cos_a - z * sin_a,
                y * y * one_minus_cos_a + cos_a,
                yz * one_minus_cos_a + x * sin_a,
                0.0,
            ),
            z: Vector4::new(
                xz * one_minus_cos_a + y * sin_a,
                yz * one_minus_cos_a - x * sin_a,
                z * z * one_minus_cos_a + cos_a,
                0.0,
            ),
            w: Vector4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn from_cols(x: Vector4, y: Vector4, z: Vector4, w: Vector4) -> Self {
        Matrix4 { x, y, z, w }
    }

    pub fn upper_left(&self) -> Matrix3 {
        Matrix3::from_cols(self.x.truncate(), self.y.truncate(), self.z.truncate())
    }

    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (self.x * point.x + self.y * point.y + self.z * point.z + self.w).truncate()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Matrix4 {
        let a = self[0];
        let b = self[1];
        let c = self[2];
        let d = self[3];

        Matrix4::from_cols(
            a * rhs[0][0] + b * rhs[0][1] + c * rhs[0][2] + d * rhs[0][3],
            a * rhs[1][0] + b * rhs[1][1] + c * rhs[1][2] + d * rhs[1][3],
            a * rhs[2][0] + b * rhs[2][1] + c * rhs[2][2] + d * rhs[2][3],
            a * rhs[3][0] + b * rhs[3][1] + c * rhs[3][2] + d * rhs[3][3],
        )
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;

    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Invalid column index"),
        }
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Invalid component index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix3, Matrix4, Vector3};

    fn assert_close(a: Vector3, b: Vector3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn rotation_about_y_turns_x_into_negative_z() {
        let rotation = Matrix4::from_axis_angle(Vector3::unit_y(), 90.0);
        let rotated = rotation.transform_point(Vector3::new(1.0, 0.0, 0.0));
        assert_close(rotated, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn translate_then_scale_applies_scale_first() {
        let m = Matrix4::from_translation(Vector3::new(0.0, 0.0, -4.0)) * Matrix4::from_scale(2.0);
        assert_close(
            m.transform_point(Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(2.0, 2.0, -2.0),
        );
    }

    #[test]
    fn inverse_of_scale_matrix() {
        let m = Matrix4::from_scale(4.0).upper_left();
        let inv = m.inverse().expect("scale matrix is invertible");
        assert_close(inv * Vector3::new(4.0, 8.0, 12.0), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix3::from_cols(Vector3::zero(), Vector3::unit_y(), Vector3::unit_y());
        assert!(m.inverse().is_none());
    }

    #[test]
    fn zero_axis_rotation_is_identity() {
        assert_eq!(
            Matrix4::from_axis_angle(Vector3::zero(), 45.0),
            Matrix4::identity()
        );
    }
}
