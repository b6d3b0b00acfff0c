use crate::math::{Matrix3, Matrix4, Vector3, Vector4};

/// Phong shading constants handed to the lighting shaders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            diffuse: 0.5,
            specular: 1.0,
            shininess: 5.0,
        }
    }
}

impl PhongMaterial {
    pub fn to_vector(self) -> Vector4 {
        Vector4::new(self.ambient, self.diffuse, self.specular, self.shininess)
    }
}

/// Per-frame placement and animation of one model, mutated by the scene driver.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    pub position: Vector3,
    /// Rotation axis for the spin animation. Zero disables rotation.
    pub animation: Vector3,
    pub scale: f32,
    pub scale_change: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub grow: bool,
    pub material: PhongMaterial,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            animation: Vector3::zero(),
            scale: 1.0,
            scale_change: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
            grow: true,
            material: PhongMaterial::default(),
        }
    }
}

impl TransformState {
    pub fn at(position: Vector3, animation: Vector3) -> Self {
        Self {
            position,
            animation,
            ..Default::default()
        }
    }

    /// Enables scale pulsing between `min` and `max`, starting at `min`.
    pub fn with_pulse(mut self, min: f32, max: f32, change: f32) -> Self {
        self.scale_min = min.min(max);
        self.scale_max = min.max(max);
        self.scale_change = change.abs();
        self.scale = self.scale_min;
        self.grow = true;
        self
    }

    /// Advances the pulse by one step, bouncing at the limits.
    pub fn update_scale(&mut self) {
        if self.grow {
            self.scale += self.scale_change;
            if self.scale >= self.scale_max {
                self.scale = self.scale_max;
                self.grow = false;
            }
        } else {
            self.scale -= self.scale_change;
            if self.scale <= self.scale_min {
                self.scale = self.scale_min;
                self.grow = true;
            }
        }
    }

    /// translate(position) * scale(scale * view_scale) * rotate(rotation_degrees, animation)
    pub fn model_matrix(&self, rotation_degrees: f32, view_scale: f32) -> Matrix4 {
        Matrix4::from_translation(self.position)
            * Matrix4::from_scale(self.scale * view_scale)
            * Matrix4::from_axis_angle(self.animation, rotation_degrees)
    }

    /// Inverse-transpose of the model matrix's upper 3x3; identity when it is singular.
    pub fn normal_matrix(&self, rotation_degrees: f32, view_scale: f32) -> Matrix3 {
        self.model_matrix(rotation_degrees, view_scale)
            .upper_left()
            .inverse()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix3::identity)
    }
}
