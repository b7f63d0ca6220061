use super::Vec3;

/// 4x4 affine transform, column-major for direct upload to WebGL
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Right-handed rotation about +Y: +X turns toward -Z
    pub fn rotation_y_deg(angle_deg: f32) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let mut m = Self::identity();
        m.data[0] = c;
        m.data[2] = -s;
        m.data[8] = s;
        m.data[10] = c;
        m
    }

    /// `self * other`: `other` is applied to points first
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut data = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[col * 4 + row] = (0..4)
                    .map(|k| self.data[k * 4 + row] * other.data[col * 4 + k])
                    .sum();
            }
        }
        Self { data }
    }

    /// Append a translation, like pushing onto a matrix stack
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        self.mul(&Mat4::translation(x, y, z))
    }

    /// Append a rotation about +Y
    pub fn rotate_y_deg(&self, angle_deg: f32) -> Self {
        self.mul(&Mat4::rotation_y_deg(angle_deg))
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0] * p.x + d[4] * p.y + d[8] * p.z + d[12],
            d[1] * p.x + d[5] * p.y + d[9] * p.z + d[13],
            d[2] * p.x + d[6] * p.y + d[10] * p.z + d[14],
        )
    }

    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(&b) < 1e-5
    }

    #[test]
    fn test_identity_keeps_points() {
        let p = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Mat4::identity().transform_point(p), p);
        assert_eq!(Mat4::default(), Mat4::identity());
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert!(close(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(m.translation_part(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let m = Mat4::rotation_y_deg(90.0);
        assert!(close(m.transform_point(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(m.transform_point(Vec3::new(0.0, 5.0, 0.0)), Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn test_chain_applies_last_first() {
        // Rotate about the point (1, 0, 1)
        let m = Mat4::identity()
            .translate(1.0, 0.0, 1.0)
            .rotate_y_deg(90.0)
            .translate(-1.0, 0.0, -1.0);
        assert!(close(m.transform_point(Vec3::new(1.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 1.0)));
        assert!(close(m.transform_point(Vec3::new(2.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0)));
    }
}
