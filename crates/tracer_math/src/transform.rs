// Transform builders for Matrix4
//
// Each fluent builder left-multiplies the receiver, so a chain like
// `Matrix4::identity().rotate_x(a).scale(..).translate(..)` applies the
// rotation first and the translation last.

use crate::{Matrix4, MathResult, Vector4};

/// Translation by (x, y, z). Directions are unaffected.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the x axis (left-handed, radians).
pub fn rotation_x(radians: f64) -> Matrix4 {
    let (s, c) = radians.sin_cos();
    Matrix4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(radians: f64) -> Matrix4 {
    let (s, c) = radians.sin_cos();
    Matrix4::new([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(radians: f64) -> Matrix4 {
    let (s, c) = radians.sin_cos();
    Matrix4::new([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shear: each component moves in proportion to the other two.
/// `xy` is "x in proportion to y", and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4 {
    Matrix4::new([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

impl Matrix4 {
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Matrix4 {
        translation(x, y, z).multiply(self)
    }

    pub fn scale(&self, x: f64, y: f64, z: f64) -> Matrix4 {
        scaling(x, y, z).multiply(self)
    }

    pub fn rotate_x(&self, radians: f64) -> Matrix4 {
        rotation_x(radians).multiply(self)
    }

    pub fn rotate_y(&self, radians: f64) -> Matrix4 {
        rotation_y(radians).multiply(self)
    }

    pub fn rotate_z(&self, radians: f64) -> Matrix4 {
        rotation_z(radians).multiply(self)
    }

    pub fn shear(&self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4 {
        shearing(xy, xz, yx, yz, zx, zy).multiply(self)
    }

    /// World-to-camera transform for an eye at `from` looking at `to`.
    ///
    /// Fails when `from == to` or `up` is the zero vector.
    pub fn view(from: Vector4, to: Vector4, up: Vector4) -> MathResult<Matrix4> {
        let forward = (to - from).normalize()?;
        let left = forward.cross(up.normalize()?);
        let true_up = left.cross(forward);

        let orientation = Matrix4::new([
            [left.x(), left.y(), left.z(), 0.0],
            [true_up.x(), true_up.y(), true_up.z(), 0.0],
            [-forward.x(), -forward.y(), -forward.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Ok(orientation.multiply(&translation(-from.x(), -from.y(), -from.z())))
    }

    /// Apply this matrix to a point (`w` forced to 1).
    #[inline]
    pub fn transform_point(&self, point: Vector4) -> Vector4 {
        self.transform(point.with_w(1.0))
    }

    /// Apply this matrix to a direction (`w` forced to 0), ignoring translation.
    #[inline]
    pub fn transform_vector(&self, vector: Vector4) -> Vector4 {
        self.transform(vector.with_w(0.0))
    }
}
