use std::fmt::Display;
use std::ops::Add;

/// A 3D vector of `f64` components, used for spacecraft position and velocity.
#[derive(Debug, PartialEq, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct Vec3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0) }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() && self.z.is_finite() }

    /// Computes the magnitude of the vector.
    pub fn abs(&self) -> f64 { (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt() }

    /// Computes the Euclidean distance to `other`.
    pub fn euclid_distance(&self, other: &Self) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2)).sqrt()
    }

    /// Scales every component by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self { Self::new(self.x * factor, self.y * factor, self.z * factor) }
}

impl Add for Vec3D {
    type Output = Vec3D;

    fn add(self, rhs: Self) -> Self::Output { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}

impl Display for Vec3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}
