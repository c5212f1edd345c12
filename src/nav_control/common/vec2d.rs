use num::traits::{Float, Num, NumCast};
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D vector generic over any numeric type.
///
/// Used both as a point in simulation space (kilometres) and as a displacement
/// between two such points.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, serde::Serialize, serde::Deserialize)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T> Vec2D<T>
where
    T: Float,
{
    /// Computes the magnitude (absolute value) of the vector.
    ///
    /// # Returns
    /// The magnitude of the vector as a scalar of type `T`.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another vector (`other`).
    ///
    /// # Arguments
    /// * `other` - The target vector.
    ///
    /// # Returns
    /// A new vector representing the direction from `self` to `other`.
    pub fn to(&self, other: &Vec2D<T>) -> Vec2D<T> { Vec2D::new(other.x - self.x, other.y - self.y) }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() { self } else { Self::new(self.x / magnitude, self.y / magnitude) }
    }

    /// Computes the Euclidean distance between the current vector and another vector.
    ///
    /// # Arguments
    /// * `other` - The other vector to compute the distance to.
    ///
    /// # Returns
    /// The Euclidean distance as a scalar of type `T`.
    pub fn euclid_distance(&self, other: &Self) -> T {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Checks whether the current vector lies strictly inside a circle of radius `rad`
    /// around `center`.
    pub fn strictly_within(&self, center: &Self, rad: T) -> bool { self.euclid_distance(center) < rad }

    /// Returns `true` if neither component is `NaN` or infinite.
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Num + NumCast + Copy> Vec2D<T> {
    /// Computes the dot product of the current vector with another vector.
    ///
    /// ```text
    /// dot_product = (x1 * x2) + (y1 * y2)
    /// ```
    pub fn dot(self, other: Vec2D<T>) -> T { self.x * other.x + self.y * other.y }

    /// Creates a zero vector (x = 0, y = 0).
    pub fn zero() -> Self { Self::new(T::zero(), T::zero()) }

    /// Converts both components to another numeric type, returning `None`
    /// if either component is not representable in `D`.
    pub fn cast<D: NumCast>(self) -> Option<Vec2D<D>> {
        Some(Vec2D { x: D::from(self.x)?, y: D::from(self.y)? })
    }
}

impl<T: Num> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `+` operator for two `Vec2D` objects.
    fn add(self, rhs: Vec2D<T>) -> Self::Output { Self::Output { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<T: Num> Sub for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `-` operator for two `Vec2D` objects.
    fn sub(self, rhs: Vec2D<T>) -> Self::Output { Self::Output { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<T: Num + Copy> Mul<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `*` operator for a `Vec2D` and a scalar.
    fn mul(self, rhs: T) -> Self::Output { Self::Output { x: self.x * rhs, y: self.y * rhs } }
}

impl<T: Num + Copy> Div<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `/` operator for a `Vec2D` and a scalar.
    fn div(self, rhs: T) -> Self::Output { Self::Output { x: self.x / rhs, y: self.y / rhs } }
}

impl<T> From<(T, T)> for Vec2D<T> {
    /// Creates a `Vec2D` from a tuple of (x, y) values.
    fn from(tuple: (T, T)) -> Self { Vec2D { x: tuple.0, y: tuple.1 } }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
