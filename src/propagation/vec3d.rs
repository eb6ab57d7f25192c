use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

/// A 3D vector in kilometres.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Clone, Copy, Default)]
pub struct Vec3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub const fn x(&self) -> f64 { self.x }
    pub const fn y(&self) -> f64 { self.y }
    pub const fn z(&self) -> f64 { self.z }

    /// Euclidean length.
    pub fn abs(&self) -> f64 { (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt() }

    /// Euclidean distance between `self` and `other`.
    pub fn euclid_distance(&self, other: &Self) -> f64 { (*self - *other).abs() }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}

impl Display for Vec3D {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}
