use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::utils::clamp;

/// Immutable 2D vector with `x` and `y` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2D {
    pub x: f64,
    pub y: f64,
}

impl Vec2D {
    pub const ZERO: Vec2D = Vec2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply `f(value, index)` to both components; index 0 is `x`, 1 is `y`.
    pub fn map<F>(self, mut f: F) -> Vec2D
    where
        F: FnMut(f64, usize) -> f64,
    {
        Vec2D::new(f(self.x, 0), f(self.y, 1))
    }

    /// Apply one function per component.
    pub fn apply<FX, FY>(self, fx: FX, fy: FY) -> Vec2D
    where
        FX: FnOnce(f64) -> f64,
        FY: FnOnce(f64) -> f64,
    {
        Vec2D::new(fx(self.x), fy(self.y))
    }

    /// Combine component-wise with `other` through `f(a, b, index)`.
    pub fn merge<F>(self, other: Vec2D, mut f: F) -> Vec2D
    where
        F: FnMut(f64, f64, usize) -> f64,
    {
        Vec2D::new(f(self.x, other.x, 0), f(self.y, other.y, 1))
    }

    /// Shift by separate `x` and `y` amounts.
    pub fn offset(self, x: f64, y: f64) -> Vec2D {
        self + Vec2D::new(x, y)
    }

    pub fn dot(self, other: Vec2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Vec2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn squared_norm(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn norm(self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Vec2D {
        let norm = self.norm();
        if norm > 0.0 {
            self / norm
        } else {
            self
        }
    }

    pub fn clamp(self, min: f64, max: f64) -> Vec2D {
        self.clamp_xy(min, max, min, max)
    }

    pub fn clamp_xy(self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Vec2D {
        Vec2D::new(clamp(self.x, x_min, x_max), clamp(self.y, y_min, y_max))
    }
}

impl From<(f64, f64)> for Vec2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2D::new(x, y)
    }
}

impl From<Vec2D> for (f64, f64) {
    fn from(v: Vec2D) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vec2D {
    type Output = Vec2D;

    fn add(self, rhs: Vec2D) -> Vec2D {
        self.merge(rhs, |a, b, _| a + b)
    }
}

impl Add<f64> for Vec2D {
    type Output = Vec2D;

    fn add(self, rhs: f64) -> Vec2D {
        self.map(|v, _| v + rhs)
    }
}

impl Sub for Vec2D {
    type Output = Vec2D;

    fn sub(self, rhs: Vec2D) -> Vec2D {
        self.merge(rhs, |a, b, _| a - b)
    }
}

impl Sub<f64> for Vec2D {
    type Output = Vec2D;

    fn sub(self, rhs: f64) -> Vec2D {
        self.map(|v, _| v - rhs)
    }
}

impl Mul for Vec2D {
    type Output = Vec2D;

    fn mul(self, rhs: Vec2D) -> Vec2D {
        self.merge(rhs, |a, b, _| a * b)
    }
}

impl Mul<f64> for Vec2D {
    type Output = Vec2D;

    fn mul(self, rhs: f64) -> Vec2D {
        self.map(|v, _| v * rhs)
    }
}

impl Div for Vec2D {
    type Output = Vec2D;

    fn div(self, rhs: Vec2D) -> Vec2D {
        self.merge(rhs, |a, b, _| a / b)
    }
}

impl Div<f64> for Vec2D {
    type Output = Vec2D;

    fn div(self, rhs: f64) -> Vec2D {
        self.map(|v, _| v / rhs)
    }
}

impl Neg for Vec2D {
    type Output = Vec2D;

    fn neg(self) -> Vec2D {
        self.map(|v, _| -v)
    }
}

impl fmt::Display for Vec2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2D({}, {})", self.x, self.y)
    }
}
