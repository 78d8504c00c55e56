use std::ops::{Add, Sub};

/// Plain 2D vector in screen space (y grows downward).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    /// Clamps each axis independently to `[-scale, scale]`, producing a
    /// square bound rather than a circular cap. A component is only rewritten
    /// when `abs(c) > scale`, so `signum` never sees zero.
    pub fn clamp_axes(self, scale: f64) -> Vec2 {
        let bound = |c: f64| if c.abs() > scale { c.signum() * scale } else { c };
        Vec2 {
            x: bound(self.x),
            y: bound(self.y),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
