use std::ops::{Add, Index, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGB {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        RGB { r, g, b }
    }

    pub fn all(x: f32) -> Self {
        Self::new(x, x, x)
    }

    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn max(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Clamps to [0, 1]; NaN channels become 0.
    pub fn clamp(&self) -> Self {
        let c = |x: f32| if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        RGB {
            r: c(self.r),
            g: c(self.g),
            b: c(self.b),
        }
    }

    /// Per-channel `(1 - weight) * self + weight * other`.
    pub fn blend(&self, other: &Self, weight: &Self) -> Self {
        (RGB::all(1.0) - weight) * self + *weight * other
    }

    pub fn to_8bit(&self) -> [u8; 3] {
        let q = |x: f32| (x * 255.0).clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl Index<usize> for RGB {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("RGB index out of range: {}", i),
        }
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl<'a> Sub<&'a Self> for RGB {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul<f32> for RGB {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

#[test]
fn test_blend_and_clamp() {
    let base = RGB::new(0.2, 0.4, 0.6);
    let other = RGB::all(1.0);
    assert_eq!(base.blend(&other, &RGB::all(0.0)), base);
    assert_eq!(base.blend(&other, &RGB::all(1.0)), other);
    let half = base.blend(&other, &RGB::new(0.5, 0.0, 1.0));
    assert!((half.r - 0.6).abs() < 1e-6);
    assert_eq!(half.g, 0.4);
    assert_eq!(half.b, 1.0);

    assert_eq!(RGB::new(-0.5, 0.5, 1.5).clamp(), RGB::new(0.0, 0.5, 1.0));
    let wild = RGB::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
    assert!(!wild.is_finite());
    assert_eq!(wild.clamp(), RGB::new(0.0, 1.0, 0.0));
}

#[test]
fn test_to_8bit() {
    assert_eq!(RGB::new(0.0, 1.0, 0.5).to_8bit(), [0, 255, 127]);
    assert_eq!(RGB::new(-1.0, 2.0, 0.999).to_8bit(), [0, 255, 254]);
}
