use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: RGB,
    pub diffuse: RGB,
    pub reflective: RGB,
}

/// Reflective channels at or below this are treated as non-reflective.
pub const REFLECTIVE_THRESHOLD: f32 = 0.01;

impl Material {
    pub fn new(ambient: RGB, diffuse: RGB, reflective: RGB) -> Self {
        Material {
            ambient,
            diffuse,
            reflective,
        }
    }

    pub fn new_matte(ambient: RGB, diffuse: RGB) -> Self {
        Self::new(ambient, diffuse, RGB::black())
    }

    pub fn new_mirror(reflective: RGB) -> Self {
        Self::new(RGB::black(), RGB::black(), reflective)
    }

    pub fn is_reflective(&self) -> bool {
        self.reflective.max() > REFLECTIVE_THRESHOLD
    }
}

pub mod materials {
    use super::*;

    const AMBIENT: f32 = 0.1;
    const REFLECTIVE: f32 = 0.8;

    fn stock(diffuse: RGB, reflective: f32) -> Material {
        Material::new(RGB::all(AMBIENT), diffuse, RGB::all(reflective))
    }

    pub fn matte_black() -> Material {
        stock(RGB::all(0.1), 0.0)
    }
    pub fn matte_red() -> Material {
        stock(RGB::new(0.8, 0.1, 0.1), 0.0)
    }
    pub fn matte_green() -> Material {
        stock(RGB::new(0.1, 0.8, 0.1), 0.0)
    }
    pub fn matte_blue() -> Material {
        stock(RGB::new(0.1, 0.1, 0.8), 0.0)
    }
    pub fn matte_white() -> Material {
        stock(RGB::all(0.8), 0.0)
    }
    pub fn reflective_black() -> Material {
        stock(RGB::all(0.1), REFLECTIVE)
    }
    pub fn reflective_white() -> Material {
        stock(RGB::all(0.8), REFLECTIVE)
    }
    pub fn reflective_red() -> Material {
        stock(RGB::new(0.8, 0.1, 0.1), REFLECTIVE)
    }
    pub fn reflective_green() -> Material {
        stock(RGB::new(0.1, 0.8, 0.1), REFLECTIVE)
    }
    pub fn reflective_blue() -> Material {
        stock(RGB::new(0.1, 0.1, 0.8), REFLECTIVE)
    }
}

#[test]
fn test_reflective_threshold() {
    assert!(!materials::matte_red().is_reflective());
    assert!(materials::reflective_red().is_reflective());
    assert!(!Material::new_mirror(RGB::new(0.0, 0.01, 0.0)).is_reflective());
    assert!(Material::new_mirror(RGB::new(0.0, 0.02, 0.0)).is_reflective());
}
