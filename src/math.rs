//! Vector arithmetic, `dot`, `cross` and `norm` come from nalgebra.
use nalgebra::{RealField, SVector};

pub type Vector<F, const N: usize> = SVector<F, N>;

pub trait Float: RealField + Copy {
    fn infinity() -> Self;
}

impl Float for f32 {
    fn infinity() -> Self {
        f32::INFINITY
    }
}

impl Float for f64 {
    fn infinity() -> Self {
        f64::INFINITY
    }
}

pub fn lit<F: Float>(x: f64) -> F {
    nalgebra::convert(x)
}

pub fn normalize<F: Float, const N: usize>(v: &mut Vector<F, N>) {
    debug_assert!(v.norm_squared() > F::zero(), "normalizing a zero-length vector");
    v.normalize_mut();
}

pub fn normalized<F: Float, const N: usize>(mut v: Vector<F, N>) -> Vector<F, N> {
    normalize(&mut v);
    v
}

pub fn min<F: Float>(x: F, y: F) -> F {
    if y < x {
        y
    } else {
        x
    }
}

pub fn max<F: Float>(x: F, y: F) -> F {
    if y > x {
        y
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::approx_eq;
    use crate::V3;

    #[test]
    fn arithmetic() {
        let a = V3::new(1.0, 2.0, 3.0);
        let b = V3::new(-2.0, 0.5, 4.0);
        assert_eq!(a + b, V3::new(-1.0, 2.5, 7.0));
        assert_eq!(a - b, V3::new(3.0, 1.5, -1.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert!(approx_eq(a.dot(&b), -2.0 + 1.0 + 12.0, 1e-6));
        assert_eq!(a[2], 3.0);
    }

    #[test]
    fn cross_is_orthogonal() {
        let x = V3::x();
        let y = V3::y();
        assert_eq!(x.cross(&y), V3::z());
        let a = V3::new(1.0, 2.0, 3.0);
        let b = V3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert!(approx_eq(c.dot(&a), 0.0, 1e-5));
        assert!(approx_eq(c.dot(&b), 0.0, 1e-5));
    }

    #[test]
    fn normalize_in_place() {
        let mut v = V3::new(3.0, 0.0, 4.0);
        assert!(approx_eq(v.norm(), 5.0, 1e-6));
        normalize(&mut v);
        assert!(approx_eq(v.norm(), 1.0, 1e-6));
        assert!(approx_eq(v[0], 0.6, 1e-6));

        let w: Vector<f64, 2> = normalized(Vector::<f64, 2>::new(0.0, -2.0));
        assert_eq!(w, Vector::<f64, 2>::new(0.0, -1.0));
    }

    #[test]
    fn min_max_with_infinity() {
        assert_eq!(min(1.0f32, f32::INFINITY), 1.0);
        assert_eq!(max(1.0f32, f32::NEG_INFINITY), 1.0);
        assert_eq!(lit::<f32>(0.5), 0.5);
        assert_eq!(min(-<f64 as Float>::infinity(), 0.0), f64::NEG_INFINITY);
    }
}
