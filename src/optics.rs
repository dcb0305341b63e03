use crate::math::{lit, Float, Vector};

/// Mirror direction of `dir` about `normal`: `d - 2(d·n)n`. `normal` must be unit length.
pub fn reflect<F: Float, const N: usize>(dir: &Vector<F, N>, normal: &Vector<F, N>) -> Vector<F, N> {
    dir - normal * (lit::<F>(2.0) * dir.dot(normal))
}

/// Snell transmission of a unit `dir` through a surface with unit `normal`,
/// `index` being the ratio of refractive indices. `None` on total internal
/// reflection.
pub fn refract<F: Float, const N: usize>(
    index: F,
    normal: &Vector<F, N>,
    dir: &Vector<F, N>,
) -> Option<Vector<F, N>> {
    let one = F::one();
    let cos_theta = dir.dot(normal);
    let sin2_phi = index * index * (one - cos_theta * cos_theta);
    if sin2_phi > one {
        return None;
    }
    let cos_phi = (one - sin2_phi).sqrt();
    Some((dir - normal * cos_theta) * index - normal * cos_phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::approx_eq;
    use crate::V3;

    #[test]
    fn reflect_flips_normal_component() {
        let d = V3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(&d, &V3::y());
        assert!(approx_eq(r.x, d.x, 1e-6));
        assert!(approx_eq(r.y, -d.y, 1e-6));
        assert!(approx_eq(r.norm(), 1.0, 1e-6));
    }

    #[test]
    fn refract_straight_through_at_normal_incidence() {
        let n = V3::z();
        let d = -V3::z();
        let t = refract(1.0 / 1.5, &n, &d).unwrap();
        assert!(approx_eq(t.x, 0.0, 1e-6));
        assert!(approx_eq(t.z, -1.0, 1e-6));
    }

    #[test]
    fn refract_unit_index_keeps_tangent() {
        let n = V3::z();
        let d = V3::new(0.6, 0.0, -0.8);
        let t = refract(1.0, &n, &d).unwrap();
        assert!(approx_eq(t.x, 0.6, 1e-5));
        assert!(approx_eq(t.z, -0.8, 1e-5));
    }

    #[test]
    fn total_internal_reflection() {
        let n = V3::z();
        let grazing = V3::new(0.9, 0.0, -(1.0f32 - 0.81).sqrt());
        assert!(refract(1.5, &n, &grazing).is_none());
        assert!(refract(1.0 / 1.5, &n, &grazing).is_some());
    }
}
