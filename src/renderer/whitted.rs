use super::*;
use crate::object::ObjectHit;
use crate::optics;
use crate::scene::EPSILON;

pub const BACKGROUND: RGB = RGB {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// Color seen along `ray` with `depth` levels of tracing left.
///
/// Ambient is always applied, Lambertian diffuse is averaged over the lights
/// that are not shadowed, and reflective materials blend in the color seen
/// along the mirror direction while `depth > 1`. The result is clamped to
/// [0, 1] once, after all terms are combined.
pub fn trace_ray(scene: &Scene, ray: &Ray, depth: u32, stats: &mut TraceStats) -> RGB {
    if depth == 0 {
        stats.depth_exhausted += 1;
        return BACKGROUND;
    }

    stats.rays += 1;
    let hit = match scene.find_nearest(ray) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };
    let material = &hit.object.material;

    let mut color = material.ambient + diffuse(scene, &hit, stats);

    if depth > 1 && material.is_reflective() {
        let dir = optics::reflect(&ray.dir, &hit.ctx.normal).normalize();
        let reflect_ray = Ray::new(hit.ctx.pos + hit.ctx.normal * EPSILON, dir);
        stats.reflections += 1;
        let reflected = trace_ray(scene, &reflect_ray, depth - 1, stats);
        color = color.blend(&reflected, &material.reflective);
    }

    if !color.is_finite() {
        warn!("color is not finite {:?}", color);
        warn!("> ray {:?}", ray);
        warn!("> hit {:?}", hit.ctx);
        stats.non_finite += 1;
    }
    color.clamp()
}

fn diffuse(scene: &Scene, hit: &ObjectHit, stats: &mut TraceStats) -> RGB {
    let lights = scene.lights();
    if lights.is_empty() {
        return RGB::black();
    }

    let ctx = &hit.ctx;
    let mut intensity = 0.0;
    for light in lights {
        stats.shadow_rays += 1;
        if scene.occluded(&ctx.pos, &ctx.normal, light, hit.obj_ix) {
            stats.occluded += 1;
            trace!("object {} at {:?} is shadowed from light {:?}", hit.obj_ix, ctx.pos, light);
            continue;
        }
        let to_light = (light - ctx.pos).normalize();
        intensity += ctx.normal.dot(&to_light).max(0.0);
    }
    hit.object.material.diffuse * (intensity / lights.len() as f32)
}
