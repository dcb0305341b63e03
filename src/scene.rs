use crate::object::{Object, ObjectHit, ObjectList};
use crate::*;

/// Offset used both as the minimum hit distance and to push secondary ray
/// origins off the surface they start from.
pub const EPSILON: f32 = 1e-3;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: ObjectList,
    lights: Vec<V3>,
}

impl Scene {
    pub fn new(objects: Vec<Object>, lights: Vec<V3>) -> Self {
        Scene {
            objects: ObjectList { objects },
            lights,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.objects.push(object);
    }

    pub fn add_light(&mut self, pos: V3) {
        self.lights.push(pos);
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects.objects
    }

    pub fn lights(&self) -> &[V3] {
        &self.lights
    }

    pub fn bounds(&self) -> Option<shape::shapes::Aabb> {
        self.objects.aabb()
    }

    pub fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32, exclude: Option<usize>) -> Option<ObjectHit> {
        self.objects.test_hit(ray, tnear, tfar, exclude)
    }

    /// Closest object in front of the ray, ignoring hits closer than `EPSILON`.
    pub fn find_nearest(&self, ray: &Ray) -> Option<ObjectHit> {
        self.test_hit(ray, EPSILON, std::f32::MAX, None)
    }

    /// Whether anything other than object `obj_ix` lies between `pos` and `light`.
    /// The shadow ray starts `EPSILON` off the surface along `normal`.
    pub fn occluded(&self, pos: &V3, normal: &V3, light: &V3, obj_ix: usize) -> bool {
        let origin = pos + normal * EPSILON;
        let to_light = light - origin;
        let dist = to_light.norm();
        let ray = Ray::new(origin, to_light / dist);
        self.test_hit(&ray, 0.0, dist, Some(obj_ix)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::materials;
    use crate::shape::shapes::Sphere;
    use crate::util::approx_eq;

    fn two_spheres() -> Scene {
        let mut scene = Scene::default();
        scene.add_object(Object::new(Sphere::new(V3::new(0.0, 0.0, -5.0), 1.0), materials::matte_red()));
        scene.add_object(Object::new(Sphere::new(V3::new(0.0, 0.0, -10.0), 1.0), materials::matte_blue()));
        scene.add_light(V3::new(0.0, 10.0, 0.0));
        scene
    }

    #[test]
    fn nearest_hit_picks_smallest_t() {
        let scene = two_spheres();
        let hit = scene.find_nearest(&Ray::new(V3::zeros(), -V3::z())).unwrap();
        assert_eq!(hit.obj_ix, 0);
        assert!(approx_eq(hit.ctx.t, 4.0, 1e-5));

        // order does not matter
        let mut reversed = Scene::default();
        for o in scene.objects().iter().rev() {
            reversed.add_object(o.clone());
        }
        let hit = reversed.find_nearest(&Ray::new(V3::zeros(), -V3::z())).unwrap();
        assert_eq!(hit.obj_ix, 1);
        assert!(approx_eq(hit.ctx.t, 4.0, 1e-5));
    }

    #[test]
    fn nearest_hit_miss_and_epsilon() {
        let scene = two_spheres();
        assert!(scene.find_nearest(&Ray::new(V3::zeros(), V3::z())).is_none());

        // starting on the surface and leaving it does not re-hit it
        let hit = scene.find_nearest(&Ray::new(V3::new(0.0, 0.0, -4.0), V3::z()));
        assert!(hit.is_none());
    }

    #[test]
    fn shadow_excludes_self_and_respects_light_distance() {
        let scene = two_spheres();
        // back of the near sphere, looking at a light behind the far sphere
        let pos = V3::new(0.0, 0.0, -6.0);
        let normal = -V3::z();
        assert!(scene.occluded(&pos, &normal, &V3::new(0.0, 0.0, -20.0), 0));
        // light between the two spheres
        assert!(!scene.occluded(&pos, &normal, &V3::new(0.0, 0.0, -7.5), 0));
        // a point whose own sphere is the only thing in the way
        assert!(!scene.occluded(&V3::new(0.0, 0.0, -4.0), &V3::z(), &V3::new(0.0, 0.0, 0.0), 0));
    }

    #[test]
    fn bounds_cover_all_objects() {
        let bb = two_spheres().bounds().unwrap();
        assert!(bb.contains(&V3::new(1.0, 1.0, -4.0)));
        assert!(bb.contains(&V3::new(-1.0, -1.0, -11.0)));
        assert!(Scene::default().bounds().is_none());
    }
}
