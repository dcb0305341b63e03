use crate::math::{self, lit, normalized, Float, Vector};
use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionContext<F: Float = f32, const N: usize = 3> {
    pub t: F,
    pub pos: Vector<F, N>,
    /// Unit normal facing the side the ray came from.
    pub normal: Vector<F, N>,
    /// Barycentric weight of the second triangle vertex; zero for other shapes.
    pub u: F,
    /// Barycentric weight of the third triangle vertex; zero for other shapes.
    pub v: F,
}

impl<F: Float, const N: usize> IntersectionContext<F, N> {
    fn new(t: F, pos: Vector<F, N>, normal: Vector<F, N>) -> Self {
        IntersectionContext {
            t,
            pos,
            normal,
            u: F::zero(),
            v: F::zero(),
        }
    }
}

trait ShapeImpl {
    fn test_hit(&self, ray: &Ray) -> Option<IntersectionContext>;
    fn aabb(&self) -> shapes::Aabb;
}

pub mod shapes {
    use super::*;

    /// Below this `|n·d|` a ray counts as parallel to a triangle's plane.
    pub const PARALLEL_EPSILON: f64 = 1e-6;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Sphere<F: Float = f32, const N: usize = 3> {
        pub center: Vector<F, N>,
        pub radius: F,
    }

    impl<F: Float, const N: usize> Sphere<F, N> {
        pub fn new(center: Vector<F, N>, radius: F) -> Self {
            Sphere { center, radius }
        }

        /// Distance along `ray` to the visible surface: the exit point when the
        /// origin is inside, otherwise the nearest root in front of the origin.
        pub fn intersect_distance(&self, ray: &Ray<F, N>) -> Option<F> {
            let zero = F::zero();
            let oc = ray.origin - self.center;
            let a = ray.dir.dot(&ray.dir);
            let b = lit::<F>(2.0) * oc.dot(&ray.dir);
            let c = oc.dot(&oc) - self.radius * self.radius;
            let discriminant = b * b - lit::<F>(4.0) * a * c;
            if discriminant < zero {
                return None;
            }

            let sqrtd = discriminant.sqrt();
            let tnear = (-b - sqrtd) / (a + a);
            let tfar = (-b + sqrtd) / (a + a);
            // c <= 0 is exactly "origin inside"
            let t = if c <= zero || tnear < zero { tfar } else { tnear };
            if t > zero {
                Some(t)
            } else {
                None
            }
        }

        pub fn intersect(&self, ray: &Ray<F, N>) -> Option<IntersectionContext<F, N>> {
            let t = self.intersect_distance(ray)?;
            let pos = ray.at(t);
            let mut normal = normalized(pos - self.center);
            if self.contains(&ray.origin) {
                normal = -normal;
            }
            Some(IntersectionContext::new(t, pos, normal))
        }

        pub fn intersects_sphere(&self, another: &Self) -> bool {
            let r = self.radius + another.radius;
            (self.center - another.center).norm_squared() <= r * r
        }

        pub fn contains(&self, p: &Vector<F, N>) -> bool {
            (p - self.center).norm_squared() <= self.radius * self.radius
        }
    }

    impl ShapeImpl for Sphere {
        fn test_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
            self.intersect(ray)
        }

        fn aabb(&self) -> Aabb {
            Aabb::new(self.center, V3::repeat(self.radius))
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Triangle<F: Float = f32> {
        pub a: Vector<F, 3>,
        pub b: Vector<F, 3>,
        pub c: Vector<F, 3>,
        pub na: Vector<F, 3>,
        pub nb: Vector<F, 3>,
        pub nc: Vector<F, 3>,
    }

    impl<F: Float> Triangle<F> {
        /// Flat triangle; the normal follows the winding as `(c - a) × (b - a)`.
        pub fn new(a: Vector<F, 3>, b: Vector<F, 3>, c: Vector<F, 3>) -> Self {
            let n = normalized((c - a).cross(&(b - a)));
            Self::with_normal(a, b, c, n)
        }

        pub fn with_normal(a: Vector<F, 3>, b: Vector<F, 3>, c: Vector<F, 3>, n: Vector<F, 3>) -> Self {
            Self::with_vertex_normals([a, b, c], [n, n, n])
        }

        pub fn with_vertex_normals(vs: [Vector<F, 3>; 3], ns: [Vector<F, 3>; 3]) -> Self {
            let [a, b, c] = vs;
            let [na, nb, nc] = ns;
            Triangle {
                a,
                b,
                c,
                na: normalized(na),
                nb: normalized(nb),
                nc: normalized(nc),
            }
        }

        pub fn area(&self) -> F {
            (self.b - self.a).cross(&(self.c - self.a)).norm() / lit::<F>(2.0)
        }

        pub fn centroid(&self) -> Vector<F, 3> {
            (self.a + self.b + self.c) / lit::<F>(3.0)
        }

        pub fn intersect(&self, ray: &Ray<F, 3>) -> Option<IntersectionContext<F, 3>> {
            let zero = F::zero();
            let ab = self.b - self.a;
            let ac = self.c - self.a;
            let n = ab.cross(&ac);
            let double_area = n.norm();
            debug_assert!(double_area > zero, "degenerate triangle");

            let n_dot_dir = n.dot(&ray.dir) / double_area;
            if n_dot_dir.abs() < lit::<F>(PARALLEL_EPSILON) {
                return None;
            }
            let t = n.dot(&(self.a - ray.origin)) / double_area / n_dot_dir;
            if t <= zero {
                return None;
            }

            let p = ray.at(t);
            let inside_edge =
                |from: &Vector<F, 3>, to: &Vector<F, 3>| (to - from).cross(&(p - from)).dot(&n) >= zero;
            if !(inside_edge(&self.a, &self.b)
                && inside_edge(&self.b, &self.c)
                && inside_edge(&self.c, &self.a))
            {
                return None;
            }

            let ap = p - self.a;
            let u = ac.cross(&ap).norm() / double_area;
            let v = ap.cross(&ab).norm() / double_area;
            let w = F::one() - u - v;
            let mut normal = normalized(self.na * w + self.nb * u + self.nc * v);
            if normal.dot(&ray.dir) > zero {
                normal = -normal;
            }
            Some(IntersectionContext {
                t,
                pos: p,
                normal,
                u,
                v,
            })
        }
    }

    impl ShapeImpl for Triangle {
        fn test_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
            self.intersect(ray)
        }

        fn aabb(&self) -> Aabb {
            Aabb::around(&self.a).include(&self.b).include(&self.c)
        }
    }

    /// Parametric interval of a ray's line inside a box, with the axes that bound it.
    #[derive(Clone, Copy, Debug)]
    pub struct Slab<F> {
        pub tmin: F,
        pub tmax: F,
        pub near_axis: usize,
        pub far_axis: usize,
    }

    impl<F: Float> Slab<F> {
        /// The interval is non-empty and not entirely behind the origin.
        pub fn is_hit(&self) -> bool {
            self.tmax >= self.tmin && self.tmax >= F::zero()
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Aabb<F: Float = f32, const N: usize = 3> {
        pub center: Vector<F, N>,
        pub half_edge_length: Vector<F, N>,
    }

    impl<F: Float, const N: usize> Aabb<F, N> {
        pub fn new(center: Vector<F, N>, half_edge_length: Vector<F, N>) -> Self {
            Aabb {
                center,
                half_edge_length,
            }
        }

        pub fn from_corners(a: &Vector<F, N>, b: &Vector<F, N>) -> Self {
            let mins = a.zip_map(b, math::min);
            let maxs = a.zip_map(b, math::max);
            let two = lit::<F>(2.0);
            Aabb::new((mins + maxs) / two, (maxs - mins) / two)
        }

        pub fn around(p: &Vector<F, N>) -> Self {
            Aabb::new(*p, Vector::zeros())
        }

        pub fn min(&self) -> Vector<F, N> {
            self.center - self.half_edge_length
        }

        pub fn max(&self) -> Vector<F, N> {
            self.center + self.half_edge_length
        }

        pub fn merge(&self, another: &Self) -> Self {
            let mins = self.min().zip_map(&another.min(), math::min);
            let maxs = self.max().zip_map(&another.max(), math::max);
            Aabb::from_corners(&mins, &maxs)
        }

        pub fn include(&self, p: &Vector<F, N>) -> Self {
            self.merge(&Aabb::around(p))
        }

        pub fn contains(&self, p: &Vector<F, N>) -> bool {
            (0..N).all(|i| (p[i] - self.center[i]).abs() <= self.half_edge_length[i])
        }

        pub fn intersects_aabb(&self, another: &Self) -> bool {
            let (amin, amax) = (self.min(), self.max());
            let (bmin, bmax) = (another.min(), another.max());
            (0..N).all(|i| amin[i] <= bmax[i] && bmin[i] <= amax[i])
        }

        /// Slab interval of the line through `ray`. Zero direction components
        /// produce infinite slab bounds, which the min/max tracking absorbs.
        pub fn slab(&self, ray: &Ray<F, N>) -> Slab<F> {
            Self::slab_of(&self.center, &self.half_edge_length, ray)
        }

        fn slab_of(center: &Vector<F, N>, half: &Vector<F, N>, ray: &Ray<F, N>) -> Slab<F> {
            let mut slab = Slab {
                tmin: -F::infinity(),
                tmax: F::infinity(),
                near_axis: 0,
                far_axis: 0,
            };
            for i in 0..N {
                let inv = F::one() / ray.dir[i];
                let t1 = (center[i] - half[i] - ray.origin[i]) * inv;
                let t2 = (center[i] + half[i] - ray.origin[i]) * inv;
                let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
                if near > slab.tmin {
                    slab.tmin = near;
                    slab.near_axis = i;
                }
                if far < slab.tmax {
                    slab.tmax = far;
                    slab.far_axis = i;
                }
            }
            slab
        }

        pub fn intersects_ray(&self, ray: &Ray<F, N>) -> bool {
            self.slab(ray).is_hit()
        }

        /// Whether `self`, translated along `direction`, collides with `another`.
        /// Tested as a ray from `self.center` against `another` grown by
        /// `self`'s half extents.
        pub fn intersects_moving(&self, another: &Self, direction: &Vector<F, N>) -> bool {
            self.sweep_slab(another, direction).is_hit()
        }

        /// Contact normal of the sweep: `-direction` on the axis of first contact,
        /// zero elsewhere. The zero vector means no collision.
        pub fn sweep_intersects(&self, another: &Self, direction: &Vector<F, N>) -> Vector<F, N> {
            let slab = self.sweep_slab(another, direction);
            let mut normal = Vector::zeros();
            if slab.is_hit() {
                normal[slab.near_axis] = -direction[slab.near_axis];
            }
            normal
        }

        fn sweep_slab(&self, another: &Self, direction: &Vector<F, N>) -> Slab<F> {
            let half = self.half_edge_length + another.half_edge_length;
            let ray = Ray::new(self.center, *direction);
            Self::slab_of(&another.center, &half, &ray)
        }

        /// First surface point in front of the origin; the exit face when the
        /// origin is inside the box.
        pub fn intersect(&self, ray: &Ray<F, N>) -> Option<IntersectionContext<F, N>> {
            let zero = F::zero();
            let slab = self.slab(ray);
            if !slab.is_hit() || slab.tmax <= zero {
                return None;
            }
            let (t, axis) = if slab.tmin > zero {
                (slab.tmin, slab.near_axis)
            } else {
                (slab.tmax, slab.far_axis)
            };
            let mut normal = Vector::zeros();
            normal[axis] = if ray.dir[axis] > zero { -F::one() } else { F::one() };
            Some(IntersectionContext::new(t, ray.at(t), normal))
        }
    }

    impl ShapeImpl for Aabb {
        fn test_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
            self.intersect(ray)
        }

        fn aabb(&self) -> Aabb {
            self.clone()
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Triangle(shapes::Triangle),
    Aabb(shapes::Aabb),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Triangle, Aabb]}

use Shape::*;
impl Shape {
    pub fn test_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
        match self {
            Sphere(s) => s.test_hit(ray),
            Triangle(s) => s.test_hit(ray),
            Aabb(s) => s.test_hit(ray),
        }
    }

    pub fn aabb(&self) -> shapes::Aabb {
        match self {
            Sphere(s) => s.aabb(),
            Triangle(s) => s.aabb(),
            Aabb(s) => s.aabb(),
        }
    }
}
