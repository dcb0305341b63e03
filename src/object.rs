use crate::shape::{IntersectionContext, Shape};
use crate::*;

pub struct ObjectHit<'a> {
    pub ctx: IntersectionContext,
    pub obj_ix: usize,
    pub object: &'a Object,
}

impl<'a> ObjectHit<'a> {
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(if y.ctx.t < x.ctx.t { y } else { x }),
            (x, None) => x,
            (None, y) => y,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub material: material::Material,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, material: material::Material) -> Self {
        Object {
            shape: shape.into(),
            material,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectList {
    pub objects: Vec<Object>,
}

impl ObjectList {
    /// Nearest hit with `tnear < t < tfar`, skipping `exclude`. On equal `t`
    /// the object listed first wins.
    pub fn test_hit(
        &self,
        ray: &Ray,
        tnear: f32,
        tfar: f32,
        exclude: Option<usize>,
    ) -> Option<ObjectHit> {
        let mut hit = None::<ObjectHit>;
        for (obj_ix, o) in self.objects.iter().enumerate() {
            if exclude == Some(obj_ix) {
                continue;
            }
            let new_hit = o
                .shape
                .test_hit(ray)
                .filter(|ctx| tnear < ctx.t && ctx.t < tfar)
                .map(|ctx| ObjectHit {
                    ctx,
                    obj_ix,
                    object: o,
                });
            hit = ObjectHit::nearer_option(hit, new_hit);
        }
        hit
    }

    pub fn aabb(&self) -> Option<shape::shapes::Aabb> {
        self.objects
            .iter()
            .map(|o| o.shape.aabb())
            .reduce(|bb, another| bb.merge(&another))
    }
}
