use crate::math::{Float, Vector};

/// Half-line queried against geometry. `dir` is not required to be unit length.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray<F: Float = f32, const N: usize = 3> {
    pub origin: Vector<F, N>,
    pub dir: Vector<F, N>,
}

impl<F: Float, const N: usize> Ray<F, N> {
    pub fn new(origin: Vector<F, N>, dir: Vector<F, N>) -> Self {
        Ray { origin, dir }
    }

    pub fn from_to(from: &Vector<F, N>, to: &Vector<F, N>) -> Self {
        Ray::new(*from, (to - from).normalize())
    }

    pub fn at(&self, t: F) -> Vector<F, N> {
        self.origin + self.dir * t
    }
}
