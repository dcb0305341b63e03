use nalgebra::Vector3;

pub type V3 = Vector3<f32>;

#[macro_use]
pub mod util;

pub mod camera;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod material;
pub mod math;
pub mod object;
pub mod optics;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;

pub use error::{Error, Result};
pub use ray::Ray;
pub use rgb::RGB;
