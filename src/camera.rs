use crate::*;

#[derive(Clone, Debug)]
pub struct PinHole {
    origin: V3,
    forward: V3,
    right: V3,
    up: V3,
    width: u32,
    height: u32,
    half_tan: f32,
    aspect: f32,
}

impl PinHole {
    pub fn new(origin: V3, view_at: V3, view_up: V3, fov_degree: f32, width: u32, height: u32) -> Self {
        let forward = (view_at - origin).normalize();
        let right = forward.cross(&view_up).normalize();
        let up = right.cross(&forward).normalize();
        let fov_rad = fov_degree.to_radians();
        PinHole {
            origin,
            forward,
            right,
            up,
            width,
            height,
            half_tan: (fov_rad / 2.0).tan(),
            aspect: width as f32 / height as f32,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Unit-direction ray through the center of pixel `(x, y)`, `y` growing downward.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let ndc_x = (x as f32 + 0.5) / self.width as f32;
        let ndc_y = (y as f32 + 0.5) / self.height as f32;
        let screen_x = (2.0 * ndc_x - 1.0) * self.aspect * self.half_tan;
        let screen_y = (1.0 - 2.0 * ndc_y) * self.half_tan;
        let dir = self.forward + screen_x * self.right + screen_y * self.up;
        Ray::new(self.origin, dir.normalize())
    }
}

#[test]
fn test_rays_fan_out_from_the_eye() {
    let camera = PinHole::new(V3::new(0.0, 1.0, 5.0), V3::new(0.0, 1.0, 0.0), V3::y(), 90.0, 4, 2);
    let ray = camera.ray_for_pixel(2, 1);
    assert_eq!(ray.origin, V3::new(0.0, 1.0, 5.0));
    assert!((ray.dir.norm() - 1.0).abs() < 1e-6);

    let top_left = camera.ray_for_pixel(0, 0).dir;
    assert!(top_left.x < 0.0 && top_left.y > 0.0 && top_left.z < 0.0);
    let bottom_right = camera.ray_for_pixel(3, 1).dir;
    assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    // symmetric about the view axis
    assert!((top_left.x + bottom_right.x).abs() < 1e-6);
}
