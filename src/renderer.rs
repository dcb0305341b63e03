use crate::camera::PinHole;
use crate::image::Image;
use crate::scene::Scene;
use crate::*;

use log::*;
use std::sync::Arc;
use std::thread;

pub mod whitted;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStats {
    pub rays: usize,
    pub shadow_rays: usize,
    pub occluded: usize,
    pub reflections: usize,
    pub depth_exhausted: usize,
    pub non_finite: usize,
}

impl TraceStats {
    pub fn merge(&mut self, another: &Self) {
        self.rays += another.rays;
        self.shadow_rays += another.shadow_rays;
        self.occluded += another.occluded;
        self.reflections += another.reflections;
        self.depth_exhausted += another.depth_exhausted;
        self.non_finite += another.non_finite;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Recursion budget per primary ray; 1 means no reflections.
    pub depth: u32,
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            depth: 2,
            nthread: num_cpus::get(),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render_pixel(
        scene: &Scene,
        camera: &PinHole,
        x: u32,
        y: u32,
        depth: u32,
        stats: &mut TraceStats,
    ) -> RGB {
        let ray = camera.ray_for_pixel(x, y);
        whitted::trace_ray(scene, &ray, depth, stats)
    }

    pub fn render(
        &self,
        scene: Arc<Scene>,
        camera: &PinHole,
        image: &mut Image,
        config: RenderConfig,
    ) -> Result<TraceStats> {
        if (camera.width(), camera.height()) != (image.w(), image.h()) {
            return Err(Error::InvalidArgument(format!(
                "camera resolution {}x{} does not match image {}x{}",
                camera.width(),
                camera.height(),
                image.w(),
                image.h()
            )));
        }
        let nthread = config.nthread.clamp(1, image.h().max(1) as usize);
        info!(
            "rendering {}x{} with {} objects, {} lights, depth {}, {} threads",
            image.w(),
            image.h(),
            scene.objects().len(),
            scene.lights().len(),
            config.depth,
            nthread
        );
        if let Some(bounds) = scene.bounds() {
            debug!("scene bounds {:?} .. {:?}", bounds.min(), bounds.max());
        }

        let mut threads = vec![];
        for i in 0..nthread {
            let scene = scene.clone();
            let camera = camera.clone();
            let thread = thread::spawn(move || {
                Self::render_thread(&scene, &camera, i, nthread, config.depth)
            });
            threads.push(thread);
        }

        let mut stats = TraceStats::default();
        for thread in threads {
            let (rows, thread_stats) = match thread.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            for (yi, row) in rows {
                for (xi, color) in row.into_iter().enumerate() {
                    *image.at_mut(xi as u32, yi) = color;
                }
            }
            stats.merge(&thread_stats);
        }

        info!(
            "traced {} rays, {} shadow rays ({} occluded), {} reflections",
            stats.rays, stats.shadow_rays, stats.occluded, stats.reflections
        );
        if stats.non_finite > 0 {
            warn!("{} non-finite colors, NaN channels written as 0", stats.non_finite);
        }
        Ok(stats)
    }

    fn render_thread(
        scene: &Scene,
        camera: &PinHole,
        thread_id: usize,
        nthread: usize,
        depth: u32,
    ) -> (Vec<(u32, Vec<RGB>)>, TraceStats) {
        let mut stats = TraceStats::default();
        let mut rows = vec![];
        for yi in (thread_id as u32..camera.height()).step_by(nthread) {
            let row: Vec<RGB> = (0..camera.width())
                .map(|xi| Self::render_pixel(scene, camera, xi, yi, depth, &mut stats))
                .collect();
            rows.push((yi, row));
        }
        debug!("thread {} finished {} rows", thread_id, rows.len());
        (rows, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::materials;
    use crate::object::Object;
    use crate::shape::shapes::Sphere;

    fn small_scene() -> (PinHole, Scene) {
        let scene = Scene::new(
            vec![Object::new(Sphere::new(V3::zeros(), 1.0), materials::matte_white())],
            vec![V3::new(0.0, 0.0, 10.0)],
        );
        let camera = PinHole::new(V3::new(0.0, 0.0, 5.0), V3::zeros(), V3::y(), 45.0, 16, 12);
        (camera, scene)
    }

    #[test]
    fn thread_count_does_not_change_the_image() {
        let (camera, scene) = small_scene();
        let scene = Arc::new(scene);

        let mut single = Image::new(16, 12).unwrap();
        let s1 = Renderer
            .render(scene.clone(), &camera, &mut single, RenderConfig { depth: 2, nthread: 1 })
            .unwrap();
        let mut multi = Image::new(16, 12).unwrap();
        let s3 = Renderer
            .render(scene, &camera, &mut multi, RenderConfig { depth: 2, nthread: 3 })
            .unwrap();

        assert_eq!(s1, s3);
        for y in 0..12 {
            for x in 0..16 {
                assert_eq!(single.at(x, y), multi.at(x, y));
            }
        }
        // the sphere fills the middle of the frame
        assert!(single.at(8, 6).r > 0.1);
        assert_eq!(*single.at(0, 0), RGB::black());
        assert_eq!(s1.rays, 16 * 12);
    }

    #[test]
    fn resolution_mismatch_is_an_error() {
        let (camera, scene) = small_scene();
        let mut image = Image::new(8, 8).unwrap();
        let result = Renderer.render(Arc::new(scene), &camera, &mut image, RenderConfig::default());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
