use whitrace::material::Material;
use whitrace::object::Object;
use whitrace::renderer::whitted::{trace_ray, BACKGROUND};
use whitrace::renderer::TraceStats;
use whitrace::scene::Scene;
use whitrace::shape::shapes::Sphere;
use whitrace::{Ray, RGB, V3};

fn approx_rgb(c: RGB, expected: RGB, tol: f32) -> bool {
    (c.r - expected.r).abs() <= tol && (c.g - expected.g).abs() <= tol && (c.b - expected.b).abs() <= tol
}

fn matte_white() -> Material {
    Material::new_matte(RGB::all(0.1), RGB::all(0.8))
}

fn lit_sphere_scene() -> Scene {
    Scene::new(
        vec![Object::new(Sphere::new(V3::zeros(), 1.0), matte_white())],
        vec![V3::new(0.0, 0.0, 100.0)],
    )
}

fn primary_ray() -> Ray {
    Ray::new(V3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0))
}

#[test]
fn lit_sphere_is_between_ambient_and_white() {
    let scene = lit_sphere_scene();
    let hit = scene.find_nearest(&primary_ray()).unwrap();
    assert!((hit.ctx.pos - V3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    assert!((hit.ctx.normal - V3::new(0.0, 0.0, 1.0)).norm() < 1e-5);

    let mut stats = TraceStats::default();
    let color = trace_ray(&scene, &primary_ray(), 3, &mut stats);
    for i in 0..3 {
        assert!(color[i] > 0.1 && color[i] < 1.0, "channel {} = {}", i, color[i]);
    }
    assert!(approx_rgb(color, RGB::all(0.9), 1e-3));
    assert_eq!(stats.occluded, 0);
}

#[test]
fn occluded_sphere_is_ambient_only() {
    let mut scene = lit_sphere_scene();
    // behind the eye, in front of the light
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, 0.0, 50.0), 1.0), matte_white()));

    let mut stats = TraceStats::default();
    let color = trace_ray(&scene, &primary_ray(), 3, &mut stats);
    assert!(approx_rgb(color, RGB::all(0.1), 1e-6));
    assert_eq!(stats.shadow_rays, 1);
    assert_eq!(stats.occluded, 1);
}

#[test]
fn mirror_sphere_shows_the_sphere_it_faces() {
    let red = Material::new(RGB::new(0.1, 0.0, 0.0), RGB::new(0.8, 0.2, 0.2), RGB::black());
    let mirror = Material::new(RGB::black(), RGB::black(), RGB::all(1.0));
    let scene = Scene::new(
        vec![
            Object::new(Sphere::new(V3::zeros(), 1.0), mirror),
            Object::new(Sphere::new(V3::new(0.0, 0.0, 10.0), 1.0), red),
        ],
        vec![V3::new(0.0, 0.0, 5.0)],
    );

    let mut stats = TraceStats::default();
    let color = trace_ray(&scene, &primary_ray(), 2, &mut stats);
    assert!(approx_rgb(color, RGB::new(0.9, 0.2, 0.2), 1e-3), "{:?}", color);
    assert_eq!(stats.reflections, 1);

    // without the recursion budget the mirror shows only its own (black) shading
    let color = trace_ray(&scene, &primary_ray(), 1, &mut stats);
    assert_eq!(color, RGB::black());
}

#[test]
fn zero_depth_ignores_the_scene() {
    let scene = lit_sphere_scene();
    let mut stats = TraceStats::default();
    for dir in [V3::new(0.0, 0.0, -1.0), V3::new(0.1, 0.0, -1.0).normalize(), V3::x()] {
        let ray = Ray::new(V3::new(0.0, 0.0, 5.0), dir);
        assert_eq!(trace_ray(&scene, &ray, 0, &mut stats), BACKGROUND);
    }
    assert_eq!(stats.rays, 0);
    assert_eq!(stats.shadow_rays, 0);
}

#[test]
fn colors_stay_in_unit_range() {
    let hot = Material::new(RGB::all(0.9), RGB::all(0.9), RGB::all(0.3));
    let scene = Scene::new(
        vec![
            Object::new(Sphere::new(V3::zeros(), 1.0), hot.clone()),
            Object::new(Sphere::new(V3::new(0.0, 0.0, 8.0), 1.0), hot),
        ],
        vec![V3::new(0.0, 3.0, 4.0), V3::new(0.0, -3.0, 4.0)],
    );
    let mut stats = TraceStats::default();
    for x in -5..=5 {
        let dir = V3::new(x as f32 * 0.05, 0.0, -1.0).normalize();
        let color = trace_ray(&scene, &Ray::new(V3::new(0.0, 0.0, 5.0), dir), 4, &mut stats);
        for i in 0..3 {
            assert!((0.0..=1.0).contains(&color[i]));
        }
    }
}
