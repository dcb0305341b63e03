use crate::camera::PinHole;
use crate::material::{materials, Material};
use crate::object::Object;
use crate::scene::Scene;
use crate::shape::shapes::*;
use crate::*;

pub const SCENE_NAMES: [&str; 3] = ["cornell", "shapes", "mirrors"];

pub fn by_name(name: &str, width: u32, height: u32) -> Result<(PinHole, Scene)> {
    match name {
        "cornell" => Ok(make_cornell_box(width, height)),
        "shapes" => Ok(make_shapes(width, height)),
        "mirrors" => Ok(make_mirrors(width, height)),
        _ => Err(Error::InvalidArgument(format!(
            "unknown scene '{}', expected one of {}",
            name,
            SCENE_NAMES.join(", ")
        ))),
    }
}

/// Box of five huge spheres standing in for walls, with a mirror sphere,
/// a blue and a green sphere inside.
pub fn make_cornell_box(width: u32, height: u32) -> (PinHole, Scene) {
    const R: f32 = 1000.0;
    const L: f32 = 2.0;

    let red = Material::new(RGB::new(0.2, 0.0, 0.0), RGB::new(0.8, 0.2, 0.2), RGB::black());
    let green = Material::new(RGB::new(0.0, 0.2, 0.0), RGB::new(0.2, 0.8, 0.2), RGB::black());
    let white = Material::new(RGB::all(0.2), RGB::all(0.8), RGB::black());
    let blue = Material::new(RGB::new(0.0, 0.0, 0.2), RGB::new(0.2, 0.2, 0.8), RGB::black());
    let mirror = Material::new_mirror(RGB::all(0.9));

    let mut scene = Scene::default();
    // walls: y = L and y = 0, x = -L and x = L, z = -L
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, L + R, 0.0), R), white.clone()));
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, -R, 0.0), R), white.clone()));
    scene.add_object(Object::new(Sphere::new(V3::new(-L - R, 0.0, 0.0), R), red));
    scene.add_object(Object::new(Sphere::new(V3::new(L + R, 0.0, 0.0), R), green.clone()));
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, 0.0, -L - R), R), white));

    scene.add_object(Object::new(Sphere::new(V3::new(-1.0, 1.0, 0.0), 0.3), mirror));
    scene.add_object(Object::new(Sphere::new(V3::new(0.5, 0.4, -1.0), 0.3), blue));
    scene.add_object(Object::new(Sphere::new(V3::new(1.0, 1.5, 1.5), 0.3), green));

    scene.add_light(V3::new(0.0, 0.05, 2.0));

    let camera = PinHole::new(V3::new(0.0, 1.0, 5.0), V3::new(0.0, 1.0, 0.0), V3::y(), 45.0, width, height);
    (camera, scene)
}

pub fn make_shapes(width: u32, height: u32) -> (PinHole, Scene) {
    let mut scene = Scene::default();

    let (a, b, c, d) = (
        V3::new(-4.0, 0.0, 4.0),
        V3::new(4.0, 0.0, 4.0),
        V3::new(4.0, 0.0, -4.0),
        V3::new(-4.0, 0.0, -4.0),
    );
    scene.add_object(Object::new(Triangle::with_normal(a, b, c, V3::y()), materials::matte_white()));
    scene.add_object(Object::new(Triangle::with_normal(a, c, d, V3::y()), materials::matte_white()));

    scene.add_object(Object::new(
        Aabb::new(V3::new(-1.5, 0.5, -0.5), V3::repeat(0.5)),
        materials::matte_red(),
    ));
    scene.add_object(Object::new(
        Aabb::new(V3::new(1.5, 0.75, -1.0), V3::new(0.4, 0.75, 0.4)),
        materials::reflective_blue(),
    ));
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, 0.7, 0.5), 0.7), materials::reflective_white()));
    scene.add_object(Object::new(
        Triangle::with_vertex_normals(
            [V3::new(-0.5, 1.6, -2.0), V3::new(0.5, 1.6, -2.0), V3::new(0.0, 2.5, -2.0)],
            [V3::new(-0.5, 0.0, 1.0), V3::new(0.5, 0.0, 1.0), V3::new(0.0, 0.5, 1.0)],
        ),
        materials::matte_green(),
    ));

    scene.add_light(V3::new(-3.0, 5.0, 3.0));
    scene.add_light(V3::new(3.0, 4.0, 2.0));

    let camera = PinHole::new(V3::new(0.0, 2.0, 6.0), V3::new(0.0, 0.8, 0.0), V3::y(), 50.0, width, height);
    (camera, scene)
}

/// Two parallel mirrors with a sphere between them; deep recursion budgets
/// show the repeated reflections, and the depth limit ends them.
pub fn make_mirrors(width: u32, height: u32) -> (PinHole, Scene) {
    let mut scene = Scene::default();
    let mirror = Material::new(RGB::all(0.02), RGB::all(0.05), RGB::all(0.9));
    scene.add_object(Object::new(
        Aabb::new(V3::new(0.0, 0.0, -3.0), V3::new(4.0, 3.0, 0.1)),
        mirror.clone(),
    ));
    scene.add_object(Object::new(Aabb::new(V3::new(0.0, 0.0, 3.0), V3::new(4.0, 3.0, 0.1)), mirror));
    scene.add_object(Object::new(Sphere::new(V3::new(0.0, -0.5, 0.0), 0.8), materials::matte_red()));
    scene.add_object(Object::new(
        Aabb::new(V3::new(0.0, -1.4, 0.0), V3::new(4.0, 0.1, 3.0)),
        materials::matte_white(),
    ));
    scene.add_light(V3::new(0.0, 2.5, 0.0));

    let camera = PinHole::new(V3::new(0.6, 0.5, 2.5), V3::new(0.0, -0.3, -3.0), V3::y(), 60.0, width, height);
    (camera, scene)
}

#[test]
fn test_by_name() {
    for name in SCENE_NAMES.iter() {
        let (camera, scene) = by_name(name, 32, 24).unwrap();
        assert_eq!((camera.width(), camera.height()), (32, 24));
        assert!(!scene.objects().is_empty());
        assert!(!scene.lights().is_empty());
    }
    assert!(by_name("nope", 1, 1).is_err());
}

#[test]
fn test_cornell_camera_sees_back_wall() {
    let (camera, scene) = make_cornell_box(80, 60);
    let hit = scene.find_nearest(&camera.ray_for_pixel(40, 30)).unwrap();
    // back wall, or the blue sphere in front of it
    assert!(hit.obj_ix == 4 || hit.obj_ix == 6);
}
