use std::cell::Cell;

use approx::assert_relative_eq;
use softcube::prelude::*;
use softcube::render::{FrameBuffer, Triangle, FAR_DEPTH};
use softcube::Projection;

const WIDTH: u32 = 160;
const HEIGHT: u32 = 120;

fn solid(color: u32) -> Arc<Texture> {
    Arc::new(Texture::from_argb(1, 1, vec![color]).unwrap())
}

fn camera() -> Camera {
    Camera::new(Vec3::ZERO, Vec3::FORWARD, Vec3::UP, 60.0).unwrap()
}

/// A camera-facing triangle at depth `z`, big enough to cover the screen centre.
fn facing_triangle(name: &str, z: f32, texture: Arc<Texture>) -> Mesh {
    Mesh::new(
        name,
        vec![
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        ],
        vec![Vec2::ZERO; 3],
        vec![Face::new(0, 1, 2)],
        texture,
    )
    .unwrap()
}

/// Wraps the scanline rasterizer and counts how often it is invoked.
#[derive(Default)]
struct CountingRasterizer {
    inner: ScanlineRasterizer,
    calls: Cell<usize>,
}

impl Rasterizer for CountingRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, texture: &Texture, buffer: &mut FrameBuffer) {
        self.calls.set(self.calls.get() + 1);
        self.inner.fill_triangle(triangle, texture, buffer);
    }
}

#[test]
fn nearer_mesh_wins_regardless_of_draw_order() {
    let red = 0xFFFF_0000;
    let blue = 0xFF00_00FF;

    let mut near_first = Scene::new(camera());
    near_first.add_mesh(facing_triangle("near", 3.0, solid(red)));
    near_first.add_mesh(facing_triangle("far", 5.0, solid(blue)));

    let mut far_first = Scene::new(camera());
    far_first.add_mesh(facing_triangle("far", 5.0, solid(blue)));
    far_first.add_mesh(facing_triangle("near", 3.0, solid(red)));

    let mut a = Renderer::new(WIDTH, HEIGHT).unwrap();
    let mut b = Renderer::new(WIDTH, HEIGHT).unwrap();
    a.render(&near_first).unwrap();
    b.render(&far_first).unwrap();

    assert_eq!(a.pixels(), b.pixels());
    assert_eq!(a.pixel(WIDTH / 2, HEIGHT / 2), Some(red));
}

#[test]
fn triangle_touching_near_plane_writes_nothing() {
    let mesh = Mesh::new(
        "straddling",
        vec![
            Vec3::new(-1.0, -1.0, 3.0),
            Vec3::new(1.0, -1.0, 3.0),
            Vec3::new(0.0, 1.0, 0.01),
        ],
        vec![Vec2::ZERO; 3],
        vec![Face::new(0, 1, 2)],
        solid(0xFFFF_FFFF),
    )
    .unwrap();

    let mut scene = Scene::new(camera());
    scene.add_mesh(mesh);

    let mut renderer = Renderer::new(WIDTH, HEIGHT).unwrap();
    let stats = renderer.render(&scene).unwrap();

    assert_eq!(stats.culled, 1);
    assert_eq!(stats.rasterized, 0);
    assert!(renderer.pixels().iter().all(|&c| c == softcube::colors::BLACK));
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            assert_eq!(renderer.depth(x, y), Some(FAR_DEPTH));
        }
    }
}

#[test]
fn cube_is_rasterized_twelve_times_from_every_side() {
    let mut cube = Mesh::cube(1.2, solid(0xFF80_8080));
    cube.transform_mut().set_rotation(Vec3::new(0.3, 0.7, 0.1));
    let mut scene = Scene::new(camera());
    scene.add_mesh(cube);

    let mut renderer = Renderer::new(WIDTH, HEIGHT).unwrap();
    for step in 0..8 {
        let angle = step as f32 * std::f32::consts::FRAC_PI_4;
        let eye = Vec3::new(4.0 * angle.sin(), 1.0, 4.0 * angle.cos());
        scene.camera_mut().set_position(eye);
        scene.camera_mut().set_target(Vec3::ZERO);

        let rasterizer = CountingRasterizer::default();
        let stats = renderer.render_with(&scene, &rasterizer).unwrap();

        assert_eq!(rasterizer.calls.get(), 12, "camera step {step}");
        assert_eq!(stats.triangles, 12);
        assert_eq!(stats.rasterized, 12);
    }
}

#[test]
fn rotating_cube_between_frames_changes_the_image() {
    let mut cube = Mesh::cube(1.2, solid(0xFF80_8080));
    cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);
    let mut scene = Scene::new(camera());
    scene.add_mesh(cube);

    let mut renderer = Renderer::new(WIDTH, HEIGHT).unwrap();
    renderer.render(&scene).unwrap();
    let first = renderer.pixels().to_vec();

    scene.meshes_mut()[0]
        .transform_mut()
        .rotate(Vec3::new(0.3, 0.6, 0.0));
    renderer.render(&scene).unwrap();

    assert_ne!(renderer.pixels(), &first[..]);
}

#[test]
fn reference_vertex_matches_expected_screen_position() {
    let projection = Projection::new(&camera(), 800, 600).unwrap();
    let v = projection
        .transform_vertex(&Transform::default(), Vec3::new(-0.6, -0.6, 3.4), Vec2::ZERO)
        .unwrap();

    let basis = projection.basis();
    assert_eq!(basis.right, Vec3::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(projection.focal_factor(), 1.732, epsilon = 1e-3);
    assert_relative_eq!(v.x, 491.7, epsilon = 0.1);
    assert_relative_eq!(v.y, 391.7, epsilon = 0.1);
    assert_relative_eq!(v.depth, 3.4, epsilon = 1e-5);
}

#[test]
fn checker_texture_is_sampled_onto_cube_face() {
    // 2x2 checker, so each quadrant of a face maps to one texel
    let texture = Arc::new(
        Texture::from_argb(2, 2, vec![0xFFFF_FFFF, 0xFF28_2828, 0xFF28_2828, 0xFFFF_FFFF]).unwrap(),
    );
    let mut cube = Mesh::cube(1.2, texture);
    cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);
    let mut scene = Scene::new(camera());
    scene.add_mesh(cube);

    let mut renderer = Renderer::new(800, 600).unwrap();
    renderer.render(&scene).unwrap();

    let colors: std::collections::HashSet<u32> = renderer
        .pixels()
        .iter()
        .copied()
        .filter(|&c| c != softcube::colors::BLACK)
        .collect();
    assert!(colors.contains(&0xFFFF_FFFF));
    assert!(colors.contains(&0xFF28_2828));
}
