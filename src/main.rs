use std::error::Error;
use std::sync::Arc;

use log::info;
use softcube::colors;
use softcube::math::Vec3;
use softcube::window::{FrameLimiter, Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH};
use softcube::{Camera, Mesh, Renderer, Scene, Texture};

const CHECKER_SIZE: u32 = 128;
const CHECKER_CELL: u32 = 16;

/// Grey checkerboard, the demo's stand-in for a real texture file.
fn checker_texture(size: u32, cell: u32) -> softcube::Result<Texture> {
    let light = colors::pack(255, 255, 255, 255);
    let dark = colors::pack(40, 40, 40, 255);
    let pixels = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (x / cell + y / cell) % 2 == 0 {
                light
            } else {
                dark
            }
        })
        .collect();
    Texture::from_argb(size, size, pixels)
}

fn build_scene(texture_path: Option<String>) -> Result<Scene, Box<dyn Error>> {
    let texture = match texture_path {
        Some(path) => Texture::from_file(path)?,
        None => checker_texture(CHECKER_SIZE, CHECKER_CELL)?,
    };

    let mut cube = Mesh::cube(1.2, Arc::new(texture));
    cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);

    let camera = Camera::new(Vec3::ZERO, Vec3::FORWARD, Vec3::UP, 60.0)?;
    let mut scene = Scene::new(camera);
    scene.add_mesh(cube);
    Ok(scene)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: an image to use instead of the checkerboard
    let mut scene = build_scene(std::env::args().nth(1))?;
    let mut renderer = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut window = Window::new("softcube", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut limiter = FrameLimiter::new(&window);

    info!("Press Escape to quit");
    while window.poll_events() != WindowEvent::Quit {
        limiter.wait_and_get_delta(&window);

        if let Some(cube) = scene.mesh_mut(0) {
            cube.transform_mut().rotate(Vec3::new(0.01, 0.02, 0.0));
        }

        renderer.render(&scene)?;
        if renderer.take_dirty().is_some() {
            window.present(renderer.as_bytes(), renderer.pitch())?;
        }
    }

    Ok(())
}
