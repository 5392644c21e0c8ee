use rayon::prelude::*;

use super::camera::Camera;
use super::math::Vec3;
use super::scene::Scene;

/// Renders one frame into a row-major pixel buffer, one primary ray per
/// pixel. The first row of the buffer is the top of the scene.
///
/// A width or height of 1 divides by zero while mapping pixels to the
/// viewport and fills the frame with NaN components instead of crashing.
pub fn render(scene: &Scene, width: u32, height: u32) -> Vec<Vec3> {
    let camera = Camera::new(width as f64 / height as f64);
    let mut pixels = vec![Vec3::zero(); (width * height) as usize];
    for (row_index, row) in pixels.chunks_mut(width as usize).enumerate() {
        render_row(scene, &camera, width, height, row_index, row);
    }
    pixels
}

/// Same output as [`render`], bit for bit, with the rows spread over a rayon
/// pool. Every pixel is a pure function of its coordinates, so the execution
/// order cannot show up in the result.
pub fn render_parallel(scene: &Scene, width: u32, height: u32) -> Vec<Vec3> {
    let camera = Camera::new(width as f64 / height as f64);
    let mut pixels = vec![Vec3::zero(); (width * height) as usize];
    let rows: Vec<(usize, &mut [Vec3])> = pixels.chunks_mut(width as usize).enumerate().collect();
    rows.into_par_iter().for_each(|(row_index, row)| {
        render_row(scene, &camera, width, height, row_index, row);
    });
    pixels
}

fn render_row(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    row_index: usize,
    row: &mut [Vec3],
) {
    // the buffer goes top to bottom while the viewport v coordinate grows
    // upward, so the scanline j counts down from height - 1
    let j = height as usize - 1 - row_index;
    for (i, pixel) in row.iter_mut().enumerate() {
        let u = i as f64 / (width as f64 - 1.0);
        let v = j as f64 / (height as f64 - 1.0);
        let ray = camera.shoot_to(u, v);
        *pixel = scene.shade(&ray);
    }
}
