use std::error::Error;
use std::f64::consts::PI;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::math::Vec3;
use super::output::{self, OutputFormat};
use super::renderer;
use super::scene::Scene;

#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub width: u32,
    pub height: u32,
    pub frame_count: u32,
    pub orbit_radius: f64,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub sequential: bool,
}

/// A frame that could not be written to its output file.
#[derive(Debug)]
pub struct FrameError {
    path: PathBuf,
    message: String,
}

impl FrameError {
    fn new(path: PathBuf, message: String) -> FrameError {
        FrameError { path, message }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not write frame {}: {}",
            self.path.display(),
            self.message
        )
    }
}

impl Error for FrameError {}

/// Position of the orbiting light for a given frame: one full revolution in
/// the xz plane at height 1 across the whole sequence.
pub fn light_position(frame: u32, frame_count: u32, orbit_radius: f64) -> Vec3 {
    let angle = 2.0 * PI * frame as f64 / frame_count as f64;
    Vec3::new(angle.cos() * orbit_radius, 1.0, angle.sin() * orbit_radius)
}

fn frame_path(output_dir: &Path, frame: u32, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("frame{}.{}", frame, format.extension()))
}

fn write_frame(
    path: &Path,
    width: u32,
    height: u32,
    pixels: &[Vec3],
    format: OutputFormat,
) -> Result<(), FrameError> {
    match format {
        OutputFormat::Ppm => output::save_ppm(path, width, height, pixels)
            .map_err(|error| FrameError::new(path.to_path_buf(), error.to_string())),
        OutputFormat::Png => output::save_png(path, width, height, pixels)
            .map_err(|error| FrameError::new(path.to_path_buf(), error.to_string())),
    }
}

/// Renders the whole sequence, one frame per tick, moving the scene's light
/// along its orbit and writing every frame to its own file. The callback is
/// invoked after each frame with the time it took to render and write.
///
/// Frames share no state, so they are rendered and written strictly in
/// increasing index order with nothing carried over between them.
pub fn run(
    config: &AnimationConfig,
    scene: &Scene,
    mut on_frame: impl FnMut(u32, Duration),
) -> Result<(), FrameError> {
    for frame in 0..config.frame_count {
        let start = Instant::now();
        let position = light_position(frame, config.frame_count, config.orbit_radius);
        let frame_scene = scene.with_light_position(position);
        let pixels = if config.sequential {
            renderer::render(&frame_scene, config.width, config.height)
        } else {
            renderer::render_parallel(&frame_scene, config.width, config.height)
        };
        let path = frame_path(&config.output_dir, frame, config.format);
        write_frame(&path, config.width, config.height, &pixels, config.format)?;
        on_frame(frame, start.elapsed());
    }
    Ok(())
}
