use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

mod raytracing;
use raytracing::animation::{self, AnimationConfig};
use raytracing::output::OutputFormat;
use raytracing::scene::Scene;
use raytracing::Vec3;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the width of every rendered frame in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,
    /// the height of every rendered frame in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,
    /// the number of frames in the sequence, one full light orbit
    #[arg(short, long, default_value_t = 60)]
    frames: u32,
    /// the radius of the circle the light travels around the scene
    #[arg(short = 'r', long, default_value_t = 1.0)]
    orbit_radius: f64,
    /// the directory where the rendered frames are saved
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
    /// the file format of the written frames
    #[arg(long, value_enum, default_value = "ppm")]
    format: OutputFormat,
    /// render every frame on a single thread
    #[arg(long, default_value = "false")]
    sequential: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    fs::create_dir_all(&args.output)?;
    let scene = Scene::reference(Vec3::new(args.orbit_radius, 1.0, 0.0));
    let config = AnimationConfig {
        width: args.width,
        height: args.height,
        frame_count: args.frames,
        orbit_radius: args.orbit_radius,
        output_dir: args.output,
        format: args.format,
        sequential: args.sequential,
    };

    let start = Instant::now();
    animation::run(&config, &scene, |frame, elapsed| {
        println!("Frame {} rendered in {:?}", frame, elapsed);
    })?;
    let total_time = start.elapsed();
    println!("Rendered {} frames in {:?}", config.frame_count, total_time);
    Ok(())
}
