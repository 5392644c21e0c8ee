use std::cmp::min;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, Rgb};

use super::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// plain text P3 portable pixmap
    Ppm,
    /// png through the image crate, channels clamped to 255
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

impl From<Vec3> for Rgb<u8> {
    fn from(value: Vec3) -> Self {
        let r = min((value.x * 255.0) as u8, 255);
        let g = min((value.y * 255.0) as u8, 255);
        let b = min((value.z * 255.0) as u8, 255);
        Rgb([r, g, b])
    }
}

// 255.999 keeps a channel of exactly 1.0 from rounding up to 256; components
// outside [0, 1] come out as out-of-range integers, unclamped
#[inline(always)]
fn channel(value: f64) -> i32 {
    (255.999 * value) as i32
}

/// Writes the pixel buffer in the P3 format: a three line header followed by
/// one `R G B` line per pixel, rows top to bottom.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    pixels: &[Vec3],
) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    for pixel in pixels {
        writeln!(
            writer,
            "{} {} {}",
            channel(pixel.x),
            channel(pixel.y),
            channel(pixel.z)
        )?;
    }
    Ok(())
}

pub fn save_ppm(path: &Path, width: u32, height: u32, pixels: &[Vec3]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(&mut writer, width, height, pixels)?;
    writer.flush()
}

pub fn save_png(
    path: &Path,
    width: u32,
    height: u32,
    pixels: &[Vec3],
) -> Result<(), image::ImageError> {
    let mut buffer: ImageBuffer<Rgb<u8>, Vec<_>> = ImageBuffer::new(width, height);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = pixels[(x + width * y) as usize].into();
    }
    buffer.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_header_and_quantization() {
        let pixels = [Vec3::new(1.0, 0.0, 0.5)];
        let mut out = Vec::new();
        write_ppm(&mut out, 1, 1, &pixels).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n1 1\n255\n255 0 127\n");
    }

    #[test]
    fn ppm_channels_are_not_clamped() {
        // out-of-range components pass straight through to the text output
        let pixels = [Vec3::new(1.5, -0.25, 0.0)];
        let mut out = Vec::new();
        write_ppm(&mut out, 1, 1, &pixels).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n1 1\n255\n383 -63 0\n");
    }

    #[test]
    fn png_conversion_clamps_at_255() {
        let full: Rgb<u8> = Vec3::new(1.0, 2.0, 0.0).into();
        assert_eq!(full, Rgb([255, 255, 0]));
        let half: Rgb<u8> = Vec3::new(0.5, 0.0, 1.0).into();
        assert_eq!(half, Rgb([127, 0, 255]));
    }
}
