//! Grayscale visualization of the matched crop.

use image::{imageops, Rgba, RgbaImage};
use ndarray::Array2;

use crate::consts::OPAQUE_ALPHA;
use crate::frame::Rotation;

/// Convert a luma crop into an opaque grayscale image, rotated to match
/// the display orientation of the reported displacement.
///
/// Orthogonal rotations are exact pixel remaps, so the result is lossless;
/// the input crop is only read.
pub fn render_grayscale(crop: &Array2<u8>, rotation: Rotation) -> RgbaImage {
    let (height, width) = crop.dim();
    let mut img = RgbaImage::new(width as u32, height as u32);
    for ((y, x), &luma) in crop.indexed_iter() {
        img.put_pixel(x as u32, y as u32, Rgba([luma, luma, luma, OPAQUE_ALPHA]));
    }

    match rotation {
        Rotation::Deg0 => img,
        Rotation::Deg90 => imageops::rotate90(&img),
        Rotation::Deg180 => imageops::rotate180(&img),
        Rotation::Deg270 => imageops::rotate270(&img),
    }
}
