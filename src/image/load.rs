//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use ndarray::Array3;

use crate::error::{Error, Result};

use super::{shape_of, SampleArray};

/// Load an image from disk and convert it to a sample array.
///
/// The channel layout of the file is preserved: a grayscale PNG yields one
/// channel, an RGBA PNG four. Palette images come out expanded to RGB(A).
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not a decodable image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SampleArray> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = image_to_samples(&img)?;
    tracing::debug!("Decoded {} as {}", path.display(), shape_of(&samples));

    Ok(samples)
}

/// Convert a `DynamicImage` to an HWC sample array.
///
/// Float formats are quantized to 16 bits.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not fill the image dimensions.
pub fn image_to_samples(img: &DynamicImage) -> Result<SampleArray> {
    let (width, height) = img.dimensions();

    let (channels, raw) = match img {
        DynamicImage::ImageLuma8(buf) => (1, widen(buf.as_raw())),
        DynamicImage::ImageLumaA8(buf) => (2, widen(buf.as_raw())),
        DynamicImage::ImageRgb8(buf) => (3, widen(buf.as_raw())),
        DynamicImage::ImageRgba8(buf) => (4, widen(buf.as_raw())),
        DynamicImage::ImageLuma16(buf) => (1, buf.as_raw().clone()),
        DynamicImage::ImageLumaA16(buf) => (2, buf.as_raw().clone()),
        DynamicImage::ImageRgb16(buf) => (3, buf.as_raw().clone()),
        DynamicImage::ImageRgba16(buf) => (4, buf.as_raw().clone()),
        DynamicImage::ImageRgb32F(_) => (3, img.to_rgb16().into_raw()),
        _ => (4, img.to_rgba16().into_raw()),
    };

    let samples = Array3::from_shape_vec((height as usize, width as usize, channels), raw)?;
    Ok(samples)
}

fn widen(bytes: &[u8]) -> Vec<u16> {
    bytes.iter().copied().map(u16::from).collect()
}
