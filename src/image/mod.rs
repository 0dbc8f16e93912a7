//! Image decoding into comparable sample arrays.

mod load;

pub use load::{image_to_samples, load_image};

use std::fmt;

use ndarray::Array3;

/// Decoded raster in HWC layout (height, width, channels).
/// 8-bit formats keep their `[0, 255]` range, 16-bit formats keep `[0, 65535]`.
pub type SampleArray = Array3<u16>;

/// Dimensions and channel count of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} with {} channel(s)",
            self.width, self.height, self.channels
        )
    }
}

/// Shape of a sample array.
#[must_use]
pub fn shape_of(samples: &SampleArray) -> Shape {
    let (height, width, channels) = samples.dim();
    Shape {
        width,
        height,
        channels,
    }
}
