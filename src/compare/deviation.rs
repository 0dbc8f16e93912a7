use ndarray::Zip;

use crate::error::{Error, Result};
use crate::image::{shape_of, SampleArray};

/// Largest absolute difference between corresponding samples.
///
/// Images without samples have a deviation of 0.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the arrays differ in width, height or
/// channel count.
pub fn max_deviation(first: &SampleArray, second: &SampleArray) -> Result<u16> {
    if first.dim() != second.dim() {
        return Err(Error::ShapeMismatch {
            first: shape_of(first),
            second: shape_of(second),
        });
    }

    let deviation = Zip::from(first)
        .and(second)
        .fold(0, |acc: u16, &a, &b| acc.max(a.abs_diff(b)));

    Ok(deviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::Array3;

    #[test]
    fn test_identical_is_zero() {
        let a = Array3::<u16>::from_elem((4, 4, 3), 77);

        assert_eq!(max_deviation(&a, &a.clone()).unwrap(), 0);
    }

    #[test]
    fn test_absolute_in_both_directions() {
        let dark = Array3::<u16>::zeros((2, 2, 1));
        let mut light = dark.clone();
        light[[1, 0, 0]] = 5;

        // No unsigned wraparound: 0 - 5 is 5, not 251.
        assert_eq!(max_deviation(&dark, &light).unwrap(), 5);
        assert_eq!(max_deviation(&light, &dark).unwrap(), 5);
    }

    #[test]
    fn test_picks_maximum() {
        let a = Array3::<u16>::zeros((1, 3, 1));
        let b = Array3::from_shape_vec((1, 3, 1), vec![2, 9, 4]).unwrap();

        assert_eq!(max_deviation(&a, &b).unwrap(), 9);
    }

    #[test]
    fn test_full_range() {
        let a = Array3::<u16>::zeros((1, 1, 1));
        let b = Array3::<u16>::from_elem((1, 1, 1), 255);

        assert_eq!(max_deviation(&a, &b).unwrap(), 255);
    }

    #[test]
    fn test_empty_images() {
        let a = Array3::<u16>::zeros((0, 0, 3));

        assert_eq!(max_deviation(&a, &a.clone()).unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Array3::<u16>::zeros((10, 10, 1));
        let b = Array3::<u16>::zeros((10, 12, 1));

        let err = max_deviation(&a, &b).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "image shape mismatch: 10x10 with 1 channel(s) vs 12x10 with 1 channel(s)"
        );
    }

    #[test]
    fn test_channel_mismatch() {
        let rgb = Array3::<u16>::zeros((2, 2, 3));
        let rgba = Array3::<u16>::zeros((2, 2, 4));

        assert!(matches!(
            max_deviation(&rgb, &rgba),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
