//! Pass/fail classification of an image pair.

use std::path::Path;

use crate::error::Result;
use crate::image;

use super::deviation::max_deviation;

/// Largest per-sample deviation still considered equivalent.
pub const TOLERANCE: u16 = 3;

/// Configuration for the difference checker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum deviation (inclusive) for two images to count as the same.
    pub tolerance: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Outcome of comparing two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every sample is within tolerance.
    Same,
    /// At least one sample deviates by more than the tolerance.
    Different,
}

/// Maximum deviation of an image pair, judged against a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferenceResult {
    max_deviation: u16,
    tolerance: u16,
}

impl DifferenceResult {
    /// Largest absolute difference between corresponding samples.
    #[must_use]
    pub const fn max_deviation(&self) -> u16 {
        self.max_deviation
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.max_deviation <= self.tolerance {
            Verdict::Same
        } else {
            Verdict::Different
        }
    }

    #[must_use]
    pub fn is_same(&self) -> bool {
        self.verdict() == Verdict::Same
    }
}

/// Compares image files sample by sample.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: Config,
}

impl Checker {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Decode both files and compute their maximum deviation.
    ///
    /// The files are read one after the other; the second is not opened if
    /// the first fails to decode.
    ///
    /// # Errors
    ///
    /// Returns an error if either image cannot be loaded or the two shapes differ.
    pub fn compare<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        first: P,
        second: Q,
    ) -> Result<DifferenceResult> {
        let first = first.as_ref();
        let second = second.as_ref();

        tracing::debug!("Comparing {} with {}", first.display(), second.display());

        let first_samples = image::load_image(first)?;
        let second_samples = image::load_image(second)?;

        let result = DifferenceResult {
            max_deviation: max_deviation(&first_samples, &second_samples)?,
            tolerance: self.config.tolerance,
        };

        tracing::info!(
            max_deviation = result.max_deviation,
            tolerance = result.tolerance,
            "Verdict: {:?}",
            result.verdict()
        );

        Ok(result)
    }
}
