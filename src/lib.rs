//! # `diffimg`
//!
//! Compare two raster images sample by sample for near-equality.
//!
//! Both images are decoded into `height × width × channels` sample arrays.
//! The largest absolute difference between corresponding samples is the
//! maximum deviation; a pair is considered the same when it does not exceed
//! the tolerance (3 by default).
//!
//! ## Example
//!
//! ```no_run
//! use diffimg::{Checker, Config};
//!
//! # fn main() -> diffimg::Result<()> {
//! let checker = Checker::new(Config::default());
//! let result = checker.compare("expected.png", "actual.png")?;
//!
//! if !result.is_same() {
//!     println!("max deviation {}", result.max_deviation());
//! }
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod error;
pub mod image;

pub use compare::{Checker, Config, DifferenceResult, Verdict, TOLERANCE};
pub use error::{Error, Result};
