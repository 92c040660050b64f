//! Each color space/form is modeled with its own type. Conversions are only
//! implemented between neighbouring models, so the path a color takes is
//! always explicit:
//!
//! ```rust
//! use tonal::models::{Oklab, Srgb};
//!
//! let oklch = Oklab::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light(), // convert to srgb-linear.
//! )
//! .to_polar(); // convert to oklch.
//! assert!(oklch.chroma > 0.3);
//! ```

pub mod lab;
pub mod rgb;

pub use lab::{Oklab, Oklch};
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
