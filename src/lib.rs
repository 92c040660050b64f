//! tonal builds perceptual color scales from a single base color.
//!
//! Scales are computed in the Oklch color space: lightness follows a
//! reference table bent towards the base, chroma stays inside the sRGB gamut
//! and the hue is corrected so every step keeps the hue people see in the
//! base color.
//!
//! ```rust
//! use tonal::{generate_scale, parse_color, stylesheet};
//!
//! let base = parse_color("#2a6db6").unwrap().to_oklch();
//! let scale = generate_scale(base);
//!
//! assert_eq!(scale.steps().len(), 11);
//! assert_eq!(scale.base().step, 600);
//! assert!(stylesheet("blue", &scale).contains("--blue-600"));
//! ```

#![deny(missing_docs)]

mod color;
pub mod contrast;
mod convert;
pub mod css;
mod error;
pub mod gamut;
mod hex;
pub mod hue;
mod math;
pub mod models;
mod parse;
pub mod scale;
pub mod token;


pub use color::{Component, Components};
pub use contrast::{contrast_ratio, relative_luminance, text_on, WcagLevel};
pub use convert::{hex_to_oklch, oklch_to_hex, perceived_hue};
pub use css::{oklch_function, stylesheet, Stylesheet};
pub use error::{ParseError, PresetError};
pub use gamut::{is_in_gamut, max_chroma_in_gamut};
pub use hex::Hex;
pub use hue::find_corrected_hue;
pub use math::{hue_delta, hue_distance, normalize_hue};
pub use models::{Oklab, Oklch, Srgb, SrgbLinear};
pub use parse::{parse_color, parse_oklch};
pub use scale::{
    generate_scale, Preset, RedistributionMode, ReferenceStep, Scale, ScaleFlags, ScaleGenerator,
    ScaleStep,
};
pub use token::{pick_by_contrast, Background, ThemeTokens};
