//! Error types for parsing colors and validating presets.
//!
//! The numeric pipeline itself never fails; errors only come from text input
//! and from caller supplied configuration.

use thiserror::Error;

use crate::color::Component;

/// Error returned when a textual color can not be understood.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input is not a `#rrggbb` hex color.
    #[error("invalid hex color {0:?} (expected #rrggbb)")]
    InvalidHex(String),
    /// The input looks like an `oklch(...)` function but its arguments are
    /// malformed.
    #[error("invalid oklch color {0:?} (expected oklch(L C H))")]
    InvalidOklch(String),
    /// The built-in `oklch()` pattern failed to compile.
    #[error("invalid oklch pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Error returned when a lightness preset can not drive a scale.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    /// A preset needs at least a lightest and a darkest step.
    #[error("preset needs at least 2 steps, got {0}")]
    TooFewSteps(usize),
    /// A reference lightness is outside `[0, 1]` or not a number.
    #[error("lightness {lightness} of step {step} is outside [0, 1]")]
    LightnessOutOfRange {
        /// Identifier of the offending step.
        step: u16,
        /// The rejected lightness.
        lightness: Component,
    },
    /// Reference lightness must strictly decrease from the first step to the
    /// last.
    #[error("lightness of step {step} does not decrease from the previous step")]
    NotDecreasing {
        /// Identifier of the offending step.
        step: u16,
    },
    /// Step identifiers must strictly increase.
    #[error("step {step} does not increase from the previous step {previous}")]
    StepOrder {
        /// Identifier of the offending step.
        step: u16,
        /// Identifier of the step before it.
        previous: u16,
    },
}
