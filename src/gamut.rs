//! Gamut limits of sRGB expressed in Oklch.
//!
//! Unlike the CSS gamut mapping algorithm, which searches for the chroma of
//! a single out of gamut color until a just noticeable difference is reached,
//! scale generation needs the chroma boundary itself for many lightness
//! values. The search here therefore runs a fixed number of bisections
//! without any deltaE early exit.

use crate::{
    color::Component,
    models::{Oklch, SrgbLinear},
};

/// How far a linear channel may leave `[0, 1]` and still count as displayable.
/// Absorbs floating point error right at the boundary.
const TOLERANCE: Component = 0.001;

/// Number of bisections of the chroma range.
const ITERATIONS: usize = 20;

impl SrgbLinear {
    /// Returns true if every channel lies within `[0, 1]`, give or take
    /// `0.001`.
    pub fn in_gamut(&self) -> bool {
        self.to_components()
            .all(|v| (-TOLERANCE..=1.0 + TOLERANCE).contains(&v))
    }
}

impl Oklch {
    /// Returns true if this color can be displayed in sRGB.
    pub fn in_gamut(&self) -> bool {
        self.to_rectangular().to_linear_light().in_gamut()
    }
}

/// Returns true if the Oklch color `(lightness, chroma, hue)` can be
/// displayed in sRGB.
pub fn is_in_gamut(lightness: Component, chroma: Component, hue: Component) -> bool {
    Oklch::new(lightness, chroma, hue).in_gamut()
}

/// Binary search the largest chroma in `[0, 0.4]` that keeps `(lightness,
/// hue)` inside the sRGB gamut.
///
/// `lo` is always in gamut and `hi` possibly out of it; after a fixed
/// number of bisections `lo` is returned, which is within `0.4 / 2^20` of the
/// boundary.
pub fn max_chroma_in_gamut(lightness: Component, hue: Component) -> Component {
    let mut lo: Component = 0.0;
    let mut hi = Oklch::MAX_CHROMA;

    for _ in 0..ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if is_in_gamut(lightness, mid, hue) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
