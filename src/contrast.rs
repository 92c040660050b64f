//! WCAG 2 contrast between two colors.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use std::fmt;

use crate::{color::Component, hex::Hex, models::Srgb};

/// The relative luminance of a color, `0` for black and `1` for white.
pub fn relative_luminance(hex: Hex) -> Component {
    let linear = Srgb::from(hex).to_linear_light();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// The contrast ratio between two colors, in `[1, 21]`. The order of the
/// arguments does not matter.
pub fn contrast_ratio(a: Hex, b: Hex) -> Component {
    let a = relative_luminance(a);
    let b = relative_luminance(b);
    let (lighter, darker) = if a > b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick white or black text for the given background. White wins as long as
/// it reaches the large text minimum of 3:1.
pub fn text_on(background: Hex) -> Hex {
    if contrast_ratio(background, Hex::WHITE) >= WcagLevel::AaLarge.threshold() {
        Hex::WHITE
    } else {
        Hex::BLACK
    }
}

/// WCAG conformance levels for text contrast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// Normal text, level AA.
    Aa,
    /// Large text, level AA.
    AaLarge,
    /// Normal text, level AAA.
    Aaa,
    /// Large text, level AAA.
    AaaLarge,
}

impl WcagLevel {
    /// Every level, in the order they are usually listed.
    pub const ALL: [WcagLevel; 4] = [
        WcagLevel::Aa,
        WcagLevel::AaLarge,
        WcagLevel::Aaa,
        WcagLevel::AaaLarge,
    ];

    /// The minimum contrast ratio for this level.
    pub const fn threshold(self) -> Component {
        match self {
            WcagLevel::Aa => 4.5,
            WcagLevel::AaLarge => 3.0,
            WcagLevel::Aaa => 7.0,
            WcagLevel::AaaLarge => 4.5,
        }
    }

    /// Returns true if `ratio` meets this level.
    pub fn passes(self, ratio: Component) -> bool {
        ratio >= self.threshold()
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Aaa => "AAA",
            WcagLevel::AaaLarge => "AAA Large",
        })
    }
}
