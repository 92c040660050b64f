//! Composite conversions between hex codes and Oklch. These are the entry and
//! exit points used by the rest of the crate; everything in between goes
//! through the models in [`crate::models`].

use crate::{
    color::Component,
    hex::Hex,
    models::{Oklab, Oklch, Srgb},
};

/// Convert a hex code to Oklch.
pub fn hex_to_oklch(hex: Hex) -> Oklch {
    Oklab::from(Srgb::from(hex).to_linear_light()).to_polar()
}

/// Convert an Oklch color to the nearest hex code. Out of gamut colors are
/// clipped per channel.
pub fn oklch_to_hex(color: Oklch) -> Hex {
    color
        .to_rectangular()
        .to_linear_light()
        .to_gamma_encoded()
        .to_hex()
}

/// The hue a viewer would name for this hex code, approximated by the HSL
/// hue of its sRGB channels. Returns `None` for (nearly) achromatic colors.
pub fn perceived_hue(hex: Hex) -> Option<Component> {
    Srgb::from(hex).hue()
}

impl Hex {
    /// Convert this hex code to Oklch.
    pub fn to_oklch(&self) -> Oklch {
        hex_to_oklch(*self)
    }
}

impl Oklch {
    /// Convert to the nearest hex code.
    pub fn to_hex(&self) -> Hex {
        oklch_to_hex(*self)
    }
}

impl Srgb {
    /// The HSL hue of this color in degrees, `[0, 360)`. The hue is powerless
    /// when the channel spread is below `0.001`, in which case `None` is
    /// returned.
    pub fn hue(&self) -> Option<Component> {
        util::rgb_to_hue(self.red, self.green, self.blue)
    }
}

mod util {
    use crate::color::Component;

    /// Channel spread below which a color is considered achromatic.
    const ACHROMATIC_DELTA: Component = 0.001;

    /// Calculate the HSL hue from RGB components.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hue(red: Component, green: Component, blue: Component) -> Option<Component> {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;
        if delta < ACHROMATIC_DELTA {
            return None;
        }

        let sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Some(sector / 6.0 * 360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn hex(s: &str) -> Hex {
        s.parse().unwrap()
    }

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TESTS: &[(&str, Component, Component, Component)] = &[
            ("#d2691e", 0.634398, 0.154992, 50.27),
            ("#ffffff", 1.000000, 0.000000, Component::NAN),
            ("#ff0000", 0.627955, 0.257683, 29.23),
            ("#00ff00", 0.866440, 0.294827, 142.50),
            ("#0000ff", 0.452014, 0.313214, 264.05),
        ];

        for &(source, lightness, chroma, hue) in TESTS {
            println!("{source}");
            let oklch = hex_to_oklch(hex(source));
            assert_component_eq!(oklch.lightness, lightness, 1.0e-4);
            assert_component_eq!(oklch.chroma, chroma, 1.0e-4);
            if !hue.is_nan() {
                assert_component_eq!(oklch.hue, hue, 0.05);
            }
        }
    }

    #[test]
    fn hex_round_trips_through_oklch() {
        for red in (0..=255).step_by(17) {
            for green in (0..=255).step_by(17) {
                for blue in (0..=255).step_by(17) {
                    let source = Hex::new(red, green, blue);
                    assert_eq!(oklch_to_hex(hex_to_oklch(source)), source);
                }
            }
        }
    }

    #[test]
    fn oklch_round_trips_through_hex() {
        let samples = [
            Oklch::new(0.5, 0.1, 30.0),
            Oklch::new(0.7, 0.1, 140.0),
            Oklch::new(0.45, 0.15, 264.0),
            Oklch::new(0.9, 0.12, 100.0),
            Oklch::new(0.35, 0.1, 330.0),
        ];

        for sample in samples {
            let back = hex_to_oklch(oklch_to_hex(sample));
            assert_component_eq!(back.lightness, sample.lightness, 0.01);
            assert_component_eq!(back.chroma, sample.chroma, 0.01);
            // 8-bit quantization moves the hue angle by up to a couple of
            // degrees at these chroma levels.
            assert!(
                crate::math::hue_distance(back.hue, sample.hue) < 3.0,
                "{sample:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn perceived_hue_uses_hsl_sectors() {
        assert_component_eq!(perceived_hue(hex("#ff0000")).unwrap(), 0.0);
        assert_component_eq!(perceived_hue(hex("#00ff00")).unwrap(), 120.0);
        assert_component_eq!(perceived_hue(hex("#0000ff")).unwrap(), 240.0);
        assert_component_eq!(perceived_hue(hex("#ff00ff")).unwrap(), 300.0);
        assert_component_eq!(perceived_hue(hex("#d2691e")).unwrap(), 25.0);
        // rgb(117 133 71)
        assert_component_eq!(perceived_hue(hex("#758547")).unwrap(), 75.48, 0.01);
    }

    #[test]
    #[cfg(not(feature = "f32"))]
    fn perceived_hue_breaks_near_ties_by_sixths_of_a_turn() {
        // Both candidates sit 6/7° from the target; rounding of h / 6 * 360
        // decides which is closer.
        let target = perceived_hue(hex("#8ed4b7")).unwrap();
        let closer = perceived_hue(hex("#dcfff1")).unwrap();
        let farther = perceived_hue(hex("#dcfff0")).unwrap();

        let closer = crate::math::hue_distance(closer, target);
        let farther = crate::math::hue_distance(farther, target);
        assert_component_eq!(closer, farther, 1.0e-12);
        assert!(closer < farther, "{closer} vs {farther}");
    }

    #[test]
    fn hue_is_powerless_if_there_is_no_chroma() {
        assert!(perceived_hue(Hex::WHITE).is_none());
        assert!(perceived_hue(Hex::BLACK).is_none());
        assert!(perceived_hue(hex("#808080")).is_none());
        assert!(Srgb::new(0.5, 0.5005, 0.5).hue().is_none());
    }

    #[test]
    fn clipped_when_out_of_gamut() {
        let out_of_gamut = Oklch::new(0.6, 0.4, 150.0);
        // Negative channels clip to zero instead of wrapping.
        let hex = out_of_gamut.to_hex();
        assert_eq!(hex.red, 0);
        assert_eq!(hex.blue, 0);
        assert!(hex.green > 128);
    }
}
