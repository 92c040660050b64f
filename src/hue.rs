//! Hue correction.
//!
//! The analytic Oklch hue does not track the hue people name uniformly; the
//! same angle can read as a different hue at another lightness or chroma,
//! most visibly for reds and oranges. [`find_corrected_hue`] searches for
//! the Oklch hue whose rendered hex code has a given perceived (HSL) hue.

use crate::{
    color::Component,
    convert::{oklch_to_hex, perceived_hue},
    math::{hue_distance, normalize_hue},
    models::Oklch,
};

/// Below this chroma a color reads as gray and its hue is not corrected.
pub const MIN_CHROMA: Component = 0.005;

/// One pass of the local search: `radius` degrees either side of a center
/// hue, sampled every `step` degrees.
#[derive(Clone, Copy, Debug)]
struct Pass {
    radius: Component,
    step: Component,
}

/// ±40° in 2° steps.
const COARSE: Pass = Pass {
    radius: 40.0,
    step: 2.0,
};

/// ±2° in 0.2° steps around the coarse winner.
const FINE: Pass = Pass {
    radius: 2.0,
    step: 0.2,
};

#[derive(Clone, Copy, Debug)]
struct Best {
    hue: Component,
    diff: Component,
}

impl Pass {
    fn offsets(self) -> impl Iterator<Item = Component> {
        let count = (2.0 * self.radius / self.step).round() as usize;
        (0..=count).map(move |i| -self.radius + self.step * i as Component)
    }

    /// Sample every offset around `center`, keeping the first candidate with
    /// the smallest distance to `target` in `best`.
    fn scan(self, center: Component, color: Oklch, target: Component, best: &mut Best) {
        for offset in self.offsets() {
            let hue = normalize_hue(center + offset);
            let Some(candidate) = perceived_hue(oklch_to_hex(Oklch { hue, ..color })) else {
                continue;
            };

            let diff = hue_distance(candidate, target);
            if diff < best.diff {
                *best = Best { hue, diff };
            }
        }
    }
}

/// Find the Oklch hue near `hint` that renders `(lightness, chroma)` with the
/// perceived hue `target`.
///
/// `hint` is returned unchanged when the target is undefined (achromatic),
/// when `chroma` is below [`MIN_CHROMA`], or when no candidate renders with a
/// defined hue. Otherwise the closest candidate is returned, even if it does
/// not match exactly.
pub fn find_corrected_hue(
    target: Option<Component>,
    lightness: Component,
    chroma: Component,
    hint: Component,
) -> Component {
    let Some(target) = target else {
        return hint;
    };
    if chroma < MIN_CHROMA {
        return hint;
    }

    let color = Oklch::new(lightness, chroma, hint);
    let mut best = Best {
        hue: hint,
        diff: Component::INFINITY,
    };

    COARSE.scan(hint, color, target, &mut best);
    let coarse = best.hue;
    FINE.scan(coarse, color, target, &mut best);

    tracing::trace!(
        target_hue = target,
        lightness,
        chroma,
        hint,
        hue = best.hue,
        diff = best.diff,
        "corrected hue"
    );

    best.hue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::hex_to_oklch;
    use crate::hex::Hex;

    #[test]
    fn pass_offsets_cover_the_window() {
        let coarse: Vec<_> = COARSE.offsets().collect();
        assert_eq!(coarse.len(), 41);
        assert_eq!(coarse[0], -40.0);
        assert_eq!(coarse[20], 0.0);
        assert_eq!(coarse[40], 40.0);

        let fine: Vec<_> = FINE.offsets().collect();
        assert_eq!(fine.len(), 21);
        crate::assert_component_eq!(fine[0], -2.0);
        crate::assert_component_eq!(fine[10], 0.0);
        crate::assert_component_eq!(fine[20], 2.0);
    }

    #[test]
    fn achromatic_target_short_circuits() {
        assert_eq!(find_corrected_hue(None, 0.6, 0.2, 123.4), 123.4);
    }

    #[test]
    fn low_chroma_short_circuits() {
        assert_eq!(find_corrected_hue(Some(10.0), 0.6, 0.004, 123.4), 123.4);
    }

    #[test]
    fn falls_back_to_hint_when_every_candidate_is_gray() {
        // Everything this dark renders as #000000.
        assert_eq!(find_corrected_hue(Some(10.0), 0.0, 0.006, 77.0), 77.0);
    }

    #[test]
    fn own_color_needs_no_correction() {
        let hex: Hex = "#2a6db6".parse().unwrap();
        let oklch = hex_to_oklch(hex);
        let target = perceived_hue(hex);

        let hue = find_corrected_hue(target, oklch.lightness, oklch.chroma, oklch.hue);
        assert!(hue_distance(hue, oklch.hue) < 2.5);

        let rendered = perceived_hue(oklch_to_hex(Oklch { hue, ..oklch }));
        assert!(hue_distance(rendered.unwrap(), target.unwrap()) < 0.5);
    }

    #[test]
    fn corrects_toward_the_target_hue() {
        // Orange at a lighter, less saturated point of its scale.
        let hex: Hex = "#d2691e".parse().unwrap();
        let oklch = hex_to_oklch(hex);
        let target = perceived_hue(hex).unwrap();

        let hue = find_corrected_hue(Some(target), 0.8, 0.08, oklch.hue);
        assert!(hue_distance(hue, oklch.hue) <= 42.0);

        let rendered = perceived_hue(oklch_to_hex(Oklch::new(0.8, 0.08, hue))).unwrap();
        let uncorrected = perceived_hue(oklch_to_hex(Oklch::new(0.8, 0.08, oklch.hue))).unwrap();
        assert!(hue_distance(rendered, target) <= hue_distance(uncorrected, target));
        assert!(hue_distance(rendered, target) < 3.0, "{rendered} vs {target}");
    }

    #[test]
    #[cfg(not(feature = "f32"))]
    fn near_tie_keeps_the_first_best_candidate() {
        // Lightest step of the #8ed4b7 scale. Two renderings are equally far
        // from the target hue up to rounding; the coarse winner at +2° holds.
        let hex: Hex = "#8ed4b7".parse().unwrap();
        let oklch = hex_to_oklch(hex);
        let (lightness, chroma) = (0.971365019182283, 0.04136810302734376);

        let hue = find_corrected_hue(perceived_hue(hex), lightness, chroma, oklch.hue);
        crate::assert_component_eq!(hue, normalize_hue(oklch.hue + 2.0), 1.0e-9);
        assert_eq!(
            oklch_to_hex(Oklch::new(lightness, chroma, hue)).to_string(),
            "#dcfff1"
        );
    }
}
