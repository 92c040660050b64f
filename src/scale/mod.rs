//! Tonal scale generation.
//!
//! A scale is derived from a single base color. One step of the scale, the
//! anchor, reproduces the base exactly. Every other step gets its lightness
//! from a reference [`Preset`] bent towards the base. Its chroma is blended
//! towards what the gamut allows at that lightness, and its hue is smoothed
//! between two perceptually corrected endpoints.

use bitflags::bitflags;

use crate::{
    color::Component,
    convert::{oklch_to_hex, perceived_hue},
    gamut::max_chroma_in_gamut,
    hex::Hex,
    hue::{find_corrected_hue, MIN_CHROMA},
    math::{hue_delta, lerp, normalize_hue},
    models::Oklch,
    token,
};

pub mod preset;
mod redistribute;

pub use preset::{Preset, ReferenceStep};
pub use redistribute::RedistributionMode;

/// Width of the Gaussian falloff around the anchor, shared by the lightness
/// shift and the chroma blend.
const FALLOFF: Component = 0.15;

/// Chroma at which a base counts as fully colorful when choosing the anchor.
const CHROMA_WEIGHT_SPAN: Component = 0.10;

/// Steps the anchor is pushed darker per squared effective saturation.
const PUSH_FACTOR: Component = 2.0;

/// Above this effective saturation an anchor on [`OVERRIDE_SLOTS`] moves to
/// [`OVERRIDE_TARGET`]. Red and pink bases otherwise sit as a chroma spike
/// where their gamut collapses around L 0.7 to 0.8.
const OVERRIDE_SATURATION: Component = 0.7;
const OVERRIDE_SLOTS: [usize; 2] = [3, 4];
const OVERRIDE_TARGET: usize = 5;

/// Chroma at which the peak boost applies fully.
const COLOR_THRESHOLD: Component = 0.01;

/// Start and width of the chroma ratio window over which the peak boost
/// fades in.
const BOOST_GATE: (Component, Component) = (0.2, 0.3);
const BOOST_STRENGTH: Component = 0.9;

/// Fraction of the gamut that the lightest step of a pushed scale uses.
const LIGHT_END_CHROMA: Component = 0.35;

bitflags! {
    /// Decisions taken while generating a [`Scale`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScaleFlags : u8 {
        /// The anchor sits darker than the step nearest to the base.
        const PUSHED = 1 << 0;
        /// The anchor was moved off the 300/400 slots.
        const ANCHOR_OVERRIDDEN = 1 << 1;
        /// The base has no perceived hue, so no hue correction was done.
        const ACHROMATIC = 1 << 2;
    }
}

/// One step of a generated scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScaleStep {
    /// Step identifier from the preset, like `500`.
    pub step: u16,
    /// The color of this step.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub oklch: Oklch,
    /// The color of this step, quantized.
    pub hex: Hex,
    /// Set on the single step that reproduces the base color.
    pub is_base: bool,
}

/// An ordered scale, lightest step first.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    steps: Vec<ScaleStep>,
    anchor: usize,
    flags: ScaleFlags,
}

impl Scale {
    /// All steps, lightest first.
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    /// Iterate over the steps, lightest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ScaleStep> {
        self.steps.iter()
    }

    /// Index of the step that reproduces the base color.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// The step that reproduces the base color.
    pub fn base(&self) -> &ScaleStep {
        &self.steps[self.anchor]
    }

    /// Decisions taken while generating this scale.
    pub fn flags(&self) -> ScaleFlags {
        self.flags
    }

    /// The scale for a dark theme: the same step identifiers with the colors
    /// in reverse, so step 50 of the dark scale is step 950 of this one.
    pub fn dark(&self) -> Scale {
        let steps = self
            .steps
            .iter()
            .zip(self.steps.iter().rev())
            .map(|(slot, source)| ScaleStep {
                step: slot.step,
                ..*source
            })
            .collect();

        Scale {
            steps,
            anchor: self.steps.len() - 1 - self.anchor,
            flags: self.flags,
        }
    }

    /// The step whose contrast against `background` is closest to `target`.
    /// Earlier steps win ties.
    pub fn pick_by_contrast(&self, background: Hex, target: Component) -> &ScaleStep {
        token::pick_by_contrast(&self.steps, background, target).unwrap_or_else(|| self.base())
    }
}

impl<'a> IntoIterator for &'a Scale {
    type Item = &'a ScaleStep;
    type IntoIter = std::slice::Iter<'a, ScaleStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.steps)
    }
}

/// Gaussian weight of a step `index` by its distance to `anchor`: `1` at the
/// anchor, falling off on both sides.
fn proximity(index: usize, anchor: usize) -> Component {
    let distance = index as Component - anchor as Component;
    (-FALLOFF * distance * distance).exp()
}

/// Where the anchor ended up and why.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    index: usize,
    flags: ScaleFlags,
}

/// Generates scales from base colors using a reference [`Preset`].
#[derive(Clone, Debug, Default)]
pub struct ScaleGenerator {
    preset: Preset,
}

impl ScaleGenerator {
    /// Create a generator for the given reference table.
    pub fn new(preset: Preset) -> Self {
        Self { preset }
    }

    /// The reference table of this generator.
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Generate a scale around `base`. The base is expected to be in range
    /// (see [`Oklch::clamped`]); it is reproduced exactly by one step unless
    /// its lightness falls outside `[0.01, 0.995]` or its chroma outside the
    /// sRGB gamut.
    pub fn generate(&self, base: Oklch) -> Scale {
        let Oklch {
            lightness: base_lightness,
            chroma: base_chroma,
            hue,
        } = base;

        let max_chroma_at_base = max_chroma_in_gamut(base_lightness, hue);
        let chroma_ratio = if max_chroma_at_base > 0.0 {
            (base_chroma / max_chroma_at_base).min(1.0)
        } else {
            0.0
        };

        let target_hue = perceived_hue(oklch_to_hex(base));
        let base_index = self.preset.nearest_index(base_lightness);

        let Anchor { index: anchor, mut flags } =
            self.select_anchor(base_index, base_chroma, chroma_ratio);
        if target_hue.is_none() {
            flags |= ScaleFlags::ACHROMATIC;
        }
        let pushed = flags.contains(ScaleFlags::PUSHED);

        let mode = RedistributionMode::new(&self.preset, base_lightness, anchor, pushed);
        let lightness = mode.lightness(&self.preset);

        let peak = peak_ratio(base_chroma, chroma_ratio);
        tracing::debug!(
            %base_index,
            %anchor,
            ?flags,
            ?mode,
            chroma_ratio,
            peak,
            "scale layout"
        );

        let chroma = self.chroma(&lightness, base_chroma, hue, anchor, pushed, peak);
        let hues = self.hues(&lightness, &chroma, hue, target_hue, anchor);

        let steps = self
            .preset
            .steps()
            .iter()
            .enumerate()
            .map(|(index, reference)| {
                let oklch = Oklch::new(lightness[index], chroma[index], hues[index]);
                ScaleStep {
                    step: reference.step,
                    oklch,
                    hex: oklch_to_hex(oklch),
                    is_base: index == anchor,
                }
            })
            .collect();

        Scale {
            steps,
            anchor,
            flags,
        }
    }

    /// Choose the step that reproduces the base. Saturated bases are pushed
    /// darker in the table so the light end has room for tints.
    fn select_anchor(&self, base_index: usize, base_chroma: Component, chroma_ratio: Component) -> Anchor {
        let chroma_weight = (base_chroma / CHROMA_WEIGHT_SPAN).min(1.0);
        let saturation = chroma_ratio * chroma_weight;
        let push = (PUSH_FACTOR * saturation * saturation).round() as usize;

        let mut flags = ScaleFlags::empty();
        let mut index = push.max(base_index);
        if saturation > OVERRIDE_SATURATION && OVERRIDE_SLOTS.contains(&index) {
            index = OVERRIDE_TARGET;
            flags |= ScaleFlags::ANCHOR_OVERRIDDEN;
        }
        let index = index.min(self.preset.last_index());

        if index > base_index {
            flags |= ScaleFlags::PUSHED;
        }

        Anchor { index, flags }
    }

    fn chroma(
        &self,
        lightness: &[Component],
        base_chroma: Component,
        hue: Component,
        anchor: usize,
        pushed: bool,
        peak: Component,
    ) -> Vec<Component> {
        let light_end = if pushed {
            LIGHT_END_CHROMA * max_chroma_in_gamut(lightness[0], hue)
        } else {
            0.0
        };

        lightness
            .iter()
            .enumerate()
            .map(|(index, &l)| {
                let max = max_chroma_in_gamut(l, hue);
                if pushed && index < anchor {
                    let t = index as Component / anchor as Component;
                    lerp(light_end, base_chroma, t).min(max)
                } else {
                    let blend = 1.0 - proximity(index, anchor);
                    (base_chroma + (peak * max - base_chroma) * blend).clamp(0.0, max)
                }
            })
            .collect()
    }

    /// Correct the hue at both ends of the scale and interpolate towards the
    /// exact base hue at the anchor, taking the short way around.
    fn hues(
        &self,
        lightness: &[Component],
        chroma: &[Component],
        hue: Component,
        target_hue: Option<Component>,
        anchor: usize,
    ) -> Vec<Component> {
        let last = self.preset.last_index();
        let corrected = |index: usize| {
            if chroma[index] > MIN_CHROMA {
                find_corrected_hue(target_hue, lightness[index], chroma[index], hue)
            } else {
                hue
            }
        };

        let first_hue = corrected(0);
        let last_hue = corrected(last);
        let above = hue_delta(first_hue, hue);
        let below = hue_delta(hue, last_hue);

        (0..=last)
            .map(|index| {
                let h = if index == anchor {
                    hue
                } else if index < anchor {
                    first_hue + above * (index as Component / anchor as Component)
                } else {
                    let t = if last > anchor {
                        (index - anchor) as Component / (last - anchor) as Component
                    } else {
                        1.0
                    };
                    hue + below * t
                };
                normalize_hue(h)
            })
            .collect()
    }
}

/// Saturation ratio the steps far from the anchor blend towards. Near gray
/// bases keep their own ratio; bases near the gamut edge get a vivid ramp.
fn peak_ratio(base_chroma: Component, chroma_ratio: Component) -> Component {
    let color_factor = (base_chroma / COLOR_THRESHOLD).min(1.0);
    let (gate_start, gate_width) = BOOST_GATE;
    let gate = ((chroma_ratio - gate_start) / gate_width).clamp(0.0, 1.0);
    let ease = 1.0 - (1.0 - chroma_ratio).powi(3);
    let boost = gate * BOOST_STRENGTH * ease * color_factor;
    chroma_ratio.max(boost)
}

/// Generate a scale around `base` using [`Preset::tailwind`].
pub fn generate_scale(base: Oklch) -> Scale {
    ScaleGenerator::default().generate(base)
}
