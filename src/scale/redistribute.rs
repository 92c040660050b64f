//! Moving the reference lightness table so that one step lands on the base
//! color.

use crate::color::Component;

use super::{preset::Preset, proximity};

/// Lightness is kept inside this range so no step turns into pure white or
/// black.
const LIGHTNESS_RANGE: (Component, Component) = (0.01, 0.995);

/// Gap enforced between neighbouring steps that collide.
const MONOTONIC_STEP: Component = 0.005;

/// How the reference lightness table is bent towards the base lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RedistributionMode {
    /// The anchor was pushed darker than the step nearest to the base. The
    /// segments above and below the anchor are rescaled linearly so the
    /// anchor lands on `base_lightness` while the first and last steps keep
    /// their reference values.
    Pushed {
        /// Index of the anchor step.
        anchor: usize,
        /// Lightness of the base color.
        base_lightness: Component,
    },
    /// The anchor is the step nearest to the base. Every step is moved by
    /// `shift`, weighted by a Gaussian of its distance to the anchor.
    Gaussian {
        /// Index of the anchor step.
        anchor: usize,
        /// Base lightness minus the anchor's reference lightness.
        shift: Component,
    },
}

impl RedistributionMode {
    /// Select the mode for a base lightness anchored at `anchor`.
    pub fn new(preset: &Preset, base_lightness: Component, anchor: usize, pushed: bool) -> Self {
        if pushed {
            Self::Pushed {
                anchor,
                base_lightness,
            }
        } else {
            Self::Gaussian {
                anchor,
                shift: base_lightness - preset.lightness(anchor),
            }
        }
    }

    /// Index of the anchor step.
    pub fn anchor(&self) -> usize {
        match *self {
            Self::Pushed { anchor, .. } | Self::Gaussian { anchor, .. } => anchor,
        }
    }

    /// Lightness for every step of `preset`, clamped and strictly
    /// decreasing.
    pub fn lightness(&self, preset: &Preset) -> Vec<Component> {
        let mut values: Vec<Component> = match *self {
            Self::Pushed {
                anchor,
                base_lightness,
            } => rescale(preset, anchor, base_lightness),
            Self::Gaussian { anchor, shift } => preset
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| step.lightness + shift * proximity(index, anchor))
                .collect(),
        };

        let (min, max) = LIGHTNESS_RANGE;
        for value in values.iter_mut() {
            *value = value.clamp(min, max);
        }

        for index in 1..values.len() {
            if values[index] >= values[index - 1] {
                values[index] = values[index - 1] - MONOTONIC_STEP;
            }
        }

        values
    }
}

/// Piecewise linear rescale of the reference table around `anchor`.
fn rescale(preset: &Preset, anchor: usize, base_lightness: Component) -> Vec<Component> {
    let top = preset.lightness(0);
    let bottom = preset.lightness(preset.last_index());
    let pivot = preset.lightness(anchor);

    let reference_above = top - pivot;
    let reference_below = pivot - bottom;
    let span_above = top - base_lightness;
    let span_below = base_lightness - bottom;

    preset
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            if index <= anchor {
                let t = if reference_above > 0.0 {
                    (top - step.lightness) / reference_above
                } else {
                    1.0
                };
                top - t * span_above
            } else {
                let t = if reference_below > 0.0 {
                    (pivot - step.lightness) / reference_below
                } else {
                    1.0
                };
                base_lightness - t * span_below
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::scale::preset::ReferenceStep;

    fn assert_strictly_decreasing(values: &[Component]) {
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0], "{values:?}");
        }
    }

    #[test]
    fn selects_mode() {
        let preset = Preset::tailwind();
        assert_eq!(
            RedistributionMode::new(&preset, 0.7, 5, true),
            RedistributionMode::Pushed {
                anchor: 5,
                base_lightness: 0.7
            }
        );
        let mode = RedistributionMode::new(&preset, 0.53, 6, false);
        assert_eq!(mode.anchor(), 6);
        let RedistributionMode::Gaussian { shift, .. } = mode else {
            panic!("expected a gaussian shift, got {mode:?}");
        };
        assert_component_eq!(shift, -0.02, 1.0e-12);
    }

    #[test]
    fn gaussian_moves_the_anchor_fully() {
        let preset = Preset::tailwind();
        let values = RedistributionMode::new(&preset, 0.53, 6, false).lightness(&preset);

        assert_eq!(values.len(), 11);
        assert_component_eq!(values[6], 0.53, 1.0e-12);
        // One step away moves by exp(-0.15) of the shift.
        assert_component_eq!(values[5], 0.62 - 0.02 * (-0.15 as Component).exp(), 1.0e-12);
        // The ends barely move.
        assert_component_eq!(
            values[0],
            0.97 - 0.02 * (-0.15 * 36.0 as Component).exp(),
            1.0e-12
        );
        assert_component_eq!(
            values[10],
            0.28 - 0.02 * (-0.15 * 16.0 as Component).exp(),
            1.0e-12
        );
        assert!((values[10] - 0.28).abs() < 2.0e-3);
        assert_strictly_decreasing(&values);
    }

    #[test]
    fn pushed_keeps_the_ends_and_lands_on_the_base() {
        let preset = Preset::tailwind();
        let values = RedistributionMode::new(&preset, 0.75, 5, true).lightness(&preset);

        assert_component_eq!(values[0], 0.97, 1.0e-12);
        assert_component_eq!(values[5], 0.75, 1.0e-12);
        assert_component_eq!(values[10], 0.28, 1.0e-12);

        // Relative spacing above the anchor is preserved: step 300 sat at
        // (0.97 - 0.81) / (0.97 - 0.62) of the way down.
        let t = (0.97 - 0.81) / (0.97 - 0.62);
        assert_component_eq!(values[3], 0.97 - t * (0.97 - 0.75), 1.0e-12);
        assert_strictly_decreasing(&values);
    }

    #[test]
    fn pushed_onto_the_first_step() {
        let preset = Preset::tailwind();
        let values = RedistributionMode::new(&preset, 0.9, 0, true).lightness(&preset);

        assert_component_eq!(values[0], 0.9, 1.0e-12);
        assert_component_eq!(values[10], 0.28, 1.0e-12);
        assert_strictly_decreasing(&values);
    }

    #[test]
    fn clamps_to_the_lightness_range() {
        let preset = Preset::tailwind();
        // A base far brighter than the table squeezes the top steps against
        // the upper clamp.
        let values = RedistributionMode::new(&preset, 1.0, 0, false).lightness(&preset);

        assert_eq!(values[0], 0.995);
        assert!(values[1] < values[0]);
        assert_strictly_decreasing(&values);
        assert!(values.iter().all(|&v| (0.01..=0.995).contains(&v)));
    }

    #[test]
    fn collisions_step_down_by_a_fixed_gap() {
        let preset = Preset::new(vec![
            ReferenceStep::new(1, 0.5),
            ReferenceStep::new(2, 0.011),
            ReferenceStep::new(3, 0.01),
        ])
        .unwrap();
        let values = RedistributionMode::new(&preset, 0.0, 1, false).lightness(&preset);

        // Steps 2 and 3 both clamp to 0.01, then step 3 is pushed below it.
        assert_component_eq!(values[1], 0.01, 1.0e-12);
        assert_component_eq!(values[2], 0.01 - MONOTONIC_STEP, 1.0e-12);
    }
}
