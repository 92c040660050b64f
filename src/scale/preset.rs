//! Reference lightness tables that drive scale generation.

use crate::{color::Component, error::PresetError};

/// A named step of a scale and the lightness it has before the base color
/// pulls it around.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceStep {
    /// Step identifier, like `500`.
    pub step: u16,
    /// Reference Oklch lightness in `[0, 1]`.
    pub lightness: Component,
}

impl ReferenceStep {
    /// Create a new reference step.
    pub const fn new(step: u16, lightness: Component) -> Self {
        Self { step, lightness }
    }
}

const TAILWIND: [ReferenceStep; 11] = [
    ReferenceStep::new(50, 0.97),
    ReferenceStep::new(100, 0.93),
    ReferenceStep::new(200, 0.88),
    ReferenceStep::new(300, 0.81),
    ReferenceStep::new(400, 0.71),
    ReferenceStep::new(500, 0.62),
    ReferenceStep::new(600, 0.55),
    ReferenceStep::new(700, 0.49),
    ReferenceStep::new(800, 0.42),
    ReferenceStep::new(900, 0.38),
    ReferenceStep::new(950, 0.28),
];

/// An ordered table of reference steps, lightest first.
///
/// A preset always holds at least two steps, step identifiers strictly
/// increase and lightness strictly decreases.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ReferenceStep>", into = "Vec<ReferenceStep>")
)]
pub struct Preset {
    steps: Vec<ReferenceStep>,
}

impl Preset {
    /// Validate and wrap a list of reference steps.
    pub fn new(steps: Vec<ReferenceStep>) -> Result<Self, PresetError> {
        if steps.len() < 2 {
            return Err(PresetError::TooFewSteps(steps.len()));
        }

        for step in &steps {
            if !(0.0..=1.0).contains(&step.lightness) {
                return Err(PresetError::LightnessOutOfRange {
                    step: step.step,
                    lightness: step.lightness,
                });
            }
        }

        for (previous, current) in steps.iter().zip(&steps[1..]) {
            if current.step <= previous.step {
                return Err(PresetError::StepOrder {
                    step: current.step,
                    previous: previous.step,
                });
            }
            if current.lightness >= previous.lightness {
                return Err(PresetError::NotDecreasing { step: current.step });
            }
        }

        Ok(Self { steps })
    }

    /// The 50 to 950 table used by Tailwind style palettes.
    pub fn tailwind() -> Self {
        Self {
            steps: TAILWIND.to_vec(),
        }
    }

    /// All reference steps, lightest first.
    pub fn steps(&self) -> &[ReferenceStep] {
        &self.steps
    }

    /// Index of the last (darkest) step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Reference lightness of the step at `index`.
    pub fn lightness(&self, index: usize) -> Component {
        self.steps[index].lightness
    }

    /// Index of the step whose reference lightness is closest to
    /// `lightness`. The lighter step wins a tie.
    pub fn nearest_index(&self, lightness: Component) -> usize {
        let mut best = 0;
        let mut best_distance = Component::INFINITY;
        for (index, step) in self.steps.iter().enumerate() {
            let distance = (step.lightness - lightness).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl TryFrom<Vec<ReferenceStep>> for Preset {
    type Error = PresetError;

    fn try_from(steps: Vec<ReferenceStep>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<Preset> for Vec<ReferenceStep> {
    fn from(preset: Preset) -> Self {
        preset.steps
    }
}
