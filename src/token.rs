//! Picking scale steps for theme roles by contrast against the page.

use crate::{
    color::Component,
    contrast::contrast_ratio,
    hex::Hex,
    scale::{Scale, ScaleStep},
};

/// Return the step whose contrast ratio against `background` is closest to
/// `target`, or `None` if `steps` is empty. The first of equally close steps
/// wins.
pub fn pick_by_contrast(
    steps: &[ScaleStep],
    background: Hex,
    target: Component,
) -> Option<&ScaleStep> {
    let mut best = None;
    let mut best_distance = Component::INFINITY;

    for step in steps {
        let distance = (contrast_ratio(step.hex, background) - target).abs();
        if distance < best_distance {
            best = Some(step);
            best_distance = distance;
        }
    }

    best
}

/// The page a theme is rendered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Background {
    /// White page.
    #[default]
    Light,
    /// Black page.
    Dark,
}

impl Background {
    /// The page color.
    pub const fn color(self) -> Hex {
        match self {
            Background::Light => Hex::WHITE,
            Background::Dark => Hex::BLACK,
        }
    }
}

/// Target contrast ratios against the page for each theme role.
mod target {
    use crate::color::Component;

    pub const TEXT_PRIMARY: Component = 12.0;
    pub const TEXT_SECONDARY: Component = 4.5;
    pub const ACCENT: Component = 4.0;
    pub const ACCENT_HOVER: Component = 5.0;
    pub const SURFACE: Component = 1.1;
    pub const SURFACE_RAISED: Component = 1.25;
    pub const RAISED_HOVER: Component = 1.5;
    pub const BORDER_SUBTLE: Component = 1.3;
    pub const BORDER: Component = 2.0;
    pub const BORDER_HOVER: Component = 3.0;
    pub const INPUT_BACKGROUND: Component = 1.05;
}

/// Scale steps assigned to the roles of a user interface theme.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThemeTokens {
    /// Body text.
    pub text_primary: ScaleStep,
    /// Muted text.
    pub text_secondary: ScaleStep,
    /// Buttons and links.
    pub accent: ScaleStep,
    /// Hovered buttons and links.
    pub accent_hover: ScaleStep,
    /// Cards and panels.
    pub surface: ScaleStep,
    /// Panels raised above a surface.
    pub surface_raised: ScaleStep,
    /// Hovered raised panels.
    pub raised_hover: ScaleStep,
    /// Dividers.
    pub border_subtle: ScaleStep,
    /// Outlines of controls.
    pub border: ScaleStep,
    /// Outlines of hovered controls.
    pub border_hover: ScaleStep,
    /// Text inputs.
    pub input_background: ScaleStep,
}

impl ThemeTokens {
    /// Assign a step of `scale` to every role by contrast against the
    /// `background` page.
    pub fn pick(scale: &Scale, background: Background) -> Self {
        let page = background.color();
        let pick = |target| *scale.pick_by_contrast(page, target);

        Self {
            text_primary: pick(target::TEXT_PRIMARY),
            text_secondary: pick(target::TEXT_SECONDARY),
            accent: pick(target::ACCENT),
            accent_hover: pick(target::ACCENT_HOVER),
            surface: pick(target::SURFACE),
            surface_raised: pick(target::SURFACE_RAISED),
            raised_hover: pick(target::RAISED_HOVER),
            border_subtle: pick(target::BORDER_SUBTLE),
            border: pick(target::BORDER),
            border_hover: pick(target::BORDER_HOVER),
            input_background: pick(target::INPUT_BACKGROUND),
        }
    }

    /// Every role with its CSS name, in declaration order.
    pub fn roles(&self) -> [(&'static str, &ScaleStep); 11] {
        [
            ("text-primary", &self.text_primary),
            ("text-secondary", &self.text_secondary),
            ("accent", &self.accent),
            ("accent-hover", &self.accent_hover),
            ("surface", &self.surface),
            ("surface-raised", &self.surface_raised),
            ("raised-hover", &self.raised_hover),
            ("border-subtle", &self.border_subtle),
            ("border", &self.border),
            ("border-hover", &self.border_hover),
            ("input-background", &self.input_background),
        ]
    }
}
