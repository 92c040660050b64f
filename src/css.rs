//! CSS output of generated scales.

use std::fmt::{self, Write};

use crate::{models::Oklch, scale::Scale};

/// Format a color as a CSS `oklch()` function, with lightness and chroma
/// rounded to 3 decimals and the hue to 1.
pub fn oklch_function(color: &Oklch) -> String {
    format!(
        "oklch({:.3} {:.3} {:.1})",
        color.lightness, color.chroma, color.hue
    )
}

/// Custom property declarations for a scale in a light and a dark theme.
///
/// The light block assigns every step its own color under `:root, .light`.
/// The dark block under `.dark` keeps the step names but uses the colors in
/// reverse, see [`Scale::dark`].
pub struct Stylesheet<'a> {
    name: &'a str,
    scale: &'a Scale,
}

impl<'a> Stylesheet<'a> {
    /// Declare the steps of `scale` as `--<name>-<step>` properties.
    pub fn new(name: &'a str, scale: &'a Scale) -> Self {
        Self { name, scale }
    }

    fn write_block(
        &self,
        f: &mut fmt::Formatter<'_>,
        selector: &str,
        scale: &Scale,
    ) -> fmt::Result {
        writeln!(f, "{selector} {{")?;
        for step in scale {
            writeln!(
                f,
                "  --{}-{}: {}; /* {} */",
                self.name,
                step.step,
                oklch_function(&step.oklch),
                step.hex
            )?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Stylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/* Light */\n")?;
        self.write_block(f, ":root, .light", self.scale)?;
        f.write_str("\n\n/* Dark */\n")?;
        self.write_block(f, ".dark", &self.scale.dark())
    }
}

/// Render the light and dark stylesheet for `scale`.
pub fn stylesheet(name: &str, scale: &Scale) -> String {
    Stylesheet::new(name, scale).to_string()
}
