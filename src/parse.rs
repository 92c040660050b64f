//! Lenient parsing of colors typed by a person.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::{color::Component, error::ParseError, hex::Hex, models::Oklch};

static OKLCH_FUNCTION: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    RegexBuilder::new(r"oklch\(\s*([0-9.]+)%?\s+([0-9.]+)\s+([0-9.]+)\s*\)")
        .case_insensitive(true)
        .build()
});

/// Parse a color given either as an `oklch(L C H)` function or as a hex
/// code.
///
/// Surrounding whitespace is ignored. Hex codes may be written without the
/// leading `#` or with more than one of them, but must have six digits.
/// `oklch()` input is converted to the nearest hex code.
///
/// ```
/// use tonal::{parse_color, Hex};
///
/// assert_eq!(parse_color(" 2a6db6 "), Ok(Hex::new(0x2a, 0x6d, 0xb6)));
/// assert_eq!(parse_color("oklch(100% 0 0)"), Ok(Hex::WHITE));
/// ```
pub fn parse_color(input: &str) -> Result<Hex, ParseError> {
    let trimmed = input.trim();

    if let Some(oklch) = parse_oklch(trimmed)? {
        return Ok(oklch.to_hex());
    }

    let normalized = format!("#{}", trimmed.trim_start_matches('#'));
    normalized
        .parse()
        .map_err(|_| ParseError::InvalidHex(input.to_string()))
}

/// Find an `oklch(L C H)` function in `input`.
///
/// Lightness may be given as a fraction or, when above `1`, as a percentage
/// with or without the `%` sign. Returns `Ok(None)` if `input` does not
/// mention `oklch(` at all.
pub fn parse_oklch(input: &str) -> Result<Option<Oklch>, ParseError> {
    let invalid = || ParseError::InvalidOklch(input.to_string());

    let pattern = compiled(&OKLCH_FUNCTION)?;
    let Some(captures) = pattern.captures(input) else {
        return if input.to_ascii_lowercase().contains("oklch(") {
            Err(invalid())
        } else {
            Ok(None)
        };
    };

    let number = |group: usize| -> Result<Component, ParseError> {
        captures
            .get(group)
            .and_then(|m| m.as_str().parse::<Component>().ok())
            .ok_or_else(invalid)
    };

    let mut lightness = number(1)?;
    let chroma = number(2)?;
    let hue = number(3)?;

    if lightness > 1.0 {
        lightness /= 100.0;
    }

    Ok(Some(Oklch::new(lightness, chroma, hue)))
}

fn compiled(pattern: &Result<Regex, regex::Error>) -> Result<&Regex, ParseError> {
    pattern.as_ref().map_err(|err| ParseError::InvalidPattern(err.clone()))
}
