//! Model a color in the sRGB color space.

use crate::color::{Component, Components};
use crate::hex::Hex;

pub mod encoding {
    //! Tags that specify how the components of an [`super::Rgb`] are
    //! encoded.

    /// Implemented by the tags that specify how components are encoded.
    pub trait Encoding {}

    /// Components carry the sRGB transfer curve, as found in hex codes.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

tonal_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

/// Remove the sRGB transfer curve from a single channel.
pub fn srgb_to_linear(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply the sRGB transfer curve to a single channel.
pub fn linear_to_srgb(value: Component) -> Component {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components().map(srgb_to_linear).into()
    }

    /// Quantize to 8-bit channels. Components are clamped to `[0, 1]` first,
    /// so out of gamut values never wrap.
    pub fn to_hex(&self) -> Hex {
        let Components(red, green, blue) =
            self.to_components().map(|v| (v.clamp(0.0, 1.0) * 255.0).round());
        Hex::new(red as u8, green as u8, blue as u8)
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components().map(linear_to_srgb).into()
    }
}

impl From<Hex> for Srgb {
    fn from(value: Hex) -> Self {
        let channel = |v: u8| v as Component / 255.0;
        Srgb::new(channel(value.red), channel(value.green), channel(value.blue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transfer_curve_segments() {
        assert_component_eq!(srgb_to_linear(0.0), 0.0);
        assert_component_eq!(srgb_to_linear(1.0), 1.0);
        assert_component_eq!(srgb_to_linear(0.04), 0.04 / 12.92);
        assert_component_eq!(srgb_to_linear(0.5), 0.214041);

        assert_component_eq!(linear_to_srgb(0.0), 0.0);
        assert_component_eq!(linear_to_srgb(1.0), 1.0);
        assert_component_eq!(linear_to_srgb(0.003), 0.003 * 12.92);
        assert_component_eq!(linear_to_srgb(0.214041), 0.5);
    }

    #[test]
    fn gamma_round_trip() {
        let srgb = Srgb::new(0.823529, 0.411765, 0.117647);
        let linear = srgb.to_linear_light();
        assert_component_eq!(linear.red, 0.644480);
        assert_component_eq!(linear.green, 0.141263);
        assert_component_eq!(linear.blue, 0.012983);

        let back = linear.to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for hex in ["#000000", "#ffffff", "#2a6db6", "#0a0b0c", "#808080", "#ff0000", "#fe01ab"] {
            let parsed: Hex = hex.parse().unwrap();
            assert_eq!(Srgb::from(parsed).to_hex(), parsed);
            assert_eq!(Srgb::from(parsed).to_hex().to_string(), hex);
        }
    }

    #[test]
    fn to_hex_clamps_out_of_range_components() {
        assert_eq!(Srgb::new(-0.2, 1.3, 0.5).to_hex(), Hex::new(0, 255, 128));
        assert_eq!(Srgb::new(0.02, 0.0, 0.0).to_hex().to_string(), "#050000");
    }
}
