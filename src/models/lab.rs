//! Models for the rectangular (Oklab) and polar (Oklch) forms of the Oklab
//! color space.
//! <https://bottosson.github.io/posts/oklab/>

use crate::{
    color::Component,
    math::{normalize_hue, transform, transform_3x3, Transform},
    models::rgb::SrgbLinear,
};

tonal_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// rectangular orthogonal form.
    pub struct Oklab {
        /// The lightness component.
        lightness: Component,
        /// The green-red axis.
        a: Component,
        /// The blue-yellow axis.
        b: Component,
    }
}

impl Oklab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Oklch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Oklch::new(self.lightness, chroma, hue)
    }

    /// Convert to linear light sRGB. The result is not clamped and may leave
    /// `[0, 1]` for colors outside of the sRGB gamut.
    pub fn to_linear_light(&self) -> SrgbLinear {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_LINEAR_SRGB: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_LINEAR_SRGB, lms).into()
    }
}

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LINEAR_SRGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&LINEAR_SRGB_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

tonal_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// cylindrical polar form.
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct Oklch {
        /// The lightness component, `0` is black and `1` is white.
        lightness: Component,
        /// The chroma component, `0` is gray.
        chroma: Component,
        /// The hue angle in degrees, `[0, 360)`.
        hue: Component,
    }
}

impl Oklch {
    /// Upper bound of the chroma a caller may dial in.
    pub const MAX_CHROMA: Component = 0.4;

    /// Create a color from slider input, clamping lightness to `[0, 1]`,
    /// chroma to `[0, 0.4]` and wrapping the hue into `[0, 360)`.
    pub fn clamped(lightness: Component, chroma: Component, hue: Component) -> Self {
        Self::new(
            lightness.clamp(0.0, 1.0),
            chroma.clamp(0.0, Self::MAX_CHROMA),
            normalize_hue(hue),
        )
    }

    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Oklab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Oklab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Srgb;

    #[test]
    fn srgb_to_oklab_and_oklch() {
        // chocolate, rgb(210 105 30)
        let linear = Srgb::new(0.823529, 0.411765, 0.117647).to_linear_light();

        let oklab = Oklab::from(linear);
        assert_component_eq!(oklab.lightness, 0.634398, 1.0e-4);
        assert_component_eq!(oklab.a, 0.099074, 1.0e-4);
        assert_component_eq!(oklab.b, 0.119193, 1.0e-4);

        let oklch = oklab.to_polar();
        assert_component_eq!(oklch.lightness, 0.634398, 1.0e-4);
        assert_component_eq!(oklch.chroma, 0.154992, 1.0e-4);
        assert_component_eq!(oklch.hue, 50.266483, 0.05);
    }

    #[test]
    fn oklab_to_linear_light() {
        let linear = Oklab::new(0.634398, 0.099074, 0.119193).to_linear_light();
        assert_component_eq!(linear.red, 0.644480, 5.0e-4);
        assert_component_eq!(linear.green, 0.141263, 5.0e-4);
        assert_component_eq!(linear.blue, 0.012983, 5.0e-4);
    }

    #[test]
    fn white_and_black() {
        let white = Oklab::from(SrgbLinear::new(1.0, 1.0, 1.0));
        assert_component_eq!(white.lightness, 1.0, 1.0e-6);
        assert_component_eq!(white.a, 0.0, 1.0e-6);
        assert_component_eq!(white.b, 0.0, 1.0e-6);

        let black = Oklab::from(SrgbLinear::new(0.0, 0.0, 0.0));
        assert_component_eq!(black.lightness, 0.0);
        assert_component_eq!(black.to_polar().chroma, 0.0);
    }

    #[test]
    fn polar_round_trip() {
        let oklch = Oklch::new(0.5, 0.12, 300.0);
        let back = oklch.to_rectangular().to_polar();
        assert_component_eq!(back.lightness, 0.5);
        assert_component_eq!(back.chroma, 0.12);
        assert_component_eq!(back.hue, 300.0, 1.0e-9);
    }

    #[test]
    fn negative_angles_wrap_to_positive_hues() {
        let oklch = Oklab::new(0.5, 0.1, -0.1).to_polar();
        assert_component_eq!(oklch.hue, 315.0, 1.0e-9);
    }

    #[test]
    fn slider_input_is_clamped() {
        let oklch = Oklch::clamped(1.2, 0.9, -30.0);
        assert_eq!(oklch, Oklch::new(1.0, 0.4, 330.0));

        let oklch = Oklch::clamped(-0.1, -0.1, 720.0);
        assert_eq!(oklch, Oklch::new(0.0, 0.0, 0.0));
    }
}
