//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. Each row holds the weights of one
/// input component for the three output components, so the literal reads as
/// the transpose of the textbook matrix.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Linear interpolation from `a` to `b` with `t` as progress.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a hue angle into the `[0, 360)` range.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round tiny negative angles up to exactly 360.
    if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

/// Shortest unsigned angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: Component, b: Component) -> Component {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Signed angle to travel from hue `from` to hue `to` the short way around.
pub fn hue_delta(from: Component, to: Component) -> Component {
    let d = to - from;
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}
