//! The numeric building blocks shared by every color model.

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return true if `f` holds for all three components.
    pub fn all(&self, f: impl Fn(Component) -> bool) -> bool {
        f(self.0) && f(self.1) && f(self.2)
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_each_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        crate::assert_component_eq!(c.0, 1.0);
        crate::assert_component_eq!(c.1, 2.0);
        crate::assert_component_eq!(c.2, 3.0);
    }

    #[test]
    fn all_checks_every_component() {
        assert!(Components(0.0, 0.5, 1.0).all(|v| (0.0..=1.0).contains(&v)));
        assert!(!Components(0.0, 1.5, 1.0).all(|v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn subtraction_is_per_component() {
        let d = Components(0.5, 0.5, 0.5) - Components(0.25, 0.5, 0.75);
        assert_eq!(d, Components(0.25, 0.0, -0.25));
    }
}
