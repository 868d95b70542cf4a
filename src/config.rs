//! Configuration for a physics [`World`](crate::World).

use crate::float::Float;

/// Starting parameters of a world.
///
/// # Builder Pattern
/// ```
/// use locus::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_friction(0.1)
///     .with_initial_dt(1.0 / 30.0);
/// assert_eq!(config.friction, 0.1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig<F: Float> {
    /// Fraction of velocity removed each step, in [0, 1]. Default: 0.05.
    pub friction: F,
    /// Frame time the first step is normalized against. Default: 1/60.
    pub initial_dt: F,
}

impl<F: Float> WorldConfig<F> {
    pub fn new() -> Self {
        WorldConfig {
            friction: F::from_f32(0.05),
            initial_dt: F::from_f32(1.0 / 60.0),
        }
    }

    /// Clamped to [0, 1].
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction.clamp(F::zero(), F::one());
        self
    }

    /// Ignored unless positive and finite.
    pub fn with_initial_dt(mut self, dt: F) -> Self {
        if dt.is_finite() && dt > F::zero() {
            self.initial_dt = dt;
        }
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
