//! A single descending target ("alien base").

use crate::colors::TargetColor;

/// Health every target starts with.
pub const TARGET_HEALTH: i32 = 100;

/// Damage dealt by a correct shot. Equal to [`TARGET_HEALTH`], so one hit kills.
pub const LETHAL_DAMAGE: i32 = 100;

/// One colored target on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Target {
    color: TargetColor,
    health: i32,
}

impl Target {
    /// Creates a full-health target of the given color.
    pub fn new(color: TargetColor) -> Self {
        Self::with_health(color, TARGET_HEALTH)
    }

    /// Creates a full-health target with a color drawn from `rng`.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::new(TargetColor::random(rng))
    }

    /// Creates a target with explicit starting health.
    ///
    /// `health` must be positive.
    pub fn with_health(color: TargetColor, health: i32) -> Self {
        debug_assert!(health > 0, "target health must be positive");
        Self { color, health }
    }

    pub fn color(&self) -> TargetColor {
        self.color
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Reduces health by `amount`.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Returns true once health has dropped to zero or below.
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}
