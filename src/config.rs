//! Startup configuration and board wiring.

use crate::input::ButtonId;

/// Smallest usable strip: a reset leaves one target, so a single slot would
/// already be full.
pub const MIN_STRIP_SIZE: usize = 2;

/// Pins the drivers are attached to.
///
/// The game itself never touches pins; board crates read these when
/// constructing drivers so pin numbers live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    /// Data pin of the addressable light strip.
    pub strip_pin: u8,
    /// PWM pin of the passive buzzer.
    pub buzzer_pin: u8,
    pub display_sda: u8,
    pub display_scl: u8,
    /// I2C peripheral index of the character display.
    pub display_i2c: u8,
    /// Input pins, indexed like [`ButtonId::ALL`].
    pub button_pins: [u8; 4],
}

impl Wiring {
    /// Returns the input pin of a button.
    pub fn button_pin(&self, id: ButtonId) -> u8 {
        let idx = match id {
            ButtonId::White => 0,
            ButtonId::Red => 1,
            ButtonId::Yellow => 2,
            ButtonId::Blue => 3,
        };
        self.button_pins[idx]
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            strip_pin: 2,
            buzzer_pin: 17,
            display_sda: 0,
            display_scl: 1,
            display_i2c: 0,
            button_pins: [21, 20, 19, 18],
        }
    }
}

/// Game configuration passed to [`Game::new`](crate::Game::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Targets already on the strip when the game is created.
    pub initial_targets: usize,
    /// Seed for target color selection.
    pub seed: u64,
    pub wiring: Wiring,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_targets: 0,
            seed: 0x5EED_1A5E,
            wiring: Wiring::default(),
        }
    }
}

impl GameConfig {
    /// Checks the configuration against a strip of `strip_size` slots.
    ///
    /// # Errors
    /// * `StripTooShort` - The strip has fewer than [`MIN_STRIP_SIZE`] slots
    /// * `InitialTargetsTooMany` - The initial targets would already fill the strip
    pub fn validate(&self, strip_size: usize) -> Result<(), ConfigError> {
        if strip_size < MIN_STRIP_SIZE {
            return Err(ConfigError::StripTooShort { strip_size });
        }

        if self.initial_targets >= strip_size {
            return Err(ConfigError::InitialTargetsTooMany {
                requested: self.initial_targets,
                strip_size,
            });
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Strip cannot hold the target left after a game-over reset plus a new spawn.
    StripTooShort { strip_size: usize },

    /// Initial targets would fill the strip before the game starts.
    InitialTargetsTooMany { requested: usize, strip_size: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::StripTooShort { strip_size } => {
                write!(
                    f,
                    "light strip of {} is too short (need at least {} slots)",
                    strip_size, MIN_STRIP_SIZE
                )
            }
            ConfigError::InitialTargetsTooMany {
                requested,
                strip_size,
            } => {
                write!(
                    f,
                    "{} initial targets do not fit a strip of {} (must be fewer)",
                    requested, strip_size
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
