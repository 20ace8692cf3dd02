#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: Owns the target queue, score and drivers; call `run()` from your main loop
//! - **`ButtonHandler`**: Press/release callbacks, implemented by `Game`
//! - **`DebouncedButton`**: Turns polled GPIO levels into `ButtonHandler` callbacks
//! - **`Target`**: One descending colored target with health
//! - **`StateModel`**: Table-driven state machine with a pending-event queue
//! - **`Countdown`**: Single-shot software timer polled against a `TimeSource`
//! - **`LightStrip`**, **`Buzzer`**, **`TextDisplay`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`GameConfig`**: Startup configuration and board wiring
//!
//! Strip colors are `Srgb<f32>` (0.0-1.0 range). When implementing `LightStrip`
//! for your hardware, convert these values to your device's native format.
//! Pauses go through `embedded_hal::delay::DelayNs`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod colors;
pub mod config;
pub mod countdown;
pub mod game;
pub mod hardware;
pub mod input;
pub mod score;
pub mod starfield;
pub mod state_model;
pub mod target;
pub mod time;

pub use colors::{BLACK, BLUE, RED, TargetColor, WHITE, YELLOW};
pub use config::{ConfigError, GameConfig, MIN_STRIP_SIZE, Wiring};
pub use countdown::{Countdown, CountdownState};
pub use game::{Game, GameError, GamePhase};
pub use hardware::{Buzzer, LightStrip, Peripherals, TextDisplay};
pub use input::{ButtonHandler, ButtonId, DebouncedButton, ParseButtonError};
pub use score::PlayerScore;
pub use starfield::Starfield;
pub use state_model::{Event, ModelState, StateModel, StateModelError, Transition};
pub use target::{LETHAL_DAMAGE, TARGET_HEALTH, Target};
pub use time::{TimeDuration, TimeInstant, TimeSource};
