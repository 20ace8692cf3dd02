//! The game controller.
//!
//! Provides [`Game`], which owns the target queue, score, countdown, state
//! model and drivers, and reacts to button callbacks and countdown expiry.
//!
//! Two game-over mechanisms exist side by side and never interact: the
//! [`GamePhase`] state model, driven by presses and timeouts, and the strip
//! filling up with targets, which [`Game::timeout`] handles by resetting the
//! session.

use crate::colors::{BLACK, TargetColor};
use crate::config::{ConfigError, GameConfig};
use crate::countdown::Countdown;
use crate::hardware::{Buzzer, LightStrip, Peripherals, TextDisplay};
use crate::input::{ButtonHandler, ButtonId};
use crate::score::PlayerScore;
use crate::starfield::Starfield;
use crate::state_model::{Event, ModelState, StateModel, StateModelError};
use crate::target::{LETHAL_DAMAGE, Target};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use core::fmt::Write as _;
use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

/// Countdown armed when play starts, before the first target spawns.
pub const START_DELAY_MS: u64 = 500;
/// Countdown between target spawns.
pub const SPAWN_INTERVAL_MS: u64 = 1000;
/// Time each slot stays lit during a shot sweep.
pub const SWEEP_STEP_MS: u32 = 50;
/// How long the hit or miss tone sounds.
pub const TONE_MS: u32 = 200;
/// Tone played when a shot destroys the closest target.
pub const HIT_TONE_HZ: u32 = 500;
/// Tone played when a shot's color does not match.
pub const MISS_TONE_HZ: u32 = 600;
/// Welcome text hold time, and the blank pause after it.
pub const WELCOME_MS: u32 = 2000;
/// Game-over message hold time before the session resets.
pub const GAME_OVER_MS: u32 = 3000;

pub const WELCOME_TEXT: &str = " *STAR INVADER*  ARE YOU READY?";
pub const GAME_OVER_TEXT: &str = "GAME OVER";

const TRANSITION_COUNT: usize = 5;
const EVENT_QUEUE_SIZE: usize = 8;

/// Phase of the press/timeout state model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Waiting for the first shot.
    Idle,
    /// A shot was fired, waiting for the next one.
    Armed,
    /// A second shot is in flight until the next timeout.
    Cooldown,
    /// Timed out while armed, waiting for a press to acknowledge.
    GameOverPending,
}

impl ModelState for GamePhase {
    fn index(&self) -> u8 {
        match self {
            GamePhase::Idle => 0,
            GamePhase::Armed => 1,
            GamePhase::Cooldown => 2,
            GamePhase::GameOverPending => 3,
        }
    }
}

/// Errors that can occur while creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    /// The configuration does not fit the strip.
    Config(ConfigError),

    /// The state model could not be built.
    StateModel(StateModelError),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Config(err) => write!(f, "config error: {}", err),
            GameError::StateModel(err) => write!(f, "state model error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<StateModelError> for GameError {
    fn from(err: StateModelError) -> Self {
        GameError::StateModel(err)
    }
}

/// Runs the game on a strip of `N` slots.
///
/// Call [`run`](Self::run) from the main loop and forward button edges
/// through [`ButtonHandler`]. Everything happens on the caller's thread;
/// animation and message pauses block inside the call.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `L` - Light strip implementation type
/// * `Z` - Buzzer implementation type
/// * `D` - Text display implementation type
/// * `W` - Blocking delay implementation type
/// * `N` - Strip size, which is also the target queue capacity
pub struct Game<'t, I, T, L, Z, D, W, const N: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    L: LightStrip,
    Z: Buzzer,
    D: TextDisplay,
    W: DelayNs,
{
    strip: L,
    buzzer: Z,
    display: D,
    delay: W,
    countdown: Countdown<'t, I, T>,
    model: StateModel<GamePhase, TRANSITION_COUNT, EVENT_QUEUE_SIZE>,
    targets: Vec<Target, N>,
    score: PlayerScore,
    starfield: Starfield<Target, N>,
    rng: fastrand::Rng,
    playing: bool,
    welcome_displayed: bool,
    config: GameConfig,
}

impl<'t, I, T, L, Z, D, W, const N: usize> Game<'t, I, T, L, Z, D, W, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    L: LightStrip,
    Z: Buzzer,
    D: TextDisplay,
    W: DelayNs,
{
    /// Creates a game that has not shown its welcome message yet.
    ///
    /// # Errors
    /// * `Config` - `config` does not fit a strip of `N` slots
    pub fn new(
        peripherals: Peripherals<L, Z, D, W>,
        time_source: &'t T,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate(N)?;

        let Peripherals {
            strip,
            buzzer,
            display,
            delay,
        } = peripherals;

        let mut rng = fastrand::Rng::with_seed(config.seed);
        let mut targets = Vec::new();
        for _ in 0..config.initial_targets {
            // Fits: validate() keeps initial_targets below N
            let _ = targets.push(Target::random(&mut rng));
        }

        let mut model = StateModel::new(GamePhase::Idle);
        model.add_transition(GamePhase::Idle, Event::ANY_PRESS, GamePhase::Armed)?;
        model.add_transition(GamePhase::Armed, Event::ANY_PRESS, GamePhase::Cooldown)?;
        model.add_transition(GamePhase::Cooldown, Event::TIMEOUT, GamePhase::Armed)?;
        model.add_transition(GamePhase::Armed, Event::TIMEOUT, GamePhase::GameOverPending)?;
        model.add_transition(GamePhase::GameOverPending, Event::ANY_PRESS, GamePhase::Idle)?;

        info!(
            "star invader: {=usize} slots on pin {=u8}, {=usize} initial targets",
            N,
            config.wiring.strip_pin,
            config.initial_targets
        );

        Ok(Self {
            strip,
            buzzer,
            display,
            delay,
            countdown: Countdown::new(time_source),
            model,
            targets,
            score: PlayerScore::new(),
            starfield: Starfield::new(),
            rng,
            playing: false,
            welcome_displayed: false,
            config,
        })
    }

    /// One iteration of the main loop.
    ///
    /// Shows the welcome sequence first if it has not been shown since
    /// creation or the last reset, then refreshes the strip, polls the
    /// countdown and applies pending state model events.
    pub fn run(&mut self) {
        if !self.welcome_displayed {
            self.display_welcome_message();
            self.welcome_displayed = true;
            self.playing = true;
            self.countdown
                .start(I::Duration::from_millis(START_DELAY_MS));
        }

        self.refresh();
        self.check();
        self.model.run();
    }

    /// Polls the countdown and handles its expiry.
    pub fn check(&mut self) {
        if self.countdown.check() {
            self.queue_event(Event::Timeout);
            self.timeout();
        }
    }

    /// Fires a shot of `color` at the closest target.
    ///
    /// A matching color destroys the target and scores a point; a mismatch
    /// only plays the miss animation. Blocks for the animation and tone.
    pub fn shoot(&mut self, color: TargetColor) {
        let Some(closest) = self.targets.last().map(Target::color) else {
            return;
        };

        let free_slots = N - self.targets.len();

        if closest == color {
            // The sweep runs up to and including the target's own slot
            self.sweep(color, free_slots + 1);
            self.buzzer.play(HIT_TONE_HZ);

            if let Some(target) = self.targets.last_mut() {
                target.take_damage(LETHAL_DAMAGE);
                if target.is_destroyed() {
                    self.targets.pop();
                    self.score.add(1);
                    info!("hit {}, score {=u32}", color, self.score.get());
                }
            }

            self.delay.delay_ms(TONE_MS);
            self.buzzer.stop();
            self.show_score();
        } else {
            debug!("miss: fired {}, closest is {}", color, closest);
            self.sweep(color, free_slots);
            self.buzzer.play(MISS_TONE_HZ);
            self.delay.delay_ms(TONE_MS);
            self.buzzer.stop();
        }
    }

    /// Spawns a target and either rearms the countdown or ends the game.
    ///
    /// When the new target fills the strip the game-over message is shown,
    /// the countdown is cancelled and the session is reset; the countdown
    /// stays idle until the next welcome sequence.
    pub fn timeout(&mut self) {
        if self.targets.push(Target::random(&mut self.rng)).is_err() {
            warn!("target queue already full");
        }
        trace!("spawned target, {=usize} on strip", self.targets.len());
        self.refresh();

        if self.targets.len() == N {
            info!("game over, score {=u32}", self.score.get());
            self.display.show_text(GAME_OVER_TEXT, 1, 3);
            self.countdown.cancel();
            self.delay.delay_ms(GAME_OVER_MS);
            self.reset_game();
            return;
        }

        self.countdown
            .start(I::Duration::from_millis(SPAWN_INTERVAL_MS));
    }

    /// Paints every queued target and commits the strip once.
    ///
    /// The first queued target sits on the last slot; later ones step back
    /// toward slot 0.
    pub fn refresh(&mut self) {
        for (x, target) in self.targets.iter().enumerate() {
            self.strip.set_pixel(N - x - 1, target.color().srgb(), false);
        }
        self.strip.show();
    }

    /// Turns every slot off.
    pub fn clear_lights(&mut self) {
        for x in 0..N {
            self.strip.set_pixel(x, BLACK, true);
        }
        self.strip.show();
    }

    /// Restores the session to a single fresh target and zero score.
    ///
    /// The next [`run`](Self::run) shows the welcome sequence again.
    pub fn reset_game(&mut self) {
        self.clear_lights();
        self.targets.clear();
        // N >= MIN_STRIP_SIZE is checked in new()
        let _ = self.targets.push(Target::random(&mut self.rng));
        self.score.reset();
        self.playing = false;
        self.welcome_displayed = false;
        self.refresh();
    }

    fn display_welcome_message(&mut self) {
        debug!("showing welcome message");
        self.display.clear();
        self.display.show_text(WELCOME_TEXT, 0, 0);
        self.delay.delay_ms(WELCOME_MS);
        self.display.clear();
        self.delay.delay_ms(WELCOME_MS);
    }

    fn show_score(&mut self) {
        let mut text: String<20> = String::new();
        // "Score: " plus at most 10 digits always fits
        let _ = write!(text, "Score: {}", self.score.get());
        self.display.show_text(&text, 0, 3);
    }

    fn sweep(&mut self, color: TargetColor, slots: usize) {
        let lit = color.srgb();
        for x in 0..slots {
            self.strip.set_pixel(x, lit, true);
            self.delay.delay_ms(SWEEP_STEP_MS);
            self.strip.set_pixel(x, BLACK, true);
        }
    }

    fn queue_event(&mut self, event: Event) {
        if let Err(err) = self.model.process_event(event) {
            warn!("{}", err);
        }
    }

    /// Returns the queued targets, closest last.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn welcome_displayed(&self) -> bool {
        self.welcome_displayed
    }

    /// Returns the current state model phase.
    pub fn phase(&self) -> GamePhase {
        self.model.state()
    }

    /// Returns true if a spawn is pending.
    pub fn countdown_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn starfield(&self) -> &Starfield<Target, N> {
        &self.starfield
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    pub fn buzzer(&self) -> &Z {
        &self.buzzer
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<'t, I, T, L, Z, D, W, const N: usize> ButtonHandler for Game<'t, I, T, L, Z, D, W, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    L: LightStrip,
    Z: Buzzer,
    D: TextDisplay,
    W: DelayNs,
{
    /// Starts play on the first press; afterwards fires the button's color.
    fn button_pressed(&mut self, id: ButtonId) {
        if !self.playing {
            info!("play started by {}", id);
            self.playing = true;
            self.countdown
                .start(I::Duration::from_millis(START_DELAY_MS));
            return;
        }

        self.shoot(id.color());
        self.queue_event(Event::Press(id));
    }

    fn button_released(&mut self, id: ButtonId) {
        self.queue_event(Event::Release(id));
    }
}
