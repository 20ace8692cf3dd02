//! Shared test infrastructure for star-invader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use palette::Srgb;
use star_invader::{
    BLACK, ButtonId, Buzzer, Game, GameConfig, LightStrip, Peripherals, TargetColor,
    TextDisplay, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source and Delay
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Delay that moves the mock clock forward instead of sleeping
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
    total_ms: u64,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self { clock, total_ms: 0 }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let ms = (ns / 1_000_000) as u64;
        self.clock.advance(TestDuration(ms));
        self.total_ms += ms;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(TestDuration(ms as u64));
        self.total_ms += ms as u64;
    }
}

// ============================================================================
// Mock Drivers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelWrite {
    pub index: usize,
    pub color: Srgb,
    pub show: bool,
}

/// Mock strip that keeps a write buffer, the committed frame and a write log
pub struct MockStrip<const N: usize> {
    pub buffer: [Srgb; N],
    pub committed: [Srgb; N],
    pub writes: Vec<PixelWrite>,
    pub commits: usize,
}

impl<const N: usize> MockStrip<N> {
    pub fn new() -> Self {
        Self {
            buffer: [BLACK; N],
            committed: [BLACK; N],
            writes: Vec::new(),
            commits: 0,
        }
    }

    /// Slots lit by immediately committed writes since `from` in the log
    pub fn lit_slots_since(&self, from: usize, color: Srgb) -> Vec<usize> {
        self.writes[from..]
            .iter()
            .filter(|w| w.show && w.color == color)
            .map(|w| w.index)
            .collect()
    }
}

impl<const N: usize> LightStrip for MockStrip<N> {
    fn set_pixel(&mut self, index: usize, color: Srgb, show: bool) {
        self.buffer[index] = color;
        self.writes.push(PixelWrite { index, color, show });
        if show {
            self.show();
        }
    }

    fn show(&mut self) {
        self.committed = self.buffer;
        self.commits += 1;
    }
}

#[derive(Default)]
pub struct MockBuzzer {
    pub tones: Vec<u32>,
    pub playing: Option<u32>,
}

impl Buzzer for MockBuzzer {
    fn play(&mut self, frequency_hz: u32) {
        self.tones.push(frequency_hz);
        self.playing = Some(frequency_hz);
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

#[derive(Default)]
pub struct MockDisplay {
    pub lines: Vec<(String, u8, u8)>,
    pub clears: usize,
}

impl MockDisplay {
    pub fn last_line(&self) -> Option<(&str, u8, u8)> {
        self.lines.last().map(|(t, r, c)| (t.as_str(), *r, *c))
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn show_text(&mut self, text: &str, row: u8, col: u8) {
        self.lines.push((text.to_string(), row, col));
    }
}

// ============================================================================
// Game Helpers
// ============================================================================

pub type TestGame<'a, const N: usize> = Game<
    'a,
    TestInstant,
    MockTimeSource,
    MockStrip<N>,
    MockBuzzer,
    MockDisplay,
    MockDelay<'a>,
    N,
>;

pub fn new_game<const N: usize>(clock: &MockTimeSource, config: GameConfig) -> TestGame<'_, N> {
    let peripherals = Peripherals {
        strip: MockStrip::new(),
        buzzer: MockBuzzer::default(),
        display: MockDisplay::default(),
        delay: MockDelay::new(clock),
    };

    match Game::new(peripherals, clock, config) {
        Ok(game) => game,
        Err(err) => panic!("game creation failed: {}", err),
    }
}

/// Lets the spawn countdown expire and runs one loop iteration
pub fn fire_timeout<const N: usize>(game: &mut TestGame<'_, N>, clock: &MockTimeSource) {
    clock.advance(TestDuration(star_invader::game::SPAWN_INTERVAL_MS));
    game.run();
}

/// The button that fires `color`
pub fn button_for(color: TargetColor) -> ButtonId {
    ButtonId::ALL
        .into_iter()
        .find(|id| id.color() == color)
        .unwrap()
}

/// Any palette color other than `color`
pub fn other_than(color: TargetColor) -> TargetColor {
    TargetColor::ALL
        .into_iter()
        .find(|c| *c != color)
        .unwrap()
}
