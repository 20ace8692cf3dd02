//! Hardware seams the game drives.
//!
//! Implement these for your board's drivers. Like the pacing delay
//! (`embedded_hal::delay::DelayNs`), they cannot fail: handle bus or
//! peripheral errors inside the implementation.

use palette::Srgb;

/// An addressable light strip with a write buffer.
pub trait LightStrip {
    /// Writes one pixel.
    ///
    /// Color components are in the range 0.0-1.0. When `show` is true the
    /// buffer is committed to the hardware immediately.
    fn set_pixel(&mut self, index: usize, color: Srgb, show: bool);

    /// Commits all buffered pixel writes.
    fn show(&mut self);
}

/// A passive buzzer driven at a given frequency.
pub trait Buzzer {
    fn play(&mut self, frequency_hz: u32);

    fn stop(&mut self);
}

/// A character display addressed by row and column.
pub trait TextDisplay {
    fn clear(&mut self);

    fn show_text(&mut self, text: &str, row: u8, col: u8);
}

/// Container for the drivers the game owns
pub struct Peripherals<L, Z, D, W> {
    pub strip: L,
    pub buzzer: Z,
    pub display: D,
    /// Blocking delay used for animation and message pacing
    pub delay: W,
}
