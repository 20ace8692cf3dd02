//! Button identities, the press/release callback seam, and a polled debouncer.

use crate::colors::TargetColor;

/// One of the four color-coded fire buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    White,
    Red,
    Yellow,
    Blue,
}

impl ButtonId {
    pub const ALL: [ButtonId; 4] = [ButtonId::White, ButtonId::Red, ButtonId::Yellow, ButtonId::Blue];

    /// Logical name the button is registered under.
    pub fn name(self) -> &'static str {
        match self {
            ButtonId::White => "white",
            ButtonId::Red => "red",
            ButtonId::Yellow => "yellow",
            ButtonId::Blue => "blue",
        }
    }

    /// The color this button fires.
    pub fn color(self) -> TargetColor {
        match self {
            ButtonId::White => TargetColor::White,
            ButtonId::Red => TargetColor::Red,
            ButtonId::Yellow => TargetColor::Yellow,
            ButtonId::Blue => TargetColor::Blue,
        }
    }
}

/// Returned when a button name is not one of the four registered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseButtonError;

impl core::fmt::Display for ParseButtonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown button name (expected white, red, yellow or blue)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseButtonError {}

impl core::str::FromStr for ButtonId {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or(ParseButtonError)
    }
}

/// Receiver for button press and release callbacks.
///
/// Button drivers call these from the main loop; implementations must not
/// assume they run in interrupt context.
pub trait ButtonHandler {
    fn button_pressed(&mut self, id: ButtonId);

    fn button_released(&mut self, id: ButtonId);
}

/// Turns a polled, active-low button level into debounced press/release callbacks.
pub struct DebouncedButton {
    id: ButtonId,
    pressed: bool,
    last_press_time: u32,
    debounce_ms: u32,
}

impl DebouncedButton {
    /// Create a new debouncer for `id`
    ///
    /// # Arguments
    /// * `debounce_ms` - Minimum time between accepted presses in milliseconds
    pub fn new(id: ButtonId, debounce_ms: u32) -> Self {
        Self {
            id,
            pressed: false,
            // Accept a press right at startup
            last_press_time: 0u32.wrapping_sub(debounce_ms),
            debounce_ms,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Samples the button and dispatches any edge to `handler`.
    ///
    /// # Arguments
    /// * `button_is_low` - Current level of the button (true if held down)
    /// * `current_time_ms` - Current time in milliseconds, may wrap
    pub fn poll<H: ButtonHandler + ?Sized>(
        &mut self,
        button_is_low: bool,
        current_time_ms: u32,
        handler: &mut H,
    ) {
        if button_is_low && !self.pressed {
            let time_diff = current_time_ms.wrapping_sub(self.last_press_time);
            if time_diff >= self.debounce_ms {
                self.pressed = true;
                self.last_press_time = current_time_ms;
                handler.button_pressed(self.id);
            }
        } else if !button_is_low && self.pressed {
            self.pressed = false;
            handler.button_released(self.id);
        }
    }
}
