//! The target palette and its mapping to strip colors.

use palette::Srgb;

pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// One of the four colors a target (and a shot) can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetColor {
    Red,
    Yellow,
    Blue,
    White,
}

impl TargetColor {
    /// Every palette entry, in draw order.
    pub const ALL: [TargetColor; 4] = [
        TargetColor::Red,
        TargetColor::Yellow,
        TargetColor::Blue,
        TargetColor::White,
    ];

    /// Draws a color uniformly from the palette.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Returns the strip color for this palette entry.
    #[inline]
    pub fn srgb(self) -> Srgb {
        match self {
            TargetColor::Red => RED,
            TargetColor::Yellow => YELLOW,
            TargetColor::Blue => BLUE,
            TargetColor::White => WHITE,
        }
    }
}

impl From<TargetColor> for Srgb {
    fn from(color: TargetColor) -> Self {
        color.srgb()
    }
}
