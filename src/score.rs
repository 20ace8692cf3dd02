/// The player's running score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerScore {
    score: u32,
}

impl PlayerScore {
    /// Creates a score of zero.
    pub const fn new() -> Self {
        Self { score: 0 }
    }

    /// Adds points to the score.
    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn get(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
