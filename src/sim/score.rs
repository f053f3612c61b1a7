//! Score accumulator
//!
//! Additive only. Amounts are unsigned, so there is no way to lower the total.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounter {
    total: u64,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to the total (saturates instead of wrapping)
    pub fn add(&mut self, points: u32) {
        self.total = self.total.saturating_add(u64::from(points));
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Text for the score label
    pub fn label(&self) -> String {
        format!("Score: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut score = ScoreCounter::new();
        assert_eq!(score.total(), 0);
        score.add(10);
        score.add(10);
        score.add(0);
        assert_eq!(score.total(), 20);
        assert_eq!(score.label(), "Score: 20");
    }

    #[test]
    fn test_saturates_at_max() {
        let mut score = ScoreCounter { total: u64::MAX - 5 };
        score.add(10);
        assert_eq!(score.total(), u64::MAX);
    }
}
