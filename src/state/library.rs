//! Library Record Types
//!
//! Record types for games shown in the user area. The lists themselves are
//! declared inside the panels that render them.

/// A game being tracked, with achievement progress
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedGame {
    pub id: u32,
    pub title: &'static str,
    pub image_url: &'static str,
    pub achievements_done: u32,
    pub achievements_total: u32,
}

impl TrackedGame {
    /// Completion percentage in the 0..=100 range
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.achievements_done, self.achievements_total)
    }
}

/// A game whose achievement list is fully unlocked
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedGame {
    pub title: &'static str,
    pub image_url: &'static str,
    pub achievements_total: u32,
}

/// Percentage of `done` out of `total`, guarding against an empty total
pub fn progress_percent(done: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    done as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(70, 80), 87.5);
        assert_eq!(progress_percent(0, 80), 0.0);
        assert_eq!(progress_percent(80, 80), 100.0);
    }

    #[test]
    fn test_progress_percent_zero_total() {
        assert_eq!(progress_percent(5, 0), 0.0);
    }

    #[test]
    fn test_tracked_game_progress() {
        let game = TrackedGame {
            id: 1,
            title: "Hades",
            image_url: "https://example.com/hades.jpg",
            achievements_done: 80,
            achievements_total: 100,
        };
        assert_eq!(game.progress_percent(), 80.0);
    }
}
