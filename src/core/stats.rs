//! Per-session win/loss counters
//!
//! The counters are a plain value: the caller passes the current stats into
//! each round and keeps what comes back.

use super::round::RoundStatus;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub played: u32,
    pub won: u32,
}

impl SessionStats {
    /// Count a finished round. Rounds still in progress are not counted.
    #[must_use]
    pub const fn record(self, status: &RoundStatus<'_>) -> Self {
        match status {
            RoundStatus::InProgress => self,
            RoundStatus::Won { .. } => Self {
                played: self.played + 1,
                won: self.won + 1,
            },
            RoundStatus::Lost { .. } => Self {
                played: self.played + 1,
                won: self.won,
            },
        }
    }

    #[must_use]
    pub const fn lost(&self) -> u32 {
        self.played - self.won
    }

    /// Percentage of rounds won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let stats = SessionStats::default()
            .record(&RoundStatus::Won { secret: "python" })
            .record(&RoundStatus::Lost { secret: "docker" })
            .record(&RoundStatus::Won { secret: "cliente" });

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.lost(), 1);
    }

    #[test]
    fn in_progress_not_counted() {
        let stats = SessionStats::default().record(&RoundStatus::InProgress);
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn win_rate() {
        assert!(SessionStats::default().win_rate().abs() < f64::EPSILON);

        let stats = SessionStats { played: 4, won: 3 };
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
