use std::sync::Mutex;

use ap_core::model::{CookieLevel, Milestone, Streak, StreakChange};
use chrono::NaiveDate;
use tracing::info;

use crate::Clock;
use crate::error::StreakError;

/// Streak as the UI shows it on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakSnapshot {
    pub today: NaiveDate,
    /// Zero once the streak has lapsed.
    pub count: u32,
    pub level: CookieLevel,
    pub at_risk: bool,
    pub studied_today: bool,
    pub last_study_date: Option<NaiveDate>,
    pub next_milestone: Option<&'static Milestone>,
    pub milestones: Vec<(&'static Milestone, bool)>,
}

/// Tracks the daily study streak.
pub struct StreakService {
    clock: Clock,
    streak: Mutex<Streak>,
}

impl StreakService {
    #[must_use]
    pub fn new(clock: Clock, streak: Streak) -> Self {
        Self {
            clock,
            streak: Mutex::new(streak),
        }
    }

    fn with_streak<T>(&self, f: impl FnOnce(&mut Streak) -> T) -> Result<T, StreakError> {
        let mut guard = self
            .streak
            .lock()
            .map_err(|e| StreakError::Unavailable(e.to_string()))?;
        Ok(f(&mut guard))
    }

    /// Record study activity for the clock's current day.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::Unavailable` if the streak lock is poisoned.
    pub fn record_study(&self) -> Result<StreakChange, StreakError> {
        let today = self.clock.today();
        let (change, count) = self.with_streak(|streak| {
            let change = streak.record_study(today);
            (change, streak.count())
        })?;
        if change != StreakChange::Unchanged {
            info!(?change, count, %today, "study streak updated");
        }
        Ok(change)
    }

    /// # Errors
    ///
    /// Returns `StreakError::Unavailable` if the streak lock is poisoned.
    pub fn snapshot(&self) -> Result<StreakSnapshot, StreakError> {
        let today = self.clock.today();
        self.with_streak(|streak| {
            let count = streak.current_count(today);
            let visible = Streak::from_parts(count, streak.last_study_date());
            StreakSnapshot {
                today,
                count,
                level: CookieLevel::for_count(count),
                at_risk: streak.is_at_risk(today),
                studied_today: streak.last_study_date() == Some(today),
                last_study_date: streak.last_study_date(),
                next_milestone: visible.next_milestone(),
                milestones: visible.milestones(),
            }
        })
    }
}
