use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

//
// ─── COOKIE LEVEL ──────────────────────────────────────────────────────────────
//

/// Visual tier of the daily streak cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CookieLevel {
    New,
    Crumb,
    Starter,
    Bronze,
    Golden,
    Legendary,
}

impl CookieLevel {
    #[must_use]
    pub fn for_count(count: u32) -> Self {
        match count {
            100.. => Self::Legendary,
            30.. => Self::Golden,
            14.. => Self::Bronze,
            7.. => Self::Starter,
            3.. => Self::Crumb,
            _ => Self::New,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Crumb => "crumb",
            Self::Starter => "starter",
            Self::Bronze => "bronze",
            Self::Golden => "golden",
            Self::Legendary => "legendary",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Legendary => "🍪✨",
            Self::Golden => "🍪🔥",
            _ => "🍪",
        }
    }

    /// Streaks of a week or more show the flame badge.
    #[must_use]
    pub fn on_fire(self) -> bool {
        self >= Self::Starter
    }
}

//
// ─── MILESTONES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub days: u32,
    pub reward: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 6] = [
    Milestone {
        days: 3,
        reward: "Bronze Cookie",
        icon: "🍪",
        description: "You started your streak!",
    },
    Milestone {
        days: 7,
        reward: "Silver Cookie",
        icon: "🍪✨",
        description: "One week strong!",
    },
    Milestone {
        days: 14,
        reward: "Gold Cookie",
        icon: "🍪🌟",
        description: "Two weeks of dedication!",
    },
    Milestone {
        days: 30,
        reward: "Diamond Cookie",
        icon: "🍪💎",
        description: "A full month of learning!",
    },
    Milestone {
        days: 60,
        reward: "Platinum Cookie",
        icon: "🍪👑",
        description: "Two months of excellence!",
    },
    Milestone {
        days: 100,
        reward: "Legendary Cookie",
        icon: "🍪🔥",
        description: "100 days of mastery!",
    },
];

//
// ─── STREAK ────────────────────────────────────────────────────────────────────
//

/// What a call to `Streak::record_study` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    Started,
    Extended,
    Unchanged,
    Restarted,
}

/// Consecutive-day study streak.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    count: u32,
    last_study_date: Option<NaiveDate>,
}

impl Streak {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a streak from stored values.
    #[must_use]
    pub fn from_parts(count: u32, last_study_date: Option<NaiveDate>) -> Self {
        match last_study_date {
            Some(_) => Self {
                count,
                last_study_date,
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn last_study_date(&self) -> Option<NaiveDate> {
        self.last_study_date
    }

    #[must_use]
    pub fn level(&self) -> CookieLevel {
        CookieLevel::for_count(self.count)
    }

    /// Register study activity on `today`.
    ///
    /// A date earlier than the last recorded one is ignored.
    pub fn record_study(&mut self, today: NaiveDate) -> StreakChange {
        let Some(last) = self.last_study_date else {
            self.count = 1;
            self.last_study_date = Some(today);
            return StreakChange::Started;
        };

        let gap = (today - last).num_days();
        match gap {
            ..=0 => StreakChange::Unchanged,
            1 => {
                self.count = self.count.saturating_add(1);
                self.last_study_date = Some(today);
                StreakChange::Extended
            }
            _ => {
                self.count = 1;
                self.last_study_date = Some(today);
                StreakChange::Restarted
            }
        }
    }

    /// Count as seen on `today`: a streak whose last day is older than
    /// yesterday has already lapsed.
    #[must_use]
    pub fn current_count(&self, today: NaiveDate) -> u32 {
        match self.last_study_date {
            Some(last) if (today - last).num_days() <= 1 => self.count,
            _ => 0,
        }
    }

    /// Studied yesterday but not yet today.
    #[must_use]
    pub fn is_at_risk(&self, today: NaiveDate) -> bool {
        self.last_study_date
            .is_some_and(|last| (today - last).num_days() == 1)
    }

    #[must_use]
    pub fn next_milestone(&self) -> Option<&'static Milestone> {
        MILESTONES.iter().find(|m| m.days > self.count)
    }

    /// Milestones paired with whether they are unlocked.
    #[must_use]
    pub fn milestones(&self) -> Vec<(&'static Milestone, bool)> {
        MILESTONES
            .iter()
            .map(|m| (m, self.count >= m.days))
            .collect()
    }
}
