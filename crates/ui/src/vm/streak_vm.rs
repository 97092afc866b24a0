use services::StreakSnapshot;

use super::date_fmt::format_day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneVm {
    pub icon: &'static str,
    pub reward: &'static str,
    pub days_label: String,
    pub description: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreakVm {
    pub emoji: &'static str,
    pub cookie_class: String,
    pub count_label: String,
    pub on_fire: bool,
    pub status: &'static str,
    pub last_studied: String,
    pub next_milestone: Option<String>,
    pub milestones: Vec<MilestoneVm>,
}

fn status_line(snapshot: &StreakSnapshot) -> &'static str {
    if snapshot.at_risk {
        "Study today to keep your streak alive!"
    } else if snapshot.studied_today {
        "You've studied today. Nice work!"
    } else if snapshot.count == 0 {
        "Answer a question to start your streak."
    } else {
        "Keep it going!"
    }
}

#[must_use]
pub fn map_streak(snapshot: &StreakSnapshot) -> StreakVm {
    let count = snapshot.count;
    let milestones = snapshot
        .milestones
        .iter()
        .map(|(milestone, unlocked)| MilestoneVm {
            icon: milestone.icon,
            reward: milestone.reward,
            days_label: format!("{} days", milestone.days),
            description: milestone.description,
            class: if *unlocked {
                "milestone unlocked"
            } else {
                "milestone locked"
            },
        })
        .collect();

    StreakVm {
        emoji: snapshot.level.emoji(),
        cookie_class: format!("cookie {}", snapshot.level.as_str()),
        count_label: if count == 1 {
            "1 day streak".to_owned()
        } else {
            format!("{count} day streak")
        },
        on_fire: snapshot.level.on_fire(),
        status: status_line(snapshot),
        last_studied: snapshot
            .last_study_date
            .map_or_else(|| "Never".to_owned(), format_day),
        next_milestone: snapshot.next_milestone.map(|m| {
            let left = m.days.saturating_sub(count);
            format!("{left} more days until {}", m.reward)
        }),
        milestones,
    }
}
