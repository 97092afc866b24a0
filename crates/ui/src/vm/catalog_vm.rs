use ap_core::model::{Subject, Unit};
use services::{CatalogOverview, PlannerProgress, StreakSnapshot};

use super::date_fmt::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardVm {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub icon: String,
    pub accent_style: String,
    pub progress: u8,
    pub progress_label: String,
    pub units_label: String,
}

impl From<&Subject> for SubjectCardVm {
    fn from(subject: &Subject) -> Self {
        let units = subject.units().len();
        Self {
            id: subject.id().to_string(),
            title: subject.title().to_owned(),
            short_title: subject.short_title().to_owned(),
            description: subject.description().to_owned(),
            icon: subject.icon().to_owned(),
            accent_style: format!("border-top-color: {};", subject.color()),
            progress: subject.progress(),
            progress_label: format!("{}% complete", subject.progress()),
            units_label: if units == 1 {
                "1 unit".to_owned()
            } else {
                format!("{units} units")
            },
        }
    }
}

#[must_use]
pub fn map_subject_cards(subjects: &[Subject]) -> Vec<SubjectCardVm> {
    subjects.iter().map(SubjectCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitRowVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions_label: String,
    pub progress: u8,
    pub progress_style: String,
}

#[must_use]
pub fn map_unit_rows(units: &[Unit]) -> Vec<UnitRowVm> {
    units
        .iter()
        .map(|unit| UnitRowVm {
            id: unit.id().to_string(),
            title: unit.title().to_owned(),
            description: unit.description().to_owned(),
            questions_label: format!("{} questions", unit.question_count()),
            progress: unit.progress(),
            progress_style: format!("width: {}%;", unit.progress()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatVm {
    pub label: &'static str,
    pub value: String,
}

/// Dashboard tiles on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub stats: Vec<StatVm>,
    pub streak_badge: String,
    pub subjects: Vec<SubjectCardVm>,
}

#[must_use]
pub fn map_home(
    overview: &CatalogOverview,
    streak: &StreakSnapshot,
    planner: PlannerProgress,
    subjects: &[Subject],
) -> HomeVm {
    let stats = vec![
        StatVm {
            label: "Subjects",
            value: overview.subjects.to_string(),
        },
        StatVm {
            label: "Units",
            value: overview.units.to_string(),
        },
        StatVm {
            label: "Average Progress",
            value: format!("{}%", overview.average_progress),
        },
        StatVm {
            label: "Today's Plan",
            value: format!(
                "{}/{} · {}",
                planner.completed,
                planner.total,
                format_minutes(planner.planned_minutes)
            ),
        },
    ];
    let days = if streak.count == 1 { "day" } else { "days" };
    HomeVm {
        stats,
        streak_badge: format!("{} {} {days}", streak.level.emoji(), streak.count),
        subjects: map_subject_cards(subjects),
    }
}
