use ap_core::exam::{QuestionStatus, StatusSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorCellVm {
    pub index: usize,
    pub label: String,
    pub class: String,
    pub title: String,
    pub marked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorVm {
    pub cells: Vec<NavigatorCellVm>,
    pub answered_label: String,
    pub review_label: String,
    pub remaining_label: String,
    pub accuracy_label: Option<String>,
    /// Shown once every question has been checked.
    pub complete_label: Option<String>,
}

fn cell_title(index: usize, status: QuestionStatus) -> String {
    let mut title = format!("Question {}", index + 1);
    match status.correct {
        Some(true) => title.push_str(" · correct"),
        Some(false) => title.push_str(" · incorrect"),
        None => title.push_str(" · unanswered"),
    }
    if status.marked_for_review {
        title.push_str(" · for review");
    }
    title
}

#[must_use]
pub fn map_navigator(statuses: &[QuestionStatus], current: usize) -> NavigatorVm {
    let cells = statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            let mut class = String::from("nav-cell");
            if status.answered {
                class.push_str(" answered");
            }
            match status.correct {
                Some(true) => class.push_str(" correct"),
                Some(false) => class.push_str(" incorrect"),
                None => {}
            }
            if status.marked_for_review {
                class.push_str(" marked");
            }
            if index == current {
                class.push_str(" current");
            }
            NavigatorCellVm {
                index,
                label: (index + 1).to_string(),
                class,
                title: cell_title(index, *status),
                marked: status.marked_for_review,
            }
        })
        .collect();

    let summary = StatusSummary::from_statuses(statuses);
    NavigatorVm {
        cells,
        answered_label: format!("Answered: {}", summary.answered),
        review_label: format!("For Review: {}", summary.marked_for_review),
        remaining_label: format!("Remaining: {}", summary.remaining),
        accuracy_label: summary
            .accuracy_percent()
            .map(|pct| format!("Accuracy: {pct}%")),
        complete_label: summary.is_complete().then(|| {
            if summary.marked_for_review == 0 {
                "Section complete".to_owned()
            } else {
                format!(
                    "Section complete · {} marked for review",
                    summary.marked_for_review
                )
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(answered: bool, correct: Option<bool>, marked: bool) -> QuestionStatus {
        QuestionStatus {
            answered,
            correct,
            marked_for_review: marked,
        }
    }

    #[test]
    fn cells_carry_state_classes() {
        let vm = map_navigator(
            &[
                status(true, Some(true), false),
                status(false, None, true),
                status(true, Some(false), false),
            ],
            1,
        );
        assert_eq!(vm.cells[0].class, "nav-cell answered correct");
        assert_eq!(vm.cells[1].class, "nav-cell marked current");
        assert_eq!(vm.cells[2].class, "nav-cell answered incorrect");
        assert_eq!(vm.cells[1].title, "Question 2 · unanswered · for review");
        assert_eq!(vm.answered_label, "Answered: 2");
        assert_eq!(vm.review_label, "For Review: 1");
        assert_eq!(vm.remaining_label, "Remaining: 1");
        assert_eq!(vm.accuracy_label.as_deref(), Some("Accuracy: 50%"));
        assert_eq!(vm.complete_label, None);
    }

    #[test]
    fn all_checked_marks_section_complete() {
        let vm = map_navigator(
            &[status(true, Some(true), false), status(true, Some(false), false)],
            0,
        );
        assert_eq!(vm.complete_label.as_deref(), Some("Section complete"));

        let vm = map_navigator(
            &[status(true, Some(true), true), status(true, Some(true), false)],
            1,
        );
        assert_eq!(
            vm.complete_label.as_deref(),
            Some("Section complete · 1 marked for review")
        );
    }

    #[test]
    fn no_accuracy_before_any_check() {
        let vm = map_navigator(&[status(false, None, false)], 0);
        assert_eq!(vm.accuracy_label, None);
    }
}
