#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionItemVm {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Section directions shown before and during an exam-mode session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionsVm {
    pub title: String,
    pub items: Vec<DirectionItemVm>,
}

const ITEMS: [(&str, &str); 5] = [
    (
        "Answering Questions",
        "Select the best answer from the options provided. You may change your answer at any time before checking it.",
    ),
    (
        "Check Answer",
        "Click \"Check Answer\" to see if your selection is correct. The explanation appears after checking.",
    ),
    (
        "Mark for Review",
        "Flag questions you want to revisit. Flagged questions are highlighted in the Question Navigator.",
    ),
    (
        "Eliminator Tool",
        "Right-click an answer choice, or turn the Eliminator on and click it, to cross it out. Do the same again to restore it.",
    ),
    (
        "Navigation",
        "Use the Previous and Next buttons, the arrow keys, or the Question Navigator to move between questions.",
    ),
];

#[must_use]
pub fn map_directions(subject_title: &str) -> DirectionsVm {
    DirectionsVm {
        title: format!("{subject_title} · Multiple Choice Questions"),
        items: ITEMS
            .iter()
            .map(|&(heading, body)| DirectionItemVm { heading, body })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_name_subject_and_cover_every_tool() {
        let vm = map_directions("AP Chemistry");
        assert_eq!(vm.title, "AP Chemistry · Multiple Choice Questions");
        let headings: Vec<_> = vm.items.iter().map(|item| item.heading).collect();
        assert_eq!(
            headings,
            [
                "Answering Questions",
                "Check Answer",
                "Mark for Review",
                "Eliminator Tool",
                "Navigation",
            ]
        );
    }
}
