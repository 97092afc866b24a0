use dioxus::prelude::*;

use crate::views::exam::ExamScreen;
use crate::vm::PracticeMode;

/// Flashcard-style practice over one unit.
#[component]
pub fn PracticeView(unit_id: String) -> Element {
    rsx! {
        ExamScreen { unit_id, mode: PracticeMode::Flashcard }
    }
}
