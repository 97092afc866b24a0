//! Gesture → command adapters for the two practice variants.
//!
//! Both variants drive the same `ExamSession`; they differ only in which
//! gestures they listen to and how those map onto commands.

/// What the user did on a choice button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceGesture {
    Click,
    ContextMenu,
}

/// A state-machine command produced by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceCommand {
    Select(usize),
    ToggleEliminated(usize),
}

pub trait InteractionStyle {
    /// Translate a gesture on `choice` into a command, if any.
    fn command_for(&self, gesture: ChoiceGesture, choice: usize) -> Option<ChoiceCommand>;

    /// Whether the variant offers crossing out choices.
    fn offers_eliminator(&self) -> bool;
}

/// Simple flashcard practice: click to select, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashcardStyle;

impl InteractionStyle for FlashcardStyle {
    fn command_for(&self, gesture: ChoiceGesture, choice: usize) -> Option<ChoiceCommand> {
        match gesture {
            ChoiceGesture::Click => Some(ChoiceCommand::Select(choice)),
            ChoiceGesture::ContextMenu => None,
        }
    }

    fn offers_eliminator(&self) -> bool {
        false
    }
}

/// Exam-simulation practice with an answer eliminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BluebookStyle {
    eliminator_mode: bool,
}

impl BluebookStyle {
    #[must_use]
    pub fn eliminator_mode(&self) -> bool {
        self.eliminator_mode
    }

    /// Flip eliminator mode and return the new value.
    pub fn toggle_mode(&mut self) -> bool {
        self.eliminator_mode = !self.eliminator_mode;
        self.eliminator_mode
    }
}

impl InteractionStyle for BluebookStyle {
    fn command_for(&self, gesture: ChoiceGesture, choice: usize) -> Option<ChoiceCommand> {
        match gesture {
            ChoiceGesture::Click if self.eliminator_mode => {
                Some(ChoiceCommand::ToggleEliminated(choice))
            }
            ChoiceGesture::Click => Some(ChoiceCommand::Select(choice)),
            ChoiceGesture::ContextMenu => Some(ChoiceCommand::ToggleEliminated(choice)),
        }
    }

    fn offers_eliminator(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flashcard_ignores_context_menu() {
        let style = FlashcardStyle;
        assert_eq!(
            style.command_for(ChoiceGesture::Click, 2),
            Some(ChoiceCommand::Select(2))
        );
        assert_eq!(style.command_for(ChoiceGesture::ContextMenu, 2), None);
        assert!(!style.offers_eliminator());
    }

    #[test]
    fn bluebook_click_follows_eliminator_mode() {
        let mut style = BluebookStyle::default();
        assert_eq!(
            style.command_for(ChoiceGesture::Click, 1),
            Some(ChoiceCommand::Select(1))
        );
        assert!(style.toggle_mode());
        assert_eq!(
            style.command_for(ChoiceGesture::Click, 1),
            Some(ChoiceCommand::ToggleEliminated(1))
        );
        assert!(!style.toggle_mode());
    }

    #[test]
    fn bluebook_context_menu_always_eliminates() {
        let style = BluebookStyle::default();
        assert_eq!(
            style.command_for(ChoiceGesture::ContextMenu, 3),
            Some(ChoiceCommand::ToggleEliminated(3))
        );
        assert!(style.offers_eliminator());
    }
}
