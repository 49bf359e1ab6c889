//! Inline Edit State
//!
//! Two-state toggle owned by each column header and task card.

/// Viewing, or editing with a staged value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(String),
}

impl EditState {
    /// Enter editing with the current value staged
    pub fn begin(current: &str) -> Self {
        EditState::Editing(current.to_string())
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Replace the staged value; ignored while viewing
    pub fn stage(&mut self, value: String) {
        if let EditState::Editing(staged) = self {
            *staged = value;
        }
    }

    /// Back to viewing, handing out the staged value
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            EditState::Editing(staged) => Some(staged),
            EditState::Viewing => None,
        }
    }

    /// Back to viewing, discarding the staged value
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }
}
