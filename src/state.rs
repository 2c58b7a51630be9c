//! Attendee List State
//!
//! Everything the page renders: the registration draft, the last fetched
//! collection, the edit session and the loading flag.

use crate::models::Attendee;

/// Which attendee, if any, has its inline edit form open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target_id: String, draft_name: String },
}

impl EditSession {
    pub fn target_id(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target_id, .. } => Some(target_id),
        }
    }

    /// Empty while idle
    pub fn draft_name(&self) -> &str {
        match self {
            EditSession::Idle => "",
            EditSession::Editing { draft_name, .. } => draft_name,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.target_id() == Some(id)
    }
}

/// Page state, replaced wholesale from the server after every mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    /// Pending name in the registration form
    pub draft_name: String,
    /// Last fetched collection, in server order
    pub attendees: Vec<Attendee>,
    pub edit: EditSession,
    /// True until the first load finishes, success or not
    pub loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            draft_name: String::new(),
            attendees: Vec::new(),
            edit: EditSession::Idle,
            loading: true,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_attendees(&mut self, attendees: Vec<Attendee>) {
        self.attendees = attendees;
    }

    /// One-way: later refreshes never bring the flag back
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft_name = name;
    }

    pub fn clear_draft(&mut self) {
        self.draft_name.clear();
    }

    /// Opens the edit form for `attendee`, dropping any other unsaved edit
    pub fn begin_edit(&mut self, attendee: &Attendee) {
        self.edit = EditSession::Editing {
            target_id: attendee.id.clone(),
            draft_name: attendee.name.clone(),
        };
    }

    /// Ignored while idle
    pub fn set_edit_draft(&mut self, name: String) {
        if let EditSession::Editing { draft_name, .. } = &mut self.edit {
            *draft_name = name;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSession::Idle;
    }

    /// Heading suffix, e.g. `(Loading...)` or `(3 attendees)`
    pub fn count_label(&self) -> String {
        if self.loading {
            return "(Loading...)".to_string();
        }
        match self.attendees.len() {
            1 => "(1 attendee)".to_string(),
            n => format!("({} attendees)", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Attendee {
        Attendee::new("1", "Ada")
    }

    fn grace() -> Attendee {
        Attendee::new("2", "Grace")
    }

    #[test]
    fn starts_loading_and_idle() {
        let state = ListState::new();
        assert!(state.loading);
        assert_eq!(state.edit, EditSession::Idle);
        assert_eq!(state.count_label(), "(Loading...)");
    }

    #[test]
    fn count_label_pluralizes() {
        let mut state = ListState::new();
        state.finish_loading();
        assert_eq!(state.count_label(), "(0 attendees)");

        state.replace_attendees(vec![ada()]);
        assert_eq!(state.count_label(), "(1 attendee)");

        state.replace_attendees(vec![ada(), grace()]);
        assert_eq!(state.count_label(), "(2 attendees)");
    }

    #[test]
    fn begin_edit_on_another_attendee_discards_draft() {
        let mut state = ListState::new();
        state.begin_edit(&ada());
        state.set_edit_draft("Ada L.".to_string());

        state.begin_edit(&grace());
        assert_eq!(state.edit.target_id(), Some("2"));
        assert_eq!(state.edit.draft_name(), "Grace");
        assert!(!state.edit.is_editing("1"));
    }

    #[test]
    fn edit_draft_is_ignored_while_idle() {
        let mut state = ListState::new();
        state.set_edit_draft("nobody".to_string());
        assert_eq!(state.edit, EditSession::Idle);
        assert_eq!(state.edit.draft_name(), "");
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut state = ListState::new();
        state.begin_edit(&ada());
        state.cancel_edit();
        assert_eq!(state.edit.target_id(), None);
    }
}
