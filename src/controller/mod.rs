//! Attendee List Controller
//!
//! Runs each user action as one request against the collection endpoint and
//! then re-fetches the list. The server's answer always replaces local data;
//! nothing is patched in place.


use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::{ApiError, UsersApi};
use crate::models::Attendee;
use crate::notify::Notifier;
use crate::state::ListState;

/// Where the controller keeps `ListState`.
///
/// Closures run synchronously, so no borrow is ever held across an `.await`.
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R;

    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R;
}

/// Reactive state for the page; every update re-renders dependents
impl StateCell for RwSignal<ListState> {
    fn with_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}

impl StateCell for RefCell<ListState> {
    fn with_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

pub struct AttendeeController<A, N, S> {
    api: A,
    notifier: N,
    state: S,
}

impl<A, N, S> AttendeeController<A, N, S>
where
    A: UsersApi,
    N: Notifier,
    S: StateCell,
{
    pub fn new(api: A, notifier: N, state: S) -> Self {
        Self { api, notifier, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the local collection with the server's.
    ///
    /// Failures are logged and leave the previous list on screen. The loading
    /// flag clears either way.
    pub async fn load(&self) {
        let fetched = match self.api.list().await {
            Ok(attendees) => {
                log::debug!("[ATTENDEES] Loaded {} attendees", attendees.len());
                Some(attendees)
            }
            Err(e) => {
                log::error!("[ATTENDEES] Error fetching attendees: {}", e);
                None
            }
        };
        self.state.update_state(|state| {
            if let Some(attendees) = fetched {
                state.replace_attendees(attendees);
            }
            if state.loading {
                state.finish_loading();
            }
        });
    }

    /// Register `name`. Empty names are dropped before any request.
    pub async fn submit_new(&self, name: &str) {
        if name.is_empty() {
            log::debug!("[ATTENDEES] Skipping empty registration");
            return;
        }
        match self.api.create(name).await {
            Ok(()) => {
                log::info!("[ATTENDEES] Registered {:?}", name);
                self.state.update_state(ListState::clear_draft);
                self.load().await;
            }
            Err(ApiError::Rejected { message, .. }) => {
                self.notifier.alert(&format!("Error adding attendee: {}", message));
            }
            Err(e) => log::error!("[ATTENDEES] Error adding {:?}: {}", name, e),
        }
    }

    /// Submit whatever is in the registration form
    pub async fn submit_draft(&self) {
        let name = self.state.with_state(|state| state.draft_name.clone());
        self.submit_new(&name).await;
    }

    pub fn set_draft_name(&self, name: String) {
        self.state.update_state(|state| state.set_draft_name(name));
    }

    pub fn begin_edit(&self, attendee: &Attendee) {
        self.state.update_state(|state| state.begin_edit(attendee));
    }

    pub fn set_edit_draft(&self, name: String) {
        self.state.update_state(|state| state.set_edit_draft(name));
    }

    /// Rename the attendee under edit. Does nothing for an empty name or
    /// when no edit session is open.
    pub async fn commit_edit(&self, edited_name: &str) {
        if edited_name.is_empty() {
            log::debug!("[ATTENDEES] Skipping empty rename");
            return;
        }
        let Some(target_id) = self
            .state
            .with_state(|state| state.edit.target_id().map(str::to_string))
        else {
            log::debug!("[ATTENDEES] Rename requested with no attendee under edit");
            return;
        };

        match self.api.update(&target_id, edited_name).await {
            Ok(()) => {
                log::info!("[ATTENDEES] Renamed {} to {:?}", target_id, edited_name);
                self.state.update_state(ListState::cancel_edit);
                self.load().await;
            }
            Err(ApiError::Rejected { message, .. }) => {
                self.notifier.alert(&format!("Error updating attendee: {}", message));
            }
            Err(e) => log::error!("[ATTENDEES] Error updating {}: {}", target_id, e),
        }
    }

    /// Submit the inline edit form's current draft
    pub async fn commit_draft_edit(&self) {
        let name = self
            .state
            .with_state(|state| state.edit.draft_name().to_string());
        self.commit_edit(&name).await;
    }

    pub fn cancel_edit(&self) {
        self.state.update_state(ListState::cancel_edit);
    }

    /// Delete by id. A non-ok status is ignored without feedback.
    pub async fn remove(&self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("[ATTENDEES] Removed {}", id);
                self.load().await;
            }
            Err(ApiError::Rejected { .. }) => {}
            Err(e) => log::error!("[ATTENDEES] Error removing {}: {}", id, e),
        }
    }
}
