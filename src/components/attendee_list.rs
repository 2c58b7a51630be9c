//! Attendee List Component
//!
//! Count heading plus one row per registered attendee, in server order.

use leptos::prelude::*;

use crate::components::AttendeeRow;
use crate::context::use_app_context;
use crate::models::Attendee;
use crate::state::ListState;

#[component]
pub fn AttendeeList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    // Keyed on the name too, so a rename re-renders its row
    let row_key = |attendee: &Attendee| (attendee.id.clone(), attendee.name.clone());

    view! {
        <h2 class="section-heading">
            "Registered"
            <span class="attendee-count">{move || state.with(ListState::count_label)}</span>
        </h2>
        <ul class="attendee-list">
            <For
                each=move || state.with(|s| s.attendees.clone())
                key=row_key
                children=move |attendee: Attendee| view! { <AttendeeRow attendee=attendee /> }
            />
        </ul>
    }
}
