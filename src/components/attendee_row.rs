//! Attendee Row Component
//!
//! Shows a name with edit/delete buttons, or the inline rename form when
//! this attendee is the edit target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Attendee;

/// A single attendee in the list
#[component]
pub fn AttendeeRow(attendee: Attendee) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let id = attendee.id.clone();
    let is_editing = move || state.with(|s| s.edit.is_editing(&id));

    view! {
        <li class="attendee-row">
            <Show
                when=is_editing
                fallback=move || view! { <AttendeeDisplay attendee=attendee.clone() /> }
            >
                <AttendeeEditForm />
            </Show>
        </li>
    }
}

#[component]
fn AttendeeDisplay(attendee: Attendee) -> impl IntoView {
    let ctx = use_app_context();

    let id = attendee.id.clone();
    let name = attendee.name.clone();

    view! {
        <div class="attendee-display">
            <span class="attendee-name">{name}</span>
            <div class="attendee-actions">
                <button class="edit-btn" on:click=move |_| ctx.controller().begin_edit(&attendee)>
                    "✏️"
                </button>
                <button class="delete-btn" on:click=move |_| {
                    let controller = ctx.controller();
                    let id = id.clone();
                    spawn_local(async move {
                        controller.remove(&id).await;
                    });
                }>
                    "🗑️"
                </button>
            </div>
        </div>
    }
}

/// Inline rename form bound to the edit session draft
#[component]
fn AttendeeEditForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.commit_draft_edit().await;
        });
    };

    view! {
        <form class="edit-form" on:submit=save>
            <input
                type="text"
                class="edit-input"
                prop:value=move || state.with(|s| s.edit.draft_name().to_string())
                on:input=move |ev| ctx.controller().set_edit_draft(event_target_value(&ev))
            />
            <button class="save-btn" type="submit">"👍"</button>
            <button class="cancel-btn" type="button" on:click=move |_| ctx.controller().cancel_edit()>
                "❌"
            </button>
        </form>
    }
}
