//! Registration Form Component
//!
//! Text input and submit button for new attendees.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.submit_draft().await;
        });
    };

    view! {
        <p class="section-label">"Attendee Registration"</p>
        <form class="registration-form" on:submit=register>
            <input
                type="text"
                class="name-input"
                placeholder="Enter your full name"
                prop:value=move || state.with(|s| s.draft_name.clone())
                on:input=move |ev| ctx.controller().set_draft_name(event_target_value(&ev))
            />
            <button class="submit-btn" type="submit">"Submit"</button>
        </form>
    }
}
