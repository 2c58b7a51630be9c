//! Thursday Club Registration App
//!
//! Root component: header, registration form and attendee list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AttendeeList, EventHeader, RegistrationForm};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[APP] Attendee endpoint: {}", config.users_url());

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.load().await;
        });
    });

    view! {
        <div class="registration-card">
            <EventHeader />
            <RegistrationForm />
            <AttendeeList />
        </div>
    }
}
