//! Event Header Component
//!
//! Club title, event details and the link back to the blog.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EventHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (event, blog_url) = ctx.config.with_value(|c| (c.event.clone(), c.blog_url.clone()));

    view! {
        <header class="event-header">
            <h1 class="club-title">{event.club_name}</h1>
            <h1 class="event-title">"Event Registration"</h1>
            <p class="event-detail">
                "Venue: " <span class="event-value">{event.venue}</span>
            </p>
            <p class="event-detail">
                "Date: " <span class="event-value">{event.date}</span>
                "Time: " <span class="event-value">{event.time}</span>
            </p>
            <a class="blog-link" href=blog_url>"Back to blog"</a>
        </header>
    }
}
