//! UI Components
//!
//! Leptos components for the registration page.

mod event_header;
mod registration_form;
mod attendee_list;
mod attendee_row;

pub use event_header::EventHeader;
pub use registration_form::RegistrationForm;
pub use attendee_list::AttendeeList;
pub use attendee_row::AttendeeRow;
