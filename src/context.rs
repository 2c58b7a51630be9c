//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpUsersApi;
use crate::config::AppConfig;
use crate::controller::AttendeeController;
use crate::notify::BrowserAlert;
use crate::state::ListState;

/// Controller wired to the live endpoint and the page's reactive state
pub type PageController = AttendeeController<HttpUsersApi, BrowserAlert, RwSignal<ListState>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything the attendee list renders
    pub state: RwSignal<ListState>,
    /// Endpoint and header copy
    pub config: StoredValue<AppConfig>,
    api: StoredValue<HttpUsersApi>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = HttpUsersApi::from_config(&config);
        Self {
            state: RwSignal::new(ListState::new()),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    /// A controller for one user action; cheap to build per event
    pub fn controller(&self) -> PageController {
        AttendeeController::new(self.api.get_value(), BrowserAlert, self.state)
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
