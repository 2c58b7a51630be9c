//! Application Configuration
//!
//! Endpoint location and the static event details shown in the header.
//! Values can be baked in at build time through `THURSDAY_CLUB_*` variables.

/// Path of the attendee collection on the API host
pub const USERS_PATH: &str = "/api/users";

/// Used when neither a build-time base nor a browser origin is available
const FALLBACK_API_BASE: &str = "http://localhost:3000";

const DEFAULT_BLOG_URL: &str = "https://thursday-club-blog.vercel.app/";

/// Shown until the organisers fill in the details
const TBA: &str = "TBA";

/// Static copy for the header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub club_name: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            club_name: "Thursday Club".to_string(),
            venue: TBA.to_string(),
            date: TBA.to_string(),
            time: TBA.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme and host of the API, without a trailing slash
    pub api_base: String,
    pub users_path: String,
    pub event: EventDetails,
    pub blog_url: String,
}

impl AppConfig {
    /// Defaults for everything except the API host
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            users_path: USERS_PATH.to_string(),
            event: EventDetails::default(),
            blog_url: DEFAULT_BLOG_URL.to_string(),
        }
    }

    /// Build-time overrides first, then the page origin, then localhost
    pub fn load() -> Self {
        let api_base = option_env!("THURSDAY_CLUB_API_BASE")
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_else(|| FALLBACK_API_BASE.to_string());

        let mut config = Self::with_base(api_base);
        if let Some(venue) = option_env!("THURSDAY_CLUB_VENUE") {
            config.event.venue = venue.to_string();
        }
        if let Some(date) = option_env!("THURSDAY_CLUB_DATE") {
            config.event.date = date.to_string();
        }
        if let Some(time) = option_env!("THURSDAY_CLUB_TIME") {
            config.event.time = time.to_string();
        }
        if let Some(url) = option_env!("THURSDAY_CLUB_BLOG_URL") {
            config.blog_url = url.to_string();
        }
        config
    }

    /// Absolute URL of the attendee collection
    pub fn users_url(&self) -> String {
        format!("{}{}", self.api_base, self.users_path)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
