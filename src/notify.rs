//! User Notifications
//!
//! Blocking alerts for server-side rejections.

/// Surfaces a message the user must acknowledge
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert` in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("[ALERT] Could not show alert: {}", message);
        }
    }
}
