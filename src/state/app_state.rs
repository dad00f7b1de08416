//! Application state definitions

use super::forms::{FormKind, FormSession};
use super::site::Site;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Form,
    NotFound,
}

/// A path resolved against the running site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, optionally scrolled to a section anchor (`/#process`)
    Home(Option<String>),
    Form(FormKind),
    NotFound(String),
}

impl Route {
    pub fn resolve(site: Site, path: &str) -> Self {
        let path = path.trim();
        let (path, anchor) = match path.split_once('#') {
            Some((p, a)) => (p, Some(a.to_string())),
            None => (path, None),
        };
        let path = path.trim_end_matches('/');

        match (path, site) {
            ("", _) => Self::Home(anchor.filter(|a| !a.is_empty())),
            ("/apply", _) => Self::Form(site.primary_form()),
            ("/apply/quick", Site::ThirtyUnderThirty) => Self::Form(FormKind::QuickApply),
            ("/contact", Site::ForeBridge) => Self::Form(FormKind::ForeBridgeContact),
            _ => {
                let anchor = anchor.map(|a| format!("#{a}")).unwrap_or_default();
                Self::NotFound(format!("{path}{anchor}"))
            }
        }
    }
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub site: Site,
    pub current_view: View,
    pub current_route: String,

    // Home page
    pub scroll_offset: u16,
    /// Largest offset that still fills the viewport
    scroll_limit: u16,
    pub active_anchor: Option<String>,

    /// "Go to" prompt text while it is open
    pub route_input: Option<String>,

    // Form state
    pub form: Option<FormSession>,

    // Feedback
    pub notifications: Vec<Notification>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            current_route: "/".to_string(),
            ..Default::default()
        }
    }

    /// Terminal window title for the current view
    pub fn title(&self) -> String {
        match self.current_view {
            View::Home => self.site.home_title(),
            View::Form => match self.form.as_ref().map(FormSession::kind) {
                Some(FormKind::ForeBridgeContact) => self.site.page_title("Contact"),
                _ => self.site.page_title("Apply"),
            },
            View::NotFound => self.site.page_title("Page Not Found"),
        }
    }

    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll_offset = self.scroll_offset.min(limit);
    }

    /// Jump to an offset, clamped to the page
    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.scroll_limit);
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_to(self.scroll_offset.saturating_add(1));
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_to(self.scroll_offset.saturating_add(10));
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn notify(&mut self, title: impl Into<String>, description: impl Into<String>) {
        let notification = Notification::new(title, description);
        tracing::info!("Notification: {}", notification.title);
        self.notifications.retain(|n| !n.is_expired());
        self.notifications.push(notification);
    }

    /// Newest notification that is still on screen
    pub fn active_toast(&self) -> Option<&Notification> {
        self.notifications.last().filter(|n| !n.is_expired())
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home() {
        assert_eq!(Route::resolve(Site::ThirtyUnderThirty, "/"), Route::Home(None));
        assert_eq!(Route::resolve(Site::ThirtyUnderThirty, ""), Route::Home(None));
        assert_eq!(
            Route::resolve(Site::ThirtyUnderThirty, "/#process"),
            Route::Home(Some("process".to_string()))
        );
    }

    #[test]
    fn test_resolve_apply_per_site() {
        assert_eq!(
            Route::resolve(Site::ThirtyUnderThirty, "/apply"),
            Route::Form(FormKind::CohortApply)
        );
        assert_eq!(
            Route::resolve(Site::ForeBridge, "/apply/"),
            Route::Form(FormKind::ForeBridgeApply)
        );
        assert_eq!(
            Route::resolve(Site::ThirtyUnderThirty, "/apply/quick"),
            Route::Form(FormKind::QuickApply)
        );
        assert_eq!(
            Route::resolve(Site::ForeBridge, "/contact"),
            Route::Form(FormKind::ForeBridgeContact)
        );
    }

    #[test]
    fn test_resolve_unknown_routes() {
        assert_eq!(
            Route::resolve(Site::ThirtyUnderThirty, "/contact"),
            Route::NotFound("/contact".to_string())
        );
        assert_eq!(
            Route::resolve(Site::ForeBridge, "/pricing"),
            Route::NotFound("/pricing".to_string())
        );
    }

    #[test]
    fn test_titles() {
        let mut state = AppState::new(Site::ThirtyUnderThirty);
        assert_eq!(state.title(), "30under30.ai - Build. Launch. Scale.");
        state.current_view = View::NotFound;
        assert_eq!(state.title(), "Page Not Found - 30under30.ai");
        state.current_view = View::Form;
        state.form = Some(FormSession::new(FormKind::CohortApply));
        assert_eq!(state.title(), "Apply - 30under30.ai");
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_notify_shows_toast() {
        let mut state = AppState::default();
        assert!(state.active_toast().is_none());
        state.notify("Application Submitted", "Thanks");
        assert_eq!(state.active_toast().unwrap().title, "Application Submitted");
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        state.set_scroll_limit(40);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down_page();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 11);
    }

    #[test]
    fn test_scroll_stops_at_limit() {
        let mut state = AppState::default();
        state.set_scroll_limit(12);
        state.scroll_down_page();
        state.scroll_down_page();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 12);

        // Moves on the first key press back up
        state.scroll_up();
        assert_eq!(state.scroll_offset, 11);
    }

    #[test]
    fn test_smaller_limit_pulls_offset_back() {
        let mut state = AppState::default();
        state.set_scroll_limit(30);
        state.scroll_to(25);
        state.set_scroll_limit(20);
        assert_eq!(state.scroll_offset, 20);
    }

    #[test]
    fn test_notify_drops_expired_toasts() {
        let mut state = AppState::default();
        state.notify("Message Sent", "Thanks");
        state.notifications[0].created_at = Instant::now() - TOAST_DURATION;
        state.notify("Application Submitted", "Thanks");
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].title, "Application Submitted");
    }
}
