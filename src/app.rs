//! Application state and core logic

use crate::config::TuiConfig;
use crate::intake::{
    ApplicationPayload, IntakeServiceTrait, SubmissionEvent, SubmissionHandle, Submitter,
};
use crate::platform::is_shortcut;
use crate::state::{AppState, FormSession, Route, Site, SubmissionOutcome, Transition, View};
use crate::ui::home;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Background submissions
    submitter: Submitter,
    /// Handle of the submission in flight; dropping it cancels the request
    in_flight: Option<SubmissionHandle>,
    /// Rows available to the page body
    viewport_height: u16,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app described by `config` and open its start route
    pub fn new(config: &TuiConfig) -> Self {
        let mut app = Self::with_service(config.site(), Arc::new(config.intake()));
        app.open_route(config.start_route());
        app
    }

    pub fn with_service(site: Site, service: Arc<dyn IntakeServiceTrait>) -> Self {
        let mut app = Self {
            state: AppState::new(site),
            submitter: Submitter::new(service),
            in_flight: None,
            viewport_height: 0,
            quit: false,
        };
        app.state.set_scroll_limit(home::max_offset(site, 0));
        app
    }

    /// Track the body height so home scrolling stops at the end of the page
    pub fn set_viewport_height(&mut self, height: u16) {
        if height != self.viewport_height {
            self.viewport_height = height;
            let limit = home::max_offset(self.state.site, height);
            self.state.set_scroll_limit(limit);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Resolve `path` against the site and switch to its view
    pub fn open_route(&mut self, path: &str) {
        self.leave_form();
        self.state.current_route = path.to_string();

        match Route::resolve(self.state.site, path) {
            Route::Home(anchor) => {
                self.state.current_view = View::Home;
                let offset = anchor
                    .as_deref()
                    .and_then(|anchor| home::anchor_offset(self.state.site, anchor))
                    .unwrap_or(0);
                self.state.scroll_to(offset);
                self.state.active_anchor = anchor;
            }
            Route::Form(kind) => {
                tracing::debug!("Opening {kind:?}");
                self.state.form = Some(FormSession::new(kind));
                self.state.current_view = View::Form;
            }
            Route::NotFound(path) => {
                tracing::error!("404 Error: User attempted to access non-existent route: {path}");
                self.state.current_view = View::NotFound;
            }
        }
    }

    /// Discard the form session; an in-flight submission is cancelled
    fn leave_form(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            tracing::info!("Cancelling submission {}", handle.id());
        }
        if let Some(mut session) = self.state.form.take() {
            session.abandon_submission();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // "Go to" prompt (modal)
        if self.state.route_input.is_some() {
            self.handle_route_input_key(key);
            return;
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Form => self.handle_form_key(key),
            View::NotFound => self.handle_not_found_key(key),
        }
    }

    fn handle_route_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.route_input = None,
            KeyCode::Enter => {
                if let Some(path) = self.state.route_input.take() {
                    let path = if path.starts_with('/') {
                        path
                    } else {
                        format!("/{path}")
                    };
                    self.open_route(&path);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.state.route_input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.state.route_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Home | KeyCode::Char('g') => self.open_route("/"),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = self.state.site.sections().get(index) {
                    self.open_route(&format!("/#{}", section.anchor));
                }
            }
            KeyCode::Char('a') | KeyCode::Enter => self.open_route("/apply"),
            KeyCode::Char('p') if self.state.site == Site::ThirtyUnderThirty => {
                self.open_route("/apply/quick")
            }
            KeyCode::Char('c') if self.state.site == Site::ForeBridge => {
                self.open_route("/contact")
            }
            KeyCode::Char(':') => self.state.route_input = Some(String::new()),
            _ => {}
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => self.open_route("/"),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(':') => self.state.route_input = Some(String::new()),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.open_route("/");
            return;
        }
        let Some(session) = self.state.form.as_mut() else {
            return;
        };
        // Everything else waits for the answer
        if session.is_submitting() {
            return;
        }

        // Keyboard shortcuts (work from any field)
        if is_shortcut(&key) {
            let transition = match key.code {
                KeyCode::Char('n') => Some(session.next()),
                KeyCode::Char('b') => Some(session.previous()),
                KeyCode::Char('s') => Some(session.submit()),
                KeyCode::Char('a') => {
                    session.add_co_founder();
                    None
                }
                KeyCode::Char('d') => {
                    session.remove_focused_co_founder();
                    None
                }
                _ => None,
            };
            if let Some(transition) = transition {
                self.apply_transition(transition);
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => session.focus_next(),
            KeyCode::BackTab | KeyCode::Up => session.focus_prev(),
            KeyCode::Left if session.is_focused_choice() => session.cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if session.is_focused_choice() => {
                session.cycle_choice(true)
            }
            KeyCode::Enter if session.is_focused_multiline() => session.input_char('\n'),
            KeyCode::Enter => session.focus_next(),
            KeyCode::Char(c) => session.input_char(c),
            KeyCode::Backspace => session.backspace(),
            _ => {}
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::SubmitStarted => self.start_submission(),
            Transition::Blocked(count) => {
                tracing::debug!("Section blocked by {count} validation errors");
            }
            Transition::NotOnFinalSection => {
                tracing::debug!("Submit ignored before the final section");
            }
            _ => {}
        }
    }

    fn start_submission(&mut self) {
        let Some(session) = self.state.form.as_ref() else {
            return;
        };
        let Some(submission_id) = session.pending_submission() else {
            return;
        };
        let payload = ApplicationPayload {
            submission_id,
            site: self.state.site,
            form: session.kind(),
            fields: session.data(),
        };
        self.in_flight = Some(self.submitter.submit(payload));
    }

    /// Apply every submission answer that arrived since the last frame
    pub fn poll_submissions(&mut self) {
        while let Some(event) = self.submitter.try_next_event() {
            self.apply_submission_event(event);
        }
    }

    fn apply_submission_event(&mut self, event: SubmissionEvent) {
        let submission_id = event.submission_id();
        if self.in_flight.as_ref().map(SubmissionHandle::id) == Some(submission_id) {
            self.in_flight = None;
        }
        let Some(session) = self.state.form.as_mut() else {
            tracing::debug!("Dropping answer for {submission_id}: form was left");
            return;
        };
        let kind = session.kind();

        match event {
            SubmissionEvent::Completed { receipt, .. } => {
                if !session.complete_submission(submission_id, SubmissionOutcome::Accepted) {
                    return;
                }
                tracing::info!(
                    "Submission {submission_id} accepted as {} at {}",
                    receipt.reference,
                    receipt.received_at
                );
                let (title, description) = self.state.site.success_notice(kind);
                self.state.notify(title, description);
                self.open_route("/");
            }
            SubmissionEvent::Failed { error, .. } => {
                let message = error.user_message();
                if session.complete_submission(submission_id, SubmissionOutcome::Failed(message)) {
                    tracing::warn!("Submission {submission_id} failed: {error}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{IntakeError, MockIntakeServiceTrait, SimulatedIntake};
    use crate::state::FormKind;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn simulated_app(site: Site) -> App {
        App::with_service(site, Arc::new(SimulatedIntake::default()))
    }

    fn session(app: &App) -> &FormSession {
        app.state.form.as_ref().unwrap()
    }

    fn fill_cohort(app: &mut App) {
        app.open_route("/apply");
        let session = app.state.form.as_mut().unwrap();
        session.set_fields([
            ("fullName", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("location", "London"),
        ]);
        app.handle_key(ctrl('n'));
        let session = app.state.form.as_mut().unwrap();
        session.set_fields([
            ("startupName", "Engine Co"),
            ("idea", "Analytical engines as a service"),
            ("stage", "Idea"),
            ("isPivot", "No"),
        ]);
        app.handle_key(ctrl('n'));
        let session = app.state.form.as_mut().unwrap();
        session.set_fields([
            ("teamSize", "Solo"),
            ("experience", "First-time"),
            ("hasCoFounders", "No"),
        ]);
        app.handle_key(ctrl('n'));
        let why = "I want to ship fast with founders who have done it before.";
        let session = app.state.form.as_mut().unwrap();
        session.set_fields([("whyJoin", why), ("canRelocate", "Yes")]);
        assert_eq!(session.section(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cohort_end_to_end_submission() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        fill_cohort(&mut app);

        app.handle_key(ctrl('s'));
        assert!(session(&app).is_submitting());

        // Nothing happens before the delay has passed
        tokio::time::sleep(Duration::from_millis(1000)).await;
        app.poll_submissions();
        assert!(session(&app).is_submitting());

        tokio::time::sleep(Duration::from_millis(600)).await;
        app.poll_submissions();

        assert_eq!(app.state.current_view, View::Home);
        assert_eq!(app.state.current_route, "/");
        assert!(app.state.form.is_none());
        assert_eq!(app.state.notifications.len(), 1);
        assert_eq!(app.state.notifications[0].title, "Application Submitted");

        app.poll_submissions();
        assert_eq!(app.state.notifications.len(), 1);

        // A fresh form starts at section 1 with empty fields
        app.open_route("/apply");
        assert_eq!(session(&app).section(), 1);
        assert!(session(&app).data().is_blank());
    }

    #[tokio::test]
    async fn test_failed_submission_shows_banner_and_keeps_fields() {
        let mut mock = MockIntakeServiceTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(IntakeError::Unavailable("down".to_string())));
        let mut app = App::with_service(Site::ThirtyUnderThirty, Arc::new(mock));
        fill_cohort(&mut app);

        app.handle_key(ctrl('s'));
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.poll_submissions();

        let session = session(&app);
        assert!(!session.is_submitting());
        assert_eq!(session.section(), 4);
        assert!(session.submit_error().is_some());
        assert_eq!(session.data().value("fullName"), Some("Ada Lovelace"));
        assert_eq!(app.state.current_view, View::Form);
        assert!(app.state.notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_form_cancels_submission() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        fill_cohort(&mut app);
        app.handle_key(ctrl('s'));

        app.handle_key(key(KeyCode::Esc));
        tokio::time::sleep(Duration::from_secs(2)).await;
        app.poll_submissions();

        assert_eq!(app.state.current_view, View::Home);
        assert!(app.state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_typing_and_blocked_next() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        app.open_route("/apply/quick");
        assert_eq!(session(&app).kind(), FormKind::QuickApply);

        app.handle_key(ctrl('n'));
        assert_eq!(session(&app).errors().len(), 6);

        type_str(&mut app, "Grace Hopper");
        assert_eq!(session(&app).data().value("fullName"), Some("Grace Hopper"));
        assert!(!session(&app).errors().contains("fullName"));

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(session(&app).data().value("fullName"), Some("Grace Hoppe"));
    }

    #[tokio::test]
    async fn test_choice_keys_cycle_options() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        app.open_route("/apply/quick");
        app.state.form.as_mut().unwrap().set_focus(4);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(session(&app).data().value("teamSize"), Some("Solo"));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(session(&app).data().value("teamSize"), Some("Solo"));
    }

    #[tokio::test]
    async fn test_add_and_remove_co_founder_shortcuts() {
        let mut app = simulated_app(Site::ForeBridge);
        app.open_route("/apply");
        app.state.form.as_mut().unwrap().set_field("hasCoFounders", "Yes");
        app.handle_key(ctrl('a'));
        let records = session(&app).data().group("coFounders").map(|g| g.len());
        assert_eq!(records, Some(2));

        // Focus a field of the second record, then remove it
        let session_mut = app.state.form.as_mut().unwrap();
        let index = session_mut
            .slots()
            .iter()
            .position(|slot| slot.record == Some(1))
            .unwrap();
        session_mut.set_focus(index);
        app.handle_key(ctrl('d'));
        let records = session(&app).data().group("coFounders").map(|g| g.len());
        assert_eq!(records, Some(1));

        // The last record stays
        app.handle_key(ctrl('d'));
        let records = session(&app).data().group("coFounders").map(|g| g.len());
        assert_eq!(records, Some(1));
    }

    #[tokio::test]
    async fn test_unknown_route_shows_not_found() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        app.open_route("/pricing");
        assert_eq!(app.state.current_view, View::NotFound);
        assert_eq!(app.state.title(), "Page Not Found - 30under30.ai");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.current_view, View::Home);
    }

    #[tokio::test]
    async fn test_route_prompt() {
        let mut app = simulated_app(Site::ForeBridge);
        app.handle_key(key(KeyCode::Char(':')));
        type_str(&mut app, "contact");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.state.route_input.is_none());
        assert_eq!(session(&app).kind(), FormKind::ForeBridgeContact);
        assert_eq!(app.state.title(), "Contact - ForeBridge");
    }

    #[tokio::test]
    async fn test_anchor_keys_scroll_home() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.state.active_anchor.as_deref(), Some("process"));
        assert!(app.state.scroll_offset > 0);

        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.state.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_scrolling_stops_at_page_end() {
        let mut app = simulated_app(Site::ForeBridge);
        app.set_viewport_height(20);
        let limit = home::max_offset(Site::ForeBridge, 20);
        for _ in 0..limit + 15 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.state.scroll_offset, limit);

        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.state.scroll_offset, limit - 1);

        // A taller terminal pulls the offset back
        app.set_viewport_height(200);
        assert_eq!(app.state.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_error_dialog_is_modal() {
        let mut app = simulated_app(Site::ThirtyUnderThirty);
        app.push_error("Invalid config");
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_new_opens_start_route() {
        let config = TuiConfig {
            site: Some(Site::ForeBridge),
            start_route: Some("/apply".to_string()),
            ..Default::default()
        };
        let app = App::new(&config);
        assert_eq!(app.state.current_view, View::Form);
        assert_eq!(session(&app).kind(), FormKind::ForeBridgeApply);
        assert_eq!(session(&app).section_count(), 5);
    }
}
