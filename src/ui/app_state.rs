//! # App State Module
//!
//! This module defines the central application state structure for the
//! fitness dashboard.
//!
//! ## Key Types:
//! - `Screen` - Enum defining the two screens (Home, BodyScore)
//! - `BodyScoreApp` - Main application state struct
//!
//! ## State Management:
//! The app holds one state container per mounted screen. The home screen is
//! the navigation root and stays mounted for the app's lifetime; the Body
//! Score screen state exists only while that screen is shown, so navigating
//! there and back gives mount/unmount semantics (fresh date, hidden modal,
//! restarted animations). All displayed figures are fixed design literals.

use log::{info, warn};

use crate::platform::share::{ShareOutcome, SharePlatform};
use crate::ui::state::body_score_state::BodyScoreState;
use crate::ui::state::home_state::HomeState;

/// Fixed figures from the design; nothing derives or updates them.
pub const WEIGHT_KG: f64 = 56.0;
pub const WEIGHT_GOAL_KG: f64 = 100.0;
pub const BODY_SCORE: u32 = 79;
pub const USER_NAME: &str = "Claire Regina";

/// Message sent through the share capability.
pub const SHARE_MESSAGE: &str = "Check out my Body Score: 79/100! #Health #Fitness";

/// Screens reachable in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    BodyScore,
}

/// User-facing alert raised by a failed share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
}

/// Main application struct for the egui fitness dashboard
pub struct BodyScoreApp {
    /// Platform sharing capability
    pub share: Box<dyn SharePlatform>,

    /// Currently shown screen
    pub screen: Screen,

    /// Home screen state, mounted for the app's lifetime
    pub home: HomeState,

    /// Body Score screen state, present only while that screen is mounted
    pub body_score: Option<BodyScoreState>,

    /// Pending alert from a failed share action
    pub alert: Option<AlertMessage>,
}

impl BodyScoreApp {
    /// Create the app on the home screen with the platform share capability.
    pub fn new() -> Self {
        info!("🏠 Initializing Body Score app on the home screen");
        Self::with_share(Box::new(crate::platform::share::ClipboardShare))
    }

    /// Create the app with a custom share capability.
    pub fn with_share(share: Box<dyn SharePlatform>) -> Self {
        Self {
            share,
            screen: Screen::Home,
            home: HomeState::new(),
            body_score: None,
            alert: None,
        }
    }

    /// Mount the Body Score screen and switch to it.
    pub fn navigate_to_body_score(&mut self) {
        info!("➡ Navigating to the Body Score screen");
        self.body_score = Some(BodyScoreState::new());
        self.screen = Screen::BodyScore;
    }

    /// Unmount the Body Score screen and return home. Dropping the screen
    /// state tears down its modal and stops its animations.
    pub fn navigate_back_home(&mut self) {
        info!("⬅ Navigating back to the home screen");
        self.body_score = None;
        self.screen = Screen::Home;
    }

    /// Run the share action. Success outcomes are fire-and-forget; a failure
    /// raises exactly one alert with the platform's reason and is not
    /// retried or propagated.
    pub fn share_score(&mut self, ctx: &eframe::egui::Context) {
        match self.share.share(ctx, SHARE_MESSAGE) {
            Ok(ShareOutcome::SharedWithActivity(activity)) => {
                info!("📤 Shared with activity {}", activity);
            }
            Ok(ShareOutcome::Shared) => {
                info!("📤 Share completed");
            }
            Ok(ShareOutcome::Dismissed) => {
                info!("📤 Share sheet dismissed");
            }
            Err(e) => {
                warn!("📤 Share failed: {}", e);
                self.alert = Some(AlertMessage {
                    title: "Sharing Error".to_string(),
                    body: e.to_string(),
                });
            }
        }
    }

    /// Dismiss the current alert.
    pub fn clear_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::share::ShareError;

    struct FixedOutcomeShare(ShareOutcome);

    impl SharePlatform for FixedOutcomeShare {
        fn share(
            &mut self,
            _ctx: &eframe::egui::Context,
            _message: &str,
        ) -> Result<ShareOutcome, ShareError> {
            Ok(self.0.clone())
        }
    }

    struct FailingShare;

    impl SharePlatform for FailingShare {
        fn share(
            &mut self,
            _ctx: &eframe::egui::Context,
            _message: &str,
        ) -> Result<ShareOutcome, ShareError> {
            Err(ShareError::Rejected("share sheet unavailable".to_string()))
        }
    }

    struct RecordingShare(std::rc::Rc<std::cell::RefCell<Vec<String>>>);

    impl SharePlatform for RecordingShare {
        fn share(
            &mut self,
            _ctx: &eframe::egui::Context,
            message: &str,
        ) -> Result<ShareOutcome, ShareError> {
            self.0.borrow_mut().push(message.to_string());
            Ok(ShareOutcome::Dismissed)
        }
    }

    #[test]
    fn app_starts_on_the_home_screen_with_no_body_score_state() {
        let app = BodyScoreApp::with_share(Box::new(FailingShare));
        assert_eq!(app.screen, Screen::Home);
        assert!(app.body_score.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn navigating_mounts_and_unmounts_the_body_score_screen() {
        let mut app = BodyScoreApp::with_share(Box::new(FailingShare));
        app.navigate_to_body_score();
        assert_eq!(app.screen, Screen::BodyScore);
        let state = app.body_score.as_ref().expect("screen state mounted");
        assert!(!state.show_calendar);

        app.navigate_back_home();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.body_score.is_none());
    }

    #[test]
    fn successful_share_outcomes_produce_no_alert() {
        let ctx = eframe::egui::Context::default();
        for outcome in [
            ShareOutcome::Shared,
            ShareOutcome::Dismissed,
            ShareOutcome::SharedWithActivity("mail".to_string()),
        ] {
            let mut app = BodyScoreApp::with_share(Box::new(FixedOutcomeShare(outcome)));
            app.share_score(&ctx);
            assert!(app.alert.is_none());
        }
    }

    #[test]
    fn failed_share_raises_exactly_one_alert_with_the_reason() {
        let ctx = eframe::egui::Context::default();
        let mut app = BodyScoreApp::with_share(Box::new(FailingShare));
        app.share_score(&ctx);

        let alert = app.alert.as_ref().expect("alert raised");
        assert_eq!(alert.title, "Sharing Error");
        assert!(alert.body.contains("share sheet unavailable"));

        app.clear_alert();
        assert!(app.alert.is_none());
    }

    #[test]
    fn share_sends_the_fixed_message() {
        let ctx = eframe::egui::Context::default();
        let sent = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut app = BodyScoreApp::with_share(Box::new(RecordingShare(sent.clone())));
        app.share_score(&ctx);
        assert_eq!(*sent.borrow(), vec![SHARE_MESSAGE.to_string()]);
        assert!(app.alert.is_none());
    }
}
