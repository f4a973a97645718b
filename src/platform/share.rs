//! # Share Capability
//!
//! This module defines the sharing capability consumed by the Body Score
//! screen. The share action is the only fallible operation in the app: a
//! failure is surfaced to the caller as a typed error and handled locally
//! with a user-facing alert, never propagated further.
//!
//! ## Responsibilities:
//! - Define the `SharePlatform` trait seam for the share action
//! - Define share outcomes (shared with activity, shared plain, dismissed)
//! - Provide the clipboard-backed production implementation

use eframe::egui;
use thiserror::Error;

/// How a share request was resolved by the platform. The clipboard
/// implementation only ever reports `Shared`; the other outcomes exist for
/// platforms with a real share sheet.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Shared through a specific activity (the activity identifier is kept
    /// for logging only, nothing is derived from it).
    SharedWithActivity(String),
    /// Shared without activity information.
    Shared,
    /// The user dismissed the share sheet.
    Dismissed,
}

/// Errors the sharing capability can report.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("sharing is not available: {0}")]
    Unavailable(String),
    #[error("sharing was rejected by the platform: {0}")]
    Rejected(String),
}

/// Platform sharing capability. Takes a message string and resolves to an
/// outcome or fails with a platform error. Fire-and-forget from the caller's
/// point of view: each outcome is handled exactly once, no retry.
pub trait SharePlatform {
    fn share(&mut self, ctx: &egui::Context, message: &str) -> Result<ShareOutcome, ShareError>;
}

/// Production implementation: desktop has no native share sheet, so the
/// message is placed on the system clipboard through the egui context.
pub struct ClipboardShare;

impl SharePlatform for ClipboardShare {
    fn share(&mut self, ctx: &egui::Context, message: &str) -> Result<ShareOutcome, ShareError> {
        ctx.output_mut(|o| o.copied_text = message.to_owned());
        log::info!("Copied share message to clipboard ({} chars)", message.len());
        Ok(ShareOutcome::Shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_share_reports_plain_shared_outcome() {
        let ctx = egui::Context::default();
        let mut share = ClipboardShare;

        let outcome = share.share(&ctx, "hello").expect("clipboard share cannot fail");
        assert_eq!(outcome, ShareOutcome::Shared);
    }

    #[test]
    fn clipboard_share_places_message_on_clipboard() {
        let ctx = egui::Context::default();
        let mut share = ClipboardShare;

        share.share(&ctx, "Check out my Body Score").unwrap();
        let copied = ctx.output_mut(|o| o.copied_text.clone());
        assert_eq!(copied, "Check out my Body Score");
    }

    #[test]
    fn share_errors_carry_a_readable_message() {
        let err = ShareError::Rejected("user declined".to_string());
        assert!(err.to_string().contains("user declined"));
    }
}
