//! Local state of a detail page instance.

use market_observability::StructuredLogger;
use serde::Serialize;

/// Favorite and phone-reveal flags. Both start off on every page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailViewState {
    pub is_favorite: bool,
    pub is_phone_visible: bool,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite flag and return the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Reveal the seller phone. Idempotent.
    pub fn show_phone(&mut self) {
        self.is_phone_visible = true;
    }
}

/// What a share action hands to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// JSON for embedding in a `data-share` attribute.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Result reported back by the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No share capability on the client; nothing happens.
    Unsupported,
    Rejected(String),
}

/// Handle a share result. Rejections are logged and not surfaced.
pub fn handle_share_outcome(outcome: &ShareOutcome, payload: &SharePayload, logger: &StructuredLogger) {
    match outcome {
        ShareOutcome::Shared => logger
            .debug_builder("Listing shared")
            .field("url", payload.url.clone())
            .emit(),
        ShareOutcome::Unsupported => {}
        ShareOutcome::Rejected(reason) => logger
            .error_builder("Error sharing")
            .field("url", payload.url.clone())
            .field("error", reason.clone())
            .emit(),
    }
}
