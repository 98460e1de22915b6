//! Engine configuration.

use std::time::Duration;

/// Tunables for the page engine.
///
/// Values default to the behavior the site ships with; tests and embedders
/// override individual knobs through the builder setters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Destination after a successful form submission.
    pub confirm_url: String,
    /// Simulated completion latency for a submission.
    pub submit_delay: Duration,
    /// How long a notification stays visible.
    pub notification_dwell: Duration,
    /// Viewport width at or above which the burger menu force-closes.
    pub desktop_breakpoint: u32,
    /// Fallback header height for anchor scrolling, when the header's
    /// measured geometry is unavailable.
    pub header_offset: u32,
    /// Scroll depth past which the back-to-top affordance shows.
    pub scroll_top_threshold: u32,
    /// Source of the lazily-loaded map embed.
    pub map_embed_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confirm_url: "/thank_you.html".to_string(),
            submit_delay: Duration::from_millis(800),
            notification_dwell: Duration::from_millis(5000),
            desktop_breakpoint: 1024,
            header_offset: 64,
            scroll_top_threshold: 300,
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2175.123!2d24.123!3d56.945!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNTbCsDU2JzQyLjAiTiAyNMKwMDcnMjMuMCJF!5e0!3m2!1slv!2slv!4v1234567890".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_url(mut self, url: impl Into<String>) -> Self {
        self.confirm_url = url.into();
        self
    }

    pub fn submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn notification_dwell(mut self, dwell: Duration) -> Self {
        self.notification_dwell = dwell;
        self
    }

    pub fn desktop_breakpoint(mut self, width: u32) -> Self {
        self.desktop_breakpoint = width;
        self
    }

    pub fn header_offset(mut self, offset: u32) -> Self {
        self.header_offset = offset;
        self
    }

    pub fn scroll_top_threshold(mut self, threshold: u32) -> Self {
        self.scroll_top_threshold = threshold;
        self
    }

    pub fn map_embed_url(mut self, url: impl Into<String>) -> Self {
        self.map_embed_url = url.into();
        self
    }
}
