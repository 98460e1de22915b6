//! Transient user notifications.
//!
//! Toasts stack in arrival order inside a lazily-created live-region
//! container and expire independently after a fixed dwell time. There is no
//! manual dismissal and no queue bound.

use std::str::FromStr;
use std::time::Instant;

use pagedom::{find_element, find_element_mut, Element, Page};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::schedule::{TimerQueue, TimerTask};

/// Id of the singleton toast container, attached once per page lifetime.
pub const CONTAINER_ID: &str = "toast-container";

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Error,
}

impl Level {
    /// Class-name fragment for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

/// A severity string that names no known level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown notification level: {0}")]
pub struct LevelError(pub String);

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            other => Err(LevelError(other.to_string())),
        }
    }
}

/// An immutable notification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: Level,
    pub created_at: Instant,
}

/// Page-wide toast queue.
///
/// Owns the arrival-order record of live notifications and mirrors it into
/// the page tree; expiry is scheduled through the engine's timer queue.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    live: Vec<(String, Notification)>,
    next_toast: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and schedule its expiry. Returns the toast's id.
    pub fn notify(
        &mut self,
        page: &mut Page,
        timers: &mut TimerQueue,
        message: &str,
        level: Level,
        config: &EngineConfig,
    ) -> String {
        ensure_container(&mut page.root);

        let toast_id = format!("toast-{}", self.next_toast);
        self.next_toast += 1;

        let toast = Element::text(message)
            .id(toast_id.clone())
            .class("c-toast")
            .class(format!("c-toast--{}", level.as_str()))
            .attr("role", "alert");
        if let Some(container) = find_element_mut(&mut page.root, CONTAINER_ID) {
            container.push_child(toast);
        }

        self.live.push((
            toast_id.clone(),
            Notification {
                message: message.to_string(),
                level,
                created_at: timers.now(),
            },
        ));
        timers.schedule(
            config.notification_dwell,
            TimerTask::ExpireNotification {
                toast_id: toast_id.clone(),
            },
        );
        log::debug!("notify [{}]: {message}", level.as_str());
        toast_id
    }

    /// Remove an expired toast. Removing an already-removed toast is a
    /// no-op.
    pub fn expire(&mut self, page: &mut Page, toast_id: &str) {
        self.live.retain(|(id, _)| id != toast_id);
        if let Some(container) = find_element_mut(&mut page.root, CONTAINER_ID) {
            container.remove_child(toast_id);
        }
    }

    /// Live notifications, in arrival order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter().map(|(_, notification)| notification)
    }

    pub fn active_count(&self) -> usize {
        self.live.len()
    }
}

fn ensure_container(root: &mut Element) {
    if find_element(root, CONTAINER_ID).is_none() {
        root.push_child(
            Element::box_()
                .id(CONTAINER_ID)
                .attr("role", "status")
                .attr("aria-live", "polite"),
        );
    }
}
