//! Form submission lifecycle.
//!
//! Each form moves between two phases: idle and submitting. A submit event
//! on an idle form validates every required field; failure surfaces an
//! aggregate error toast and leaves the per-field annotations in place.
//! Success marks the form in-flight, swaps the submit affordance for a busy
//! label and schedules completion. Submit events on an in-flight form are
//! swallowed, so at most one completion timer is live per form.

use std::collections::{HashMap, HashSet};

use pagedom::{collect_matching, find_element, find_element_mut, Page};

use crate::config::EngineConfig;
use crate::engine::Navigator;
use crate::notify::{Level, NotificationCenter};
use crate::schedule::{TimerQueue, TimerTask};
use crate::validation::validate_form;

/// Busy label shown on the submit affordance while in flight.
pub const SENDING_LABEL: &str = "Nosūta...";

/// Aggregate notice shown when validation rejects a submit.
pub const FORM_INVALID_NOTICE: &str = "Lūdzu, aizpildiet visus obligātos laukus pareizi";

/// Submission phase of a single form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// What a submit event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays idle.
    Rejected,
    /// The form entered the submitting phase.
    Started,
    /// The form was already submitting; the event was swallowed.
    Ignored,
}

/// Owns the in-flight set and the submit affordances' saved labels.
#[derive(Debug, Default)]
pub struct FormsController {
    in_flight: HashSet<String>,
    saved_labels: HashMap<String, String>,
}

impl FormsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, form_id: &str) -> FormPhase {
        if self.in_flight.contains(form_id) {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }

    /// Drive a submit event for the given form.
    pub fn submit(
        &mut self,
        page: &mut Page,
        form_id: &str,
        timers: &mut TimerQueue,
        notifications: &mut NotificationCenter,
        config: &EngineConfig,
    ) -> SubmitOutcome {
        if self.in_flight.contains(form_id) {
            log::debug!("submit on #{form_id} ignored: already in flight");
            return SubmitOutcome::Ignored;
        }
        if find_element(&page.root, form_id).is_none() {
            log::debug!("submit: no form #{form_id}");
            return SubmitOutcome::Ignored;
        }

        if !validate_form(&mut page.root, form_id) {
            notifications.notify(page, timers, FORM_INVALID_NOTICE, Level::Error, config);
            return SubmitOutcome::Rejected;
        }

        self.in_flight.insert(form_id.to_string());
        if let Some(button_id) = submit_button(page, form_id) {
            if let Some(button) = find_element_mut(&mut page.root, &button_id) {
                let label = button.text_content().unwrap_or_default().to_string();
                self.saved_labels.insert(form_id.to_string(), label);
                button.disabled = true;
                button.set_text(SENDING_LABEL);
            }
        }
        timers.schedule(
            config.submit_delay,
            TimerTask::CompleteSubmission {
                form_id: form_id.to_string(),
            },
        );
        log::info!("form #{form_id} submitting");
        SubmitOutcome::Started
    }

    /// Finish an in-flight submission: restore the affordance, then run the
    /// success effect. A stale completion (form no longer in flight) is a
    /// no-op.
    pub fn complete(
        &mut self,
        page: &mut Page,
        form_id: &str,
        navigator: &mut dyn Navigator,
        config: &EngineConfig,
    ) {
        if !self.in_flight.remove(form_id) {
            log::debug!("completion for #{form_id} ignored: not in flight");
            return;
        }

        if let Some(button_id) = submit_button(page, form_id) {
            if let Some(button) = find_element_mut(&mut page.root, &button_id) {
                button.disabled = false;
                if let Some(label) = self.saved_labels.remove(form_id) {
                    button.set_text(label);
                }
            }
        }
        log::info!("form #{form_id} complete");
        navigator.navigate(page, &config.confirm_url);
    }
}

fn submit_button(page: &Page, form_id: &str) -> Option<String> {
    let form = find_element(&page.root, form_id)?;
    collect_matching(form, |el| el.get_attr("type") == Some("submit"))
        .into_iter()
        .next()
}
