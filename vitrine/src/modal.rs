//! Modal open/close bookkeeping.
//!
//! Modals are overlay sections toggled by id. The controller owns the set
//! of open ids; the page-level scroll lock is held while any modal is open.
//! Unknown ids are absorbed as no-ops.

use std::collections::HashSet;

use pagedom::{find_element_mut, Page};

pub const MODAL_CLASS: &str = "c-modal";
pub const MODAL_CLOSE_CLASS: &str = "c-modal__close";
pub const MODAL_OVERLAY_CLASS: &str = "c-modal__overlay";
const OPEN_CLASS: &str = "is-open";
const NO_SCROLL_CLASS: &str = "u-no-scroll";

/// The set of currently open modals.
#[derive(Debug, Default)]
pub struct Modals {
    open: HashSet<String>,
}

impl Modals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn open(&mut self, page: &mut Page, id: &str) {
        let Some(modal) = find_element_mut(&mut page.root, id) else {
            log::debug!("open: no modal #{id}");
            return;
        };
        modal.add_class(OPEN_CLASS);
        modal.set_attr("aria-hidden", "false");
        self.open.insert(id.to_string());
        page.root.add_class(NO_SCROLL_CLASS);
    }

    pub fn close(&mut self, page: &mut Page, id: &str) {
        let Some(modal) = find_element_mut(&mut page.root, id) else {
            log::debug!("close: no modal #{id}");
            return;
        };
        modal.remove_class(OPEN_CLASS);
        modal.set_attr("aria-hidden", "true");
        self.open.remove(id);
        if self.open.is_empty() {
            page.root.remove_class(NO_SCROLL_CLASS);
        }
    }

    /// Close every open modal (the Escape path).
    pub fn close_all(&mut self, page: &mut Page) {
        let open: Vec<String> = self.open.iter().cloned().collect();
        for id in open {
            self.close(page, &id);
        }
    }
}
