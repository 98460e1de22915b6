//! Navigation behaviors: burger menu, active links, anchor scrolling.

use pagedom::{collect_matching, find_element, find_element_mut, Page};

use crate::config::EngineConfig;

pub const NAV_CLASS: &str = "c-nav";
pub const NAV_TOGGLE_CLASS: &str = "c-nav__toggle";
pub const NAV_LINK_CLASS: &str = "c-nav__link";
pub const SCROLL_TOP_CLASS: &str = "c-scroll-top";
const HEADER_CLASS: &str = "l-header";
const NO_SCROLL_CLASS: &str = "u-no-scroll";
const OPEN_CLASS: &str = "is-open";
const ACTIVE_CLASS: &str = "is-active";
const VISIBLE_CLASS: &str = "is-visible";

/// Burger menu state. Open/close keep the nav, the toggle and the
/// page-level scroll lock in step.
#[derive(Debug, Default)]
pub struct BurgerMenu {
    open: bool,
}

impl BurgerMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, page: &mut Page) {
        self.open = true;
        set_menu_classes(page, true);
    }

    pub fn close(&mut self, page: &mut Page) {
        self.open = false;
        set_menu_classes(page, false);
    }

    pub fn toggle(&mut self, page: &mut Page) {
        if self.open {
            self.close(page);
        } else {
            self.open(page);
        }
    }

    /// Force-close when the viewport reaches desktop width.
    pub fn close_for_viewport(&mut self, page: &mut Page, width: u32, config: &EngineConfig) {
        if width >= config.desktop_breakpoint && self.open {
            self.close(page);
        }
    }
}

fn set_menu_classes(page: &mut Page, open: bool) {
    let nav_id = collect_matching(&page.root, |el| el.has_class(NAV_CLASS))
        .into_iter()
        .next();
    let toggle_id = collect_matching(&page.root, |el| el.has_class(NAV_TOGGLE_CLASS))
        .into_iter()
        .next();

    for id in [nav_id, toggle_id].into_iter().flatten() {
        if let Some(el) = find_element_mut(&mut page.root, &id) {
            if open {
                el.add_class(OPEN_CLASS);
            } else {
                el.remove_class(OPEN_CLASS);
            }
            if el.has_class(NAV_TOGGLE_CLASS) {
                el.set_attr("aria-expanded", if open { "true" } else { "false" });
            }
        }
    }

    if open {
        page.root.add_class(NO_SCROLL_CLASS);
    } else {
        page.root.remove_class(NO_SCROLL_CLASS);
    }
}

/// Highlight the nav link whose href matches the current location path.
///
/// `/` and `/index.html` both count as the root path. Links without an href
/// are left alone.
pub fn mark_active_links(page: &mut Page) {
    let path = page.location.path.clone();
    for link_id in collect_matching(&page.root, |el| el.has_class(NAV_LINK_CLASS)) {
        let Some(link) = find_element_mut(&mut page.root, &link_id) else {
            continue;
        };
        let Some(href) = link.get_attr("href") else {
            continue;
        };
        let link_path = href.split('#').next().unwrap_or("");
        let active = link_path == path
            || (path == "/" && (link_path == "/" || link_path == "/index.html"));
        if active {
            link.set_attr("aria-current", "page");
            link.add_class(ACTIVE_CLASS);
        } else {
            link.remove_attr("aria-current");
            link.remove_class(ACTIVE_CLASS);
        }
    }
}

/// Handle a click on an in-page anchor. Returns whether the click was
/// consumed as an anchor jump.
///
/// Only `#hash` and `/#hash` hrefs scroll; bare `#` and `#!` are inert, and
/// anything else is a normal link outside this behavior. A missing target
/// element consumes the click without scrolling.
pub fn follow_anchor(page: &mut Page, anchor_id: &str, config: &EngineConfig) -> bool {
    let Some(href) = find_element(&page.root, anchor_id)
        .and_then(|el| el.get_attr("href"))
        .map(str::to_string)
    else {
        return false;
    };
    if href == "#" || href == "#!" {
        return false;
    }
    let hash = match (href.strip_prefix("/#"), href.strip_prefix('#')) {
        (Some(hash), _) => hash,
        (None, Some(hash)) => hash,
        (None, None) => return false,
    };

    if find_element(&page.root, hash).is_none() {
        log::debug!("anchor #{hash} has no target");
        return true;
    }

    let header_offset = collect_matching(&page.root, |el| el.has_class(HEADER_CLASS))
        .into_iter()
        .next()
        .and_then(|id| page.metrics_of(&id))
        .map(|metrics| metrics.height)
        .unwrap_or(config.header_offset);
    let top = page
        .metrics_of(hash)
        .map(|metrics| metrics.top)
        .unwrap_or(0)
        .saturating_sub(header_offset);

    page.scroll_y = top;
    page.location.hash = Some(hash.to_string());
    true
}

/// Show or hide the back-to-top affordance for the current scroll depth.
pub fn update_scroll_top(page: &mut Page, config: &EngineConfig) {
    let visible = page.scroll_y > config.scroll_top_threshold;
    let Some(id) = collect_matching(&page.root, |el| el.has_class(SCROLL_TOP_CLASS))
        .into_iter()
        .next()
    else {
        return;
    };
    if let Some(el) = find_element_mut(&mut page.root, &id) {
        if visible {
            el.add_class(VISIBLE_CLASS);
        } else {
            el.remove_class(VISIBLE_CLASS);
        }
    }
}
