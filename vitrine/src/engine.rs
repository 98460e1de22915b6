//! Engine wiring: one dispatch entry point over the page tree.
//!
//! The engine owns the page, every behavior controller and the timer queue.
//! Events are routed by [`Engine::dispatch`] and run to completion; deferred
//! work (submission completion, toast expiry) fires from [`Engine::tick`].
//! All state is instance state, so independent engines can coexist in one
//! process.

use std::time::Instant;

use pagedom::{closest_matching, find_element, Event, Key, Page};

use crate::config::EngineConfig;
use crate::filter;
use crate::forms::{FormsController, SubmitOutcome};
use crate::map;
use crate::modal::{self, Modals};
use crate::nav::{self, BurgerMenu};
use crate::notify::NotificationCenter;
use crate::schedule::{TimerQueue, TimerTask};
use crate::validation::{clear_error, validate_field};

/// Destination boundary for the post-submission success effect.
pub trait Navigator {
    fn navigate(&mut self, page: &mut Page, url: &str);
}

/// Default navigator: rewrites the page location in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&mut self, page: &mut Page, url: &str) {
        let (path, hash) = match url.split_once('#') {
            Some((path, hash)) => (path, Some(hash.to_string())),
            None => (url, None),
        };
        page.location.path = path.to_string();
        page.location.hash = hash;
        log::info!("navigating to {url}");
    }
}

/// The page behavior engine.
pub struct Engine {
    page: Page,
    config: EngineConfig,
    burger: BurgerMenu,
    modals: Modals,
    forms: FormsController,
    notifications: NotificationCenter,
    timers: TimerQueue,
    navigator: Box<dyn Navigator>,
    initialized: bool,
}

impl Engine {
    pub fn new(page: Page, config: EngineConfig) -> Self {
        Self {
            page,
            config,
            burger: BurgerMenu::new(),
            modals: Modals::new(),
            forms: FormsController::new(),
            notifications: NotificationCenter::new(),
            timers: TimerQueue::new(),
            navigator: Box::new(LocationNavigator),
            initialized: false,
        }
    }

    /// Replace the success-effect destination (tests install recorders).
    pub fn with_navigator(mut self, navigator: Box<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn burger(&self) -> &BurgerMenu {
        &self.burger
    }

    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    pub fn forms(&self) -> &FormsController {
        &self.forms
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// One-time setup: active-link highlight and scroll-top visibility.
    ///
    /// Idempotent; a second invocation is a no-op returning `false`.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            log::debug!("init: already initialized");
            return false;
        }
        self.initialized = true;
        nav::mark_active_links(&mut self.page);
        nav::update_scroll_top(&mut self.page, &self.config);
        log::info!("page engine initialized");
        true
    }

    /// Route one page event. Handlers run to completion before the next
    /// event is processed.
    pub fn dispatch(&mut self, event: Event) {
        log::debug!("dispatch {event:?}");
        match event {
            Event::Click { target } => self.on_click(target),
            Event::Input { target: Some(id) } => clear_error(&mut self.page.root, &id),
            Event::Blur { target: Some(id) } => {
                validate_field(&mut self.page.root, &id);
            }
            Event::Submit { target: Some(id) } => {
                self.submit(&id);
            }
            Event::KeyDown { key: Key::Escape } => {
                if self.burger.is_open() {
                    self.burger.close(&mut self.page);
                }
                self.modals.close_all(&mut self.page);
            }
            Event::Resize { width } => {
                self.page.viewport_width = width;
                self.burger
                    .close_for_viewport(&mut self.page, width, &self.config);
            }
            Event::Scroll { y } => {
                self.page.scroll_y = y;
                nav::update_scroll_top(&mut self.page, &self.config);
            }
            _ => {}
        }
    }

    /// Drive a submit event for a form by id.
    pub fn submit(&mut self, form_id: &str) -> SubmitOutcome {
        self.forms.submit(
            &mut self.page,
            form_id,
            &mut self.timers,
            &mut self.notifications,
            &self.config,
        )
    }

    /// Advance the clock: fire due submission completions and toast
    /// expiries, in deadline order.
    pub fn tick(&mut self, now: Instant) {
        for task in self.timers.advance(now) {
            match task {
                TimerTask::CompleteSubmission { form_id } => {
                    self.forms.complete(
                        &mut self.page,
                        &form_id,
                        self.navigator.as_mut(),
                        &self.config,
                    );
                }
                TimerTask::ExpireNotification { toast_id } => {
                    self.notifications.expire(&mut self.page, &toast_id);
                }
            }
        }
    }

    fn on_click(&mut self, target: Option<String>) {
        let Some(id) = target else {
            // Background click: nothing was hit, but an open menu closes.
            if self.burger.is_open() {
                self.burger.close(&mut self.page);
            }
            return;
        };

        let Some(el) = find_element(&self.page.root, &id) else {
            log::debug!("click on unknown element #{id}");
            return;
        };
        let is_toggle = el.has_class(nav::NAV_TOGGLE_CLASS);
        let is_nav_link = el.has_class(nav::NAV_LINK_CLASS);
        let is_filter_btn = el.has_class(filter::FILTER_BTN_CLASS);
        let is_scroll_top = el.has_class(nav::SCROLL_TOP_CLASS);
        let is_modal_closer = el.has_class(modal::MODAL_CLOSE_CLASS)
            || el.has_class(modal::MODAL_OVERLAY_CLASS)
            || el.get_attr("data-modal-close").is_some();
        let opens_modal = el.get_attr("data-modal").map(str::to_string);
        let is_map_loader = el.get_attr("data-action") == Some(map::LOAD_MAP_ACTION);
        let has_href = el.get_attr("href").is_some();

        if is_toggle {
            self.burger.toggle(&mut self.page);
            return;
        }

        if self.burger.is_open() {
            let inside_nav =
                closest_matching(&self.page.root, &id, |el| el.has_class(nav::NAV_CLASS))
                    .is_some();
            if !inside_nav || is_nav_link {
                self.burger.close(&mut self.page);
            }
        }

        if let Some(modal_id) = opens_modal {
            self.modals.open(&mut self.page, &modal_id);
            return;
        }
        if is_modal_closer {
            if let Some(modal_id) =
                closest_matching(&self.page.root, &id, |el| el.has_class(modal::MODAL_CLASS))
            {
                self.modals.close(&mut self.page, &modal_id);
            }
            return;
        }
        if is_filter_btn {
            filter::apply_filter(&mut self.page, &id);
            return;
        }
        if is_map_loader {
            map::load_map(&mut self.page, &id, &self.config.map_embed_url);
            return;
        }
        if is_scroll_top {
            self.page.scroll_y = 0;
            nav::update_scroll_top(&mut self.page, &self.config);
            return;
        }
        if has_href {
            nav::follow_anchor(&mut self.page, &id, &self.config);
        }
    }
}
