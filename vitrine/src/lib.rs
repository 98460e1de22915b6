pub mod config;
pub mod engine;
pub mod filter;
pub mod forms;
pub mod map;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod schedule;
pub mod validation;

pub use engine::{Engine, LocationNavigator, Navigator};

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{Engine, LocationNavigator, Navigator};
    pub use crate::forms::{FormPhase, FormsController, SubmitOutcome};
    pub use crate::modal::Modals;
    pub use crate::nav::BurgerMenu;
    pub use crate::notify::{Level, Notification, NotificationCenter};
    pub use crate::schedule::{TimerQueue, TimerTask};
    pub use crate::validation::{FieldRole, Verdict};

    pub use pagedom::{Element, Event, InputKind, Key, Location, Metrics, Page};
}
