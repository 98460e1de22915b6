pub mod element;
pub mod event;
pub mod page;

pub use element::{
    closest_matching, collect_matching, element_at_path, element_at_path_mut, find_element,
    find_element_mut, find_path, Content, Element, InputKind,
};
pub use event::{Event, Key};
pub use page::{Location, Metrics, Page};
