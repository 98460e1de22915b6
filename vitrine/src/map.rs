//! Embedded map loading.
//!
//! The map iframe is heavy, so the page ships a placeholder with a load
//! affordance; clicking it swaps the placeholder's content for the embed
//! frame.

use pagedom::{closest_matching, find_element_mut, Element, Page};

pub const LOAD_MAP_ACTION: &str = "load-map";
const PLACEHOLDER_CLASS: &str = "c-map-placeholder";

/// Replace the trigger's enclosing placeholder content with the embed
/// frame. No-op without a placeholder ancestor.
pub fn load_map(page: &mut Page, trigger_id: &str, embed_url: &str) {
    let Some(placeholder_id) =
        closest_matching(&page.root, trigger_id, |el| el.has_class(PLACEHOLDER_CLASS))
    else {
        log::debug!("load_map: no placeholder around #{trigger_id}");
        return;
    };
    let Some(placeholder) = find_element_mut(&mut page.root, &placeholder_id) else {
        return;
    };

    let frame = Element::box_()
        .class("c-map-embed")
        .attr("src", embed_url)
        .attr("loading", "lazy");
    placeholder.content = pagedom::Content::Children(vec![frame]);
    log::info!("map embed loaded");
}
