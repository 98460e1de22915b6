//! Portfolio filtering.
//!
//! Filter buttons carry a `data-filter` value; cards opt into a filter by
//! carrying a `c-portfolio-card--<value>` modifier class. Selection is
//! exclusive among buttons; non-matching cards are hidden.

use pagedom::{collect_matching, find_element, find_element_mut, Page};

pub const FILTER_BTN_CLASS: &str = "c-filter__btn";
pub const CARD_CLASS: &str = "c-portfolio-card";
const ACTIVE_CLASS: &str = "is-active";
const HIDDEN_CLASS: &str = "u-hidden";

/// Apply the filter carried by the clicked button.
pub fn apply_filter(page: &mut Page, button_id: &str) {
    let Some(filter) = find_element(&page.root, button_id)
        .and_then(|el| el.get_attr("data-filter"))
        .map(str::to_string)
    else {
        log::debug!("apply_filter: #{button_id} carries no data-filter");
        return;
    };

    for id in collect_matching(&page.root, |el| el.has_class(FILTER_BTN_CLASS)) {
        if let Some(button) = find_element_mut(&mut page.root, &id) {
            if id == button_id {
                button.add_class(ACTIVE_CLASS);
            } else {
                button.remove_class(ACTIVE_CLASS);
            }
        }
    }

    let modifier = format!("{CARD_CLASS}--{filter}");
    for id in collect_matching(&page.root, |el| el.has_class(CARD_CLASS)) {
        if let Some(card) = find_element_mut(&mut page.root, &id) {
            let shown = filter == "all" || card.has_class(&modifier);
            if shown {
                card.remove_class(HIDDEN_CLASS);
            } else {
                card.add_class(HIDDEN_CLASS);
            }
        }
    }
}
