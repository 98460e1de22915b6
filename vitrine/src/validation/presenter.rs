//! Error annotation rendering.
//!
//! Annotations live on the field's enclosing form group: the group gains a
//! `has-error` class and its alert slot carries the message text. A field
//! has at most one live annotation; it is always fully replaced or cleared.
//! Fields without a locatable group degrade to a logged no-op.

use pagedom::{collect_matching, element_at_path, element_at_path_mut, find_element_mut, find_path, Element};

const GROUP_CLASSES: [&str; 2] = ["c-form__group", "form-group"];
const ERROR_SLOT_CLASS: &str = "c-form__error";
const HAS_ERROR_CLASS: &str = "has-error";

/// Mark the field's group as errored and write the message into its alert
/// slot. No-op when the field has no enclosing group.
pub fn show_error(root: &mut Element, field_id: &str, message: &str) {
    let Some(group_path) = error_scope(root, field_id) else {
        log::debug!("show_error: no error container around #{field_id}");
        return;
    };
    let Some(group) = element_at_path_mut(root, &group_path) else {
        return;
    };
    group.add_class(HAS_ERROR_CLASS);
    if let Some(slot_id) = error_slot(group) {
        if let Some(slot) = find_element_mut(group, &slot_id) {
            slot.set_text(message);
        }
    }
}

/// Unmark the field's group and empty its alert slot. Idempotent.
pub fn clear_error(root: &mut Element, field_id: &str) {
    let Some(group_path) = error_scope(root, field_id) else {
        return;
    };
    let Some(group) = element_at_path_mut(root, &group_path) else {
        return;
    };
    group.remove_class(HAS_ERROR_CLASS);
    if let Some(slot_id) = error_slot(group) {
        if let Some(slot) = find_element_mut(group, &slot_id) {
            slot.set_text("");
        }
    }
}

/// Path of the field's annotation scope: the nearest ancestor-or-self with a
/// form-group class, else the field's direct parent.
fn error_scope(root: &Element, field_id: &str) -> Option<Vec<usize>> {
    let path = find_path(root, field_id)?;
    for cut in (0..=path.len()).rev() {
        let candidate = element_at_path(root, &path[..cut])?;
        if GROUP_CLASSES.iter().any(|class| candidate.has_class(class)) {
            return Some(path[..cut].to_vec());
        }
    }
    if path.is_empty() {
        None
    } else {
        Some(path[..path.len() - 1].to_vec())
    }
}

/// The group's alert slot: first descendant with the error class or an
/// `alert` role.
fn error_slot(group: &Element) -> Option<String> {
    collect_matching(group, |el| {
        el.has_class(ERROR_SLOT_CLASS) || el.get_attr("role") == Some("alert")
    })
    .into_iter()
    .find(|id| id != &group.id)
}
