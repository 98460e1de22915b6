//! Per-field and per-form validation drivers.

use pagedom::{collect_matching, find_element, Element};

use super::{classify, clear_error, rules, show_error, FieldRole, Verdict};

/// Validate one field, refreshing its error annotation.
///
/// Any existing annotation is cleared first; an invalid verdict re-creates
/// it with the rule's message. Returns whether the field passed. A missing
/// field id is absorbed as valid.
pub fn validate_field(root: &mut Element, field_id: &str) -> bool {
    clear_error(root, field_id);

    let Some(field) = find_element(root, field_id) else {
        log::debug!("validate_field: no element #{field_id}");
        return true;
    };

    match verdict_for(field) {
        Verdict::Valid => true,
        Verdict::Invalid(message) => {
            show_error(root, field_id, &message);
            false
        }
    }
}

/// Validate every required field of a form.
///
/// Deliberately does not short-circuit: each failing field gets its own
/// annotation so the user sees every error at once. Returns true only when
/// all pass.
pub fn validate_form(root: &mut Element, form_id: &str) -> bool {
    let required = match find_element(root, form_id) {
        Some(form) => collect_matching(form, |el| el.required && el.is_control()),
        None => {
            log::debug!("validate_form: no element #{form_id}");
            return false;
        }
    };

    let mut all_valid = true;
    for field_id in required {
        if !validate_field(root, &field_id) {
            all_valid = false;
        }
    }
    all_valid
}

fn verdict_for(field: &Element) -> Verdict {
    let value = field.control_value().unwrap_or_default();
    match classify(field) {
        Some(FieldRole::Checkbox) => rules::checkbox(field.is_checked()),
        Some(FieldRole::Name) => rules::name(value),
        Some(FieldRole::Email) => rules::email(value),
        Some(FieldRole::Phone) => rules::phone(value),
        Some(FieldRole::Message) => rules::message(value),
        Some(FieldRole::Select) => rules::select(value),
        None if field.required => rules::required(value),
        None => Verdict::Valid,
    }
}
