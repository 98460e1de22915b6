//! Field role classification.
//!
//! A field's role selects its validator. The declared `data-role` attribute
//! wins; without one, the role is inferred from the control kind and then
//! from id/name substring hints, matching how the site's markup is written.

use std::str::FromStr;

use pagedom::{Content, Element, InputKind};
use thiserror::Error;

/// Semantic category used to select a field's validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Message,
    Select,
    Checkbox,
}

/// A declared `data-role` attribute value that names no known role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown field role: {0}")]
pub struct RoleError(pub String);

impl FromStr for FieldRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "message" => Ok(Self::Message),
            "select" => Ok(Self::Select),
            "checkbox" => Ok(Self::Checkbox),
            other => Err(RoleError(other.to_string())),
        }
    }
}

/// Classify a field.
///
/// Checkbox controls always validate as checkboxes. After that the declared
/// `data-role` attribute is consulted (unknown values are logged and
/// skipped), then the control kind, then id/name substring hints. `None`
/// means only the generic required rule applies.
pub fn classify(field: &Element) -> Option<FieldRole> {
    if field.input_kind() == Some(InputKind::Checkbox) {
        return Some(FieldRole::Checkbox);
    }

    if let Some(declared) = field.get_attr("data-role") {
        match declared.parse() {
            Ok(role) => return Some(role),
            Err(RoleError(value)) => {
                log::warn!("ignoring unknown data-role {value:?} on #{}", field.id);
            }
        }
    }

    match &field.content {
        Content::Input {
            kind: InputKind::Email,
            ..
        } => return Some(FieldRole::Email),
        Content::Input {
            kind: InputKind::Tel,
            ..
        } => return Some(FieldRole::Phone),
        Content::TextArea { .. } => return Some(FieldRole::Message),
        Content::Select { .. } => return Some(FieldRole::Select),
        _ => {}
    }

    let hinted = |needle: &str| {
        field.id.contains(needle)
            || field.get_attr("name").is_some_and(|name| name.contains(needle))
    };

    if hinted("email") {
        Some(FieldRole::Email)
    } else if hinted("phone") {
        Some(FieldRole::Phone)
    } else if hinted("message") {
        Some(FieldRole::Message)
    } else if hinted("name") {
        Some(FieldRole::Name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_role_beats_inference() {
        let field = Element::input(InputKind::Text)
            .id("contact-email")
            .attr("data-role", "phone");
        assert_eq!(classify(&field), Some(FieldRole::Phone));
    }

    #[test]
    fn test_unknown_declared_role_falls_back() {
        let field = Element::input(InputKind::Text)
            .id("contact-email")
            .attr("data-role", "zipcode");
        assert_eq!(classify(&field), Some(FieldRole::Email));
    }

    #[test]
    fn test_kind_beats_substrings() {
        let field = Element::input(InputKind::Tel).id("email-backup");
        assert_eq!(classify(&field), Some(FieldRole::Phone));
    }

    #[test]
    fn test_substring_hints_in_priority_order() {
        let by_id = Element::input(InputKind::Text).id("user-name");
        assert_eq!(classify(&by_id), Some(FieldRole::Name));

        let by_name = Element::input(InputKind::Text)
            .id("f1")
            .attr("name", "message-body");
        assert_eq!(classify(&by_name), Some(FieldRole::Message));

        let plain = Element::input(InputKind::Text).id("f2");
        assert_eq!(classify(&plain), None);
    }
}
