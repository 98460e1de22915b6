//! Built-in per-role validators.
//!
//! Each rule maps a control's current value to a [`Verdict`]. Messages are
//! the site's literal user-facing strings; callers treat them as opaque
//! constants.

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

use super::Verdict;

pub const MSG_NAME_REQUIRED: &str = "Vārds ir obligāts (vismaz 2 simboli)";
pub const MSG_NAME_INVALID: &str = "Vārds satur nederīgas rakstzīmes";
pub const MSG_EMAIL_REQUIRED: &str = "E-pasts ir obligāts";
pub const MSG_EMAIL_INVALID: &str = "E-pasta formāts nav derīgs";
pub const MSG_PHONE_REQUIRED: &str = "Tālrunis ir obligāts";
pub const MSG_PHONE_INVALID: &str = "Tālruņa numurs nav derīgs";
pub const MSG_MESSAGE_REQUIRED: &str = "Ziņojums ir obligāts (vismaz 10 simboli)";
pub const MSG_CHECKBOX_REQUIRED: &str = "Jums ir jāpiekrīt";
pub const MSG_SELECT_REQUIRED: &str = "Lūdzu, izvēlieties opciju";
pub const MSG_FIELD_REQUIRED: &str = "Šis lauks ir obligāts";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s'-]{2,50}$").expect("valid name pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+\-()]{7,20}$").expect("valid phone pattern"));

/// Personal name: at least 2 trimmed characters, letters/spaces/hyphens/
/// apostrophes only, at most 50.
pub fn name(value: &str) -> Verdict {
    if value.trim().chars().count() < 2 {
        return Verdict::invalid(MSG_NAME_REQUIRED);
    }
    if !NAME_PATTERN.is_match(value) {
        return Verdict::invalid(MSG_NAME_INVALID);
    }
    Verdict::Valid
}

/// Email address: non-empty and `local@domain.tld` shaped. The domain must
/// contain a dot; embedded whitespace or extra `@` fail the parse.
pub fn email(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::invalid(MSG_EMAIL_REQUIRED);
    }
    let dotted_domain = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if !EmailAddress::is_valid(value) || !dotted_domain {
        return Verdict::invalid(MSG_EMAIL_INVALID);
    }
    Verdict::Valid
}

/// Phone number: digits, spaces, `+`, `-` and parentheses, 7 to 20 chars.
pub fn phone(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::invalid(MSG_PHONE_REQUIRED);
    }
    if !PHONE_PATTERN.is_match(value) {
        return Verdict::invalid(MSG_PHONE_INVALID);
    }
    Verdict::Valid
}

/// Free-form message: at least 10 trimmed characters.
pub fn message(value: &str) -> Verdict {
    if value.trim().chars().count() < 10 {
        return Verdict::invalid(MSG_MESSAGE_REQUIRED);
    }
    Verdict::Valid
}

/// Agreement checkbox: must be checked.
pub fn checkbox(checked: bool) -> Verdict {
    if !checked {
        return Verdict::invalid(MSG_CHECKBOX_REQUIRED);
    }
    Verdict::Valid
}

/// Choice control: something must be chosen.
pub fn select(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::invalid(MSG_SELECT_REQUIRED);
    }
    Verdict::Valid
}

/// Fallback for required fields with no specific role.
pub fn required(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::invalid(MSG_FIELD_REQUIRED);
    }
    Verdict::Valid
}
