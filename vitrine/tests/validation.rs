use pagedom::{find_element, Element, InputKind};
use vitrine::validation::{rules, validate_field, validate_form, Verdict};

fn group(id: &str, field: Element) -> Element {
    let error_id = format!("{id}-error");
    Element::box_()
        .id(id)
        .class("c-form__group")
        .child(field)
        .child(Element::box_().id(error_id).class("c-form__error"))
}

fn contact_page() -> Element {
    Element::box_().id("root").child(
        Element::box_()
            .id("contact")
            .class("c-form")
            .child(group(
                "group-name",
                Element::input(InputKind::Text).id("contact-name").required(true),
            ))
            .child(group(
                "group-email",
                Element::input(InputKind::Email).id("contact-email").required(true),
            ))
            .child(group(
                "group-message",
                Element::text_area().id("contact-message").required(true),
            ))
            .child(group(
                "group-agree",
                Element::checkbox().id("contact-agree").required(true),
            ))
            .child(Element::button("Sūtīt").id("contact-send").attr("type", "submit")),
    )
}

fn error_text(root: &Element, group_id: &str) -> String {
    find_element(root, &format!("{group_id}-error"))
        .and_then(Element::text_content)
        .unwrap_or_default()
        .to_string()
}

fn flagged_groups(root: &Element) -> usize {
    pagedom::collect_matching(root, |el| el.has_class("has-error")).len()
}

// ============================================================================
// Single fields
// ============================================================================

#[test]
fn test_email_field_verdicts() {
    let mut root = contact_page();

    for (value, valid) in [("", false), ("foo", false), ("a@b.co", true)] {
        root.find_mut_value("contact-email", value);
        assert_eq!(validate_field(&mut root, "contact-email"), valid, "value {value:?}");
    }
}

#[test]
fn test_name_field_messages() {
    let mut root = contact_page();

    root.find_mut_value("contact-name", "A");
    assert!(!validate_field(&mut root, "contact-name"));
    assert!(find_element(&root, "group-name").unwrap().has_class("has-error"));
    assert_eq!(error_text(&root, "group-name"), rules::MSG_NAME_REQUIRED);

    root.find_mut_value("contact-name", "Anna");
    assert!(validate_field(&mut root, "contact-name"));
    assert!(!find_element(&root, "group-name").unwrap().has_class("has-error"));
    assert_eq!(error_text(&root, "group-name"), "");
}

#[test]
fn test_checkbox_field_messages() {
    let mut root = contact_page();

    assert!(!validate_field(&mut root, "contact-agree"));
    assert_eq!(error_text(&root, "group-agree"), rules::MSG_CHECKBOX_REQUIRED);

    pagedom::find_element_mut(&mut root, "contact-agree")
        .unwrap()
        .set_checked(true);
    assert!(validate_field(&mut root, "contact-agree"));
    assert_eq!(error_text(&root, "group-agree"), "");
}

#[test]
fn test_validation_is_repeatable() {
    let mut root = contact_page();

    root.find_mut_value("contact-email", "foo");
    assert!(!validate_field(&mut root, "contact-email"));
    assert!(!validate_field(&mut root, "contact-email"));
    // Only one annotation survives repeated validation.
    assert_eq!(error_text(&root, "group-email"), rules::MSG_EMAIL_INVALID);
    assert_eq!(flagged_groups(&root), 1);
}

#[test]
fn test_missing_field_is_absorbed() {
    let mut root = contact_page();

    assert!(validate_field(&mut root, "no-such-field"));
    assert_eq!(flagged_groups(&root), 0);
}

#[test]
fn test_field_without_group_fails_silently() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::input(InputKind::Email).id("lone-email").required(true));

    // Invalid, but with nowhere to annotate; parent fallback is the root.
    assert!(!validate_field(&mut root, "lone-email"));
}

// ============================================================================
// Whole forms
// ============================================================================

#[test]
fn test_validate_form_surfaces_every_error() {
    let mut root = contact_page();

    // Two of four required fields are valid.
    root.find_mut_value("contact-name", "Anna");
    root.find_mut_value("contact-email", "a@b.co");

    assert!(!validate_form(&mut root, "contact"));
    assert_eq!(flagged_groups(&root), 2);
    assert_eq!(error_text(&root, "group-message"), rules::MSG_MESSAGE_REQUIRED);
    assert_eq!(error_text(&root, "group-agree"), rules::MSG_CHECKBOX_REQUIRED);
}

#[test]
fn test_validate_form_passes_when_all_valid() {
    let mut root = contact_page();

    root.find_mut_value("contact-name", "Anna");
    root.find_mut_value("contact-email", "a@b.co");
    root.find_mut_value("contact-message", "Labdien, šis ir jautājums.");
    pagedom::find_element_mut(&mut root, "contact-agree")
        .unwrap()
        .set_checked(true);

    assert!(validate_form(&mut root, "contact"));
    assert_eq!(flagged_groups(&root), 0);
}

#[test]
fn test_generic_required_fallback() {
    let mut root = Element::box_().id("root").child(
        Element::box_().id("f").class("c-form").child(group(
            "group-subject",
            Element::input(InputKind::Text).id("subject-field").required(true),
        )),
    );

    assert!(!validate_form(&mut root, "f"));
    assert_eq!(error_text(&root, "group-subject"), rules::MSG_FIELD_REQUIRED);

    root.find_mut_value("subject-field", "sveiki");
    assert!(validate_form(&mut root, "f"));
}

#[test]
fn test_verdict_accessors() {
    assert!(Verdict::Valid.is_valid());
    assert_eq!(Verdict::Valid.message(), None);
    let invalid = Verdict::invalid("nope");
    assert!(!invalid.is_valid());
    assert_eq!(invalid.message(), Some("nope"));
}

// Small helper so tests read as scenario steps.
trait SetValue {
    fn find_mut_value(&mut self, id: &str, value: &str);
}

impl SetValue for Element {
    fn find_mut_value(&mut self, id: &str, value: &str) {
        pagedom::find_element_mut(self, id)
            .expect("field exists")
            .set_value(value);
    }
}
