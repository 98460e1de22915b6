//! Contact Page Example
//!
//! A demo walking the engine through a typical visit:
//! - an invalid submit surfaces field annotations and an error toast
//! - fixing the fields and resubmitting runs the busy lifecycle
//! - the completion timer fires and navigates to the confirmation page
//!
//! Logs go to `site.log` so they don't interleave with the output below.

use std::fs::File;
use std::time::{Duration, Instant};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use vitrine::prelude::*;

fn field_group(id: &str, field: Element, label: &str) -> Element {
    let error_id = format!("{id}-error");
    Element::box_()
        .id(id)
        .class("c-form__group")
        .child(Element::text(label))
        .child(field)
        .child(Element::box_().id(error_id).class("c-form__error"))
}

fn contact_page() -> Page {
    let form = Element::box_()
        .id("contact-form")
        .class("c-form")
        .child(field_group(
            "group-name",
            Element::input(InputKind::Text).id("contact-name").required(true),
            "Vārds",
        ))
        .child(field_group(
            "group-email",
            Element::input(InputKind::Email).id("contact-email").required(true),
            "E-pasts",
        ))
        .child(field_group(
            "group-message",
            Element::text_area().id("contact-message").required(true),
            "Ziņojums",
        ))
        .child(field_group(
            "group-agree",
            Element::checkbox().id("contact-agree").required(true),
            "Piekrītu noteikumiem",
        ))
        .child(Element::button("Sūtīt").id("contact-send").attr("type", "submit"));

    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("header").class("l-header"))
        .child(form);

    Page::new(root).with_location(Location::at("/contacts.html"))
}

fn show_state(engine: &Engine, moment: &str) {
    let annotated =
        pagedom::collect_matching(&engine.page().root, |el| el.has_class("has-error"));
    let toasts: Vec<&str> = engine
        .notifications()
        .active()
        .map(|n| n.message.as_str())
        .collect();
    println!("--- {moment}");
    println!("    phase: {:?}", engine.forms().phase("contact-form"));
    println!("    annotated groups: {annotated:?}");
    println!("    toasts: {toasts:?}");
    println!("    location: {}", engine.page().location.path);
}

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("site.log").expect("create log file"),
    );

    let mut engine = Engine::new(contact_page(), EngineConfig::default());
    engine.init();

    // First attempt: everything is empty.
    engine.dispatch(Event::Submit {
        target: Some("contact-form".to_string()),
    });
    show_state(&engine, "after empty submit");

    // The visitor starts typing; their field's error clears immediately.
    engine.dispatch(Event::Input {
        target: Some("contact-name".to_string()),
    });
    show_state(&engine, "after typing begins");

    // Fill everything in properly.
    for (id, value) in [
        ("contact-name", "Anna Bērziņa"),
        ("contact-email", "anna@example.lv"),
        ("contact-message", "Labdien! Vēlos uzzināt vairāk par jūsu pakalpojumiem."),
    ] {
        engine.page_mut().find_mut(id).expect("field").set_value(value);
    }
    engine
        .page_mut()
        .find_mut("contact-agree")
        .expect("checkbox")
        .set_checked(true);

    engine.dispatch(Event::Submit {
        target: Some("contact-form".to_string()),
    });
    show_state(&engine, "after valid submit");

    // A duplicate submit while in flight is swallowed.
    engine.dispatch(Event::Submit {
        target: Some("contact-form".to_string()),
    });

    engine.tick(Instant::now() + Duration::from_millis(900));
    show_state(&engine, "after completion");
}
