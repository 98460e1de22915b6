use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pagedom::{Element, Event, InputKind, Page};
use vitrine::config::EngineConfig;
use vitrine::forms::{FormPhase, SubmitOutcome, FORM_INVALID_NOTICE, SENDING_LABEL};
use vitrine::notify::Level;
use vitrine::{Engine, Navigator};

#[derive(Clone, Default)]
struct Recorder {
    visits: Rc<RefCell<Vec<String>>>,
}

impl Navigator for Recorder {
    fn navigate(&mut self, _page: &mut Page, url: &str) {
        self.visits.borrow_mut().push(url.to_string());
    }
}

fn group(id: &str, field: Element) -> Element {
    let error_id = format!("{id}-error");
    Element::box_()
        .id(id)
        .class("c-form__group")
        .child(field)
        .child(Element::box_().id(error_id).class("c-form__error"))
}

fn page_with_form() -> Page {
    Page::new(
        Element::box_().id("root").child(
            Element::box_()
                .id("contact")
                .class("c-form")
                .child(group(
                    "group-email",
                    Element::input(InputKind::Email).id("contact-email").required(true),
                ))
                .child(group(
                    "group-agree",
                    Element::checkbox().id("contact-agree").required(true),
                ))
                .child(Element::button("Sūtīt").id("send").attr("type", "submit")),
        ),
    )
}

fn engine_with_recorder() -> (Engine, Recorder) {
    let recorder = Recorder::default();
    let engine = Engine::new(page_with_form(), EngineConfig::default())
        .with_navigator(Box::new(recorder.clone()));
    (engine, recorder)
}

fn fill_valid(engine: &mut Engine) {
    engine
        .page_mut()
        .find_mut("contact-email")
        .unwrap()
        .set_value("a@b.co");
    engine
        .page_mut()
        .find_mut("contact-agree")
        .unwrap()
        .set_checked(true);
}

fn send_label(engine: &Engine) -> &str {
    engine.page().find("send").unwrap().text_content().unwrap_or_default()
}

#[test]
fn test_invalid_submit_is_rejected_with_notice() {
    let (mut engine, recorder) = engine_with_recorder();

    assert_eq!(engine.submit("contact"), SubmitOutcome::Rejected);
    assert_eq!(engine.forms().phase("contact"), FormPhase::Idle);

    // One aggregate error toast, all field annotations in place.
    let toasts: Vec<_> = engine.notifications().active().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, FORM_INVALID_NOTICE);
    assert_eq!(toasts[0].level, Level::Error);
    assert!(
        engine
            .page()
            .find("group-email")
            .unwrap()
            .has_class("has-error")
    );
    assert!(recorder.visits.borrow().is_empty());
}

#[test]
fn test_valid_submit_runs_busy_lifecycle_once() {
    let (mut engine, recorder) = engine_with_recorder();
    fill_valid(&mut engine);

    assert_eq!(engine.submit("contact"), SubmitOutcome::Started);
    assert_eq!(engine.forms().phase("contact"), FormPhase::Submitting);
    assert_eq!(send_label(&engine), SENDING_LABEL);
    assert!(engine.page().find("send").unwrap().disabled);

    // Re-entrant submits are swallowed; no second completion timer exists.
    assert_eq!(engine.submit("contact"), SubmitOutcome::Ignored);
    assert_eq!(engine.submit("contact"), SubmitOutcome::Ignored);
    assert_eq!(engine.timers().pending(), 1);

    engine.tick(Instant::now() + Duration::from_millis(900));

    assert_eq!(engine.forms().phase("contact"), FormPhase::Idle);
    assert_eq!(send_label(&engine), "Sūtīt");
    assert!(!engine.page().find("send").unwrap().disabled);
    assert_eq!(*recorder.visits.borrow(), vec!["/thank_you.html".to_string()]);
}

#[test]
fn test_completed_form_can_submit_again() {
    let (mut engine, recorder) = engine_with_recorder();
    fill_valid(&mut engine);

    assert_eq!(engine.submit("contact"), SubmitOutcome::Started);
    engine.tick(Instant::now() + Duration::from_millis(900));
    assert_eq!(engine.submit("contact"), SubmitOutcome::Started);
    engine.tick(Instant::now() + Duration::from_millis(1800));

    assert_eq!(recorder.visits.borrow().len(), 2);
    assert_eq!(engine.forms().phase("contact"), FormPhase::Idle);
}

#[test]
fn test_default_navigator_rewrites_location() {
    let mut engine = Engine::new(page_with_form(), EngineConfig::default());
    fill_valid(&mut engine);

    engine.submit("contact");
    engine.tick(Instant::now() + Duration::from_millis(900));

    assert_eq!(engine.page().location.path, "/thank_you.html");
}

#[test]
fn test_input_event_clears_error_without_revalidating() {
    let (mut engine, _recorder) = engine_with_recorder();

    engine.submit("contact");
    assert!(
        engine
            .page()
            .find("group-email")
            .unwrap()
            .has_class("has-error")
    );

    // The value is still invalid; the input event clears optimistically.
    engine.dispatch(Event::Input {
        target: Some("contact-email".to_string()),
    });
    assert!(
        !engine
            .page()
            .find("group-email")
            .unwrap()
            .has_class("has-error")
    );
}

#[test]
fn test_blur_event_revalidates_field() {
    let (mut engine, _recorder) = engine_with_recorder();

    engine.page_mut().find_mut("contact-email").unwrap().set_value("foo");
    engine.dispatch(Event::Blur {
        target: Some("contact-email".to_string()),
    });
    assert!(
        engine
            .page()
            .find("group-email")
            .unwrap()
            .has_class("has-error")
    );

    engine.page_mut().find_mut("contact-email").unwrap().set_value("a@b.co");
    engine.dispatch(Event::Blur {
        target: Some("contact-email".to_string()),
    });
    assert!(
        !engine
            .page()
            .find("group-email")
            .unwrap()
            .has_class("has-error")
    );
}

#[test]
fn test_submit_event_dispatch_route() {
    let (mut engine, recorder) = engine_with_recorder();
    fill_valid(&mut engine);

    engine.dispatch(Event::Submit {
        target: Some("contact".to_string()),
    });
    assert_eq!(engine.forms().phase("contact"), FormPhase::Submitting);

    engine.tick(Instant::now() + Duration::from_millis(900));
    assert_eq!(recorder.visits.borrow().len(), 1);
}

#[test]
fn test_unknown_form_submit_is_absorbed() {
    let (mut engine, recorder) = engine_with_recorder();

    assert_eq!(engine.submit("no-such-form"), SubmitOutcome::Ignored);
    assert_eq!(engine.notifications().active_count(), 0);
    assert!(recorder.visits.borrow().is_empty());
}
