//! `on_dom_ready` driven by the in-memory document lifecycle.

use core::cell::RefCell;
use dom_ready::{
    DOM_CONTENT_LOADED, Document, DocumentHost as _, DocumentReadyState, LOAD,
    READY_STATE_CHANGE, on_dom_ready,
};
use std::rc::Rc;

fn init_logging() {
    let _unused = env_logger::builder().is_test(true).try_init();
}

fn push_on(document: &Document, log: &Rc<RefCell<Vec<String>>>, event: &'static str) {
    let sink = Rc::clone(log);
    let observed = document.clone();
    document.add_event_listener(
        event,
        Box::new(move || {
            sink.borrow_mut()
                .push(format!("{event}:{}", observed.ready_state()));
        }),
    );
}

#[test]
fn callback_runs_between_readystatechange_and_load() {
    init_logging();
    let document = Document::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    push_on(&document, &log, READY_STATE_CHANGE);

    let sink = Rc::clone(&log);
    let observed = document.clone();
    on_dom_ready(&document, move || {
        sink.borrow_mut()
            .push(format!("ready:{}", observed.ready_state()));
    });
    push_on(&document, &log, LOAD);

    assert!(document.finish_loading());
    assert_eq!(
        *log.borrow(),
        vec![
            "readystatechange:interactive".to_owned(),
            "ready:interactive".to_owned(),
            "load:complete".to_owned(),
        ]
    );
}

#[test]
fn preloaded_document_never_refires() {
    init_logging();
    let document = Document::with_state(DocumentReadyState::Complete);
    let log = Rc::new(RefCell::new(Vec::new()));
    push_on(&document, &log, READY_STATE_CHANGE);
    push_on(&document, &log, DOM_CONTENT_LOADED);
    push_on(&document, &log, LOAD);

    assert!(!document.finish_parsing());
    assert!(!document.finish_loading());
    assert_eq!(document.ready_state(), DocumentReadyState::Complete);
    assert!(log.borrow().is_empty());

    let sink = Rc::clone(&log);
    on_dom_ready(&document, move || sink.borrow_mut().push("ready".to_owned()));
    assert_eq!(*log.borrow(), vec!["ready".to_owned()]);
}

#[test]
fn interactive_document_still_reaches_complete() {
    init_logging();
    let document = Document::with_state(DocumentReadyState::Interactive);
    let log = Rc::new(RefCell::new(Vec::new()));
    push_on(&document, &log, DOM_CONTENT_LOADED);
    push_on(&document, &log, LOAD);

    assert!(document.finish_loading());
    assert_eq!(*log.borrow(), vec!["load:complete".to_owned()]);
    assert_eq!(document.listener_count(DOM_CONTENT_LOADED), 1);
}
