#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use viewroute::{BrowserHistory, History, Router, View};
use viewroute::bindings;

use wasm_bindgen_test::*;
use wasm_bindgen_test::wasm_bindgen_test_configure;
wasm_bindgen_test_configure!(run_in_browser);

fn init_log() {
    // other tests may have installed the logger already
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn window() -> web_sys::Window {
    web_sys::window().expect("expected window")
}

fn pathname() -> String {
    window().location().pathname().expect("expected pathname")
}

fn go_to(path: &str) {
    window()
        .history().expect("expected history")
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .expect("error replacing history state");
}

/// Fire the event the browser sends on back/forward navigation.
fn pop_state() {
    let event = web_sys::PopStateEvent::new("popstate").expect("expected event");
    window().dispatch_event(&event).expect("error dispatching popstate");
}

#[wasm_bindgen_test]
fn browser_pathname() {
    init_log();
    go_to("/workers");

    let history = BrowserHistory::new().expect("expected history");
    assert_eq!(history.pathname(), Ok("/workers".to_owned()));
}

#[wasm_bindgen_test]
fn resolve_current_path() {
    init_log();
    go_to("/exchange-types");

    let router = Router::browser().expect("expected router");
    assert_eq!(router.resolve(), Ok(View::ExchangeTypes));
}

#[wasm_bindgen_test]
fn resolve_unknown_path() {
    init_log();
    go_to("/not/a/route");

    let router = Router::browser().expect("expected router");
    assert_eq!(router.resolve(), Ok(View::Home));
}

#[wasm_bindgen_test]
fn navigate_pushes_history() {
    init_log();
    go_to("/");

    let router = Router::browser().expect("expected router");
    let teardown = router.init().expect("error initializing router");

    router.navigate(View::Logger).expect("error navigating");
    assert_eq!(pathname(), "/logger");
    assert_eq!(router.current().get(), Some(View::Logger));

    router.navigate(View::Home).expect("error navigating");
    assert_eq!(pathname(), "/");
    assert_eq!(router.current().get(), Some(View::Home));

    teardown.teardown().expect("error tearing down");
}

#[wasm_bindgen_test]
fn popstate_resolves() {
    init_log();
    go_to("/");

    let router = Router::browser().expect("expected router");
    let teardown = router.init().expect("error initializing router");
    assert_eq!(router.current().get(), Some(View::Home));

    go_to("/game");
    pop_state();
    assert_eq!(router.current().get(), Some(View::Game));

    teardown.teardown().expect("error tearing down");

    go_to("/rpc");
    pop_state();
    assert_eq!(router.current().get(), Some(View::Game));
}

#[wasm_bindgen_test]
fn dropped_teardown_stops_listening() {
    init_log();
    go_to("/drawing");

    let router = Router::browser().expect("expected router");
    drop(router.init().expect("error initializing router"));
    assert_eq!(router.current().get(), Some(View::Drawing));

    go_to("/simulator");
    pop_state();
    assert_eq!(router.current().get(), Some(View::Drawing));
}

#[wasm_bindgen_test]
fn js_exports() {
    init_log();
    go_to("/newsimulations");

    // nothing resolved yet
    assert_eq!(bindings::current_route(), Ok("".to_owned()));

    let teardown = bindings::init_router().expect("error initializing router");
    let teardown: js_sys::Function = teardown.dyn_into().expect("expected a function");
    assert_eq!(bindings::current_route(), Ok("newsimulations".to_owned()));

    let seen = Rc::new(RefCell::new(vec![]));
    let s = Rc::clone(&seen);
    let callback = Closure::wrap(Box::new(move |name: String| {
        s.borrow_mut().push(name);
    }) as Box<dyn FnMut(String)>);

    let unsubscribe = bindings::subscribe_route(callback.as_ref().unchecked_ref::<js_sys::Function>().clone())
        .expect("error subscribing");
    let unsubscribe: js_sys::Function = unsubscribe.dyn_into().expect("expected a function");

    bindings::navigate_to("workers").expect("error navigating");
    assert_eq!(pathname(), "/workers");
    assert_eq!(bindings::current_route(), Ok("workers".to_owned()));

    // unknown names keep their path but resolve to home
    bindings::navigate_to("nonexistent").expect("error navigating");
    assert_eq!(pathname(), "/nonexistent");
    assert_eq!(bindings::current_route(), Ok("home".to_owned()));

    bindings::navigate_to("home").expect("error navigating");
    assert_eq!(pathname(), "/");

    unsubscribe.call0(&JsValue::NULL).expect("error unsubscribing");
    unsubscribe.call0(&JsValue::NULL).expect("error unsubscribing twice");
    bindings::navigate_to("game").expect("error navigating");

    assert_eq!(*seen.borrow(), vec!["newsimulations", "workers", "home"]);

    teardown.call0(&JsValue::NULL).expect("error tearing down");
    teardown.call0(&JsValue::NULL).expect("error tearing down twice");
    go_to("/rpc");
    pop_state();
    assert_eq!(bindings::current_route(), Ok("game".to_owned()));
}
