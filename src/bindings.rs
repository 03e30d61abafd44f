//! JavaScript exports for apps that render their views outside of Rust.
//!
//! All exports share one router over the browser window, created on first use.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use log::error;
use crate::history::BrowserHistory;
use crate::router::Router;
use crate::view::{self, View};

thread_local! {
    static ROUTER: RefCell<Option<Router<BrowserHistory>>> = RefCell::new(None);
}

fn router() -> Result<Router<BrowserHistory>, JsValue> {
    ROUTER.with(|cell| {
        let mut cell = cell.borrow_mut();
        match *cell {
            Some(ref router) => Ok(router.clone()),
            None => {
                let router = Router::browser()?;
                *cell = Some(router.clone());
                Ok(router)
            }
        }
    })
}

/// Resolve the current path and follow back/forward navigation.
///
/// Returns a function that stops listening. Calling it again does nothing.
#[wasm_bindgen(js_name = initRouter)]
pub fn init_router() -> Result<JsValue, JsValue> {
    let mut teardown = Some(router()?.init()?);

    let closure = Closure::wrap(
        Box::new(move || {
            if let Some(teardown) = teardown.take() {
                if let Err(e) = teardown.teardown() {
                    error!("error removing history listener: {:?}", e);
                }
            }
        }) as Box<dyn FnMut()>
    );

    Ok(closure.into_js_value())
}

/// Navigate to the view with the given name.
///
/// Any name is accepted. `home` goes to `/`, other names go to `/name`, and names that aren't in
/// the route table resolve to `home`.
#[wasm_bindgen(js_name = navigateTo)]
pub fn navigate_to(name: &str) -> Result<(), JsValue> {
    router()?.push(&view::path_for(name))?;
    Ok(())
}

/// The name of the current view, empty before the first resolution.
#[wasm_bindgen(js_name = currentRoute)]
pub fn current_route() -> Result<String, JsValue> {
    let current = router()?.current().get();
    Ok(current.map(View::name).unwrap_or("").to_owned())
}

/// Call `callback` with the current view name now and after every change.
///
/// Returns a function that unsubscribes. Calling it again does nothing.
#[wasm_bindgen(js_name = subscribeRoute)]
pub fn subscribe_route(callback: js_sys::Function) -> Result<JsValue, JsValue> {
    let subscription = router()?.current().subscribe(move |current| {
        let name = JsValue::from_str(current.map(View::name).unwrap_or(""));
        if let Err(e) = callback.call1(&JsValue::NULL, &name) {
            error!("route subscriber threw: {:?}", e);
        }
    });

    let mut subscription = Some(subscription);
    let closure = Closure::wrap(
        Box::new(move || drop(subscription.take())) as Box<dyn FnMut()>
    );

    Ok(closure.into_js_value())
}
