//! Access to the browser's location and history.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The parts of the host environment a router needs.
///
/// The browser implementation is [`BrowserHistory`]. Tests can use
/// [`MemoryHistory`](../test/struct.MemoryHistory.html) instead.
///
/// [`BrowserHistory`]: struct.BrowserHistory.html
pub trait History {
    /// A registered back/forward listener.
    type Listener;

    /// The path of the current location.
    fn pathname(&self) -> Result<String, JsValue>;

    /// Push a new entry onto the history without reloading the page.
    fn push(&self, path: &str) -> Result<(), JsValue>;

    /// Call `callback` whenever the user moves back or forward through the history.
    fn listen(&self, callback: Box<dyn FnMut()>) -> Result<Self::Listener, JsValue>;

    /// Remove a listener registered with `listen`.
    fn unlisten(&self, listener: Self::Listener) -> Result<(), JsValue>;
}

/// The history of the browser window.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    /// Get a handle to the current window's history.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("couldn't get window handle"))?;

        Ok(BrowserHistory { window: window })
    }
}

impl History for BrowserHistory {
    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    fn pathname(&self) -> Result<String, JsValue> {
        self.window.location().pathname()
    }

    fn push(&self, path: &str) -> Result<(), JsValue> {
        self.window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))
    }

    fn listen(&self, mut callback: Box<dyn FnMut()>) -> Result<Self::Listener, JsValue> {
        let closure = Closure::wrap(
            Box::new(move |_event| callback()) as Box<dyn FnMut(web_sys::Event)>
        );

        self.window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;

        Ok(closure)
    }

    fn unlisten(&self, listener: Self::Listener) -> Result<(), JsValue> {
        self.window
            .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
    }
}
