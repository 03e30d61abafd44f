//! Map browser paths to application views.
//!
//! A [`Router`] looks the current location path up in a fixed [`RouteTable`] and publishes the
//! matching [`View`] through a [`CurrentRoute`] that UI code subscribes to. Paths that aren't in
//! the table fall back to [`View::Home`].
//!
//! ```no_run
//! use viewroute::{Router, View};
//!
//! # fn main() -> Result<(), wasm_bindgen::JsValue> {
//! let router = Router::browser()?;
//!
//! // resolve the current path and follow back/forward navigation
//! let teardown = router.init()?;
//!
//! let _sub = router.current().subscribe(|view| {
//!     log::info!("showing {:?}", view);
//! });
//!
//! router.navigate(View::Logger)?;
//!
//! // stop following the history
//! teardown.teardown()?;
//! # Ok(())
//! # }
//! ```
//!
//! JavaScript apps can use the `initRouter`, `navigateTo`, `currentRoute` and `subscribeRoute`
//! exports from [`bindings`] instead.
//!
//! [`Router`]: router/struct.Router.html
//! [`RouteTable`]: route/struct.RouteTable.html
//! [`View`]: view/enum.View.html
//! [`View::Home`]: view/enum.View.html#variant.Home
//! [`CurrentRoute`]: store/struct.CurrentRoute.html
//! [`bindings`]: bindings/index.html

#![deny(missing_docs)]

pub mod view;
pub mod route;
pub mod store;
pub mod history;
pub mod router;
pub mod bindings;

pub use crate::view::View;
pub use crate::route::{Route, RouteTable};
pub use crate::store::{CurrentRoute, Subscription};
pub use crate::history::{History, BrowserHistory};
pub use crate::router::{Router, RouterBuilder, Teardown};
