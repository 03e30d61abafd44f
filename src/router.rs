//! Resolve the page path to a view and keep it in sync with the browser history.
//!
//! A [`Router`] reads the current path from a [`History`], looks it up in a [`Route`] table and
//! stores the result in a [`CurrentRoute`]. Paths missing from the table resolve to the home view.
//!
//! [`Router`]: struct.Router.html
//! [`History`]: ../history/trait.History.html
//! [`Route`]: ../route/trait.Route.html
//! [`CurrentRoute`]: ../store/struct.CurrentRoute.html

use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use log::{debug, error, info, warn};
use crate::history::{History, BrowserHistory};
use crate::route::{Route, RouteTable};
use crate::store::CurrentRoute;
use crate::view::View;

/// Struct used to configure a [`Router`].
///
/// [`Router`]: struct.Router.html
pub struct RouterBuilder<R = RouteTable> {
    routes: R,
    current: Option<CurrentRoute>,
}

impl Default for RouterBuilder<RouteTable> {
    fn default() -> Self {
        RouterBuilder {
            routes: RouteTable,
            current: None,
        }
    }
}

impl<R: Route<View>> RouterBuilder<R> {
    /// Use a different route table.
    pub fn routes<T: Route<View>>(self, routes: T) -> RouterBuilder<T> {
        let RouterBuilder {
            current,
            ..
        } = self;

        RouterBuilder {
            routes: routes,
            current: current,
        }
    }

    /// Publish resolved views to an existing `CurrentRoute` instead of a new one.
    pub fn current(mut self, current: CurrentRoute) -> Self {
        self.current = Some(current);
        self
    }

    /// Build a router on top of the given history.
    pub fn build<H: History>(self, history: H) -> Router<H, R> {
        let RouterBuilder {
            routes,
            current,
        } = self;

        Router {
            history: Rc::new(history),
            routes: Rc::new(routes),
            current: current.unwrap_or_default(),
        }
    }
}

/// Maps the current path to a [`View`] and publishes it.
///
/// Clones share the same history, table and current route.
///
/// [`View`]: ../view/enum.View.html
pub struct Router<H, R = RouteTable> {
    history: Rc<H>,
    routes: Rc<R>,
    current: CurrentRoute,
}

impl<H, R> Clone for Router<H, R> {
    fn clone(&self) -> Self {
        Router {
            history: Rc::clone(&self.history),
            routes: Rc::clone(&self.routes),
            current: self.current.clone(),
        }
    }
}

impl<H, R> fmt::Debug for Router<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current)
            .finish()
    }
}

impl<H: History> Router<H, RouteTable> {
    /// A router using the default route table.
    pub fn new(history: H) -> Self {
        RouterBuilder::default().build(history)
    }
}

impl Router<BrowserHistory, RouteTable> {
    /// A router for the browser window using the default route table.
    pub fn browser() -> Result<Self, JsValue> {
        Ok(Router::new(BrowserHistory::new()?))
    }
}

impl<H, R> Router<H, R>
where
    H: History + 'static,
    R: Route<View> + 'static,
{
    /// Resolve the current path and update the current route.
    ///
    /// Unknown paths resolve to the home view. Only failures to read the location are errors.
    pub fn resolve(&self) -> Result<View, JsValue> {
        let path = self.history.pathname()?;

        let view = match self.routes.route(&path) {
            Some(view) => view,
            None => {
                debug!("no route for {:?}, falling back to {}", path, View::default());
                View::default()
            }
        };

        debug!("resolved {:?} to {}", path, view);
        self.current.set(view);

        Ok(view)
    }

    /// Resolve the current path, then resolve again every time the user moves back or forward
    /// through the history.
    ///
    /// The listener stays registered until the returned [`Teardown`] is dropped or torn down.
    ///
    /// [`Teardown`]: struct.Teardown.html
    pub fn init(&self) -> Result<Teardown<H>, JsValue> {
        self.resolve()?;

        let router = self.clone();
        let listener = self.history.listen(Box::new(move || {
            if let Err(e) = router.resolve() {
                error!("error resolving route: {:?}", e);
            }
        }))?;

        info!("router listening for history changes");

        Ok(Teardown {
            history: Rc::clone(&self.history),
            listener: Some(listener),
        })
    }

    /// Navigate to a view.
    ///
    /// The view's path is pushed onto the history and resolved before this returns, so
    /// subscribers already see the new view.
    pub fn navigate(&self, view: View) -> Result<View, JsValue> {
        self.push(&view.path())
    }

    /// Push an arbitrary path onto the history and resolve it.
    ///
    /// A path missing from the route table stays in the location bar but resolves to home.
    pub fn push(&self, path: &str) -> Result<View, JsValue> {
        debug!("pushing {:?}", path);
        self.history.push(path)?;
        self.resolve()
    }
}

impl<H, R> Router<H, R> {
    /// The current route published by this router.
    pub fn current(&self) -> &CurrentRoute {
        &self.current
    }

    /// The history this router reads from.
    pub fn history(&self) -> &H {
        &self.history
    }
}

/// A registered history listener, removed when dropped.
pub struct Teardown<H: History> {
    history: Rc<H>,
    listener: Option<H::Listener>,
}

impl<H: History> Teardown<H> {
    /// Stop listening for history changes.
    pub fn teardown(mut self) -> Result<(), JsValue> {
        if let Some(listener) = self.listener.take() {
            self.history.unlisten(listener)?;
            info!("router stopped listening for history changes");
        }

        Ok(())
    }
}

impl<H: History> fmt::Debug for Teardown<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("listening", &self.listener.is_some())
            .finish()
    }
}

impl<H: History> Drop for Teardown<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            match self.history.unlisten(listener) {
                Ok(()) => info!("router stopped listening for history changes"),
                Err(e) => warn!("error removing history listener: {:?}", e),
            }
        }
    }
}
