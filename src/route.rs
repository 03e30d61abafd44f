//! Route trait for turning the page path into a view, and the table of known paths.

use crate::view::View;

/// Implement this trait on a route table to map a path to a view.
pub trait Route<V> {
    /// Convert a location path to a view, `None` if the path is unknown.
    fn route(&self, path: &str) -> Option<V>;
}

/// Every path the app knows about.
const ROUTES: [(&str, View); 10] = [
    ("/", View::Home),
    ("/home", View::Home),
    ("/logger", View::Logger),
    ("/workers", View::Workers),
    ("/game", View::Game),
    ("/rpc", View::Rpc),
    ("/drawing", View::Drawing),
    ("/simulator", View::Simulator),
    ("/exchange-types", View::ExchangeTypes),
    ("/newsimulations", View::NewSimulations),
];

/// The fixed path to view table.
///
/// Paths are matched exactly. There are no patterns, parameters or trailing slash handling, so
/// `/logger/` is not `/logger`.
#[derive(Debug, Default, Copy, Clone)]
pub struct RouteTable;

impl RouteTable {
    /// The `(path, view)` entries of the table.
    pub fn entries(&self) -> &'static [(&'static str, View)] {
        &ROUTES
    }
}

impl Route<View> for RouteTable {
    fn route(&self, path: &str) -> Option<View> {
        ROUTES.iter()
            .find(|(p, _)| *p == path)
            .map(|(_, view)| *view)
    }
}
