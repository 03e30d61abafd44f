//! The closed set of views an app can show.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A logical application view.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum View {
    /// The landing page.
    Home,
    /// Log viewer.
    Logger,
    /// Worker queue demo.
    Workers,
    /// Game lobby.
    Game,
    /// RPC demo.
    Rpc,
    /// Collaborative drawing board.
    Drawing,
    /// Simulator.
    Simulator,
    /// Exchange type explorer.
    ExchangeTypes,
    /// New simulations.
    NewSimulations,
}

impl View {
    /// Every view, in table order.
    pub const ALL: [View; 9] = [
        View::Home,
        View::Logger,
        View::Workers,
        View::Game,
        View::Rpc,
        View::Drawing,
        View::Simulator,
        View::ExchangeTypes,
        View::NewSimulations,
    ];

    /// The logical name of this view.
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Logger => "logger",
            View::Workers => "workers",
            View::Game => "game",
            View::Rpc => "rpc",
            View::Drawing => "drawing",
            View::Simulator => "simulator",
            View::ExchangeTypes => "exchange-types",
            View::NewSimulations => "newsimulations",
        }
    }

    /// The path pushed onto the history when navigating to this view.
    ///
    /// Home lives at `/`, everything else at `/` followed by its name.
    pub fn path(self) -> String {
        path_for(self.name())
    }
}

/// Build the history path for a view name.
///
/// The name does not need to belong to a [`View`]; `home` maps to `/` and every other name to `/`
/// followed by the name.
///
/// [`View`]: enum.View.html
pub fn path_for(name: &str) -> String {
    if name == View::Home.name() {
        "/".to_owned()
    }
    else {
        format!("/{}", name)
    }
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown view name.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseViewError {
    name: String,
}

impl fmt::Display for ParseViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown view: {:?}", self.name)
    }
}

impl Error for ParseViewError {}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL.iter()
            .copied()
            .find(|view| view.name() == s)
            .ok_or_else(|| ParseViewError { name: s.to_owned() })
    }
}
