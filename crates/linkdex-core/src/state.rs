use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

mod codec;
mod grid;
mod route;

pub use codec::{decode_filter, encode_filter};
pub use grid::{GridSizing, Viewport};
pub use route::{FILTER_PARAM, Location, Route};

/// Element id whose click closes the menu overlay.
pub const DISMISS_OVERLAY_ID: &str = "menu-overlay";
/// Click events carry at most this many nested element ids.
pub const MAX_CLICK_DEPTH: usize = 5;
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Day,
    Night,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum UrlRequest {
    Internal(Location),
    External(String),
}

/// Ids of the clicked element and its ancestors, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTarget {
    pub ids: Vec<String>,
}

impl ClickTarget {
    pub fn hits(&self, id: &str) -> bool {
        self.ids.iter().take(MAX_CLICK_DEPTH).any(|candidate| candidate == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Event {
    SetFilter(String),
    SetLayout(Layout),
    SetColor(ColorMode),
    Resize(Viewport),
    AdjustDensity(i32),
    UrlChanged(Location),
    LinkClicked(UrlRequest),
    Clicked(ClickTarget),
    KeyPressed(String),
    ToggleMenu,
    ScrolledTop(bool),
}

/// Side effects requested from the navigation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "snake_case")]
pub enum Command {
    PushUrl(String),
    Load(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    pub route: Route,
    pub filter: String,
    pub layout: Layout,
    pub color: ColorMode,
    pub grid: GridSizing,
    pub at_top: bool,
    pub menu_open: bool,
    #[serde(skip)]
    pub config: ViewConfig,
}

impl Model {
    pub fn init(location: &Location, viewport: Viewport, config: ViewConfig) -> Self {
        Self {
            route: location.route(),
            filter: location.filter(),
            layout: Layout::default(),
            color: ColorMode::default(),
            grid: GridSizing::for_viewport(viewport, &config),
            at_top: true,
            menu_open: false,
            config,
        }
    }

    /// Applies one event. Every transition is total and synchronous.
    #[must_use]
    pub fn update(mut self, event: Event) -> (Self, Vec<Command>) {
        let mut commands = Vec::new();
        match event {
            Event::SetFilter(filter) => {
                commands.push(Command::PushUrl(self.route.location(&filter).to_url()));
                self.filter = filter;
            }
            Event::SetLayout(layout) => self.layout = layout,
            Event::SetColor(color) => self.color = color,
            Event::Resize(viewport) => {
                self.grid = GridSizing::for_viewport(viewport, &self.config);
            }
            Event::AdjustDensity(delta) => self.grid = self.grid.adjusted(delta),
            Event::UrlChanged(location) => {
                self.route = location.route();
                self.filter = location.filter();
                self.menu_open = false;
            }
            Event::LinkClicked(UrlRequest::Internal(location)) => {
                commands.push(Command::PushUrl(location.to_url()));
            }
            Event::LinkClicked(UrlRequest::External(url)) => {
                commands.push(Command::Load(url));
            }
            Event::Clicked(target) => {
                if target.hits(DISMISS_OVERLAY_ID) {
                    self.menu_open = false;
                }
            }
            Event::KeyPressed(key) => {
                if key == ESCAPE_KEY {
                    self.menu_open = false;
                }
            }
            Event::ToggleMenu => self.menu_open = !self.menu_open,
            Event::ScrolledTop(at_top) => self.at_top = at_top,
        }
        (self, commands)
    }
}
