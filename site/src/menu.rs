//! Mobile navigation menu state.
//!
//! The page has exactly one piece of state: whether the mobile navigation
//! panel is visible. It is modelled as a two-state machine so that every
//! transition the header can trigger is an explicit [`MenuEvent`]:
//!
//! ```text
//!            ToggleButton
//!   Closed ───────────────▶ Open
//!     ▲                      │
//!     └──────────────────────┘
//!      ToggleButton | PanelLink
//! ```
//!
//! [`MenuHandle`] is what the page shell hands to the header: the current
//! value plus the capability to change it. The shell owns the reactive cell,
//! the header only ever sees the handle.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Panel hidden (initial state)
    #[default]
    Closed,
    /// Panel rendered below the header bar
    Open,
}

/// Inputs that move the menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger / close button was activated
    ToggleButton,
    /// A navigation link inside the mobile panel was activated
    PanelLink,
    /// Direct assignment through the setter capability
    Set(bool),
}

impl MenuState {
    /// Builds the state named by a plain "is open" flag.
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Whether the panel is visible.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Applies one event and returns the resulting state.
    pub fn next(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::ToggleButton => self.toggled(),
            MenuEvent::PanelLink => Self::Closed,
            MenuEvent::Set(open) => Self::from_open(open),
        }
    }

    /// Lowercase name used in `data-menu-state` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

impl std::fmt::Display for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MenuState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closed" | "false" => Ok(Self::Closed),
            "open" | "true" => Ok(Self::Open),
            other => Err(format!("unknown menu state '{}' (expected 'closed' or 'open')", other)),
        }
    }
}

/// Read value plus setter capability for the menu state.
///
/// Created by the page shell and passed down to the header. The handle is
/// `Copy`, so event closures can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct MenuHandle {
    state: ReadSignal<MenuState>,
    set_state: WriteSignal<MenuState>,
}

impl MenuHandle {
    /// Creates the reactive cell backing the menu.
    ///
    /// Must be called inside a reactive [`Owner`]; the cell lives as long as
    /// that owner.
    pub fn new(initial: MenuState) -> Self {
        let (state, set_state) = signal(initial);
        Self { state, set_state }
    }

    /// Tracked read, for use inside reactive view closures.
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Untracked read of the current state.
    pub fn current(&self) -> MenuState {
        self.state.get_untracked()
    }

    /// Tracked "is the panel visible" read.
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Feeds one event through the state machine.
    pub fn dispatch(&self, event: MenuEvent) {
        self.set_state.update(|state| {
            let next = state.next(event);
            debug!(from = %state, to = %next, ?event, "menu transition");
            *state = next;
        });
    }

    /// Setter capability: open or close the panel.
    pub fn set_open(&self, open: bool) {
        self.dispatch(MenuEvent::Set(open));
    }

    /// Toggle button handler.
    pub fn toggle(&self) {
        self.dispatch(MenuEvent::ToggleButton);
    }

    /// Panel navigation link handler.
    pub fn panel_link_activated(&self) {
        self.dispatch(MenuEvent::PanelLink);
    }
}
