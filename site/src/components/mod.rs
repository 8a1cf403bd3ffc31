//! Leptos UI components for the ModernSite page.
//!
//! Each component is a Leptos `#[component]` function. Only the page shell
//! holds state; every section below it is a pure function of the constant
//! tables in [`crate::content`].
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── SitePage (owns MenuState)
//!     ├── Header (MenuHandle)
//!     │   └── MobilePanel (only while Open)
//!     ├── main
//!     │   ├── Hero
//!     │   ├── Features
//!     │   ├── About
//!     │   ├── Services
//!     │   └── Contact
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but sections
//! can be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use modernsite::components::{Features, Services};
//!
//! view! {
//!     <Features />
//!     <Services />
//! }
//! ```

mod about;
mod contact;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod services;
mod shell;

pub use about::About;
pub use contact::Contact;
pub use document::SiteDocument;
pub use features::{FeatureGrid, Features};
pub use footer::{COPYRIGHT, Footer};
pub use header::{Header, MobilePanel, PANEL_TEMPLATE_ID, toggle_glyph};
pub use hero::{Hero, StatGrid};
pub use icons::{Glyph, Icon};
pub use services::{HIGHLIGHT_BADGE, PricingGrid, Services};
pub use shell::SitePage;
