//! # modernsite
//!
//! Leptos SSR renderer for the ModernSite marketing page.
//!
//! The page is a header with in-page navigation, a hero, feature cards, an
//! about section, pricing tiers, a contact placeholder and a footer. The
//! only state is the mobile navigation menu, owned by the page shell and
//! handed to the header as a [`menu::MenuHandle`].
//!
//! ## Quick Start
//!
//! ```rust
//! use modernsite::{render_page, RenderOptions};
//!
//! let html = render_page(&RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"services\""));
//! ```
//!
//! ## Architecture
//!
//! - [`menu`] - the Closed/Open state machine and its handle
//! - [`content`] - constant tables for every rendered list
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html` inside a fresh reactive
//! owner, so each call is independent. No hydration; the optional inline
//! script mirrors the menu transitions in the browser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod menu;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_support;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use menu::MenuState;
use tracing::debug;

/// Knobs for [`render_page`].
///
/// # Example
///
/// ```rust
/// use modernsite::{menu::MenuState, RenderOptions};
///
/// let snapshot = RenderOptions {
///     initial_menu: MenuState::Open,
///     interactive: false,
///     ..Default::default()
/// };
/// assert_eq!(snapshot.title, "ModernSite");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document `<title>`
    pub title: String,
    /// `lang` attribute on `<html>`
    pub lang: String,
    /// State the menu is rendered in
    pub initial_menu: MenuState,
    /// Include the panel template and the inline menu script
    pub interactive: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: content::BRAND.to_string(),
            lang: "en".to_string(),
            initial_menu: MenuState::Closed,
            interactive: true,
        }
    }
}

/// Render the complete page to an HTML document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use modernsite::{render_page, RenderOptions};
///
/// let html = render_page(&RenderOptions { interactive: false, ..Default::default() });
/// assert!(!html.contains("<script>"));
/// ```
pub fn render_page(options: &RenderOptions) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let options = options.clone();
        view! { <SiteDocument options=options /> }.to_html()
    });

    debug!(
        bytes = html.len(),
        menu = %options.initial_menu,
        interactive = options.interactive,
        "rendered page"
    );

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
