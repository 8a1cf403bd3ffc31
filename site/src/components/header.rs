//! Navigation header with the mobile menu panel.
//!
//! The header owns no state. It reads the menu state through the
//! [`MenuHandle`] it is given and relays clicks back through the same handle.

use super::{Glyph, Icon};
use crate::content::{ActionButton, BRAND, HEADER_ACTIONS, NAVIGATION, NavigationItem};
use crate::menu::{MenuHandle, MenuState};
use leptos::prelude::*;

/// Id of the `<template>` holding the panel markup for the enhancement script.
pub const PANEL_TEMPLATE_ID: &str = "mobile-panel-template";

/// Fixed site header.
///
/// Above the breakpoint it shows the navigation bar and the action buttons;
/// below it, a toggle button that opens the mobile panel.
#[component]
pub fn Header(
    /// Menu state plus setter, owned by the page shell
    menu: MenuHandle,
    /// Also emit the panel as a `<template>` so the inline script can mount it
    #[prop(default = false)]
    panel_template: bool,
) -> impl IntoView {
    view! {
        <header
            class="site-header"
            data-role="site-header"
            data-menu-state=move || menu.state().as_str()
        >
            <nav class="container">
                <div class="header-bar">
                    <a href="#home" class="brand">{BRAND}</a>

                    <div class="nav-links">
                        <NavLinks items=NAVIGATION scope="bar" />
                    </div>

                    <div class="nav-actions">
                        <ActionButtons buttons=HEADER_ACTIONS scope="bar" />
                    </div>

                    <button
                        type="button"
                        class="menu-toggle"
                        data-role="menu-toggle"
                        data-glyph-open=Glyph::Close.path()
                        data-glyph-closed=Glyph::Menu.path()
                        aria-label="Toggle navigation"
                        aria-controls="mobile-panel"
                        aria-expanded=move || if menu.is_open() { "true" } else { "false" }
                        on:click=move |_| menu.toggle()
                    >
                        {move || {
                            let glyph = toggle_glyph(menu.state());
                            view! { <Icon glyph=glyph size="24" /> }
                        }}
                    </button>
                </div>

                <div class="mobile-panel-mount" data-role="mobile-panel-mount">
                    <Show when=move || menu.is_open()>
                        <MobilePanel menu=menu />
                    </Show>
                </div>
            </nav>

            {panel_template.then(|| view! {
                <template id=PANEL_TEMPLATE_ID>
                    <MobilePanel menu=menu />
                </template>
            })}
        </header>
    }
}

/// Glyph shown on the toggle button for a given state.
pub fn toggle_glyph(state: MenuState) -> Glyph {
    match state {
        MenuState::Closed => Glyph::Menu,
        MenuState::Open => Glyph::Close,
    }
}

/// Vertical panel duplicating the navigation and the action buttons.
///
/// Each link closes the menu in addition to following its anchor.
#[component]
pub fn MobilePanel(menu: MenuHandle) -> impl IntoView {
    view! {
        <div id="mobile-panel" class="mobile-panel" data-role="mobile-panel">
            <div class="mobile-panel-links">
                {NAVIGATION.iter().map(|item| view! {
                    <a
                        data-nav="panel"
                        href=item.anchor
                        class="nav-link"
                        on:click=move |_| menu.panel_link_activated()
                    >
                        {item.label}
                    </a>
                }).collect_view()}
            </div>
            <div class="mobile-panel-actions">
                <ActionButtons buttons=HEADER_ACTIONS scope="panel" />
            </div>
        </div>
    }
}

#[component]
fn NavLinks(items: &'static [NavigationItem], scope: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <a data-nav=scope href=item.anchor class="nav-link">
                    {item.label}
                </a>
            }
        })
        .collect_view()
}

#[component]
fn ActionButtons(buttons: &'static [ActionButton], scope: &'static str) -> impl IntoView {
    buttons
        .iter()
        .map(|button| {
            view! {
                <button type="button" data-action=scope class=button.variant.class()>
                    {button.label}
                </button>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anchors_in, count};
    use leptos::tachys::view::RenderHtml;

    fn render(menu: MenuHandle) -> String {
        view! { <Header menu=menu /> }.to_html()
    }

    #[test]
    fn closed_header_has_no_panel() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render(MenuHandle::new(MenuState::Closed));
            assert!(!html.contains("data-role=\"mobile-panel\""));
            assert!(html.contains("data-menu-state=\"closed\""));
            assert!(html.contains("aria-expanded=\"false\""));
            assert!(html.contains("data-glyph=\"menu\""));
            assert_eq!(count(&html, "data-nav=\"bar\""), 5);
            assert_eq!(count(&html, "data-action=\"bar\""), 2);
        });
    }

    #[test]
    fn toggle_open_then_panel_link_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuHandle::new(MenuState::Closed);

            menu.toggle();
            let html = render(menu);
            assert!(html.contains("data-role=\"mobile-panel\""));
            assert!(html.contains("data-menu-state=\"open\""));
            assert!(html.contains("aria-expanded=\"true\""));
            assert!(html.contains("data-glyph=\"close\""));
            assert_eq!(count(&html, "data-nav=\"panel\""), 5);
            assert_eq!(count(&html, "data-action=\"panel\""), 2);

            // "Home" is the first panel link
            assert_eq!(anchors_in(&html, "panel")[0].1, "Home");
            menu.panel_link_activated();
            let html = render(menu);
            assert!(!html.contains("data-role=\"mobile-panel\""));
            assert_eq!(menu.current(), MenuState::Closed);
        });
    }

    #[test]
    fn every_panel_link_closes_the_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuHandle::new(MenuState::Closed);
            for item in NAVIGATION {
                menu.toggle();
                assert!(menu.current().is_open(), "menu should open before {}", item.label);
                menu.panel_link_activated();
                assert_eq!(menu.current(), MenuState::Closed, "after {}", item.label);
            }
        });
    }

    #[test]
    fn bar_and_panel_list_identical_links() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render(MenuHandle::new(MenuState::Open));
            let bar = anchors_in(&html, "bar");
            let panel = anchors_in(&html, "panel");
            assert_eq!(bar, panel);

            let expected: Vec<(String, String)> = NAVIGATION
                .iter()
                .map(|item| (item.anchor.to_string(), item.label.to_string()))
                .collect();
            assert_eq!(bar, expected);
        });
    }

    #[test]
    fn template_is_emitted_on_request() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuHandle::new(MenuState::Closed);
            let html = view! { <Header menu=menu panel_template=true /> }.to_html();
            assert!(html.contains("<template id=\"mobile-panel-template\""));
            // Only the template copy exists while closed
            assert_eq!(count(&html, "data-role=\"mobile-panel\""), 1);
        });
    }

    #[test]
    fn toggle_glyph_tracks_state() {
        assert_eq!(toggle_glyph(MenuState::Closed), Glyph::Menu);
        assert_eq!(toggle_glyph(MenuState::Open), Glyph::Close);
    }
}
