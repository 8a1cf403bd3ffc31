//! Root document component - the complete HTML page
//!
//! Wraps [`SitePage`] in `<html>`/`<head>` with the inline stylesheet and,
//! for interactive output, the inline script that drives the mobile menu in
//! the browser.

use super::{PANEL_TEMPLATE_ID, SitePage};
use crate::RenderOptions;
use crate::styles::{CSP, SITE_CSS};
use leptos::prelude::*;

/// The complete HTML document for the page
#[component]
pub fn SiteDocument(options: RenderOptions) -> impl IntoView {
    let RenderOptions {
        title,
        lang,
        initial_menu,
        interactive,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SitePage initial_menu=initial_menu interactive=interactive />
                {interactive.then(|| view! { <script>{menu_script()}</script> })}
            </body>
        </html>
    }
}

/// Browser side of the menu state machine.
///
/// Mirrors [`crate::menu::MenuState::next`]: the toggle button flips the
/// state, any panel link closes it. The open panel is cloned from the
/// `<template>` the header emits and removed again on close.
fn menu_script() -> String {
    MENU_SCRIPT.replace("__PANEL_TEMPLATE_ID__", PANEL_TEMPLATE_ID)
}

const MENU_SCRIPT: &str = r#"
(() => {
  const header = document.querySelector('[data-role="site-header"]');
  if (!header) return;
  const toggle = header.querySelector('[data-role="menu-toggle"]');
  const mount = header.querySelector('[data-role="mobile-panel-mount"]');
  const template = document.getElementById('__PANEL_TEMPLATE_ID__');
  if (!toggle || !mount || !template) return;

  const setState = (open) => {
    header.dataset.menuState = open ? 'open' : 'closed';
    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    const glyph = toggle.querySelector('path');
    if (glyph) {
      glyph.setAttribute('d', open ? toggle.dataset.glyphOpen : toggle.dataset.glyphClosed);
    }
    const panel = mount.querySelector('[data-role="mobile-panel"]');
    if (open) {
      if (!panel) mount.appendChild(template.content.cloneNode(true));
    } else if (panel) {
      panel.remove();
    }
  };

  toggle.addEventListener('click', () => {
    setState(header.dataset.menuState !== 'open');
  });

  mount.addEventListener('click', (event) => {
    if (event.target.closest('[data-nav="panel"]')) setState(false);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_emitted_template() {
        let script = menu_script();
        assert!(script.contains("getElementById('mobile-panel-template')"));
        assert!(!script.contains("__PANEL_TEMPLATE_ID__"));
    }
}
