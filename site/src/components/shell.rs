//! Page shell - owns the menu state and composes the sections

use super::{About, Contact, Features, Footer, Header, Hero, Services};
use crate::menu::{MenuHandle, MenuState};
use leptos::prelude::*;

/// Composition root of the page.
///
/// Creates the only piece of application state (the menu) and hands the
/// [`MenuHandle`] to the header. Sections render in a fixed order:
/// Hero, Features, About, Services, Contact, then the footer.
#[component]
pub fn SitePage(
    /// State the menu starts in
    #[prop(optional)]
    initial_menu: MenuState,
    /// Emit the panel template for the inline enhancement script
    #[prop(optional)]
    interactive: bool,
) -> impl IntoView {
    let menu = MenuHandle::new(initial_menu);

    view! {
        <div class="page">
            <Header menu=menu panel_template=interactive />
            <main>
                <Hero />
                <Features />
                <About />
                <Services />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
