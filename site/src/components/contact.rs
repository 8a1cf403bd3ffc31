use super::{Glyph, Icon};
use crate::content::CONTACT_EMAIL;
use leptos::prelude::*;

/// Contact placeholder so the "Contact" navigation entry has a target.
#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-description">
                        "Have a project in mind? Drop us a line and we'll get back to you within one business day."
                    </p>
                </div>
                <div class="contact-actions">
                    <a href=mailto class="btn btn-primary btn-icon">
                        <Icon glyph=Glyph::Mail />
                        {CONTACT_EMAIL}
                    </a>
                </div>
            </div>
        </section>
    }
}
