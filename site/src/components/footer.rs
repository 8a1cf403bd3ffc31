use super::Icon;
use crate::content::{BRAND, FOOTER_COLUMNS, SOCIAL_LINKS};
use leptos::prelude::*;

/// Copyright line in the footer's bottom bar.
pub const COPYRIGHT: &str = "© 2024 ModernSite. All rights reserved.";

/// Brand blurb, social links, link columns and the legal bar.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title">{BRAND}</h3>
                        <p class="footer-blurb">
                            "Building beautiful, modern websites with cutting-edge technology "
                            "and exceptional user experiences."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS.iter().map(|social| view! {
                                <a href=social.href class="social-link" aria-label=social.label>
                                    <Icon glyph=social.glyph />
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|column| view! {
                        <div class="footer-column" data-column=column.title>
                            <h4 class="footer-column-title">{column.title}</h4>
                            <ul class="footer-links">
                                {column.links.iter().map(|link| view! {
                                    <li><a href="#" class="footer-link">{*link}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{COPYRIGHT}</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
