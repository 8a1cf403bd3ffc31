//! Inline SVG glyphs.
//!
//! Every glyph is a 24x24 stroke outline (Lucide-style). Glyphs are
//! referenced by name through [`Glyph`], so the set can be swapped without
//! touching the sections that use it.

use leptos::prelude::*;
use serde::Serialize;

/// Named vector glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Hamburger menu (three bars)
    Menu,
    /// Close cross
    Close,
    /// Right arrow
    ArrowRight,
    /// Play triangle
    Play,
    /// Check mark
    Check,
    /// Lightning bolt
    Zap,
    /// Shield outline
    Shield,
    /// Phone outline
    Smartphone,
    /// Angle brackets
    Code,
    /// Globe with meridian
    Globe,
    /// Heart (handshake category)
    Handshake,
    /// Two people
    Users,
    /// Rosette
    Award,
    /// Concentric rings
    Target,
    /// GitHub mark
    Github,
    /// Twitter bird
    Twitter,
    /// LinkedIn mark
    Linkedin,
    /// Instagram camera
    Instagram,
    /// Envelope
    Mail,
}

impl Glyph {
    /// SVG path data (the `d` attribute value).
    pub fn path(self) -> &'static str {
        match self {
            Self::Menu => "M4 6h16M4 12h16M4 18h16",
            Self::Close => "M18 6 6 18M6 6l12 12",
            Self::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            Self::Play => "M6 3l14 9-14 9V3z",
            Self::Check => "M20 6 9 17l-5-5",
            Self::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
            Self::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            Self::Smartphone => {
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01"
            }
            Self::Code => "M16 18l6-6-6-6M8 6l-6 6 6 6",
            Self::Globe => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
            }
            Self::Handshake => {
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7zM12 5 9.04 7.96a2.17 2.17 0 0 0 0 3.08c.82.82 2.13.85 3 .07l2.07-1.9a2.82 2.82 0 0 1 3.79 0l2.96 2.66"
            }
            Self::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            }
            Self::Award => "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12zM8.21 13.89 7 23l5-3 5 3-1.21-9.12",
            Self::Target => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12zM12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z"
            }
            Self::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2"
            }
            Self::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            }
            Self::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z"
            }
            Self::Instagram => {
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01"
            }
            Self::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"
            }
        }
    }

    /// Kebab-case name, rendered as `data-glyph` for styling hooks.
    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Close => "close",
            Self::ArrowRight => "arrow-right",
            Self::Play => "play",
            Self::Check => "check",
            Self::Zap => "zap",
            Self::Shield => "shield",
            Self::Smartphone => "smartphone",
            Self::Code => "code",
            Self::Globe => "globe",
            Self::Handshake => "handshake",
            Self::Users => "users",
            Self::Award => "award",
            Self::Target => "target",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Mail => "mail",
        }
    }
}

/// Renders a glyph as an inline SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Check size="20" class="pricing-check" /> }
/// ```
#[component]
pub fn Icon(
    /// Which glyph to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-glyph=glyph.name()
            class=class
        >
            <path d=glyph.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn icon_renders_named_path() {
        let html = view! { <Icon glyph=Glyph::Check size="16" /> }.to_html();
        assert!(html.contains("data-glyph=\"check\""));
        assert!(html.contains(Glyph::Check.path()));
        assert!(html.contains("width=\"16\""));
    }

    #[test]
    fn glyph_names_match_serde() {
        for glyph in [Glyph::ArrowRight, Glyph::Linkedin, Glyph::Menu] {
            let json = serde_json::to_string(&glyph).expect("serialize");
            assert_eq!(json, format!("\"{}\"", glyph.name()));
        }
    }
}
