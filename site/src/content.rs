//! Static page content.
//!
//! Every list the page renders lives here as a constant table. Tables are
//! order-significant: sections render one element per entry, in the order
//! listed. Nothing here is mutated after compilation.
//!
//! # Example
//!
//! ```rust
//! use modernsite::content::{NAVIGATION, PRICING_TIERS};
//!
//! assert_eq!(NAVIGATION[0].anchor, "#home");
//! assert_eq!(PRICING_TIERS.iter().filter(|t| t.highlighted).count(), 1);
//! ```

use crate::components::Glyph;
use serde::Serialize;

/// Brand label shown in the header and footer.
pub const BRAND: &str = "ModernSite";

/// One in-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Link text
    pub label: &'static str,
    /// Anchor target, including the leading `#`
    pub anchor: &'static str,
}

/// Visual weight of a call-to-action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled accent button
    Primary,
    /// Outlined button
    Secondary,
}

impl ButtonVariant {
    /// CSS class for the variant.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
        }
    }
}

/// A header call-to-action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    /// Button text
    pub label: &'static str,
    /// Visual weight
    pub variant: ButtonVariant,
}

/// A feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Category glyph
    pub glyph: Glyph,
    /// Card heading
    pub title: &'static str,
    /// Card copy
    pub description: &'static str,
}

/// A headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Optional glyph drawn above the number
    pub glyph: Option<Glyph>,
    /// The number, already formatted ("50+", "99.9%")
    pub value: &'static str,
    /// Caption under the number
    pub label: &'static str,
}

/// One entry of the "Our Values" list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyValue {
    /// Value name
    pub title: &'static str,
    /// One-line explanation
    pub description: &'static str,
}

/// A pricing tier in the services section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    /// Plan name
    pub name: &'static str,
    /// Monthly price, formatted
    pub price: &'static str,
    /// Short pitch under the name
    pub description: &'static str,
    /// Included features, in display order
    pub features: &'static [&'static str],
    /// Rendered with the "Most Popular" treatment
    pub highlighted: bool,
}

/// A titled column of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading
    pub title: &'static str,
    /// Link texts, in display order
    pub links: &'static [&'static str],
}

/// A social network link in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Brand glyph
    pub glyph: Glyph,
    /// Accessible name
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
}

/// In-page navigation, shared by the header bar and the mobile panel.
pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem { label: "Home", anchor: "#home" },
    NavigationItem { label: "Features", anchor: "#features" },
    NavigationItem { label: "About", anchor: "#about" },
    NavigationItem { label: "Services", anchor: "#services" },
    NavigationItem { label: "Contact", anchor: "#contact" },
];

/// Header buttons, shared by the header bar and the mobile panel.
pub const HEADER_ACTIONS: &[ActionButton] = &[
    ActionButton { label: "Sign In", variant: ButtonVariant::Secondary },
    ActionButton { label: "Get Started", variant: ButtonVariant::Primary },
];

/// Stats card under the hero call-to-actions.
pub const HERO_STATS: &[Stat] = &[
    Stat { glyph: None, value: "50+", label: "Modern Templates" },
    Stat { glyph: None, value: "99.9%", label: "Uptime Guarantee" },
    Stat { glyph: None, value: "24/7", label: "Support Available" },
];

/// Feature cards.
pub const FEATURES: &[Feature] = &[
    Feature {
        glyph: Glyph::Zap,
        title: "Lightning Fast",
        description: "Optimized for speed with cutting-edge performance techniques.",
    },
    Feature {
        glyph: Glyph::Shield,
        title: "Secure by Default",
        description: "Enterprise-grade security built into every aspect of our platform.",
    },
    Feature {
        glyph: Glyph::Smartphone,
        title: "Mobile First",
        description: "Responsive design that looks perfect on every device.",
    },
    Feature {
        glyph: Glyph::Code,
        title: "Developer Friendly",
        description: "Clean code, modern frameworks, and excellent documentation.",
    },
    Feature {
        glyph: Glyph::Globe,
        title: "Global CDN",
        description: "Content delivered fast from servers around the world.",
    },
    Feature {
        glyph: Glyph::Handshake,
        title: "24/7 Support",
        description: "Expert support team ready to help you succeed.",
    },
];

/// About section stats.
pub const ABOUT_STATS: &[Stat] = &[
    Stat { glyph: Some(Glyph::Users), value: "500+", label: "Happy Clients" },
    Stat { glyph: Some(Glyph::Award), value: "50+", label: "Awards Won" },
    Stat { glyph: Some(Glyph::Target), value: "1000+", label: "Projects Done" },
];

/// "Our Values" card entries.
pub const COMPANY_VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Innovation",
        description: "We stay ahead of the curve with the latest technologies.",
    },
    CompanyValue {
        title: "Quality",
        description: "Every project is crafted with attention to detail.",
    },
    CompanyValue {
        title: "Support",
        description: "We're here for you every step of the way.",
    },
];

/// Pricing tiers, cheapest first.
pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$29",
        description: "Perfect for small projects",
        features: &["5 Pages", "Responsive Design", "Basic SEO", "Email Support", "1 GB Storage"],
        highlighted: false,
    },
    PricingTier {
        name: "Professional",
        price: "$79",
        description: "Ideal for growing businesses",
        features: &[
            "20 Pages",
            "Advanced Design",
            "SEO Optimization",
            "Priority Support",
            "10 GB Storage",
            "Analytics Dashboard",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "$199",
        description: "For large-scale applications",
        features: &[
            "Unlimited Pages",
            "Custom Design",
            "Advanced SEO",
            "24/7 Support",
            "Unlimited Storage",
            "Advanced Analytics",
            "Custom Integrations",
        ],
        highlighted: false,
    },
];

/// Footer link columns.
pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn { title: "Company", links: &["About", "Careers", "Press", "Blog"] },
    FooterColumn { title: "Services", links: &["Web Design", "Development", "SEO", "Consulting"] },
    FooterColumn { title: "Support", links: &["Help Center", "Documentation", "API", "Status"] },
    FooterColumn { title: "Legal", links: &["Privacy", "Terms", "Cookies", "Licenses"] },
];

/// Footer social links.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { glyph: Glyph::Github, label: "GitHub", href: "#" },
    SocialLink { glyph: Glyph::Twitter, label: "Twitter", href: "#" },
    SocialLink { glyph: Glyph::Linkedin, label: "LinkedIn", href: "#" },
    SocialLink { glyph: Glyph::Instagram, label: "Instagram", href: "#" },
];

/// Address used by the contact placeholder.
pub const CONTACT_EMAIL: &str = "hello@modernsite.dev";

/// Every table at once, for JSON export.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    /// Brand label
    pub brand: &'static str,
    /// Header navigation
    pub navigation: &'static [NavigationItem],
    /// Header call-to-action buttons
    pub header_actions: &'static [ActionButton],
    /// Hero stats card
    pub hero_stats: &'static [Stat],
    /// Feature cards
    pub features: &'static [Feature],
    /// About section stats
    pub about_stats: &'static [Stat],
    /// "Our Values" list
    pub company_values: &'static [CompanyValue],
    /// Pricing tiers
    pub pricing_tiers: &'static [PricingTier],
    /// Footer link columns
    pub footer_columns: &'static [FooterColumn],
    /// Footer social links
    pub social_links: &'static [SocialLink],
    /// Contact address
    pub contact_email: &'static str,
}

/// The full content set rendered by the page.
pub const SITE_CONTENT: SiteContent = SiteContent {
    brand: BRAND,
    navigation: NAVIGATION,
    header_actions: HEADER_ACTIONS,
    hero_stats: HERO_STATS,
    features: FEATURES,
    about_stats: ABOUT_STATS,
    company_values: COMPANY_VALUES,
    pricing_tiers: PRICING_TIERS,
    footer_columns: FOOTER_COLUMNS,
    social_links: SOCIAL_LINKS,
    contact_email: CONTACT_EMAIL,
};
