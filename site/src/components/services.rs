//! Pricing section (`#services`).
//!
//! Tiers flagged `highlighted` get the "Most Popular" badge, an accented
//! card border and a primary call-to-action. Any number of tiers may carry
//! the flag.

use super::{Glyph, Icon};
use crate::content::{PRICING_TIERS, PricingTier};
use leptos::prelude::*;

/// Badge text on highlighted tiers.
pub const HIGHLIGHT_BADGE: &str = "Most Popular";

/// "Choose Your Plan" section with one card per pricing tier.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Choose Your Plan"</h2>
                    <p class="section-description">
                        "Flexible pricing options to suit your needs and budget."
                    </p>
                </div>
                <PricingGrid tiers=PRICING_TIERS />
            </div>
        </section>
    }
}

/// One card per tier, in table order.
#[component]
pub fn PricingGrid(tiers: &'static [PricingTier]) -> impl IntoView {
    view! {
        <div class="pricing-grid">
            {tiers.iter().map(|tier| view! { <PricingCard tier=*tier /> }).collect_view()}
        </div>
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    let (card_class, button_class) = if tier.highlighted {
        ("pricing-card pricing-card-highlighted", "btn btn-primary btn-block")
    } else {
        ("pricing-card", "btn btn-muted btn-block")
    };

    view! {
        <div class=card_class data-tier=tier.name>
            {tier.highlighted.then(|| view! {
                <div class="pricing-badge">
                    <span>{HIGHLIGHT_BADGE}</span>
                </div>
            })}

            <div class="pricing-head">
                <h3 class="pricing-name">{tier.name}</h3>
                <p class="pricing-description">{tier.description}</p>
                <div class="pricing-price">
                    {tier.price}
                    <span class="pricing-period">"/month"</span>
                </div>
            </div>

            <ul class="pricing-features">
                {tier.features.iter().map(|feature| view! {
                    <li class="pricing-feature">
                        <Icon glyph=Glyph::Check class="pricing-check" />
                        <span>{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <button type="button" class=button_class>"Get Started"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{attr_values, count};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    /// Slice of the rendered HTML belonging to one tier card.
    fn card<'a>(html: &'a str, name: &str) -> &'a str {
        let marker = format!("data-tier=\"{}\"", name);
        let start = html.find(&marker).expect("tier card present");
        let rest = &html[start + marker.len()..];
        let end = rest.find("data-tier=").unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn three_tiers_render_three_cards_in_order() {
        let html = view! { <Services /> }.to_html();
        assert!(html.contains("id=\"services\""));
        assert_eq!(attr_values(&html, "data-tier"), ["Starter", "Professional", "Enterprise"]);
    }

    #[test]
    fn only_highlighted_tier_carries_badge() {
        let html = view! { <Services /> }.to_html();
        assert_eq!(count(&html, HIGHLIGHT_BADGE), 1);
        assert!(card(&html, "Professional").contains(HIGHLIGHT_BADGE));
        assert!(!card(&html, "Starter").contains(HIGHLIGHT_BADGE));
        assert!(!card(&html, "Enterprise").contains(HIGHLIGHT_BADGE));
        assert_eq!(count(&html, "pricing-card-highlighted"), 1);
    }

    #[test]
    fn feature_lists_follow_table() {
        let html = view! { <Services /> }.to_html();
        for tier in PRICING_TIERS {
            let body = card(&html, tier.name);
            assert_eq!(count(body, "class=\"pricing-feature\""), tier.features.len(), "{}", tier.name);
            assert!(body.contains(tier.price));
        }
    }

    const NO_HIGHLIGHT: &[PricingTier] = &[
        PricingTier {
            name: "Solo",
            price: "$9",
            description: "One seat",
            features: &["1 Page"],
            highlighted: false,
        },
        PricingTier {
            name: "Team",
            price: "$49",
            description: "Five seats",
            features: &["10 Pages", "Shared Billing"],
            highlighted: false,
        },
    ];

    const ALL_HIGHLIGHTED: &[PricingTier] = &[
        PricingTier {
            name: "Gold",
            price: "$100",
            description: "Everything",
            features: &["All"],
            highlighted: true,
        },
        PricingTier {
            name: "Platinum",
            price: "$200",
            description: "Everything, twice",
            features: &["All", "Again"],
            highlighted: true,
        },
    ];

    #[test]
    fn highlight_count_follows_flags() {
        let none = view! { <PricingGrid tiers=NO_HIGHLIGHT /> }.to_html();
        assert_eq!(count(&none, HIGHLIGHT_BADGE), 0);
        assert_eq!(attr_values(&none, "data-tier"), ["Solo", "Team"]);

        let all = view! { <PricingGrid tiers=ALL_HIGHLIGHTED /> }.to_html();
        assert_eq!(count(&all, HIGHLIGHT_BADGE), 2);
    }

    #[test]
    fn empty_tier_list_renders_no_cards() {
        const NONE: &[PricingTier] = &[];
        let html = view! { <PricingGrid tiers=NONE /> }.to_html();
        assert!(html.contains("pricing-grid"));
        assert_eq!(count(&html, "data-tier="), 0);
    }
}
