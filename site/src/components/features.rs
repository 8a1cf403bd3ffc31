use super::Icon;
use crate::content::{FEATURES, Feature};
use leptos::prelude::*;

/// "Why Choose Our Platform?" feature grid (`#features`).
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why Choose Our Platform?"</h2>
                    <p class="section-description">
                        "Built with modern technology and best practices to give you the edge you need."
                    </p>
                </div>
                <FeatureGrid features=FEATURES />
            </div>
        </section>
    }
}

/// One card per feature, in table order.
#[component]
pub fn FeatureGrid(features: &'static [Feature]) -> impl IntoView {
    view! {
        <div class="features-grid">
            {features.iter().map(|feature| view! {
                <FeatureCard feature=*feature />
            }).collect_view()}
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card" data-feature=feature.title>
            <div class="feature-icon">
                <Icon glyph=feature.glyph size="32" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
