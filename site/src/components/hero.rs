//! Hero section - the `#home` anchor target

use super::{Glyph, Icon};
use crate::content::{HERO_STATS, Stat};
use leptos::prelude::*;

/// Headline, call-to-action buttons and the stats card.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-content fade-in">
                    <h1 class="hero-title">
                        "Build Something"
                        <span class="hero-title-accent">"Amazing Today"</span>
                    </h1>
                    <p class="hero-description">
                        "Create beautiful, modern websites with cutting-edge technology. "
                        "Our platform provides everything you need to bring your vision to life."
                    </p>
                </div>

                <div class="hero-actions slide-up">
                    <button type="button" class="btn btn-primary btn-icon">
                        "Get Started Free"
                        <Icon glyph=Glyph::ArrowRight />
                    </button>
                    <button type="button" class="btn btn-secondary btn-icon">
                        <Icon glyph=Glyph::Play />
                        "Watch Demo"
                    </button>
                </div>

                <div class="hero-stats-card fade-in">
                    <StatGrid stats=HERO_STATS />
                </div>
            </div>
        </section>
    }
}

/// Row of headline numbers; shared by the hero and about sections.
#[component]
pub fn StatGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.iter().map(|stat| view! {
                <div class="stat" data-stat=stat.label>
                    {stat.glyph.map(|glyph| view! {
                        <div class="stat-glyph">
                            <Icon glyph=glyph size="32" />
                        </div>
                    })}
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }).collect_view()}
        </div>
    }
}
