use super::StatGrid;
use crate::content::{ABOUT_STATS, COMPANY_VALUES};
use leptos::prelude::*;

/// Company blurb, stats and the "Our Values" card (`#about`).
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <div class="about-copy">
                    <h2 class="section-title">"About Our Company"</h2>
                    <p class="about-paragraph">
                        "We're a team of passionate developers and designers dedicated to creating "
                        "exceptional digital experiences. With years of expertise in modern web "
                        "technologies, we help businesses transform their ideas into reality."
                    </p>
                    <p class="about-paragraph">
                        "Our mission is to provide cutting-edge solutions that not only meet your "
                        "current needs but also scale with your future growth."
                    </p>
                    <StatGrid stats=ABOUT_STATS />
                </div>

                <div class="values-card">
                    <h3 class="values-title">"Our Values"</h3>
                    <ul class="values-list">
                        {COMPANY_VALUES.iter().map(|value| view! {
                            <li class="value" data-value=value.title>
                                <span class="value-dot"></span>
                                <div>
                                    <h4 class="value-title">{value.title}</h4>
                                    <p class="value-description">{value.description}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
