//! Landing page hosting the top-cars section.

use leptos::prelude::*;

use crate::components::top_cars::TopCars;

/// Landing page — a single centered column with the deals carousel.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"TopCars"</span>
            </header>
            <main class="home-page__content">
                <TopCars/>
            </main>
        </div>
    }
}
