//! Paginated carousel with dot navigation.
//!
//! Shows a window of `per_page` slides over the full listing sequence.
//! Clicking a slide advances one page (wrapping); clicking a dot jumps to
//! that page. The pagination math lives in pure functions below so the
//! windowing behavior is testable without a browser.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::net::types::CarListing;

/// Paginated car carousel.
///
/// `value` is the current page index, owned by the parent so the dots and
/// the slide area stay in sync. The page is clamped for display whenever the
/// page size or the item count shrinks underneath it.
#[component]
pub fn Carousel(
    /// Current page index, shared with the dots.
    value: RwSignal<usize>,
    /// Cars to window over, in response order.
    #[prop(into)] cars: Signal<Vec<CarListing>>,
    /// Slides shown per page, derived from the viewport width.
    #[prop(into)] per_page: Signal<usize>,
) -> impl IntoView {
    let visible = move || {
        let cars = cars.get();
        let per_page = per_page.get();
        let page = clamp_page(value.get(), cars.len(), per_page);
        let (start, end) = page_bounds(page, cars.len(), per_page);
        cars[start..end].to_vec()
    };

    let advance = move |_| {
        let pages = page_count(cars.with(Vec::len), per_page.get());
        value.update(|page| *page = next_page(*page, pages));
    };

    view! {
        <div class="carousel" on:click=advance>
            {move || {
                visible()
                    .into_iter()
                    .map(|car| {
                        view! {
                            <CarCard
                                name=car.name
                                mileage=car.mileage
                                thumbnail_src=car.thumbnail_url
                                daily_price=car.daily_price
                                monthly_price=car.monthly_price
                                gear_type=car.gear_type
                                fuel_type=car.fuel_type
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Dot navigation for the carousel.
///
/// The dot count follows the listing policy (one per car on mobile, one per
/// three otherwise), which can disagree with the real page count at
/// intermediate widths; clicks are clamped to valid pages.
#[component]
pub fn CarouselDots(
    /// Current page index, shared with the carousel.
    value: RwSignal<usize>,
    /// Number of dots to render.
    #[prop(into)] count: Signal<usize>,
    /// Real page count, used to clamp dot jumps.
    #[prop(into)] pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="carousel__dots">
            {move || {
                (0..count.get())
                    .map(|i| {
                        let dot_class = move || {
                            if value.get() == i {
                                "carousel__dot carousel__dot--active"
                            } else {
                                "carousel__dot"
                            }
                        };
                        view! {
                            <button
                                class=dot_class
                                aria-label=format!("Go to page {}", i + 1)
                                on:click=move |_| {
                                    value.set(i.min(pages.get().saturating_sub(1)));
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Number of pages needed to show `items` at `per_page` slides each.
#[must_use]
pub fn page_count(items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        items.div_ceil(per_page)
    }
}

/// Clamp a page index to the last valid page for the current layout.
#[must_use]
pub fn clamp_page(page: usize, items: usize, per_page: usize) -> usize {
    page.min(page_count(items, per_page).saturating_sub(1))
}

/// Half-open item range `[start, end)` visible on `page`.
#[must_use]
pub fn page_bounds(page: usize, items: usize, per_page: usize) -> (usize, usize) {
    let start = (page * per_page).min(items);
    let end = (start + per_page).min(items);
    (start, end)
}

/// The page after `page`, wrapping past the last one.
#[must_use]
pub fn next_page(page: usize, pages: usize) -> usize {
    if pages == 0 { 0 } else { (page + 1) % pages }
}
