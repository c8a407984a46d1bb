//! Top-cars section: fetch-on-mount, then a responsive deals carousel.

use leptos::prelude::*;

use crate::components::carousel::{Carousel, CarouselDots, page_count};
use crate::net::api;
use crate::state::cars::CarsState;
use crate::util::task::MountGuard;
use crate::util::viewport::{dot_count, is_mobile, slides_per_page, use_viewport_width};

/// Carousel section showing the fetched car listings.
///
/// Fetches once per mount. While the request is in flight only the spinner
/// renders; afterwards either the empty-state message or the carousel,
/// depending on what the shared state holds. A fetch failure is logged once
/// and the section falls back to whatever the store already held.
#[component]
pub fn TopCars() -> impl IntoView {
    let cars = expect_context::<RwSignal<CarsState>>();

    let (loading, set_loading) = signal(false);
    let current = RwSignal::new(0usize);

    let width = use_viewport_width();
    let mobile = Memo::new(move |_| is_mobile(width.get()));
    let per_page = Memo::new(move |_| slides_per_page(width.get()));

    // Memoized selector over the shared store, so unrelated store changes do
    // not rebuild the carousel.
    let top_cars = Memo::new(move |_| cars.with(|s| s.top_cars().map(<[_]>::to_vec)));

    // One fetch per mount: the effect tracks no signals, so it never reruns.
    // The guard is cancelled on unmount, and a response that settles after
    // that is discarded instead of racing a disposed scope.
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    Effect::new(move || {
        let guard = guard.clone();
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_cars().await {
                Ok(batch) => {
                    if guard.is_live() {
                        cars.update(|s| s.set_top_cars(batch));
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("top cars fetch failed: {err}");
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let list = Signal::derive(move || top_cars.get().unwrap_or_default());
    let dots = Signal::derive(move || dot_count(list.with(Vec::len), mobile.get()));
    let pages = Signal::derive(move || page_count(list.with(Vec::len), per_page.get()));
    let show_empty = move || !loading.get() && cars.with(CarsState::is_empty);
    let show_carousel = move || !loading.get() && !cars.with(CarsState::is_empty);

    view! {
        <section class="top-cars">
            <h2 class="top-cars__title">"Explore Our Deals"</h2>
            <Show when=move || loading.get()>
                <div class="top-cars__loading">
                    <span class="top-cars__spinner" aria-label="Loading"></span>
                </div>
            </Show>
            <Show when=show_empty>
                <div class="top-cars__empty">"No Cars To Show!"</div>
            </Show>
            <Show when=show_carousel>
                <div class="top-cars__carousel">
                    <Carousel value=current cars=list per_page=per_page/>
                    <CarouselDots value=current count=dots pages=pages/>
                </div>
            </Show>
        </section>
    }
}
