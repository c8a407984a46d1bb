//! Display card for a single car listing.

use leptos::prelude::*;

use crate::net::types::GearType;

/// A self-contained card showing one car: thumbnail, name, pricing, and the
/// mileage/gear/fuel detail row. Purely presentational; the parent maps
/// listing fields onto these props.
#[component]
pub fn CarCard(
    name: String,
    mileage: String,
    thumbnail_src: String,
    daily_price: f64,
    monthly_price: f64,
    gear_type: GearType,
    fuel_type: String,
) -> impl IntoView {
    view! {
        <div class="car-card">
            <img class="car-card__thumbnail" src=thumbnail_src alt=name.clone()/>
            <span class="car-card__name">{name}</span>
            <div class="car-card__pricing">
                <span class="car-card__daily">{format!("${daily_price}/Day")}</span>
                <span class="car-card__monthly">{format!("${monthly_price}/Month")}</span>
            </div>
            <div class="car-card__details">
                <span class="car-card__mileage">{mileage}</span>
                <span class="car-card__separator">"|"</span>
                <span class="car-card__gear">{gear_type.label()}</span>
                <span class="car-card__separator">"|"</span>
                <span class="car-card__fuel">{fuel_type}</span>
            </div>
        </div>
    }
}
