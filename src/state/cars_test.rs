use super::*;
use crate::net::types::GearType;

fn car(name: &str) -> CarListing {
    CarListing {
        name: name.to_owned(),
        mileage: "10k".to_owned(),
        thumbnail_url: "https://cars.example/a.jpg".to_owned(),
        daily_price: 70.0,
        monthly_price: 1600.0,
        gear_type: GearType::Auto,
        fuel_type: "Petrol".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn cars_state_starts_unloaded() {
    let state = CarsState::default();
    assert!(!state.is_loaded());
    assert!(state.is_empty());
    assert!(state.top_cars().is_none());
}

// =============================================================
// set_top_cars
// =============================================================

#[test]
fn set_top_cars_keeps_response_order() {
    let mut state = CarsState::default();
    state.set_top_cars(vec![car("a"), car("b"), car("c")]);
    let names: Vec<_> = state
        .top_cars()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn empty_batch_is_loaded_but_empty() {
    let mut state = CarsState::default();
    state.set_top_cars(Vec::new());
    assert!(state.is_loaded());
    assert!(state.is_empty());
    assert_eq!(state.top_cars(), Some(&[][..]));
}

#[test]
fn later_batch_replaces_earlier_one() {
    let mut state = CarsState::default();
    state.set_top_cars(vec![car("a")]);
    state.set_top_cars(vec![car("b"), car("c")]);
    assert_eq!(state.top_cars().unwrap().len(), 2);
    assert_eq!(state.top_cars().unwrap()[0].name, "b");
}
