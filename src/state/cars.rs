#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use crate::net::types::CarListing;

/// Shared car-listings state, written once per successful fetch.
///
/// `None` means no fetch has completed yet; `Some` with an empty vector means
/// a fetch completed and the server returned zero listings. Components must
/// not collapse the two: only the latter is a confirmed "no results".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarsState {
    top_cars: Option<Vec<CarListing>>,
}

impl CarsState {
    /// Store a fetched listings batch, replacing any previous one.
    ///
    /// An empty batch is stored as-is: "loaded with zero results" is a real
    /// state, distinct from "never loaded".
    pub fn set_top_cars(&mut self, cars: Vec<CarListing>) {
        self.top_cars = Some(cars);
    }

    /// The last successfully fetched listings, in server response order.
    pub fn top_cars(&self) -> Option<&[CarListing]> {
        self.top_cars.as_deref()
    }

    /// True once any fetch has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.top_cars.is_some()
    }

    /// True when there is nothing to show — unloaded or loaded-empty.
    pub fn is_empty(&self) -> bool {
        self.top_cars.as_ref().is_none_or(Vec::is_empty)
    }
}
