//! Reusable UI components.

pub mod car_card;
pub mod carousel;
pub mod top_cars;
