//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Each domain struct is provided as an `RwSignal` context
//! by the root `App` and injected where needed, which keeps the store
//! testable without a browser.

pub mod cars;
