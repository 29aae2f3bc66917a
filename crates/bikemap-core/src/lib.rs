//! # bikemap-core - Core Domain Types
//!
//! Foundation crate for bikemap. Provides the map and station domain types,
//! the bundled static datasets, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, dirs and the tracing stack).
//!
//! ## Public API
//!
//! ### Map Types (`types`)
//! - [`Coordinate`] - A latitude/longitude pair
//! - [`Region`] - The visible map viewport (center + span)
//! - [`UserMarker`] - The single point representing the user
//!
//! ### Stations (`station`)
//! - [`MetroStation`] - Immutable metro station record, keyed by `id + line`
//! - [`BikeStation`] - Bike-share station record as served by the open-data feed
//! - [`Proportion`] - Occupied/available split of a bike station's docks
//!
//! ### Datasets (`dataset`)
//! - [`Datasets`] - The metro and bike collections shipped with the binary
//! - [`parse_metro_stations()`], [`parse_bike_stations()`] - JSON loaders
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bikemap_core::prelude::*;
//! ```

pub mod dataset;
pub mod error;
pub mod logging;
pub mod station;
pub mod types;

/// Prelude for common imports used throughout all bikemap crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use dataset::{parse_bike_stations, parse_metro_stations, Datasets};
pub use error::{Error, Result};
pub use station::{BikeStation, MetroStation, Proportion};
pub use types::{
    Coordinate, Region, UserMarker, DEFAULT_LATITUDE, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE,
    DEFAULT_LONGITUDE_DELTA, MAX_REGION_DELTA, MIN_REGION_DELTA, REGION_CHANGE_THRESHOLD,
};
