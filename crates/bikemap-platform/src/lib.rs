//! # bikemap-platform - Platform Capabilities
//!
//! The services the map controller consumes but does not own:
//!
//! - [`LocationProvider`] - foreground permission prompt plus a single position fix
//! - [`StationFeed`] - the remote bike-availability feed
//!
//! Both are async traits generated with `trait-variant`, so the controller can
//! be driven by test doubles (see `test_utils`, behind the `test-helpers`
//! feature).

pub mod feed;
pub mod location;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use feed::{HttpStationFeed, LocalStationFeed, StationFeed, DEFAULT_FEED_TIMEOUT, UBIKE_URL};
pub use location::{
    locate, ConfiguredLocationProvider, DeniedLocationProvider, FixedLocationProvider,
    LocalLocationProvider, LocationMode, LocationProvider, PermissionStatus,
    UnsupportedLocationProvider,
};
