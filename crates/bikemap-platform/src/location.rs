//! Device location capability
//!
//! Contract: ask for foreground permission, then take one best-effort fix.
//! There is no continuous tracking and no accuracy setting.

use std::fmt;
use std::str::FromStr;

use bikemap_core::prelude::*;
use bikemap_core::Coordinate;
use serde::{Deserialize, Serialize};

/// Outcome of the foreground location permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device location operations
///
/// The `Send` variant ([`LocationProvider`]) is what the controller spawns
/// tasks against; implement that one.
#[trait_variant::make(LocationProvider: Send)]
pub trait LocalLocationProvider {
    /// Whether this platform can provide a location at all
    fn is_supported(&self) -> bool;

    /// Request foreground location permission
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Take a single current-position fix
    async fn current_position(&self) -> Result<Coordinate>;
}

/// Run the full location flow: permission prompt, then a single fix.
///
/// A denied prompt yields [`Error::PermissionDenied`] without attempting a fix.
pub async fn locate<L>(provider: &L) -> Result<Coordinate>
where
    L: LocationProvider + Sync,
{
    if !LocationProvider::is_supported(provider) {
        return Err(Error::LocationUnsupported);
    }

    match LocationProvider::request_permission(provider).await? {
        PermissionStatus::Granted => {}
        PermissionStatus::Denied => {
            info!("Location permission denied");
            return Err(Error::PermissionDenied);
        }
    }

    let coordinate = LocationProvider::current_position(provider).await?;
    if !coordinate.is_valid() {
        return Err(Error::location_unavailable(format!(
            "provider returned an invalid fix ({})",
            coordinate
        )));
    }

    debug!("Location fix: {}", coordinate);
    Ok(coordinate)
}

// ─────────────────────────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────────────────────────

/// Grants permission and always reports the same coordinate.
///
/// Terminals have no GPS, so the "device" position comes from configuration.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn is_supported(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn current_position(&self) -> Result<Coordinate> {
        Ok(self.coordinate)
    }
}

/// A provider whose permission prompt is always declined
#[derive(Debug, Clone, Default)]
pub struct DeniedLocationProvider;

impl LocationProvider for DeniedLocationProvider {
    fn is_supported(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Denied)
    }

    async fn current_position(&self) -> Result<Coordinate> {
        Err(Error::PermissionDenied)
    }
}

/// A platform without location services (e.g. an emulator image)
#[derive(Debug, Clone, Default)]
pub struct UnsupportedLocationProvider;

impl LocationProvider for UnsupportedLocationProvider {
    fn is_supported(&self) -> bool {
        false
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Err(Error::LocationUnsupported)
    }

    async fn current_position(&self) -> Result<Coordinate> {
        Err(Error::LocationUnsupported)
    }
}

/// Which provider to build from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    #[default]
    Fixed,
    Denied,
    Unsupported,
}

impl FromStr for LocationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(LocationMode::Fixed),
            "denied" => Ok(LocationMode::Denied),
            "unsupported" => Ok(LocationMode::Unsupported),
            other => Err(Error::config(format!(
                "unknown location mode '{}' (expected fixed, denied or unsupported)",
                other
            ))),
        }
    }
}

impl fmt::Display for LocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationMode::Fixed => write!(f, "fixed"),
            LocationMode::Denied => write!(f, "denied"),
            LocationMode::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Provider selected at runtime from a [`LocationMode`]
#[derive(Debug, Clone)]
pub enum ConfiguredLocationProvider {
    Fixed(FixedLocationProvider),
    Denied(DeniedLocationProvider),
    Unsupported(UnsupportedLocationProvider),
}

impl ConfiguredLocationProvider {
    /// `coordinate` is only used in [`LocationMode::Fixed`]
    pub fn new(mode: LocationMode, coordinate: Coordinate) -> Self {
        match mode {
            LocationMode::Fixed => Self::Fixed(FixedLocationProvider::new(coordinate)),
            LocationMode::Denied => Self::Denied(DeniedLocationProvider),
            LocationMode::Unsupported => Self::Unsupported(UnsupportedLocationProvider),
        }
    }
}

impl LocationProvider for ConfiguredLocationProvider {
    fn is_supported(&self) -> bool {
        match self {
            Self::Fixed(p) => LocationProvider::is_supported(p),
            Self::Denied(p) => LocationProvider::is_supported(p),
            Self::Unsupported(p) => LocationProvider::is_supported(p),
        }
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        match self {
            Self::Fixed(p) => LocationProvider::request_permission(p).await,
            Self::Denied(p) => LocationProvider::request_permission(p).await,
            Self::Unsupported(p) => LocationProvider::request_permission(p).await,
        }
    }

    async fn current_position(&self) -> Result<Coordinate> {
        match self {
            Self::Fixed(p) => LocationProvider::current_position(p).await,
            Self::Denied(p) => LocationProvider::current_position(p).await,
            Self::Unsupported(p) => LocationProvider::current_position(p).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_fixed_provider_yields_fix() {
        let provider = FixedLocationProvider::new(Coordinate::new(25.03, 121.55));
        let fix = block_on(locate(&provider)).unwrap();
        assert_eq!(fix, Coordinate::new(25.03, 121.55));
    }

    #[test]
    fn test_denied_provider_yields_permission_denied() {
        let err = block_on(locate(&DeniedLocationProvider)).unwrap_err();
        assert!(matches!(err, Error::PermissionDenied));
    }

    #[test]
    fn test_unsupported_provider() {
        let provider = UnsupportedLocationProvider;
        assert!(!LocationProvider::is_supported(&provider));
        let err = block_on(locate(&provider)).unwrap_err();
        assert!(matches!(err, Error::LocationUnsupported));
    }

    #[test]
    fn test_invalid_fix_is_rejected() {
        let provider = FixedLocationProvider::new(Coordinate::new(f64::NAN, 121.55));
        let err = block_on(locate(&provider)).unwrap_err();
        assert!(matches!(err, Error::LocationUnavailable { .. }));
    }

    #[test]
    fn test_location_mode_from_str() {
        assert_eq!("fixed".parse::<LocationMode>().unwrap(), LocationMode::Fixed);
        assert_eq!(" Denied ".parse::<LocationMode>().unwrap(), LocationMode::Denied);
        assert_eq!(
            "UNSUPPORTED".parse::<LocationMode>().unwrap(),
            LocationMode::Unsupported
        );
        assert!("gps".parse::<LocationMode>().is_err());
    }

    #[test]
    fn test_location_mode_display_round_trips() {
        for mode in [
            LocationMode::Fixed,
            LocationMode::Denied,
            LocationMode::Unsupported,
        ] {
            assert_eq!(mode.to_string().parse::<LocationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_configured_provider_dispatch() {
        let here = Coordinate::new(25.0, 121.5);

        let fixed = ConfiguredLocationProvider::new(LocationMode::Fixed, here);
        assert_eq!(block_on(locate(&fixed)).unwrap(), here);

        let denied = ConfiguredLocationProvider::new(LocationMode::Denied, here);
        assert!(matches!(
            block_on(locate(&denied)),
            Err(Error::PermissionDenied)
        ));

        let unsupported = ConfiguredLocationProvider::new(LocationMode::Unsupported, here);
        assert!(!LocationProvider::is_supported(&unsupported));
    }
}
