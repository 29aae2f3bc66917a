//! Test doubles for platform capabilities
//!
//! Scripted providers record how often they were called so controller tests
//! can assert that an operation was (or was not) launched.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bikemap_core::{BikeStation, Coordinate, Error, Result};

use crate::feed::StationFeed;
use crate::location::{LocationProvider, PermissionStatus};

/// Creates a bike station with feed-style string coordinates.
pub fn test_station(sno: &str, name: &str, sbi: u32, tot: u32, lat: &str, lng: &str) -> BikeStation {
    BikeStation {
        sno: sno.to_string(),
        sna: name.to_string(),
        ar: format!("{} address", name),
        sbi,
        tot,
        lat: lat.to_string(),
        lng: lng.to_string(),
    }
}

/// Location provider with a fixed script and a call counter
#[derive(Debug, Clone)]
pub struct ScriptedLocationProvider {
    supported: bool,
    permission: PermissionStatus,
    fix: Option<Coordinate>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLocationProvider {
    /// Grants permission and reports `fix`
    pub fn granted(fix: Coordinate) -> Self {
        Self {
            supported: true,
            permission: PermissionStatus::Granted,
            fix: Some(fix),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Declines the permission prompt
    pub fn denied() -> Self {
        Self {
            supported: true,
            permission: PermissionStatus::Denied,
            fix: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Grants permission but fails to produce a fix
    pub fn no_fix() -> Self {
        Self {
            supported: true,
            permission: PermissionStatus::Granted,
            fix: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Reports the platform as unsupported
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::denied()
        }
    }

    /// Number of permission prompts issued so far
    pub fn permission_requests(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LocationProvider for ScriptedLocationProvider {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.permission)
    }

    async fn current_position(&self) -> Result<Coordinate> {
        self.fix
            .ok_or_else(|| Error::location_unavailable("no fix scripted"))
    }
}

/// Station feed returning a canned result
#[derive(Debug, Clone)]
pub struct StaticStationFeed {
    result: std::result::Result<Vec<BikeStation>, String>,
    calls: Arc<AtomicUsize>,
}

impl StaticStationFeed {
    pub fn with_stations(stations: Vec<BikeStation>) -> Self {
        Self {
            result: Ok(stations),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches issued so far
    pub fn fetches(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StationFeed for StaticStationFeed {
    fn endpoint(&self) -> &str {
        "static://stations"
    }

    async fn fetch_stations(&self) -> Result<Vec<BikeStation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(Error::feed)
    }
}
