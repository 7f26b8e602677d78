//! Geolocation module
//!
//! Abstraction over the device position source used by the location step
//! of the report wizard.

mod provider;

pub use provider::{Coordinates, GeolocationError, GeolocationProvider};
