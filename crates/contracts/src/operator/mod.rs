//! Field vocabulary for the station-operator endpoints.

pub mod compliance;
pub mod station_status;
