pub mod compliance_check;
pub mod station_status;
