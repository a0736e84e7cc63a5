//! Shared wire types between the FuelLens operator console and the server.

pub mod envelope;
pub mod operator;

pub use envelope::StatusEnvelope;
