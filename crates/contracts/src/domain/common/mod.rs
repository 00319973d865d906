//! Common types and traits shared by sales documents

pub mod document_status;
pub mod gps;
pub mod money;

// Re-exports
pub use document_status::{DocumentStatus, ParseStatusError};
pub use gps::GpsCoordinates;
pub use money::{money_eq, MONEY_EPSILON};
