pub mod banner;
pub mod status_badge;

pub use banner::InfoBanner;
pub use status_badge::{BadgeSpec, StatusBadge, StatusTone, Tone};
