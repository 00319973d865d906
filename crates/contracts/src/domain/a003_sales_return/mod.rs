pub mod actions;
pub mod aggregate;
