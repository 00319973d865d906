pub mod config;
pub mod date_utils;
pub mod number_format;
pub mod ui;
