//! Shared contracts for the sales documents UI: domain records, status
//! enums and the rules the views derive from them.

pub mod domain;
pub mod system;
