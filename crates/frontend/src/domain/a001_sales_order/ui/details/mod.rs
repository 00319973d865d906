//! Sales Order Details UI Module
//!
//! - view_model.rs: badges, banners and button visibility derived from the order
//! - view.rs: component; swaps to the invoice form while converting

mod view;
mod view_model;

pub use view::SalesOrderDetails;
pub use view_model::{InvoiceFormToggle, OrderBanner, SalesOrderDetailsModel};
