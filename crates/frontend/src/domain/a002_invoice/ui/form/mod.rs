//! Invoice creation form, opened from a sales order.
//!
//! Simplified MVVM:
//! - view_model.rs: draft state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::InvoiceForm;
pub use view_model::{parse_quantity, InvoiceFormViewModel};
