//! Return Details UI Module
//!
//! Structure:
//! - view_model.rs: derived state (badge, actions, invoice annotations)
//! - page.rs: component rendering the return next to its invoice

mod page;
mod view_model;

pub use page::ReturnDetails;
pub use view_model::{InvoiceLineView, ReturnDetailsModel};
