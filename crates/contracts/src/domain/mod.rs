pub mod a001_sales_order;
pub mod a002_invoice;
pub mod a003_sales_return;
pub mod common;
