//! Invoice draft built from a sales order before it is handed to the caller
//! for persistence.

use crate::domain::a001_sales_order::aggregate::SalesOrder;
use crate::domain::common::MONEY_EPSILON;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvoiceDraftError {
    #[error("Invoice must contain at least one item with quantity above zero")]
    Empty,
    #[error("{product}: quantity {requested} exceeds ordered quantity {ordered}")]
    QuantityExceedsOrder {
        product: String,
        requested: u32,
        ordered: u32,
    },
    #[error("Invoice total {total:.2} exceeds remaining order amount {remaining:.2}")]
    ExceedsRemaining { total: f64, remaining: f64 },
    #[error("Unknown order line: {0}")]
    UnknownLine(String),
}

/// Строка черновика счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraftLine {
    /// ID строки заказа
    pub order_line_id: String,
    pub product_name: String,
    pub color: String,
    pub size: String,
    /// Количество в заказе (верхняя граница)
    pub ordered_quantity: u32,
    /// Количество к выставлению
    pub quantity: u32,
    pub unit_price: f64,
}

impl InvoiceDraftLine {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Черновик счёта по заказу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub sales_order_id: String,
    pub order_number: String,
    pub customer_name: String,
    pub discount_percentage: f64,
    pub lines: Vec<InvoiceDraftLine>,
}

impl InvoiceDraft {
    /// Черновик по строкам заказа.
    ///
    /// Полное количество по каждой строке, если итог укладывается в остаток
    /// заказа; иначе количества пропорционально уменьшаются (с округлением вниз),
    /// чтобы форма открывалась с допустимым черновиком.
    pub fn from_order(order: &SalesOrder) -> Self {
        let mut draft = Self::full_order(order);
        let full_total = draft.total();
        let remaining = order.remaining_amount().max(0.0);
        if full_total > remaining + MONEY_EPSILON {
            let ratio = remaining / full_total;
            for line in &mut draft.lines {
                line.quantity = (line.ordered_quantity as f64 * ratio).floor() as u32;
            }
        }
        draft
    }

    fn full_order(order: &SalesOrder) -> Self {
        Self {
            sales_order_id: order.id.clone(),
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            discount_percentage: order.discount_percentage,
            lines: order
                .items
                .iter()
                .map(|item| InvoiceDraftLine {
                    order_line_id: item.id.clone(),
                    product_name: item.product_name.clone(),
                    color: item.color.clone(),
                    size: item.size.clone(),
                    ordered_quantity: item.quantity,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }

    pub fn set_quantity(&mut self, order_line_id: &str, quantity: u32) -> Result<(), InvoiceDraftError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.order_line_id == order_line_id)
            .ok_or_else(|| InvoiceDraftError::UnknownLine(order_line_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(InvoiceDraftLine::line_total).sum()
    }

    pub fn discount_amount(&self) -> f64 {
        self.subtotal() * self.discount_percentage / 100.0
    }

    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount_amount()
    }

    /// Проверка перед отправкой; `remaining` — остаток заказа к выставлению
    pub fn validate(&self, remaining: f64) -> Result<(), InvoiceDraftError> {
        if self.lines.iter().all(|l| l.quantity == 0) {
            return Err(InvoiceDraftError::Empty);
        }
        if let Some(line) = self.lines.iter().find(|l| l.quantity > l.ordered_quantity) {
            return Err(InvoiceDraftError::QuantityExceedsOrder {
                product: line.product_name.clone(),
                requested: line.quantity,
                ordered: line.ordered_quantity,
            });
        }
        let total = self.total();
        if total > remaining + MONEY_EPSILON {
            return Err(InvoiceDraftError::ExceedsRemaining { total, remaining });
        }
        Ok(())
    }

    /// Черновик для отправки: без строк с нулевым количеством
    pub fn into_submission(mut self) -> Self {
        self.lines.retain(|l| l.quantity > 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_order::aggregate::tests::order;
    use crate::domain::a001_sales_order::aggregate::SalesOrderStatus;

    #[test]
    fn test_draft_is_seeded_from_order_lines() {
        let o = order(SalesOrderStatus::Approved, 1000.0, 0.0);
        let draft = InvoiceDraft::from_order(&o);
        assert_eq!(draft.sales_order_id, "so-1");
        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].quantity, 10);
        assert_eq!(draft.subtotal(), 1000.0);
        assert_eq!(draft.validate(o.remaining_amount()), Ok(()));
    }

    #[test]
    fn test_discount_applies_to_subtotal() {
        let mut o = order(SalesOrderStatus::Approved, 1000.0, 0.0);
        o.discount_percentage = 10.0;
        let draft = InvoiceDraft::from_order(&o);
        assert!((draft.discount_amount() - 100.0).abs() < 1e-9);
        assert!((draft.total() - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_partially_invoiced_order_seeds_within_remaining() {
        let o = order(SalesOrderStatus::PartiallyInvoiced, 1000.0, 400.0);
        let draft = InvoiceDraft::from_order(&o);
        assert_eq!(draft.validate(o.remaining_amount()), Ok(()));
        assert!(draft.total() > 0.0);
        assert!(draft.total() <= o.remaining_amount() + MONEY_EPSILON);
        for line in &draft.lines {
            assert!(line.quantity <= line.ordered_quantity);
        }
    }

    #[test]
    fn test_total_above_remaining_is_rejected() {
        let o = order(SalesOrderStatus::PartiallyInvoiced, 1000.0, 400.0);
        let mut draft = InvoiceDraft::from_order(&o);
        draft.set_quantity("l1", 10).unwrap();
        draft.set_quantity("l2", 10).unwrap();
        assert!(matches!(
            draft.validate(o.remaining_amount()),
            Err(InvoiceDraftError::ExceedsRemaining { .. })
        ));

        draft.set_quantity("l2", 2).unwrap();
        assert_eq!(draft.total(), 600.0);
        assert_eq!(draft.validate(o.remaining_amount()), Ok(()));
    }

    #[test]
    fn test_empty_and_over_ordered_drafts_are_rejected() {
        let o = order(SalesOrderStatus::Approved, 1000.0, 0.0);
        let mut draft = InvoiceDraft::from_order(&o);
        draft.set_quantity("l1", 0).unwrap();
        draft.set_quantity("l2", 0).unwrap();
        assert_eq!(draft.validate(1000.0), Err(InvoiceDraftError::Empty));

        draft.set_quantity("l1", 11).unwrap();
        let err = draft.validate(10_000.0).unwrap_err();
        assert_eq!(err.to_string(), "Polo shirt: quantity 11 exceeds ordered quantity 10");

        assert_eq!(
            draft.set_quantity("missing", 1),
            Err(InvoiceDraftError::UnknownLine("missing".into()))
        );
    }

    #[test]
    fn test_submission_drops_zero_lines() {
        let o = order(SalesOrderStatus::Approved, 1000.0, 0.0);
        let mut draft = InvoiceDraft::from_order(&o);
        draft.set_quantity("l2", 0).unwrap();
        let submitted = draft.into_submission();
        assert_eq!(submitted.lines.len(), 1);
        assert_eq!(submitted.lines[0].order_line_id, "l1");
    }
}
