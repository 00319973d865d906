use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::domain::a002_invoice::draft::{InvoiceDraft, InvoiceDraftError};
use leptos::prelude::*;

/// Quantity typed by the user; anything that is not a non-negative integer counts as 0
pub fn parse_quantity(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(0)
}

/// ViewModel for the invoice form
#[derive(Clone, Copy)]
pub struct InvoiceFormViewModel {
    pub draft: RwSignal<InvoiceDraft>,
    /// Amount still open on the order
    pub remaining: f64,
}

impl InvoiceFormViewModel {
    pub fn new(order: &SalesOrder) -> Self {
        Self {
            draft: RwSignal::new(InvoiceDraft::from_order(order)),
            remaining: order.remaining_amount(),
        }
    }

    pub fn quantity_of(&self, order_line_id: &str) -> u32 {
        self.draft.with(|d| {
            d.lines
                .iter()
                .find(|l| l.order_line_id == order_line_id)
                .map(|l| l.quantity)
                .unwrap_or(0)
        })
    }

    pub fn line_total(&self, order_line_id: &str) -> f64 {
        self.draft.with(|d| {
            d.lines
                .iter()
                .find(|l| l.order_line_id == order_line_id)
                .map(|l| l.line_total())
                .unwrap_or(0.0)
        })
    }

    pub fn set_quantity_input(&self, order_line_id: &str, input: &str) {
        let quantity = parse_quantity(input);
        self.draft.update(|d| {
            if let Err(e) = d.set_quantity(order_line_id, quantity) {
                log::warn!("invoice form: {}", e);
            }
        });
    }

    pub fn validation(&self) -> Result<(), InvoiceDraftError> {
        let remaining = self.remaining;
        self.draft.with(|d| d.validate(remaining))
    }

    /// Validate and hand the draft to `on_submit`
    pub fn submit_command(&self, on_submit: Callback<InvoiceDraft>) {
        if let Err(e) = self.validation() {
            log::warn!("invoice form rejected: {}", e);
            return;
        }
        let draft = self.draft.get_untracked().into_submission();
        log::info!(
            "invoice draft for order {}: {} line(s), total {:.2}",
            draft.order_number,
            draft.lines.len(),
            draft.total()
        );
        on_submit.run(draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("2.5"), 0);
        assert_eq!(parse_quantity("abc"), 0);
    }
}
