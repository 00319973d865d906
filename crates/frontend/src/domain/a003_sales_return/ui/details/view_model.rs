use crate::shared::ui::{BadgeSpec, StatusTone, Tone};
use chrono::{DateTime, Utc};
use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceLine};
use contracts::domain::a003_sales_return::actions::{
    available_actions, ReturnAction, ReturnStatusUpdate,
};
use contracts::domain::a003_sales_return::aggregate::{Return, ReturnStatus};
use contracts::system::users::User;

impl StatusTone for ReturnStatus {
    fn tone(&self) -> Tone {
        match self {
            ReturnStatus::Pending => Tone::Warning,
            ReturnStatus::Approved => Tone::Success,
            ReturnStatus::Processed => Tone::Informative,
            ReturnStatus::Rejected => Tone::Danger,
        }
    }
}

/// Invoice line with the quantity returned against it
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLineView {
    pub line: InvoiceLine,
    pub returned: Option<u32>,
}

impl InvoiceLineView {
    pub fn annotation(&self) -> Option<String> {
        self.returned.map(|qty| format!("(Returned: {})", qty))
    }
}

#[derive(Debug, Clone)]
pub struct ReturnDetailsModel {
    pub sales_return: Return,
    pub invoice: Option<Invoice>,
    pub user: User,
}

impl ReturnDetailsModel {
    pub fn new(sales_return: Return, invoice: Option<Invoice>, user: User) -> Self {
        Self {
            sales_return,
            invoice,
            user,
        }
    }

    pub fn badge(&self) -> BadgeSpec {
        self.sales_return.status.badge()
    }

    pub fn actions(&self) -> Vec<ReturnAction> {
        available_actions(self.sales_return.status, self.user.role)
    }

    /// Arguments for `on_update` when `action` is clicked at `now`
    pub fn update_for(
        &self,
        action: ReturnAction,
        now: DateTime<Utc>,
    ) -> (String, ReturnStatusUpdate) {
        (
            self.sales_return.id.clone(),
            ReturnStatusUpdate::for_action(action, &self.user, now),
        )
    }

    /// Invoice lines in invoice order; empty when the invoice is unavailable
    pub fn invoice_lines(&self) -> Vec<InvoiceLineView> {
        self.invoice
            .as_ref()
            .map(|invoice| {
                invoice
                    .items
                    .iter()
                    .map(|line| InvoiceLineView {
                        line: line.clone(),
                        returned: self.sales_return.returned_quantity_for(&line.id),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn shows_inconsistency_note(&self) -> bool {
        self.sales_return.has_inconsistencies()
    }

    /// Warning text when the return's own lines and totals disagree
    pub fn inconsistency_note(&self) -> Option<&'static str> {
        self.shows_inconsistency_note().then_some(INCONSISTENCY_NOTE)
    }
}

pub const INCONSISTENCY_NOTE: &str = "Return item totals or quantities are inconsistent.";
