use crate::shared::ui::{BadgeSpec, StatusTone, Tone};
use contracts::domain::a001_sales_order::aggregate::{SalesOrder, SalesOrderStatus};
use contracts::domain::a002_invoice::draft::InvoiceDraft;
use leptos::prelude::*;

impl StatusTone for SalesOrderStatus {
    fn tone(&self) -> Tone {
        match self {
            SalesOrderStatus::Pending => Tone::Warning,
            SalesOrderStatus::Approved => Tone::Success,
            SalesOrderStatus::PartiallyInvoiced => Tone::Informative,
            SalesOrderStatus::Invoiced => Tone::Brand,
            SalesOrderStatus::Cancelled => Tone::Danger,
            SalesOrderStatus::Closed => Tone::Subtle,
        }
    }
}

pub const APPROVAL_REQUIRED: BadgeSpec = BadgeSpec::new("Approval Required", Tone::Warning);
pub const FULLY_INVOICED: BadgeSpec = BadgeSpec::new("Fully Invoiced", Tone::Success);

/// Informational notices above the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBanner {
    AwaitingApproval,
    FullyInvoiced,
}

impl OrderBanner {
    pub fn tone(&self) -> Tone {
        match self {
            OrderBanner::AwaitingApproval => Tone::Warning,
            OrderBanner::FullyInvoiced => Tone::Success,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OrderBanner::AwaitingApproval => {
                "This order is pending approval. It must be approved before it can be converted to an invoice."
            }
            OrderBanner::FullyInvoiced => "This order has been fully invoiced.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SalesOrderDetailsModel {
    pub order: SalesOrder,
    has_edit_handler: bool,
}

impl SalesOrderDetailsModel {
    pub fn new(order: SalesOrder, has_edit_handler: bool) -> Self {
        Self {
            order,
            has_edit_handler,
        }
    }

    /// Status badge followed by overlays
    pub fn badges(&self) -> Vec<BadgeSpec> {
        let mut badges = vec![self.order.status.badge()];
        if self.order.is_awaiting_approval() {
            badges.push(APPROVAL_REQUIRED);
        }
        if self.order.is_fully_invoiced() {
            badges.push(FULLY_INVOICED);
        }
        badges
    }

    pub fn banners(&self) -> Vec<OrderBanner> {
        let mut banners = Vec::new();
        if self.order.is_awaiting_approval() {
            banners.push(OrderBanner::AwaitingApproval);
        }
        if self.order.is_fully_invoiced() {
            banners.push(OrderBanner::FullyInvoiced);
        }
        banners
    }

    pub fn shows_edit(&self) -> bool {
        self.order.can_edit(self.has_edit_handler)
    }

    pub fn shows_convert(&self) -> bool {
        self.order.can_convert_to_invoice()
    }

    pub fn remaining(&self) -> f64 {
        self.order.remaining_amount()
    }
}

/// Switch between the order details and the invoice form
#[derive(Clone, Copy)]
pub struct InvoiceFormToggle {
    pub show_invoice_form: RwSignal<bool>,
}

impl InvoiceFormToggle {
    pub fn new() -> Self {
        Self {
            show_invoice_form: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.show_invoice_form.get()
    }

    pub fn open(&self) {
        log::debug!("convert to invoice: showing form");
        self.show_invoice_form.set(true);
    }

    pub fn cancel(&self) {
        log::debug!("invoice form cancelled");
        self.show_invoice_form.set(false);
    }

    /// Close the form, hand the draft over, then navigate back.
    /// The caller refreshes the order on the way back; nothing is refetched here.
    pub fn submit(
        &self,
        draft: InvoiceDraft,
        on_create_invoice: Option<Callback<InvoiceDraft>>,
        on_back: Callback<()>,
    ) {
        self.show_invoice_form.set(false);
        if let Some(cb) = on_create_invoice {
            cb.run(draft);
        }
        on_back.run(());
    }
}

impl Default for InvoiceFormToggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_sales_order::aggregate::SalesOrderLine;
    use contracts::domain::common::GpsCoordinates;
    use std::sync::{Arc, Mutex};

    fn order(status: SalesOrderStatus, total: f64, invoiced: f64) -> SalesOrder {
        SalesOrder {
            id: "so-1".into(),
            order_number: "SO-0001".into(),
            customer_name: "Almacenes Rivera".into(),
            agency_id: "ag-7".into(),
            status,
            requires_approval: false,
            subtotal: total,
            discount_percentage: 0.0,
            discount_amount: 0.0,
            total,
            total_invoiced: invoiced,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap(),
            created_by: "u-seller".into(),
            approved_by: None,
            approved_at: None,
            gps_coordinates: GpsCoordinates::default(),
            notes: None,
            items: vec![SalesOrderLine {
                id: "l1".into(),
                product_name: "Polo shirt".into(),
                color: "Blue".into(),
                size: "M".into(),
                quantity: 10,
                unit_price: total / 10.0,
                total,
            }],
        }
    }

    #[test]
    fn test_fully_invoiced_order_shows_badge_and_no_convert() {
        let model = SalesOrderDetailsModel::new(order(SalesOrderStatus::Invoiced, 1000.0, 1000.0), true);
        assert_eq!(
            model.badges(),
            vec![BadgeSpec::new("Invoiced", Tone::Brand), FULLY_INVOICED]
        );
        assert_eq!(model.banners(), vec![OrderBanner::FullyInvoiced]);
        assert!(!model.shows_convert());
        assert!(!model.shows_edit());
    }

    #[test]
    fn test_pending_order_requiring_approval_hides_edit() {
        let mut o = order(SalesOrderStatus::Pending, 500.0, 0.0);
        o.requires_approval = true;
        let model = SalesOrderDetailsModel::new(o, true);
        assert!(!model.shows_edit());
        assert!(!model.shows_convert());
        assert_eq!(
            model.badges(),
            vec![BadgeSpec::new("Pending", Tone::Warning), APPROVAL_REQUIRED]
        );
        assert_eq!(model.banners(), vec![OrderBanner::AwaitingApproval]);
    }

    #[test]
    fn test_pending_order_edit_depends_on_handler() {
        let o = order(SalesOrderStatus::Pending, 500.0, 0.0);
        assert!(SalesOrderDetailsModel::new(o.clone(), true).shows_edit());
        assert!(!SalesOrderDetailsModel::new(o, false).shows_edit());
    }

    #[test]
    fn test_approved_order_with_remaining_amount_is_convertible() {
        let model = SalesOrderDetailsModel::new(order(SalesOrderStatus::Approved, 1000.0, 400.0), false);
        assert_eq!(model.remaining(), 600.0);
        assert!(model.shows_convert());
        assert!(model.banners().is_empty());
        assert_eq!(model.badges().len(), 1);
    }

    #[test]
    fn test_every_status_has_a_badge_label() {
        let expected = [
            (SalesOrderStatus::Pending, "Pending"),
            (SalesOrderStatus::Approved, "Approved"),
            (SalesOrderStatus::PartiallyInvoiced, "Partially Invoiced"),
            (SalesOrderStatus::Invoiced, "Invoiced"),
            (SalesOrderStatus::Cancelled, "Cancelled"),
            (SalesOrderStatus::Closed, "Closed"),
        ];
        for (status, label) in expected {
            assert_eq!(status.badge().label, label);
        }
    }

    fn recorder() -> (
        Arc<Mutex<Vec<String>>>,
        Callback<InvoiceDraft>,
        Callback<()>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let create_log = Arc::clone(&events);
        let back_log = Arc::clone(&events);
        let on_create = Callback::new(move |draft: InvoiceDraft| {
            create_log
                .lock()
                .unwrap()
                .push(format!("create {} {}", draft.order_number, draft.lines.len()));
        });
        let on_back = Callback::new(move |_: ()| {
            back_log.lock().unwrap().push("back".to_string());
        });
        (events, on_create, on_back)
    }

    #[test]
    fn test_submit_closes_form_forwards_draft_then_goes_back() {
        let owner = Owner::new();
        owner.with(|| {
            let toggle = InvoiceFormToggle::new();
            let (events, on_create, on_back) = recorder();

            toggle.open();
            assert!(toggle.show_invoice_form.get_untracked());

            let o = order(SalesOrderStatus::Approved, 1000.0, 400.0);
            toggle.submit(InvoiceDraft::from_order(&o), Some(on_create), on_back);

            assert!(!toggle.show_invoice_form.get_untracked());
            assert_eq!(
                *events.lock().unwrap(),
                vec!["create SO-0001 1".to_string(), "back".to_string()]
            );
        });
    }

    #[test]
    fn test_submit_without_create_handler_still_goes_back() {
        let owner = Owner::new();
        owner.with(|| {
            let toggle = InvoiceFormToggle::new();
            let (events, _, on_back) = recorder();

            toggle.open();
            let o = order(SalesOrderStatus::Approved, 1000.0, 0.0);
            toggle.submit(InvoiceDraft::from_order(&o), None, on_back);

            assert!(!toggle.show_invoice_form.get_untracked());
            assert_eq!(*events.lock().unwrap(), vec!["back".to_string()]);
        });
    }

    #[test]
    fn test_cancel_closes_form_without_callbacks() {
        let owner = Owner::new();
        owner.with(|| {
            let toggle = InvoiceFormToggle::new();
            toggle.open();
            toggle.cancel();
            assert!(!toggle.show_invoice_form.get_untracked());
        });
    }
}
