//! Demo shell: mounts the document views over bundled fixture records and
//! plays the parent's role (keeps the records, receives callbacks).

use crate::domain::a001_sales_order::ui::details::SalesOrderDetails;
use crate::domain::a003_sales_return::ui::details::ReturnDetails;
use crate::shared::config::{provide_display_config, DisplayConfig};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::domain::a002_invoice::aggregate::Invoice;
use contracts::domain::a002_invoice::draft::InvoiceDraft;
use contracts::domain::a003_sales_return::actions::ReturnStatusUpdate;
use contracts::domain::a003_sales_return::aggregate::Return;
use contracts::system::users::User;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;

fn load_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("{}: {}", name, e))
}

#[derive(Debug, Clone)]
struct DemoData {
    user: User,
    sales_return: Return,
    invoice: Invoice,
    order: SalesOrder,
}

impl DemoData {
    fn load() -> Result<Self, String> {
        Ok(Self {
            user: load_fixture("user.json", include_str!("../fixtures/user.json"))?,
            sales_return: load_fixture("return.json", include_str!("../fixtures/return.json"))?,
            invoice: load_fixture("invoice.json", include_str!("../fixtures/invoice.json"))?,
            order: load_fixture(
                "sales_order.json",
                include_str!("../fixtures/sales_order.json"),
            )?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoView {
    Home,
    Return,
    SalesOrder,
}

#[component]
pub fn App() -> impl IntoView {
    // Display settings for every document view below
    provide_display_config(DisplayConfig::default().with_currency("COP"));

    match DemoData::load() {
        Ok(data) => view! { <DemoWorkspace data=data /> }.into_any(),
        Err(e) => {
            log::error!("failed to load demo data: {}", e);
            view! {
                <div class="error" style="padding:var(--spacing-lg);color:var(--color-error);">
                    <strong>"Error: "</strong>
                    {e}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn DemoWorkspace(data: DemoData) -> impl IntoView {
    let DemoData {
        user,
        sales_return,
        invoice,
        order,
    } = data;
    let user = StoredValue::new(user);
    let invoice = StoredValue::new(invoice);
    let sales_return = RwSignal::new(sales_return);
    let order = RwSignal::new(order);
    let (current, set_current) = signal(DemoView::Home);

    let on_back = Callback::new(move |_: ()| set_current.set(DemoView::Home));

    let on_update = Callback::new(move |(id, update): (String, ReturnStatusUpdate)| {
        log::info!("parent received update for return {}: {:?}", id, update);
        sales_return.update(|r| {
            if r.id == id {
                update.apply_to(r);
            }
        });
    });

    let on_edit = Callback::new(move |o: SalesOrder| {
        log::info!("parent asked to edit order {}", o.order_number);
    });

    let on_create_invoice = Callback::new(move |draft: InvoiceDraft| {
        let total = draft.total();
        log::info!(
            "parent received invoice draft for {}: total {:.2}",
            draft.order_number,
            total
        );
        order.update(|o| o.record_invoice(total));
    });

    move || match current.get() {
        DemoView::Home => view! {
            <div class="page" style="padding:var(--spacing-lg);">
                <h1 class="page__title">"Sales documents"</h1>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_current.set(DemoView::Return)
                    >
                        {move || format!("Return {}", sales_return.with(|r| r.id.clone()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_current.set(DemoView::SalesOrder)
                    >
                        {move || format!("Sales order {}", order.with(|o| o.order_number.clone()))}
                    </Button>
                </Flex>
            </div>
        }
        .into_any(),
        DemoView::Return => view! {
            <ReturnDetails
                sales_return=sales_return.get()
                invoice=Some(invoice.get_value())
                on_back=on_back
                on_update=on_update
                user=user.get_value()
            />
        }
        .into_any(),
        DemoView::SalesOrder => view! {
            <SalesOrderDetails
                user=user.get_value()
                order=order.get()
                on_back=on_back
                on_edit=on_edit
                on_create_invoice=on_create_invoice
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_order::aggregate::SalesOrderStatus;

    #[test]
    fn test_fixtures_load_and_agree() {
        let data = DemoData::load().unwrap();
        assert_eq!(data.sales_return.invoice_id, data.invoice.id);
        assert!(data.sales_return.totals_reconcile());
        for line in &data.sales_return.items {
            assert!(data.invoice.find_line(&line.invoice_item_id).is_some(), "{}", line.id);
        }
        assert!(data.user.is_superuser());
        assert!(data.order.can_convert_to_invoice());
    }

    #[test]
    fn test_invoicing_the_fixture_order_reaches_fully_invoiced() {
        let mut order = DemoData::load().unwrap().order;
        let seeded = InvoiceDraft::from_order(&order);
        assert_eq!(seeded.validate(order.remaining_amount()), Ok(()));

        order.record_invoice(100.0);
        assert_eq!(order.status, SalesOrderStatus::PartiallyInvoiced);

        order.record_invoice(order.remaining_amount());
        assert_eq!(order.status, SalesOrderStatus::Invoiced);
        assert!(order.is_fully_invoiced());
    }
}
