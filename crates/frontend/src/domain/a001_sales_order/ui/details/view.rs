use super::view_model::{InvoiceFormToggle, SalesOrderDetailsModel};
use crate::domain::a002_invoice::ui::form::InvoiceForm;
use crate::shared::config::{use_display_config, DisplayConfig};
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::{format_currency, format_percent};
use crate::shared::ui::{InfoBanner, StatusBadge};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::domain::a002_invoice::draft::InvoiceDraft;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

/// Pre-formatted order line
struct OrderRow {
    product: String,
    color: String,
    size: String,
    quantity: u32,
    unit_price: String,
    total: String,
}

struct OrderSummary {
    title: String,
    customer: String,
    agency: String,
    created: String,
    approved: Option<String>,
    gps: String,
    notes: Option<String>,
    subtotal: String,
    discount_label: String,
    discount: String,
    total: String,
    invoiced: String,
    remaining: String,
    units: u32,
    rows: Vec<OrderRow>,
}

impl OrderSummary {
    fn new(order: &SalesOrder, config: &DisplayConfig) -> Self {
        let approved = order.approved_by.as_ref().map(|by| match &order.approved_at {
            Some(at) => format!("{} · {}", format_datetime(at, config), by),
            None => by.clone(),
        });
        Self {
            title: format!("Sales Order {}", order.order_number),
            customer: order.customer_name.clone(),
            agency: order.agency_id.clone(),
            created: format!(
                "{} · {}",
                format_datetime(&order.created_at, config),
                order.created_by
            ),
            approved,
            gps: order.gps_coordinates.display(),
            notes: order.notes.clone(),
            subtotal: format_currency(order.subtotal, config),
            discount_label: format!("Discount ({}):", format_percent(order.discount_percentage)),
            discount: format_currency(-order.discount_amount, config),
            total: format_currency(order.total, config),
            invoiced: format_currency(order.total_invoiced, config),
            remaining: format_currency(order.remaining_amount(), config),
            units: order.total_units(),
            rows: order
                .items
                .iter()
                .map(|item| OrderRow {
                    product: item.product_name.clone(),
                    color: item.color.clone(),
                    size: item.size.clone(),
                    quantity: item.quantity,
                    unit_price: format_currency(item.unit_price, config),
                    total: format_currency(item.total, config),
                })
                .collect(),
        }
    }
}

#[component]
pub fn SalesOrderDetails(
    /// User viewing the order
    user: User,
    order: SalesOrder,
    #[prop(into)] on_back: Callback<()>,
    #[prop(optional)] on_edit: Option<Callback<SalesOrder>>,
    /// Receives the draft from the invoice form before navigating back
    #[prop(optional)]
    on_create_invoice: Option<Callback<InvoiceDraft>>,
) -> impl IntoView {
    let form = InvoiceFormToggle::new();
    let order = StoredValue::new(order);
    log::debug!(
        "sales order {} opened by {}",
        order.with_value(|o| o.order_number.clone()),
        user.display_name()
    );

    let handle_submit = move |draft: InvoiceDraft| form.submit(draft, on_create_invoice, on_back);

    view! {
        {move || {
            if form.is_open() {
                view! {
                    <InvoiceForm
                        order=order.get_value()
                        on_submit=handle_submit
                        on_cancel=move |_| form.cancel()
                    />
                }
                .into_any()
            } else {
                render_details(order.get_value(), on_back, on_edit, form).into_any()
            }
        }}
    }
}

fn render_details(
    order: SalesOrder,
    on_back: Callback<()>,
    on_edit: Option<Callback<SalesOrder>>,
    form: InvoiceFormToggle,
) -> impl IntoView {
    let config = use_display_config();
    let model = SalesOrderDetailsModel::new(order, on_edit.is_some());
    let badges = model.badges();
    let banners = model.banners();
    let shows_edit = model.shows_edit();
    let shows_convert = model.shows_convert();
    let summary = OrderSummary::new(&model.order, &config);
    let OrderSummary {
        title,
        customer,
        agency,
        created,
        approved,
        gps,
        notes,
        subtotal,
        discount_label,
        discount,
        total,
        invoiced,
        remaining,
        units,
        rows,
    } = summary;
    let order = StoredValue::new(model.order);

    view! {
        <div id="a001_sales_order--detail" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Flex gap=FlexGap::Small>
                        {badges
                            .into_iter()
                            .map(|spec| view! { <StatusBadge spec=spec /> })
                            .collect_view()}
                    </Flex>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {shows_convert.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| form.open()
                            >
                                "Convert to Invoice"
                            </Button>
                        })}
                        {on_edit.filter(|_| shows_edit).map(|edit| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| edit.run(order.get_value())
                            >
                                "Edit"
                            </Button>
                        })}
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_back.run(())>
                            "← Back"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content" style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                {banners
                    .into_iter()
                    .map(|banner| view! {
                        <InfoBanner tone=banner.tone()>{banner.message()}</InfoBanner>
                    })
                    .collect_view()}

                <div style="display:grid;grid-template-columns:repeat(auto-fit,minmax(360px,1fr));gap:var(--spacing-lg);align-items:start;">
                    <Card>
                        <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                            <span class="form__label">"Customer:"</span>
                            <strong>{customer}</strong>

                            <span class="form__label">"Agency:"</span>
                            <span>{agency}</span>

                            <span class="form__label">"Created:"</span>
                            <span>{created}</span>

                            {approved.map(|approved| view! {
                                <span class="form__label">"Approved:"</span>
                                <span>{approved}</span>
                            })}

                            <span class="form__label">"GPS:"</span>
                            <code style="font-family:monospace;font-size:var(--font-size-sm);">{gps}</code>

                            {notes.map(|notes| view! {
                                <span class="form__label">"Notes:"</span>
                                <span style="white-space:pre-wrap;">{notes}</span>
                            })}
                        </div>
                    </Card>

                    <Card>
                        <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;font-variant-numeric:tabular-nums;">
                            <span class="form__label">"Subtotal:"</span>
                            <span>{subtotal}</span>

                            <span class="form__label">{discount_label}</span>
                            <span>{discount}</span>

                            <span class="form__label">"Total:"</span>
                            <strong style="font-size:var(--font-size-lg);">{total}</strong>

                            <span class="form__label">"Invoiced:"</span>
                            <span>{invoiced}</span>

                            <span class="form__label">"Remaining:"</span>
                            <strong>{remaining}</strong>
                        </div>
                    </Card>
                </div>

                <Card>
                    <div style="padding:var(--spacing-md);">
                        <h3 style="margin:0 0 var(--spacing-md) 0;font-size:var(--font-size-md);">
                            {format!("Items ({} units)", units)}
                        </h3>
                        <Table attr:style="width:100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Color"</TableHeaderCell>
                                    <TableHeaderCell>"Size"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Unit price"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.product}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.color}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.size}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.unit_price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{row.total}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </Card>
            </div>
        </div>
    }
}
