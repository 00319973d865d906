//! Return Details - main component
//!
//! Left: the return header and its items. Right: the originating invoice
//! with returned quantities marked on matching lines.

use super::view_model::ReturnDetailsModel;
use crate::shared::config::{use_display_config, DisplayConfig};
use crate::shared::date_utils::{format_datetime, format_datetime_opt, EMPTY};
use crate::shared::number_format::format_currency;
use crate::shared::ui::{InfoBanner, StatusBadge, Tone};
use chrono::Utc;
use contracts::domain::a002_invoice::aggregate::Invoice;
use contracts::domain::a003_sales_return::actions::{ReturnAction, ReturnStatusUpdate};
use contracts::domain::a003_sales_return::aggregate::Return;
use contracts::domain::common::DocumentStatus;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

/// Pre-formatted return line
struct ReturnRow {
    product: String,
    reason: Option<String>,
    color_size: String,
    unit_price: String,
    quantity: String,
    exceeds_original: bool,
    total: String,
}

/// Pre-formatted invoice line
struct InvoiceRow {
    product: String,
    color_size: String,
    quantity: u32,
    annotation: Option<String>,
    unit_price: String,
    total: String,
}

struct InvoiceHeader {
    title: String,
    date: String,
    subtotal: String,
    discount: String,
    total: String,
    gps: String,
}

fn return_rows(r: &Return, config: &DisplayConfig) -> Vec<ReturnRow> {
    r.items
        .iter()
        .map(|item| ReturnRow {
            product: item.product_name.clone(),
            reason: item.reason.clone(),
            color_size: format!("{} / {}", item.color, item.size),
            unit_price: format_currency(item.unit_price, config),
            quantity: format!("{} of {}", item.quantity_returned, item.original_quantity),
            exceeds_original: item.exceeds_original(),
            total: format_currency(-item.total, config),
        })
        .collect()
}

fn invoice_view_data(
    model: &ReturnDetailsModel,
    config: &DisplayConfig,
) -> Option<(InvoiceHeader, Vec<InvoiceRow>)> {
    let invoice: &Invoice = model.invoice.as_ref()?;
    let header = InvoiceHeader {
        title: format!("Original invoice {}", invoice.display_number()),
        date: format_datetime(&invoice.created_at, config),
        subtotal: format_currency(invoice.subtotal, config),
        discount: format_currency(invoice.discount_amount, config),
        total: format_currency(invoice.total, config),
        gps: invoice.gps_coordinates.display(),
    };
    let rows = model
        .invoice_lines()
        .into_iter()
        .map(|row| InvoiceRow {
            annotation: row.annotation(),
            product: row.line.product_name,
            color_size: format!("{} / {}", row.line.color, row.line.size),
            quantity: row.line.quantity,
            unit_price: format_currency(row.line.unit_price, config),
            total: format_currency(row.line.total, config),
        })
        .collect();
    Some((header, rows))
}

fn action_appearance(action: ReturnAction) -> ButtonAppearance {
    match action {
        ReturnAction::Approve | ReturnAction::MarkProcessed => ButtonAppearance::Primary,
        ReturnAction::Reject => ButtonAppearance::Secondary,
    }
}

#[component]
pub fn ReturnDetails(
    sales_return: Return,
    /// `None` when the originating invoice could not be loaded
    invoice: Option<Invoice>,
    #[prop(into)] on_back: Callback<()>,
    /// Receives `(return id, partial update)`; persistence is up to the caller
    #[prop(into)]
    on_update: Callback<(String, ReturnStatusUpdate)>,
    user: User,
) -> impl IntoView {
    let config = use_display_config();
    let model = ReturnDetailsModel::new(sales_return, invoice, user);

    let badge = model.badge();
    let actions = model.actions();
    let note = model.inconsistency_note();

    let r = &model.sales_return;
    let title = format!("Return {}", r.id);
    let customer = r.customer_name.clone();
    let invoice_id = r.invoice_id.clone();
    let agency = r.agency_id.clone();
    let created = format!("{} · {}", format_datetime(&r.created_at, &config), r.created_by);
    let processed = r.processed_at.as_ref().map(|at| {
        format!(
            "{} · {}",
            format_datetime_opt(Some(at), &config),
            r.processed_by.clone().unwrap_or_else(|| EMPTY.to_string()),
        )
    });
    let reason = r.reason.clone();
    let gps = r.gps_coordinates.display();
    let rows = return_rows(r, &config);
    let total_units = r.total_units();
    let total = format_currency(-r.total, &config);
    let missing_invoice = format!("Original invoice not available ({})", r.invoice_id);
    let invoice_data = invoice_view_data(&model, &config);

    let model = StoredValue::new(model);
    let dispatch = move |action: ReturnAction| {
        let (id, update) = model.with_value(|m| m.update_for(action, Utc::now()));
        log::info!(
            "return {}: {} -> {}",
            id,
            action.label(),
            update.status.code()
        );
        on_update.run((id, update));
    };

    view! {
        <div id="a003_sales_return--detail" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <StatusBadge spec=badge />
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {actions
                            .into_iter()
                            .map(|action| {
                                view! {
                                    <Button
                                        appearance=action_appearance(action)
                                        attr:data-action=format!("{:?}", action)
                                        on_click=move |_| dispatch(action)
                                    >
                                        {action.label()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_back.run(())>
                            "← Back"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content" style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                {note.map(|text| view! {
                    <InfoBanner tone=Tone::Warning>{text}</InfoBanner>
                })}

                <div style="display:grid;grid-template-columns:repeat(auto-fit,minmax(420px,1fr));gap:var(--spacing-lg);align-items:start;">
                    <Card>
                        <div style="padding:var(--spacing-md);display:flex;flex-direction:column;gap:var(--spacing-md);">
                            <h3 style="margin:0;font-size:var(--font-size-md);">"Return"</h3>
                            <div style="display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                                <span class="form__label">"Customer:"</span>
                                <strong>{customer}</strong>

                                <span class="form__label">"Invoice:"</span>
                                <code style="font-family:monospace;">{invoice_id}</code>

                                <span class="form__label">"Agency:"</span>
                                <span>{agency}</span>

                                <span class="form__label">"Created:"</span>
                                <span>{created}</span>

                                {processed.map(|processed| view! {
                                    <span class="form__label">"Processed:"</span>
                                    <span>{processed}</span>
                                })}

                                <span class="form__label">"Reason:"</span>
                                <span>{reason}</span>

                                <span class="form__label">"GPS:"</span>
                                <code style="font-family:monospace;font-size:var(--font-size-sm);">{gps}</code>
                            </div>

                            <Table attr:style="width:100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Product"</TableHeaderCell>
                                        <TableHeaderCell>"Color / Size"</TableHeaderCell>
                                        <TableHeaderCell>"Unit price"</TableHeaderCell>
                                        <TableHeaderCell>"Returned"</TableHeaderCell>
                                        <TableHeaderCell>"Total"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            let qty_style = if row.exceeds_original {
                                                "color:var(--color-error);font-weight:600;"
                                            } else {
                                                ""
                                            };
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>
                                                                <div>{row.product}</div>
                                                                {row.reason.map(|reason| view! {
                                                                    <div style="font-size:var(--font-size-xs);color:var(--color-text-secondary);">
                                                                        {format!("Reason: {}", reason)}
                                                                    </div>
                                                                })}
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{row.color_size}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style="font-variant-numeric:tabular-nums;">{row.unit_price}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style=qty_style>{row.quantity}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <strong style="font-variant-numeric:tabular-nums;color:var(--color-error);">
                                                                {row.total}
                                                            </strong>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()}
                                    <TableRow attr:style="background:var(--color-bg-secondary);font-weight:600;">
                                        <TableCell>
                                            <TableCellLayout>"Total"</TableCellLayout>
                                        </TableCell>
                                        <TableCell>""</TableCell>
                                        <TableCell>""</TableCell>
                                        <TableCell>
                                            <TableCellLayout>{total_units}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong style="color:var(--color-error);">{total}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                </TableBody>
                            </Table>
                        </div>
                    </Card>

                    <Card>
                        <div style="padding:var(--spacing-md);display:flex;flex-direction:column;gap:var(--spacing-md);">
                            {match invoice_data {
                                Some((header, invoice_rows)) => view! {
                                    <h3 style="margin:0;font-size:var(--font-size-md);">{header.title}</h3>
                                    <div style="display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                                        <span class="form__label">"Date:"</span>
                                        <span>{header.date}</span>

                                        <span class="form__label">"Subtotal:"</span>
                                        <span>{header.subtotal}</span>

                                        <span class="form__label">"Discount:"</span>
                                        <span>{header.discount}</span>

                                        <span class="form__label">"Total:"</span>
                                        <strong>{header.total}</strong>

                                        <span class="form__label">"GPS:"</span>
                                        <code style="font-family:monospace;font-size:var(--font-size-sm);">{header.gps}</code>
                                    </div>

                                    <Table attr:style="width:100%;">
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"Product"</TableHeaderCell>
                                                <TableHeaderCell>"Color / Size"</TableHeaderCell>
                                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                                <TableHeaderCell>"Unit price"</TableHeaderCell>
                                                <TableHeaderCell>"Total"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {invoice_rows
                                                .into_iter()
                                                .map(|row| view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout>{row.product}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>{row.color_size}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span>{row.quantity}</span>
                                                                {row.annotation.map(|text| view! {
                                                                    <span
                                                                        class="returned-annotation"
                                                                        style="margin-left:var(--spacing-xs);color:var(--color-error);font-size:var(--font-size-xs);"
                                                                    >
                                                                        {text}
                                                                    </span>
                                                                })}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>{row.unit_price}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>{row.total}</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                })
                                                .collect_view()}
                                        </TableBody>
                                    </Table>
                                }
                                    .into_any(),
                                None => view! {
                                    <h3 style="margin:0;font-size:var(--font-size-md);">"Original invoice"</h3>
                                    <div style="color:var(--color-text-secondary);">{missing_invoice}</div>
                                }
                                    .into_any(),
                            }}
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}
