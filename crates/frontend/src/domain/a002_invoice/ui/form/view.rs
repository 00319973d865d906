use super::view_model::InvoiceFormViewModel;
use crate::shared::config::use_display_config;
use crate::shared::number_format::{format_currency, format_percent};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::domain::a002_invoice::draft::InvoiceDraft;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InvoiceForm(
    /// Order the invoice is created from
    order: SalesOrder,
    #[prop(into)] on_submit: Callback<InvoiceDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = InvoiceFormViewModel::new(&order);
    let config = StoredValue::new(use_display_config());

    let title = format!("New invoice for order {}", order.order_number);
    let customer = order.customer_name.clone();
    let remaining = config.with_value(|c| format_currency(vm.remaining, c));
    let discount_label = format!("Discount ({}):", format_percent(order.discount_percentage));
    let lines = vm.draft.with_untracked(|d| d.lines.clone());

    view! {
        <div id="a002_invoice--form" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>

            <div class="page__content" style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                <Card>
                    <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                        <span class="form__label">"Customer:"</span>
                        <strong>{customer}</strong>

                        <span class="form__label">"Remaining on order:"</span>
                        <span>{remaining}</span>
                    </div>
                </Card>

                <Card>
                    <div style="padding:var(--spacing-md);">
                        <Table attr:style="width:100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Color / Size"</TableHeaderCell>
                                    <TableHeaderCell>"Ordered"</TableHeaderCell>
                                    <TableHeaderCell>"To invoice"</TableHeaderCell>
                                    <TableHeaderCell>"Unit price"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {lines
                                    .into_iter()
                                    .map(|line| {
                                        let id_for_value = line.order_line_id.clone();
                                        let id_for_input = line.order_line_id.clone();
                                        let id_for_total = line.order_line_id.clone();
                                        let input_id = format!("qty-{}", line.order_line_id);
                                        let unit_price = config.with_value(|c| format_currency(line.unit_price, c));
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{line.product_name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format!("{} / {}", line.color, line.size)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{line.ordered_quantity}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        type="number"
                                                        id=input_id
                                                        min="0"
                                                        max=line.ordered_quantity.to_string()
                                                        step="1"
                                                        style="width:6rem;"
                                                        prop:value=move || vm.quantity_of(&id_for_value).to_string()
                                                        on:input=move |ev| {
                                                            vm.set_quantity_input(&id_for_input, &event_target_value(&ev));
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{unit_price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-variant-numeric:tabular-nums;">
                                                            {move || config.with_value(|c| format_currency(vm.line_total(&id_for_total), c))}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </Card>

                <Card>
                    <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                        <span class="form__label">"Subtotal:"</span>
                        <span>{move || config.with_value(|c| format_currency(vm.draft.with(|d| d.subtotal()), c))}</span>

                        <span class="form__label">{discount_label}</span>
                        <span>{move || config.with_value(|c| format_currency(vm.draft.with(|d| d.discount_amount()), c))}</span>

                        <span class="form__label">"Total:"</span>
                        <strong>{move || config.with_value(|c| format_currency(vm.draft.with(|d| d.total()), c))}</strong>
                    </div>
                </Card>

                {move || vm.validation().err().map(|e| view! {
                    <div class="error" style="color:var(--color-error);font-size:var(--font-size-sm);">
                        {e.to_string()}
                    </div>
                })}

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.validation().is_err())
                        on_click=move |_| vm.submit_command(on_submit)
                    >
                        "Create invoice"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
