//! End-to-end invoice scenarios: form state in, totals and documents out.

use billdesk_invoicing::{
    InvoiceForm, InvoiceMeta, InvoiceSettings, LineItemInput, ValidationFailure, export_invoice,
    select_invoice_lines,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn form(customer: &str, row: LineItemInput) -> InvoiceForm {
    billdesk_observability::init_with_filter("warn,billdesk_invoicing=debug");

    let meta = InvoiceMeta::for_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    let mut form = InvoiceForm::new(meta);
    form.set_customer_name(customer);
    form.update_row(0, row).unwrap();
    form
}

fn cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

#[test]
fn single_widget_without_discount() {
    let form = form("Acme", LineItemInput::new("Widget", 2.0, 50.0, 0.0));

    assert_eq!(cents(form.line_results()[0].line_total), 100_00);
    let totals = form.totals();
    assert_eq!(cents(totals.subtotal), 100_00);
    assert_eq!(cents(totals.tax_amount), 18_00);
    assert_eq!(cents(totals.grand_total), 118_00);
    assert!(form.selection().is_valid());

    let exported = export_invoice(
        &form,
        &InvoiceSettings::default(),
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
    )
    .unwrap();
    assert!(exported.file_name.starts_with("invoice-INV-BG-001-"));
    assert!(exported.contents.contains("<td>₹ 100.00</td>"));
    assert!(exported.contents.contains("₹ 18.00"));
}

#[test]
fn discounted_widget() {
    let mut form = form("Acme", LineItemInput::new("Widget", 3.0, 10.0, 10.0));

    assert_eq!(cents(form.line_results()[0].line_total), 27_00);
    let totals = form.totals();
    assert_eq!(cents(totals.subtotal), 27_00);
    assert_eq!(cents(totals.tax_amount), 4_86);
    assert_eq!(cents(totals.grand_total), 31_86);

    let preview = form.generate_preview(&InvoiceSettings::default()).unwrap();
    assert!(preview.contains("<td>10.00%</td>"));
    assert!(preview.contains("₹ 31.86"));
}

#[test]
fn missing_customer_name_blocks_the_invoice() {
    let mut form = form("", LineItemInput::new("Widget", 1.0, 5.0, 0.0));

    let selection = form.selection();
    assert!(!selection.is_valid());
    assert_eq!(selection.failure(), Some(ValidationFailure::MissingCustomerName));

    let err = form.generate_preview(&InvoiceSettings::default()).unwrap_err();
    assert_eq!(err.validation_failure(), Some(ValidationFailure::MissingCustomerName));
    assert!(!form.is_preview_visible());

    let err = export_invoice(&form, &InvoiceSettings::default(), Utc::now()).unwrap_err();
    assert_eq!(err.validation_failure(), Some(ValidationFailure::MissingCustomerName));
}

#[test]
fn unnamed_row_leaves_no_valid_items() {
    let form = form("Acme", LineItemInput::new("", 1.0, 5.0, 0.0));

    let selection = select_invoice_lines(form.rows(), form.customer_name());
    assert!(!selection.is_valid());
    assert!(selection.lines.is_empty());
    assert_eq!(selection.failure(), Some(ValidationFailure::NoValidItems));

    // The row still counts towards the on-screen total.
    assert_eq!(cents(form.totals().subtotal), 5_00);
}

#[test]
fn clearing_all_rows_self_heals() {
    let mut form = form("Acme", LineItemInput::new("Widget", 1.0, 5.0, 0.0));
    form.add_row();
    form.add_row();

    for _ in 0..3 {
        form.remove_row(0).unwrap();
    }

    assert_eq!(form.rows(), &[LineItemInput::default()]);
    assert_eq!(form.totals().subtotal, 0.0);
}
