//! Print-oriented rendering of invoice documents.
//!
//! [`render`] is a pure function of the invoice, the company details, and the
//! current time. It produces a fixed-layout HTML document sized for a single
//! printed page and never fails: every optional field has a zero or
//! placeholder fallback.

use crate::format;
use crate::invoice::Invoice;
use chrono::{DateTime, Utc};
use derive_setters::Setters;

/// Cell placeholder for line items without reseller pricing data.
const EMPTY_CELL: &str = "-";

/// Static company details shown in the document header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(strip_option, prefix = "with_")]
pub struct CompanyInfo {
    #[setters(skip)]
    pub name: String,
    #[setters(into)]
    pub address: Option<String>,
    #[setters(into)]
    pub email: Option<String>,
    #[setters(into)]
    pub phone: Option<String>,
}

impl CompanyInfo {
    /// Creates a new [`CompanyInfo`].
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: None,
            phone: None,
        }
    }

    fn contact_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(email) = &self.email {
            parts.push(email.clone());
        }
        if let Some(phone) = &self.phone {
            parts.push(phone.clone());
        }
        parts.join(" | ")
    }
}

/// Renders the invoice as a printable HTML document.
pub fn render(invoice: &Invoice, company: &CompanyInfo, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"invoice-document\">\n");
    push_header(&mut out, invoice, company, now);
    push_bill_to(&mut out, invoice);
    push_customer_panel(&mut out, invoice);
    push_items_table(&mut out, invoice);
    push_totals(&mut out, invoice);
    push_notes(&mut out, invoice);
    push_footer(&mut out, invoice, company);
    out.push_str("</article>\n");
    out
}

fn push_header(out: &mut String, invoice: &Invoice, company: &CompanyInfo, now: DateTime<Utc>) {
    out.push_str("<header class=\"invoice-header\">\n");
    out.push_str(&format!("<p class=\"company-name\">{}</p>\n", company.name));
    if let Some(address) = &company.address {
        out.push_str(&format!("<p class=\"company-address\">{}</p>\n", address));
    }
    out.push_str(&format!("<h1>Invoice #{}</h1>\n", invoice.invoice_number));
    out.push_str(&format!(
        "<span class=\"status\">{}</span>\n",
        invoice.status.label()
    ));
    if invoice.is_overdue(now) {
        out.push_str("<span class=\"overdue\">Overdue</span>\n");
    }
    out.push_str(&format!(
        "<p class=\"dates\">Issued: {} | Due: {}</p>\n",
        format::date(&invoice.issue_date),
        format::date(&invoice.due_date),
    ));
    out.push_str("</header>\n");
}

fn push_bill_to(out: &mut String, invoice: &Invoice) {
    let customer = &invoice.customer;
    out.push_str("<section class=\"bill-to\">\n<h2>Bill To</h2>\n");
    out.push_str(&format!("<p>{}</p>\n", customer.name));
    if let Some(email) = &customer.email {
        out.push_str(&format!("<p>{}</p>\n", email));
    }
    if let Some(address) = &customer.address {
        out.push_str(&format!("<p>{}</p>\n", address));
    }
    out.push_str("</section>\n");
}

// Resellers get a visually marked panel with their terms; standard customers
// get the payment information panel instead.
fn push_customer_panel(out: &mut String, invoice: &Invoice) {
    match invoice.customer.customer_type.reseller_info() {
        Some(info) => {
            out.push_str("<section class=\"reseller-panel\">\n<h2>Reseller Account</h2>\n");
            out.push_str(&format!("<p>Reseller ID: {}</p>\n", info.reseller_id));
            out.push_str(&format!(
                "<p>Discount Rate: {}</p>\n",
                format::percent(info.discount_rate)
            ));
            out.push_str(&format!(
                "<p>Minimum Order Quantity: {}</p>\n",
                info.minimum_order_quantity
            ));
            if let Some(terms) = &info.special_terms {
                out.push_str(&format!("<p>Special Terms: {}</p>\n", terms));
            }
            out.push_str("</section>\n");
        }
        None => {
            out.push_str("<section class=\"payment-panel\">\n<h2>Payment Information</h2>\n");
            out.push_str(&format!(
                "<p>Method: {}</p>\n",
                invoice.payment_method.as_deref().unwrap_or(EMPTY_CELL)
            ));
            out.push_str(&format!(
                "<p>Terms: {}</p>\n",
                invoice.payment_terms.as_deref().unwrap_or(EMPTY_CELL)
            ));
            out.push_str("</section>\n");
        }
    }
}

fn push_items_table(out: &mut String, invoice: &Invoice) {
    let reseller = invoice.customer.customer_type.is_reseller();
    out.push_str("<table class=\"items\">\n<thead><tr>");
    out.push_str("<th>Product</th><th>Qty</th><th>Unit Price</th>");
    if reseller {
        out.push_str("<th>List Price</th><th>Discount</th>");
    }
    out.push_str("<th>Total</th>");
    out.push_str("</tr></thead>\n<tbody>\n");
    for item in &invoice.items {
        out.push_str("<tr>");
        out.push_str(&format!("<td>{}", item.product_name));
        if let Some(description) = &item.description {
            out.push_str(&format!("<br><small>{}</small>", description));
        }
        out.push_str("</td>");
        out.push_str(&format!("<td>{}</td>", item.quantity));
        out.push_str(&format!("<td>{}</td>", format::currency(item.unit_price)));
        if reseller {
            let list_price = item
                .original_price
                .map(format::currency)
                .unwrap_or_else(|| EMPTY_CELL.to_owned());
            let discount = item
                .discount_percentage
                .map(format::percent)
                .unwrap_or_else(|| EMPTY_CELL.to_owned());
            out.push_str(&format!("<td>{}</td><td>{}</td>", list_price, discount));
        }
        out.push_str(&format!("<td>{}</td>", format::currency(item.line_total)));
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn push_totals(out: &mut String, invoice: &Invoice) {
    out.push_str("<section class=\"totals\">\n");
    let reseller_discount =
        invoice.customer.customer_type.is_reseller() && invoice.discount() > 0.0;
    if reseller_discount {
        out.push_str(&format!(
            "<p>Subtotal (list price): {}</p>\n",
            format::currency(invoice.subtotal)
        ));
        out.push_str(&format!(
            "<p class=\"discount\">Discount (-{}): -{}</p>\n",
            format::percent(invoice.discount_percentage.unwrap_or(0.0)),
            format::currency(invoice.discount()),
        ));
        out.push_str(&format!(
            "<p>Subtotal after discount: {}</p>\n",
            format::currency(invoice.discounted_subtotal())
        ));
    } else {
        out.push_str(&format!(
            "<p>Subtotal: {}</p>\n",
            format::currency(invoice.subtotal)
        ));
    }
    out.push_str(&format!(
        "<p>Tax ({}): {}</p>\n",
        format::percent(invoice.tax_rate.unwrap_or(0.0)),
        format::currency(invoice.tax()),
    ));
    out.push_str(&format!(
        "<p class=\"grand-total\">Total: {}</p>\n",
        format::currency(invoice.total())
    ));
    out.push_str("</section>\n");
}

fn push_notes(out: &mut String, invoice: &Invoice) {
    if let Some(notes) = &invoice.notes {
        if !notes.is_empty() {
            out.push_str(&format!(
                "<section class=\"notes\">\n<h2>Notes</h2>\n<p>{}</p>\n</section>\n",
                notes
            ));
        }
    }
}

fn push_footer(out: &mut String, invoice: &Invoice, company: &CompanyInfo) {
    out.push_str("<footer>\n<p>Thank you for your business!</p>\n");
    out.push_str(&format!(
        "<p>Questions? Contact {}</p>\n",
        company.contact_line()
    ));
    if invoice.customer.customer_type.is_reseller() {
        out.push_str(
            "<p class=\"reseller-terms\">Reseller pricing is subject to the terms of \
             your reseller agreement.</p>\n",
        );
    }
    out.push_str("</footer>\n");
}
