//! Module for invoice values supplied by the billing backend.
//!
//! Invoices arrive fully populated; this crate never constructs or validates
//! them. Optional monetary fields are treated as zero wherever a number is
//! needed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use render::{render, CompanyInfo};

mod render;

/// The lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Returns the display label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Reseller terms attached to a customer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResellerInfo {
    pub reseller_id: String,
    pub discount_rate: f64,
    pub minimum_order_quantity: u32,
    #[serde(default)]
    pub special_terms: Option<String>,
}

/// The type of customer an invoice is billed to.
///
/// Modeled as a tagged union so the two rendering paths are exhaustively
/// matched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "customer_type", rename_all = "lowercase")]
pub enum CustomerType {
    Standard,
    Reseller {
        #[serde(rename = "reseller_info")]
        info: ResellerInfo,
    },
}

impl CustomerType {
    pub fn is_reseller(&self) -> bool {
        matches!(self, Self::Reseller { .. })
    }

    pub fn reseller_info(&self) -> Option<&ResellerInfo> {
        match self {
            Self::Standard => None,
            Self::Reseller { info } => Some(info),
        }
    }
}

/// The customer an invoice is billed to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub customer_type: CustomerType,
}

/// One line item of an invoice.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineItem {
    pub product_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
}

/// An invoice value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(rename = "customer_info")]
    pub customer: CustomerInfo,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub tax_amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Invoice {
    /// Returns whether the invoice is overdue: unpaid and strictly past its
    /// due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != InvoiceStatus::Paid && now > self.due_date
    }

    /// The discount amount, zero when absent.
    pub fn discount(&self) -> f64 {
        self.discount_amount.unwrap_or(0.0)
    }

    /// The tax amount, zero when absent.
    pub fn tax(&self) -> f64 {
        self.tax_amount.unwrap_or(0.0)
    }

    /// The grand total, zero when absent.
    pub fn total(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }

    /// The subtotal after the discount is applied.
    pub fn discounted_subtotal(&self) -> f64 {
        self.subtotal - self.discount()
    }
}
