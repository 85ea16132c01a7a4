#![allow(dead_code)] // https://github.com/rust-lang/rust/issues/46379

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use subdash::account::AccountRecord;
use subdash::invoice::{
    CompanyInfo, CustomerInfo, CustomerType, Invoice, InvoiceStatus, LineItem, ResellerInfo,
};
use subdash::AccountSource;

lazy_static! {
    pub static ref COMPANY: CompanyInfo = CompanyInfo::new("Acme Subscriptions Inc.")
        .with_address("1 Example Way, Springfield")
        .with_email("billing@example.com")
        .with_phone("+1 555 0100");
}

pub fn timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn record(id: &str) -> AccountRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "product_name": "StreamMax",
        "label": "Family plan",
        "description": "Video streaming for the whole household",
        "service_type": "streaming",
        "subscription_type": "Family",
        "renewal_status": "active",
        "renewal_date": "2026-10-01",
        "cost": 19.99,
        "max_user_slots": 5,
        "current_users": 3,
        "holder_name": "Jamie Doe",
        "holder_email": "jamie@example.com",
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2026-08-01T09:30:00Z"
    }))
    .unwrap()
}

pub fn line_item(name: &str, quantity: u32, unit_price: f64) -> LineItem {
    LineItem {
        product_name: name.to_owned(),
        description: None,
        quantity,
        unit_price,
        line_total: unit_price * quantity as f64,
        original_price: None,
        discount_percentage: None,
    }
}

pub fn standard_invoice() -> Invoice {
    Invoice {
        invoice_number: "INV-1001".to_owned(),
        status: InvoiceStatus::Sent,
        issue_date: timestamp(2026, 8, 1),
        due_date: timestamp(2026, 8, 31),
        customer: CustomerInfo {
            name: "Jordan Smith".to_owned(),
            email: Some("jordan@example.com".to_owned()),
            address: None,
            customer_type: CustomerType::Standard,
        },
        items: vec![line_item("StreamMax Family", 1, 1000.0)],
        subtotal: 1000.0,
        discount_amount: None,
        discount_percentage: None,
        tax_rate: Some(10.0),
        tax_amount: Some(100.0),
        total_amount: Some(1100.0),
        payment_method: Some("Credit card".to_owned()),
        payment_terms: Some("Net 30".to_owned()),
        notes: None,
    }
}

pub fn reseller_invoice() -> Invoice {
    let mut item = line_item("StreamMax Family", 1, 800.0);
    item.original_price = Some(1000.0);
    item.discount_percentage = Some(20.0);
    Invoice {
        invoice_number: "INV-2002".to_owned(),
        status: InvoiceStatus::Sent,
        issue_date: timestamp(2026, 8, 1),
        due_date: timestamp(2026, 8, 31),
        customer: CustomerInfo {
            name: "Retail Partners Ltd.".to_owned(),
            email: None,
            address: Some("2 Wholesale Rd.".to_owned()),
            customer_type: CustomerType::Reseller {
                info: ResellerInfo {
                    reseller_id: "RSL-77".to_owned(),
                    discount_rate: 20.0,
                    minimum_order_quantity: 10,
                    special_terms: None,
                },
            },
        },
        items: vec![item],
        subtotal: 1000.0,
        discount_amount: Some(200.0),
        discount_percentage: Some(20.0),
        tax_rate: Some(10.0),
        tax_amount: Some(80.0),
        total_amount: Some(880.0),
        payment_method: None,
        payment_terms: None,
        notes: None,
    }
}

/// A source that answers every fetch with a copy of one record.
pub struct StaticSource(pub AccountRecord);

#[async_trait]
impl AccountSource for StaticSource {
    async fn fetch_account(&self, account_id: &str) -> subdash::Result<AccountRecord> {
        let mut record = self.0.clone();
        record.id = account_id.to_owned();
        Ok(record)
    }
}

/// A source that fails every fetch with a server error.
pub struct FailingSource;

#[async_trait]
impl AccountSource for FailingSource {
    async fn fetch_account(&self, _account_id: &str) -> subdash::Result<AccountRecord> {
        let error: subdash::response::Error = serde_json::from_value(serde_json::json!({
            "code": "account_not_found",
            "message": "no such account"
        }))
        .unwrap();
        Err(error.into())
    }
}
