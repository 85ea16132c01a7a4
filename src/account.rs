//! Module for account resources.

use crate::util;
use chrono::{DateTime, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The service category of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Streaming,
    Music,
    Productivity,
    Design,
    Storage,
    Gaming,
    Education,
    Other,
}

impl Default for ServiceType {
    fn default() -> Self {
        Self::Other
    }
}

impl ServiceType {
    /// Parses a persisted service type value. Unknown values map to
    /// [`ServiceType::Other`].
    pub fn from_source(value: &str) -> Self {
        match value {
            "streaming" => Self::Streaming,
            "music" => Self::Music,
            "productivity" => Self::Productivity,
            "design" => Self::Design,
            "storage" => Self::Storage,
            "gaming" => Self::Gaming,
            "education" => Self::Education,
            _ => Self::Other,
        }
    }

    /// Returns the display glyph for this service type.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Streaming => "📺",
            Self::Music => "🎵",
            Self::Productivity => "💼",
            Self::Design => "🎨",
            Self::Storage => "☁️",
            Self::Gaming => "🎮",
            Self::Education => "📚",
            Self::Other => "📦",
        }
    }

    /// Returns the display label for this service type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Streaming => "Streaming",
            Self::Music => "Music",
            Self::Productivity => "Productivity",
            Self::Design => "Design",
            Self::Storage => "Storage",
            Self::Gaming => "Gaming",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

/// The primary holder of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryHolder {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl PrimaryHolder {
    /// Returns the contact line shown for the holder: the email address if
    /// present, otherwise the phone number, otherwise a fixed placeholder.
    pub fn contact(&self) -> &str {
        if !self.email.is_empty() {
            return &self.email;
        }
        match &self.phone {
            Some(phone) if !phone.is_empty() => phone,
            _ => "No contact provided",
        }
    }
}

/// A user occupying a slot on a shared account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSlot {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub access_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// An account record in the persistence shape returned by the backend.
///
/// Every field apart from the identifier may be absent; [`Account`] resolves
/// the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub product_name: String,
    #[serde(default, deserialize_with = "util::deserialize_optional")]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub renewal_status: Option<String>,
    #[serde(default)]
    pub renewal_date: Option<String>,
    #[serde(default)]
    pub days_until_renewal: Option<i64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub max_user_slots: Option<u32>,
    #[serde(default)]
    pub current_users: Option<u32>,
    #[serde(default)]
    pub available_slots: Option<u32>,
    #[serde(default)]
    pub cost_per_additional_user: Option<f64>,
    #[serde(default)]
    pub is_shared_account: Option<bool>,
    #[serde(default, deserialize_with = "util::deserialize_string_or_seq")]
    pub family_features: Vec<String>,
    #[serde(default, deserialize_with = "util::deserialize_string_or_seq")]
    pub usage_restrictions: Vec<String>,
    #[serde(default)]
    pub holder_name: Option<String>,
    #[serde(default)]
    pub holder_email: Option<String>,
    #[serde(default)]
    pub holder_phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The display model of an account.
///
/// Built from an [`AccountRecord`] with a total default table: no field is
/// ever left missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: String,
    pub product_name: String,
    pub label: String,
    pub description: String,
    pub service_type: ServiceType,
    pub subscription_type: String,
    pub renewal_status: String,
    pub renewal_date: String,
    pub days_until_renewal: Option<i64>,
    pub cost: f64,
    pub max_user_slots: u32,
    pub current_users: u32,
    pub available_slots: u32,
    pub cost_per_additional_user: Option<f64>,
    pub is_shared_account: bool,
    pub family_features: Vec<String>,
    pub usage_restrictions: Vec<String>,
    pub primary_holder: PrimaryHolder,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Always empty after mapping; populating slots is a backend capability
    /// served by [`Client::account_users`](crate::Client::account_users).
    pub user_slots: Vec<UserSlot>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        let max_user_slots = record.max_user_slots.unwrap_or(1);
        let current_users = record.current_users.unwrap_or(0);
        let available_slots = record
            .available_slots
            .unwrap_or_else(|| max_user_slots.saturating_sub(current_users));
        Self {
            id: record.id,
            product_name: record.product_name,
            label: record.label,
            description: record.description.unwrap_or_default(),
            service_type: record
                .service_type
                .as_deref()
                .map(ServiceType::from_source)
                .unwrap_or_default(),
            subscription_type: record.subscription_type.unwrap_or_default(),
            renewal_status: record.renewal_status.unwrap_or_default(),
            renewal_date: record.renewal_date.unwrap_or_default(),
            days_until_renewal: record.days_until_renewal,
            cost: record.cost.unwrap_or(0.0),
            max_user_slots,
            current_users,
            available_slots,
            cost_per_additional_user: record.cost_per_additional_user,
            is_shared_account: record.is_shared_account.unwrap_or(false),
            family_features: record.family_features,
            usage_restrictions: record.usage_restrictions,
            primary_holder: PrimaryHolder {
                name: record.holder_name.unwrap_or_default(),
                email: record.holder_email.unwrap_or_default(),
                phone: record.holder_phone,
            },
            created_at: parse_timestamp(record.created_at.as_deref()),
            updated_at: parse_timestamp(record.updated_at.as_deref()),
            user_slots: Vec::new(),
        }
    }
}

// Lossy fallback: a missing or unparseable source timestamp becomes the
// current time.
fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|v| v.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// The feature lists of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountFeatures {
    #[serde(default, deserialize_with = "util::deserialize_string_or_seq")]
    pub family_features: Vec<String>,
    #[serde(default, deserialize_with = "util::deserialize_string_or_seq")]
    pub usage_restrictions: Vec<String>,
}

/// The renewal state of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenewalStatus {
    #[serde(default)]
    pub renewal_status: String,
    #[serde(default)]
    pub renewal_date: Option<String>,
    #[serde(default)]
    pub days_until_renewal: Option<i64>,
}

/// Descriptive fields that can be modified on an account.
#[derive(Debug, Clone, Default, PartialEq, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct ModifyAccount {
    #[setters(into)]
    pub label: Option<String>,
    #[setters(into)]
    pub description: Option<String>,
    #[setters(into)]
    pub renewal_status: Option<String>,
    pub cost: Option<f64>,
}

/// Data for adding a user to an account.
#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize)]
#[setters(strip_option, prefix = "with_")]
pub struct NewUser {
    #[setters(skip)]
    pub name: String,
    #[setters(skip)]
    pub email: String,
    #[setters(into)]
    pub access_level: Option<String>,
}

impl NewUser {
    /// Creates a new [`NewUser`].
    pub fn new<N, E>(name: N, email: E) -> Self
    where
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            access_level: None,
        }
    }
}
