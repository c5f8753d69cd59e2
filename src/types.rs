//! Resource types returned and accepted by the ProcessOut API
//!
//! Amounts travel as decimal strings and are kept that way so a decoded
//! value re-encodes to exactly what the API sent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Metadata attached to most resources
pub type Metadata = HashMap<String, String>;

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_amount(amount: &str) -> Option<Decimal> {
    amount.parse().ok()
}

/// A ProcessOut project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// ID of the project
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Name of the project
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// URL of the project logo
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    /// Contact email of the project
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Date at which the project was created
    pub created_at: Option<DateTime<Utc>>,
}

/// An invoice: a one-time charge a customer can pay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// ID of the invoice
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Project to which the invoice belongs
    pub project: Option<Box<Project>>,
    /// Customer linked to the invoice, if any
    pub customer: Option<Box<Customer>>,
    /// Subscription the invoice is linked to, if any
    pub subscription: Option<Box<Subscription>>,
    /// URL where the customer proceeds with the payment
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Name of the invoice
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Amount to be paid
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    /// Currency of the invoice (ISO 4217)
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Free-form key-value metadata
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Request the customer's email during checkout
    #[serde(deserialize_with = "null_as_default")]
    pub request_email: bool,
    /// Request the shipping address during checkout
    #[serde(deserialize_with = "null_as_default")]
    pub request_shipping: bool,
    /// Where the customer is sent after paying
    #[serde(deserialize_with = "null_as_default")]
    pub return_url: String,
    /// Where the customer is sent if the payment is canceled
    #[serde(deserialize_with = "null_as_default")]
    pub cancel_url: String,
    /// Whether the invoice lives in the sandbox environment
    #[serde(deserialize_with = "null_as_default")]
    pub sandbox: bool,
    /// Date at which the invoice was created
    pub created_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Create an invoice to be sent with [`Invoices::create`](crate::resources::Invoices::create)
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            currency: currency.into(),
            ..Self::default()
        }
    }

    /// Set the return URL
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = url.into();
        self
    }

    /// Set the cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = url.into();
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The amount as a decimal, if it parses
    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

/// A customer of the project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// ID of the customer
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Project to which the customer belongs
    pub project: Option<Box<Project>>,
    /// Email of the customer
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// First name of the customer
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    /// Last name of the customer
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    /// Customer balance
    #[serde(deserialize_with = "null_as_default")]
    pub balance: String,
    /// Currency of the balance
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub sandbox: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Create a customer identified by email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set first and last name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }
}

/// A recurring charge for a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// ID of the subscription
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub project: Option<Box<Project>>,
    /// Customer owning the subscription
    pub customer: Option<Box<Customer>>,
    /// ID of the customer owning the subscription
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Amount charged every interval
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Billing interval, e.g. `1d`, `1w`, `1m`
    #[serde(deserialize_with = "null_as_default")]
    pub interval: String,
    /// End of the trial period, if any
    pub trial_end_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub canceled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cancellation_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_cancellation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub return_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cancel_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sandbox: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub activated_at: Option<DateTime<Utc>>,
    /// Next billing date
    pub iterate_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Create a subscription for a customer
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            amount: amount.into(),
            currency: currency.into(),
            interval: interval.into(),
            ..Self::default()
        }
    }

    /// The amount as a decimal, if it parses
    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

/// A payment attempt and its lifecycle on the gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// ID of the transaction
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub project: Option<Box<Project>>,
    pub customer: Option<Box<Customer>>,
    pub subscription: Option<Box<Subscription>>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Status as reported by the API, e.g. `waiting`, `authorized`, `completed`
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authorized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub captured: bool,
    /// Fee taken by ProcessOut
    #[serde(deserialize_with = "null_as_default")]
    pub processout_fee: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub sandbox: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// The amount as a decimal, if it parses
    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

/// An action the customer must complete on the gateway (redirect, iframe...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerAction {
    /// Kind of action, e.g. `redirect` or `url`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub action_type: String,
    /// Value of the action, e.g. the URL to redirect to
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}
