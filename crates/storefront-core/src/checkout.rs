//! Checkout domain records
//!
//! - [`CheckoutFormData`] - validated billing details
//! - [`PaymentMethod`] - closed set of settlement options
//! - [`TotalPrice`] - non-negative order amount in minor units
//! - [`SubmitCheckoutData`] - the submission payload sent to the order backend

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "LKR";

/// Billing details collected by the checkout form.
///
/// Only constructed by [`crate::validation::validate`], so every instance
/// satisfies the schema: required fields are non-empty, the email is well
/// formed and the postal code is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormData {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub address: String,
    pub country: String,
    pub zipcode: u64,
    pub town: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Settlement option chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CashOnDelivery,
    Paypal,
}

impl PaymentMethod {
    /// All methods in display order
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CashOnDelivery, PaymentMethod::Paypal];

    /// Wire and display value
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Paypal => "Paypal",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An unset selection goes over the wire as `""`.
fn serialize_selection<S: Serializer>(
    method: &Option<PaymentMethod>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(method.map(|m| m.as_str()).unwrap_or(""))
}

/// Order total held in minor units (cents) to avoid float drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalPrice {
    minor_units: u64,
    currency: String,
}

impl TotalPrice {
    /// Build from a major-unit amount such as `1549.0`.
    ///
    /// Negative, NaN and infinite amounts are rejected.
    pub fn from_major(amount: f64, currency: impl Into<String>) -> Result<Self> {
        if !amount.is_finite() {
            return Err(Error::invalid_price(format!("{amount} is not a finite amount")));
        }
        if amount < 0.0 {
            return Err(Error::invalid_price(format!("{amount} is negative")));
        }
        Ok(Self {
            minor_units: (amount * 100.0).round() as u64,
            currency: currency.into(),
        })
    }

    pub fn from_minor_units(minor_units: u64, currency: impl Into<String>) -> Self {
        Self {
            minor_units,
            currency: currency.into(),
        }
    }

    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Amount in major units, as sent to the backend
    pub fn as_major(&self) -> f64 {
        self.minor_units as f64 / 100.0
    }
}

impl std::fmt::Display for TotalPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}.{:02}",
            self.currency,
            self.minor_units / 100,
            self.minor_units % 100
        )
    }
}

impl Serialize for TotalPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

/// Billing details plus payment method and total: the order submission payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCheckoutData {
    #[serde(flatten)]
    pub form: CheckoutFormData,
    #[serde(serialize_with = "serialize_selection")]
    pub payment_method: Option<PaymentMethod>,
    pub total_price: TotalPrice,
}

impl SubmitCheckoutData {
    pub fn new(
        form: CheckoutFormData,
        payment_method: Option<PaymentMethod>,
        total_price: TotalPrice,
    ) -> Self {
        Self {
            form,
            payment_method,
            total_price,
        }
    }
}
