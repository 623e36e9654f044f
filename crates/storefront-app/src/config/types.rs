//! Configuration types for the storefront

use serde::{Deserialize, Serialize};
use storefront_core::prelude::*;
use storefront_core::{TotalPrice, DEFAULT_CURRENCY};

/// Application settings (.storefront/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub order: OrderSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Order backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrderSettings {
    /// URL checkout payloads are POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Checkout form settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckoutSettings {
    /// Order total in major units. There is no cart yet, so this is a
    /// placeholder amount until one supplies it.
    #[serde(default = "default_total_price")]
    pub total_price: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    /// Block submission until a payment method is chosen
    #[serde(default)]
    pub require_payment_method: bool,
}

impl CheckoutSettings {
    /// Configured total as a validated [`TotalPrice`]
    pub fn total(&self) -> Result<TotalPrice> {
        TotalPrice::from_major(self.total_price, self.currency.clone())
    }
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            total_price: default_total_price(),
            currency: default_currency(),
            require_payment_method: false,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long the order confirmation stays up
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notification_timeout_ms: default_notification_timeout_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080/api/checkout".to_string()
}

fn default_total_price() -> f64 {
    1549.0
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_notification_timeout_ms() -> u64 {
    6000
}
