//! Test utilities for order submission
//!
//! [`RecordingSubmitter`] stands in for the order backend: it records every
//! payload it is given and replies with scripted outcomes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use storefront_core::{
    CheckoutFormData, FieldId, FieldValues, PaymentMethod, SubmitCheckoutData, TotalPrice,
};

use crate::error::SubmitError;
use crate::receipt::OrderReceipt;
use crate::submitter::OrderSubmitter;

type Outcome = Result<OrderReceipt, SubmitError>;

/// Scripted [`OrderSubmitter`] that records what it was asked to send.
///
/// Clones share the same script and call log, so a test can keep one handle
/// while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    calls: Arc<Mutex<Vec<SubmitCheckoutData>>>,
    delay: Option<Duration>,
}

impl RecordingSubmitter {
    /// Accepts every order
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Fails the first submission with `err`, accepts the rest
    pub fn failing(err: SubmitError) -> Self {
        Self::with_outcomes(vec![Err(err)])
    }

    /// Replies with `outcomes` in order, then accepts
    pub fn with_outcomes(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            ..Self::default()
        }
    }

    /// Sleep before replying, to keep a submission in flight
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Payloads received so far
    pub fn calls(&self) -> Vec<SubmitCheckoutData> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl OrderSubmitter for RecordingSubmitter {
    async fn submit(&self, payload: &SubmitCheckoutData) -> Outcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(payload.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.outcomes.lock().ok().and_then(|mut o| o.pop_front());
        scripted.unwrap_or_else(|| Ok(test_receipt("TEST-1")))
    }

    fn destination(&self) -> String {
        "recording://orders".to_string()
    }
}

/// A 201 receipt carrying `order_id`
pub fn test_receipt(order_id: &str) -> OrderReceipt {
    OrderReceipt::new(201, json!({ "orderId": order_id }))
}

/// Raw input that passes validation
pub fn valid_field_values() -> FieldValues {
    FieldValues::new()
        .with(FieldId::FirstName, "Nimal")
        .with(FieldId::LastName, "Perera")
        .with(FieldId::Address, "12 Galle Road")
        .with(FieldId::Country, "Sri Lanka")
        .with(FieldId::Zipcode, "10100")
        .with(FieldId::Town, "Colombo")
        .with(FieldId::Phone, "0771234567")
        .with(FieldId::Email, "nimal@example.lk")
}

/// Validated billing details matching [`valid_field_values`]
pub fn sample_form() -> CheckoutFormData {
    CheckoutFormData {
        first_name: "Nimal".to_string(),
        last_name: "Perera".to_string(),
        company_name: None,
        address: "12 Galle Road".to_string(),
        country: "Sri Lanka".to_string(),
        zipcode: 10100,
        town: "Colombo".to_string(),
        phone: "0771234567".to_string(),
        email: "nimal@example.lk".to_string(),
        description: None,
    }
}

/// Cash on delivery order for LKR 1549.00
pub fn sample_payload() -> SubmitCheckoutData {
    SubmitCheckoutData::new(
        sample_form(),
        Some(PaymentMethod::CashOnDelivery),
        TotalPrice::from_minor_units(154_900, "LKR"),
    )
}
