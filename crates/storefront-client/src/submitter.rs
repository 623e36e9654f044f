//! Order submission seam
//!
//! The checkout flow only knows about [`OrderSubmitter`]; the HTTP client and
//! the test double both implement it.

use storefront_core::SubmitCheckoutData;

use crate::error::SubmitError;
use crate::receipt::OrderReceipt;

/// Delivers a checkout payload to the order backend
#[trait_variant::make(OrderSubmitter: Send)]
pub trait LocalOrderSubmitter {
    /// Send one order. Exactly one request per call; no retries.
    async fn submit(&self, payload: &SubmitCheckoutData) -> Result<OrderReceipt, SubmitError>;

    /// Where orders go, for logs and the status line
    fn destination(&self) -> String;
}
