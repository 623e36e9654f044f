//! # storefront-client - Order Submission
//!
//! Delivers validated checkout payloads to the order backend.
//!
//! Depends on [`storefront_core`] for the payload types and error handling.
//!
//! ## Public API
//!
//! - [`OrderSubmitter`] - Async seam the checkout flow submits through
//! - [`HttpOrderClient`] - JSON-over-HTTP implementation (reqwest)
//! - [`OrderReceipt`] - Accepted order: status, body, time received
//! - [`SubmitError`] - Network / rejected / server / invalid-response failures
//!
//! With the `test-helpers` feature, [`test_utils`] provides a scripted
//! `RecordingSubmitter` and payload fixtures.

pub mod error;
pub mod http;
pub mod receipt;
pub mod submitter;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use error::SubmitError;
pub use http::HttpOrderClient;
pub use receipt::OrderReceipt;
pub use submitter::{LocalOrderSubmitter, OrderSubmitter};
