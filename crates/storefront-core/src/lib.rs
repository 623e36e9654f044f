//! # storefront-core - Core Domain Types
//!
//! Foundation crate for the GREEN storefront. Provides the checkout domain
//! records, the declarative field table and validation schema, static
//! storefront content, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, chrono, tracing).
//!
//! ## Public API
//!
//! ### Checkout Records (`checkout`)
//! - [`CheckoutFormData`] - Validated billing details
//! - [`SubmitCheckoutData`] - Billing details + payment method + total price
//! - [`PaymentMethod`] - Cash on Delivery or Paypal
//! - [`TotalPrice`] - Non-negative order total in minor units
//!
//! ### Field Table (`fields`)
//! - [`FIELDS`] - Ordered table of billing fields and their rules
//! - [`label_from_identifier()`] - `"firstName"` → `"First Name"`
//!
//! ### Validation (`validation`)
//! - [`validate()`] - Raw values → typed record or per-field errors
//! - [`FieldValues`], [`ValidationErrors`]
//!
//! ### Static Content (`storefront`)
//! - [`SHELL_SECTIONS`], [`PAYMENT_BADGES`], [`DELIVERY_SERVICE`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod checkout;
pub mod error;
pub mod fields;
pub mod logging;
pub mod prelude;
pub mod storefront;
pub mod validation;

pub use checkout::{
    CheckoutFormData, PaymentMethod, SubmitCheckoutData, TotalPrice, DEFAULT_CURRENCY,
};
pub use error::{Error, Result, ResultExt};
pub use fields::{label_from_identifier, FieldId, FieldRule, FieldSpec, InputKind, FIELDS};
pub use storefront::{
    DeliveryService, PaymentBadge, ShellSection, DELIVERY_SERVICE, PAYMENT_BADGES, PAYMENT_BLURB,
    SHELL_SECTIONS, SOCIAL_LINKS, STORE_NAME,
};
pub use validation::{
    validate, validate_field, validate_payment_method, FieldValues, ValidationErrors,
};
