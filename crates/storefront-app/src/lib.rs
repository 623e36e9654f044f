//! # storefront-app - Application State and Orchestration
//!
//! The storefront's engine, following The Elm Architecture: [`AppState`] is
//! the model, [`Message`] the events, [`handler::update()`] the transition
//! function and [`UpdateAction`] the side effects (order submission) the
//! event loop runs in the background.
//!
//! Nothing here depends on the terminal; keys arrive as [`InputKey`].
//!
//! ## Public API
//!
//! - [`AppState`], [`Route`] - Model and current page
//! - [`CheckoutState`], [`FocusTarget`], [`SubmissionStatus`] - Checkout form
//! - [`Message`], [`UpdateAction`], [`UpdateResult`] - TEA plumbing
//! - [`process_message()`] - Update loop step with action dispatch
//! - [`config`] - `.storefront/config.toml` loading
//! - [`spawn_signal_handler()`] - SIGINT/SIGTERM → [`Message::Quit`]

pub mod actions;
pub mod checkout;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notification;
pub mod process;
pub mod signals;
pub mod state;

pub use checkout::{CheckoutState, FocusTarget, PaymentSelection, SubmissionId, SubmissionStatus};
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notification::{
    Notification, NotificationKind, ORDER_FAILED_MESSAGE, ORDER_PLACED_MESSAGE,
};
pub use process::process_message;
pub use signals::spawn_signal_handler;
pub use state::{AppPhase, AppState, Route};
