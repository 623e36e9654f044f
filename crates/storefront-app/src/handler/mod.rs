//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per route
//! - `checkout`: Checkout form and submission handlers

pub(crate) mod checkout;
pub(crate) mod keys;
pub(crate) mod update;


use storefront_core::SubmitCheckoutData;

use crate::checkout::SubmissionId;
use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send a validated order to the order backend
    SubmitOrder {
        submission_id: SubmissionId,
        payload: SubmitCheckoutData,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
