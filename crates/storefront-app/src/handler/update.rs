//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppState, Route};

use super::{checkout, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_notification(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::OpenCheckout => {
            state.route = Route::Checkout;
            // The failure banner replaces the toast
            if state.notification.as_ref().is_some_and(|n| n.is_error()) {
                state.dismiss_notification();
            }
            UpdateResult::none()
        }

        Message::GoHome => {
            state.route = Route::Home;
            UpdateResult::none()
        }

        Message::DismissNotification => {
            state.dismiss_notification();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Checkout form
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.checkout.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.checkout.focus_prev();
            UpdateResult::none()
        }

        Message::Focus(target) => {
            state.checkout.set_focus(target);
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            state.checkout.push_char(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.checkout.pop_char();
            UpdateResult::none()
        }

        Message::InputClear => {
            state.checkout.clear_focused();
            UpdateResult::none()
        }

        Message::SetField { field, value } => {
            state.checkout.set_value(field, value);
            UpdateResult::none()
        }

        Message::SelectPaymentMethod(method) => {
            state.checkout.select_payment(method);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::SubmitCheckout => checkout::handle_submit(state),

        Message::OrderSubmitted {
            submission_id,
            receipt,
        } => checkout::handle_order_submitted(state, submission_id, receipt),

        Message::OrderSubmissionFailed {
            submission_id,
            error,
        } => checkout::handle_order_failed(state, submission_id, error),
    }
}
