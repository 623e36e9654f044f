//! Checkout submission handlers

use storefront_client::{OrderReceipt, SubmitError};
use storefront_core::prelude::*;

use crate::checkout::SubmissionId;
use crate::state::{AppState, Route};

use super::{UpdateAction, UpdateResult};

/// Validate the form and, when valid, start exactly one submission
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if let Some(id) = state.checkout.status().in_flight() {
        debug!(submission_id = id, "Submission already in flight, ignoring submit");
        return UpdateResult::none();
    }

    let Some(payload) = state.checkout.prepare_submission() else {
        debug!(
            errors = state.checkout.errors().len(),
            "Checkout blocked by validation"
        );
        return UpdateResult::none();
    };

    let submission_id = state.allocate_submission_id();
    state.checkout.begin_submission(submission_id);
    info!(
        submission_id,
        total = %payload.total_price,
        payment_method = ?payload.payment_method,
        "Placing order"
    );

    UpdateResult::action(UpdateAction::SubmitOrder {
        submission_id,
        payload,
    })
}

pub fn handle_order_submitted(
    state: &mut AppState,
    submission_id: SubmissionId,
    receipt: OrderReceipt,
) -> UpdateResult {
    if !state.checkout.complete_submission(submission_id) {
        warn!(submission_id, "Ignoring result for a submission no longer in flight");
        return UpdateResult::none();
    }

    state.finish_order(receipt);
    UpdateResult::none()
}

pub fn handle_order_failed(
    state: &mut AppState,
    submission_id: SubmissionId,
    error: SubmitError,
) -> UpdateResult {
    if !state.checkout.fail_submission(submission_id, error.clone()) {
        warn!(
            submission_id,
            "Ignoring failure for a submission no longer in flight: {}", error
        );
        return UpdateResult::none();
    }

    error!(submission_id, kind = error.kind(), "Order submission failed: {}", error);

    // The failure banner lives on the checkout page
    if state.route != Route::Checkout {
        state.notify_order_failed();
    }
    UpdateResult::none()
}
