//! End-to-end checkout flow through the message loop
//!
//! Drives `process_message` the way the TUI runner does, with a recording
//! order backend standing in for HTTP.

use std::time::Duration;

use storefront_app::{process_message, AppState, InputKey, Message, Route, Settings};
use storefront_app::ORDER_PLACED_MESSAGE;
use storefront_client::test_utils::{test_receipt, valid_field_values, RecordingSubmitter};
use storefront_client::SubmitError;
use storefront_core::{PaymentMethod, TotalPrice, FIELDS};
use tokio::sync::mpsc;

fn new_state() -> AppState {
    let mut state = AppState::new(
        Settings::default(),
        TotalPrice::from_minor_units(154_900, "LKR"),
    );
    state.route = Route::Checkout;
    state
}

fn fill_form(
    state: &mut AppState,
    tx: &mpsc::Sender<Message>,
    submitter: &RecordingSubmitter,
) {
    let values = valid_field_values();
    for spec in FIELDS.iter() {
        process_message(
            state,
            Message::SetField {
                field: spec.id,
                value: values.get(spec.id).to_string(),
            },
            tx,
            submitter,
        );
    }
}

/// Wait for the submission result and feed it back in
async fn deliver_result(
    state: &mut AppState,
    rx: &mut mpsc::Receiver<Message>,
    tx: &mpsc::Sender<Message>,
    submitter: &RecordingSubmitter,
) {
    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("submission result timed out")
        .expect("channel closed");
    process_message(state, msg, tx, submitter);
}

#[tokio::test]
async fn test_successful_order_returns_home_with_notification() {
    let submitter = RecordingSubmitter::succeeding();
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = new_state();

    fill_form(&mut state, &tx, &submitter);
    process_message(
        &mut state,
        Message::SelectPaymentMethod(PaymentMethod::Paypal),
        &tx,
        &submitter,
    );
    process_message(&mut state, Message::Key(InputKey::CharCtrl('s')), &tx, &submitter);
    assert!(state.checkout.is_submitting());

    deliver_result(&mut state, &mut rx, &tx, &submitter).await;

    assert_eq!(submitter.call_count(), 1);
    let payload = &submitter.calls()[0];
    assert_eq!(payload.form.email, "nimal@example.lk");
    assert_eq!(payload.payment_method, Some(PaymentMethod::Paypal));
    assert_eq!(payload.total_price.minor_units(), 154_900);

    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(json["paymentMethod"], "Paypal");
    assert_eq!(json["totalPrice"], 1549.0);

    assert_eq!(state.route, Route::Home);
    let notification = state.notification.as_ref().expect("notification shown");
    assert_eq!(notification.message, ORDER_PLACED_MESSAGE);
    assert!(state.checkout.values().is_blank());
    assert_eq!(
        state.last_receipt.as_ref().and_then(|r| r.order_id()),
        Some("TEST-1".to_string())
    );
}

#[tokio::test]
async fn test_invalid_form_never_reaches_backend() {
    let submitter = RecordingSubmitter::succeeding();
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = new_state();

    process_message(&mut state, Message::SubmitCheckout, &tx, &submitter);

    assert!(!state.checkout.is_submitting());
    assert!(!state.checkout.errors().is_empty());
    assert!(rx.try_recv().is_err());
    assert_eq!(submitter.call_count(), 0);
}

#[tokio::test]
async fn test_failure_keeps_form_and_retry_succeeds() {
    let submitter = RecordingSubmitter::with_outcomes(vec![
        Err(SubmitError::network("connection refused")),
        Ok(test_receipt("GS-2002")),
    ]);
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = new_state();

    fill_form(&mut state, &tx, &submitter);
    process_message(&mut state, Message::SubmitCheckout, &tx, &submitter);
    deliver_result(&mut state, &mut rx, &tx, &submitter).await;

    assert_eq!(state.route, Route::Checkout);
    assert!(state.checkout.status().is_failed());
    assert!(state.notification.is_none());
    assert_eq!(state.checkout.value(storefront_core::FieldId::FirstName), "Nimal");

    process_message(&mut state, Message::Key(InputKey::CharCtrl('r')), &tx, &submitter);
    deliver_result(&mut state, &mut rx, &tx, &submitter).await;

    assert_eq!(submitter.call_count(), 2);
    assert_eq!(submitter.calls()[0], submitter.calls()[1]);
    assert_eq!(state.route, Route::Home);
    assert_eq!(
        state.last_receipt.as_ref().and_then(|r| r.order_id()),
        Some("GS-2002".to_string())
    );
}

#[tokio::test]
async fn test_double_submit_sends_one_order() {
    let submitter = RecordingSubmitter::succeeding().with_delay(Duration::from_millis(50));
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = new_state();

    fill_form(&mut state, &tx, &submitter);
    process_message(&mut state, Message::SubmitCheckout, &tx, &submitter);
    process_message(&mut state, Message::SubmitCheckout, &tx, &submitter);

    deliver_result(&mut state, &mut rx, &tx, &submitter).await;

    assert_eq!(submitter.call_count(), 1);
    assert_eq!(state.route, Route::Home);
    assert!(rx.try_recv().is_err());
}
