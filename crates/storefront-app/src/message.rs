//! Message types for the application (TEA pattern)

use storefront_client::{OrderReceipt, SubmitError};
use storefront_core::{FieldId, PaymentMethod};

use crate::checkout::{FocusTarget, SubmissionId};
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick from the event poller (notification expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    OpenCheckout,
    GoHome,
    DismissNotification,

    // ─────────────────────────────────────────────────────────
    // Checkout form
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    Focus(FocusTarget),
    /// Type a character into the focused field
    InputChar(char),
    InputBackspace,
    /// Empty the focused field
    InputClear,
    /// Replace a field's whole value
    SetField { field: FieldId, value: String },
    SelectPaymentMethod(PaymentMethod),

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// Validate and, if valid, send the order
    SubmitCheckout,
    /// Order backend accepted submission `submission_id`
    OrderSubmitted {
        submission_id: SubmissionId,
        receipt: OrderReceipt,
    },
    /// Order backend call for `submission_id` failed
    OrderSubmissionFailed {
        submission_id: SubmissionId,
        error: SubmitError,
    },
}
