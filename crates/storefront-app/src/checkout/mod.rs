//! Checkout form state
//!
//! [`CheckoutState`] owns everything the checkout page shows: the raw field
//! values, inline errors, focus, payment selection, order total and the
//! submission status. Handlers mutate it; widgets only read it.

pub mod payment;
pub mod submission;

pub use payment::PaymentSelection;
pub use submission::{SubmissionId, SubmissionStatus};

use storefront_client::SubmitError;
use storefront_core::{
    validate, validate_field, validate_payment_method, FieldId, FieldValues, PaymentMethod,
    SubmitCheckoutData, TotalPrice, ValidationErrors,
};

/// Focusable control on the checkout page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    Payment(PaymentMethod),
    PlaceOrder,
}

impl FocusTarget {
    /// Tab order: billing fields, payment options, then the submit button
    pub const ORDER: [FocusTarget; 13] = [
        FocusTarget::Field(FieldId::FirstName),
        FocusTarget::Field(FieldId::LastName),
        FocusTarget::Field(FieldId::CompanyName),
        FocusTarget::Field(FieldId::Address),
        FocusTarget::Field(FieldId::Country),
        FocusTarget::Field(FieldId::Zipcode),
        FocusTarget::Field(FieldId::Town),
        FocusTarget::Field(FieldId::Phone),
        FocusTarget::Field(FieldId::Email),
        FocusTarget::Field(FieldId::Description),
        FocusTarget::Payment(PaymentMethod::CashOnDelivery),
        FocusTarget::Payment(PaymentMethod::Paypal),
        FocusTarget::PlaceOrder,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next control, wrapping to the first
    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping to the last
    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(&self) -> Option<FieldId> {
        match self {
            FocusTarget::Field(id) => Some(*id),
            _ => None,
        }
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(FieldId::FirstName)
    }
}

/// State of one checkout attempt
#[derive(Debug, Clone)]
pub struct CheckoutState {
    values: FieldValues,
    errors: ValidationErrors,
    /// Errors are only shown once the customer has tried to place the order
    submit_attempted: bool,
    focus: FocusTarget,
    payment: PaymentSelection,
    total_price: TotalPrice,
    require_payment_method: bool,
    status: SubmissionStatus,
}

impl CheckoutState {
    pub fn new(total_price: TotalPrice, require_payment_method: bool) -> Self {
        Self {
            values: FieldValues::new(),
            errors: ValidationErrors::new(),
            submit_attempted: false,
            focus: FocusTarget::default(),
            payment: PaymentSelection::new(),
            total_price,
            require_payment_method,
            status: SubmissionStatus::Editing,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn payment(&self) -> PaymentSelection {
        self.payment
    }

    pub fn total_price(&self) -> &TotalPrice {
        &self.total_price
    }

    pub fn require_payment_method(&self) -> bool {
        self.require_payment_method
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    /// Replace a field's value, re-validating it once submission was attempted
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
        if self.submit_attempted {
            self.errors
                .update(field, validate_field(field, self.values.get(field)));
        }
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if c.is_control() {
            return;
        }
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.set_value(field, value);
    }

    /// Remove the last character of the focused field
    pub fn pop_char(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.set_value(field, value);
        }
    }

    /// Empty the focused field
    pub fn clear_focused(&mut self) {
        if let Some(field) = self.focus.field() {
            self.set_value(field, String::new());
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment.select(method);
        if self.submit_attempted {
            self.errors.set_payment_method(validate_payment_method(
                self.payment.selected(),
                self.require_payment_method,
            ));
        }
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Validate everything and build the order payload.
    ///
    /// On failure the inline errors are populated, focus moves to the first
    /// invalid control and `None` is returned.
    pub fn prepare_submission(&mut self) -> Option<SubmitCheckoutData> {
        self.submit_attempted = true;

        let payment_error =
            validate_payment_method(self.payment.selected(), self.require_payment_method);

        match validate(&self.values) {
            Ok(form) if payment_error.is_none() => {
                self.errors = ValidationErrors::new();
                Some(SubmitCheckoutData::new(
                    form,
                    self.payment.selected(),
                    self.total_price.clone(),
                ))
            }
            result => {
                let mut errors = result.err().unwrap_or_default();
                errors.set_payment_method(payment_error);

                self.focus = match errors.first_invalid() {
                    Some(field) => FocusTarget::Field(field),
                    None => FocusTarget::Payment(PaymentMethod::ALL[0]),
                };
                self.errors = errors;
                None
            }
        }
    }

    pub fn begin_submission(&mut self, id: SubmissionId) {
        self.status = SubmissionStatus::Submitting { id };
    }

    /// Mark submission `id` accepted. Returns false if `id` is not in flight.
    pub fn complete_submission(&mut self, id: SubmissionId) -> bool {
        if self.status.in_flight() != Some(id) {
            return false;
        }
        self.status = SubmissionStatus::Succeeded;
        true
    }

    /// Mark submission `id` failed. Returns false if `id` is not in flight.
    pub fn fail_submission(&mut self, id: SubmissionId, error: SubmitError) -> bool {
        if self.status.in_flight() != Some(id) {
            return false;
        }
        self.status = SubmissionStatus::Failed { error };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_client::test_utils::valid_field_values;
    use storefront_core::FIELDS;

    fn checkout() -> CheckoutState {
        CheckoutState::new(TotalPrice::from_minor_units(154_900, "LKR"), false)
    }

    fn filled_checkout() -> CheckoutState {
        let mut state = checkout();
        let values = valid_field_values();
        for spec in FIELDS.iter() {
            state.set_value(spec.id, values.get(spec.id));
        }
        state
    }

    #[test]
    fn test_focus_order_follows_field_table() {
        for (index, spec) in FIELDS.iter().enumerate() {
            assert_eq!(FocusTarget::ORDER[index], FocusTarget::Field(spec.id));
        }
        assert_eq!(FocusTarget::ORDER.last(), Some(&FocusTarget::PlaceOrder));
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(
            FocusTarget::PlaceOrder.next(),
            FocusTarget::Field(FieldId::FirstName)
        );
        assert_eq!(
            FocusTarget::Field(FieldId::FirstName).prev(),
            FocusTarget::PlaceOrder
        );
    }

    #[test]
    fn test_no_errors_before_first_attempt() {
        let mut state = checkout();
        state.set_value(FieldId::Email, "broken");
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_empty_submit_populates_errors_and_focuses_first() {
        let mut state = checkout();
        state.set_focus(FocusTarget::PlaceOrder);

        assert!(state.prepare_submission().is_none());
        assert_eq!(state.errors().len(), 8);
        assert_eq!(state.focus(), FocusTarget::Field(FieldId::FirstName));
        assert_eq!(state.status(), &SubmissionStatus::Editing);
    }

    #[test]
    fn test_edit_after_attempt_revalidates_field() {
        let mut state = checkout();
        state.prepare_submission();
        assert_eq!(state.errors().get(FieldId::Town), Some("Town is required"));

        state.set_value(FieldId::Town, "Kandy");
        assert_eq!(state.errors().get(FieldId::Town), None);

        state.set_value(FieldId::Email, "nope");
        assert_eq!(state.errors().get(FieldId::Email), Some("Invalid email"));
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut state = checkout();
        state.set_focus(FocusTarget::Field(FieldId::Town));
        for c in "Galle".chars() {
            state.push_char(c);
        }
        state.pop_char();
        assert_eq!(state.value(FieldId::Town), "Gall");

        state.clear_focused();
        assert_eq!(state.value(FieldId::Town), "");
    }

    #[test]
    fn test_typing_ignored_off_field() {
        let mut state = checkout();
        state.set_focus(FocusTarget::PlaceOrder);
        state.push_char('x');
        assert!(state.values().is_blank());
    }

    #[test]
    fn test_valid_submit_builds_payload() {
        let mut state = filled_checkout();
        state.select_payment(PaymentMethod::CashOnDelivery);

        let payload = state.prepare_submission().unwrap();
        assert_eq!(payload.form.first_name, "Nimal");
        assert_eq!(payload.payment_method, Some(PaymentMethod::CashOnDelivery));
        assert_eq!(payload.total_price.minor_units(), 154_900);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_required_payment_method_blocks_submit() {
        let mut state = filled_checkout();
        state.require_payment_method = true;

        assert!(state.prepare_submission().is_none());
        assert_eq!(
            state.errors().payment_method(),
            Some("Payment Method is required")
        );
        assert_eq!(
            state.focus(),
            FocusTarget::Payment(PaymentMethod::CashOnDelivery)
        );

        state.select_payment(PaymentMethod::Paypal);
        assert_eq!(state.errors().payment_method(), None);
        assert!(state.prepare_submission().is_some());
    }

    #[test]
    fn test_stale_results_are_rejected() {
        let mut state = filled_checkout();
        state.begin_submission(2);

        assert!(!state.complete_submission(1));
        assert!(!state.fail_submission(1, SubmitError::network("late")));
        assert_eq!(state.status().in_flight(), Some(2));

        assert!(state.fail_submission(2, SubmitError::network("refused")));
        assert!(state.status().is_failed());
        assert_eq!(state.value(FieldId::FirstName), "Nimal");
    }
}
