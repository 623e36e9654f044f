//! Payment method selector

use storefront_core::PaymentMethod;

/// At most one chosen payment method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentSelection(Option<PaymentMethod>);

impl PaymentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `method`, replacing any previous choice.
    ///
    /// Choosing the current method again keeps it selected.
    pub fn select(&mut self, method: PaymentMethod) {
        self.0 = Some(method);
    }

    pub fn selected(&self) -> Option<PaymentMethod> {
        self.0
    }

    pub fn is_selected(&self, method: PaymentMethod) -> bool {
        self.0 == Some(method)
    }
}
