//! Transient notification toast

use std::time::{Duration, Instant};

pub const ORDER_PLACED_MESSAGE: &str = "Thank you! Your order has been placed.";

/// Shown when an order fails after the customer left the checkout page
pub const ORDER_FAILED_MESSAGE: &str = "Your order could not be placed. Press c to review it.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message shown over the page until it times out or is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    timeout: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, timeout: Duration) -> Self {
        Self::shown_at(message, kind, timeout, Instant::now())
    }

    pub fn success(message: impl Into<String>, timeout: Duration) -> Self {
        Self::new(message, NotificationKind::Success, timeout)
    }

    pub fn error(message: impl Into<String>, timeout: Duration) -> Self {
        Self::new(message, NotificationKind::Error, timeout)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn shown_at(
        message: impl Into<String>,
        kind: NotificationKind,
        timeout: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
            timeout,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let start = Instant::now();
        let toast = Notification::shown_at(
            ORDER_PLACED_MESSAGE,
            NotificationKind::Success,
            Duration::from_secs(6),
            start,
        );

        assert!(!toast.is_expired_at(start + Duration::from_secs(5)));
        assert!(toast.is_expired_at(start + Duration::from_secs(6)));
        assert!(toast.is_expired_at(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let toast = Notification::success("done", Duration::ZERO);
        assert!(toast.is_expired_at(Instant::now()));
    }
}
