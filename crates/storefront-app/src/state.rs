//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use storefront_client::OrderReceipt;
use storefront_core::prelude::*;
use storefront_core::TotalPrice;

use crate::checkout::{CheckoutState, SubmissionId};
use crate::config::Settings;
use crate::notification::{Notification, ORDER_FAILED_MESSAGE, ORDER_PLACED_MESSAGE};

/// Page currently shown in the content area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Landing page (site root)
    #[default]
    Home,
    Checkout,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Checkout];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Checkout => "Checkout",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub route: Route,

    pub checkout: CheckoutState,

    /// Toast shown over the page, if any
    pub notification: Option<Notification>,

    /// Acknowledgment of the most recent accepted order
    pub last_receipt: Option<OrderReceipt>,

    /// Application settings from config file
    pub settings: Settings,

    /// Where orders are sent, shown on the landing page
    pub order_destination: String,

    pub phase: AppPhase,

    /// Total applied to every fresh checkout
    order_total: TotalPrice,

    next_submission_id: SubmissionId,
}

impl AppState {
    pub fn new(settings: Settings, order_total: TotalPrice) -> Self {
        let checkout =
            CheckoutState::new(order_total.clone(), settings.checkout.require_payment_method);
        let order_destination = settings.order.endpoint.clone();

        Self {
            route: Route::Home,
            checkout,
            notification: None,
            last_receipt: None,
            settings,
            order_destination,
            phase: AppPhase::Running,
            order_total,
            next_submission_id: 1,
        }
    }

    pub fn order_total(&self) -> &TotalPrice {
        &self.order_total
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Checkout lifecycle
    // ─────────────────────────────────────────────────────────

    /// Hand out the id for a new submission attempt
    pub fn allocate_submission_id(&mut self) -> SubmissionId {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        id
    }

    /// Discard the current checkout and start an empty one
    pub fn reset_checkout(&mut self) {
        self.checkout = CheckoutState::new(
            self.order_total.clone(),
            self.settings.checkout.require_payment_method,
        );
    }

    /// Confirmation, navigation home and a fresh form after an accepted order
    pub fn finish_order(&mut self, receipt: OrderReceipt) {
        info!(order_id = ?receipt.order_id(), "Order placed");
        self.notification = Some(Notification::success(
            ORDER_PLACED_MESSAGE,
            self.notification_timeout(),
        ));
        self.route = Route::Home;
        self.reset_checkout();
        self.last_receipt = Some(receipt);
    }

    /// Point the customer back to checkout after a failure they did not see
    pub fn notify_order_failed(&mut self) {
        self.notification = Some(Notification::error(
            ORDER_FAILED_MESSAGE,
            self.notification_timeout(),
        ));
    }

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.settings.ui.notification_timeout_ms)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drop the notification once its timeout has passed
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            debug!("Notification expired");
            self.notification = None;
        }
    }
}
