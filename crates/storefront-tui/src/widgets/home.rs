//! Landing page

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_app::CheckoutState;
use storefront_client::OrderReceipt;
use storefront_core::{TotalPrice, STORE_NAME};

use crate::theme::styles;

/// What the checkout page holds while the customer is on the landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingCheckout {
    #[default]
    Empty,
    Draft,
    Submitting,
    Failed,
}

impl PendingCheckout {
    pub fn of(checkout: &CheckoutState) -> Self {
        let status = checkout.status();
        if status.is_failed() {
            PendingCheckout::Failed
        } else if status.is_submitting() {
            PendingCheckout::Submitting
        } else if checkout.values().is_blank() {
            PendingCheckout::Empty
        } else {
            PendingCheckout::Draft
        }
    }
}

/// Welcome text, the most recent order and the way into checkout
pub struct HomePage<'a> {
    total: &'a TotalPrice,
    last_receipt: Option<&'a OrderReceipt>,
    pending: PendingCheckout,
    destination: Option<&'a str>,
}

impl<'a> HomePage<'a> {
    pub fn new(total: &'a TotalPrice) -> Self {
        Self {
            total,
            last_receipt: None,
            pending: PendingCheckout::Empty,
            destination: None,
        }
    }

    pub fn last_receipt(mut self, receipt: Option<&'a OrderReceipt>) -> Self {
        self.last_receipt = receipt;
        self
    }

    pub fn pending(mut self, pending: PendingCheckout) -> Self {
        self.pending = pending;
        self
    }

    /// Order service URL shown under the hint
    pub fn destination(mut self, destination: &'a str) -> Self {
        self.destination = Some(destination);
        self
    }

    fn hint_line(&self) -> Line<'static> {
        let key = Span::styled("c", styles::keybinding());
        match self.pending {
            PendingCheckout::Empty => Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                key,
                Span::styled(" to check out", styles::text_muted()),
            ]),
            PendingCheckout::Draft => Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                key,
                Span::styled(" to continue your checkout", styles::text_muted()),
            ]),
            PendingCheckout::Submitting => Line::from(vec![
                Span::styled("Placing your order… press ", styles::text_secondary()),
                key,
                Span::styled(" to follow it", styles::text_secondary()),
            ]),
            PendingCheckout::Failed => Line::from(vec![
                Span::styled("Your order was not placed. Press ", styles::status_red()),
                key,
                Span::styled(" to review it", styles::status_red()),
            ]),
        }
    }

    fn receipt_line(receipt: &OrderReceipt) -> Line<'static> {
        let time = receipt.received_at.format("%H:%M:%S");
        let text = match receipt.order_id() {
            Some(id) => format!("Last order: {id} (placed at {time})"),
            None => format!("Last order placed at {time}"),
        };
        Line::styled(text, styles::status_green())
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::default(),
            Line::styled(format!("Welcome to {STORE_NAME}"), styles::accent_bold()),
            Line::styled(
                "Fresh produce and everyday essentials, delivered.",
                styles::text_secondary(),
            ),
            Line::default(),
            Line::from(vec![
                Span::styled("Your basket: ", styles::text_secondary()),
                Span::styled(self.total.to_string(), styles::text_bright_bold()),
            ]),
        ];

        if let Some(receipt) = self.last_receipt {
            lines.push(Self::receipt_line(receipt));
        }

        lines.push(Line::default());
        lines.push(self.hint_line());

        if let Some(destination) = self.destination {
            lines.push(Line::styled(
                format!("Orders are sent to {destination}"),
                styles::text_muted(),
            ));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
