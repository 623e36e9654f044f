//! Footer payment and delivery information panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_core::{DELIVERY_SERVICE, PAYMENT_BADGES, PAYMENT_BLURB};

use crate::theme::{palette, styles};

/// Accepted payment networks and the delivery partner.
///
/// Terminals cannot show the badge images, so each badge renders as its alt
/// text in a bracketed pill. Given a single row, the panel condenses to the
/// badges and the delivery partner.
pub struct PaymentDeliveryPanel;

impl PaymentDeliveryPanel {
    fn badge(label: &str) -> Span<'_> {
        Span::styled(format!("[ {label} ]"), styles::text_bright_bold())
    }

    fn payment_lines() -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = PAYMENT_BLURB
            .iter()
            .map(|text| Line::styled(*text, styles::text_secondary()))
            .collect();

        let mut badges = Vec::new();
        for badge in PAYMENT_BADGES.iter() {
            badges.push(Self::badge(badge.alt));
            badges.push(Span::raw("  "));
        }
        lines.push(Line::from(badges));
        lines
    }

    fn condensed_line() -> Line<'static> {
        let mut spans = vec![Span::styled("We accept ", styles::text_secondary())];
        for badge in PAYMENT_BADGES.iter() {
            spans.push(Self::badge(badge.alt));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("  Delivery by ", styles::text_secondary()));
        spans.push(Self::badge(DELIVERY_SERVICE.alt));
        Line::from(spans)
    }

    fn delivery_lines() -> Vec<Line<'static>> {
        vec![
            Line::styled("Delivery Service", styles::accent_bold()).alignment(Alignment::Center),
            Line::from(Self::badge(DELIVERY_SERVICE.alt)),
            Line::styled(DELIVERY_SERVICE.description, styles::text_secondary())
                .alignment(Alignment::Right),
        ]
    }
}

impl Widget for PaymentDeliveryPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(palette::PANEL_BG));

        if area.height == 1 {
            Paragraph::new(Self::condensed_line())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let inner = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        let [payment, delivery] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .spacing(2)
                .areas(inner);

        Paragraph::new(Self::payment_lines())
            .wrap(Wrap { trim: true })
            .render(payment, buf);
        Paragraph::new(Self::delivery_lines())
            .wrap(Wrap { trim: true })
            .render(delivery, buf);
    }
}
