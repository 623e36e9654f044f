//! Notification toast

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use storefront_app::{Notification, NotificationKind};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// Toast anchored to the bottom-right corner of the area it is rendered into
pub struct NotificationToast<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationToast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Rect the toast occupies inside `area`
    pub fn toast_area(&self, area: Rect) -> Rect {
        // icon + padding + borders
        let width = (self.notification.message.width() as u16 + 6).min(area.width);
        let height = 4.min(area.height);
        Rect::new(
            area.x + area.width - width,
            area.y + area.height - height,
            width,
            height,
        )
    }
}

impl Widget for NotificationToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let toast = self.toast_area(area);
        let (icon, accent) = match self.notification.kind {
            NotificationKind::Success => ("✓ ", styles::status_green()),
            NotificationKind::Error => ("✗ ", styles::status_red()),
        };

        Clear.render(toast, buf);
        let block = styles::glass_block(true)
            .border_style(accent)
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(toast);
        block.render(toast, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(icon, accent),
                Span::styled(self.notification.message.as_str(), styles::text_bright_bold()),
            ]),
            Line::styled("Esc to dismiss", styles::text_muted()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
