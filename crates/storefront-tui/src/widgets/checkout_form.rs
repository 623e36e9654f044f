//! Checkout form widget
//!
//! Renders the billing fields straight from the `FIELDS` table, the payment
//! selector, the order total and the Place Order button. The form scrolls so
//! the focused control always stays on screen. Each field is drawn according
//! to its `InputKind`: descriptions wrap over several rows and typed fields
//! show a muted placeholder while empty.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_app::{CheckoutState, FocusTarget};
use storefront_client::SubmitError;
use storefront_core::{FieldSpec, InputKind, PaymentMethod, FIELDS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Width of the label column, including the required marker
const LABEL_WIDTH: usize = 16;
const FOCUS_MARKER: &str = "▸ ";
const NO_MARKER: &str = "  ";
const CURSOR: &str = "▏";
/// Rows a multiline value may occupy before older text scrolls off
const MULTILINE_ROWS: usize = 3;

/// Muted hint shown in an empty field
fn placeholder(kind: InputKind) -> Option<&'static str> {
    match kind {
        InputKind::Numeric => Some("digits only"),
        InputKind::Phone => Some("e.g. 0771234567"),
        InputKind::Email => Some("name@example.com"),
        InputKind::Text | InputKind::Multiline => None,
    }
}

/// Split `value` into rows of at most `max_width` columns
fn wrap_columns(value: &str, max_width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    if max_width == 0 {
        return rows;
    }

    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            rows.push(String::new());
            used = 0;
        }
        used += w;
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
    }
    rows
}

/// Keep the end of `value` (where typing happens) within `max_width` columns
fn fit_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // one column for the ellipsis
    let mut used = 1;
    let mut tail = Vec::new();
    for c in value.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        tail.push(c);
    }

    let mut out = String::from("…");
    out.extend(tail.into_iter().rev());
    out
}

/// Number of rows to scroll so `focus_line` and the row below it are visible
fn scroll_offset(focus_line: usize, total_lines: usize, height: usize) -> usize {
    if height == 0 || focus_line + 2 <= height {
        return 0;
    }
    (focus_line + 2 - height).min(total_lines.saturating_sub(height))
}

pub struct CheckoutForm<'a> {
    checkout: &'a CheckoutState,
}

impl<'a> CheckoutForm<'a> {
    pub fn new(checkout: &'a CheckoutState) -> Self {
        Self { checkout }
    }

    fn marker(&self, target: FocusTarget) -> Span<'static> {
        if self.checkout.focus() == target {
            Span::styled(FOCUS_MARKER, styles::accent_bold())
        } else {
            Span::raw(NO_MARKER)
        }
    }

    /// Rows for one field; multiline values continue under the value column
    fn field_lines(&self, spec: &FieldSpec, width: usize) -> Vec<Line<'static>> {
        let target = FocusTarget::Field(spec.id);
        let focused = self.checkout.focus() == target;
        let has_error = self.checkout.errors().get(spec.id).is_some();

        let mut label = spec.label();
        if spec.is_required() {
            label.push_str(" *");
        }
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let value = self.checkout.value(spec.id);
        // one column kept free for the cursor
        let available = width.saturating_sub(NO_MARKER.len() + LABEL_WIDTH + 1);
        let value_style = if has_error {
            styles::status_red()
        } else {
            styles::text_primary()
        };

        let mut first = vec![
            self.marker(target),
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        ];

        if value.is_empty() {
            if focused {
                first.push(Span::styled(CURSOR, styles::accent()));
            }
            match placeholder(spec.input) {
                Some(hint) => first.push(Span::styled(hint, styles::text_muted())),
                None if !focused => first.push(Span::styled("·", styles::text_muted())),
                None => {}
            }
            return vec![Line::from(first)];
        }

        let rows = if spec.input == InputKind::Multiline {
            let mut rows = wrap_columns(value, available);
            if rows.len() > MULTILINE_ROWS {
                rows.drain(..rows.len() - MULTILINE_ROWS);
            }
            rows
        } else {
            vec![fit_tail(value, available)]
        };

        let indent = " ".repeat(NO_MARKER.len() + LABEL_WIDTH);
        let last = rows.len() - 1;
        let mut lines = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let mut spans = if i == 0 {
                std::mem::take(&mut first)
            } else {
                vec![Span::raw(indent.clone())]
            };
            spans.push(Span::styled(row, value_style));
            if focused && i == last {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn error_line(message: &str) -> Line<'static> {
        Line::styled(
            format!("{}{message}", " ".repeat(NO_MARKER.len() + LABEL_WIDTH)),
            styles::status_red(),
        )
    }

    fn payment_line(&self, method: PaymentMethod) -> Line<'static> {
        let target = FocusTarget::Payment(method);
        let checked = if self.checkout.payment().is_selected(method) {
            "[x] "
        } else {
            "[ ] "
        };
        let style = if self.checkout.focus() == target {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        Line::from(vec![
            self.marker(target),
            Span::styled(checked, styles::accent()),
            Span::styled(method.as_str(), style),
        ])
    }

    fn button_line(&self) -> Line<'static> {
        let (label, style) = if self.checkout.is_submitting() {
            ("[ Placing your order… ]", styles::disabled())
        } else if self.checkout.focus() == FocusTarget::PlaceOrder {
            ("[ Place an Order ]", styles::focused_selected())
        } else {
            ("[ Place an Order ]", styles::accent_bold())
        };

        Line::from(vec![self.marker(FocusTarget::PlaceOrder), Span::styled(label, style)])
    }

    /// All rows of the form plus the row index of the focused control
    fn build_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let focus = self.checkout.focus();
        let mut focus_line = 0;
        let mut lines = vec![
            Line::styled("Billing Details", styles::accent_bold()),
            Line::default(),
        ];

        for spec in FIELDS.iter() {
            let rows = self.field_lines(spec, width);
            if focus == FocusTarget::Field(spec.id) {
                // the cursor sits on the last row
                focus_line = lines.len() + rows.len() - 1;
            }
            lines.extend(rows);
            if let Some(message) = self.checkout.errors().get(spec.id) {
                lines.push(Self::error_line(message));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled("Select Payment", styles::accent_bold()));
        for method in PaymentMethod::ALL {
            if focus == FocusTarget::Payment(method) {
                focus_line = lines.len();
            }
            lines.push(self.payment_line(method));
        }
        if let Some(message) = self.checkout.errors().payment_method() {
            lines.push(Self::error_line(message));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(NO_MARKER),
            Span::styled("Total: ", styles::text_secondary()),
            Span::styled(
                self.checkout.total_price().to_string(),
                styles::text_bright_bold(),
            ),
        ]));

        lines.push(Line::default());
        if focus == FocusTarget::PlaceOrder {
            focus_line = lines.len();
        }
        lines.push(self.button_line());

        (lines, focus_line)
    }
}

impl Widget for CheckoutForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Checkout ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, focus_line) = self.build_lines(inner.width as usize);
        let offset = scroll_offset(focus_line, lines.len(), inner.height as usize);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

/// Banner shown above the form after a failed submission
pub struct FailureBanner<'a> {
    error: &'a SubmitError,
}

impl<'a> FailureBanner<'a> {
    /// Rows needed including borders
    pub const HEIGHT: u16 = 4;

    pub fn new(error: &'a SubmitError) -> Self {
        Self { error }
    }
}

impl Widget for FailureBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .border_style(styles::status_red())
            .title(Span::styled(" Order failed ", styles::status_red()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let hint = if self.error.is_retryable() {
            Line::from(vec![
                Span::styled("Your details are kept. Press ", styles::text_secondary()),
                Span::styled("Ctrl+R to retry", styles::keybinding()),
            ])
        } else {
            Line::from(vec![
                Span::styled("Your details are kept. Correct them, then press ", styles::text_secondary()),
                Span::styled("Ctrl+S", styles::keybinding()),
            ])
        };
        let lines = vec![Line::styled(self.error.to_string(), styles::status_red()), hint];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default())
            .render(inner, buf);
    }
}
