//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use storefront_app::{AppState, Route};
use storefront_core::{ShellSection, SHELL_SECTIONS};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the checkout form derives its scroll
/// position from the focused control on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    for section in SHELL_SECTIONS {
        let rect = areas.section(section);
        match section {
            ShellSection::Topbar => frame.render_widget(widgets::Topbar, rect),
            ShellSection::Header => frame.render_widget(widgets::StoreHeader, rect),
            ShellSection::Navbar => frame.render_widget(widgets::Navbar::new(state.route), rect),
            ShellSection::Content => render_content(frame, state, rect),
            ShellSection::Footer => frame.render_widget(widgets::PaymentDeliveryPanel, rect),
            ShellSection::SocialBar => frame.render_widget(widgets::SocialBar, rect),
            ShellSection::BottomBar => frame.render_widget(
                widgets::BottomBar::new(state.route).can_retry(state.checkout.status().can_retry()),
                rect,
            ),
        }
    }

    if let Some(notification) = &state.notification {
        frame.render_widget(widgets::NotificationToast::new(notification), areas.content);
    }
}

fn render_content(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.route {
        Route::Home => {
            let home = widgets::HomePage::new(state.order_total())
                .last_receipt(state.last_receipt.as_ref())
                .pending(widgets::PendingCheckout::of(&state.checkout))
                .destination(&state.order_destination);
            frame.render_widget(home, area);
        }
        Route::Checkout => render_checkout(frame, state, area),
    }
}

fn render_checkout(frame: &mut Frame, state: &AppState, area: Rect) {
    let form = widgets::CheckoutForm::new(&state.checkout);

    match state.checkout.status().error() {
        Some(error) => {
            let [banner, rest] = Layout::vertical([
                Constraint::Length(widgets::FailureBanner::HEIGHT),
                Constraint::Min(0),
            ])
            .areas(area);
            frame.render_widget(widgets::FailureBanner::new(error), banner);
            frame.render_widget(form, rest);
        }
        None => frame.render_widget(form, area),
    }
}
