//! Key event handlers, one per route

use crate::checkout::FocusTarget;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Route};

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.route {
        Route::Home => handle_key_home(state, key),
        Route::Checkout => handle_key_checkout(state, key),
    }
}

fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') | InputKey::Enter => Some(Message::OpenCheckout),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc if state.notification.is_some() => Some(Message::DismissNotification),
        _ => None,
    }
}

fn handle_key_checkout(state: &AppState, key: InputKey) -> Option<Message> {
    let checkout = &state.checkout;

    // Shortcuts that work whatever is focused
    match key {
        InputKey::Esc if state.notification.is_some() => return Some(Message::DismissNotification),
        InputKey::Esc => return Some(Message::GoHome),
        InputKey::CharCtrl('s') => return Some(Message::SubmitCheckout),
        InputKey::CharCtrl('r') if checkout.status().can_retry() => {
            return Some(Message::SubmitCheckout)
        }
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        _ => {}
    }

    match checkout.focus() {
        FocusTarget::Field(_) => match key {
            InputKey::Char(c) => Some(Message::InputChar(c)),
            InputKey::Backspace => Some(Message::InputBackspace),
            InputKey::CharCtrl('u') => Some(Message::InputClear),
            InputKey::Enter => Some(Message::FocusNext),
            _ => None,
        },
        FocusTarget::Payment(method) => match key {
            InputKey::Char(' ') | InputKey::Enter => Some(Message::SelectPaymentMethod(method)),
            InputKey::Left => Some(Message::FocusPrev),
            InputKey::Right => Some(Message::FocusNext),
            _ => None,
        },
        FocusTarget::PlaceOrder => match key {
            InputKey::Char(' ') | InputKey::Enter => Some(Message::SubmitCheckout),
            InputKey::Left => Some(Message::FocusPrev),
            _ => None,
        },
    }
}
