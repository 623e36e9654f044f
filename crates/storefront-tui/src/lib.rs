//! storefront-tui - Terminal UI for the GREEN storefront
//!
//! Renders [`storefront_app::AppState`] with ratatui and feeds crossterm key
//! events back into the TEA update loop. Order submission runs on whatever
//! [`storefront_client::OrderSubmitter`] the caller hands to [`run`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
