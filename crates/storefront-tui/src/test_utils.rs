//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can render
//! and search the resulting buffer as text.


use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use storefront_app::{AppState, Settings};
use storefront_core::TotalPrice;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Tall terminal that shows the full shell
pub const TALL_WIDTH: u16 = 100;
pub const TALL_HEIGHT: u16 = 40;

/// Test wrapper around a ratatui `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 100x40, tall enough for the full shell
    pub fn tall() -> Self {
        Self::with_size(TALL_WIDTH, TALL_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// First row whose text contains `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| self.line_contains(y, text))
    }

    /// All content as a string, one row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState with default settings and an LKR 1549.00 total
pub fn create_test_state() -> AppState {
    AppState::new(
        Settings::default(),
        TotalPrice::from_minor_units(154_900, "LKR"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::tall().area(), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_buffer_search() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(0));
        assert_eq!(term.content().lines().count(), 3);
    }
}
