//! Layout shell widgets
//!
//! The fixed bars that frame every page: topbar, store header, navbar,
//! social bar and bottom bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use storefront_app::Route;
use storefront_core::{SOCIAL_LINKS, STORE_NAME};

use crate::theme::{palette, styles};

/// Thin strip above the header
pub struct Topbar;

impl Widget for Topbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(Line::from(vec![
            Span::styled(" Fresh groceries delivered to your door", styles::text_secondary()),
        ]))
        .style(Style::default().bg(palette::ACCENT_DIM))
        .render(area, buf);
    }
}

/// Store name banner
pub struct StoreHeader;

impl Widget for StoreHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(STORE_NAME, styles::accent_bold()),
            Span::styled("  Online", styles::text_secondary()),
        ]);

        // Bordered when there is room, a bare row otherwise
        if area.height >= 3 {
            let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(title).render(inner, buf);
        } else {
            Paragraph::new(title).render(area, buf);
        }
    }
}

/// Route tabs, active route highlighted
pub struct Navbar {
    active: Route,
}

impl Navbar {
    pub fn new(active: Route) -> Self {
        Self { active }
    }
}

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for route in Route::ALL {
            let style = if route == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", route.title()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

pub struct SocialBar;

impl Widget for SocialBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::styled("Follow us  ", styles::text_muted())];
        for (i, link) in SOCIAL_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*link, styles::accent()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Key hints for the current page
pub struct BottomBar {
    route: Route,
    can_retry: bool,
}

impl BottomBar {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            can_retry: false,
        }
    }

    /// Advertise Ctrl+R after a failed submission
    pub fn can_retry(mut self, can_retry: bool) -> Self {
        self.can_retry = can_retry;
        self
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.route {
            Route::Home => vec![("c", "checkout"), ("q", "quit")],
            Route::Checkout => {
                let mut hints = Vec::new();
                if self.can_retry {
                    hints.push(("Ctrl+R", "retry"));
                }
                hints.extend([
                    ("Ctrl+S", "place order"),
                    ("Tab", "next"),
                    ("Shift+Tab", "prev"),
                    ("Space", "select"),
                    ("Esc", "home"),
                ]);
                hints
            }
        }
    }
}

impl Widget for BottomBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_navbar_highlights_active_route() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(Navbar::new(Route::Checkout), term.area());

        assert!(term.buffer_contains("Home"));
        assert!(term.buffer_contains("Checkout"));

        let x = term.content().find("Checkout").unwrap() as u16;
        assert_eq!(term.buffer()[(x, 0)].style().bg, Some(palette::ACCENT));
        let x = term.content().find("Home").unwrap() as u16;
        assert_ne!(term.buffer()[(x, 0)].style().bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_store_header_compact_and_bordered() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(StoreHeader, term.area());
        assert!(term.line_contains(0, STORE_NAME));

        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(StoreHeader, term.area());
        assert!(term.line_contains(1, STORE_NAME));
    }

    #[test]
    fn test_social_bar_lists_links() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(SocialBar, term.area());
        for link in SOCIAL_LINKS {
            assert!(term.buffer_contains(link));
        }
    }

    #[test]
    fn test_bottom_bar_hints_per_route() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(BottomBar::new(Route::Home), term.area());
        assert!(term.buffer_contains("checkout"));

        term.render_widget(BottomBar::new(Route::Checkout), term.area());
        assert!(term.buffer_contains("Ctrl+S"));
        assert!(!term.buffer_contains("Ctrl+R"));

        term.render_widget(BottomBar::new(Route::Checkout).can_retry(true), term.area());
        assert!(term.buffer_contains("Ctrl+R retry"));
    }
}
