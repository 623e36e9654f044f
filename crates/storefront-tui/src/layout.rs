//! Screen layout for the storefront shell
//!
//! Splits the terminal into the shell sections, top to bottom, in the order
//! given by [`SHELL_SECTIONS`]. Short terminals condense the footer panel to
//! one row, drop the social bar and shrink the header to a single row.

use ratatui::layout::{Constraint, Layout, Rect};
use storefront_core::{ShellSection, SHELL_SECTIONS};

/// Below this height the compact shell is used
pub const FULL_SHELL_MIN_HEIGHT: u16 = 30;

/// Screen areas for each shell section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellAreas {
    pub topbar: Rect,
    pub header: Rect,
    pub navbar: Rect,
    /// Routed page
    pub content: Rect,
    /// Payment and delivery panel
    pub footer: Rect,
    pub social_bar: Rect,
    pub bottom_bar: Rect,
}

impl ShellAreas {
    /// Area assigned to `section`
    pub fn section(&self, section: ShellSection) -> Rect {
        match section {
            ShellSection::Topbar => self.topbar,
            ShellSection::Header => self.header,
            ShellSection::Navbar => self.navbar,
            ShellSection::Content => self.content,
            ShellSection::Footer => self.footer,
            ShellSection::SocialBar => self.social_bar,
            ShellSection::BottomBar => self.bottom_bar,
        }
    }
}

fn constraint_for(section: ShellSection, compact: bool) -> Constraint {
    match (section, compact) {
        (ShellSection::Topbar, _) => Constraint::Length(1),
        (ShellSection::Header, false) => Constraint::Length(3),
        (ShellSection::Header, true) => Constraint::Length(1),
        (ShellSection::Navbar, _) => Constraint::Length(1),
        (ShellSection::Content, _) => Constraint::Min(4),
        (ShellSection::Footer, false) => Constraint::Length(6),
        (ShellSection::Footer, true) => Constraint::Length(1),
        (ShellSection::SocialBar, false) => Constraint::Length(1),
        (ShellSection::SocialBar, true) => Constraint::Length(0),
        (ShellSection::BottomBar, _) => Constraint::Length(1),
    }
}

/// Create the shell layout for `area`
pub fn create(area: Rect) -> ShellAreas {
    let compact = area.height < FULL_SHELL_MIN_HEIGHT;
    let constraints = SHELL_SECTIONS.map(|section| constraint_for(section, compact));
    let chunks = Layout::vertical(constraints).split(area);

    ShellAreas {
        topbar: chunks[0],
        header: chunks[1],
        navbar: chunks[2],
        content: chunks[3],
        footer: chunks[4],
        social_bar: chunks[5],
        bottom_bar: chunks[6],
    }
}
