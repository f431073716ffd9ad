//! Process-wide deck configuration.
//!
//! A [`Theme`] bundles the palette, slide size, default font, footer branding
//! and accent bar height. It is a plain `Copy` value: a presentation takes
//! its own copy at creation and nothing mutates it afterwards.

use crate::color::{Color, Palette};
use crate::units::Emu;

/// Immutable visual configuration shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Name written into the package's theme part.
    pub name: &'static str,
    pub palette: Palette,
    pub slide_width: Emu,
    pub slide_height: Emu,
    /// Font family used when a style does not name one.
    pub font_family: &'static str,
    /// Default footer text.
    pub footer_text: &'static str,
    pub accent_bar_height: Emu,
}

/// Dark navy palette of the MailMind deck.
pub const MAILMIND_PALETTE: Palette = Palette {
    background: Color::rgb(15, 23, 42),
    white: Color::WHITE,
    light_gray: Color::rgb(148, 163, 184),
    mid_gray: Color::rgb(100, 116, 139),
    electric_blue: Color::rgb(59, 130, 246),
    teal: Color::rgb(6, 182, 212),
    purple: Color::rgb(139, 92, 246),
    red: Color::rgb(239, 68, 68),
    green: Color::rgb(34, 197, 94),
    amber: Color::rgb(245, 158, 11),
    card_bg: Color::rgb(30, 41, 59),
    card_bg_light: Color::rgb(51, 65, 85),
    card_bg_dark: Color::rgb(22, 33, 50),
};

/// 13.333 x 7.5 in widescreen slides, Calibri, 0.08 in accent bar.
pub const MAILMIND: Theme = Theme {
    name: "MailMind",
    palette: MAILMIND_PALETTE,
    slide_width: Emu(12_191_695),
    slide_height: Emu(6_858_000),
    font_family: "Calibri",
    footer_text: "Team Cipher  |  AlgoQuest 2025",
    accent_bar_height: Emu(73_152),
};

impl Default for Theme {
    fn default() -> Self {
        MAILMIND
    }
}
