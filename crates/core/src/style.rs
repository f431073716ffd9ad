//! Text style records used by the layout helpers.

use crate::color::Color;
use crate::units::{pt, Points};
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The `algn` attribute value for this alignment.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }
}

/// Character and paragraph options for text helpers.
///
/// Run-level helpers read `size`, `color`, `bold` and `font`; paragraph-level
/// helpers also read `alignment` and `space_after`; text box helpers also
/// read `word_wrap`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: Points,
    pub color: Color,
    pub bold: bool,
    pub alignment: Alignment,
    /// Font family; `None` uses the theme font.
    pub font: Option<String>,
    pub word_wrap: bool,
    /// Space after the paragraph; `None` leaves the helper's default.
    pub space_after: Option<Points>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: pt(18.0),
            color: Color::WHITE,
            bold: false,
            alignment: Alignment::Left,
            font: None,
            word_wrap: true,
            space_after: None,
        }
    }
}

impl TextStyle {
    /// Default style at the given point size.
    pub fn sized(points: f64) -> Self {
        Self {
            size: pt(points),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Shorthand for `with_bold(true)`.
    pub fn bold(self) -> Self {
        self.with_bold(true)
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Shorthand for center alignment.
    pub fn centered(self) -> Self {
        self.with_alignment(Alignment::Center)
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn with_space_after(mut self, space_after: Points) -> Self {
        self.space_after = Some(space_after);
        self
    }
}
