//! Domain types for a deck under construction.
//!
//! Ownership runs strictly downwards: a [`Presentation`] owns its slides, a
//! [`Slide`] owns its shapes, a [`Shape`] owns its optional [`TextFrame`].
//! Slides and shapes are append-only; nothing here removes or reorders them.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::outline::{DeckOutline, ShapeOutline, SlideOutline};
use crate::style::{Alignment, TextStyle};
use crate::theme::Theme;
use crate::units::{Emu, Points, Rect};
use serde::{Deserialize, Serialize};

/// The kinds of shape a deck is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Sharp-cornered filled rectangle.
    Rectangle,
    /// Rounded filled rectangle (a card).
    RoundedRectangle,
    /// Borderless text container.
    TextBox,
}

impl ShapeKind {
    /// The DrawingML preset geometry name.
    pub fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rectangle | ShapeKind::TextBox => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
        }
    }

    /// Base of the shape's display name, e.g. "TextBox 3".
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::TextBox => "TextBox",
        }
    }
}

/// Interior fill of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    NoFill,
    Solid(Color),
}

/// Border of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    /// Whatever the shape style supplies.
    Theme,
    /// Explicitly no line.
    Hidden,
}

/// Handle to a shape on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// A run of uniformly styled text. `\n` in `text` is a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub size: Points,
    pub color: Color,
    pub bold: bool,
    /// `None` inherits the theme font.
    pub font: Option<String>,
}

impl Run {
    /// Create a run carrying the character options of `style`.
    pub fn new(text: impl Into<String>, style: &TextStyle) -> Self {
        Self {
            text: text.into(),
            size: style.size,
            color: style.color,
            bold: style.bold,
            font: style.font.clone(),
        }
    }
}

/// A paragraph: alignment, spacing and an ordered list of runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub alignment: Alignment,
    pub space_after: Option<Points>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Paragraph container owned by a text-bearing shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFrame {
    /// A new frame always holds one empty paragraph.
    pub fn new() -> Self {
        Self {
            word_wrap: true,
            paragraphs: vec![Paragraph::new()],
        }
    }

    /// The first paragraph, which every frame has.
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Plain text with paragraphs separated by newlines, trimmed.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for paragraph in &self.paragraphs {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&paragraph.text());
        }
        text.trim().to_string()
    }
}

/// A positioned, sized, styled primitive on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    name: String,
    kind: ShapeKind,
    rect: Rect,
    fill: Fill,
    outline: Outline,
    text_frame: Option<TextFrame>,
}

impl Shape {
    fn new(id: ShapeId, kind: ShapeKind, rect: Rect) -> Self {
        Self {
            id,
            // Shape ids start at 2; names count from 1.
            name: format!("{} {}", kind.display_name(), id.0 - 1),
            kind,
            rect,
            fill: Fill::NoFill,
            outline: Outline::Theme,
            text_frame: match kind {
                ShapeKind::TextBox => Some(TextFrame::new()),
                _ => None,
            },
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    pub fn outline(&self) -> Outline {
        self.outline
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    /// The text frame, created empty if the shape has none yet.
    pub fn text_frame_or_default(&mut self) -> &mut TextFrame {
        self.text_frame.get_or_insert_with(TextFrame::new)
    }

    /// Fill the interior with a solid color.
    pub fn set_solid_fill(&mut self, color: Color) -> &mut Self {
        self.fill = Fill::Solid(color);
        self
    }

    /// Remove the border.
    pub fn hide_outline(&mut self) -> &mut Self {
        self.outline = Outline::Hidden;
        self
    }

    fn to_outline(&self) -> ShapeOutline {
        ShapeOutline {
            kind: self.kind,
            rect: self.rect,
            border_hidden: self.outline == Outline::Hidden,
            text: self.text_frame.as_ref().map(TextFrame::text).unwrap_or_default(),
        }
    }
}

/// One page of the deck: an append-only list of shapes over a background.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    number: usize,
    theme: Theme,
    background: Option<Color>,
    shapes: Vec<Shape>,
}

impl Slide {
    /// Create a blank slide with the given 1-based number.
    pub fn new(number: usize, theme: Theme) -> Self {
        Self {
            number,
            theme,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn width(&self) -> Emu {
        self.theme.slide_width
    }

    pub fn height(&self) -> Emu {
        self.theme.slide_height
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    /// Shapes in insertion (z) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Look up a shape by the handle returned when it was added.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Append a shape of `kind` at `rect`.
    ///
    /// Fails with [`Error::InvalidGeometry`] when the extent is negative or
    /// the shape reaches past the slide's edges.
    pub fn add_shape(&mut self, kind: ShapeKind, rect: Rect) -> Result<&mut Shape> {
        self.check_bounds(kind, &rect)?;

        // Id 1 is the slide's group shape.
        let id = ShapeId(self.shapes.len() as u32 + 2);
        self.shapes.push(Shape::new(id, kind, rect));
        let last = self.shapes.len() - 1;
        Ok(&mut self.shapes[last])
    }

    fn check_bounds(&self, kind: ShapeKind, rect: &Rect) -> Result<()> {
        let negative = [rect.left, rect.top, rect.width, rect.height]
            .iter()
            .any(|v| v.0 < 0);
        if negative {
            return Err(Error::InvalidGeometry(format!(
                "{} at {} on slide {} has a negative coordinate or extent",
                kind.display_name(),
                rect,
                self.number
            )));
        }

        if rect.right() > self.width() || rect.bottom() > self.height() {
            return Err(Error::InvalidGeometry(format!(
                "{} at {} extends past the {:.3}in x {:.3}in bounds of slide {}",
                kind.display_name(),
                rect,
                self.width().inches(),
                self.height().inches(),
                self.number
            )));
        }

        Ok(())
    }

    /// Structural summary of this slide.
    pub fn outline(&self) -> SlideOutline {
        SlideOutline {
            number: self.number,
            background: self.background,
            shapes: self.shapes.iter().map(Shape::to_outline).collect(),
        }
    }
}

/// A whole deck: the theme plus slides in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    title: String,
    theme: Theme,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            theme,
            slides: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Append a blank slide and return it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let number = self.slides.len() + 1;
        self.slides.push(Slide::new(number, self.theme));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Structural summary of the whole deck.
    pub fn outline(&self) -> DeckOutline {
        DeckOutline {
            slides: self.slides.iter().map(Slide::outline).collect(),
        }
    }
}
