//! Structural summaries of a deck.
//!
//! The same outline can be produced from an in-memory [`Presentation`] and
//! from a written `.pptx`, so a saved file can be checked against what was
//! built.
//!
//! [`Presentation`]: crate::model::Presentation

use crate::color::Color;
use crate::model::ShapeKind;
use crate::units::Rect;
use serde::{Deserialize, Serialize};

/// Outline of an entire deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckOutline {
    /// Slides in presentation order.
    pub slides: Vec<SlideOutline>,
}

impl DeckOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slide to the outline.
    pub fn add_slide(&mut self, slide: SlideOutline) {
        self.slides.push(slide);
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of shapes on each slide, in order.
    pub fn shape_counts(&self) -> Vec<usize> {
        self.slides.iter().map(SlideOutline::shape_count).collect()
    }
}

/// Outline of a single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,

    /// Solid background color, if the slide sets one.
    pub background: Option<Color>,

    /// Shapes in document (z) order.
    pub shapes: Vec<ShapeOutline>,
}

impl SlideOutline {
    /// Create an empty outline for the given slide number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn add_shape(&mut self, shape: ShapeOutline) {
        self.shapes.push(shape);
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Non-empty shape texts in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .map(|s| s.text.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// Outline of a single shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOutline {
    pub kind: ShapeKind,

    /// Position and size in EMUs.
    pub rect: Rect,

    /// Whether the border is explicitly switched off.
    pub border_hidden: bool,

    /// Paragraphs joined by newlines; empty for shapes without text.
    pub text: String,
}

impl ShapeOutline {
    /// Create an outline for a shape of `kind` with no geometry or text yet.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            rect: Rect::default(),
            border_hidden: false,
            text: String::new(),
        }
    }
}
