//! Core document model, theme, and layout helpers for building slide decks.

pub mod color;
pub mod error;
pub mod layout;
pub mod model;
pub mod outline;
pub mod style;
pub mod theme;
pub mod units;

pub use color::{Color, Palette};
pub use error::{Error, Result};
pub use layout::AccentBar;
pub use model::{
    Fill, Outline, Paragraph, Presentation, Run, Shape, ShapeId, ShapeKind, Slide, TextFrame,
};
pub use outline::{DeckOutline, ShapeOutline, SlideOutline};
pub use style::{Alignment, TextStyle};
pub use theme::{Theme, MAILMIND};
pub use units::{pt, Emu, Points, Rect};
