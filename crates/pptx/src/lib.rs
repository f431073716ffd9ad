//! PPTX (Office Open XML) backend for slide decks.
//!
//! Writes a [`deck_core::Presentation`] as a .pptx file, a ZIP archive of XML
//! parts, and reads the outline of such files back for verification.

mod package;
mod slide;
mod xml;

pub mod reader;
pub mod writer;

pub use reader::PptxReader;
pub use writer::PptxWriter;
