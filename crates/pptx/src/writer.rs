//! PPTX package writer.

use crate::package::{self, *};
use crate::slide::{slide_rels_xml, slide_xml};
use deck_core::{Error, Presentation, Result};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writer for PPTX (Office Open XML) packages.
pub struct PptxWriter {
    creator: String,
}

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self {
            creator: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Set the author recorded in the document properties.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Write a presentation as a PPTX package and return the inner writer.
    pub fn write<W: Write + Seek>(&self, presentation: &Presentation, writer: W) -> Result<W> {
        let parts = self.render_parts(presentation)?;

        // Fixed timestamps keep repeated saves byte-identical.
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut archive = ZipWriter::new(writer);
        for (path, content) in &parts {
            archive
                .start_file(path.as_str(), options)
                .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
            archive.write_all(content.as_bytes())?;
            log::debug!("Wrote {} ({} bytes)", path, content.len());
        }

        archive
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Write a presentation into an in-memory buffer.
    pub fn to_bytes(&self, presentation: &Presentation) -> Result<Vec<u8>> {
        let cursor = self.write(presentation, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write a presentation to `path`, replacing any existing file.
    pub fn save(&self, presentation: &Presentation, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = self.write(presentation, BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }

    /// Render every part in the order it is stored in the archive.
    fn render_parts(&self, presentation: &Presentation) -> Result<Vec<(String, String)>> {
        let slide_count = presentation.slide_count();
        let mut parts = vec![
            (CONTENT_TYPES_PATH.to_string(), content_types_xml(slide_count)?),
            (ROOT_RELS_PATH.to_string(), root_rels_xml()?),
            (
                CORE_PROPS_PATH.to_string(),
                core_props_xml(presentation.title(), &self.creator)?,
            ),
            (
                APP_PROPS_PATH.to_string(),
                app_props_xml(env!("CARGO_PKG_NAME"), slide_count)?,
            ),
            (PRESENTATION_PATH.to_string(), presentation_xml(presentation)?),
            (
                PRESENTATION_RELS_PATH.to_string(),
                presentation_rels_xml(slide_count)?,
            ),
            (MASTER_PATH.to_string(), slide_master_xml()?),
            (MASTER_RELS_PATH.to_string(), slide_master_rels_xml()?),
            (LAYOUT_PATH.to_string(), slide_layout_xml()?),
            (LAYOUT_RELS_PATH.to_string(), slide_layout_rels_xml()?),
            (THEME_PATH.to_string(), theme_xml(presentation.theme())?),
        ];

        for slide in presentation.slides() {
            parts.push((package::slide_path(slide.number()), slide_xml(slide)?));
            parts.push((package::slide_rels_path(slide.number()), slide_rels_xml()?));
        }

        Ok(parts)
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::layout::new_slide;
    use deck_core::MAILMIND;
    use std::io::Read;
    use zip::ZipArchive;

    fn two_slide_deck() -> Presentation {
        let mut pres = Presentation::new("Deck", MAILMIND);
        new_slide(&mut pres).unwrap();
        new_slide(&mut pres).unwrap();
        pres
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = PptxWriter::new().to_bytes(&two_slide_deck()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == required), "missing {}", required);
        }
        assert_eq!(archive.len(), 15);

        let mut app = String::new();
        archive
            .by_name("docProps/app.xml")
            .unwrap()
            .read_to_string(&mut app)
            .unwrap();
        assert!(app.contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_content_types_come_first() {
        let bytes = PptxWriter::new().to_bytes(&two_slide_deck()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
    }

    #[test]
    fn test_output_is_deterministic() {
        let writer = PptxWriter::new();
        let first = writer.to_bytes(&two_slide_deck()).unwrap();
        let second = writer.to_bytes(&two_slide_deck()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_creator_is_recorded() {
        let bytes = PptxWriter::new()
            .with_creator("Team Cipher")
            .to_bytes(&two_slide_deck())
            .unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:creator>Team Cipher</dc:creator>"));
        assert!(core.contains("<dc:title>Deck</dc:title>"));
    }
}
