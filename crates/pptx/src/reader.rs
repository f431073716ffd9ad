//! PPTX outline reader.
//!
//! Reads back the structure of a package written by [`PptxWriter`]: slide
//! order, backgrounds, and per shape its kind, geometry, border and text.
//!
//! [`PptxWriter`]: crate::PptxWriter

use deck_core::{Color, DeckOutline, Error, Result, ShapeKind, ShapeOutline, SlideOutline};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Reader for PPTX (Office Open XML) outlines.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read the outline of the PPTX file at `path`.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<DeckOutline> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }

    /// Read the outline of a PPTX package from a reader.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<DeckOutline> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut outline = DeckOutline::new();

        // Get the slide order from presentation.xml.rels
        let slide_order = self.get_slide_order(&mut archive)?;

        for (idx, slide_path) in slide_order.iter().enumerate() {
            let slide = self.parse_slide(&mut archive, slide_path, idx + 1)?;
            log::debug!(
                "Read {} with {} shapes",
                slide_path,
                slide.shape_count()
            );
            outline.add_slide(slide);
        }

        Ok(outline)
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_path = "ppt/_rels/presentation.xml.rels";

        let rels_content = self.read_file_from_archive(archive, rels_path)?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let rel_type = attribute(e, b"Type").unwrap_or_default();
                    let target = attribute(e, b"Target").unwrap_or_default();

                    // Slides only, not layouts or masters
                    if rel_type.ends_with("/slide") {
                        // Order by the number in the target, e.g. slides/slide3.xml
                        let order_num = extract_slide_number(&target);
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide from the archive.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<SlideOutline> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        Ok(outline_slide_xml(&content, slide_number))
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive.by_name(path).map_err(|e| {
            Error::CorruptedFile(format!("File not found in archive '{}': {}", path, e))
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the scanner is inside a slide part.
#[derive(Debug, Default)]
struct SlideScan {
    current_shape: Option<ShapeOutline>,
    in_background: bool,
    in_line: bool,
    in_text_body: bool,
    in_paragraph: bool,
    in_text: bool,
    current_text: String,
}

impl SlideScan {
    /// Attributes that matter whether the element is empty or has children.
    fn apply_element(&mut self, local: &[u8], e: &BytesStart<'_>, slide: &mut SlideOutline) {
        match local {
            b"srgbClr" if self.in_background && self.current_shape.is_none() => {
                slide.background = attribute(e, b"val").and_then(|v| Color::from_hex(&v));
            }
            b"p" if self.in_text_body => {
                if !self.current_text.is_empty() {
                    self.current_text.push('\n');
                }
            }
            b"br" if self.in_paragraph => self.current_text.push('\n'),
            _ => {}
        }

        let Some(shape) = self.current_shape.as_mut() else {
            return;
        };
        match local {
            b"off" => {
                if let Some(x) = numeric_attribute(e, b"x") {
                    shape.rect.left.0 = x;
                }
                if let Some(y) = numeric_attribute(e, b"y") {
                    shape.rect.top.0 = y;
                }
            }
            b"ext" => {
                if let Some(cx) = numeric_attribute(e, b"cx") {
                    shape.rect.width.0 = cx;
                }
                if let Some(cy) = numeric_attribute(e, b"cy") {
                    shape.rect.height.0 = cy;
                }
            }
            b"cNvSpPr" => {
                if attribute(e, b"txBox").as_deref() == Some("1") {
                    shape.kind = ShapeKind::TextBox;
                }
            }
            b"prstGeom" => {
                if shape.kind != ShapeKind::TextBox
                    && attribute(e, b"prst").as_deref() == Some("roundRect")
                {
                    shape.kind = ShapeKind::RoundedRectangle;
                }
            }
            b"noFill" if self.in_line => shape.border_hidden = true,
            _ => {}
        }
    }
}

/// Build the outline of one slide part.
fn outline_slide_xml(xml_content: &str, slide_number: usize) -> SlideOutline {
    let mut slide = SlideOutline::new(slide_number);
    let mut scan = SlideScan::default();
    // No text trimming: spaces at run edges are part of the text.
    let mut reader = Reader::from_str(xml_content);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                match local {
                    b"sp" => scan.current_shape = Some(ShapeOutline::new(ShapeKind::Rectangle)),
                    b"bg" => scan.in_background = true,
                    b"ln" => scan.in_line = true,
                    b"txBody" => scan.in_text_body = true,
                    b"p" if scan.in_text_body => scan.in_paragraph = true,
                    b"t" if scan.in_paragraph => scan.in_text = true,
                    _ => {}
                }
                scan.apply_element(local, e, &mut slide);
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                scan.apply_element(local_name(name.as_ref()), e, &mut slide);
            }
            Ok(Event::Text(ref e)) => {
                if scan.in_text {
                    let text = e.unescape().unwrap_or_default();
                    scan.current_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"sp" => {
                        // End of shape - save it
                        if let Some(mut shape) = scan.current_shape.take() {
                            shape.text = scan.current_text.trim().to_string();
                            slide.add_shape(shape);
                        }
                        scan.current_text.clear();
                        scan.in_text_body = false;
                        scan.in_paragraph = false;
                        scan.in_text = false;
                    }
                    b"bg" => scan.in_background = false,
                    b"ln" => scan.in_line = false,
                    b"txBody" => scan.in_text_body = false,
                    b"p" => scan.in_paragraph = false,
                    b"t" => scan.in_text = false,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!(
                    "XML error in slide {} at byte {}, keeping what was read: {}",
                    slide_number,
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    slide
}

/// Value of an unprefixed attribute, unescaped.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| {
            attr.unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).to_string())
        })
}

fn numeric_attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<i64> {
    attribute(e, key).and_then(|v| v.parse().ok())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    // Remove common extensions first
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    // Try to find digits at the end
    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxWriter;
    use deck_core::layout::{
        add_card, add_rectangle, add_rich_text_frame, add_slide_title, add_text_box,
        append_paragraph, append_run, new_slide,
    };
    use deck_core::{Emu, Presentation, Rect, TextStyle, MAILMIND};
    use std::io::Cursor;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_outline_slide_xml() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>
            <p:bg><p:bgPr><a:solidFill><a:srgbClr val="0F172A"/></a:solidFill></p:bgPr></p:bg>
            <p:spTree>
              <p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>
              <p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></a:xfrm></p:grpSpPr>
              <p:sp>
                <p:nvSpPr><p:cNvPr id="2" name="Rounded Rectangle 1"/><p:cNvSpPr/></p:nvSpPr>
                <p:spPr><a:xfrm><a:off x="10" y="20"/><a:ext cx="30" cy="40"/></a:xfrm>
                  <a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom>
                  <a:ln><a:noFill/></a:ln></p:spPr>
              </p:sp>
              <p:sp>
                <p:nvSpPr><p:cNvPr id="3" name="TextBox 2"/><p:cNvSpPr txBox="1"/></p:nvSpPr>
                <p:spPr><a:prstGeom prst="rect"/><a:noFill/></p:spPr>
                <p:txBody><a:bodyPr/><a:p/>
                  <a:p><a:r><a:t>Line one</a:t></a:r><a:br/>
                    <a:r><a:t>Line &amp; two</a:t></a:r></a:p>
                  <a:p><a:r><a:t>Para</a:t></a:r></a:p>
                </p:txBody>
              </p:sp>
            </p:spTree></p:cSld></p:sld>"#;

        let slide = outline_slide_xml(xml, 4);
        assert_eq!(slide.number, 4);
        assert_eq!(slide.background, Some(Color::rgb(15, 23, 42)));
        assert_eq!(slide.shape_count(), 2);

        let card = &slide.shapes[0];
        assert_eq!(card.kind, ShapeKind::RoundedRectangle);
        assert_eq!(card.rect, Rect::new(Emu(10), Emu(20), Emu(30), Emu(40)));
        assert!(card.border_hidden);
        assert_eq!(card.text, "");

        let text_box = &slide.shapes[1];
        assert_eq!(text_box.kind, ShapeKind::TextBox);
        assert!(!text_box.border_hidden);
        assert_eq!(text_box.text, "Line one\nLine & two\nPara");
    }

    #[test]
    fn test_truncated_slide_keeps_shapes_read_so_far() {
        let xml = r#"<p:sld><p:cSld><p:spTree><p:sp><p:nvSpPr/></p:sp><p:sp></p:nvSpPr>"#;
        let slide = outline_slide_xml(xml, 1);
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_missing_relationships_is_corrupted() {
        let mut bytes = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut bytes));
            zip.start_file("hello.txt", zip::write::FileOptions::default())
                .unwrap();
            zip.finish().unwrap();
        }
        let err = PptxReader::new().read(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::CorruptedFile(_)));
    }

    #[test]
    fn test_round_trip_matches_model_outline() {
        let mut pres = Presentation::new("Deck", MAILMIND);
        let slide = new_slide(&mut pres).unwrap();
        add_slide_title(slide, "NLP & RAG", Some("Retrieval <augmented> \"generation\"")).unwrap();
        add_card(slide, Rect::inches(0.6, 1.7, 5.8, 5.0), None).unwrap();
        add_rectangle(slide, Rect::inches(0.6, 1.7, 5.8, 0.08), None).unwrap();
        add_text_box(
            slide,
            Rect::inches(0.9, 1.95, 5.2, 0.5),
            "Do Now  |  Waiting\n\nEmails are auto-sorted",
            &TextStyle::sized(15.0),
        )
        .unwrap();
        let second = new_slide(&mut pres).unwrap();
        add_slide_title(second, "Thank You!", None).unwrap();

        let bytes = PptxWriter::new().to_bytes(&pres).unwrap();
        let read = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(read, pres.outline());
        assert_eq!(read.shape_counts(), vec![7, 3]);
    }

    #[test]
    fn test_spaces_at_run_edges_survive_round_trip() {
        let mut pres = Presentation::new("Deck", MAILMIND);
        let slide = new_slide(&mut pres).unwrap();
        let style = TextStyle::sized(16.0);
        let (frame, _) = add_rich_text_frame(slide, Rect::inches(1.0, 1.0, 5.0, 2.0)).unwrap();
        let paragraph = append_paragraph(frame, "Deadline", &style);
        append_run(paragraph, " (NLP)", &style);
        add_text_box(slide, Rect::inches(1.0, 3.5, 5.0, 1.0), "A\n B", &style).unwrap();

        let bytes = PptxWriter::new().to_bytes(&pres).unwrap();
        let read = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(read.slides[0].shapes[2].text, "Deadline (NLP)");
        assert_eq!(read.slides[0].shapes[3].text, "A\n B");
        assert_eq!(read, pres.outline());
    }

    #[test]
    fn test_indentation_outside_text_runs_is_ignored() {
        let xml = r#"<p:sld><p:cSld><p:spTree>
            <p:sp>
              <p:nvSpPr><p:cNvSpPr txBox="1"/></p:nvSpPr>
              <p:txBody>
                <a:p>
                  <a:r><a:t>Team </a:t></a:r>
                  <a:r><a:t>Cipher</a:t></a:r>
                </a:p>
              </p:txBody>
            </p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let slide = outline_slide_xml(xml, 1);
        assert_eq!(slide.shapes[0].text, "Team Cipher");
    }
}
