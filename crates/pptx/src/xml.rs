//! Thin wrapper over the quick-xml event writer.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Namespace URIs used across package parts.
pub(crate) mod ns {
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Accumulates one XML part in memory.
pub(crate) struct XmlSink {
    writer: Writer<Vec<u8>>,
}

impl XmlSink {
    /// Start a standalone UTF-8 document.
    pub fn new() -> Result<Self> {
        let mut sink = Self {
            writer: Writer::new(Vec::new()),
        };
        sink.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(sink)
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::XmlError(format!("Failed to write XML event: {}", e)))
    }

    /// Write an opening tag.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut tag = BytesStart::new(name);
        tag.extend_attributes(attrs.iter().copied());
        self.write(Event::Start(tag))
    }

    /// Write a self-closing tag.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut tag = BytesStart::new(name);
        tag.extend_attributes(attrs.iter().copied());
        self.write(Event::Empty(tag))
    }

    /// Write a closing tag.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::new(text)))
    }

    /// Write `<name>text</name>`.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name, &[])?;
        self.text(text)?;
        self.end(name)
    }

    /// Write `<a:off x y/><a:ext cx cy/>` pairs used by transforms.
    pub fn offset_extent(&mut self, x: i64, y: i64, cx: i64, cy: i64) -> Result<()> {
        let (x, y, cx, cy) = (x.to_string(), y.to_string(), cx.to_string(), cy.to_string());
        self.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
        self.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])
    }

    /// Finish the part and return its text.
    pub fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::XmlError(format!("Generated XML is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_declaration_and_elements() {
        let mut sink = XmlSink::new().unwrap();
        sink.start("a:p", &[]).unwrap();
        sink.empty("a:pPr", &[("algn", "ctr")]).unwrap();
        sink.text_element("a:t", "Hello").unwrap();
        sink.end("a:p").unwrap();
        let xml = sink.finish().unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.ends_with(r#"<a:p><a:pPr algn="ctr"/><a:t>Hello</a:t></a:p>"#));
    }

    #[test]
    fn test_escapes_text() {
        let mut sink = XmlSink::new().unwrap();
        sink.text_element("a:t", "Q&A <live>").unwrap();
        let xml = sink.finish().unwrap();
        assert!(xml.contains("<a:t>Q&amp;A &lt;live&gt;</a:t>"));
    }

    #[test]
    fn test_offset_extent() {
        let mut sink = XmlSink::new().unwrap();
        sink.offset_extent(0, 1, 2, 3).unwrap();
        let xml = sink.finish().unwrap();
        assert!(xml.contains(r#"<a:off x="0" y="1"/><a:ext cx="2" cy="3"/>"#));
    }
}
