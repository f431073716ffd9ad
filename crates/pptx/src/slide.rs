//! Slide parts: background, shape tree, and text bodies.

use crate::package::{rel_type, relationships_xml, write_group_header, Relationship};
use crate::xml::{ns, XmlSink};
use deck_core::{Color, Fill, Outline, Paragraph, Result, Run, Shape, ShapeKind, Slide, TextFrame};

/// Render `ppt/slides/slideN.xml`.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "p:sld",
        &[("xmlns:a", ns::A), ("xmlns:r", ns::R), ("xmlns:p", ns::P)],
    )?;
    xml.start("p:cSld", &[])?;

    if let Some(color) = slide.background() {
        xml.start("p:bg", &[])?;
        xml.start("p:bgPr", &[])?;
        write_solid_fill(&mut xml, color)?;
        xml.empty("a:effectLst", &[])?;
        xml.end("p:bgPr")?;
        xml.end("p:bg")?;
    }

    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    for shape in slide.shapes() {
        write_shape(&mut xml, shape)?;
    }
    xml.end("p:spTree")?;
    xml.end("p:cSld")?;

    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;

    xml.end("p:sld")?;
    xml.finish()
}

/// Every slide points at the one blank layout.
pub(crate) fn slide_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship::new(
        "rId1",
        rel_type::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )])
}

fn write_solid_fill(xml: &mut XmlSink, color: Color) -> Result<()> {
    let hex = color.hex();
    xml.start("a:solidFill", &[])?;
    xml.empty("a:srgbClr", &[("val", hex.as_str())])?;
    xml.end("a:solidFill")
}

fn write_shape(xml: &mut XmlSink, shape: &Shape) -> Result<()> {
    let id = shape.id().0.to_string();
    let is_text_box = shape.kind() == ShapeKind::TextBox;

    xml.start("p:sp", &[])?;

    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", shape.name())])?;
    if is_text_box {
        xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        xml.empty("p:cNvSpPr", &[])?;
    }
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    let rect = shape.rect();
    xml.start("p:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.offset_extent(rect.left.0, rect.top.0, rect.width.0, rect.height.0)?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", shape.kind().preset())])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    match shape.fill() {
        Fill::Solid(color) => write_solid_fill(xml, color)?,
        Fill::NoFill => xml.empty("a:noFill", &[])?,
    }
    if shape.outline() == Outline::Hidden {
        xml.start("a:ln", &[])?;
        xml.empty("a:noFill", &[])?;
        xml.end("a:ln")?;
    }
    xml.end("p:spPr")?;

    if !is_text_box {
        write_shape_style(xml)?;
    }

    if let Some(frame) = shape.text_frame() {
        write_text_body(xml, frame)?;
    }

    xml.end("p:sp")
}

/// Style references an auto shape falls back on for anything not set
/// explicitly, including its line.
fn write_shape_style(xml: &mut XmlSink) -> Result<()> {
    let refs = [
        ("a:lnRef", "1", "accent1"),
        ("a:fillRef", "3", "accent1"),
        ("a:effectRef", "2", "accent1"),
        ("a:fontRef", "minor", "lt1"),
    ];
    xml.start("p:style", &[])?;
    for (name, idx, color) in refs {
        xml.start(name, &[("idx", idx)])?;
        xml.empty("a:schemeClr", &[("val", color)])?;
        xml.end(name)?;
    }
    xml.end("p:style")
}

fn write_text_body(xml: &mut XmlSink, frame: &TextFrame) -> Result<()> {
    let wrap = if frame.word_wrap { "square" } else { "none" };
    xml.start("p:txBody", &[])?;
    xml.empty("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
    xml.empty("a:lstStyle", &[])?;
    for paragraph in &frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.end("p:txBody")
}

fn write_paragraph(xml: &mut XmlSink, paragraph: &Paragraph) -> Result<()> {
    xml.start("a:p", &[])?;

    let algn = [("algn", paragraph.alignment.as_ooxml())];
    match paragraph.space_after {
        Some(space) => {
            let val = space.centipoints().to_string();
            xml.start("a:pPr", &algn)?;
            xml.start("a:spcAft", &[])?;
            xml.empty("a:spcPts", &[("val", val.as_str())])?;
            xml.end("a:spcAft")?;
            xml.end("a:pPr")?;
        }
        None => xml.empty("a:pPr", &algn)?,
    }

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    xml.end("a:p")
}

/// Write a run, turning each `\n` into an `a:br` carrying the same formatting.
fn write_run(xml: &mut XmlSink, run: &Run) -> Result<()> {
    for (i, segment) in run.text.split('\n').enumerate() {
        if i > 0 {
            xml.start("a:br", &[])?;
            write_run_properties(xml, run)?;
            xml.end("a:br")?;
        }
        if segment.is_empty() {
            continue;
        }
        xml.start("a:r", &[])?;
        write_run_properties(xml, run)?;
        xml.text_element("a:t", segment)?;
        xml.end("a:r")?;
    }
    Ok(())
}

fn write_run_properties(xml: &mut XmlSink, run: &Run) -> Result<()> {
    let size = run.size.centipoints().to_string();
    let bold = if run.bold { "1" } else { "0" };
    xml.start(
        "a:rPr",
        &[
            ("lang", "en-US"),
            ("sz", size.as_str()),
            ("b", bold),
            ("dirty", "0"),
        ],
    )?;
    write_solid_fill(xml, run.color)?;
    // A run without an explicit font takes the theme's minor font.
    let typeface = run.font.as_deref().unwrap_or("+mn-lt");
    xml.empty("a:latin", &[("typeface", typeface)])?;
    xml.end("a:rPr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::layout::{add_card, add_text_box, new_slide};
    use deck_core::{Presentation, Rect, TextStyle, MAILMIND};

    fn first_slide_xml(build: impl FnOnce(&mut Slide)) -> String {
        let mut pres = Presentation::new("Deck", MAILMIND);
        let slide = new_slide(&mut pres).unwrap();
        build(slide);
        slide_xml(&pres.slides()[0]).unwrap()
    }

    #[test]
    fn test_background_and_chrome() {
        let xml = first_slide_xml(|_| {});
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="0F172A"/>"#));
        assert!(xml.contains(r#"<a:effectLst/></p:bgPr></p:bg>"#));
        assert_eq!(xml.matches("<p:sp>").count(), 2);
        assert!(xml.contains("Team Cipher  |  AlgoQuest 2025"));
    }

    #[test]
    fn test_card_markup() {
        let xml = first_slide_xml(|slide| {
            add_card(slide, Rect::inches(0.6, 1.8, 2.8, 4.5), None).unwrap();
        });
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Rounded Rectangle 3"/>"#));
        assert!(xml.contains(r#"<a:off x="548640" y="1645920"/>"#));
        assert!(xml.contains(r#"<a:ext cx="2560320" cy="4114800"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="1E293B"/></a:solidFill>"#));
        assert!(xml.contains(r#"</a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>"#));
        assert!(xml.contains(r#"<a:lnRef idx="1">"#));
    }

    #[test]
    fn test_text_box_markup() {
        let xml = first_slide_xml(|slide| {
            let style = TextStyle::sized(13.0).bold().centered().with_word_wrap(false);
            add_text_box(slide, Rect::inches(1.0, 1.0, 2.0, 1.0), "AI Engine\n10 endpoints", &style)
                .unwrap();
        });
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="1300" b="1" dirty="0">"#));
        assert!(xml.contains("<a:t>AI Engine</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>10 endpoints</a:t>"));
        assert!(xml.contains(r#"<a:latin typeface="+mn-lt"/>"#));
    }

    #[test]
    fn test_blank_lines_become_consecutive_breaks() {
        let mut frame = TextFrame::new();
        frame.paragraphs[0]
            .runs
            .push(Run::new("Do Now\n\nEmails", &TextStyle::default()));

        let mut xml = XmlSink::new().unwrap();
        write_text_body(&mut xml, &frame).unwrap();
        let xml = xml.finish().unwrap();
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert_eq!(xml.matches("<a:r>").count(), 2);
    }

    #[test]
    fn test_space_after_and_explicit_font() {
        let mut paragraph = Paragraph::new();
        paragraph.space_after = Some(deck_core::pt(6.0));
        paragraph
            .runs
            .push(Run::new("x", &TextStyle::default().with_font("Segoe UI")));

        let mut xml = XmlSink::new().unwrap();
        write_paragraph(&mut xml, &paragraph).unwrap();
        let xml = xml.finish().unwrap();
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="600"/></a:spcAft>"#));
        assert!(xml.contains(r#"<a:latin typeface="Segoe UI"/>"#));
    }
}
