//! Package-level parts: content types, relationships, document properties,
//! the presentation part, and the single master/layout/theme set every slide
//! hangs off.

use crate::xml::{ns, XmlSink};
use deck_core::{Color, Presentation, Result, Theme};

/// Relationship type URIs.
pub(crate) mod rel_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

mod content_type {
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

pub(crate) const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub(crate) const ROOT_RELS_PATH: &str = "_rels/.rels";
pub(crate) const CORE_PROPS_PATH: &str = "docProps/core.xml";
pub(crate) const APP_PROPS_PATH: &str = "docProps/app.xml";
pub(crate) const PRESENTATION_PATH: &str = "ppt/presentation.xml";
pub(crate) const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";
pub(crate) const MASTER_PATH: &str = "ppt/slideMasters/slideMaster1.xml";
pub(crate) const MASTER_RELS_PATH: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
pub(crate) const LAYOUT_PATH: &str = "ppt/slideLayouts/slideLayout1.xml";
pub(crate) const LAYOUT_RELS_PATH: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
pub(crate) const THEME_PATH: &str = "ppt/theme/theme1.xml";

/// Relationship ids in presentation.xml.rels: the master and theme come
/// first, slides follow from this number on.
const FIRST_SLIDE_REL: usize = 3;

/// `p:sldId` values must be at least 256.
const FIRST_SLIDE_ID: usize = 256;

pub(crate) fn slide_path(number: usize) -> String {
    format!("ppt/slides/slide{}.xml", number)
}

pub(crate) fn slide_rels_path(number: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", number)
}

fn slide_rel_id(number: usize) -> String {
    format!("rId{}", FIRST_SLIDE_REL + number - 1)
}

/// A relationship entry: id, type, target.
pub(crate) struct Relationship<'a> {
    pub id: String,
    pub rel_type: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    pub fn new(id: impl Into<String>, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type,
            target: target.into(),
        }
    }
}

/// Render a `.rels` part.
pub(crate) fn relationships_xml(rels: &[Relationship<'_>]) -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start("Relationships", &[("xmlns", ns::PACKAGE_RELS)])?;
    for rel in rels {
        xml.empty(
            "Relationship",
            &[
                ("Id", rel.id.as_str()),
                ("Type", rel.rel_type),
                ("Target", rel.target.as_str()),
            ],
        )?;
    }
    xml.end("Relationships")?;
    xml.finish()
}

pub(crate) fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start("Types", &[("xmlns", ns::CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[("Extension", "rels"), ("ContentType", content_type::RELATIONSHIPS)],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", content_type::XML)])?;

    let fixed = [
        (PRESENTATION_PATH, content_type::PRESENTATION),
        (MASTER_PATH, content_type::SLIDE_MASTER),
        (LAYOUT_PATH, content_type::SLIDE_LAYOUT),
        (THEME_PATH, content_type::THEME),
        (CORE_PROPS_PATH, content_type::CORE_PROPERTIES),
        (APP_PROPS_PATH, content_type::EXTENDED_PROPERTIES),
    ];
    for (path, ct) in fixed {
        let part_name = format!("/{}", path);
        xml.empty(
            "Override",
            &[("PartName", part_name.as_str()), ("ContentType", ct)],
        )?;
    }
    for number in 1..=slide_count {
        let part_name = format!("/{}", slide_path(number));
        xml.empty(
            "Override",
            &[("PartName", part_name.as_str()), ("ContentType", content_type::SLIDE)],
        )?;
    }

    xml.end("Types")?;
    xml.finish()
}

pub(crate) fn root_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship::new("rId1", rel_type::OFFICE_DOCUMENT, PRESENTATION_PATH),
        Relationship::new("rId2", rel_type::CORE_PROPERTIES, CORE_PROPS_PATH),
        Relationship::new("rId3", rel_type::EXTENDED_PROPERTIES, APP_PROPS_PATH),
    ])
}

/// Core properties carry no timestamps so output stays reproducible.
pub(crate) fn core_props_xml(title: &str, creator: &str) -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:title", title)?;
    xml.text_element("dc:creator", creator)?;
    xml.end("cp:coreProperties")?;
    xml.finish()
}

pub(crate) fn app_props_xml(application: &str, slide_count: usize) -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start(
        "Properties",
        &[
            (
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            ),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    xml.text_element("Application", application)?;
    xml.text_element("Slides", &slide_count.to_string())?;
    xml.end("Properties")?;
    xml.finish()
}

const PML_NAMESPACES: [(&str, &str); 3] = [
    ("xmlns:a", ns::A),
    ("xmlns:r", ns::R),
    ("xmlns:p", ns::P),
];

pub(crate) fn presentation_xml(presentation: &Presentation) -> Result<String> {
    let theme = presentation.theme();
    let mut xml = XmlSink::new()?;
    xml.start("p:presentation", &PML_NAMESPACES)?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    if presentation.slide_count() > 0 {
        xml.start("p:sldIdLst", &[])?;
        for slide in presentation.slides() {
            let id = (FIRST_SLIDE_ID + slide.number() - 1).to_string();
            let rel_id = slide_rel_id(slide.number());
            xml.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel_id.as_str())])?;
        }
        xml.end("p:sldIdLst")?;
    }

    let cx = theme.slide_width.to_string();
    let cy = theme.slide_height.to_string();
    xml.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;

    xml.end("p:presentation")?;
    xml.finish()
}

pub(crate) fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut rels = vec![
        Relationship::new("rId1", rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        Relationship::new("rId2", rel_type::THEME, "theme/theme1.xml"),
    ];
    for number in 1..=slide_count {
        rels.push(Relationship::new(
            slide_rel_id(number),
            rel_type::SLIDE,
            format!("slides/slide{}.xml", number),
        ));
    }
    relationships_xml(&rels)
}

/// Empty group-shape header every shape tree starts with.
pub(crate) fn write_group_header(xml: &mut XmlSink) -> Result<()> {
    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;

    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.offset_extent(0, 0, 0, 0)?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")
}

pub(crate) fn slide_master_xml() -> Result<String> {
    let mut xml = XmlSink::new()?;
    xml.start("p:sldMaster", &PML_NAMESPACES)?;

    xml.start("p:cSld", &[])?;
    xml.start("p:bg", &[])?;
    xml.start("p:bgRef", &[("idx", "1001")])?;
    xml.empty("a:schemeClr", &[("val", "bg1")])?;
    xml.end("p:bgRef")?;
    xml.end("p:bg")?;
    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    xml.end("p:spTree")?;
    xml.end("p:cSld")?;

    xml.empty(
        "p:clrMap",
        &[
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
            ("accent1", "accent1"),
            ("accent2", "accent2"),
            ("accent3", "accent3"),
            ("accent4", "accent4"),
            ("accent5", "accent5"),
            ("accent6", "accent6"),
            ("hlink", "hlink"),
            ("folHlink", "folHlink"),
        ],
    )?;

    xml.start("p:sldLayoutIdLst", &[])?;
    xml.empty("p:sldLayoutId", &[("id", "2147483649"), ("r:id", "rId1")])?;
    xml.end("p:sldLayoutIdLst")?;

    xml.end("p:sldMaster")?;
    xml.finish()
}

pub(crate) fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship::new("rId1", rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        Relationship::new("rId2", rel_type::THEME, "../theme/theme1.xml"),
    ])
}

/// The single blank layout all slides use.
pub(crate) fn slide_layout_xml() -> Result<String> {
    let mut xml = XmlSink::new()?;
    let mut attrs = PML_NAMESPACES.to_vec();
    attrs.extend([("type", "blank"), ("preserve", "1")]);
    xml.start("p:sldLayout", &attrs)?;

    xml.start("p:cSld", &[("name", "Blank")])?;
    xml.start("p:spTree", &[])?;
    write_group_header(&mut xml)?;
    xml.end("p:spTree")?;
    xml.end("p:cSld")?;

    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;

    xml.end("p:sldLayout")?;
    xml.finish()
}

pub(crate) fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship::new(
        "rId1",
        rel_type::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

fn write_scheme_color(xml: &mut XmlSink, slot: &str, color: Color) -> Result<()> {
    let hex = color.hex();
    xml.start(slot, &[])?;
    xml.empty("a:srgbClr", &[("val", hex.as_str())])?;
    xml.end(slot)
}

fn write_font_set(xml: &mut XmlSink, slot: &str, typeface: &str) -> Result<()> {
    xml.start(slot, &[])?;
    xml.empty("a:latin", &[("typeface", typeface)])?;
    xml.empty("a:ea", &[("typeface", "")])?;
    xml.empty("a:cs", &[("typeface", "")])?;
    xml.end(slot)
}

fn write_placeholder_fill(xml: &mut XmlSink) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    xml.empty("a:schemeClr", &[("val", "phClr")])?;
    xml.end("a:solidFill")
}

/// Theme part whose color and font schemes come from the deck theme.
pub(crate) fn theme_xml(theme: &Theme) -> Result<String> {
    let palette = &theme.palette;
    let mut xml = XmlSink::new()?;
    xml.start("a:theme", &[("xmlns:a", ns::A), ("name", theme.name)])?;
    xml.start("a:themeElements", &[])?;

    xml.start("a:clrScheme", &[("name", theme.name)])?;
    let scheme = [
        ("a:dk1", palette.background),
        ("a:lt1", palette.white),
        ("a:dk2", palette.card_bg),
        ("a:lt2", palette.light_gray),
        ("a:accent1", palette.electric_blue),
        ("a:accent2", palette.teal),
        ("a:accent3", palette.purple),
        ("a:accent4", palette.red),
        ("a:accent5", palette.green),
        ("a:accent6", palette.amber),
        ("a:hlink", palette.electric_blue),
        ("a:folHlink", palette.purple),
    ];
    for (slot, color) in scheme {
        write_scheme_color(&mut xml, slot, color)?;
    }
    xml.end("a:clrScheme")?;

    xml.start("a:fontScheme", &[("name", theme.name)])?;
    write_font_set(&mut xml, "a:majorFont", theme.font_family)?;
    write_font_set(&mut xml, "a:minorFont", theme.font_family)?;
    xml.end("a:fontScheme")?;

    // Each style list needs exactly three entries.
    xml.start("a:fmtScheme", &[("name", theme.name)])?;
    xml.start("a:fillStyleLst", &[])?;
    for _ in 0..3 {
        write_placeholder_fill(&mut xml)?;
    }
    xml.end("a:fillStyleLst")?;

    xml.start("a:lnStyleLst", &[])?;
    for width in ["6350", "12700", "19050"] {
        xml.start("a:ln", &[("w", width)])?;
        write_placeholder_fill(&mut xml)?;
        xml.end("a:ln")?;
    }
    xml.end("a:lnStyleLst")?;

    xml.start("a:effectStyleLst", &[])?;
    for _ in 0..3 {
        xml.start("a:effectStyle", &[])?;
        xml.empty("a:effectLst", &[])?;
        xml.end("a:effectStyle")?;
    }
    xml.end("a:effectStyleLst")?;

    xml.start("a:bgFillStyleLst", &[])?;
    for _ in 0..3 {
        write_placeholder_fill(&mut xml)?;
    }
    xml.end("a:bgFillStyleLst")?;
    xml.end("a:fmtScheme")?;

    xml.end("a:themeElements")?;
    xml.empty("a:objectDefaults", &[])?;
    xml.empty("a:extraClrSchemeLst", &[])?;
    xml.end("a:theme")?;
    xml.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::MAILMIND;

    #[test]
    fn test_slide_rel_ids_follow_master_and_theme() {
        assert_eq!(slide_rel_id(1), "rId3");
        assert_eq!(slide_rel_id(12), "rId14");
    }

    #[test]
    fn test_content_types_list_every_slide() {
        let xml = content_types_xml(2).unwrap();
        assert!(xml.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(!xml.contains("slide3.xml"));
        assert!(xml.contains(r#"PartName="/ppt/presentation.xml""#));
    }

    #[test]
    fn test_presentation_xml_lists_slides_and_size() {
        let mut pres = Presentation::new("Deck", MAILMIND);
        pres.add_slide();
        pres.add_slide();
        let xml = presentation_xml(&pres).unwrap();

        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_without_slides_omits_id_list() {
        let pres = Presentation::new("Deck", MAILMIND);
        let xml = presentation_xml(&pres).unwrap();
        assert!(!xml.contains("sldIdLst"));
    }

    #[test]
    fn test_presentation_rels() {
        let xml = presentation_rels_xml(1).unwrap();
        assert!(xml.contains(r#"Id="rId3""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
        assert!(xml.contains(rel_type::SLIDE_MASTER));
    }

    #[test]
    fn test_theme_uses_palette_and_font() {
        let xml = theme_xml(&MAILMIND).unwrap();
        assert!(xml.contains(r#"<a:dk1><a:srgbClr val="0F172A"/></a:dk1>"#));
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="3B82F6"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:latin typeface="Calibri"/>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_core_props_have_no_timestamps() {
        let xml = core_props_xml("MailMind", "Team Cipher").unwrap();
        assert!(xml.contains("<dc:title>MailMind</dc:title>"));
        assert!(!xml.contains("dcterms:created"));
    }
}
