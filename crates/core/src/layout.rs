//! Layout and style helpers for building slides.
//!
//! Each helper takes the slide (or text container) it works on and returns a
//! handle to what it created. Every shape a helper creates has its border
//! hidden; bars and divider lines are thin filled rectangles, never strokes.
//!
//! Slide builders start with [`new_slide`], which gives every slide the same
//! background, top accent bar and footer.

use crate::color::Color;
use crate::error::Result;
use crate::model::{Paragraph, Presentation, Run, Shape, ShapeId, ShapeKind, Slide, TextFrame};
use crate::style::{Alignment, TextStyle};
use crate::theme::Theme;
use crate::units::{Emu, Points, Rect};

/// Space after a paragraph appended with [`append_paragraph`] when the style
/// does not set one.
pub const DEFAULT_SPACE_AFTER: Points = Points(6.0);

/// Vertical distance between a slide title and its subtitle, in inches.
pub const SUBTITLE_OFFSET: f64 = 0.65;

/// Options for the bar across the top of a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentBar {
    pub color: Color,
    pub height: Emu,
}

impl AccentBar {
    /// The theme's accent color at the theme's bar height.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            color: theme.palette.electric_blue,
            height: theme.accent_bar_height,
        }
    }
}

/// Fill the whole slide background with a solid color.
pub fn fill_background(slide: &mut Slide, color: Color) {
    slide.set_background(color);
}

/// Add a full-width bar along the top edge of the slide.
pub fn add_accent_bar(slide: &mut Slide, bar: AccentBar) -> Result<&mut Shape> {
    let rect = Rect::new(Emu::ZERO, Emu::ZERO, slide.width(), bar.height);
    let shape = slide.add_shape(ShapeKind::Rectangle, rect)?;
    shape.set_solid_fill(bar.color).hide_outline();
    Ok(shape)
}

/// Add the small muted footer at the bottom-right corner.
///
/// `None` uses the theme's branding text.
pub fn add_footer<'s>(slide: &'s mut Slide, text: Option<&str>) -> Result<&'s mut Shape> {
    let theme = *slide.theme();
    let style = TextStyle::sized(10.0)
        .with_color(theme.palette.mid_gray)
        .with_alignment(Alignment::Right);
    add_text_box(
        slide,
        Rect::inches(8.5, 7.05, 4.5, 0.35),
        text.unwrap_or(theme.footer_text),
        &style,
    )
}

/// Add a single-paragraph text box.
pub fn add_text_box<'s>(
    slide: &'s mut Slide,
    rect: Rect,
    text: &str,
    style: &TextStyle,
) -> Result<&'s mut Shape> {
    let shape = slide.add_shape(ShapeKind::TextBox, rect)?;
    shape.hide_outline();
    let frame = shape.text_frame_or_default();
    frame.word_wrap = style.word_wrap;
    let paragraph = frame.first_paragraph_mut();
    paragraph.alignment = style.alignment;
    if !text.is_empty() {
        paragraph.runs.push(Run::new(text, style));
    }
    Ok(shape)
}

/// Add an empty, word-wrapping, borderless text box for multi-paragraph text.
///
/// Returns the text frame to fill and the id of the shape that owns it.
pub fn add_rich_text_frame(slide: &mut Slide, rect: Rect) -> Result<(&mut TextFrame, ShapeId)> {
    let shape = slide.add_shape(ShapeKind::TextBox, rect)?;
    shape.hide_outline();
    let id = shape.id();
    let frame = shape.text_frame_or_default();
    frame.word_wrap = true;
    Ok((frame, id))
}

/// Append a styled run to a paragraph.
pub fn append_run<'p>(paragraph: &'p mut Paragraph, text: &str, style: &TextStyle) -> &'p mut Run {
    paragraph.runs.push(Run::new(text, style));
    let last = paragraph.runs.len() - 1;
    &mut paragraph.runs[last]
}

/// Append a paragraph to a text frame, with a leading run unless `text` is
/// empty.
pub fn append_paragraph<'f>(
    frame: &'f mut TextFrame,
    text: &str,
    style: &TextStyle,
) -> &'f mut Paragraph {
    let paragraph = frame.add_paragraph();
    paragraph.alignment = style.alignment;
    paragraph.space_after = Some(style.space_after.unwrap_or(DEFAULT_SPACE_AFTER));
    if !text.is_empty() {
        append_run(paragraph, text, style);
    }
    paragraph
}

/// Add a rounded, filled, borderless panel. `None` uses the card background.
pub fn add_card(slide: &mut Slide, rect: Rect, fill: Option<Color>) -> Result<&mut Shape> {
    let color = fill.unwrap_or(slide.theme().palette.card_bg);
    let shape = slide.add_shape(ShapeKind::RoundedRectangle, rect)?;
    shape.set_solid_fill(color).hide_outline();
    Ok(shape)
}

/// Add a sharp-cornered, filled, borderless rectangle. `None` uses the accent
/// color.
///
/// Also draws divider and accent lines when one dimension is very small.
pub fn add_rectangle(slide: &mut Slide, rect: Rect, fill: Option<Color>) -> Result<&mut Shape> {
    let color = fill.unwrap_or(slide.theme().palette.electric_blue);
    let shape = slide.add_shape(ShapeKind::Rectangle, rect)?;
    shape.set_solid_fill(color).hide_outline();
    Ok(shape)
}

/// Add a large title near the top-left, and a muted subtitle beneath it when
/// one is given.
pub fn add_slide_title(slide: &mut Slide, title: &str, subtitle: Option<&str>) -> Result<()> {
    let palette = slide.theme().palette;
    add_text_box(
        slide,
        Rect::inches(0.8, 0.35, 11.5, 0.7),
        title,
        &TextStyle::sized(38.0).with_color(palette.white).bold(),
    )?;

    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        add_text_box(
            slide,
            Rect::inches(0.8, 0.35 + SUBTITLE_OFFSET, 11.5, 0.5),
            subtitle,
            &TextStyle::sized(18.0).with_color(palette.light_gray),
        )?;
    }
    Ok(())
}

/// Append a slide with the theme background, top accent bar and footer.
pub fn new_slide(presentation: &mut Presentation) -> Result<&mut Slide> {
    let theme = *presentation.theme();
    let slide = presentation.add_slide();
    fill_background(slide, theme.palette.background);
    add_accent_bar(slide, AccentBar::from_theme(&theme))?;
    add_footer(slide, None)?;
    log::debug!("Created slide {}", slide.number());
    Ok(slide)
}
