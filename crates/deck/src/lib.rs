//! The MailMind AlgoQuest 2025 Round 2 deck.
//!
//! [`build`] assembles the twelve slides in order on the MailMind theme.
//! Saving is left to the caller.

pub mod slides;

use deck_core::{Presentation, Result, MAILMIND};

/// Title recorded in the document properties.
pub const DECK_TITLE: &str = "MailMind — AlgoQuest 2025 Round 2";

/// File name the deck is saved under when no output path is given.
pub const DEFAULT_FILE_NAME: &str = "MailMind_AlgoQuest_R2.pptx";

/// Appends one slide to the presentation.
pub type SlideBuilder = fn(&mut Presentation) -> Result<()>;

/// Every slide builder with its name, in presentation order.
pub const SLIDE_BUILDERS: [(&str, SlideBuilder); 12] = [
    ("title", slides::title),
    ("problem", slides::problem),
    ("solution", slides::solution),
    ("mapping", slides::mapping),
    ("architecture", slides::architecture),
    ("core_features", slides::core_features),
    ("nlp_rag", slides::nlp_rag),
    ("agentic", slides::agentic),
    ("productivity", slides::productivity),
    ("testing", slides::testing),
    ("scalability", slides::scalability),
    ("thanks", slides::thanks),
];

/// Build the full deck.
pub fn build() -> Result<Presentation> {
    let mut presentation = Presentation::new(DECK_TITLE, MAILMIND);
    for (name, builder) in SLIDE_BUILDERS {
        builder(&mut presentation)?;
        log::debug!(
            "Built slide {} '{}'",
            presentation.slide_count(),
            name
        );
    }
    log::info!("Built {} slides", presentation.slide_count());
    Ok(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Outline;
    use deck_pptx::{PptxReader, PptxWriter};
    use std::io::Cursor;

    #[test]
    fn test_builds_twelve_slides_in_order() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 12);
        let numbers: Vec<usize> = pres.slides().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_slide_titles_in_order() {
        let outline = build().unwrap().outline();
        // Slides with a title carry it right after the accent bar and footer.
        let titles: Vec<&str> = outline.slides[1..11]
            .iter()
            .map(|s| s.shapes[2].text.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "The Problem: Email Overload",
                "Our Solution: MailMind",
                "Problem Statement → Our Implementation",
                "System Architecture",
                "Core AI Features",
                "NLP & RAG-Powered Intelligence",
                "Agentic AI: One-Click Email Handling",
                "Productivity & Collaboration Suite",
                "Innovation: LLM-as-Test-Oracle",
                "Real-World Ready",
            ]
        );
        assert_eq!(outline.slides[11].texts()[1], "Thank You!");
    }

    #[test]
    fn test_shape_counts_are_stable() {
        let first = build().unwrap().outline().shape_counts();
        let second = build().unwrap().outline().shape_counts();
        assert_eq!(first, vec![9, 24, 16, 48, 36, 16, 37, 41, 20, 41, 36, 12]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_slide_has_chrome() {
        let pres = build().unwrap();
        let theme = pres.theme();
        for slide in pres.slides() {
            assert_eq!(slide.background(), Some(theme.palette.background));
            assert_eq!(slide.shapes()[0].rect().height, theme.accent_bar_height);
            assert_eq!(
                slide.outline().shapes[1].text,
                "Team Cipher  |  AlgoQuest 2025"
            );
        }
    }

    #[test]
    fn test_no_shape_has_a_visible_border() {
        let pres = build().unwrap();
        for slide in pres.slides() {
            for shape in slide.shapes() {
                assert_eq!(
                    shape.outline(),
                    Outline::Hidden,
                    "slide {} shape {}",
                    slide.number(),
                    shape.name()
                );
            }
        }
    }

    #[test]
    fn test_written_deck_reads_back_identically() {
        let pres = build().unwrap();
        let bytes = PptxWriter::new().to_bytes(&pres).unwrap();
        let outline = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        assert_eq!(outline.slide_count(), 12);
        assert_eq!(outline, pres.outline());
    }

    #[test]
    fn test_saving_twice_overwrites_the_file() {
        let path = std::env::temp_dir().join(format!(
            "mailmind-deck-{}-{}",
            std::process::id(),
            DEFAULT_FILE_NAME
        ));
        // A longer file already at the path must be truncated, not patched.
        std::fs::write(&path, vec![0u8; 512 * 1024]).unwrap();

        let writer = PptxWriter::new();
        writer.save(&build().unwrap(), &path).unwrap();
        let first = PptxReader::new().open(&path).unwrap();
        writer.save(&build().unwrap(), &path).unwrap();
        let second = PptxReader::new().open(&path).unwrap();
        let size = std::fs::metadata(&path).unwrap().len();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(first.slide_count(), 12);
        assert_eq!(second.slide_count(), 12);
        assert_eq!(first.shape_counts(), second.shape_counts());
        assert_eq!(size as usize, writer.to_bytes(&build().unwrap()).unwrap().len());
    }

    #[test]
    fn test_repeated_builds_write_identical_bytes() {
        let writer = PptxWriter::new();
        let first = writer.to_bytes(&build().unwrap()).unwrap();
        let second = writer.to_bytes(&build().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
