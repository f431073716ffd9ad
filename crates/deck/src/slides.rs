//! The twelve slide builders, in presentation order.
//!
//! Every builder starts from [`new_slide`] and then places its content with
//! the layout helpers. Positions and sizes are in inches.

use deck_core::layout::{add_card, add_rectangle, add_slide_title, add_text_box, new_slide};
use deck_core::{Color, Presentation, Rect, Result, Slide, TextStyle};

fn text(
    slide: &mut Slide,
    (left, top, width, height): (f64, f64, f64, f64),
    content: &str,
    style: &TextStyle,
) -> Result<()> {
    add_text_box(slide, Rect::inches(left, top, width, height), content, style)?;
    Ok(())
}

fn card(slide: &mut Slide, (left, top, width, height): (f64, f64, f64, f64)) -> Result<()> {
    add_card(slide, Rect::inches(left, top, width, height), None)?;
    Ok(())
}

fn card_filled(
    slide: &mut Slide,
    (left, top, width, height): (f64, f64, f64, f64),
    fill: Color,
) -> Result<()> {
    add_card(slide, Rect::inches(left, top, width, height), Some(fill))?;
    Ok(())
}

fn bar(
    slide: &mut Slide,
    (left, top, width, height): (f64, f64, f64, f64),
    fill: Color,
) -> Result<()> {
    add_rectangle(slide, Rect::inches(left, top, width, height), Some(fill))?;
    Ok(())
}

fn style(size: f64, color: Color) -> TextStyle {
    TextStyle::sized(size).with_color(color)
}

/// Title slide.
pub fn title(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;

    bar(slide, (4.5, 1.2, 4.3, 0.06), p.electric_blue)?;
    text(
        slide,
        (1.0, 1.5, 11.3, 1.0),
        "\u{1f9e0}  MailMind",
        &style(54.0, p.white).bold().centered(),
    )?;
    text(
        slide,
        (1.0, 2.6, 11.3, 0.6),
        "AI-Powered Smart Email Assistant",
        &style(28.0, p.electric_blue).centered(),
    )?;
    text(
        slide,
        (1.0, 3.35, 11.3, 0.5),
        "Problem Statement #1 — Smart Email Solutions",
        &style(18.0, p.light_gray).centered(),
    )?;
    text(
        slide,
        (1.0, 4.1, 11.3, 0.5),
        "Team Cipher  |  AlgoQuest 2025 — Round 2",
        &style(20.0, p.white).bold().centered(),
    )?;
    bar(slide, (3.5, 4.85, 6.3, 0.04), p.card_bg_light)?;
    text(
        slide,
        (1.0, 5.1, 11.3, 0.5),
        "Next.js 16  •  React 19  •  TypeScript 5  •  Groq Llama 3.3  •  Vitest",
        &style(16.0, p.teal).centered(),
    )
}

/// The Problem: Email Overload.
pub fn problem(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "The Problem: Email Overload",
        Some("Professionals are drowning — and current tools aren't helping."),
    )?;

    let stats = [
        ("120+", "emails / day", "Professionals are drowning in their inbox", p.electric_blue),
        ("28%", "of work time", "Spent just managing email", p.amber),
        ("Missed", "deadlines", "Critical dates buried in email text", p.red),
        ("No", "context awareness", "Existing tools just match keywords", p.purple),
    ];

    for (i, (big, label, desc, color)) in stats.into_iter().enumerate() {
        let x = 0.6 + i as f64 * 3.1;
        card(slide, (x, 1.8, 2.8, 4.5))?;
        text(slide, (x + 0.2, 2.1, 2.4, 0.9), big, &style(48.0, color).bold().centered())?;
        text(slide, (x + 0.2, 3.0, 2.4, 0.5), label, &style(20.0, p.white).bold().centered())?;
        bar(slide, (x + 0.6, 3.55, 1.6, 0.04), color)?;
        text(slide, (x + 0.25, 3.8, 2.3, 1.5), desc, &style(15.0, p.light_gray).centered())?;
    }
    Ok(())
}

/// Our Solution: MailMind.
pub fn solution(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(slide, "Our Solution: MailMind", None)?;

    text(
        slide,
        (0.8, 1.2, 11.5, 0.8),
        "An AI-native email assistant powered by Groq's Llama 3.3 70B\n\
         that understands your emails contextually — not just keyword matching.",
        &style(20.0, p.light_gray),
    )?;

    let cards = [
        (
            "\u{1f9e0}  Contextual AI",
            "Understands nuance, intent, and urgency — not just keywords. \
             Powered by Groq Llama 3.3 70B Versatile.",
            p.electric_blue,
        ),
        (
            "\u{1f916}  Agentic Automation",
            "One-click \"Handle For Me\" — the AI reads, categorises, drafts a reply, \
             extracts events, and creates tasks autonomously.",
            p.teal,
        ),
        (
            "\u{1f9ea}  LLM-Validated Testing",
            "AI tests AI: an independent LLM oracle validates every AI output \
             for correctness, quality, and confidence.",
            p.purple,
        ),
    ];

    for (i, (heading, body, color)) in cards.into_iter().enumerate() {
        let x = 0.6 + i as f64 * 4.1;
        card(slide, (x, 2.5, 3.8, 4.0))?;
        bar(slide, (x, 2.5, 3.8, 0.08), color)?;
        text(slide, (x + 0.25, 2.8, 3.3, 0.6), heading, &style(22.0, color).bold())?;
        text(slide, (x + 0.25, 3.5, 3.3, 2.8), body, &style(16.0, p.light_gray))?;
    }
    Ok(())
}

/// Problem statement requirements mapped to features, as a striped table.
pub fn mapping(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "Problem Statement → Our Implementation",
        Some("Every requirement mapped to a concrete feature."),
    )?;

    let rows = [
        ("Auto-prioritize mails", "AI Priority Scoring (1-100)", p.electric_blue),
        ("Extract tasks", "AI To-Do Extraction + Agentic Handle For Me", p.teal),
        ("Manage follow-ups", "AI Follow-Up Scheduling", p.green),
        ("NLP", "Deadline Extraction, Summarization, Spam Detection", p.purple),
        ("RAG", "In-Memory Vector Store + Cosine Similarity Replies", p.amber),
        ("React", "React 19 + Next.js 16 + Custom Hooks", p.electric_blue),
        ("Node.js", "16+ Serverless API Routes", p.teal),
        ("Testing with LLMs", "LLM-as-Test-Oracle (5 Test Suites)", p.red),
    ];

    let y_start = 1.7;
    let row_h = 0.62;
    let header = style(16.0, p.electric_blue).bold();

    bar(slide, (0.6, y_start, 5.4, row_h), p.card_bg_light)?;
    text(slide, (0.8, y_start + 0.1, 5.0, 0.4), "Requirement", &header)?;
    bar(slide, (6.1, y_start, 6.6, row_h), p.card_bg_light)?;
    text(slide, (6.3, y_start + 0.1, 6.2, 0.4), "MailMind Implementation", &header)?;

    for (idx, (requirement, implementation, color)) in rows.into_iter().enumerate() {
        let y = y_start + (idx + 1) as f64 * row_h;
        let stripe = if idx % 2 == 0 { p.card_bg } else { p.card_bg_dark };

        bar(slide, (0.6, y, 5.4, row_h), stripe)?;
        bar(slide, (0.6, y, 0.08, row_h), color)?;
        text(slide, (0.85, y + 0.1, 5.0, 0.4), requirement, &style(15.0, p.white).bold())?;

        bar(slide, (6.1, y, 6.6, row_h), stripe)?;
        text(slide, (6.3, y + 0.1, 6.2, 0.4), implementation, &style(15.0, p.light_gray))?;
    }
    Ok(())
}

/// System Architecture: stacked layers joined by arrow glyphs.
pub fn architecture(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(slide, "System Architecture", Some("Clean, serverless, AI-first design."))?;

    // Frontend
    card_filled(slide, (0.8, 1.6, 11.7, 1.0), p.card_bg)?;
    bar(slide, (0.8, 1.6, 11.7, 0.07), p.electric_blue)?;
    text(
        slide,
        (1.0, 1.75, 11.3, 0.35),
        "\u{1f5a5}  Frontend Layer",
        &style(18.0, p.electric_blue).bold().centered(),
    )?;
    text(
        slide,
        (1.0, 2.1, 11.3, 0.35),
        "Next.js 16  •  React 19  •  TypeScript 5  •  Tailwind CSS  •  Custom Hooks",
        &style(14.0, p.light_gray).centered(),
    )?;
    text(slide, (6.0, 2.65, 1.3, 0.4), "▼", &style(24.0, p.electric_blue).centered())?;

    // API
    card_filled(slide, (0.8, 3.0, 11.7, 0.7), p.card_bg)?;
    bar(slide, (0.8, 3.0, 11.7, 0.07), p.teal)?;
    text(
        slide,
        (1.0, 3.1, 11.3, 0.5),
        "\u{1f517}  API Layer  —  16+ Serverless Endpoints",
        &style(18.0, p.teal).bold().centered(),
    )?;
    text(slide, (6.0, 3.7, 1.3, 0.4), "▼", &style(24.0, p.teal).centered())?;

    let modules = [
        ("AI Engine\n10 endpoints", p.purple),
        ("Gmail API\nIntegration", p.electric_blue),
        ("RAG\nVector Store", p.teal),
        ("Calendar\nExtraction", p.amber),
        ("Team\nCollab", p.green),
        ("Search &\nFilter", p.red),
    ];
    for (i, (label, color)) in modules.into_iter().enumerate() {
        let x = 0.8 + i as f64 * 2.05;
        card_filled(slide, (x, 4.1, 1.85, 1.3), p.card_bg)?;
        bar(slide, (x, 4.1, 1.85, 0.06), color)?;
        text(slide, (x + 0.1, 4.25, 1.65, 1.0), label, &style(13.0, color).bold().centered())?;
    }
    text(slide, (6.0, 5.4, 1.3, 0.4), "▼", &style(24.0, p.purple).centered())?;

    // External services
    card_filled(slide, (0.8, 5.7, 11.7, 1.0), p.card_bg)?;
    bar(slide, (0.8, 5.7, 11.7, 0.07), p.purple)?;
    text(
        slide,
        (1.0, 5.85, 11.3, 0.35),
        "\u{2601}  External Services",
        &style(18.0, p.purple).bold().centered(),
    )?;
    text(
        slide,
        (1.0, 6.2, 11.3, 0.35),
        "Groq Llama 3.3 70B Versatile  •  Gmail API  •  NextAuth OAuth 2.0",
        &style(14.0, p.light_gray).centered(),
    )
}

/// Core AI Features.
pub fn core_features(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "Core AI Features",
        Some("Intelligent email processing powered by Groq Llama 3.3 70B."),
    )?;

    let features = [
        (
            "\u{1f3af}  Priority Scoring (1-100)",
            "AI analyses urgency, sender importance, and action requirements. \
             Returns a numeric score with reasoning — no more guessing \
             which emails matter most.",
            p.electric_blue,
        ),
        (
            "\u{1f4c2}  Smart 4-Category Inbox",
            "Do Now  |  Needs Decision  |  Waiting  |  Low Energy\n\n\
             Emails are auto-sorted by the AI into actionable buckets \
             so you always know what to tackle first.",
            p.teal,
        ),
        (
            "\u{1f6e1}  Spam & Phishing Detection",
            "Context-aware detection with confidence scoring. \
             Catches subtle attacks like paypa1.com vs paypal.com — \
             beyond what rule-based filters can do.",
            p.red,
        ),
    ];

    for (i, (heading, body, color)) in features.into_iter().enumerate() {
        let x = 0.6 + i as f64 * 4.1;
        card(slide, (x, 1.8, 3.8, 4.8))?;
        bar(slide, (x, 1.8, 3.8, 0.08), color)?;
        text(slide, (x + 0.25, 2.1, 3.3, 0.6), heading, &style(20.0, color).bold())?;
        text(slide, (x + 0.25, 2.8, 3.3, 3.5), body, &style(15.0, p.light_gray))?;
    }
    Ok(())
}

/// NLP & RAG-Powered Intelligence: two side-by-side columns.
pub fn nlp_rag(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "NLP & RAG-Powered Intelligence",
        Some("Deep language understanding meets retrieval-augmented generation."),
    )?;

    let nlp_items = [
        ("Deadline Extraction", "\"by end of week\" → Fri 2025-01-31"),
        ("AI Email Summarization", "Long threads → concise bullet points"),
        ("Sentiment & Intent", "Detects urgency, frustration, requests"),
        ("\"Why This Matters\"", "AI explains why each email needs attention"),
    ];
    let rag_items = [
        ("In-Memory Vector Store", "128-dim TF-IDF embeddings"),
        ("Cosine Similarity Matching", "Finds relevant past emails instantly"),
        ("Sender-Aware Retrieval", "Prioritises context from same sender"),
        ("500 Email Capacity", "Stores up to 500 email embeddings"),
        ("Context-Enriched Replies", "RAG-powered smart reply generation"),
    ];

    let columns: [(f64, &str, Color, &[(&str, &str)], f64); 2] = [
        (0.6, "\u{1f4ac}  NLP Features", p.electric_blue, &nlp_items[..], 0.95),
        (6.9, "\u{1f50d}  RAG Implementation", p.teal, &rag_items[..], 0.85),
    ];

    for (x, heading, color, items, step) in columns {
        card(slide, (x, 1.7, 5.8, 5.0))?;
        bar(slide, (x, 1.7, 5.8, 0.08), color)?;
        text(slide, (x + 0.3, 1.95, 5.2, 0.5), heading, &style(22.0, color).bold())?;

        let mut y = 2.6;
        for &(item, desc) in items {
            bar(slide, (x + 0.4, y, 0.08, 0.55), color)?;
            text(slide, (x + 0.65, y, 4.9, 0.28), item, &style(16.0, p.white).bold())?;
            text(slide, (x + 0.65, y + 0.3, 4.9, 0.28), desc, &style(13.0, p.light_gray))?;
            y += step;
        }
    }
    Ok(())
}

/// Agentic AI: six step cards with arrows between them.
pub fn agentic(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "Agentic AI: One-Click Email Handling",
        Some("The AI handles everything — autonomously, step by step."),
    )?;

    let steps = [
        ("1", "Analyze", "Summarises\nthe email", p.electric_blue),
        ("2", "Categorize", "Determines\npriority & category", p.teal),
        ("3", "Draft Reply", "Generates context-\naware response", p.purple),
        ("4", "Extract Events", "Identifies\ncalendar events", p.amber),
        ("5", "Generate Task", "Creates\nactionable to-do", p.green),
        ("6", "Follow-Up", "Recommends\nnext steps", p.red),
    ];
    let last = steps.len() - 1;

    for (i, (num, heading, desc, color)) in steps.into_iter().enumerate() {
        let x = 0.5 + i as f64 * 2.1;
        card(slide, (x, 2.0, 1.9, 3.8))?;
        bar(slide, (x, 2.0, 1.9, 0.08), color)?;
        text(slide, (x + 0.55, 2.25, 0.8, 0.6), num, &style(32.0, color).bold().centered())?;
        text(slide, (x + 0.1, 3.0, 1.7, 0.5), heading, &style(17.0, p.white).bold().centered())?;
        text(slide, (x + 0.1, 3.55, 1.7, 1.5), desc, &style(13.0, p.light_gray).centered())?;

        if i < last {
            text(slide, (x + 1.85, 3.0, 0.35, 0.5), "→", &style(24.0, p.mid_gray).centered())?;
        }
    }

    card_filled(slide, (0.8, 6.1, 11.7, 0.7), p.card_bg)?;
    text(
        slide,
        (1.0, 6.2, 11.3, 0.5),
        "All autonomous.  One click.  Step-by-step progress modal.  \
         No manual intervention required.",
        &style(16.0, p.teal).centered(),
    )
}

/// Productivity & Collaboration Suite: a two-by-two card grid.
pub fn productivity(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "Productivity & Collaboration Suite",
        Some("Beyond email — a complete workflow platform."),
    )?;

    let cards = [
        (
            "\u{1f3af}  Focus Mode",
            "Distraction-free urgent task view with time-of-day greeting, \
             progress tracking, and smart task prioritisation.",
            p.electric_blue,
            0.6,
            1.8,
        ),
        (
            "\u{1f4ca}  Weekly Analysis",
            "Email volume tracking, stress scoring (0-100), burnout risk \
             detection (Low → Critical), late-night email flags.",
            p.amber,
            6.6,
            1.8,
        ),
        (
            "\u{1f4c5}  Calendar Integration",
            "AI extracts events from emails. Color-coded: \
             Deadline (red), Meeting (blue), Appointment (purple), Reminder (green).",
            p.green,
            0.6,
            4.2,
        ),
        (
            "\u{1f465}  Team Collaboration",
            "Email assignment, workload dashboard, status tracking, \
             internal notes, AI workload suggestions.",
            p.purple,
            6.6,
            4.2,
        ),
    ];

    for (heading, body, color, x, y) in cards {
        card(slide, (x, y, 5.7, 2.1))?;
        bar(slide, (x, y, 5.7, 0.08), color)?;
        text(slide, (x + 0.25, y + 0.2, 5.2, 0.5), heading, &style(22.0, color).bold())?;
        text(slide, (x + 0.25, y + 0.8, 5.2, 1.1), body, &style(15.0, p.light_gray))?;
    }
    Ok(())
}

/// Innovation: LLM-as-Test-Oracle. A left-to-right flow and a suite table.
pub fn testing(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(
        slide,
        "Innovation: LLM-as-Test-Oracle",
        Some("How do you test if AI output is reasonable?  You ask another LLM."),
    )?;

    // `None` marks an arrow between two boxes.
    let flow = [
        ("Test\nInput", Some(p.card_bg_light)),
        ("→", None),
        ("MailMind AI\n(Groq)", Some(p.electric_blue)),
        ("→", None),
        ("AI Output", Some(p.card_bg_light)),
        ("→", None),
        ("LLM Oracle\n(Groq)", Some(p.purple)),
        ("→", None),
        ("Validation\n✓ / ✗", Some(p.green)),
    ];

    let mut x = 0.3;
    for (label, fill) in flow {
        match fill {
            Some(color) => {
                card_filled(slide, (x, 1.8, 1.35, 1.0), color)?;
                text(
                    slide,
                    (x + 0.05, 1.85, 1.25, 0.85),
                    label,
                    &style(12.0, p.white).bold().centered(),
                )?;
                x += 1.45;
            }
            None => {
                text(slide, (x, 1.95, 0.5, 0.7), label, &style(28.0, p.mid_gray).centered())?;
                x += 0.45;
            }
        }
    }

    card_filled(slide, (8.5, 3.0, 4.2, 0.8), p.card_bg)?;
    text(
        slide,
        (8.7, 3.1, 3.8, 0.6),
        "{ isValid, confidence, reasoning }",
        &style(14.0, p.green).bold().centered(),
    )?;

    let suites = [
        ("ai-priority.test.ts", "Validates priority scores (1-100)", p.electric_blue),
        ("ai-categorization.test.ts", "Validates category assignments", p.teal),
        ("ai-spam-detection.test.ts", "Validates spam / phishing decisions", p.red),
        ("ai-deadline-extraction.test.ts", "Validates deadline parsing accuracy", p.amber),
        ("ai-reply-quality.test.ts", "Validates reply professionalism & tone", p.purple),
    ];

    let mut y = 4.0;
    for (name, desc, color) in suites {
        bar(slide, (0.8, y, 0.08, 0.55), color)?;
        card_filled(slide, (0.95, y, 11.5, 0.55), p.card_bg)?;
        text(slide, (1.1, y + 0.08, 4.5, 0.4), name, &style(15.0, color).bold())?;
        text(slide, (5.8, y + 0.08, 6.0, 0.4), desc, &style(15.0, p.light_gray))?;
        y += 0.65;
    }

    text(
        slide,
        (0.8, 6.4, 11.5, 0.4),
        "Powered by Vitest  +  Groq Llama 3.3 70B Versatile",
        &style(14.0, p.teal).centered(),
    )
}

/// Real-World Ready: metric cards and scalability points.
pub fn scalability(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;
    add_slide_title(slide, "Real-World Ready", Some("Built for production from day one."))?;

    let metrics = [
        ("<2s", "AI Response Time", "Groq's ultra-fast inference", p.electric_blue),
        ("16+", "Serverless Endpoints", "Modular API design", p.teal),
        ("500", "Emails in RAG Store", "In-memory vector DB", p.purple),
        ("10", "Parallel Emails", "Concurrent processing", p.amber),
    ];

    for (i, (big, label, sub, color)) in metrics.into_iter().enumerate() {
        let x = 0.5 + i as f64 * 3.2;
        card(slide, (x, 1.7, 2.9, 2.8))?;
        bar(slide, (x, 1.7, 2.9, 0.08), color)?;
        text(slide, (x + 0.15, 1.95, 2.6, 0.8), big, &style(52.0, color).bold().centered())?;
        text(slide, (x + 0.15, 2.85, 2.6, 0.4), label, &style(18.0, p.white).bold().centered())?;
        text(slide, (x + 0.15, 3.3, 2.6, 0.4), sub, &style(13.0, p.light_gray).centered())?;
    }

    let points = [
        (
            "Serverless Architecture",
            "Auto-scales with demand — zero ops overhead",
            p.electric_blue,
        ),
        ("In-Memory Caching", "Reduces redundant API calls for instant responses", p.teal),
        ("Modular API Design", "Each feature is an independent, testable endpoint", p.purple),
        ("Real Gmail OAuth", "Production-ready NextAuth integration", p.green),
    ];

    let mut y = 4.9;
    for (heading, desc, color) in points {
        bar(slide, (0.8, y, 0.08, 0.5), color)?;
        text(slide, (1.1, y + 0.05, 4.0, 0.4), heading, &style(17.0, p.white).bold())?;
        text(slide, (5.3, y + 0.05, 7.2, 0.4), desc, &style(15.0, p.light_gray))?;
        y += 0.6;
    }
    Ok(())
}

/// Thank You and live demo.
pub fn thanks(pres: &mut Presentation) -> Result<()> {
    let p = pres.theme().palette;
    let slide = new_slide(pres)?;

    bar(slide, (4.5, 1.0, 4.3, 0.06), p.electric_blue)?;
    text(slide, (1.0, 1.3, 11.3, 1.0), "Thank You!", &style(52.0, p.white).bold().centered())?;
    text(
        slide,
        (1.0, 2.4, 11.3, 0.6),
        "Let us show you MailMind in action…",
        &style(24.0, p.electric_blue).centered(),
    )?;
    bar(slide, (4.5, 3.2, 4.3, 0.04), p.card_bg_light)?;
    text(slide, (1.0, 3.5, 11.3, 0.5), "Team Cipher", &style(28.0, p.white).bold().centered())?;
    text(
        slide,
        (1.0, 4.2, 11.3, 0.4),
        "GitHub:  github.com/Avila-Princy-M01/mailmindd",
        &style(16.0, p.teal).centered(),
    )?;
    text(
        slide,
        (1.0, 4.8, 11.3, 0.4),
        "Next.js 16  •  React 19  •  Groq Llama 3.3 70B  •  Vitest",
        &style(16.0, p.light_gray).centered(),
    )?;

    card_filled(slide, (4.5, 5.5, 4.3, 1.0), p.card_bg)?;
    bar(slide, (4.5, 5.5, 4.3, 0.08), p.purple)?;
    text(slide, (4.7, 5.7, 3.9, 0.6), "Questions?", &style(30.0, p.purple).bold().centered())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Emu, Fill, ShapeKind, MAILMIND};

    fn single(builder: fn(&mut Presentation) -> Result<()>) -> Presentation {
        let mut pres = Presentation::new("Test", MAILMIND);
        builder(&mut pres).unwrap();
        pres
    }

    fn texts(pres: &Presentation) -> Vec<String> {
        pres.outline().slides[0]
            .texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_title_slide_has_no_slide_title() {
        let pres = single(title);
        let texts = texts(&pres);
        assert_eq!(texts[0], "Team Cipher  |  AlgoQuest 2025");
        assert_eq!(texts[1], "\u{1f9e0}  MailMind");
        assert!(texts.contains(&"AI-Powered Smart Email Assistant".to_string()));
    }

    #[test]
    fn test_problem_stat_cards() {
        let pres = single(problem);
        let slide = &pres.slides()[0];
        let cards = slide
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::RoundedRectangle)
            .count();
        assert_eq!(cards, 4);

        let last_card = slide
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::RoundedRectangle)
            .last()
            .unwrap();
        assert_eq!(last_card.rect(), Rect::inches(9.9, 1.8, 2.8, 4.5));
    }

    #[test]
    fn test_mapping_rows_alternate_stripes() {
        let pres = single(mapping);
        let p = MAILMIND.palette;
        let fills: Vec<Color> = pres.slides()[0]
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::Rectangle && s.rect().width == Emu::from_inches(5.4))
            .filter_map(|s| match s.fill() {
                Fill::Solid(color) => Some(color),
                Fill::NoFill => None,
            })
            .collect();
        assert_eq!(fills.len(), 9);
        assert_eq!(fills[0], p.card_bg_light);
        assert_eq!(fills[1], p.card_bg);
        assert_eq!(fills[2], p.card_bg_dark);
        assert_eq!(fills[8], p.card_bg_dark);
    }

    #[test]
    fn test_architecture_module_labels_keep_line_breaks() {
        let pres = single(architecture);
        assert!(texts(&pres).contains(&"AI Engine\n10 endpoints".to_string()));
        let arrows = texts(&pres).iter().filter(|t| t.as_str() == "▼").count();
        assert_eq!(arrows, 3);
    }

    #[test]
    fn test_agentic_has_arrows_between_steps_only() {
        let pres = single(agentic);
        let arrows = texts(&pres).iter().filter(|t| t.as_str() == "→").count();
        assert_eq!(arrows, 5);
    }

    #[test]
    fn test_testing_flow_fits_on_slide() {
        let pres = single(testing);
        let slide = &pres.slides()[0];
        let widest = slide.shapes().iter().map(|s| s.rect().right()).max().unwrap();
        assert!(widest <= slide.width());

        let arrows = texts(&pres).iter().filter(|t| t.as_str() == "→").count();
        assert_eq!(arrows, 4);
    }

    #[test]
    fn test_core_features_keeps_blank_line() {
        let pres = single(core_features);
        let inbox = "Do Now  |  Needs Decision  |  Waiting  |  Low Energy\n\nEmails";
        assert!(texts(&pres).iter().any(|t| t.starts_with(inbox)));
    }
}
