//! PDF export
//!
//! The report is laid out directly with text and line primitives on a single
//! A4-width page. The page height follows the content: nothing is clipped and
//! nothing spills onto a second page.

use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use crate::error::{FinReportError, FinReportResult};
use crate::reports::ReportView;

/// A4 portrait width
pub const PAGE_WIDTH_MM: f32 = 210.0;

const MARGIN_MM: f32 = 15.0;
const VALUE_X_MM: f32 = 110.0;
const PT_TO_MM: f32 = 0.352_778;
const LEADING: f32 = 1.6;
const DIVIDER_GAP_MM: f32 = 4.0;

const HEADING_PT: f32 = 20.0;
const TITLE_PT: f32 = 15.0;
const BODY_PT: f32 = 12.0;
const FOOTER_PT: f32 = 9.0;

/// Characters of Windows-1252 outside Latin-1
const WINANSI_EXTRAS: [char; 27] = [
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•', '–',
    '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// Whether the built-in (WinAnsi encoded) fonts can draw `text`
///
/// printpdf drops characters the encoding lacks without an error.
pub fn is_winansi(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WINANSI_EXTRAS.contains(&c)
    })
}

/// Text placed on the page, measured from the top edge
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub size_pt: f32,
    pub x_mm: f32,
    /// Baseline distance from the top of the page
    pub baseline_mm: f32,
    pub bold: bool,
}

/// Page geometry for one report
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub texts: Vec<PlacedText>,
    /// Horizontal rules, as distance from the top of the page
    pub rules_mm: Vec<f32>,
}

impl PdfLayout {
    /// Lay out a rendered report
    pub fn for_view(view: &ReportView) -> Self {
        let mut texts = Vec::new();
        let mut rules_mm = Vec::new();
        let mut cursor = MARGIN_MM;

        // places one line of text at `top`, returns the height it takes
        let mut place = |top: f32, text: String, size_pt: f32, x_mm: f32, bold: bool| {
            texts.push(PlacedText {
                text,
                size_pt,
                x_mm,
                baseline_mm: top + size_pt * PT_TO_MM,
                bold,
            });
            size_pt * PT_TO_MM * LEADING
        };

        cursor += place(cursor, view.heading.to_string(), HEADING_PT, MARGIN_MM, true);
        cursor += place(cursor, view.title.clone(), TITLE_PT, MARGIN_MM, true);

        cursor += DIVIDER_GAP_MM / 2.0;
        rules_mm.push(cursor);
        cursor += DIVIDER_GAP_MM;

        for line in &view.lines {
            place(cursor, format!("{}:", line.label), BODY_PT, MARGIN_MM, true);
            cursor += place(cursor, line.value.clone(), BODY_PT, VALUE_X_MM, false);
        }

        cursor += DIVIDER_GAP_MM / 2.0;
        rules_mm.push(cursor);
        cursor += DIVIDER_GAP_MM;

        cursor += place(cursor, view.footer.clone(), FOOTER_PT, MARGIN_MM, false);

        Self {
            width_mm: PAGE_WIDTH_MM,
            height_mm: cursor + MARGIN_MM,
            texts,
            rules_mm,
        }
    }
}

/// Render a report to PDF bytes, returning the page size used
pub fn render_pdf(view: &ReportView) -> FinReportResult<(Vec<u8>, (f32, f32))> {
    let layout = PdfLayout::for_view(view);
    let page_height = layout.height_mm;

    if let Some(text) = layout.texts.iter().find(|t| !is_winansi(&t.text)) {
        return Err(FinReportError::Export(format!(
            "'{}' contains characters the PDF fonts cannot print",
            text.text
        )));
    }

    let (doc, page, layer) = PdfDocument::new(
        view.title.clone(),
        Mm(layout.width_mm),
        Mm(page_height),
        "Report",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| FinReportError::Export(format!("Failed to load font: {}", e)))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| FinReportError::Export(format!("Failed to load font: {}", e)))?;

    for text in &layout.texts {
        let face = if text.bold { &font_bold } else { &font };
        layer.use_text(
            text.text.clone(),
            text.size_pt,
            Mm(text.x_mm),
            Mm(page_height - text.baseline_mm),
            face,
        );
    }

    for rule in &layout.rules_mm {
        let y = Mm(page_height - rule);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), y), false),
                (Point::new(Mm(layout.width_mm - MARGIN_MM), y), false),
            ],
            is_closed: false,
        });
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| FinReportError::Export(format!("Failed to write PDF: {}", e)))?;

    Ok((bytes, (layout.width_mm, page_height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialSummary, Granularity};
    use crate::reports::RenderOptions;
    use chrono::NaiveDate;

    fn view() -> ReportView {
        let summary = FinancialSummary::new("2024-03", 5000.0, 3000.0, 1000.0, 1000.0);
        ReportView::build(
            &summary,
            Granularity::Monthly,
            &RenderOptions::default(),
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        )
    }

    #[test]
    fn test_layout_contains_every_line() {
        let layout = PdfLayout::for_view(&view());
        let texts: Vec<&str> = layout.texts.iter().map(|t| t.text.as_str()).collect();

        for expected in [
            "Report for 2024-03",
            "Income:",
            "Rs. 5000",
            "Expenses:",
            "Rs. 3000",
            "Savings:",
            "Balance:",
            "Generated on 2024-04-02",
        ] {
            assert!(texts.contains(&expected), "missing {}", expected);
        }
        assert_eq!(layout.rules_mm.len(), 2);
    }

    #[test]
    fn test_layout_fits_page() {
        let layout = PdfLayout::for_view(&view());
        assert_eq!(layout.width_mm, PAGE_WIDTH_MM);
        assert!(layout
            .texts
            .iter()
            .all(|t| t.baseline_mm > 0.0 && t.baseline_mm < layout.height_mm));
        // baselines run top to bottom
        let labels: Vec<f32> = layout
            .texts
            .iter()
            .filter(|t| t.x_mm == MARGIN_MM)
            .map(|t| t.baseline_mm)
            .collect();
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_page_grows_with_content() {
        let mut long = view();
        let extra = long.lines.clone();
        for _ in 0..30 {
            long.lines.extend(extra.iter().cloned());
        }
        let short = PdfLayout::for_view(&view());
        let tall = PdfLayout::for_view(&long);
        assert!(tall.height_mm > short.height_mm);
        assert!(tall.height_mm > 297.0);
    }

    #[test]
    fn test_font_sizes() {
        let layout = PdfLayout::for_view(&view());
        let size_of = |text: &str| {
            layout
                .texts
                .iter()
                .find(|t| t.text == text)
                .map(|t| t.size_pt)
                .unwrap()
        };

        assert_eq!(size_of("Monthly Financial Report"), HEADING_PT);
        assert_eq!(size_of("Report for 2024-03"), TITLE_PT);
        assert_eq!(size_of("Income:"), BODY_PT);
        assert_eq!(size_of("Rs. 5000"), BODY_PT);
        assert_eq!(size_of("Generated on 2024-04-02"), FOOTER_PT);
        assert!(HEADING_PT > TITLE_PT && TITLE_PT > BODY_PT && BODY_PT > FOOTER_PT);
    }

    #[test]
    fn test_winansi() {
        assert!(is_winansi("Rs. 5000"));
        assert!(is_winansi("\u{20ac}12 \u{a3}3 caf\u{e9}"));
        assert!(!is_winansi("\u{20b9}500"));
        assert!(!is_winansi("\u{6708}"));
    }

    #[test]
    fn test_render_pdf_rejects_unprintable_text() {
        let options = RenderOptions {
            currency_prefix: "\u{20b9} ".into(),
            ..RenderOptions::default()
        };
        let summary = FinancialSummary::new("2024-03", 1.0, 1.0, 0.0, 0.0);
        let view = ReportView::build(
            &summary,
            Granularity::Monthly,
            &options,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        );
        assert!(matches!(render_pdf(&view), Err(FinReportError::Export(_))));
    }

    #[test]
    fn test_render_pdf_bytes() {
        let (bytes, (width, height)) = render_pdf(&view()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(width, PAGE_WIDTH_MM);
        assert!(height > 0.0);
    }
}
