use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::core::{AppError, Result};
use crate::modules::reports::models::SettlementReport;

/// Renders a settlement report into an opaque byte artifact
///
/// Seam between the pipeline and the document format; integration tests
/// substitute a deterministic in-memory implementation.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &SettlementReport) -> Result<Vec<u8>>;
}

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 15.0;
const TOP_BASELINE_MM: f32 = 277.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const ROW_STEP_MM: f32 = 7.0;

// Column x positions: invoice, customer, credits, photographer, platform
const COLUMNS_MM: [f32; 5] = [15.0, 45.0, 115.0, 140.0, 175.0];

/// A4 portrait PDF: title, one table row per settled invoice, totals row
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, cells: [&str; 5]) {
        for (text, x) in cells.iter().zip(COLUMNS_MM) {
            layer.use_text(*text, 10.0, Mm(x), Mm(y), font);
        }
    }

    fn write_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
        Self::write_row(
            layer,
            font,
            y,
            ["Invoice", "Customer", "Credits", "Photographer", "Platform"],
        );
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for PdfRenderer {
    fn render(&self, report: &SettlementReport) -> Result<Vec<u8>> {
        let title = format!("Credit settlement {}", report.period.label());
        let (doc, page, layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::render(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::render(e.to_string()))?;

        let mut layer = doc.get_page(page).get_layer(layer);
        layer.use_text(&title, 14.0, Mm(LEFT_MARGIN_MM), Mm(TOP_BASELINE_MM), &bold);

        let mut y = TOP_BASELINE_MM - 2.0 * ROW_STEP_MM;
        PdfRenderer::write_header(&layer, &bold, y);
        y -= ROW_STEP_MM;

        for result in &report.records {
            if y < BOTTOM_MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = TOP_BASELINE_MM;
                PdfRenderer::write_header(&layer, &bold, y);
                y -= ROW_STEP_MM;
            }

            let invoice = result.invoice_number().to_string();
            let credits = result.credit_quantity().to_string();
            let photographer = result.photographer_share.to_string();
            let platform = result.platform_share.to_string();
            PdfRenderer::write_row(
                &layer,
                &regular,
                y,
                [
                    &invoice,
                    &result.record.recipient.name,
                    &credits,
                    &photographer,
                    &platform,
                ],
            );
            y -= ROW_STEP_MM;
        }

        if y < BOTTOM_MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_BASELINE_MM;
        }
        let total_credits = report.total_credits().to_string();
        let total_photographer = report.total_photographer_share().to_string();
        let total_platform = report.total_platform_share().to_string();
        PdfRenderer::write_row(
            &layer,
            &bold,
            y,
            [
                "Total",
                "",
                &total_credits,
                &total_photographer,
                &total_platform,
            ],
        );

        doc.save_to_bytes()
            .map_err(|e| AppError::render(e.to_string()))
    }
}
