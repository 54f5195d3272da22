use base64::{Engine as _, engine::general_purpose};

use invoicer_invoicing::Invoice;
use invoicer_layout::{PageTemplate, layout_invoice};

use crate::backend::RenderBackend;
use crate::error::RenderError;

/// A finished, downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    /// Suggested download name, e.g. `Invoice-INV-001.pdf`.
    pub filename: String,
}

impl RenderedDocument {
    /// Self-contained `data:` URI a browser can download directly.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// `Invoice-<invoice number>.<extension>`.
pub fn suggested_filename(invoice_number: &str, extension: &str) -> String {
    format!("Invoice-{invoice_number}.{extension}")
}

/// Lay out `invoice` on `template` and hand the page to `backend`.
pub fn render_invoice(
    invoice: &Invoice,
    template: &PageTemplate,
    backend: &dyn RenderBackend,
) -> Result<RenderedDocument, RenderError> {
    let layout = layout_invoice(invoice, template);
    let bytes = backend.render(&layout)?;

    Ok(RenderedDocument {
        bytes,
        media_type: backend.media_type(),
        filename: suggested_filename(&invoice.invoice_number, backend.extension()),
    })
}
