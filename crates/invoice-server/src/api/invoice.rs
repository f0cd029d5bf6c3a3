use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use invoice_layout::InvoiceRequest;
use tracing::info;

/// How the browser should treat the returned document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Attachment,
    Inline,
}

impl Disposition {
    fn header_value(self, filename: &str) -> String {
        let kind = match self {
            Disposition::Attachment => "attachment",
            Disposition::Inline => "inline",
        };
        format!("{kind}; filename=\"{filename}\"")
    }
}

/// `invoice_<no>.pdf`, keeping only ASCII letters, digits, `-` and `_`
pub fn invoice_filename(invoice_no: &str) -> String {
    let safe: String = invoice_no
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let safe = if safe.is_empty() { "generated" } else { safe.as_str() };
    format!("invoice_{safe}.pdf")
}

pub async fn generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<InvoiceRequest>,
) -> Result<Response> {
    render_pdf(state, request, Disposition::Attachment).await
}

pub async fn view_pdf(
    State(state): State<AppState>,
    Json(request): Json<InvoiceRequest>,
) -> Result<Response> {
    render_pdf(state, request, Disposition::Inline).await
}

async fn render_pdf(
    state: AppState,
    request: InvoiceRequest,
    disposition: Disposition,
) -> Result<Response> {
    let filename = invoice_filename(&request.invoice_no);
    let record = request.normalize();

    // Layout and PDF serialization are CPU bound
    let pdf_bytes = tokio::task::spawn_blocking(move || state.render(&record)).await??;

    info!(
        filename = %filename,
        bytes = pdf_bytes.len(),
        ?disposition,
        "invoice generated"
    );

    let disposition = HeaderValue::from_str(&disposition.header_value(&filename))
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf_bytes,
    )
        .into_response())
}
