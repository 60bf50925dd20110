use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use thiserror::Error;

/// Failure while producing a server-rendered page.
///
/// Raised by [`crate::app::pages::PageRenderer`] implementations; the stock
/// renderer never fails, but the seam allows implementations that can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("page render failed: {0}")]
pub struct RenderError(pub String);

/// Bare page served when rendering breaks. Visitors get a door, not a stack
/// trace.
const FALLBACK_PAGE: &str = "<!doctype html>\
<html lang=\"pt-BR\"><head><meta charset=\"utf-8\"><title>RARO</title></head>\
<body><h1>RARO</h1><p>Indisponível no momento. Tente novamente em instantes.</p></body></html>";

/// Turn a render result into a response, degrading to the fallback page.
///
/// The render failure itself is logged server-side; the response stays 200 so
/// the visitor still sees a page, just an uninformative one.
pub fn html_or_fallback(
    view: &'static str,
    status: StatusCode,
    rendered: Result<String, RenderError>,
) -> axum::response::Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(%view, error = %err, "page render failed; serving fallback");
            Html(FALLBACK_PAGE).into_response()
        }
    }
}
