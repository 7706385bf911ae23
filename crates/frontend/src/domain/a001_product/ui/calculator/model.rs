use contracts::domain::a001_product::aggregate::{
    decode_product_info, ProductInfoError, ProductQuote,
};
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::AbortSignal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteFetchError {
    /// Сервер ответил `{ "error": ... }`.
    #[error("server rejected product lookup: {0}")]
    Application(String),
    /// Сеть, HTTP-статус или неразборчивый JSON.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Запрос отменён, потому что пользователь выбрал другой товар.
    #[error("request aborted")]
    Aborted,
}

/// Classifies a finished HTTP exchange.
///
/// An error payload is an application error whatever the status (the server
/// answers 404 with `{ "error": ... }`); any other non-2xx is a transport error.
pub fn classify_response(ok: bool, status: u16, body: &str) -> Result<ProductQuote, QuoteFetchError> {
    match decode_product_info(body) {
        Err(ProductInfoError::Rejected(reason)) => Err(QuoteFetchError::Application(reason)),
        _ if !ok => Err(QuoteFetchError::Transport(format!("HTTP {}", status))),
        Err(ProductInfoError::Malformed(e)) => Err(QuoteFetchError::Transport(e)),
        Ok(quote) => Ok(quote),
    }
}

/// GET `url` and decode the product quote.
pub async fn fetch_quote(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<ProductQuote, QuoteFetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(map_request_error)?;

    let body = response
        .text()
        .await
        .map_err(|e| QuoteFetchError::Transport(format!("Failed to read response: {}", e)))?;

    classify_response(response.ok(), response.status(), &body)
}

fn map_request_error(error: gloo_net::Error) -> QuoteFetchError {
    match &error {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => QuoteFetchError::Aborted,
        _ => QuoteFetchError::Transport(format!("Request failed: {}", error)),
    }
}
