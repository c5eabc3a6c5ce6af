//! REST transport for [`ApiRequest`] values built by the `api` crate.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; pages render
//! [`user_message`] inline once and never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use api::{ApiError, ApiRequest};
use serde::de::DeserializeOwned;

/// Execute `request` and decode a JSON body of `T`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that does not match `T`.
pub async fn send<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    let (status, body) = fetch(request).await?;
    api::decode(status, &body)
}

/// Execute `request`, ignoring any success body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn send_empty(request: ApiRequest) -> Result<(), ApiError> {
    let (status, body) = fetch(request).await?;
    api::decode_empty(status, &body)
}

async fn fetch(request: ApiRequest) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            api::Method::Get => HttpMethod::GET,
            api::Method::Post => HttpMethod::POST,
            api::Method::Patch => HttpMethod::PATCH,
            api::Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in request.headers() {
            builder = builder.header(name, &value);
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| {
            leptos::logging::warn!("{} failed: {e}", request_label(&request));
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_label(request: &ApiRequest) -> String {
    format!("{} {}", request.method, request.url)
}

/// Inline, user-facing text for a failed call.
pub fn user_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Não foi possível conectar ao servidor.".to_owned(),
        ApiError::Status { status: 401, .. } => "Sessão expirada. Faça login novamente.".to_owned(),
        ApiError::Status { status: 403, .. } => "Você não tem permissão para esta ação.".to_owned(),
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Status { status, .. } => format!("Erro {status} ao processar a requisição."),
        ApiError::UnexpectedShape(_) => "Resposta inesperada do servidor.".to_owned(),
        ApiError::Encode(_) => "Dados inválidos no formulário.".to_owned(),
        ApiError::Unavailable => "Indisponível fora do navegador.".to_owned(),
    }
}
