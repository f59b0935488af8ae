// WHY: HTTP surface over the translator - the static page, /translate and /phrases
// Handlers share only the read-only phrase table; each request gets its own RNG

use anyhow::Result;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::phrase_table::{PhraseEntry, PhraseTable};
use crate::translator::{TranslateError, Translator};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared, read-only server state
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub table: &'static PhraseTable,
    /// Fixed seed for every request's RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            table: PhraseTable::global(),
            seed,
        }
    }

    fn request_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Body of `POST /translate`
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct PhrasesBody<'a> {
    pub phrases: &'a [PhraseEntry],
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate))
        .route("/phrases", get(phrases))
        .with_state(Arc::new(state))
}

/// Serve until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!(%local_addr, seeded = state.seed.is_some(), "Serving meeting translator");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn index() -> Response {
    HttpResponse::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(INDEX_HTML))
        .expect("valid HTTP response")
}

async fn translate(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response, StatusCode> {
    let request: TranslateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "Rejected /translate body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body");
        }
    };

    let text = request.text.unwrap_or_default();
    let mut rng = state.request_rng();
    match Translator::new(state.table).translate(&text, &mut rng) {
        Ok(translation) => build_response(StatusCode::OK, &translation),
        Err(err @ TranslateError::EmptyText) => {
            warn!("Rejected /translate request: {}", err);
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

async fn phrases(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    info!(count = state.table.len(), "Listing phrases");
    build_response(
        StatusCode::OK,
        &PhrasesBody {
            phrases: state.table.entries(),
        },
    )
}

fn error_response(status: StatusCode, message: &str) -> Result<Response, StatusCode> {
    build_response(
        status,
        &ErrorBody {
            error: message.to_string(),
        },
    )
}

fn build_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response, StatusCode> {
    let bytes = serde_json::to_vec(payload).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(HttpResponse::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(bytes))
        .expect("valid HTTP response"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_defaults() {
        let request: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());

        let request: TranslateRequest = serde_json::from_str(r#"{"text": "Noted."}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("Noted."));

        assert!(serde_json::from_str::<TranslateRequest>(r#"{"text": 5}"#).is_err());
    }

    #[test]
    fn test_seeded_state_repeats_rng() {
        use rand::Rng;
        let state = AppState::new(Some(11));
        let a: u64 = state.request_rng().gen();
        let b: u64 = state.request_rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_response_sets_json_content_type() {
        let response = error_response(StatusCode::BAD_REQUEST, "No text provided").unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_index_page_is_html() {
        assert!(INDEX_HTML.contains("/translate"));
    }
}
