use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::models::book::BookRecord;
use crate::models::responses::{BookListResponse, RecommendationResponse};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or undecodable body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response from the backend.
    #[error("server returned status {0}")]
    Status(StatusCode),
    /// Logical error reported by the backend, surfaced verbatim.
    #[error("{0}")]
    Api(String),
    /// Well-formed response without a usable book list.
    #[error("response contained no books")]
    Empty,
}

/// Preferences sent to `POST /api/recommendations`. Field names follow the
/// backend's camelCase contract.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub genres: Vec<String>,
    pub favorite_books: String,
    pub favorite_authors: String,
    pub additional_preferences: String,
}

#[async_trait]
pub trait BookApi {
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<BookRecord>, ApiError>;
    async fn trending(&self) -> Result<Vec<BookRecord>, ApiError>;
    async fn top_rated(&self) -> Result<Vec<BookRecord>, ApiError>;
}

pub struct HttpBookApi {
    client: Client,
    base_url: String,
}

impl HttpBookApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_book_list(&self, path: &str) -> Result<Vec<BookRecord>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        info!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            error!("{} returned status {}", path, response.status());
            return Err(ApiError::Status(response.status()));
        }

        let envelope: BookListResponse = response.json().await?;
        usable_books(envelope)
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<BookRecord>, ApiError> {
        let url = format!("{}/api/recommendations", self.base_url);
        info!("Requesting recommendations from {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            error!("/api/recommendations returned status {}", response.status());
            return Err(ApiError::Status(response.status()));
        }

        let parsed: RecommendationResponse = response.json().await?;
        recommended_books(parsed)
    }

    async fn trending(&self) -> Result<Vec<BookRecord>, ApiError> {
        self.fetch_book_list("/api/trending").await
    }

    async fn top_rated(&self) -> Result<Vec<BookRecord>, ApiError> {
        self.fetch_book_list("/api/top-rated").await
    }
}

/// A trending/top-rated envelope is usable only with an explicit success flag
/// and a non-empty book list.
fn usable_books(envelope: BookListResponse) -> Result<Vec<BookRecord>, ApiError> {
    if !envelope.success || envelope.books.is_empty() {
        return Err(ApiError::Empty);
    }
    Ok(envelope.books)
}

/// An `error` field short-circuits regardless of the rest of the payload;
/// otherwise the book list (wrapped or bare) must be non-empty.
fn recommended_books(response: RecommendationResponse) -> Result<Vec<BookRecord>, ApiError> {
    match response {
        RecommendationResponse::Books(books) => {
            if books.is_empty() {
                Err(ApiError::Empty)
            } else {
                Ok(books)
            }
        }
        RecommendationResponse::Envelope {
            error: Some(message),
            ..
        } => Err(ApiError::Api(message)),
        RecommendationResponse::Envelope {
            recommendations, ..
        } => {
            if recommendations.is_empty() {
                Err(ApiError::Empty)
            } else {
                Ok(recommendations)
            }
        }
    }
}
