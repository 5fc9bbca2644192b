use serde::{Deserialize, Serialize};

use crate::models::book::BookRecord;

/// Envelope returned by `GET /api/trending` and `GET /api/top-rated`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub books: Vec<BookRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_found: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST /api/recommendations` answers with either a bare book array or a
/// wrapped envelope, and signals logical failures through an `error` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Books(Vec<BookRecord>),
    Envelope {
        #[serde(default)]
        success: bool,
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        recommendations: Vec<BookRecord>,
        #[serde(default)]
        total_found: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_book_list_envelope() {
        let json = r#"{"success": true, "books": [{"title": "X"}], "total_found": 1}"#;
        let envelope: BookListResponse = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.books.len(), 1);
        assert_eq!(envelope.total_found, Some(1));
    }

    #[test]
    fn parses_failed_book_list_envelope() {
        let json = r#"{"success": false, "error": "upstream down", "books": []}"#;
        let envelope: BookListResponse = serde_json::from_str(json).unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("upstream down"));
        assert!(envelope.books.is_empty());
    }

    #[test]
    fn parses_bare_recommendation_array() {
        let json = r#"[{"title": "A"}, {"title": "B"}]"#;
        match serde_json::from_str::<RecommendationResponse>(json).unwrap() {
            RecommendationResponse::Books(books) => assert_eq!(books.len(), 2),
            RecommendationResponse::Envelope { .. } => panic!("expected bare array"),
        }
    }

    #[test]
    fn parses_wrapped_recommendations() {
        let json = r#"{"success": true, "recommendations": [{"title": "A"}]}"#;
        match serde_json::from_str::<RecommendationResponse>(json).unwrap() {
            RecommendationResponse::Envelope {
                success,
                recommendations,
                ..
            } => {
                assert!(success);
                assert_eq!(recommendations.len(), 1);
            }
            RecommendationResponse::Books(_) => panic!("expected envelope"),
        }
    }

    #[test]
    fn parses_error_envelope() {
        let json = r#"{"error": "bad input", "recommendations": []}"#;
        match serde_json::from_str::<RecommendationResponse>(json).unwrap() {
            RecommendationResponse::Envelope { error, .. } => {
                assert_eq!(error.as_deref(), Some("bad input"));
            }
            RecommendationResponse::Books(_) => panic!("expected envelope"),
        }
    }
}
