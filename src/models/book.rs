use serde::{Deserialize, Serialize};

/// A book as returned by the recommendation backend. Everything except the
/// title is optional; the backend mixes fully enriched Google Books records
/// with sparse placeholder entries, so every other field must tolerate
/// absence. Title is the identity key for library membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_books_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rated_rank: Option<u32>,
}

impl BookRecord {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record() {
        let book: BookRecord = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();

        assert_eq!(book.title, "Dune");
        assert!(book.author_string.is_none());
        assert!(book.categories.is_empty());
        assert!(book.average_rating.is_none());
    }

    #[test]
    fn deserializes_enriched_record() {
        let json = r#"{
            "title": "Dune",
            "author_string": "Frank Herbert",
            "published_date": "1965-08-01",
            "average_rating": 4.5,
            "ratings_count": 12345,
            "categories": ["Fiction", "Science Fiction"],
            "preview_link": "https://books.example/preview"
        }"#;
        let book: BookRecord = serde_json::from_str(json).unwrap();

        assert_eq!(book.author_string.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.average_rating, Some(4.5));
        assert_eq!(book.ratings_count, Some(12345));
        assert_eq!(book.categories.len(), 2);
    }

    #[test]
    fn tolerates_unknown_fields() {
        // Older persisted entries or newer backend payloads may carry fields
        // this client does not know about.
        let book: BookRecord =
            serde_json::from_str(r#"{"title": "Dune", "isbn": "0441013597"}"#).unwrap();
        assert_eq!(book.title, "Dune");
    }
}
