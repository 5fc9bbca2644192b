use std::sync::Arc;
use tracing::{error, info};

use crate::models::book::BookRecord;
use crate::models::storage::StorageError;
use crate::services::api::{ApiError, BookApi, RecommendationRequest};
use crate::services::card;
use crate::services::library::{AddOutcome, LibraryStore, RemoveOutcome};

type Api = Arc<dyn BookApi + Send + Sync>;

/// Command handlers with their dependencies passed in explicitly. Each
/// network handler logs the busy state on entry and logs completion before
/// inspecting the result, on success and failure alike.
pub struct App {
    api: Api,
    library: LibraryStore,
}

impl App {
    pub fn new(api: Api, library: LibraryStore) -> Self {
        Self { api, library }
    }

    pub async fn recommend(&self, request: RecommendationRequest) -> String {
        info!("Loading recommendations...");
        let result = self.api.recommendations(&request).await;
        info!("Loading finished");

        match result {
            Ok(books) => {
                info!("Received {} recommendations", books.len());
                card::render_book_list(&books)
            }
            Err(ApiError::Api(message)) => {
                error!("Recommendation request rejected: {}", message);
                card::render_error(&message)
            }
            Err(ApiError::Empty) => {
                card::render_error("No recommendations found. Please try different preferences.")
            }
            Err(e) => {
                error!("Error fetching recommendations: {}", e);
                card::render_error("Failed to get recommendations. Please try again.")
            }
        }
    }

    pub async fn trending(&self) -> String {
        info!("Loading trending books...");
        let result = self.api.trending().await;
        info!("Loading finished");

        match result {
            Ok(books) => card::render_book_list(&books),
            Err(ApiError::Empty) => {
                card::render_error("No trending books found. Please try again later.")
            }
            Err(e) => {
                error!("Error fetching trending books: {}", e);
                card::render_error("Failed to load trending books. Please try again.")
            }
        }
    }

    pub async fn top_rated(&self) -> String {
        info!("Loading top-rated books...");
        let result = self.api.top_rated().await;
        info!("Loading finished");

        match result {
            Ok(books) => card::render_book_list(&books),
            Err(ApiError::Empty) => {
                card::render_error("No top-rated books found. Please try again later.")
            }
            Err(e) => {
                error!("Error fetching top-rated books: {}", e);
                card::render_error("Failed to load top-rated books. Please try again.")
            }
        }
    }

    pub async fn library_page(&self) -> String {
        let entries = self.library.list().await;
        if entries.is_empty() {
            return card::render_empty_library();
        }
        entries.iter().map(card::render_library_card).collect()
    }

    /// Duplicate titles are informational, not an error.
    pub async fn library_add(&self, book: BookRecord) -> Result<String, StorageError> {
        let title = book.title.clone();
        match self.library.add(book).await? {
            AddOutcome::Added => Ok(format!("Added \"{}\" to your library!", title)),
            AddOutcome::AlreadyExists => {
                Ok(format!("\"{}\" is already in your library!", title))
            }
        }
    }

    pub async fn library_remove(&self, title: &str) -> Result<String, StorageError> {
        match self.library.remove(title).await? {
            RemoveOutcome::Removed => Ok(format!("Removed \"{}\" from your library.", title)),
            RemoveOutcome::NotFound => Ok(format!("\"{}\" is not in your library.", title)),
        }
    }
}
