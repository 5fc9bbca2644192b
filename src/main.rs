use std::fs;
use std::sync::Arc;
use tracing::{error, info};

use bookrec_client::commands::App;
use bookrec_client::models::book::BookRecord;
use bookrec_client::models::storage::FileBackend;
use bookrec_client::services::api::{HttpBookApi, RecommendationRequest, DEFAULT_BASE_URL};
use bookrec_client::services::library::LibraryStore;

fn usage() -> ! {
    info!("Usage: bookrec-client <command>");
    info!("  trending                    show trending books");
    info!("  top-rated                   show top-rated books");
    info!("  recommend <genre> [title..] recommendations for a genre, optionally seeded");
    info!("                              with a favorite book");
    info!("  library list                show your saved books");
    info!("  library add <book.json>     save a book from a JSON file");
    info!("  library remove <title>      remove a saved book by exact title");
    std::process::exit(1);
}

fn read_book(path: &str) -> Result<BookRecord, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("bookrec_client=info")
        .init();

    let base_url =
        std::env::var("BOOKREC_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let data_dir = std::env::var("BOOKREC_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

    let api = Arc::new(HttpBookApi::new(base_url));
    let library = LibraryStore::new(Arc::new(FileBackend::new(data_dir)));
    let app = App::new(api, library);

    let args: Vec<String> = std::env::args().collect();

    let output = match args.get(1).map(String::as_str) {
        Some("trending") => app.trending().await,
        Some("top-rated") => app.top_rated().await,
        Some("recommend") if args.len() > 2 => {
            let request = RecommendationRequest {
                genres: vec![args[2].clone()],
                favorite_books: args[3..].join(" "),
                favorite_authors: String::new(),
                additional_preferences: String::new(),
            };
            app.recommend(request).await
        }
        Some("library") => match args.get(2).map(String::as_str) {
            Some("list") | None => app.library_page().await,
            Some("add") if args.len() > 3 => {
                let book = match read_book(&args[3]) {
                    Ok(book) => book,
                    Err(e) => {
                        error!("Failed to read book from {}: {}", args[3], e);
                        std::process::exit(1);
                    }
                };
                match app.library_add(book).await {
                    Ok(notice) => notice,
                    Err(e) => {
                        error!("Failed to update library: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            Some("remove") if args.len() > 3 => {
                let title = args[3..].join(" ");
                match app.library_remove(&title).await {
                    Ok(notice) => notice,
                    Err(e) => {
                        error!("Failed to update library: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            _ => usage(),
        },
        _ => usage(),
    };

    println!("{}", output);
}
