use crate::models::book::BookRecord;
use crate::utils::text::{
    escape_attribute_payload, escape_inline_argument, group_thousands, published_year,
    truncate_description,
};

pub const PLACEHOLDER_COVER: &str =
    "https://via.placeholder.com/128x192/cccccc/666666?text=No+Cover";
pub const PLACEHOLDER_COVER_SMALL: &str =
    "https://via.placeholder.com/80x120/cccccc/666666?text=No+Cover";

fn rating_label(average_rating: Option<f64>) -> String {
    match average_rating {
        Some(rating) if rating != 0.0 => format!("⭐ {}/5", rating),
        _ => "No rating".to_string(),
    }
}

fn rating_count_label(ratings_count: Option<u64>) -> String {
    match ratings_count {
        Some(count) if count != 0 => format!("({} reviews)", group_thousands(count)),
        _ => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Renders one book into its display card. Pure: same record and rank always
/// produce the same markup, and missing optional fields degrade to fixed
/// defaults instead of failing.
pub fn render_card(book: &BookRecord, rank: usize) -> String {
    let thumbnail = non_empty(book.thumbnail.as_deref()).unwrap_or(PLACEHOLDER_COVER);
    let author = non_empty(book.author_string.as_deref()).unwrap_or("Unknown Author");
    let payload = escape_attribute_payload(&serde_json::to_string(book).unwrap_or_default());

    let mut card = String::new();
    card.push_str("<div class=\"book-card\">\n");
    card.push_str(&format!("  <div class=\"book-rank\">#{}</div>\n", rank));
    card.push_str("  <div class=\"book-image\">\n");
    card.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
        thumbnail, book.title
    ));
    card.push_str("  </div>\n");
    card.push_str("  <div class=\"book-info\">\n");
    card.push_str(&format!(
        "    <h3 class=\"book-title\">{}</h3>\n",
        book.title
    ));
    card.push_str(&format!("    <p class=\"book-author\">by {}</p>\n", author));
    card.push_str(&format!(
        "    <p class=\"book-published\">Published: {}</p>\n",
        published_year(book.published_date.as_deref())
    ));
    card.push_str("    <div class=\"book-rating\">\n");
    card.push_str(&format!(
        "      <span class=\"rating\">{}</span>\n",
        rating_label(book.average_rating)
    ));
    card.push_str(&format!(
        "      <span class=\"rating-count\">{}</span>\n",
        rating_count_label(book.ratings_count)
    ));
    card.push_str("    </div>\n");

    if let Some(pages) = book.page_count.filter(|&n| n != 0) {
        card.push_str(&format!(
            "    <p class=\"book-pages\">📄 {} pages</p>\n",
            pages
        ));
    }

    if !book.categories.is_empty() {
        card.push_str("    <div class=\"book-categories\">\n");
        for category in book.categories.iter().take(2) {
            card.push_str(&format!(
                "      <span class=\"category-tag\">{}</span>\n",
                category
            ));
        }
        card.push_str("    </div>\n");
    }

    card.push_str(&format!(
        "    <p class=\"book-description\">{}</p>\n",
        truncate_description(book.description.as_deref())
    ));

    if let Some(explanation) = non_empty(book.recommendation_explanation.as_deref()) {
        card.push_str(&format!(
            "    <div class=\"recommendation-reason\"><strong>Why this book:</strong> {}</div>\n",
            explanation
        ));
    }

    if !book.match_reasons.is_empty() {
        card.push_str("    <div class=\"match-reasons\">\n");
        for reason in &book.match_reasons {
            card.push_str(&format!(
                "      <span class=\"match-tag\">{}</span>\n",
                reason
            ));
        }
        card.push_str("    </div>\n");
    }

    card.push_str("    <div class=\"book-actions\">\n");
    if let Some(link) = non_empty(book.preview_link.as_deref()) {
        card.push_str(&format!(
            "      <a href=\"{}\" target=\"_blank\" class=\"btn-preview\">📖 Preview</a>\n",
            link
        ));
    }
    if let Some(link) = non_empty(book.info_link.as_deref()) {
        card.push_str(&format!(
            "      <a href=\"{}\" target=\"_blank\" class=\"btn-info\">ℹ️ More Info</a>\n",
            link
        ));
    }
    card.push_str(&format!(
        "      <button class=\"btn-add-library\" data-book-data='{}'>📚 Add to Library</button>\n",
        payload
    ));
    card.push_str("    </div>\n");
    card.push_str("  </div>\n");
    card.push_str("</div>\n");

    card
}

/// Renders a ranked list of cards, first book ranked #1.
pub fn render_book_list(books: &[BookRecord]) -> String {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| render_card(book, index + 1))
        .collect()
}

/// The compact card shown on the library page.
pub fn render_library_card(book: &BookRecord) -> String {
    let thumbnail = non_empty(book.thumbnail.as_deref()).unwrap_or(PLACEHOLDER_COVER_SMALL);
    let author = non_empty(book.author_string.as_deref()).unwrap_or("Unknown Author");

    let mut card = String::new();
    card.push_str("<div class=\"library-book\">\n");
    card.push_str("  <div class=\"book-image\">\n");
    card.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\">\n",
        thumbnail, book.title
    ));
    card.push_str("  </div>\n");
    card.push_str(&format!("  <h3>{}</h3>\n", book.title));
    card.push_str(&format!("  <p>by {}</p>\n", author));
    card.push_str(&format!(
        "  <p>Published: {}</p>\n",
        published_year(book.published_date.as_deref())
    ));
    card.push_str(&format!("  <p>{}</p>\n", rating_label(book.average_rating)));
    card.push_str(&format!(
        "  <button onclick='removeFromLibrary(\"{}\")'>🗑️ Remove from Library</button>\n",
        escape_inline_argument(&book.title)
    ));
    card.push_str("</div>\n");

    card
}

pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error-message\">\n  <h3>😕 Oops!</h3>\n  <p>{}</p>\n  <button onclick=\"location.reload()\" class=\"retry-btn\">Try Again</button>\n</div>\n",
        message
    )
}

pub fn render_empty_library() -> String {
    "<p>No books in your library. Add some books from the recommendations!</p>\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> BookRecord {
        BookRecord {
            author_string: Some("Frank Herbert".to_string()),
            published_date: Some("1965-08-01".to_string()),
            description: Some("A desert planet.".to_string()),
            average_rating: Some(4.5),
            ratings_count: Some(12345),
            page_count: Some(412),
            categories: vec!["Fiction".to_string(), "Science Fiction".to_string()],
            ..BookRecord::titled("Dune")
        }
    }

    #[test]
    fn renders_rating_labels() {
        let card = render_card(&sample_book(), 1);
        assert!(card.contains("<span class=\"rating\">⭐ 4.5/5</span>"));
        assert!(card.contains("<span class=\"rating-count\">(12,345 reviews)</span>"));
    }

    #[test]
    fn missing_or_zero_rating_shows_no_rating() {
        let mut book = sample_book();
        book.average_rating = None;
        book.ratings_count = None;
        let card = render_card(&book, 1);
        assert!(card.contains("<span class=\"rating\">No rating</span>"));
        assert!(card.contains("<span class=\"rating-count\"></span>"));

        book.average_rating = Some(0.0);
        let card = render_card(&book, 1);
        assert!(card.contains("<span class=\"rating\">No rating</span>"));
    }

    #[test]
    fn whole_number_rating_has_no_decimal_point() {
        let mut book = sample_book();
        book.average_rating = Some(4.0);
        assert!(render_card(&book, 1).contains("⭐ 4/5"));
    }

    #[test]
    fn missing_thumbnail_falls_back_to_placeholder() {
        let mut book = sample_book();
        book.thumbnail = None;
        assert!(render_card(&book, 1).contains(PLACEHOLDER_COVER));

        book.thumbnail = Some(String::new());
        assert!(render_card(&book, 1).contains(PLACEHOLDER_COVER));

        book.thumbnail = Some("https://covers.example/dune.jpg".to_string());
        let card = render_card(&book, 1);
        assert!(card.contains("https://covers.example/dune.jpg"));
        assert!(!card.contains(PLACEHOLDER_COVER));
    }

    #[test]
    fn at_most_two_categories_are_rendered() {
        let mut book = sample_book();
        book.categories = vec!["A".into(), "B".into(), "C".into()];
        let card = render_card(&book, 1);
        assert_eq!(card.matches("category-tag").count(), 2);
        assert!(card.contains(">A</span>"));
        assert!(card.contains(">B</span>"));
        assert!(!card.contains(">C</span>"));
    }

    #[test]
    fn empty_categories_omit_the_block() {
        let mut book = sample_book();
        book.categories = Vec::new();
        assert!(!render_card(&book, 1).contains("book-categories"));
    }

    #[test]
    fn long_description_is_truncated() {
        let mut book = sample_book();
        book.description = Some("x".repeat(200));
        let card = render_card(&book, 1);
        let expected = format!("{}...", "x".repeat(150));
        assert!(card.contains(&expected));
        assert!(!card.contains(&"x".repeat(151)));
    }

    #[test]
    fn missing_description_gets_fallback() {
        let mut book = sample_book();
        book.description = None;
        assert!(render_card(&book, 1).contains("No description available."));
    }

    #[test]
    fn missing_published_date_shows_unknown() {
        let mut book = sample_book();
        book.published_date = None;
        assert!(render_card(&book, 1).contains("Published: Unknown"));
    }

    #[test]
    fn optional_blocks_render_only_when_present() {
        let book = sample_book();
        let card = render_card(&book, 1);
        assert!(!card.contains("recommendation-reason"));
        assert!(!card.contains("match-reasons"));
        assert!(!card.contains("btn-preview"));
        assert!(!card.contains("btn-info"));

        let mut book = sample_book();
        book.recommendation_explanation = Some("Matches your taste.".to_string());
        book.match_reasons = vec!["epic scope".to_string()];
        book.preview_link = Some("https://books.example/preview".to_string());
        book.info_link = Some("https://books.example/info".to_string());
        let card = render_card(&book, 1);
        assert!(card.contains("Why this book:</strong> Matches your taste."));
        assert!(card.contains("<span class=\"match-tag\">epic scope</span>"));
        assert!(card.contains("btn-preview"));
        assert!(card.contains("btn-info"));
    }

    #[test]
    fn payload_escapes_single_quotes() {
        let book = BookRecord::titled("It's a Wonderful Book");
        let card = render_card(&book, 1);
        assert!(card.contains("It&#39;s a Wonderful Book"));
        assert!(!card.contains("data-book-data='{\"title\":\"It's"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let book = sample_book();
        assert_eq!(render_card(&book, 3), render_card(&book, 3));
    }

    #[test]
    fn book_list_ranks_from_one() {
        let books = vec![BookRecord::titled("A"), BookRecord::titled("B")];
        let page = render_book_list(&books);
        assert!(page.contains("<div class=\"book-rank\">#1</div>"));
        assert!(page.contains("<div class=\"book-rank\">#2</div>"));
        assert_eq!(page.matches("<div class=\"book-card\">").count(), 2);
    }

    #[test]
    fn library_card_escapes_remove_argument() {
        let book = BookRecord::titled("It's Here");
        let card = render_library_card(&book);
        assert!(card.contains("removeFromLibrary(\"It\\'s Here\")"));
    }

    #[test]
    fn error_markup_carries_the_message() {
        let markup = render_error("bad input");
        assert!(markup.contains("<p>bad input</p>"));
        assert!(markup.contains("Try Again"));
    }
}
