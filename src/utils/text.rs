pub const DESCRIPTION_LIMIT: usize = 150;

/// Display description: truncated to 150 characters with a trailing ellipsis,
/// or a fixed fallback when the backend sent nothing.
pub fn truncate_description(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => {
            if text.chars().count() > DESCRIPTION_LIMIT {
                let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
                format!("{}...", cut)
            } else {
                text.to_string()
            }
        }
        _ => "No description available.".to_string(),
    }
}

/// The year is the first `-`-delimited token of the published date.
pub fn published_year(published_date: Option<&str>) -> String {
    match published_date {
        Some(date) if !date.is_empty() => date.split('-').next().unwrap_or(date).to_string(),
        _ => "Unknown".to_string(),
    }
}

/// en-US style thousands grouping, e.g. 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Escapes single quotes so a JSON payload survives embedding inside a
/// single-quoted HTML attribute value.
pub fn escape_attribute_payload(json: &str) -> String {
    json.replace('\'', "&#39;")
}

/// Escapes single quotes for embedding inside a single-quoted inline
/// handler argument.
pub fn escape_inline_argument(text: &str) -> String {
    text.replace('\'', "\\'")
}
