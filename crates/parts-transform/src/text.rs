//! Title and description builders.

/// Marker appended to text cut at its length cap.
pub const ELLIPSIS: &str = "...";
/// Separator between title components.
pub const TITLE_SEPARATOR: &str = " - ";
/// Separator between description sentences.
pub const SENTENCE_SEPARATOR: &str = ". ";
/// Title used when a row has no brand, part number or title.
pub const DEFAULT_TITLE: &str = "Auto Part";
/// Description used when a row has nothing to describe.
pub const DEFAULT_DESCRIPTION: &str = "Quality auto part for your vehicle.";

/// Cuts `text` to at most `max_chars` characters.
///
/// Text over the cap is shortened so that the result, ellipsis included, is
/// exactly `max_chars` characters long.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated.chars().take(max_chars).collect()
}

/// Source values a title is assembled from.
#[derive(Debug, Clone, Default)]
pub struct TitleParts {
    pub brand: Option<String>,
    pub part_number: Option<String>,
    pub title: Option<String>,
}

/// Joins brand, part number and title with [`TITLE_SEPARATOR`].
pub fn build_title(parts: &TitleParts, max_chars: usize) -> String {
    let components: Vec<&str> = [&parts.brand, &parts.part_number, &parts.title]
        .into_iter()
        .filter_map(|part| non_blank(part.as_deref()))
        .collect();
    if components.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    truncate_with_ellipsis(&components.join(TITLE_SEPARATOR), max_chars)
}

/// Source values a description is assembled from.
#[derive(Debug, Clone, Default)]
pub struct DescriptionParts {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub part_number: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub notes: Option<String>,
}

impl DescriptionParts {
    /// `Year Make Model` from whichever parts are present.
    fn fitment_line(&self) -> Option<String> {
        let present: Vec<&str> = [&self.year, &self.make, &self.model]
            .into_iter()
            .filter_map(|part| non_blank(part.as_deref()))
            .collect();
        if present.is_empty() {
            None
        } else {
            Some(present.join(" "))
        }
    }
}

/// Builds sentence-separated description text.
///
/// Components appear in a fixed order: title, brand, part number, category,
/// fitment, notes. Absent components are skipped.
pub fn build_description(parts: &DescriptionParts, max_chars: usize) -> String {
    let mut sentences = Vec::new();
    if let Some(title) = non_blank(parts.title.as_deref()) {
        sentences.push(title.to_string());
    }
    if let Some(brand) = non_blank(parts.brand.as_deref()) {
        sentences.push(format!("Brand: {brand}"));
    }
    if let Some(part_number) = non_blank(parts.part_number.as_deref()) {
        sentences.push(format!("Part Number: {part_number}"));
    }
    if let Some(category) = non_blank(parts.category.as_deref()) {
        sentences.push(format!("Category: {category}"));
    }
    if let Some(fits) = parts.fitment_line() {
        sentences.push(format!("Fits: {fits}"));
    }
    if let Some(notes) = non_blank(parts.notes.as_deref()) {
        sentences.push(notes.to_string());
    }
    if sentences.is_empty() {
        return DEFAULT_DESCRIPTION.to_string();
    }
    truncate_with_ellipsis(&sentences.join(SENTENCE_SEPARATOR), max_chars)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
