//! Blog feed filtering, search and pagination.
//!
//! Posts ship inside the catalog document and are filtered entirely on the
//! client. Category and search compose: the category narrows first, then the
//! query must match title, excerpt, content, author or any tag.

use serde::Deserialize;
use time::Date;
use time::macros::format_description;

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Categories offered by the filter bar, in display order.
pub const CATEGORIES: [(&str, &str); 5] = [
    (ALL_CATEGORIES, "All"),
    ("tutorials", "Tutorials"),
    ("updates", "Updates"),
    ("technology", "Technology"),
    ("news", "News"),
];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    /// Publication date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Link to the static post page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("blogs/posts/{}.html", self.id)
    }

    fn matches_query(&self, needle: &str) -> bool {
        [&self.title, &self.excerpt, &self.content, &self.author]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Active filter bar state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogFilter {
    pub category: String,
    pub query: String,
}

impl Default for BlogFilter {
    fn default() -> Self {
        Self { category: ALL_CATEGORIES.to_owned(), query: String::new() }
    }
}

impl BlogFilter {
    /// Posts passing both the category and search filters, in feed order.
    #[must_use]
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        let needle = self.query.trim().to_lowercase();
        posts
            .iter()
            .filter(|post| self.category == ALL_CATEGORIES || post.category == self.category)
            .filter(|post| needle.is_empty() || post.matches_query(&needle))
            .collect()
    }
}

/// Number of pages needed for `total` posts, never less than one.
#[must_use]
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Slice out 1-based `page`, clamped to the last page.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = page.clamp(1, page_count(items.len(), per_page));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Format a `YYYY-MM-DD` date as `"July 15, 2025"`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_post_date(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day]");
    match Date::parse(raw.trim(), format) {
        Ok(date) => format!("{} {}, {}", date.month(), date.day(), date.year()),
        Err(_) => raw.to_owned(),
    }
}
