use super::*;

fn post(id: &str, category: &str, title: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: title.to_owned(),
        excerpt: format!("Excerpt for {title}"),
        content: String::new(),
        image: String::new(),
        date: "2025-07-15".to_owned(),
        author: "Jane Smith".to_owned(),
        category: category.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

fn feed() -> Vec<BlogPost> {
    vec![
        post("getting-started", "tutorials", "Getting Started", &["beginner"]),
        post("release-2", "updates", "Version 2 Released", &["release"]),
        post("ai-trends", "technology", "AI Trends", &["Machine Learning"]),
        post("launch", "news", "We Launched", &[]),
    ]
}

fn ids(posts: &[&BlogPost]) -> Vec<String> {
    posts.iter().map(|p| p.id.clone()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_keeps_everything() {
    let posts = feed();
    assert_eq!(BlogFilter::default().apply(&posts).len(), 4);
}

#[test]
fn category_filter_narrows_feed() {
    let posts = feed();
    let filter = BlogFilter { category: "updates".to_owned(), query: String::new() };
    assert_eq!(ids(&filter.apply(&posts)), vec!["release-2"]);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let posts = feed();
    let filter = BlogFilter { category: ALL_CATEGORIES.to_owned(), query: "  GETTING ".to_owned() };
    assert_eq!(ids(&filter.apply(&posts)), vec!["getting-started"]);
}

#[test]
fn search_matches_tags_and_author() {
    let posts = feed();
    let by_tag = BlogFilter { category: ALL_CATEGORIES.to_owned(), query: "machine".to_owned() };
    assert_eq!(ids(&by_tag.apply(&posts)), vec!["ai-trends"]);
    let by_author = BlogFilter { category: ALL_CATEGORIES.to_owned(), query: "smith".to_owned() };
    assert_eq!(by_author.apply(&posts).len(), 4);
}

#[test]
fn category_and_search_compose() {
    let posts = feed();
    let filter = BlogFilter { category: "news".to_owned(), query: "version".to_owned() };
    assert!(filter.apply(&posts).is_empty());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_never_zero() {
    assert_eq!(page_count(0, 6), 1);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(3, 0), 3);
}

#[test]
fn paginate_slices_requested_page() {
    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(paginate(&items, 1, 3), &[1, 2, 3]);
    assert_eq!(paginate(&items, 3, 3), &[7]);
}

#[test]
fn paginate_clamps_out_of_range_pages() {
    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(paginate(&items, 0, 3), &[1, 2, 3]);
    assert_eq!(paginate(&items, 99, 3), &[7]);
    let empty: Vec<u32> = Vec::new();
    assert!(paginate(&empty, 2, 3).is_empty());
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_post_date_uses_long_month() {
    assert_eq!(format_post_date("2025-07-15"), "July 15, 2025");
    assert_eq!(format_post_date("2024-01-03"), "January 3, 2024");
}

#[test]
fn format_post_date_passes_through_garbage() {
    assert_eq!(format_post_date("soon"), "soon");
}

#[test]
fn href_points_at_static_post_page() {
    assert_eq!(feed()[0].href(), "blogs/posts/getting-started.html");
}
