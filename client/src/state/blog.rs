//! Blog page filter bar state.
//!
//! Category and search changes always return to the first page; the search
//! box is a draft until submitted (button or Enter).

use catalog::blog::{ALL_CATEGORIES, BlogFilter, BlogPost, page_count, paginate};

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogState {
    pub filter: BlogFilter,
    /// Text currently in the search box.
    pub draft: String,
    /// 1-based page number.
    pub page: usize,
}

impl Default for BlogState {
    fn default() -> Self {
        Self { filter: BlogFilter::default(), draft: String::new(), page: 1 }
    }
}

impl BlogState {
    pub fn select_category(&mut self, category: &str) {
        category.clone_into(&mut self.filter.category);
        self.page = 1;
    }

    pub fn submit_search(&mut self) {
        self.filter.query = self.draft.trim().to_owned();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    #[must_use]
    pub fn is_active_category(&self, category: &str) -> bool {
        self.filter.category == category
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filter.category != ALL_CATEGORIES || !self.filter.query.is_empty()
    }

    /// Posts for the current page plus the total page count.
    #[must_use]
    pub fn visible<'a>(&self, posts: &'a [BlogPost], per_page: usize) -> (Vec<&'a BlogPost>, usize) {
        let matching = self.filter.apply(posts);
        let pages = page_count(matching.len(), per_page);
        let page = paginate(&matching, self.page, per_page).to_vec();
        (page, pages)
    }
}
