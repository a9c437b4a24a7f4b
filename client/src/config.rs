//! Site configuration resolved at build time.
//!
//! The site is served as static files, so there is no runtime environment to
//! read. Values come from `option_env!` when the wasm bundle is built and fall
//! back to defaults when unset or blank.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DATA_URL: &str = "/data/apps.json";
pub const DEFAULT_POLICY_SELECTOR: &str = ".privacy-policy-content";
pub const DEFAULT_BLOG_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL of the catalog JSON document.
    pub data_url: String,
    /// Selector for the content region of a privacy policy document.
    pub policy_selector: String,
    /// Blog posts per page.
    pub blog_page_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_owned(),
            policy_selector: DEFAULT_POLICY_SELECTOR.to_owned(),
            blog_page_size: DEFAULT_BLOG_PAGE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `SHOWCASE_DATA_URL`: default `/data/apps.json`
    /// - `SHOWCASE_POLICY_SELECTOR`: default `.privacy-policy-content`
    /// - `SHOWCASE_BLOG_PAGE_SIZE`: default 6, minimum 1
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SHOWCASE_DATA_URL"),
            option_env!("SHOWCASE_POLICY_SELECTOR"),
            option_env!("SHOWCASE_BLOG_PAGE_SIZE"),
        )
    }

    fn from_values(data_url: Option<&str>, policy_selector: Option<&str>, blog_page_size: Option<&str>) -> Self {
        Self {
            data_url: non_blank(data_url, DEFAULT_DATA_URL),
            policy_selector: non_blank(policy_selector, DEFAULT_POLICY_SELECTOR),
            blog_page_size: parse_page_size(blog_page_size),
        }
    }
}

fn non_blank(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}

fn parse_page_size(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_BLOG_PAGE_SIZE)
}
