//! Catalog document load state shared by every route.

use catalog::Catalog;

use crate::net::api::FetchError;

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Shown when the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load app data. Please try again later.";

/// Extra hint for the common mistake of opening the site from disk.
pub const LOCAL_SERVER_HINT: &str =
    "Note: If you're viewing this page directly from your file system, please use a local web server.";

/// Fallback branding until the catalog arrives.
pub const DEFAULT_COMPANY_NAME: &str = "App Showcase";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteState {
    pub catalog: Option<Catalog>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self { catalog: None, loading: true, error: None }
    }
}

impl SiteState {
    /// Record the outcome of the one-shot catalog fetch.
    pub fn finish_load(&mut self, result: Result<Catalog, FetchError>) {
        self.loading = false;
        match result {
            Ok(catalog) => {
                self.catalog = Some(catalog);
                self.error = None;
            }
            Err(err) => {
                self.catalog = None;
                self.error = Some(err.to_string());
            }
        }
    }

    #[must_use]
    pub fn company_name(&self) -> String {
        self.catalog
            .as_ref()
            .map(|c| c.company.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_owned())
    }
}

/// Footer copyright line.
#[must_use]
pub fn copyright_line(year: i32, company: &str) -> String {
    format!("© {year} {company}. All rights reserved.")
}
