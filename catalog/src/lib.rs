//! Shared data model for the showcase site's `apps.json` document.
//!
//! This crate owns the JSON representation that every page of the `client`
//! fetches once at load time: company branding, contact details, the app
//! catalog and the blog feed. It has no browser dependencies so the lookup
//! and filtering rules can be tested natively.

pub mod blog;

use serde::Deserialize;

use crate::blog::BlogPost;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Error returned by catalog parsing and lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document body was not a valid catalog.
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
    /// The page was opened without an `id` query parameter.
    #[error("App ID not specified in the URL")]
    MissingAppId,
    /// No app in the catalog carries the requested id.
    #[error("App with ID \"{0}\" not found")]
    AppNotFound(String),
}

/// Root of the data document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Catalog {
    pub company: Company,
    pub contact: Contact,
    #[serde(default)]
    pub apps: Vec<App>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
}

/// Company branding shown in the header, footer and intro.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social: Social,
}

/// Optional social network profile links.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Social {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl Social {
    /// Present networks in display order, as `(network, url)` pairs.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.facebook.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.filter(|u| !u.is_empty()).map(|u| (network, u)))
        .collect()
    }
}

/// A single catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub stores: Stores,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
    #[serde(default)]
    pub landscape_image: Option<String>,
}

/// Store listing URLs; absent stores are not rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stores {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub windows: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub youtube_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Storefront a listing link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    AppStore,
    GooglePlay,
    Windows,
}

impl StoreKind {
    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AppStore => "App Store",
            Self::GooglePlay => "Google Play",
            Self::Windows => "Windows",
        }
    }

    /// CSS modifier class for the store button.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::AppStore => "app-store",
            Self::GooglePlay => "google-play",
            Self::Windows => "windows-store",
        }
    }
}

impl Stores {
    /// Present store links in display order.
    #[must_use]
    pub fn links(&self) -> Vec<(StoreKind, &str)> {
        [
            (StoreKind::AppStore, self.ios.as_deref()),
            (StoreKind::GooglePlay, self.android.as_deref()),
            (StoreKind::Windows, self.windows.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.filter(|u| !u.is_empty()).map(|u| (kind, u)))
        .collect()
    }
}

impl App {
    /// Wide banner image, if one is set.
    #[must_use]
    pub fn landscape(&self) -> Option<&str> {
        self.landscape_image.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Privacy policy document URL, if the app publishes one.
    #[must_use]
    pub fn privacy_policy(&self) -> Option<&str> {
        self.privacy_policy_url.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl Catalog {
    /// Look up an app by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingAppId`] when `id` is absent or blank and
    /// [`CatalogError::AppNotFound`] when no app matches.
    pub fn find_app(&self, id: Option<&str>) -> Result<&App, CatalogError> {
        let id = id.map(str::trim).filter(|id| !id.is_empty()).ok_or(CatalogError::MissingAppId)?;
        self.apps
            .iter()
            .find(|app| app.id == id)
            .ok_or_else(|| CatalogError::AppNotFound(id.to_owned()))
    }

    /// Address used for mailto links: the company's, else the contact desk's.
    #[must_use]
    pub fn support_email(&self) -> Option<&str> {
        self.company
            .email
            .as_deref()
            .or(self.contact.email.as_deref())
            .filter(|e| !e.is_empty())
    }
}

/// Parse a catalog document from its JSON text.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the text is not a valid catalog.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(text)?)
}
