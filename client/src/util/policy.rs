//! Privacy policy extraction and sanitization.
//!
//! Policy documents are standalone HTML pages. Only the element matching the
//! configured selector is shown, and it is cleaned against an allowlist before
//! it is inserted with `inner_html`:
//! - known-dangerous elements are dropped with their content,
//! - unknown elements are unwrapped (their children are kept),
//! - attributes outside the allowlist, and script-bearing URLs, are removed.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

/// Error states of the policy viewer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// The app does not publish a policy.
    #[error("Privacy policy information is not available for this application.")]
    NotAvailable,
    /// The document has no element matching the content selector.
    #[error("Privacy policy content not found in the HTML file")]
    ContentMissing,
    /// The document could not be fetched or parsed.
    #[error("Failed to load privacy policy: {0}")]
    Load(String),
}

/// What to do with an element while sanitizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    Keep,
    Unwrap,
    Drop,
}

const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "article", "b", "blockquote", "br", "caption", "code", "dd", "div", "dl", "dt", "em", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "i", "img", "li", "ol", "p", "pre", "section", "small",
    "span", "strong", "sub", "sup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "u", "ul",
];

const DROPPED_TAGS: &[&str] = &[
    "base", "button", "embed", "form", "frame", "frameset", "iframe", "input", "link", "math", "meta",
    "noscript", "object", "script", "select", "style", "svg", "template", "textarea",
];

const ALLOWED_ATTRIBUTES: &[&str] = &["alt", "class", "colspan", "href", "id", "rel", "rowspan", "src", "title"];

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Sanitizer decision for an element by tag name (any case).
pub fn tag_action(tag: &str) -> TagAction {
    let tag = tag.to_ascii_lowercase();
    if ALLOWED_TAGS.contains(&tag.as_str()) {
        TagAction::Keep
    } else if DROPPED_TAGS.contains(&tag.as_str()) {
        TagAction::Drop
    } else {
        TagAction::Unwrap
    }
}

/// Whether an attribute survives sanitization.
pub fn is_allowed_attribute(name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if !ALLOWED_ATTRIBUTES.contains(&name.as_str()) {
        return false;
    }
    if name == "href" || name == "src" {
        return is_safe_url(value);
    }
    true
}

/// Rejects URLs whose scheme can execute script, ignoring embedded whitespace.
pub fn is_safe_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !BLOCKED_SCHEMES.iter().any(|scheme| compact.starts_with(scheme))
}

/// Parse `html`, select the policy region and return its sanitized markup.
///
/// # Errors
///
/// Returns [`PolicyError::ContentMissing`] when nothing matches `selector` and
/// [`PolicyError::Load`] when the browser cannot parse the document.
#[cfg(feature = "csr")]
pub fn extract_policy(html: &str, selector: &str) -> Result<String, PolicyError> {
    use web_sys::{DomParser, SupportedType};

    let parse_failed = |_| PolicyError::Load("could not parse policy document".to_owned());
    let parser = DomParser::new().map_err(parse_failed)?;
    let doc = parser.parse_from_string(html, SupportedType::TextHtml).map_err(parse_failed)?;
    let region = doc
        .query_selector(selector)
        .map_err(|_| PolicyError::Load(format!("invalid policy selector: {selector}")))?
        .ok_or(PolicyError::ContentMissing)?;
    sanitize_children(&region);
    Ok(region.inner_html())
}

#[cfg(feature = "csr")]
fn sanitize_children(parent: &web_sys::Element) {
    let children = parent.children();
    let snapshot: Vec<web_sys::Element> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    for child in snapshot {
        match tag_action(&child.tag_name()) {
            TagAction::Drop => child.remove(),
            TagAction::Keep => {
                strip_attributes(&child);
                sanitize_children(&child);
            }
            TagAction::Unwrap => {
                sanitize_children(&child);
                unwrap_element(parent, &child);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn strip_attributes(el: &web_sys::Element) {
    let names = el.get_attribute_names();
    for name in names.iter().filter_map(|n| n.as_string()) {
        let value = el.get_attribute(&name).unwrap_or_default();
        if !is_allowed_attribute(&name, &value) && el.remove_attribute(&name).is_err() {
            log::debug!("policy sanitizer could not remove attribute {name}");
        }
    }
}

#[cfg(feature = "csr")]
fn unwrap_element(parent: &web_sys::Element, child: &web_sys::Element) {
    let before: &web_sys::Node = child;
    while let Some(node) = child.first_child() {
        if parent.insert_before(&node, Some(before)).is_err() {
            break;
        }
    }
    child.remove();
}
