//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path. Absolute URLs and fragment-only links
/// pass through unchanged.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) || path.starts_with('#') {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about-us/") // -> "https://example.com/blog/about-us/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("mailto:")
        || path.starts_with("tel:")
}

/// Encode a URL component
pub fn encode_url(component: &str) -> String {
    percent_encoding::utf8_percent_encode(component, percent_encoding::NON_ALPHANUMERIC)
        .to_string()
}

/// Share link for one of the post page share buttons
pub fn share_url(network: &str, page_url: &str, title: &str) -> Option<String> {
    let url = encode_url(page_url);
    match network {
        "twitter" => Some(format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            url,
            encode_url(title)
        )),
        "facebook" => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            url
        )),
        "linkedin" => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            url
        )),
        _ => None,
    }
}
