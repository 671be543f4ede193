//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Dimensions encoded in a placeholder reference such as
/// `/placeholder.svg?height=600&width=1200`
pub fn placeholder_dimensions(path: &str) -> Option<(u32, u32)> {
    let (_, query) = path.split_once('?')?;
    let mut width = None;
    let mut height = None;

    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("width", v)) => width = v.parse().ok(),
            Some(("height", v)) => height = v.parse().ok(),
            _ => {}
        }
    }

    Some((width?, height?))
}

/// Options for [`image_tag`]
#[derive(Debug, Clone, Default)]
pub struct ImageOptions<'a> {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub class: Option<&'a str>,
    /// Load eagerly, for above-the-fold images
    pub priority: bool,
}

/// Generate an image tag with explicit dimensions and lazy loading
///
/// # Examples
/// ```ignore
/// image_tag(&config, "/placeholder.svg?height=400&width=600", "Cover", &ImageOptions::default())
/// // -> <img src="/placeholder.svg?height=400&width=600" alt="Cover" width="600" height="400" loading="lazy" decoding="async">
/// ```
pub fn image_tag(config: &SiteConfig, path: &str, alt: &str, options: &ImageOptions) -> String {
    let src = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let (width, height) = match (options.width, options.height) {
        (Some(w), Some(h)) => (Some(w), Some(h)),
        _ => placeholder_dimensions(path)
            .map(|(w, h)| (Some(w), Some(h)))
            .unwrap_or((options.width, options.height)),
    };

    let mut tag = format!(r#"<img src="{}" alt="{}""#, html_escape(&src), html_escape(alt));
    if let Some(w) = width {
        tag.push_str(&format!(r#" width="{}""#, w));
    }
    if let Some(h) = height {
        tag.push_str(&format!(r#" height="{}""#, h));
    }
    if let Some(class) = options.class {
        tag.push_str(&format!(r#" class="{}""#, class));
    }
    if options.priority {
        tag.push_str(r#" loading="eager" fetchpriority="high""#);
    } else {
        tag.push_str(r#" loading="lazy""#);
    }
    tag.push_str(r#" decoding="async">"#);
    tag
}

/// First letter of every word, used as the avatar fallback
///
/// # Examples
/// ```ignore
/// initials("Jane Doe") // -> "JD"
/// ```
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="techblog {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/".to_string();
        config
    }

    #[test]
    fn test_placeholder_dimensions() {
        assert_eq!(
            placeholder_dimensions("/placeholder.svg?height=600&width=1200"),
            Some((1200, 600))
        );
        assert_eq!(placeholder_dimensions("/images/cover.png"), None);
        assert_eq!(placeholder_dimensions("/placeholder.svg?height=600"), None);
    }

    #[test]
    fn test_image_tag_reads_placeholder_size() {
        let config = test_config();
        let tag = image_tag(
            &config,
            "/placeholder.svg?height=400&width=600",
            "Cover",
            &ImageOptions::default(),
        );
        assert!(tag.contains(r#"width="600""#));
        assert!(tag.contains(r#"height="400""#));
        assert!(tag.contains(r#"loading="lazy""#));
        assert!(tag.contains("&amp;width=600"));
    }

    #[test]
    fn test_image_tag_priority() {
        let config = test_config();
        let options = ImageOptions {
            priority: true,
            class: Some("hero"),
            ..Default::default()
        };
        let tag = image_tag(&config, "/hero.png", "Team working together", &options);
        assert!(tag.contains(r#"loading="eager""#));
        assert!(tag.contains(r#"class="hero""#));
        assert!(!tag.contains("width="));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Alice"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }
}
